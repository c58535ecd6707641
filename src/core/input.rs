use glam::{Vec2, Vec3};

/// Pointer-driven target for a single card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTarget {
    pub offset: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

/// Shape of the pointer proximity effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityParams {
    pub sensitivity: f32,
    pub effect_falloff: f32,
    pub move_amount: f32,
    pub flip_rotation_deg: f32,
    pub flip_scale_gain: f32,
}

/// How strongly a card flips for a pointer `distance` px from its center: 1 on
/// top of it, falling linearly to 0 at `effect_falloff`.
#[inline]
pub fn flip_factor(distance: f32, effect_falloff: f32) -> f32 {
    (1.0 - distance / effect_falloff).max(0.0)
}

/// Targets for a card whose center is `distance` px from the pointer, or
/// `None` when the card is out of range and should relax to rest.
pub fn card_target(distance: f32, angle: f32, params: &ProximityParams) -> Option<CardTarget> {
    if !(distance < params.sensitivity) {
        return None;
    }
    let flip = flip_factor(distance, params.effect_falloff);
    let push = params.move_amount * flip;
    Some(CardTarget {
        offset: Vec2::new(push * angle.cos(), push * angle.sin()),
        rotation: params.flip_rotation_deg * flip,
        scale: 1.0 + params.flip_scale_gain * flip,
    })
}

/// Pointer offset from the viewport center, each axis in [-1, 1] at the edges.
#[inline]
pub fn pointer_ratio(pointer: Vec2, viewport: Vec2) -> Vec2 {
    let center = viewport * 0.5;
    if center.x <= 0.0 || center.y <= 0.0 {
        return Vec2::ZERO;
    }
    (pointer - center) / center
}

/// Container tilt (rotateX, rotateY, rotate) in degrees for a pointer position.
pub fn parallax_target(pointer: Vec2, viewport: Vec2, tilt_deg: f32, twist_deg: f32) -> Vec3 {
    let r = pointer_ratio(pointer, viewport);
    Vec3::new(-r.y * tilt_deg, r.x * tilt_deg, (r.x + r.y) * twist_deg)
}

#[inline]
pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
