use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Slot angle (radians) of card `index` out of `count` evenly spaced cards.
#[inline]
pub fn slot_angle(index: usize, count: usize) -> f32 {
    TAU * index as f32 / count.max(1) as f32
}

pub fn slot_angles(count: usize) -> Vec<f32> {
    (0..count).map(|i| slot_angle(i, count)).collect()
}

/// Resting position of a card on the circle, relative to the gallery center.
#[inline]
pub fn rest_position(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// In-plane rotation (degrees) that points a card away from the center.
#[inline]
pub fn slot_rotation_deg(angle: f32) -> f32 {
    angle.to_degrees() + 90.0
}

/// Position of card `index` on the horizontal line used during the intro.
#[inline]
pub fn line_position(index: usize, count: usize, spacing: f32) -> Vec2 {
    Vec2::new((index as f32 - count as f32 / 2.0) * spacing, 0.0)
}

/// Wrap an angle into (-π, π].
#[inline]
pub fn normalize_angle(radians: f32) -> f32 {
    let wrapped = radians.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Signed rotation (radians, in (-π, π]) that carries a slot currently at
/// `angle` onto `front`.
#[inline]
pub fn shortest_rotation(angle: f32, front: f32) -> f32 {
    normalize_angle(front - angle)
}
