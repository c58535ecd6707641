use super::constants::*;
use super::scroll::ScrollZoomPose;

/// Invalid gallery configuration detected at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GalleryError {
    #[error("gallery needs at least one item")]
    NoItems,
    #[error("gallery needs at least one content entry to cycle through")]
    NoContent,
    #[error("lerp factor {0} is outside (0, 1]")]
    LerpFactor(f32),
    #[error("effect falloff must be positive, got {0}")]
    EffectFalloff(f32),
    #[error("radius must be finite and non-negative, got {0}")]
    Radius(f32),
}

/// Responsive idle scale table: the first breakpoint whose width exceeds the
/// viewport wins, otherwise `wide` applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleScaleTable {
    pub breakpoints: [(f32, f32); 2],
    pub wide: f32,
}

impl IdleScaleTable {
    pub fn scale_for_width(&self, viewport_width: f32) -> f32 {
        self.breakpoints
            .iter()
            .find(|(max_width, _)| viewport_width < *max_width)
            .map(|(_, scale)| *scale)
            .unwrap_or(self.wide)
    }
}

impl Default for IdleScaleTable {
    fn default() -> Self {
        Self {
            breakpoints: IDLE_SCALE_BREAKPOINTS,
            wide: IDLE_SCALE_WIDE,
        }
    }
}

/// Per-session gallery parameters.
///
/// Fields:
/// - `image_count`: number of cards placed around the circle
/// - `radius`: distance in px from the gallery center to each card center
/// - `sensitivity`: pointer distance (px) inside which a card reacts
/// - `effect_falloff`: pointer distance (px) at which the flip factor reaches 0
/// - `card_move_amount`: outward push (px) at full flip
/// - `lerp_factor`: per-frame damping fraction in (0, 1]
/// - `is_mobile`: derived from the viewport width; disables pointer effects
/// - `front_angle`: slot angle (radians) a focused card is rotated to
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub image_count: usize,
    pub radius: f32,
    pub sensitivity: f32,
    pub effect_falloff: f32,
    pub card_move_amount: f32,
    pub lerp_factor: f32,
    pub is_mobile: bool,
    pub mobile_max_width: f32,
    pub front_angle: f32,
    pub idle_scales: IdleScaleTable,
    pub parallax_tilt_deg: f32,
    pub parallax_twist_deg: f32,
    pub focus_zoom_scale: f32,
    pub focus_zoom_y: f32,
    pub scroll_zoom: ScrollZoomPose,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_count: IMAGE_COUNT,
            radius: RADIUS,
            sensitivity: SENSITIVITY,
            effect_falloff: EFFECT_FALLOFF,
            card_move_amount: CARD_MOVE_AMOUNT,
            lerp_factor: LERP_FACTOR,
            is_mobile: false,
            mobile_max_width: MOBILE_MAX_WIDTH,
            front_angle: FRONT_ANGLE,
            idle_scales: IdleScaleTable::default(),
            parallax_tilt_deg: PARALLAX_TILT_DEG,
            parallax_twist_deg: PARALLAX_TWIST_DEG,
            focus_zoom_scale: FOCUS_ZOOM_SCALE,
            focus_zoom_y: FOCUS_ZOOM_Y,
            scroll_zoom: ScrollZoomPose::default(),
        }
    }
}

impl Config {
    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.image_count == 0 {
            return Err(GalleryError::NoItems);
        }
        if !(self.lerp_factor > 0.0 && self.lerp_factor <= 1.0) {
            return Err(GalleryError::LerpFactor(self.lerp_factor));
        }
        if !(self.effect_falloff > 0.0) {
            return Err(GalleryError::EffectFalloff(self.effect_falloff));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GalleryError::Radius(self.radius));
        }
        Ok(())
    }

    /// Re-derive the viewport-dependent flag.
    pub fn update_for_width(&mut self, viewport_width: f32) {
        self.is_mobile = viewport_width < self.mobile_max_width;
    }

    #[inline]
    pub fn idle_scale(&self, viewport_width: f32) -> f32 {
        self.idle_scales.scale_for_width(viewport_width)
    }
}
