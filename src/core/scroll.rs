use super::constants::{SCROLL_ZOOM_ROTATION_DEG, SCROLL_ZOOM_SCALE, SCROLL_ZOOM_Y};
use super::damping::lerp;

/// Gallery pose reached when scroll progress hits 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollZoomPose {
    pub scale: f32,
    pub y: f32,
    pub rotation_deg: f32,
}

impl Default for ScrollZoomPose {
    fn default() -> Self {
        Self {
            scale: SCROLL_ZOOM_SCALE,
            y: SCROLL_ZOOM_Y,
            rotation_deg: SCROLL_ZOOM_ROTATION_DEG,
        }
    }
}

impl ScrollZoomPose {
    /// Interpolated `(scale, y, rotation_deg)` at `progress`, starting from the
    /// idle gallery pose.
    pub fn at(&self, progress: f32, idle_scale: f32) -> (f32, f32, f32) {
        let p = progress.clamp(0.0, 1.0);
        (
            lerp(idle_scale, self.scale, p),
            lerp(0.0, self.y, p),
            lerp(0.0, self.rotation_deg, p),
        )
    }
}

/// Map how far the pinned region has scrolled past the viewport top onto [0, 1].
///
/// Returns `None` for a non-positive distance, which disables scroll zoom.
#[inline]
pub fn progress(scrolled_px: f32, distance_px: f32) -> Option<f32> {
    if !(distance_px > 0.0) || !scrolled_px.is_finite() {
        return None;
    }
    Some((scrolled_px / distance_px).clamp(0.0, 1.0))
}
