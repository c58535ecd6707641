/// Easing curves used by gallery transitions.
///
/// `PowerN` follows the usual animation-library naming: power2 is cubic,
/// power3 quartic, power4 quintic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3InOut,
    Power4Out,
    Power4InOut,
}

impl Ease {
    /// Map linear progress `t` in [0, 1] onto eased progress.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => ease_out(t, 3),
            Ease::Power3InOut => ease_in_out(t, 4),
            Ease::Power4Out => ease_out(t, 5),
            Ease::Power4InOut => ease_in_out(t, 5),
        }
    }
}

#[inline]
fn ease_out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

#[inline]
fn ease_in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(power)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powi(power)
    }
}
