use glam::{Vec2, Vec3};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// A value that chases its target by a fixed fraction each step.
///
/// This is a first-order low-pass filter: the remaining distance shrinks by
/// `(1 - lerp)` per step and never overshoots for `lerp` in (0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damped {
    pub current: f32,
    pub target: f32,
}

impl Damped {
    pub const fn at(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn step(&mut self, lerp_factor: f32) {
        self.current += (self.target - self.current) * lerp_factor;
    }

    /// Jump both current and target to `value`.
    #[inline]
    pub fn snap(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        (self.target - self.current).abs()
    }
}

/// Per-card offset from its slot, driven by pointer proximity.
///
/// `x`/`y` are px offsets added to the slot position, `rotation` is the
/// rotateY flip in degrees and `scale` multiplies the card size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedTransform {
    pub x: Damped,
    pub y: Damped,
    pub rotation: Damped,
    pub scale: Damped,
}

impl Default for DampedTransform {
    fn default() -> Self {
        Self {
            x: Damped::at(0.0),
            y: Damped::at(0.0),
            rotation: Damped::at(0.0),
            scale: Damped::at(1.0),
        }
    }
}

impl DampedTransform {
    pub fn step(&mut self, lerp_factor: f32) {
        self.x.step(lerp_factor);
        self.y.step(lerp_factor);
        self.rotation.step(lerp_factor);
        self.scale.step(lerp_factor);
    }

    pub fn set_targets(&mut self, offset: Vec2, rotation: f32, scale: f32) {
        self.x.target = offset.x;
        self.y.target = offset.y;
        self.rotation.target = rotation;
        self.scale.target = scale;
    }

    /// Point every target back at rest; currents keep easing from where they are.
    pub fn release(&mut self) {
        self.set_targets(Vec2::ZERO, 0.0, 1.0);
    }

    pub fn snap_to_rest(&mut self) {
        *self = Self::default();
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.current, self.y.current)
    }

    pub fn is_at_rest(&self) -> bool {
        *self == Self::default()
    }
}

/// Whole-gallery tilt: `x`/`y` feed rotateX/rotateY, `z` the in-plane rotation (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxState {
    pub x: Damped,
    pub y: Damped,
    pub z: Damped,
}

impl Default for ParallaxState {
    fn default() -> Self {
        Self {
            x: Damped::at(0.0),
            y: Damped::at(0.0),
            z: Damped::at(0.0),
        }
    }
}

impl ParallaxState {
    pub fn step(&mut self, lerp_factor: f32) {
        self.x.step(lerp_factor);
        self.y.step(lerp_factor);
        self.z.step(lerp_factor);
    }

    pub fn set_targets(&mut self, tilt: Vec3) {
        self.x.target = tilt.x;
        self.y.target = tilt.y;
        self.z.target = tilt.z;
    }

    pub fn release(&mut self) {
        self.set_targets(Vec3::ZERO);
    }

    pub fn zero(&mut self) {
        *self = Self::default();
    }

    pub fn current(&self) -> Vec3 {
        Vec3::new(self.x.current, self.y.current, self.z.current)
    }
}
