use std::f32::consts::PI;

// Gallery layout, pointer-effect and transition tuning constants.
// Layout-related values seed `Config::default()`; transition timings are
// read directly and fixed per session.

// Layout
pub const IMAGE_COUNT: usize = 13;
pub const RADIUS: f32 = 275.0; // px from gallery center to card center
pub const INTRO_LINE_SPACING: f32 = 100.0; // px between cards in the intro line

// Pointer proximity effect
pub const SENSITIVITY: f32 = 500.0; // px; cards further than this stay at rest
pub const EFFECT_FALLOFF: f32 = 250.0; // px; flip reaches zero at this distance
pub const CARD_MOVE_AMOUNT: f32 = 50.0; // px outward push at full flip
pub const FLIP_ROTATION_DEG: f32 = 180.0;
pub const FLIP_SCALE_GAIN: f32 = 0.3;
pub const LERP_FACTOR: f32 = 0.15; // fraction of remaining distance covered per frame

// Container parallax
pub const PARALLAX_TILT_DEG: f32 = 15.0; // rotateX/rotateY at the viewport edge
pub const PARALLAX_TWIST_DEG: f32 = 5.0; // in-plane rotation per unit of (px + py)

// Responsive behavior
pub const MOBILE_MAX_WIDTH: f32 = 1000.0; // viewports narrower than this disable pointer effects
pub const IDLE_SCALE_BREAKPOINTS: [(f32, f32); 2] = [(768.0, 0.6), (1200.0, 0.8)];
pub const IDLE_SCALE_WIDE: f32 = 1.0;

// Focus / preview
pub const FRONT_ANGLE: f32 = PI * 1.5; // slot angle that ends up facing the viewer
pub const FOCUS_ZOOM_SCALE: f32 = 5.0;
pub const FOCUS_ZOOM_Y: f32 = 1300.0;
pub const FOCUS_ENTER_SECS: f32 = 2.0;
pub const FOCUS_ROTATE_SECS: f32 = 1.25;
pub const CARD_SETTLE_SECS: f32 = 1.25;
pub const PARALLAX_SETTLE_SECS: f32 = 0.5;
pub const RESET_SECS: f32 = 2.5;

// "Click to view" affordance
pub const AFFORDANCE_FADE_SECS: f32 = 0.5;
pub const AFFORDANCE_DROP_PX: f32 = 50.0;

// Title words; offsets are percent of the word's own height
pub const TITLE_WORD_BELOW: f32 = 125.0;
pub const TITLE_WORD_ABOVE: f32 = -125.0;
pub const TITLE_IN_SECS: f32 = 0.75;
pub const TITLE_IN_STAGGER: f32 = 0.1;
pub const TITLE_FIRST_ENTRY_DELAY: f32 = 1.25;
pub const TITLE_SWAP_OUT_SECS: f32 = 0.5;
pub const TITLE_SWAP_OUT_STAGGER: f32 = 0.05;
pub const TITLE_RESET_OUT_SECS: f32 = 0.75;
pub const TITLE_RESET_OUT_DELAY: f32 = 0.5;
pub const TITLE_RESET_OUT_STAGGER: f32 = 0.1;

// Intro sequence
pub const INTRO_SCATTER_SCALE: f32 = 0.5;
pub const INTRO_FADE_SECS: f32 = 0.5;
pub const INTRO_FADE_STAGGER: f32 = 0.05;
pub const INTRO_LINE_OVERLAP: f32 = 0.3; // line step starts this long before the fade ends
pub const INTRO_LINE_SECS: f32 = 1.0;
pub const INTRO_CIRCLE_SECS: f32 = 1.5;

// Scroll zoom pose reached at progress 1
pub const SCROLL_ZOOM_SCALE: f32 = 2.5;
pub const SCROLL_ZOOM_Y: f32 = 400.0;
pub const SCROLL_ZOOM_ROTATION_DEG: f32 = 90.0;
