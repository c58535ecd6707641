// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_effect_constants_are_consistent() {
    // Flip must reach zero before a card stops reacting.
    assert!(EFFECT_FALLOFF > 0.0);
    assert!(EFFECT_FALLOFF < SENSITIVITY);

    // Damping fraction in (0, 1]
    assert!(LERP_FACTOR > 0.0 && LERP_FACTOR <= 1.0);

    assert!(CARD_MOVE_AMOUNT >= 0.0);
    assert!(FLIP_SCALE_GAIN >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_scale_breakpoints_ascend() {
    let [(w0, s0), (w1, s1)] = IDLE_SCALE_BREAKPOINTS;
    assert!(w0 < w1);
    assert!(s0 < s1 && s1 < IDLE_SCALE_WIDE);
    // Mobile cut-off sits between the two breakpoints.
    assert!(MOBILE_MAX_WIDTH > w0 && MOBILE_MAX_WIDTH < w1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn transition_timings_are_positive() {
    for secs in [
        FOCUS_ENTER_SECS,
        FOCUS_ROTATE_SECS,
        CARD_SETTLE_SECS,
        PARALLAX_SETTLE_SECS,
        RESET_SECS,
        AFFORDANCE_FADE_SECS,
        TITLE_IN_SECS,
        TITLE_SWAP_OUT_SECS,
        TITLE_RESET_OUT_SECS,
        INTRO_FADE_SECS,
        INTRO_LINE_SECS,
        INTRO_CIRCLE_SECS,
    ] {
        assert!(secs > 0.0);
    }
    // The line step overlaps the fade but never starts before it.
    assert!(INTRO_LINE_OVERLAP < INTRO_FADE_SECS);
    assert!(MAX_FRAME_SECS > 0.0 && MAX_FRAME_SECS < FOCUS_ROTATE_SECS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn title_offsets_straddle_the_baseline() {
    assert!(TITLE_WORD_BELOW > 0.0);
    assert!(TITLE_WORD_ABOVE < 0.0);
}

#[test]
fn collection_fills_every_slot() {
    assert_eq!(COLLECTION.len(), IMAGE_COUNT);
    for (i, (src, title)) in COLLECTION.iter().enumerate() {
        assert!(src.ends_with(&format!("img{}.jpeg", i + 1)));
        assert_eq!(*title, format!("Image {}", i + 1));
    }
}
