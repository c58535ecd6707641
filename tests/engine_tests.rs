// Host-side tests for the gallery state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod damping {
        include!("../src/core/damping.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod engine {
        include!("../src/core/engine.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod title {
        include!("../src/core/title.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use crate::core::config::{Config, GalleryError};
use crate::core::engine::*;
use crate::core::constants::FRONT_ANGLE;
use crate::core::layout::{normalize_angle, rest_position};
use crate::core::title::TitlePhase;
use glam::Vec2;
use std::f32::consts::PI;

const DESKTOP: Vec2 = Vec2::new(1400.0, 900.0);

fn contents() -> Vec<ItemContent> {
    (1..=13)
        .map(|i| ItemContent {
            image_src: format!("./images/img{i}.jpeg"),
            title: format!("Image {i}"),
        })
        .collect()
}

fn engine_at(viewport: Vec2) -> GalleryEngine {
    GalleryEngine::new(Config::default(), &contents(), viewport).expect("valid config")
}

fn settle(e: &mut GalleryEngine, secs: f32) {
    let frames = (secs * 60.0).ceil() as usize;
    for _ in 0..frames {
        e.tick(1.0 / 60.0);
    }
}

fn centers(e: &GalleryEngine) -> Vec<Vec2> {
    e.items()
        .iter()
        .map(|it| Vec2::new(it.pose.x, it.pose.y))
        .collect()
}

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn new_lays_cards_on_the_circle() {
    let e = engine_at(DESKTOP);
    assert_eq!(e.items().len(), 13);
    assert_eq!(e.mode(), GalleryMode::Idle);
    assert!(!e.is_transitioning());
    assert!(!e.config().is_mobile);
    assert_eq!(e.gallery(), GalleryTransform::idle(1.0));
    for item in e.items() {
        let rest = rest_position(item.angle, 275.0);
        assert!(approx(item.pose.x, rest.x, 1e-3));
        assert!(approx(item.pose.y, rest.y, 1e-3));
        assert!(item.damped.is_at_rest());
    }
}

#[test]
fn content_cycles_when_fewer_entries_than_cards() {
    let short = &contents()[..3];
    let e = GalleryEngine::new(Config::default(), short, DESKTOP).expect("valid config");
    assert_eq!(e.items()[3].content.title, "Image 1");
    assert_eq!(e.items()[12].content.title, "Image 1");
    assert_eq!(e.items()[11].content.title, "Image 3");
}

#[test]
fn invalid_construction_is_rejected() {
    let no_items = Config {
        image_count: 0,
        ..Config::default()
    };
    assert_eq!(
        GalleryEngine::new(no_items, &contents(), DESKTOP).err(),
        Some(GalleryError::NoItems)
    );

    let bad_lerp = Config {
        lerp_factor: 0.0,
        ..Config::default()
    };
    assert_eq!(
        GalleryEngine::new(bad_lerp, &contents(), DESKTOP).err(),
        Some(GalleryError::LerpFactor(0.0))
    );

    let bad_falloff = Config {
        effect_falloff: -1.0,
        ..Config::default()
    };
    assert_eq!(
        GalleryEngine::new(bad_falloff, &contents(), DESKTOP).err(),
        Some(GalleryError::EffectFalloff(-1.0))
    );

    assert_eq!(
        GalleryEngine::new(Config::default(), &[], DESKTOP).err(),
        Some(GalleryError::NoContent)
    );
}

#[test]
fn pointer_move_sets_targets_only() {
    let mut e = engine_at(DESKTOP);
    let c = centers(&e);
    e.pointer_move(c[0], &c);

    let first = &e.items()[0].damped;
    assert_eq!(first.rotation.target, 180.0);
    assert!(approx(first.scale.target, 1.3, 1e-6));
    assert!(approx(first.x.target, 50.0, 1e-4));
    assert_eq!(first.rotation.current, 0.0);

    // The card across the circle is beyond the sensitivity radius.
    let opposite = &e.items()[6].damped;
    assert!(opposite.is_at_rest());

    assert!(e.parallax().x.target > 0.0);
    assert_eq!(e.container_tilt().x, 0.0);
}

#[test]
fn tick_damps_toward_targets() {
    let mut e = engine_at(DESKTOP);
    let c = centers(&e);
    e.pointer_move(c[0], &c);
    e.tick(1.0 / 60.0);
    let first = &e.items()[0];
    assert!(approx(first.damped.rotation.current, 27.0, 1e-4));
    assert!(approx(first.pose.rotation_y, 27.0, 1e-4));

    settle(&mut e, 2.0);
    assert!(approx(e.items()[0].damped.rotation.current, 180.0, 0.01));
}

#[test]
fn pointer_leave_relaxes_everything() {
    let mut e = engine_at(DESKTOP);
    let c = centers(&e);
    e.pointer_move(c[0], &c);
    settle(&mut e, 0.5);
    e.pointer_leave();
    assert_eq!(e.items()[0].damped.rotation.target, 0.0);
    assert_eq!(e.parallax().x.target, 0.0);
    settle(&mut e, 3.0);
    assert!(e.items()[0].damped.rotation.current.abs() < 0.01);
    assert!(e.container_tilt().length() < 0.01);
}

#[test]
fn narrow_viewport_ignores_pointer() {
    let mut e = engine_at(Vec2::new(800.0, 600.0));
    assert!(e.config().is_mobile);
    let c = centers(&e);
    e.pointer_move(c[0], &c);
    assert!(e.items().iter().all(|it| it.damped.is_at_rest()));
    assert_eq!(e.parallax().x.target, 0.0);
}

#[test]
fn focus_zooms_and_rotates_card_to_front() {
    let mut e = engine_at(DESKTOP);
    assert!(e.click_item(0));
    assert!(e.is_transitioning());
    assert_eq!(e.mode(), GalleryMode::Focused(0));

    // Second click while the transition runs is dropped.
    assert!(!e.click_item(1));

    settle(&mut e, 2.1);
    assert!(!e.is_transitioning());
    let g = e.gallery();
    assert!(approx(g.scale, 5.0, 1e-4));
    assert!(approx(g.y, 1300.0, 1e-2));
    assert!(approx(g.rotation, -90.0, 1e-3));
    assert!(e.affordance().opacity.abs() < 1e-6);
}

#[test]
fn focus_drops_pointer_offsets() {
    let mut e = engine_at(DESKTOP);
    let c = centers(&e);
    e.pointer_move(c[0], &c);
    settle(&mut e, 0.3);
    e.focus(0);
    assert!(e.items().iter().all(|it| it.damped.is_at_rest()));
    settle(&mut e, 2.1);
    let first = &e.items()[0].pose;
    let rest = rest_position(e.items()[0].angle, 275.0);
    assert!(approx(first.x, rest.x, 1e-3));
    assert!(approx(first.rotation_y, 0.0, 1e-3));
    assert!(approx(first.scale, 1.0, 1e-5));
    assert!(e.container_tilt().length() < 1e-4);
}

#[test]
fn focus_out_of_range_is_ignored() {
    let mut e = engine_at(DESKTOP);
    assert!(!e.focus(13));
    assert_eq!(e.mode(), GalleryMode::Idle);
    assert!(!e.is_transitioning());
}

#[test]
fn refocus_accumulates_from_current_rotation() {
    let mut e = engine_at(DESKTOP);
    e.focus(3);
    settle(&mut e, 2.5);
    let r3 = e.gallery().rotation;

    assert!(e.click_item(7));
    assert_eq!(e.mode(), GalleryMode::Focused(7));
    settle(&mut e, 1.5);
    let r7 = e.gallery().rotation;

    // The shortest path from card 7's slot to the front is added onto the
    // rotation card 3 left behind.
    let delta = normalize_angle(FRONT_ANGLE - e.items()[7].angle);
    assert!(delta > -PI && delta <= PI);
    assert!(approx(r7, r3 + delta.to_degrees(), 1e-2), "r3={r3} r7={r7}");
    assert!(approx(r3, normalize_angle(FRONT_ANGLE - e.items()[3].angle).to_degrees(), 1e-2));
    // Not a fresh absolute rotation.
    assert!(!approx(r7, delta.to_degrees(), 1.0));
    // Zoom is untouched by a re-focus.
    assert!(approx(e.gallery().scale, 5.0, 1e-4));
}

#[test]
fn reset_while_idle_is_a_noop() {
    let mut e = engine_at(DESKTOP);
    assert!(!e.reset());
    e.click_background();
    e.cancel();
    assert_eq!(e.mode(), GalleryMode::Idle);
    assert!(!e.is_transitioning());
    assert!(e.tweens().is_empty());
}

#[test]
fn reset_returns_to_idle_pose() {
    let mut e = engine_at(DESKTOP);
    e.focus(5);
    settle(&mut e, 2.5);

    e.click_background();
    assert!(e.is_transitioning());
    assert_eq!(e.title().phase(), TitlePhase::Leaving);
    // Still Focused until the zoom-out lands.
    assert_eq!(e.mode(), GalleryMode::Focused(5));

    settle(&mut e, 2.6);
    assert_eq!(e.mode(), GalleryMode::Idle);
    assert!(!e.is_transitioning());
    let g = e.gallery();
    assert!(approx(g.scale, 1.0, 1e-5));
    assert!(approx(g.rotation, 0.0, 1e-4));
    assert!(approx(g.y, 0.0, 1e-3));
    assert_eq!(e.title().phase(), TitlePhase::Hidden);

    settle(&mut e, 0.6);
    assert!(approx(e.affordance().opacity, 1.0, 1e-6));
    assert!(approx(e.affordance().y, 0.0, 1e-4));
}

#[test]
fn escape_cancels_focus() {
    let mut e = engine_at(DESKTOP);
    e.focus(2);
    // Ignored while the focus transition runs.
    e.cancel();
    assert!(e.tweens().is_animating(crate::core::tween::Prop::GalleryScale));
    settle(&mut e, 2.5);
    e.cancel();
    assert!(e.is_transitioning());
    settle(&mut e, 2.6);
    assert_eq!(e.mode(), GalleryMode::Idle);
}

#[test]
fn click_item_consumes_only_when_focusing() {
    let mut e = engine_at(DESKTOP);
    assert!(e.click_item(4));
    assert!(!e.click_item(4));
    settle(&mut e, 2.5);
    // Clicking a card while focused re-focuses instead of resetting.
    assert!(e.click_item(9));
    assert_eq!(e.mode(), GalleryMode::Focused(9));
}

#[test]
fn title_swaps_sequentially() {
    let mut e = engine_at(DESKTOP);
    e.focus(0);
    assert_eq!(e.title().words(), ["Image", "1"]);
    assert_eq!(e.title().phase(), TitlePhase::Entering);
    // Held below the line until the first-entry delay passes.
    settle(&mut e, 1.0);
    assert!(approx(e.title().offset(0), 125.0, 1e-4));

    settle(&mut e, 1.5);
    assert_eq!(e.title().phase(), TitlePhase::Shown);
    assert!(approx(e.title().offset(1), 0.0, 1e-4));

    e.focus(1);
    assert_eq!(e.title().pending(), Some("Image 2"));
    settle(&mut e, 0.2);
    assert_eq!(e.title().phase(), TitlePhase::Leaving);
    assert_eq!(e.title().words(), ["Image", "1"]);

    settle(&mut e, 0.6);
    assert_eq!(e.title().words(), ["Image", "2"]);
    assert_eq!(e.title().phase(), TitlePhase::Entering);

    settle(&mut e, 1.0);
    assert_eq!(e.title().phase(), TitlePhase::Shown);
}

#[test]
fn scroll_zoom_takes_over_gallery_transform() {
    let mut e = engine_at(DESKTOP);
    e.set_scroll_progress(0.5);
    assert_eq!(e.mode(), GalleryMode::ScrollZoomed);
    let g = e.gallery();
    assert!(approx(g.scale, 1.75, 1e-5));
    assert!(approx(g.y, 200.0, 1e-3));
    assert!(approx(g.rotation, 45.0, 1e-3));

    assert!(!e.click_item(3));
    e.click_background();
    let c = centers(&e);
    e.pointer_move(c[0], &c);
    assert!(e.items()[0].damped.is_at_rest());

    e.set_scroll_progress(1.0);
    assert!(approx(e.gallery().scale, 2.5, 1e-5));

    e.set_scroll_progress(0.0);
    assert_eq!(e.mode(), GalleryMode::Idle);
    assert_eq!(e.gallery(), GalleryTransform::idle(1.0));
    settle(&mut e, 0.6);
    assert!(approx(e.affordance().opacity, 1.0, 1e-6));
}

#[test]
fn scroll_progress_ignores_garbage() {
    let mut e = engine_at(DESKTOP);
    e.set_scroll_progress(f32::NAN);
    assert_eq!(e.mode(), GalleryMode::Idle);
    e.set_scroll_progress(-3.0);
    assert_eq!(e.scroll_progress(), 0.0);
    assert_eq!(e.mode(), GalleryMode::Idle);
    e.set_scroll_progress(9.0);
    assert_eq!(e.scroll_progress(), 1.0);
}

#[test]
fn scrolling_during_focus_abandons_it() {
    let mut e = engine_at(DESKTOP);
    e.focus(2);
    settle(&mut e, 1.0);
    e.set_scroll_progress(0.3);
    assert_eq!(e.mode(), GalleryMode::ScrollZoomed);
    assert!(!e.is_transitioning());
    let pose = e.gallery();

    settle(&mut e, 3.0);
    // No leftover focus tween fights the scroll mapping.
    assert_eq!(e.gallery(), pose);
    assert_eq!(e.title().phase(), TitlePhase::Hidden);
    assert!(e.title().words().is_empty());
    assert!(e.affordance().opacity.abs() < 1e-6);
}

#[test]
fn intro_blocks_input_until_cards_reach_slots() {
    let mut e = engine_at(DESKTOP);
    e.start_intro(7);
    assert!(e.is_transitioning());
    assert!(e.items().iter().all(|it| it.pose.opacity == 0.0));
    assert!(!e.click_item(0));

    settle(&mut e, 1.0);
    assert!(e.is_transitioning());

    settle(&mut e, 3.0);
    assert!(!e.is_transitioning());
    for item in e.items() {
        let rest = rest_position(item.angle, 275.0);
        assert!(approx(item.pose.x, rest.x, 1e-2));
        assert!(approx(item.pose.y, rest.y, 1e-2));
        assert!(approx(item.pose.opacity, 1.0, 1e-6));
        assert!(approx(item.pose.scale, 1.0, 1e-5));
    }
    assert!(approx(e.affordance().opacity, 1.0, 1e-6));
    assert!(e.click_item(0));
}

#[test]
fn intro_scatter_is_deterministic_per_seed() {
    let mut a = engine_at(DESKTOP);
    let mut b = engine_at(DESKTOP);
    a.start_intro(42);
    b.start_intro(42);
    let pa: Vec<ItemPose> = a.items().iter().map(|it| it.pose).collect();
    let pb: Vec<ItemPose> = b.items().iter().map(|it| it.pose).collect();
    assert_eq!(pa, pb);
    for p in &pa {
        assert!(p.x.abs() <= 700.0 && p.y.abs() <= 450.0);
    }
}

#[test]
fn resize_updates_idle_scale_and_mobile_flag() {
    let mut e = engine_at(DESKTOP);
    e.resize(1024.0, 768.0);
    assert!(!e.config().is_mobile);
    assert!(approx(e.gallery().scale, 0.8, 1e-6));

    e.resize(500.0, 800.0);
    assert!(e.config().is_mobile);
    assert!(approx(e.gallery().scale, 0.6, 1e-6));
    assert!(e.items().iter().all(|it| it.damped.is_at_rest()));
}

#[test]
fn resize_keeps_focus_zoom() {
    let mut e = engine_at(DESKTOP);
    e.focus(0);
    settle(&mut e, 2.5);
    e.resize(1024.0, 768.0);
    assert!(approx(e.gallery().scale, 5.0, 1e-4));

    // Reset lands on the new idle scale.
    e.reset();
    settle(&mut e, 2.6);
    assert!(approx(e.gallery().scale, 0.8, 1e-5));
}

#[test]
fn resize_during_reset_lands_on_new_idle_scale() {
    let mut e = engine_at(DESKTOP);
    e.focus(0);
    settle(&mut e, 2.5);
    assert!(e.reset());
    settle(&mut e, 1.0);
    e.resize(1024.0, 768.0);
    assert!(e.is_transitioning());

    settle(&mut e, 1.6);
    assert_eq!(e.mode(), GalleryMode::Idle);
    assert!(approx(e.gallery().scale, 0.8, 1e-5));
}

#[test]
fn resize_while_focused_settled_starts_no_zoom() {
    let mut e = engine_at(DESKTOP);
    e.focus(0);
    settle(&mut e, 2.5);
    e.resize(1024.0, 768.0);
    assert!(!e.tweens().is_animating(crate::core::tween::Prop::GalleryScale));
}
