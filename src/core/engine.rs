use glam::{Vec2, Vec3};
use rand::prelude::*;

use super::config::{Config, GalleryError};
use super::constants::*;
use super::damping::{DampedTransform, ParallaxState};
use super::easing::Ease;
use super::input::{self, ProximityParams};
use super::layout;
use super::title::{TitleLabel, TitlePhase};
use super::tween::{Cue, Prop, Tween, Tweener};

/// What a card shows. Opaque to the engine; the DOM side renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemContent {
    pub image_src: String,
    pub title: String,
}

/// Transform emitted for one card each frame.
///
/// Fields:
/// - `x`, `y`: px offset from the gallery center
/// - `rotation_z`: in-plane rotation in degrees
/// - `rotation_y`: flip around the vertical axis in degrees
/// - `scale`: uniform scale
/// - `opacity`: 0..1
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPose {
    pub x: f32,
    pub y: f32,
    pub rotation_z: f32,
    pub rotation_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl ItemPose {
    /// Pose of a card sitting in its slot, offset by its damped transform.
    pub fn in_slot(angle: f32, radius: f32, damped: &DampedTransform) -> Self {
        let rest = layout::rest_position(angle, radius) + damped.offset();
        Self {
            x: rest.x,
            y: rest.y,
            rotation_z: layout::slot_rotation_deg(angle),
            rotation_y: damped.rotation.current,
            scale: damped.scale.current,
            opacity: 1.0,
        }
    }
}

/// One card on the circle.
#[derive(Clone, Debug)]
pub struct Item {
    pub angle: f32,
    pub content: ItemContent,
    pub damped: DampedTransform,
    pub pose: ItemPose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryMode {
    Idle,
    Focused(usize),
    ScrollZoomed,
}

/// Transform of the gallery node that carries every card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryTransform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
}

impl GalleryTransform {
    pub fn idle(scale: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale,
        }
    }
}

/// The "click to view" hint under the gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affordance {
    pub opacity: f32,
    pub y: f32,
}

/// Radial gallery state machine.
///
/// Input handlers (`pointer_move`, `click_item`, `set_scroll_progress`, ...)
/// only write targets and mode flags; `tick` advances tweens and damps the
/// per-card and parallax state once per display frame. The host reads back
/// `items()`, `container_tilt()`, `gallery()`, `affordance()` and `title()`
/// after each tick and applies them to its visual nodes.
///
/// Typical usage:
/// - Construct with `GalleryEngine::new(config, contents, viewport)`
/// - Optionally call `start_intro(seed)` to play the entrance sequence
/// - Forward host events and call `tick(dt_sec)` every frame
pub struct GalleryEngine {
    config: Config,
    items: Vec<Item>,
    parallax: ParallaxState,
    mode: GalleryMode,
    transitioning: bool,
    gallery: GalleryTransform,
    affordance: Affordance,
    title: TitleLabel,
    tweens: Tweener,
    viewport: Vec2,
    scroll_progress: f32,
}

impl GalleryEngine {
    /// Build a gallery of `config.image_count` cards, cycling through `contents`.
    pub fn new(
        mut config: Config,
        contents: &[ItemContent],
        viewport: Vec2,
    ) -> Result<Self, GalleryError> {
        config.validate()?;
        if contents.is_empty() {
            return Err(GalleryError::NoContent);
        }
        config.update_for_width(viewport.x);

        let items = layout::slot_angles(config.image_count)
            .into_iter()
            .enumerate()
            .map(|(i, angle)| {
                let damped = DampedTransform::default();
                Item {
                    angle,
                    content: contents[i % contents.len()].clone(),
                    damped,
                    pose: ItemPose::in_slot(angle, config.radius, &damped),
                }
            })
            .collect();

        let idle_scale = config.idle_scale(viewport.x);
        Ok(Self {
            config,
            items,
            parallax: ParallaxState::default(),
            mode: GalleryMode::Idle,
            transitioning: false,
            gallery: GalleryTransform::idle(idle_scale),
            affordance: Affordance {
                opacity: 1.0,
                y: 0.0,
            },
            title: TitleLabel::default(),
            tweens: Tweener::default(),
            viewport,
            scroll_progress: 0.0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn parallax(&self) -> &ParallaxState {
        &self.parallax
    }

    /// Current container tilt (rotateX, rotateY, rotate) in degrees.
    pub fn container_tilt(&self) -> Vec3 {
        self.parallax.current()
    }

    pub fn mode(&self) -> GalleryMode {
        self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn gallery(&self) -> GalleryTransform {
        self.gallery
    }

    pub fn affordance(&self) -> Affordance {
        self.affordance
    }

    pub fn title(&self) -> &TitleLabel {
        &self.title
    }

    pub fn tweens(&self) -> &Tweener {
        &self.tweens
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    /// Gallery scale used while idle at the current viewport width.
    pub fn idle_scale(&self) -> f32 {
        self.config.idle_scale(self.viewport.x)
    }

    /// True when pointer input may move targets and the damped step runs.
    pub fn pointer_effects_active(&self) -> bool {
        self.mode == GalleryMode::Idle && !self.transitioning
    }

    // ---------------- Lifecycle ----------------

    /// Scatter the cards and play the entrance: fade in, line up, form the circle.
    ///
    /// Counts as a transition, so clicks and pointer effects are ignored until
    /// the cards reach their slots.
    pub fn start_intro(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = self.viewport * 0.5;
        let count = self.items.len();

        self.transitioning = true;
        self.affordance = Affordance {
            opacity: 0.0,
            y: 0.0,
        };
        self.tweens.cancel_where(|p| p.is_card() || p == Prop::AffordanceOpacity);
        for item in &mut self.items {
            item.damped.snap_to_rest();
            item.pose = ItemPose {
                x: rng.gen_range(-half.x..=half.x),
                y: rng.gen_range(-half.y..=half.y),
                rotation_z: rng.gen_range(0.0..360.0),
                rotation_y: 0.0,
                scale: INTRO_SCATTER_SCALE,
                opacity: 0.0,
            };
        }

        let fade = Tween::to(1.0, INTRO_FADE_SECS, Ease::Power2Out);
        self.tweens
            .start_staggered((0..count).map(Prop::CardOpacity), fade.clone(), INTRO_FADE_STAGGER, None);
        self.tweens
            .start_staggered((0..count).map(Prop::CardScale), fade, INTRO_FADE_STAGGER, None);

        let fade_end = INTRO_FADE_SECS + INTRO_FADE_STAGGER * count.saturating_sub(1) as f32;
        let line_start = (fade_end - INTRO_LINE_OVERLAP).max(0.0);
        for i in 0..count {
            let at = layout::line_position(i, count, INTRO_LINE_SPACING);
            let line = |v: f32| Tween::to(v, INTRO_LINE_SECS, Ease::Power3InOut).delay(line_start);
            let x = if i + 1 == count {
                line(at.x).cue(Cue::IntroLined)
            } else {
                line(at.x)
            };
            self.tweens.start(Prop::CardX(i), x);
            self.tweens.start(Prop::CardY(i), line(at.y));
            self.tweens.start(Prop::CardRotationZ(i), line(0.0));
        }
        log::info!("[gallery] intro started cards={}", count);
    }

    fn intro_to_circle(&mut self) {
        let radius = self.config.radius;
        let count = self.items.len();
        for (i, item) in self.items.iter().enumerate() {
            let rest = layout::rest_position(item.angle, radius);
            let to = |v: f32| Tween::to(v, INTRO_CIRCLE_SECS, Ease::Power4InOut);
            let x = if i + 1 == count {
                to(rest.x).cue(Cue::IntroCircled)
            } else {
                to(rest.x)
            };
            self.tweens.start(Prop::CardX(i), x);
            self.tweens.start(Prop::CardY(i), to(rest.y));
            self.tweens
                .start(Prop::CardRotationZ(i), to(layout::slot_rotation_deg(item.angle)));
        }
    }

    /// Re-run the layout for a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.config.update_for_width(width);
        self.relayout();
        match self.mode {
            GalleryMode::Idle => {
                self.gallery.scale = self.idle_scale();
                if !self.transitioning {
                    self.parallax.zero();
                    self.settle_cards();
                }
            }
            GalleryMode::ScrollZoomed => self.apply_scroll_pose(self.scroll_progress),
            GalleryMode::Focused(_) => self.retarget_reset_scale(),
        }
        log::debug!(
            "[gallery] resize {}x{} mobile={} idle_scale={}",
            width,
            height,
            self.config.is_mobile,
            self.idle_scale()
        );
    }

    /// Point an in-flight zoom-out at the idle scale for the current width,
    /// finishing together with the rest of the reset.
    fn retarget_reset_scale(&mut self) {
        let Some(remaining) = self
            .tweens
            .get(Prop::GalleryRotation)
            .filter(|t| t.fires(Cue::ResetSettled))
            .map(Tween::remaining)
        else {
            return;
        };
        self.tweens.start(
            Prop::GalleryScale,
            Tween::to(self.idle_scale(), remaining, Ease::Power4Out),
        );
    }

    fn relayout(&mut self) {
        let angles = layout::slot_angles(self.items.len());
        for (item, angle) in self.items.iter_mut().zip(angles) {
            item.angle = angle;
        }
    }

    /// Snap every card to its slot at rest, dropping in-flight card tweens.
    fn settle_cards(&mut self) {
        self.tweens.cancel_where(Prop::is_card);
        let radius = self.config.radius;
        for item in &mut self.items {
            item.damped.snap_to_rest();
            item.pose = ItemPose::in_slot(item.angle, radius, &item.damped);
        }
    }

    // ---------------- Pointer input ----------------

    /// Pointer moved to `pointer` (viewport px); `card_centers[i]` is the
    /// on-screen center of card `i`.
    pub fn pointer_move(&mut self, pointer: Vec2, card_centers: &[Vec2]) {
        if !self.pointer_effects_active() || self.config.is_mobile {
            return;
        }
        self.parallax.set_targets(input::parallax_target(
            pointer,
            self.viewport,
            self.config.parallax_tilt_deg,
            self.config.parallax_twist_deg,
        ));
        let params = self.proximity_params();
        for (item, center) in self.items.iter_mut().zip(card_centers) {
            match input::card_target(pointer.distance(*center), item.angle, &params) {
                Some(t) => item.damped.set_targets(t.offset, t.rotation, t.scale),
                None => item.damped.release(),
            }
        }
    }

    /// Pointer left the page: let everything relax back to rest.
    pub fn pointer_leave(&mut self) {
        if !self.pointer_effects_active() {
            return;
        }
        for item in &mut self.items {
            item.damped.release();
        }
        self.parallax.release();
    }

    fn proximity_params(&self) -> ProximityParams {
        ProximityParams {
            sensitivity: self.config.sensitivity,
            effect_falloff: self.config.effect_falloff,
            move_amount: self.config.card_move_amount,
            flip_rotation_deg: FLIP_ROTATION_DEG,
            flip_scale_gain: FLIP_SCALE_GAIN,
        }
    }

    // ---------------- Clicks and keys ----------------

    /// A card was clicked. Returns true when the click was consumed and must
    /// not also count as a background click.
    pub fn click_item(&mut self, index: usize) -> bool {
        if self.transitioning || self.mode == GalleryMode::ScrollZoomed {
            return false;
        }
        self.focus(index)
    }

    pub fn click_background(&mut self) {
        if matches!(self.mode, GalleryMode::Focused(_)) {
            self.reset();
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.mode, GalleryMode::Focused(_)) {
            self.reset();
        }
    }

    // ---------------- Transitions ----------------

    /// Rotate card `index` to the front and zoom into preview.
    ///
    /// Returns false when the request was dropped (transition in flight,
    /// scroll-linked, or index out of range).
    pub fn focus(&mut self, index: usize) -> bool {
        if self.transitioning {
            log::debug!("[gallery] focus {} dropped: transition in flight", index);
            return false;
        }
        if self.mode == GalleryMode::ScrollZoomed {
            log::debug!("[gallery] focus {} dropped: scroll-linked", index);
            return false;
        }
        let Some(item) = self.items.get(index) else {
            log::warn!("[gallery] focus {} out of range ({} cards)", index, self.items.len());
            return false;
        };
        let angle = item.angle;
        let title = item.content.title.clone();

        self.transitioning = true;
        let first_entry = !matches!(self.mode, GalleryMode::Focused(_));
        let delta = layout::shortest_rotation(angle, self.config.front_angle);
        let rotation = self.gallery.rotation + delta.to_degrees();

        for item in &mut self.items {
            item.damped.snap_to_rest();
        }

        if first_entry {
            let fade = |v: f32| Tween::to(v, AFFORDANCE_FADE_SECS, Ease::Power2Out);
            self.tweens.start(Prop::AffordanceOpacity, fade(0.0));
            self.tweens.start(Prop::AffordanceY, fade(AFFORDANCE_DROP_PX));

            let radius = self.config.radius;
            for (i, item) in self.items.iter().enumerate() {
                let rest = layout::rest_position(item.angle, radius);
                let settle = |v: f32| Tween::to(v, CARD_SETTLE_SECS, Ease::Power4Out);
                self.tweens.start(Prop::CardX(i), settle(rest.x));
                self.tweens.start(Prop::CardY(i), settle(rest.y));
                self.tweens.start(Prop::CardRotationY(i), settle(0.0));
                self.tweens.start(Prop::CardScale(i), settle(1.0));
            }

            let zoom = |v: f32| Tween::to(v, FOCUS_ENTER_SECS, Ease::Power4InOut);
            self.tweens
                .start(Prop::GalleryScale, zoom(self.config.focus_zoom_scale));
            self.tweens.start(Prop::GalleryY, zoom(self.config.focus_zoom_y));
            self.tweens
                .start(Prop::GalleryRotation, zoom(rotation).cue(Cue::FocusSettled));
        } else {
            self.tweens.start(
                Prop::GalleryRotation,
                Tween::to(rotation, FOCUS_ROTATE_SECS, Ease::Power4InOut).cue(Cue::FocusSettled),
            );
        }

        let settle = Tween::to(0.0, PARALLAX_SETTLE_SECS, Ease::Power2Out);
        self.tweens.start(Prop::ParallaxX, settle.clone());
        self.tweens.start(Prop::ParallaxY, settle.clone());
        self.tweens.start(Prop::ParallaxZ, settle);
        self.parallax.release();

        self.mode = GalleryMode::Focused(index);
        self.present_title(title, first_entry);
        log::info!(
            "[gallery] focus {} rotation={:.1} first_entry={}",
            index,
            rotation,
            first_entry
        );
        true
    }

    /// Zoom back out to the idle circle. No-op unless focused and settled.
    pub fn reset(&mut self) -> bool {
        if self.transitioning {
            log::debug!("[gallery] reset dropped: transition in flight");
            return false;
        }
        if !matches!(self.mode, GalleryMode::Focused(_)) {
            return false;
        }
        self.transitioning = true;

        self.title.queue(None);
        if self.title.phase() != TitlePhase::Hidden {
            self.leave_title(
                TITLE_RESET_OUT_SECS,
                TITLE_RESET_OUT_DELAY,
                TITLE_RESET_OUT_STAGGER,
            );
        }

        let back = |v: f32| Tween::to(v, RESET_SECS, Ease::Power4InOut);
        self.tweens.start(Prop::GalleryScale, back(self.idle_scale()));
        self.tweens.start(Prop::GalleryX, back(0.0));
        self.tweens.start(Prop::GalleryY, back(0.0));
        self.tweens
            .start(Prop::GalleryRotation, back(0.0).cue(Cue::ResetSettled));
        log::info!("[gallery] reset");
        true
    }

    fn finish_reset(&mut self) {
        self.transitioning = false;
        self.mode = GalleryMode::Idle;
        self.tweens.cancel_where(Prop::is_parallax);
        self.parallax.zero();
        self.show_affordance();
    }

    fn show_affordance(&mut self) {
        let fade = |v: f32| Tween::to(v, AFFORDANCE_FADE_SECS, Ease::Power2Out);
        self.tweens.start(Prop::AffordanceOpacity, fade(1.0));
        self.tweens.start(Prop::AffordanceY, fade(0.0));
    }

    // ---------------- Title label ----------------

    fn present_title(&mut self, text: String, first_entry: bool) {
        match self.title.phase() {
            TitlePhase::Hidden => {
                let delay = if first_entry { TITLE_FIRST_ENTRY_DELAY } else { 0.0 };
                self.enter_title(&text, delay);
            }
            TitlePhase::Entering | TitlePhase::Shown => {
                self.title.queue(Some(text));
                self.leave_title(TITLE_SWAP_OUT_SECS, 0.0, TITLE_SWAP_OUT_STAGGER);
            }
            TitlePhase::Leaving => self.title.queue(Some(text)),
        }
    }

    fn enter_title(&mut self, text: &str, delay: f32) {
        self.title.begin_enter(text, TITLE_WORD_BELOW);
        let count = self.title.words().len();
        if count == 0 {
            self.title.mark_shown();
            return;
        }
        self.tweens.start_staggered(
            (0..count).map(Prop::TitleWord),
            Tween::to(0.0, TITLE_IN_SECS, Ease::Power4Out).delay(delay),
            TITLE_IN_STAGGER,
            Some(Cue::TitleEntered),
        );
    }

    fn leave_title(&mut self, duration: f32, delay: f32, stagger: f32) {
        self.title.begin_leave();
        let count = self.title.words().len();
        if count == 0 {
            self.on_title_left();
            return;
        }
        self.tweens.start_staggered(
            (0..count).map(Prop::TitleWord),
            Tween::to(TITLE_WORD_ABOVE, duration, Ease::Power4Out).delay(delay),
            stagger,
            Some(Cue::TitleLeft),
        );
    }

    fn on_title_left(&mut self) {
        self.tweens.cancel_where(|p| matches!(p, Prop::TitleWord(_)));
        if let Some(next) = self.title.finish_leave() {
            self.enter_title(&next, 0.0);
        }
    }

    // ---------------- Scroll-linked zoom ----------------

    /// Host scroll position mapped onto [0, 1]. Leaving 0 hands the gallery
    /// transform to the scroll mapping; returning to 0 gives it back.
    pub fn set_scroll_progress(&mut self, progress: f32) {
        if !progress.is_finite() {
            return;
        }
        let p = progress.clamp(0.0, 1.0);
        self.scroll_progress = p;
        match (self.mode, p > 0.0) {
            (GalleryMode::ScrollZoomed, true) => self.apply_scroll_pose(p),
            (GalleryMode::ScrollZoomed, false) => self.leave_scroll(),
            (_, true) => {
                self.enter_scroll();
                self.apply_scroll_pose(p);
            }
            (_, false) => {}
        }
    }

    fn enter_scroll(&mut self) {
        self.tweens
            .cancel_where(|p| p.is_gallery() || p.is_parallax());
        self.transitioning = false;
        self.settle_cards();
        self.parallax.zero();

        self.title.queue(None);
        if self.title.phase() != TitlePhase::Hidden {
            self.leave_title(TITLE_SWAP_OUT_SECS, 0.0, TITLE_SWAP_OUT_STAGGER);
        }
        let fade = |v: f32| Tween::to(v, AFFORDANCE_FADE_SECS, Ease::Power2Out);
        self.tweens.start(Prop::AffordanceOpacity, fade(0.0));
        self.tweens.start(Prop::AffordanceY, fade(AFFORDANCE_DROP_PX));

        self.mode = GalleryMode::ScrollZoomed;
        log::info!("[scroll] enter");
    }

    fn leave_scroll(&mut self) {
        self.mode = GalleryMode::Idle;
        self.gallery = GalleryTransform::idle(self.idle_scale());
        self.show_affordance();
        log::info!("[scroll] leave");
    }

    fn apply_scroll_pose(&mut self, progress: f32) {
        let (scale, y, rotation) = self.config.scroll_zoom.at(progress, self.idle_scale());
        self.gallery = GalleryTransform {
            x: 0.0,
            y,
            rotation,
            scale,
        };
    }

    // ---------------- Frame ----------------

    /// Advance one display frame of `dt_sec` seconds.
    pub fn tick(&mut self, dt_sec: f32) {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };

        let mut tweens = std::mem::take(&mut self.tweens);
        let step = tweens.advance(dt, |prop| self.prop_value(prop));
        self.tweens = tweens;
        for (prop, value) in step.writes {
            self.set_prop(prop, value);
        }
        for cue in step.cues {
            self.on_cue(cue);
        }

        if self.pointer_effects_active() {
            self.damp();
        }
    }

    fn damp(&mut self) {
        let lerp = self.config.lerp_factor;
        let radius = self.config.radius;
        self.parallax.step(lerp);
        for item in &mut self.items {
            item.damped.step(lerp);
            item.pose = ItemPose::in_slot(item.angle, radius, &item.damped);
        }
    }

    fn on_cue(&mut self, cue: Cue) {
        match cue {
            Cue::IntroLined => self.intro_to_circle(),
            Cue::IntroCircled => {
                self.transitioning = false;
                self.show_affordance();
                log::info!("[gallery] intro done");
            }
            Cue::FocusSettled => self.transitioning = false,
            Cue::ResetSettled => self.finish_reset(),
            Cue::TitleEntered => self.title.mark_shown(),
            Cue::TitleLeft => self.on_title_left(),
        }
    }

    fn prop_value(&self, prop: Prop) -> f32 {
        let pose = |i: usize| self.items.get(i).map(|it| it.pose);
        match prop {
            Prop::GalleryX => self.gallery.x,
            Prop::GalleryY => self.gallery.y,
            Prop::GalleryRotation => self.gallery.rotation,
            Prop::GalleryScale => self.gallery.scale,
            Prop::AffordanceOpacity => self.affordance.opacity,
            Prop::AffordanceY => self.affordance.y,
            Prop::ParallaxX => self.parallax.x.current,
            Prop::ParallaxY => self.parallax.y.current,
            Prop::ParallaxZ => self.parallax.z.current,
            Prop::CardX(i) => pose(i).map_or(0.0, |p| p.x),
            Prop::CardY(i) => pose(i).map_or(0.0, |p| p.y),
            Prop::CardRotationZ(i) => pose(i).map_or(0.0, |p| p.rotation_z),
            Prop::CardRotationY(i) => pose(i).map_or(0.0, |p| p.rotation_y),
            Prop::CardScale(i) => pose(i).map_or(1.0, |p| p.scale),
            Prop::CardOpacity(i) => pose(i).map_or(1.0, |p| p.opacity),
            Prop::TitleWord(i) => self.title.offset(i),
        }
    }

    fn set_prop(&mut self, prop: Prop, value: f32) {
        match prop {
            Prop::GalleryX => self.gallery.x = value,
            Prop::GalleryY => self.gallery.y = value,
            Prop::GalleryRotation => self.gallery.rotation = value,
            Prop::GalleryScale => self.gallery.scale = value,
            Prop::AffordanceOpacity => self.affordance.opacity = value,
            Prop::AffordanceY => self.affordance.y = value,
            Prop::ParallaxX => self.parallax.x.current = value,
            Prop::ParallaxY => self.parallax.y.current = value,
            Prop::ParallaxZ => self.parallax.z.current = value,
            Prop::TitleWord(i) => self.title.set_offset(i, value),
            Prop::CardX(i)
            | Prop::CardY(i)
            | Prop::CardRotationZ(i)
            | Prop::CardRotationY(i)
            | Prop::CardScale(i)
            | Prop::CardOpacity(i) => {
                let Some(item) = self.items.get_mut(i) else {
                    return;
                };
                let pose = &mut item.pose;
                match prop {
                    Prop::CardX(_) => pose.x = value,
                    Prop::CardY(_) => pose.y = value,
                    Prop::CardRotationZ(_) => pose.rotation_z = value,
                    Prop::CardRotationY(_) => pose.rotation_y = value,
                    Prop::CardScale(_) => pose.scale = value,
                    _ => pose.opacity = value,
                }
            }
        }
    }
}
