use super::easing::Ease;
use fnv::FnvHashMap;

/// Animatable scalar on the gallery, addressed by kind and card/word index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prop {
    GalleryX,
    GalleryY,
    GalleryRotation,
    GalleryScale,
    AffordanceOpacity,
    AffordanceY,
    ParallaxX,
    ParallaxY,
    ParallaxZ,
    CardX(usize),
    CardY(usize),
    CardRotationZ(usize),
    CardRotationY(usize),
    CardScale(usize),
    CardOpacity(usize),
    TitleWord(usize),
}

impl Prop {
    #[inline]
    pub fn is_gallery(self) -> bool {
        matches!(
            self,
            Prop::GalleryX | Prop::GalleryY | Prop::GalleryRotation | Prop::GalleryScale
        )
    }

    #[inline]
    pub fn is_card(self) -> bool {
        matches!(
            self,
            Prop::CardX(_)
                | Prop::CardY(_)
                | Prop::CardRotationZ(_)
                | Prop::CardRotationY(_)
                | Prop::CardScale(_)
                | Prop::CardOpacity(_)
        )
    }

    #[inline]
    pub fn is_parallax(self) -> bool {
        matches!(self, Prop::ParallaxX | Prop::ParallaxY | Prop::ParallaxZ)
    }
}

/// Completion tag reported when the tween carrying it finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cue {
    IntroLined,
    IntroCircled,
    FocusSettled,
    ResetSettled,
    TitleEntered,
    TitleLeft,
}

/// A single property animation.
///
/// The start value is captured from the live property when the delay elapses,
/// so chained tweens pick up wherever the previous one left off.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: Option<f32>,
    to: f32,
    delay: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
    cue: Option<Cue>,
}

impl Tween {
    pub fn to(value: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from: None,
            to: value,
            delay: 0.0,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
            cue: None,
        }
    }

    pub fn delay(mut self, secs: f32) -> Self {
        self.delay = secs.max(0.0);
        self
    }

    pub fn cue(mut self, cue: Cue) -> Self {
        self.cue = Some(cue);
        self
    }

    #[inline]
    pub fn fires(&self, cue: Cue) -> bool {
        self.cue == Some(cue)
    }

    /// Seconds until this tween completes.
    #[inline]
    pub fn remaining(&self) -> f32 {
        (self.delay + self.duration - self.elapsed).max(0.0)
    }
}

/// Output of one `Tweener::advance` call.
#[derive(Debug, Default)]
pub struct TweenStep {
    pub writes: Vec<(Prop, f32)>,
    pub cues: Vec<Cue>,
}

/// Active tweens, at most one per property.
#[derive(Debug, Default)]
pub struct Tweener {
    active: FnvHashMap<Prop, Tween>,
}

impl Tweener {
    /// Start `tween` on `prop`, replacing any tween already running on it.
    pub fn start(&mut self, prop: Prop, tween: Tween) {
        self.active.insert(prop, tween);
    }

    /// Start one tween per property, each delayed `stagger` seconds after the
    /// previous; `cue` rides on the last one so it fires when the group ends.
    pub fn start_staggered(
        &mut self,
        props: impl IntoIterator<Item = Prop>,
        tween: Tween,
        stagger: f32,
        cue: Option<Cue>,
    ) {
        let props: Vec<Prop> = props.into_iter().collect();
        let last = props.len().saturating_sub(1);
        for (i, prop) in props.into_iter().enumerate() {
            let mut t = tween.clone();
            t.delay += stagger * i as f32;
            t.cue = if i == last { cue } else { None };
            self.start(prop, t);
        }
    }

    pub fn cancel_where(&mut self, mut pred: impl FnMut(Prop) -> bool) {
        self.active.retain(|prop, _| !pred(*prop));
    }

    pub fn get(&self, prop: Prop) -> Option<&Tween> {
        self.active.get(&prop)
    }

    #[inline]
    pub fn is_animating(&self, prop: Prop) -> bool {
        self.active.contains_key(&prop)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every tween by `dt` seconds.
    ///
    /// `read` supplies the live value of a property the first time its tween
    /// leaves the delay phase. Finished tweens are removed and their cues
    /// reported in a stable order.
    pub fn advance(&mut self, dt: f32, read: impl Fn(Prop) -> f32) -> TweenStep {
        let mut step = TweenStep::default();
        let mut finished = Vec::new();
        for (prop, tween) in self.active.iter_mut() {
            tween.elapsed += dt;
            if tween.elapsed < tween.delay {
                continue;
            }
            let from = *tween.from.get_or_insert_with(|| read(*prop));
            let t = if tween.duration <= 0.0 {
                1.0
            } else {
                ((tween.elapsed - tween.delay) / tween.duration).clamp(0.0, 1.0)
            };
            if t < 1.0 {
                step.writes
                    .push((*prop, from + (tween.to - from) * tween.ease.apply(t)));
            } else {
                step.writes.push((*prop, tween.to));
                finished.push(*prop);
                if let Some(cue) = tween.cue {
                    step.cues.push(cue);
                }
            }
        }
        for prop in finished {
            self.active.remove(&prop);
        }
        step.writes.sort_by(|a, b| a.0.cmp(&b.0));
        step.cues.sort();
        step
    }
}
