use smallvec::SmallVec;

pub type Words = SmallVec<[String; 4]>;

/// Split a label into independently animated word tokens.
pub fn split_words(text: &str) -> Words {
    text.split_whitespace().map(str::to_owned).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitlePhase {
    Hidden,
    Entering,
    Shown,
    Leaving,
}

/// The focused card's title, one vertical offset (percent) per word.
///
/// Swaps are sequential: a new text is parked in `pending` until the current
/// words have finished leaving. `revision` bumps whenever the words change so
/// the DOM side knows to rebuild its spans.
#[derive(Clone, Debug)]
pub struct TitleLabel {
    words: Words,
    offsets: SmallVec<[f32; 4]>,
    phase: TitlePhase,
    pending: Option<String>,
    revision: u32,
}

impl Default for TitleLabel {
    fn default() -> Self {
        Self {
            words: Words::new(),
            offsets: SmallVec::new(),
            phase: TitlePhase::Hidden,
            pending: None,
            revision: 0,
        }
    }
}

impl TitleLabel {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn phase(&self) -> TitlePhase {
        self.phase
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn text(&self) -> Option<String> {
        (!self.words.is_empty()).then(|| self.words.join(" "))
    }

    /// Install new words, all parked at `offset`, and mark them entering.
    pub fn begin_enter(&mut self, text: &str, offset: f32) {
        self.words = split_words(text);
        self.offsets = self.words.iter().map(|_| offset).collect();
        self.phase = TitlePhase::Entering;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn mark_shown(&mut self) {
        if self.phase == TitlePhase::Entering {
            self.phase = TitlePhase::Shown;
        }
    }

    pub fn begin_leave(&mut self) {
        self.phase = TitlePhase::Leaving;
    }

    /// Replace whatever should follow the current words (`None` clears).
    pub fn queue(&mut self, next: Option<String>) {
        self.pending = next;
    }

    /// Drop the current words; returns the queued follow-up text, if any.
    pub fn finish_leave(&mut self) -> Option<String> {
        self.words.clear();
        self.offsets.clear();
        self.phase = TitlePhase::Hidden;
        self.revision = self.revision.wrapping_add(1);
        self.pending.take()
    }

    pub fn set_offset(&mut self, word: usize, value: f32) {
        if let Some(o) = self.offsets.get_mut(word) {
            *o = value;
        }
    }

    pub fn offset(&self, word: usize) -> f32 {
        self.offsets.get(word).copied().unwrap_or(0.0)
    }
}
