use std::fmt;

/// One full-viewport panel in the page's linear sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// 0-based position in document order.
    pub index: usize,
    /// Element id; nav links reference sections by this key.
    pub id: String,
}

impl Section {
    pub fn new(index: usize, id: impl Into<String>) -> Self {
        Self { index, id: id.into() }
    }

    /// Build sections from ids in document order.
    pub fn from_ids<I, S>(ids: I) -> Vec<Section>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .enumerate()
            .map(|(index, id)| Section::new(index, id))
            .collect()
    }
}

/// Live scroll geometry of a section's own content box, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl SectionMetrics {
    /// Content taller than the box by more than `margin`.
    pub fn overflows(&self, margin: f64) -> bool {
        self.scroll_height - self.client_height > margin
    }

    pub fn at_top(&self, tolerance: f64) -> bool {
        self.scroll_top <= tolerance
    }

    pub fn at_bottom(&self, tolerance: f64) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - tolerance
    }
}

/// What an input gesture asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Forward,
    Backward,
    GoTo(usize),
    /// Not a navigation; leave the event to the browser.
    None,
}

impl NavIntent {
    pub fn is_navigation(self) -> bool {
        self != NavIntent::None
    }
}

/// Why a navigation request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    OutOfBounds,
    Animating,
    CoolingDown,
    AlreadyCurrent,
    UnknownSection,
    /// The intent was `NavIntent::None`.
    NoIntent,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejected::OutOfBounds => "target index out of bounds",
            Rejected::Animating => "transition in flight",
            Rejected::CoolingDown => "cooldown window not elapsed",
            Rejected::AlreadyCurrent => "target is the current section",
            Rejected::UnknownSection => "no section with that id",
            Rejected::NoIntent => "no navigation intent",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for Rejected {}

/// An accepted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A tween is running; the caller must drive `tick` every frame.
    Animating { from: usize, to: usize },
    /// Distance was negligible; the offset was already at the target.
    Skipped { from: usize, to: usize },
}

impl Transition {
    pub fn target(self) -> usize {
        match self {
            Transition::Animating { to, .. } | Transition::Skipped { to, .. } => to,
        }
    }

    pub fn needs_frames(self) -> bool {
        matches!(self, Transition::Animating { .. })
    }
}

/// Reply to a raw input event: whether the browser's default action should be
/// suppressed, and what navigation (if any) it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResponse {
    pub prevent_default: bool,
    pub outcome: Result<Transition, Rejected>,
}

impl InputResponse {
    /// Event left entirely to the browser.
    pub fn passthrough() -> Self {
        Self {
            prevent_default: false,
            outcome: Err(Rejected::NoIntent),
        }
    }

    pub fn needs_frames(&self) -> bool {
        matches!(self.outcome, Ok(t) if t.needs_frames())
    }
}
