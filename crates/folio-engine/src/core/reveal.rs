use std::collections::BTreeSet;

/// Stagger timings for a section's reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSchedule {
    item_stagger_ms: f64,
    tag_stagger_ms: f64,
}

impl RevealSchedule {
    pub fn new(item_stagger_ms: f64, tag_stagger_ms: f64) -> Self {
        Self {
            item_stagger_ms: item_stagger_ms.max(0.0),
            tag_stagger_ms: tag_stagger_ms.max(0.0),
        }
    }

    /// Delay before the `position`-th fade-in item becomes visible.
    pub fn item_delay(&self, position: usize) -> f64 {
        position as f64 * self.item_stagger_ms
    }

    /// Delay before the `position`-th tag of a group becomes visible.
    pub fn tag_delay(&self, position: usize) -> f64 {
        position as f64 * self.tag_stagger_ms
    }
}

/// Set of sections whose reveal has been triggered. Only grows.
#[derive(Debug, Default)]
pub struct RevealTracker {
    activated: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` as revealed. Returns true only the first time.
    pub fn activate(&mut self, index: usize) -> bool {
        self.activated.insert(index)
    }

    pub fn is_activated(&self, index: usize) -> bool {
        self.activated.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.activated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activated.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.activated.iter().copied()
    }
}
