use serde::Deserialize;

use crate::api::types::SectionMetrics;
use crate::core::reveal::RevealSchedule;

/// Tunable constants for a page, provided by the site.
/// All fields are optional in JSON; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Length of a section-to-section transition in milliseconds (default: 700).
    pub transition_ms: f64,
    /// Minimum time between the starts of two transitions (default: 900).
    pub cooldown_ms: f64,
    /// Scroll distance below which a transition is skipped (default: 1px).
    pub negligible_distance_px: f64,
    /// Overflow a section must exceed before it counts as internally
    /// scrollable (default: 2px).
    pub overflow_margin_px: f64,
    /// Slack when testing whether a section sits at its top/bottom edge
    /// (default: 1px).
    pub edge_tolerance_px: f64,
    /// Minimum vertical travel for a touch swipe to navigate (default: 50px).
    pub swipe_threshold_px: f64,
    /// Delay between consecutive fade-in items of a section (default: 100ms).
    pub item_stagger_ms: f64,
    /// Delay between consecutive tags in a tag group (default: 60ms).
    pub tag_stagger_ms: f64,
    /// Interval between typewriter characters (default: 80ms).
    pub typewriter_char_ms: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            transition_ms: 700.0,
            cooldown_ms: 900.0,
            negligible_distance_px: 1.0,
            overflow_margin_px: 2.0,
            edge_tolerance_px: 1.0,
            swipe_threshold_px: 50.0,
            item_stagger_ms: 100.0,
            tag_stagger_ms: 60.0,
            typewriter_char_ms: 80.0,
        }
    }
}

impl PageConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn reveal_schedule(&self) -> RevealSchedule {
        RevealSchedule::new(self.item_stagger_ms, self.tag_stagger_ms)
    }
}

/// The page surface the controller drives.
///
/// The web bridge implements this over the DOM; tests implement it with a
/// recording fake. All methods are synchronous and infallible: a host that
/// cannot perform an effect simply does nothing.
pub trait PageHost {
    /// Height of one section (the viewport) in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Current offset of the page-level scroll container.
    fn scroll_offset(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    /// Geometry of a section's own scroll box, if it exists.
    fn section_metrics(&self, index: usize) -> Option<SectionMetrics>;

    /// Mark exactly the nav link for `section_id` as active.
    fn highlight_nav(&mut self, section_id: &str);

    /// Play the one-shot reveal for a section. Called at most once per index.
    fn reveal_section(&mut self, index: usize, schedule: &RevealSchedule);
}
