// input/classify.rs
//
// Pure intent classification for wheel, swipe and keyboard input.
// No state and no effects: the controller decides what to do with the intent.

use crate::api::page::PageConfig;
use crate::api::types::{NavIntent, SectionMetrics};

/// Internal-scroll deference rules.
///
/// A section whose content overflows its box keeps directional gestures for
/// itself until it is scrolled to the matching edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRules {
    pub overflow_margin_px: f64,
    pub edge_tolerance_px: f64,
}

impl Default for EdgeRules {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

impl EdgeRules {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            overflow_margin_px: config.overflow_margin_px,
            edge_tolerance_px: config.edge_tolerance_px,
        }
    }

    /// Whether the active section lets a directional intent through to page
    /// navigation. Non-directional intents always pass.
    pub fn releases(&self, intent: NavIntent, section: Option<&SectionMetrics>) -> bool {
        let Some(metrics) = section else {
            return true;
        };
        if !metrics.overflows(self.overflow_margin_px) {
            return true;
        }
        match intent {
            NavIntent::Forward => metrics.at_bottom(self.edge_tolerance_px),
            NavIntent::Backward => metrics.at_top(self.edge_tolerance_px),
            NavIntent::GoTo(_) | NavIntent::None => true,
        }
    }

    fn defer(&self, intent: NavIntent, section: Option<&SectionMetrics>) -> NavIntent {
        if self.releases(intent, section) {
            intent
        } else {
            NavIntent::None
        }
    }
}

/// Positive `delta_y` scrolls down (forward).
pub fn classify_wheel_input(
    delta_y: f64,
    section: Option<&SectionMetrics>,
    rules: &EdgeRules,
) -> NavIntent {
    let intent = if delta_y > 0.0 {
        NavIntent::Forward
    } else if delta_y < 0.0 {
        NavIntent::Backward
    } else {
        return NavIntent::None;
    };
    rules.defer(intent, section)
}

/// A finger moving up the screen (`start_y > end_y`) pages forward. Travel
/// must strictly exceed `threshold_px`.
pub fn classify_swipe_input(
    start_y: f64,
    end_y: f64,
    threshold_px: f64,
    section: Option<&SectionMetrics>,
    rules: &EdgeRules,
) -> NavIntent {
    let delta = start_y - end_y;
    if delta.abs() <= threshold_px {
        return NavIntent::None;
    }
    let intent = if delta > 0.0 {
        NavIntent::Forward
    } else {
        NavIntent::Backward
    };
    rules.defer(intent, section)
}

/// `key` is a `KeyboardEvent.key` value.
pub fn classify_key_input(
    key: &str,
    section_count: usize,
    section: Option<&SectionMetrics>,
    rules: &EdgeRules,
) -> NavIntent {
    match key {
        "ArrowDown" | "PageDown" => rules.defer(NavIntent::Forward, section),
        "ArrowUp" | "PageUp" => rules.defer(NavIntent::Backward, section),
        "Home" => NavIntent::GoTo(0),
        "End" if section_count > 0 => NavIntent::GoTo(section_count - 1),
        _ => NavIntent::None,
    }
}

/// Whether `key` is one the controller owns, regardless of deference.
pub fn is_navigation_key(key: &str) -> bool {
    matches!(key, "ArrowDown" | "PageDown" | "ArrowUp" | "PageUp" | "Home" | "End")
}
