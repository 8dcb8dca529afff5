pub mod api;
pub mod core;
pub mod input;
pub mod prefs;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::page::{PageConfig, PageHost};
pub use api::types::{InputResponse, NavIntent, Rejected, Section, SectionMetrics, Transition};
pub use crate::core::controller::ScrollController;
pub use crate::core::reveal::{RevealSchedule, RevealTracker};
pub use input::{
    classify_key_input, classify_swipe_input, classify_wheel_input, EdgeRules, PageInput,
};
pub use prefs::{Language, LanguagePreference, PreferenceStore, StoreError, LANGUAGE_KEY};

// Extensions — standalone animation helpers
pub use extensions::{ease, lerp, Easing, ScrollTween, TaskId, Typewriter, TypewriterStep};
