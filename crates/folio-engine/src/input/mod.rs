pub mod classify;
pub mod event;

pub use classify::{
    classify_key_input, classify_swipe_input, classify_wheel_input, is_navigation_key, EdgeRules,
};
pub use event::PageInput;
