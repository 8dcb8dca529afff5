// extensions/mod.rs
//
// Standalone animation helpers. These know nothing about sections or the
// page host; the controller and the web bridge compose them.

pub mod easing;
pub mod tween;
pub mod typewriter;

pub use easing::{ease, lerp, Easing};
pub use tween::ScrollTween;
pub use typewriter::{TaskId, Typewriter, TypewriterStep};
