// extensions/tween.rs
//
// Time-sampled scroll tween. Holds no reference to the page; the controller
// samples it once per animation frame and writes the result to the host.
//
// Usage:
//   let tween = ScrollTween::new(0.0, 900.0, now_ms, 700.0, Easing::CubicInOut);
//   host.set_scroll_offset(tween.sample(frame_ms));
//   if tween.is_complete(frame_ms) { host.set_scroll_offset(tween.target()); }

use super::easing::{ease, Easing};

/// A single scroll-offset animation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    pub fn origin(&self) -> f64 {
        self.from
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Normalized progress [0, 1] at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Eased offset at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> f64 {
        ease(self.from, self.to, self.progress(now_ms), self.easing)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Move the destination, keeping origin and start time.
    pub fn retarget(&mut self, to: f64) {
        self.to = to;
    }
}
