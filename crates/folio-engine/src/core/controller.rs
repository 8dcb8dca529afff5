// core/controller.rs
//
// Paginated scroll controller. Owns navigation state and turns intents into
// eased scroll transitions on a PageHost. Two phases: Idle and Transitioning.
// Requests that arrive while Transitioning are dropped, never queued.

use crate::api::page::{PageConfig, PageHost};
use crate::api::types::{InputResponse, NavIntent, Rejected, Section, Transition};
use crate::core::reveal::RevealTracker;
use crate::extensions::easing::Easing;
use crate::extensions::tween::ScrollTween;
use crate::input::classify::{
    classify_key_input, classify_swipe_input, classify_wheel_input, is_navigation_key, EdgeRules,
};
use crate::input::event::PageInput;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Transitioning(ScrollTween),
}

pub struct ScrollController {
    sections: Vec<Section>,
    config: PageConfig,
    rules: EdgeRules,
    current: usize,
    phase: Phase,
    /// Start time of the most recent accepted transition.
    last_transition_ms: Option<f64>,
    reveals: RevealTracker,
    touch_start_y: Option<f64>,
}

impl ScrollController {
    /// Returns `None` when there are no sections: the page has nothing to
    /// paginate and no handlers should be installed.
    pub fn new(sections: Vec<Section>, config: PageConfig) -> Option<Self> {
        if sections.is_empty() {
            return None;
        }
        let rules = EdgeRules::from_config(&config);
        Some(Self {
            sections,
            config,
            rules,
            current: 0,
            phase: Phase::Idle,
            last_transition_ms: None,
            reveals: RevealTracker::new(),
            touch_start_y: None,
        })
    }

    /// Reset to the first section. Must run before any input is handled.
    pub fn init(&mut self, host: &mut impl PageHost) {
        self.current = 0;
        self.phase = Phase::Idle;
        host.set_scroll_offset(0.0);
        host.highlight_nav(&self.sections[0].id);
        self.activate_reveal(0, host);
        log::info!("scroll controller ready with {} sections", self.sections.len());
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> &Section {
        &self.sections[self.current]
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    pub fn reveals(&self) -> &RevealTracker {
        &self.reveals
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Start a transition to `index`.
    ///
    /// Rejected when `index` is out of range, a transition is in flight, the
    /// cooldown since the last start has not elapsed, or `index` is already
    /// current. On success the index, nav highlight and reveal are updated
    /// before the first frame is drawn.
    pub fn go_to_section(
        &mut self,
        index: usize,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> Result<Transition, Rejected> {
        if index >= self.sections.len() {
            return Err(Rejected::OutOfBounds);
        }
        if self.is_animating() {
            return Err(Rejected::Animating);
        }
        if let Some(last) = self.last_transition_ms {
            if now_ms - last < self.config.cooldown_ms {
                return Err(Rejected::CoolingDown);
            }
        }
        if index == self.current {
            return Err(Rejected::AlreadyCurrent);
        }

        let from = self.current;
        self.last_transition_ms = Some(now_ms);
        self.current = index;
        host.highlight_nav(&self.sections[index].id);
        self.activate_reveal(index, host);

        let start = host.scroll_offset();
        let target = index as f64 * host.viewport_height();
        if (target - start).abs() < self.config.negligible_distance_px {
            log::debug!("section {} -> {}: already in place", from, index);
            return Ok(Transition::Skipped { from, to: index });
        }

        self.phase = Phase::Transitioning(ScrollTween::new(
            start,
            target,
            now_ms,
            self.config.transition_ms,
            Easing::CubicInOut,
        ));
        log::debug!("section {} -> {}: scrolling {} -> {}", from, index, start, target);
        Ok(Transition::Animating { from, to: index })
    }

    /// Move one section forward (`+1`) or back (`-1`).
    pub fn advance(
        &mut self,
        delta: isize,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> Result<Transition, Rejected> {
        match self.current.checked_add_signed(delta) {
            Some(index) => self.go_to_section(index, now_ms, host),
            None => Err(Rejected::OutOfBounds),
        }
    }

    /// Navigate to the section whose id is `section_id`.
    pub fn go_to_id(
        &mut self,
        section_id: &str,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> Result<Transition, Rejected> {
        let index = self
            .sections
            .iter()
            .position(|s| s.id == section_id)
            .ok_or(Rejected::UnknownSection)?;
        self.go_to_section(index, now_ms, host)
    }

    pub fn dispatch(
        &mut self,
        intent: NavIntent,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> Result<Transition, Rejected> {
        let outcome = match intent {
            NavIntent::Forward => self.advance(1, now_ms, host),
            NavIntent::Backward => self.advance(-1, now_ms, host),
            NavIntent::GoTo(index) => self.go_to_section(index, now_ms, host),
            NavIntent::None => Err(Rejected::NoIntent),
        };
        if let Err(reason) = outcome {
            log::debug!("{:?} dropped: {}", intent, reason);
        }
        outcome
    }

    /// Advance the in-flight transition to `now_ms`.
    /// Returns true while another frame is needed.
    pub fn tick(&mut self, now_ms: f64, host: &mut impl PageHost) -> bool {
        let Phase::Transitioning(tween) = self.phase else {
            return false;
        };
        if tween.is_complete(now_ms) {
            host.set_scroll_offset(tween.target());
            self.phase = Phase::Idle;
            false
        } else {
            host.set_scroll_offset(tween.sample(now_ms));
            true
        }
    }

    /// Jump an in-flight transition to its end. Used when frames can no
    /// longer be driven.
    pub fn finish(&mut self, host: &mut impl PageHost) {
        self.tick(f64::INFINITY, host);
    }

    /// Route one raw input event.
    pub fn handle_input(
        &mut self,
        input: &PageInput,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> InputResponse {
        match input {
            PageInput::Wheel { delta_y } => self.handle_wheel(*delta_y, now_ms, host),
            PageInput::TouchStart { y } => {
                self.handle_touch_start(*y);
                InputResponse::passthrough()
            }
            PageInput::TouchEnd { y } => self.handle_touch_end(*y, now_ms, host),
            PageInput::Key { key } => self.handle_key(key, now_ms, host),
            PageInput::NavClick { section_id } => self.handle_nav_click(section_id, now_ms, host),
            PageInput::Resize => {
                self.on_resize(host);
                InputResponse::passthrough()
            }
        }
    }

    pub fn handle_wheel(
        &mut self,
        delta_y: f64,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> InputResponse {
        // Swallow wheel deltas mid-flight so they do not pile onto the tween.
        if self.is_animating() {
            return InputResponse { prevent_default: true, outcome: Err(Rejected::Animating) };
        }
        let metrics = host.section_metrics(self.current);
        let intent = classify_wheel_input(delta_y, metrics.as_ref(), &self.rules);
        self.intercept(intent, now_ms, host)
    }

    pub fn handle_touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    pub fn handle_touch_end(
        &mut self,
        y: f64,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> InputResponse {
        let Some(start_y) = self.touch_start_y.take() else {
            return InputResponse::passthrough();
        };
        if self.is_animating() {
            return InputResponse { prevent_default: false, outcome: Err(Rejected::Animating) };
        }
        let metrics = host.section_metrics(self.current);
        let intent = classify_swipe_input(
            start_y,
            y,
            self.config.swipe_threshold_px,
            metrics.as_ref(),
            &self.rules,
        );
        self.intercept(intent, now_ms, host)
    }

    pub fn handle_key(&mut self, key: &str, now_ms: f64, host: &mut impl PageHost) -> InputResponse {
        if !is_navigation_key(key) {
            return InputResponse::passthrough();
        }
        if self.is_animating() {
            return InputResponse { prevent_default: true, outcome: Err(Rejected::Animating) };
        }
        let metrics = host.section_metrics(self.current);
        let intent = classify_key_input(key, self.sections.len(), metrics.as_ref(), &self.rules);
        self.intercept(intent, now_ms, host)
    }

    pub fn handle_nav_click(
        &mut self,
        section_id: &str,
        now_ms: f64,
        host: &mut impl PageHost,
    ) -> InputResponse {
        let outcome = self.go_to_id(section_id, now_ms, host);
        if let Err(reason) = outcome {
            log::debug!("nav click on '{}' dropped: {}", section_id, reason);
        }
        InputResponse { prevent_default: true, outcome }
    }

    /// Keep the logical section in view after the viewport changes.
    ///
    /// The new height is read from the host, the same measure navigation
    /// uses. Idle: snap straight to `current * viewport_height`.
    /// Transitioning: the running tween is retargeted and lands on the new
    /// offset on schedule. Reveals are never re-run.
    pub fn on_resize(&mut self, host: &mut impl PageHost) {
        let target = self.current as f64 * host.viewport_height();
        match &mut self.phase {
            Phase::Idle => host.set_scroll_offset(target),
            Phase::Transitioning(tween) => tween.retarget(target),
        }
    }

    fn intercept(&mut self, intent: NavIntent, now_ms: f64, host: &mut impl PageHost) -> InputResponse {
        if !intent.is_navigation() {
            return InputResponse::passthrough();
        }
        InputResponse { prevent_default: true, outcome: self.dispatch(intent, now_ms, host) }
    }

    fn activate_reveal(&mut self, index: usize, host: &mut impl PageHost) {
        if self.reveals.activate(index) {
            host.reveal_section(index, &self.config.reveal_schedule());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::SectionMetrics;
    use crate::core::reveal::RevealSchedule;
    use std::collections::HashMap;

    const FRAME_MS: f64 = 16.0;

    #[derive(Default)]
    struct FakeHost {
        viewport: f64,
        offset: f64,
        metrics: HashMap<usize, SectionMetrics>,
        highlighted: Vec<String>,
        revealed: Vec<usize>,
        offset_writes: usize,
    }

    impl FakeHost {
        fn new(viewport: f64) -> Self {
            Self { viewport, ..Default::default() }
        }

        fn reveal_count(&self, index: usize) -> usize {
            self.revealed.iter().filter(|&&i| i == index).count()
        }
    }

    impl PageHost for FakeHost {
        fn viewport_height(&self) -> f64 {
            self.viewport
        }

        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: f64) {
            self.offset = offset;
            self.offset_writes += 1;
        }

        fn section_metrics(&self, index: usize) -> Option<SectionMetrics> {
            self.metrics.get(&index).copied()
        }

        fn highlight_nav(&mut self, section_id: &str) {
            self.highlighted.push(section_id.to_string());
        }

        fn reveal_section(&mut self, index: usize, _schedule: &RevealSchedule) {
            self.revealed.push(index);
        }
    }

    fn controller(count: usize) -> ScrollController {
        let ids: Vec<String> = (0..count).map(|i| format!("s{}", i)).collect();
        ScrollController::new(Section::from_ids(ids), PageConfig::default()).unwrap()
    }

    fn setup(count: usize) -> (ScrollController, FakeHost) {
        let mut ctrl = controller(count);
        let mut host = FakeHost::new(800.0);
        ctrl.init(&mut host);
        (ctrl, host)
    }

    /// Tick from `start_ms` until the transition settles; returns the end time.
    fn run_to_idle(ctrl: &mut ScrollController, host: &mut FakeHost, start_ms: f64) -> f64 {
        let mut now = start_ms;
        while ctrl.tick(now, host) {
            now += FRAME_MS;
            assert!(now - start_ms < 10_000.0, "transition never settled");
        }
        now
    }

    #[test]
    fn no_sections_means_no_controller() {
        assert!(ScrollController::new(Vec::new(), PageConfig::default()).is_none());
    }

    #[test]
    fn init_resets_offset_highlights_and_reveals_first() {
        let mut ctrl = controller(3);
        let mut host = FakeHost::new(800.0);
        host.offset = 1234.0;
        ctrl.init(&mut host);

        assert_eq!(host.offset, 0.0);
        assert_eq!(host.highlighted, vec!["s0".to_string()]);
        assert_eq!(host.revealed, vec![0]);
        assert_eq!(ctrl.current_index(), 0);
        assert!(!ctrl.is_animating());
    }

    #[test]
    fn out_of_bounds_is_a_noop() {
        let (mut ctrl, mut host) = setup(5);
        for index in [5, 6, 100, usize::MAX] {
            assert_eq!(ctrl.go_to_section(index, 0.0, &mut host), Err(Rejected::OutOfBounds));
        }
        assert_eq!(ctrl.advance(-1, 0.0, &mut host), Err(Rejected::OutOfBounds));
        assert_eq!(ctrl.current_index(), 0);
        assert!(!ctrl.is_animating());
        assert_eq!(host.highlighted.len(), 1);
    }

    #[test]
    fn self_target_is_a_noop() {
        let (mut ctrl, mut host) = setup(3);
        assert_eq!(ctrl.go_to_section(0, 0.0, &mut host), Err(Rejected::AlreadyCurrent));
        assert!(!ctrl.is_animating());
    }

    #[test]
    fn updates_state_before_animation_completes() {
        let (mut ctrl, mut host) = setup(3);
        let t = ctrl.go_to_section(2, 0.0, &mut host).unwrap();

        assert_eq!(t, Transition::Animating { from: 0, to: 2 });
        assert_eq!(ctrl.current_index(), 2);
        assert!(ctrl.is_animating());
        assert_eq!(host.highlighted.last().map(String::as_str), Some("s2"));
        assert_eq!(host.revealed, vec![0, 2]);
        assert_eq!(host.offset, 0.0);
    }

    #[test]
    fn transition_eases_and_snaps_to_target() {
        let (mut ctrl, mut host) = setup(3);
        ctrl.go_to_section(1, 1000.0, &mut host).unwrap();

        assert!(ctrl.tick(1000.0 + 350.0, &mut host));
        assert!((host.offset - 400.0).abs() < 1e-6);

        assert!(ctrl.tick(1000.0 + 100.0, &mut host));
        assert!(host.offset < 400.0 * 0.1);

        assert!(!ctrl.tick(1000.0 + 700.0, &mut host));
        assert_eq!(host.offset, 800.0);
        assert!(!ctrl.is_animating());
        assert!(!ctrl.tick(2000.0, &mut host));
    }

    #[test]
    fn requests_while_animating_are_rejected() {
        let (mut ctrl, mut host) = setup(5);
        ctrl.go_to_section(1, 0.0, &mut host).unwrap();

        // Past the cooldown, but no frame has completed the tween yet.
        for (i, now) in [10.0, 500.0, 5000.0].into_iter().enumerate() {
            assert_eq!(ctrl.go_to_section(3, now, &mut host), Err(Rejected::Animating), "#{}", i);
            assert_eq!(ctrl.advance(1, now, &mut host), Err(Rejected::Animating));
        }
        assert_eq!(ctrl.current_index(), 1);
    }

    #[test]
    fn cooldown_rejects_rapid_requests() {
        let (mut ctrl, mut host) = setup(5);
        ctrl.go_to_section(1, 0.0, &mut host).unwrap();
        run_to_idle(&mut ctrl, &mut host, 0.0);

        assert_eq!(ctrl.go_to_section(2, 800.0, &mut host), Err(Rejected::CoolingDown));
        assert_eq!(ctrl.current_index(), 1);
        assert!(ctrl.go_to_section(2, 900.0, &mut host).is_ok());
    }

    #[test]
    fn rejected_request_does_not_restart_cooldown() {
        let (mut ctrl, mut host) = setup(5);
        ctrl.go_to_section(1, 0.0, &mut host).unwrap();
        run_to_idle(&mut ctrl, &mut host, 0.0);
        assert!(ctrl.go_to_section(2, 850.0, &mut host).is_err());
        assert!(ctrl.go_to_section(2, 901.0, &mut host).is_ok());
    }

    #[test]
    fn advancing_through_five_sections() {
        let (mut ctrl, mut host) = setup(5);
        let mut now = 0.0;
        for expected in 1..=4 {
            now += 1000.0;
            assert!(ctrl.advance(1, now, &mut host).is_ok());
            assert_eq!(ctrl.current_index(), expected);
            run_to_idle(&mut ctrl, &mut host, now);
            assert_eq!(host.offset, expected as f64 * 800.0);
        }

        assert_eq!(ctrl.current_index(), 4);
        assert_eq!(host.highlighted.last().map(String::as_str), Some("s4"));
        assert_eq!(host.reveal_count(4), 1);

        now += 1000.0;
        assert_eq!(ctrl.advance(1, now, &mut host), Err(Rejected::OutOfBounds));
        assert_eq!(ctrl.current_index(), 4);
    }

    #[test]
    fn revisiting_a_section_does_not_reveal_again() {
        let (mut ctrl, mut host) = setup(3);
        ctrl.go_to_section(1, 0.0, &mut host).unwrap();
        run_to_idle(&mut ctrl, &mut host, 0.0);
        ctrl.go_to_section(0, 1000.0, &mut host).unwrap();
        run_to_idle(&mut ctrl, &mut host, 1000.0);
        ctrl.go_to_section(1, 2000.0, &mut host).unwrap();
        run_to_idle(&mut ctrl, &mut host, 2000.0);

        assert_eq!(host.reveal_count(0), 1);
        assert_eq!(host.reveal_count(1), 1);
        assert_eq!(ctrl.reveals().len(), 2);
    }

    #[test]
    fn negligible_distance_skips_the_scroll() {
        let (mut ctrl, mut host) = setup(3);
        host.offset = 800.4;
        let writes = host.offset_writes;

        let t = ctrl.go_to_section(1, 0.0, &mut host).unwrap();
        assert_eq!(t, Transition::Skipped { from: 0, to: 1 });
        assert!(!t.needs_frames());
        assert!(!ctrl.is_animating());
        assert_eq!(ctrl.current_index(), 1);
        assert_eq!(host.highlighted.last().map(String::as_str), Some("s1"));
        assert_eq!(host.offset_writes, writes);
        // The skipped transition still starts the cooldown.
        assert_eq!(ctrl.go_to_section(2, 100.0, &mut host), Err(Rejected::CoolingDown));
    }

    #[test]
    fn wheel_defers_to_tall_section() {
        let (mut ctrl, mut host) = setup(5);
        host.metrics.insert(
            2,
            SectionMetrics { scroll_top: 200.0, scroll_height: 2400.0, client_height: 800.0 },
        );
        ctrl.go_to_section(2, 0.0, &mut host).unwrap();
        run_to_idle(&mut ctrl, &mut host, 0.0);

        let response = ctrl.handle_wheel(120.0, 5000.0, &mut host);
        assert!(!response.prevent_default);
        assert_eq!(response.outcome, Err(Rejected::NoIntent));
        assert_eq!(ctrl.current_index(), 2);
        assert!(!ctrl.is_animating());

        // Once scrolled to the bottom the same gesture pages forward.
        host.metrics.get_mut(&2).unwrap().scroll_top = 1600.0;
        let response = ctrl.handle_wheel(120.0, 5000.0, &mut host);
        assert!(response.prevent_default);
        assert_eq!(ctrl.current_index(), 3);
    }

    #[test]
    fn wheel_is_swallowed_while_animating() {
        let (mut ctrl, mut host) = setup(3);
        let first = ctrl.handle_wheel(50.0, 0.0, &mut host);
        assert!(first.prevent_default);
        assert!(first.needs_frames());

        let second = ctrl.handle_wheel(50.0, 100.0, &mut host);
        assert!(second.prevent_default);
        assert_eq!(second.outcome, Err(Rejected::Animating));
        assert_eq!(ctrl.current_index(), 1);
    }

    #[test]
    fn short_swipe_does_not_navigate() {
        let (mut ctrl, mut host) = setup(3);
        ctrl.handle_touch_start(500.0);
        let response = ctrl.handle_touch_end(470.0, 0.0, &mut host);
        assert_eq!(response.outcome, Err(Rejected::NoIntent));
        assert_eq!(ctrl.current_index(), 0);

        ctrl.handle_touch_start(500.0);
        let response = ctrl.handle_touch_end(440.0, 0.0, &mut host);
        assert!(response.outcome.is_ok());
        assert_eq!(ctrl.current_index(), 1);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let (mut ctrl, mut host) = setup(3);
        let response = ctrl.handle_touch_end(10.0, 0.0, &mut host);
        assert_eq!(response, InputResponse::passthrough());
    }

    #[test]
    fn keys_navigate_and_are_ignored_while_animating() {
        let (mut ctrl, mut host) = setup(5);

        let end = ctrl.handle_key("End", 0.0, &mut host);
        assert!(end.prevent_default);
        assert_eq!(ctrl.current_index(), 4);

        let home = ctrl.handle_key("Home", 100.0, &mut host);
        assert!(home.prevent_default);
        assert_eq!(home.outcome, Err(Rejected::Animating));
        assert_eq!(ctrl.current_index(), 4);

        run_to_idle(&mut ctrl, &mut host, 0.0);
        ctrl.handle_key("Home", 1000.0, &mut host);
        assert_eq!(ctrl.current_index(), 0);

        let other = ctrl.handle_key("a", 5000.0, &mut host);
        assert!(!other.prevent_default);
    }

    #[test]
    fn nav_click_resolves_section_id() {
        let (mut ctrl, mut host) = setup(4);
        let response = ctrl.handle_nav_click("s3", 0.0, &mut host);
        assert!(response.prevent_default);
        assert_eq!(response.outcome, Ok(Transition::Animating { from: 0, to: 3 }));

        run_to_idle(&mut ctrl, &mut host, 0.0);
        let unknown = ctrl.handle_nav_click("missing", 5000.0, &mut host);
        assert_eq!(unknown.outcome, Err(Rejected::UnknownSection));
        assert_eq!(ctrl.current_index(), 3);
    }

    #[test]
    fn resize_while_idle_snaps_without_reveal() {
        let (mut ctrl, mut host) = setup(5);
        ctrl.go_to_section(3, 0.0, &mut host).unwrap();
        run_to_idle(&mut ctrl, &mut host, 0.0);
        let revealed = host.revealed.clone();

        host.viewport = 650.0;
        ctrl.handle_input(&PageInput::Resize, 3000.0, &mut host);

        assert_eq!(host.offset, 3.0 * 650.0);
        assert!(!ctrl.is_animating());
        assert_eq!(host.revealed, revealed);
        assert!(!ctrl.tick(3016.0, &mut host));
    }

    #[test]
    fn resize_mid_flight_retargets() {
        let (mut ctrl, mut host) = setup(3);
        ctrl.go_to_section(1, 0.0, &mut host).unwrap();
        ctrl.tick(200.0, &mut host);

        host.viewport = 600.0;
        ctrl.on_resize(&mut host);
        assert!(ctrl.is_animating());

        assert!(!ctrl.tick(700.0, &mut host));
        assert_eq!(host.offset, 600.0);
    }

    #[test]
    fn handle_input_routes_touch_pairs() {
        let (mut ctrl, mut host) = setup(3);
        ctrl.handle_input(&PageInput::TouchStart { y: 300.0 }, 0.0, &mut host);
        let response = ctrl.handle_input(&PageInput::TouchEnd { y: 200.0 }, 0.0, &mut host);
        assert!(response.needs_frames());
        assert_eq!(ctrl.current_index(), 1);

        run_to_idle(&mut ctrl, &mut host, 0.0);
        ctrl.handle_input(&PageInput::nav_click("s0"), 2000.0, &mut host);
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn resize_keeps_offset_on_navigation_grid() {
        // The scroll container is shorter than the window; only the host's
        // measure decides the grid.
        let mut ctrl = controller(5);
        let mut host = FakeHost::new(740.0);
        ctrl.init(&mut host);
        ctrl.go_to_section(3, 0.0, &mut host).unwrap();
        let end = run_to_idle(&mut ctrl, &mut host, 0.0);
        assert_eq!(host.offset, 2220.0);

        ctrl.handle_input(&PageInput::Resize, end + 100.0, &mut host);
        assert_eq!(host.offset, 2220.0);

        ctrl.go_to_section(4, end + 2000.0, &mut host).unwrap();
        assert!(ctrl.tick(end + 2000.0, &mut host));
        assert_eq!(host.offset, 2220.0);
        run_to_idle(&mut ctrl, &mut host, end + 2000.0);
        assert_eq!(host.offset, 4.0 * 740.0);
    }

    #[test]
    fn finish_snaps_in_flight_transition() {
        let (mut ctrl, mut host) = setup(3);
        ctrl.go_to_section(2, 0.0, &mut host).unwrap();
        ctrl.tick(100.0, &mut host);

        ctrl.finish(&mut host);
        assert!(!ctrl.is_animating());
        assert_eq!(host.offset, 1600.0);
        assert_eq!(ctrl.current_index(), 2);

        assert_eq!(
            ctrl.go_to_section(0, 1000.0, &mut host),
            Ok(Transition::Animating { from: 2, to: 0 })
        );
    }

    #[test]
    fn finish_while_idle_leaves_offset_alone() {
        let (mut ctrl, mut host) = setup(3);
        let writes = host.offset_writes;
        ctrl.finish(&mut host);
        assert_eq!(host.offset_writes, writes);
    }
}
