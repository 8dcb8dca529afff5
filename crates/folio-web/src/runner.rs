use folio_engine::{
    InputResponse, Language, LanguagePreference, NavIntent, PageConfig, PageInput,
    ScrollController, Section, TaskId, Typewriter, TypewriterStep,
};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::dom::{DomPage, LanguageView, TypewriterTarget};
use crate::storage::LocalStore;

/// Controller bound to the DOM it drives.
struct Pager {
    controller: ScrollController,
    page: DomPage,
}

/// Owns all page state for one document.
///
/// Lives in a `thread_local!` in lib.rs because wasm-bindgen callbacks are
/// free functions; every DOM callback borrows it for one synchronous call.
pub struct PageRunner {
    pager: Option<Pager>,
    language: LanguagePreference<LocalStore>,
    language_view: Option<LanguageView>,
    typewriter: Typewriter,
    typewriter_target: Option<TypewriterTarget>,
    frames_running: bool,
}

impl PageRunner {
    pub fn new(window: &Window, document: &Document, config: PageConfig) -> Result<Self, JsValue> {
        let pager = match DomPage::discover(window, document)? {
            Some(page) => {
                let sections = Section::from_ids(page.section_ids());
                ScrollController::new(sections, config.clone())
                    .map(|controller| Pager { controller, page })
            }
            None => None,
        };
        if pager.is_none() {
            log::info!("no scroll container or sections; pagination disabled");
        }

        let language_view = LanguageView::discover(document)?;
        let fallback = language_view
            .as_ref()
            .and_then(LanguageView::declared)
            .unwrap_or_default();

        Ok(Self {
            pager,
            language: LanguagePreference::load_or(LocalStore::from_window(window), fallback),
            language_view,
            typewriter: Typewriter::new(config.typewriter_char_ms),
            typewriter_target: TypewriterTarget::discover(document)?,
            frames_running: false,
        })
    }

    /// Initialize the page. Returns the typewriter task to schedule, if any.
    pub fn init(&mut self, now_ms: f64) -> Option<TaskId> {
        if let Some(pager) = &mut self.pager {
            pager.controller.init(&mut pager.page);
        }
        self.apply_language(now_ms)
    }

    pub fn page(&self) -> Option<&DomPage> {
        self.pager.as_ref().map(|p| &p.page)
    }

    pub fn current_section(&self) -> Option<usize> {
        self.pager.as_ref().map(|p| p.controller.current_index())
    }

    /// Feed one input event to the controller.
    pub fn handle(&mut self, input: &PageInput, now_ms: f64) -> InputResponse {
        match &mut self.pager {
            Some(pager) => pager.controller.handle_input(input, now_ms, &mut pager.page),
            None => InputResponse::passthrough(),
        }
    }

    /// Programmatic navigation. Returns true when frames must be driven.
    pub fn go_to(&mut self, index: usize, now_ms: f64) -> bool {
        let Some(pager) = &mut self.pager else {
            return false;
        };
        let outcome = pager.controller.dispatch(NavIntent::GoTo(index), now_ms, &mut pager.page);
        matches!(outcome, Ok(t) if t.needs_frames())
    }

    /// Mark the frame loop as running. Returns false if it already was.
    pub fn claim_frames(&mut self) -> bool {
        if self.frames_running {
            return false;
        }
        self.frames_running = true;
        true
    }

    /// The frame loop could not continue: land any transition at its end so
    /// later navigation is not blocked.
    pub fn abort_frames(&mut self) {
        self.frames_running = false;
        if let Some(pager) = &mut self.pager {
            pager.controller.finish(&mut pager.page);
        }
    }

    /// One animation frame. Returns true while another frame is needed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let more = match &mut self.pager {
            Some(pager) => pager.controller.tick(now_ms, &mut pager.page),
            None => false,
        };
        self.frames_running = more;
        more
    }

    pub fn language(&self) -> Language {
        self.language.current()
    }

    pub fn toggle_language(&mut self, now_ms: f64) -> Option<TaskId> {
        let next = self.language.toggle();
        log::info!("language switched to {}", next);
        self.apply_language(now_ms)
    }

    pub fn set_language(&mut self, language: Language, now_ms: f64) -> Option<TaskId> {
        self.language.set(language);
        self.apply_language(now_ms)
    }

    /// Advance the typewriter. Returns the delay before the next step.
    pub fn typewriter_step(&mut self, task: TaskId, now_ms: f64) -> Option<f64> {
        let target = self.typewriter_target.as_ref()?;
        match self.typewriter.step(task, now_ms) {
            TypewriterStep::Stale => None,
            TypewriterStep::Typing { visible, next_in_ms } => {
                target.show(&visible);
                Some(next_in_ms)
            }
            TypewriterStep::Done { visible } => {
                target.show(&visible);
                None
            }
        }
    }

    /// Render the current language and restart the typewriter with its text.
    fn apply_language(&mut self, now_ms: f64) -> Option<TaskId> {
        let language = self.language.current();
        if let Some(view) = &self.language_view {
            view.apply(language);
        }
        let target = self.typewriter_target.as_ref()?;
        let text = target.text_for(language);
        target.show("");
        Some(self.typewriter.start(&text, now_ms))
    }
}
