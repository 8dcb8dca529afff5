//! WASM bridge for folio.
//!
//! `folio_init()` discovers the page, restores the language preference and
//! installs DOM listeners. All state lives in one `PageRunner` held in a
//! `thread_local!`; every callback borrows it for a single synchronous call.
//!
//! ```js
//! import init, { folio_init } from "./pkg/folio_web.js";
//! await init();
//! folio_init(JSON.stringify({ swipe_threshold_px: 60 }));
//! ```

pub mod dom;
pub mod listeners;
pub mod runner;
pub mod storage;

pub use runner::PageRunner;

use std::cell::RefCell;

use folio_engine::{Language, PageConfig, TaskId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static RUNNER: RefCell<Option<PageRunner>> = RefCell::new(None);
    static FRAME: RefCell<Option<Closure<dyn FnMut(f64)>>> = RefCell::new(None);
}

/// Borrow the runner. `None` before `folio_init()` has run.
pub(crate) fn with_runner<R>(f: impl FnOnce(&mut PageRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub(crate) fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Drive `PageRunner::frame` once per animation frame until the transition
/// settles. A second call while frames are running is a no-op.
pub(crate) fn start_frames() {
    if !with_runner(|r| r.claim_frames()).unwrap_or(false) {
        return;
    }
    FRAME.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(Closure::wrap(Box::new(|ts: f64| {
                if with_runner(|r| r.frame(ts)).unwrap_or(false) {
                    request_frame();
                }
            }) as Box<dyn FnMut(f64)>));
        }
    });
    request_frame();
}

fn request_frame() {
    let requested = match web_sys::window() {
        Some(window) => FRAME.with(|cell| match cell.borrow().as_ref() {
            Some(callback) => {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(_) => true,
                    Err(err) => {
                        log::warn!("requestAnimationFrame failed: {:?}", err);
                        false
                    }
                }
            }
            None => false,
        }),
        None => false,
    };
    if !requested {
        with_runner(|r| r.abort_frames());
    }
}

/// Keep stepping a typewriter task until it finishes or is superseded.
pub(crate) fn schedule_typewriter(task: TaskId, delay_ms: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    dom::after(&window, delay_ms, move || {
        if let Some(Some(next)) = with_runner(|r| r.typewriter_step(task, now_ms())) {
            schedule_typewriter(task, next);
        }
    });
}

#[wasm_bindgen]
pub fn folio_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref() {
        Some(json) => PageConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("invalid page config ({}); using defaults", err);
            PageConfig::default()
        }),
        None => PageConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let runner = PageRunner::new(&window, &document, config)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    let task = with_runner(|r| r.init(now_ms())).flatten();
    if let Some(task) = task {
        schedule_typewriter(task, 0.0);
    }

    listeners::install(&window, &document)?;
    log::info!("folio: initialized");
    Ok(())
}

/// Navigate to a section by index. Returns false when the request was dropped
/// or needed no animation.
#[wasm_bindgen]
pub fn folio_go_to(index: usize) -> bool {
    let animating = with_runner(|r| r.go_to(index, now_ms())).unwrap_or(false);
    if animating {
        start_frames();
    }
    animating
}

#[wasm_bindgen]
pub fn folio_current_section() -> Option<u32> {
    with_runner(|r| r.current_section())
        .flatten()
        .map(|i| i as u32)
}

#[wasm_bindgen]
pub fn folio_language() -> Option<String> {
    with_runner(|r| r.language().code().to_string())
}

/// Flip the language. Returns the new language code.
#[wasm_bindgen]
pub fn folio_toggle_language() -> Option<String> {
    let (language, task) = with_runner(|r| {
        let task = r.toggle_language(now_ms());
        (r.language(), task)
    })?;
    if let Some(task) = task {
        schedule_typewriter(task, 0.0);
    }
    Some(language.code().to_string())
}

/// Switch to `code` ("en" or "zh"). Unknown codes are ignored.
#[wasm_bindgen]
pub fn folio_set_language(code: &str) -> bool {
    let Some(language) = Language::from_code(code) else {
        return false;
    };
    match with_runner(|r| r.set_language(language, now_ms())) {
        Some(task) => {
            if let Some(task) = task {
                schedule_typewriter(task, 0.0);
            }
            true
        }
        None => false,
    }
}
