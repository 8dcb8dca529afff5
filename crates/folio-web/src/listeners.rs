// listeners.rs
//
// DOM event wiring. Each listener converts its event into a PageInput, hands
// it to the runner, and applies the response (preventDefault, frame loop).
// Closures are leaked with `forget()`: they live as long as the page.

use folio_engine::PageInput;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, KeyboardEvent, TouchEvent, WheelEvent, Window};

use crate::{now_ms, schedule_typewriter, start_frames, with_runner};

/// Dispatch `input` and apply the response to `event`.
fn feed(input: PageInput, event: &web_sys::Event) {
    let Some(response) = with_runner(|r| r.handle(&input, now_ms())) else {
        return;
    };
    if response.prevent_default && event.cancelable() {
        event.prevent_default();
    }
    if response.needs_frames() {
        start_frames();
    }
}

fn listen<E: FromWasmAbi + 'static>(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Install every listener the page needs. Pagination listeners are skipped
/// when the page has no sections.
pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let pager = with_runner(|r| {
        r.page()
            .map(|page| (page.container().clone(), page.nav_links().to_vec()))
    })
    .flatten();

    if let Some((container, nav_links)) = pager {
        install_pager(window, &container, &nav_links)?;
    }
    install_language_toggle(document)?;
    Ok(())
}

fn install_pager(window: &Window, container: &Element, nav_links: &[Element]) -> Result<(), JsValue> {
    listen(container, "wheel", |evt: WheelEvent| {
        feed(PageInput::Wheel { delta_y: evt.delta_y() }, &evt);
    })?;

    listen(container, "touchstart", |evt: TouchEvent| {
        if let Some(touch) = evt.touches().get(0) {
            feed(PageInput::TouchStart { y: touch.client_y() as f64 }, &evt);
        }
    })?;

    listen(container, "touchend", |evt: TouchEvent| {
        if let Some(touch) = evt.changed_touches().get(0) {
            feed(PageInput::TouchEnd { y: touch.client_y() as f64 }, &evt);
        }
    })?;

    listen(window, "keydown", |evt: KeyboardEvent| {
        feed(PageInput::key(evt.key()), &evt);
    })?;

    listen(window, "resize", |evt: web_sys::Event| {
        feed(PageInput::Resize, &evt);
    })?;

    for link in nav_links {
        let Some(section_id) = link.get_attribute("data-section") else {
            continue;
        };
        listen(link, "click", move |evt: web_sys::Event| {
            feed(PageInput::nav_click(section_id.clone()), &evt);
        })?;
    }
    Ok(())
}

fn install_language_toggle(document: &Document) -> Result<(), JsValue> {
    let Some(toggle) = document.query_selector(".lang-toggle")? else {
        return Ok(());
    };
    listen(&toggle, "click", |_evt: web_sys::Event| {
        if let Some(Some(task)) = with_runner(|r| r.toggle_language(now_ms())) {
            schedule_typewriter(task, 0.0);
        }
    })
}
