// dom.rs
//
// DOM side of the page: element discovery and the PageHost implementation.
// Everything here is read once at setup; later calls only touch classes,
// attributes and scroll offsets.

use folio_engine::{Language, PageHost, RevealSchedule, SectionMetrics};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Items inside a section that fade in on first activation.
pub const FADE_ITEMS: &str = ".exp-item, .project-card, .strength-card, .skills-group, .edu-item";
const TAG_GROUPS: &str = ".tag-group";
const TAGS: &str = ".tag";
const ACTIVE: &str = "active";
const VISIBLE: &str = "visible";

/// Collect every element of a NodeList that is an `Element`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Run `f` after `delay_ms`, or right away when there is no delay.
pub fn after(window: &Window, delay_ms: f64, f: impl FnOnce() + 'static) {
    if delay_ms <= 0.0 {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<js_sys::Function>(),
        delay_ms.round() as i32,
    ) {
        log::warn!("setTimeout failed: {:?}", err);
    }
}

/// The paginated scroll surface and its sections.
pub struct DomPage {
    window: Window,
    container: HtmlElement,
    sections: Vec<HtmlElement>,
    nav_links: Vec<Element>,
}

impl DomPage {
    /// Find the scroll container, sections and nav links.
    /// Returns `Ok(None)` when the page has no container or no sections.
    pub fn discover(window: &Window, document: &Document) -> Result<Option<Self>, JsValue> {
        let container = match document.query_selector("[data-scroll-container]")? {
            Some(el) => Some(el),
            None => document.query_selector("main")?,
        };
        let Some(container) = container.and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
            return Ok(None);
        };

        let sections: Vec<HtmlElement> = elements(&container.query_selector_all(".section")?)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        if sections.is_empty() {
            return Ok(None);
        }

        for section in &sections {
            for item in elements(&section.query_selector_all(FADE_ITEMS)?) {
                let _ = item.class_list().add_1("fade-in");
            }
        }

        let nav_links = elements(&document.query_selector_all(".nav-link[data-section]")?);

        Ok(Some(Self {
            window: window.clone(),
            container,
            sections,
            nav_links,
        }))
    }

    /// Section ids in document order. Sections without an id get `section-N`.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, el)| {
                let id = el.id();
                if id.is_empty() { format!("section-{}", i) } else { id }
            })
            .collect()
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn nav_links(&self) -> &[Element] {
        &self.nav_links
    }
}

impl PageHost for DomPage {
    fn viewport_height(&self) -> f64 {
        let height = self.container.client_height();
        if height > 0 {
            return height as f64;
        }
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_offset(&self) -> f64 {
        self.container.scroll_top() as f64
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.container.set_scroll_top(offset.round() as i32);
    }

    fn section_metrics(&self, index: usize) -> Option<SectionMetrics> {
        self.sections.get(index).map(|el| SectionMetrics {
            scroll_top: el.scroll_top() as f64,
            scroll_height: el.scroll_height() as f64,
            client_height: el.client_height() as f64,
        })
    }

    fn highlight_nav(&mut self, section_id: &str) {
        for link in &self.nav_links {
            let classes = link.class_list();
            if link.get_attribute("data-section").as_deref() == Some(section_id) {
                let _ = classes.add_1(ACTIVE);
            } else {
                let _ = classes.remove_1(ACTIVE);
            }
        }
    }

    fn reveal_section(&mut self, index: usize, schedule: &RevealSchedule) {
        let Some(section) = self.sections.get(index) else {
            return;
        };

        match section.query_selector_all(FADE_ITEMS) {
            Ok(list) => {
                for (i, item) in elements(&list).into_iter().enumerate() {
                    after(&self.window, schedule.item_delay(i), move || {
                        let _ = item.class_list().add_1(VISIBLE);
                    });
                }
            }
            Err(err) => log::warn!("section {}: fade-in query failed: {:?}", index, err),
        }

        // Each group starts on the item stagger; its tags cascade on the tag stagger.
        match section.query_selector_all(TAG_GROUPS) {
            Ok(list) => {
                for (g, group) in elements(&list).into_iter().enumerate() {
                    let Ok(tags) = group.query_selector_all(TAGS) else {
                        continue;
                    };
                    for (t, tag) in elements(&tags).into_iter().enumerate() {
                        let delay = schedule.item_delay(g) + schedule.tag_delay(t);
                        after(&self.window, delay, move || {
                            let _ = tag.class_list().add_1(VISIBLE);
                        });
                    }
                }
            }
            Err(err) => log::warn!("section {}: tag group query failed: {:?}", index, err),
        }
    }
}

/// `<html data-lang>` plus the `[data-lang-btn]` buttons.
pub struct LanguageView {
    root: Element,
    buttons: Vec<Element>,
}

impl LanguageView {
    pub fn discover(document: &Document) -> Result<Option<Self>, JsValue> {
        let Some(root) = document.document_element() else {
            return Ok(None);
        };
        let buttons = elements(&document.query_selector_all("[data-lang-btn]")?);
        Ok(Some(Self { root, buttons }))
    }

    /// Language the markup declares on `<html data-lang>`, if valid.
    pub fn declared(&self) -> Option<Language> {
        self.root
            .get_attribute("data-lang")
            .as_deref()
            .and_then(Language::from_code)
    }

    pub fn apply(&self, language: Language) {
        if let Err(err) = self.root.set_attribute("data-lang", language.code()) {
            log::warn!("could not set data-lang: {:?}", err);
        }
        for button in &self.buttons {
            let classes = button.class_list();
            if button.get_attribute("data-lang-btn").as_deref() == Some(language.code()) {
                let _ = classes.add_1(ACTIVE);
            } else {
                let _ = classes.remove_1(ACTIVE);
            }
        }
    }
}

/// Element whose text is typed out, with one text variant per language.
pub struct TypewriterTarget {
    element: Element,
}

impl TypewriterTarget {
    pub fn discover(document: &Document) -> Result<Option<Self>, JsValue> {
        Ok(document
            .query_selector("[data-typewriter]")?
            .map(|element| Self { element }))
    }

    pub fn text_for(&self, language: Language) -> String {
        self.element
            .get_attribute(&format!("data-text-{}", language.code()))
            .unwrap_or_default()
    }

    pub fn show(&self, visible: &str) {
        self.element.set_text_content(Some(visible));
    }
}
