/// Raw page input the controller understands.
/// The bridge translates DOM events into these; no DOM types leak in.
#[derive(Debug, Clone, PartialEq)]
pub enum PageInput {
    /// Wheel scrolled by `delta_y` (positive = down).
    Wheel { delta_y: f64 },
    /// First touch point went down at client Y.
    TouchStart { y: f64 },
    /// Last touch point lifted at client Y.
    TouchEnd { y: f64 },
    /// A key was pressed. `key` is a `KeyboardEvent.key` value.
    Key { key: String },
    /// A nav link targeting `section_id` was clicked.
    NavClick { section_id: String },
    /// The viewport changed size. The new height comes from the page host.
    Resize,
}

impl PageInput {
    pub fn key(key: impl Into<String>) -> Self {
        PageInput::Key { key: key.into() }
    }

    pub fn nav_click(section_id: impl Into<String>) -> Self {
        PageInput::NavClick { section_id: section_id.into() }
    }
}
