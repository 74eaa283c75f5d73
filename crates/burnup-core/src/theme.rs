// File: crates/burnup-core/src/theme.rs
// Summary: Overlay styling presets (trend line stroke, goal marker fill).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub line_stroke: &'static str,
    pub line_width: f64,
    pub marker_fill: &'static str,
}

impl Theme {
    pub fn gray() -> Self {
        Self { name: "gray", line_stroke: "gray", line_width: 1.0, marker_fill: "red" }
    }

    pub fn high_contrast() -> Self {
        Self { name: "high-contrast", line_stroke: "black", line_width: 2.0, marker_fill: "magenta" }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::gray() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::gray(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to gray.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::gray()
}
