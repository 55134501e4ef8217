// File: crates/heatmap-core/src/theme.rs
// Summary: Light/Dark theming for heatmap grid, label and cell colors.

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    /// Gridline at a labelled tick.
    pub grid_major: Rgba,
    /// Gridline at an unlabelled tick.
    pub grid_minor: Rgba,
    pub label: Rgba,
    pub cell_fill: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::new(0, 0, 0, 0),
            grid_major: Rgba::opaque(0xd9, 0xd9, 0xd9),
            grid_minor: Rgba::opaque(0xee, 0xee, 0xee),
            label: Rgba::new(0, 0, 0, 0x73),
            cell_fill: Rgba::opaque(0xe6, 0xf6, 0xff),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            grid_major: Rgba::opaque(70, 70, 78),
            grid_minor: Rgba::opaque(40, 40, 45),
            label: Rgba::opaque(210, 210, 220),
            cell_fill: Rgba::opaque(64, 160, 255),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Rgba::opaque(0x00, 0x00, 0x00),
            grid_major: Rgba::opaque(0xcc, 0xcc, 0xcc),
            grid_minor: Rgba::opaque(0x44, 0x44, 0x44),
            label: Rgba::opaque(0xff, 0xff, 0xff),
            cell_fill: Rgba::opaque(0xff, 0xff, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
