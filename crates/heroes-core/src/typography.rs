//! Material 3 type scale.
//!
//! Sizes are in sp (scaled by `TextScale` and `Density` at layout time),
//! line heights likewise.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
}

impl TextStyle {
    pub const fn new(font_size: f32, line_height: f32) -> Self {
        Self {
            font_size,
            line_height,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Typography::default().body_large
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub display_small: TextStyle,
    pub headline_medium: TextStyle,
    pub body_large: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            display_small: TextStyle::new(36.0, 44.0),
            headline_medium: TextStyle::new(28.0, 36.0),
            body_large: TextStyle::new(16.0, 24.0),
        }
    }
}
