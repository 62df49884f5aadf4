use heroes_core::{Color, Theme, Typography, with_theme, with_typography};

pub const LIGHT: Theme = Theme {
    background: Color::from_argb(0xFFFEFCF5),
    on_background: Color::from_argb(0xFF1B1C18),
    surface: Color::from_argb(0xFFFEFCF5),
    on_surface: Color::from_argb(0xFF1B1C18),
    surface_variant: Color::from_argb(0xFFE1E4D5),
    on_surface_variant: Color::from_argb(0xFF44483D),
    primary: Color::from_argb(0xFF466800),
    on_primary: Color::from_argb(0xFFFFFFFF),
    outline: Color::from_argb(0xFF75796C),
    shadow: Color::BLACK,
};

pub const DARK: Theme = Theme {
    background: Color::from_argb(0xFF1B1C18),
    on_background: Color::from_argb(0xFFE4E3DB),
    surface: Color::from_argb(0xFF1B1C18),
    on_surface: Color::from_argb(0xFFE4E3DB),
    surface_variant: Color::from_argb(0xFF44483D),
    on_surface_variant: Color::from_argb(0xFFC5C8BA),
    primary: Color::from_argb(0xFFABD476),
    on_primary: Color::from_argb(0xFF223600),
    outline: Color::from_argb(0xFF8F9285),
    shadow: Color::BLACK,
};

pub fn color_scheme(dark_theme: bool) -> Theme {
    if dark_theme { DARK } else { LIGHT }
}

/// Runs `content` under the app's color scheme and the Material 3 type scale.
#[allow(non_snake_case)]
pub fn SuperheroesTheme<R>(dark_theme: bool, content: impl FnOnce() -> R) -> R {
    with_theme(color_scheme(dark_theme), || {
        with_typography(Typography::default(), content)
    })
}
