use heroes_core::{Density, Locale, TextScale, current, provide};

/// Layout constants of the hero list, in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroListDimens {
    pub list_spacing: f32,
    pub list_padding_horizontal: f32,
    pub card_elevation: f32,
    pub item_padding: f32,
    pub item_min_height: f32,
    pub image_spacing: f32,
    pub image_size: f32,
    pub image_corner: f32,
}

impl Default for HeroListDimens {
    fn default() -> Self {
        Self {
            list_spacing: 8.0,
            list_padding_horizontal: 16.0,
            card_elevation: 2.0,
            item_padding: 16.0,
            item_min_height: 72.0,
            image_spacing: 16.0,
            image_size: 72.0,
            image_corner: 8.0,
        }
    }
}

pub fn with_dimens<R>(dimens: HeroListDimens, f: impl FnOnce() -> R) -> R {
    provide(dimens, f)
}

pub fn dimens() -> HeroListDimens {
    current().unwrap_or_default()
}

/// Everything the host decides about a frame: theme, locale and the
/// display metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub dark_theme: bool,
    pub locale: Locale,
    pub density: Density,
    pub text_scale: TextScale,
    pub dimens: HeroListDimens,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_theme: false,
            locale: Locale::default(),
            density: Density::default(),
            text_scale: TextScale::default(),
            dimens: HeroListDimens::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_theme(mut self, dark: bool) -> Self {
        self.dark_theme = dark;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn density(mut self, scale: f32) -> Self {
        self.density = Density { scale };
        self
    }

    pub fn text_scale(mut self, scale: f32) -> Self {
        self.text_scale = TextScale(scale);
        self
    }

    pub fn dimens(mut self, dimens: HeroListDimens) -> Self {
        self.dimens = dimens;
        self
    }
}
