//! Superheroes: a scrolling list of hero cards under a centered title bar.
//!
//! [`app`] composes the screen for an [`AppConfig`], [`render`] composes and
//! lays it out in one go:
//!
//! ```rust
//! use superheroes::{AppConfig, HeroesRepository, render};
//! use heroes_core::Role;
//!
//! let frame = render(&AppConfig::default(), HeroesRepository::heroes(), (411, 891), None)?;
//! assert_eq!(frame.with_role(Role::ListItem).count(), 6);
//! # Ok::<(), heroes_ui::LayoutError>(())
//! ```

pub mod config;
pub mod data;
pub mod model;
pub mod res;
pub mod screen;
pub mod tests;
pub mod theme;

pub use config::{AppConfig, HeroListDimens, dimens, with_dimens};
pub use data::HeroesRepository;
pub use model::Hero;
pub use res::R;
pub use screen::{HeroDescription, HeroImage, HeroItem, HeroName, SuperheroesApp, TopAppBar};
pub use theme::SuperheroesTheme;

use heroes_core::{Modifier, View, theme, with_density, with_resources, with_text_scale};
use heroes_ui::{Frame, LayoutError, LazyListState, Surface, layout_and_paint};

/// Runs `f` with every local the screen reads: display metrics, resources,
/// list dimensions and the theme.
pub fn with_app_locals<T>(config: &AppConfig, f: impl FnOnce() -> T) -> T {
    with_density(config.density, || {
        with_text_scale(config.text_scale, || {
            with_resources(res::resources(config.locale.clone()), || {
                with_dimens(config.dimens, || SuperheroesTheme(config.dark_theme, f))
            })
        })
    })
}

/// Root view of the app, filling the window with the theme background.
#[allow(non_snake_case)]
fn AppRoot(heroes: &[Hero], list_state: Option<&LazyListState>) -> View {
    Surface(
        Modifier::new().fill_max_size().background(theme().background),
        SuperheroesApp(heroes, list_state),
    )
}

/// Composes the screen with the shipped hero list.
pub fn app(config: &AppConfig) -> View {
    with_app_locals(config, || AppRoot(HeroesRepository::heroes(), None))
}

/// Composes `heroes` and lays the screen out at `size_px`.
pub fn render(
    config: &AppConfig,
    heroes: &[Hero],
    size_px: (u32, u32),
    list_state: Option<&LazyListState>,
) -> Result<Frame, LayoutError> {
    with_app_locals(config, || {
        let root = AppRoot(heroes, list_state);
        let frame = layout_and_paint(&root, size_px)?;
        if let (Some(state), Some(extent)) = (list_state, frame.scroll_extents.first()) {
            state.set_extent(*extent);
        }
        Ok(frame)
    })
}

/// Installs the platform logger. Safe to call more than once.
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Trace)
                .with_tag("superheroes"),
        );
    }
    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}
