//! # Theming and locals
//!
//! Global UI parameters live in thread‑local "composition locals":
//!
//! - `Theme`: color scheme for backgrounds, surfaces and text.
//! - `Typography`: the type scale widgets pick styles from.
//! - `Density`: dp→px scale factor.
//! - `TextScale`: user text scaling.
//! - `TextDirection`: LTR or RTL.
//! - `Resources`: string table, image store and the active locale.
//!
//! Each `with_*` helper pushes a frame, runs the closure and pops the frame
//! again, so overrides only apply to the subtree composed inside:
//!
//! ```rust
//! use heroes_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().background, Color::WHITE);
//! });
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::Color;
use crate::resources::{ImageStore, Locale, StringTable};
use crate::typography::Typography;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// Runs `f` with `value` provided for its type.
pub fn provide<T: Any, R>(value: T, f: impl FnOnce() -> R) -> R {
    // Pops on unwind too
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| {
        let mut frame: HashMap<TypeId, Box<dyn Any>> = HashMap::new();
        frame.insert(TypeId::of::<T>(), Box::new(value));
        st.borrow_mut().push(frame);
    });
    let _guard = Guard;
    f()
}

/// Innermost provided value of type `T`, if any.
pub fn current<T: Any + Clone>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>())?.downcast_ref::<T>().cloned())
    })
}

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

/// sp → px: density plus the user's text scale.
pub fn sp_to_px(sp: f32) -> f32 {
    dp_to_px(sp) * text_scale().0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Material‑style color scheme, reduced to the roles the widgets use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Window background / app root.
    pub background: Color,
    pub on_background: Color,
    /// Cards, bars and other containers.
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub outline: Color,
    /// Elevation shadows.
    pub shadow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            on_background: Color::from_hex("#DDDDDD"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            surface_variant: Color::from_hex("#2A2A2A"),
            on_surface_variant: Color::from_hex("#BBBBBB"),
            primary: Color::from_hex("#34AF82"),
            on_primary: Color::WHITE,
            outline: Color::from_hex("#555555"),
            shadow: Color::BLACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextScale(pub f32);

impl Default for TextScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Resource tables visible to widgets, shared by reference.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    pub strings: Rc<StringTable>,
    pub images: Rc<ImageStore>,
    pub locale: Locale,
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    provide(theme, f)
}

pub fn with_typography<R>(typography: Typography, f: impl FnOnce() -> R) -> R {
    provide(typography, f)
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    provide(density, f)
}

pub fn with_text_scale<R>(ts: TextScale, f: impl FnOnce() -> R) -> R {
    provide(ts, f)
}

pub fn with_text_direction<R>(dir: TextDirection, f: impl FnOnce() -> R) -> R {
    provide(dir, f)
}

pub fn with_resources<R>(resources: Resources, f: impl FnOnce() -> R) -> R {
    provide(resources, f)
}

// Getters fall back to defaults when nothing is provided

pub fn theme() -> Theme {
    current().unwrap_or_default()
}

pub fn typography() -> Typography {
    current().unwrap_or_default()
}

pub fn density() -> Density {
    current().unwrap_or_default()
}

pub fn text_scale() -> TextScale {
    current().unwrap_or_default()
}

pub fn text_direction() -> TextDirection {
    current().unwrap_or_default()
}

pub fn resources() -> Resources {
    current().unwrap_or_default()
}
