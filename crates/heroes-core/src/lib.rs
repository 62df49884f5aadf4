//! # View model
//!
//! A UI is a tree of plain `View` values built by ordinary functions:
//!
//! ```rust
//! use heroes_core::*;
//!
//! let title = View::new(
//!     0,
//!     ViewKind::Text {
//!         text: "Superheroes".into(),
//!         color: theme().on_surface,
//!         style: typography().headline_medium,
//!         soft_wrap: true,
//!         max_lines: None,
//!         align: TextAlign::Center,
//!     },
//! );
//! assert!(title.children.is_empty());
//! ```
//!
//! Functions read ambient parameters (theme, type scale, density, resource
//! tables) from composition locals, see [`locals`]. Rebuilding the tree
//! from the same inputs yields an equal tree; there is no retained state.
//!
//! Layout and painting live in `heroes-ui`, which turns a `View` into a
//! [`Scene`] of draw commands for the platform.

pub mod color;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod resources;
pub mod semantics;
pub mod tests;
pub mod typography;
pub mod view;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use resources::*;
pub use semantics::*;
pub use typography::*;
pub use view::*;
