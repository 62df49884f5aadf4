#![allow(non_snake_case)]
//! Widgets, Material 3 components and layout.

pub mod inspect;
pub mod layout;
pub mod lazy;
pub mod material3;
pub mod res;
pub mod text;

pub use inspect::outline;
pub use layout::{Frame, LayoutError, ScrollExtent, SemNode, layout_and_paint};
pub use lazy::{LazyColumn, LazyListState};
pub use material3::{CARD_CORNER_DP, Card, CenterAlignedTopAppBar, Scaffold, TOP_APP_BAR_HEIGHT_DP};
pub use res::{painter_resource, string_resource};

use heroes_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    View::new(0, ViewKind::Surface)
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

/// Wrapping text in the body style and `on_surface` color of the current theme.
pub fn Text(text: impl Into<String>) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Text {
            text: text.clone(),
            color: theme().on_surface,
            style: typography().body_large,
            soft_wrap: true,
            max_lines: None,
            align: TextAlign::Start,
        },
    )
    .semantics(Semantics::new(Role::Text).label(text))
}

/// Empty box occupying exactly what `modifier` sizes it to.
pub fn Spacer(modifier: Modifier) -> View {
    Box(modifier.flex_shrink(0.0))
}

pub fn Image(modifier: Modifier, image: ImageId, content_description: Option<String>) -> View {
    let mut semantics = Semantics::new(Role::Image);
    semantics.label = content_description.clone();
    View::new(
        0,
        ViewKind::Image {
            image,
            content_description,
        },
    )
    .modifier(modifier)
    .semantics(semantics)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);

/// Method styling for `Text` views; no-ops on other kinds.
pub trait TextExt {
    fn color(self, c: Color) -> View;
    fn style(self, s: TextStyle) -> View;
    fn align(self, a: TextAlign) -> View;
    fn single_line(self) -> View;
}

impl TextExt for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn style(mut self, s: TextStyle) -> View {
        if let ViewKind::Text { style, .. } = &mut self.kind {
            *style = s;
        }
        self
    }
    fn align(mut self, a: TextAlign) -> View {
        if let ViewKind::Text { align, .. } = &mut self.kind {
            *align = a;
        }
        self
    }
    fn single_line(mut self) -> View {
        if let ViewKind::Text {
            soft_wrap,
            max_lines,
            ..
        } = &mut self.kind
        {
            *soft_wrap = false;
            *max_lines = Some(1);
        }
        self
    }
}
