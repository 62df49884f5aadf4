use std::cell::Cell;

use heroes_core::*;

use crate::layout::ScrollExtent;

/// Scroll position of a `LazyColumn`, in px.
///
/// The offset is clamped to `[0, content - viewport]` once the list has been
/// laid out and its extent reported back through [`set_extent`](Self::set_extent).
#[derive(Debug, Default)]
pub struct LazyListState {
    offset: Cell<f32>,
    extent: Cell<Option<ScrollExtent>>,
}

impl LazyListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    fn max_offset(&self) -> f32 {
        match self.extent.get() {
            Some(e) => (e.content_px - e.viewport_px).max(0.0),
            None => f32::INFINITY,
        }
    }

    pub fn set_extent(&self, extent: ScrollExtent) {
        self.extent.set(Some(extent));
        self.scroll_to(self.offset.get());
    }

    /// Non-finite offsets are ignored.
    pub fn scroll_to(&self, off_px: f32) {
        if !off_px.is_finite() {
            return;
        }
        self.offset.set(off_px.clamp(0.0, self.max_offset()));
    }

    /// Consumes `delta_px`; returns the part that hit an edge.
    pub fn scroll_by(&self, delta_px: f32) -> f32 {
        if !delta_px.is_finite() {
            return delta_px;
        }
        let before = self.offset.get();
        self.scroll_to(before + delta_px);
        delta_px - (self.offset.get() - before)
    }
}

/// Vertical list with `spacing_dp` between consecutive items and
/// `content_padding` around them. Every item is composed; the list is meant
/// for small, fixed data sets.
pub fn LazyColumn<T>(
    items: &[T],
    state: Option<&LazyListState>,
    modifier: Modifier,
    spacing_dp: f32,
    content_padding: PaddingValues,
    item_builder: impl Fn(&T) -> View,
) -> View {
    let children: Vec<View> = items.iter().map(item_builder).collect();
    log::debug!("LazyColumn: {} items", children.len());

    View::new(
        0,
        ViewKind::LazyColumn {
            spacing: spacing_dp.max(0.0),
            content_padding,
            scroll_offset: state.map(LazyListState::offset).unwrap_or(0.0),
        },
    )
    .modifier(modifier)
    .with_children(children)
    .semantics(Semantics::new(Role::List))
}
