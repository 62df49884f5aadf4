//! View tree → taffy flexbox tree → `Scene`.
//!
//! All `Modifier` lengths are dp and text sizes sp; both are converted to px
//! here using the `Density` and `TextScale` locals in effect at the call.

use std::collections::HashMap;

use heroes_core::*;
use taffy::geometry::{Rect as TRect, Size as TSize};
use taffy::prelude::{auto, length, percent};
use taffy::{
    AlignItems, AvailableSpace, Display, FlexDirection, NodeId, Overflow, Point, Position, Style,
    TaffyError, TaffyTree,
};
use thiserror::Error;

use crate::text::{min_content_width, text_width, wrap_lines};

// Slack for float error when re-wrapping at the measured width
const WRAP_EPSILON_PX: f32 = 0.5;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout engine: {0}")]
    Taffy(#[from] TaffyError),
    #[error("view {0} has no layout node")]
    MissingNode(ViewId),
}

/// Accessibility node: what a screen reader would see.
#[derive(Clone, Debug, PartialEq)]
pub struct SemNode {
    pub id: ViewId,
    pub role: Role,
    pub label: Option<String>,
    pub rect: Rect,
}

/// Scrollable range of a list, to be fed back into its `LazyListState`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExtent {
    pub view: ViewId,
    pub viewport_px: f32,
    pub content_px: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub scene: Scene,
    pub semantics: Vec<SemNode>,
    pub scroll_extents: Vec<ScrollExtent>,
}

impl Frame {
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &SemNode> {
        self.semantics.iter().filter(move |n| n.role == role)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

fn main_axis(kind: &ViewKind) -> Option<Axis> {
    match kind {
        ViewKind::Row => Some(Axis::Horizontal),
        ViewKind::Column | ViewKind::Surface | ViewKind::Box | ViewKind::LazyColumn { .. } => {
            Some(Axis::Vertical)
        }
        ViewKind::Text { .. } | ViewKind::Image { .. } => None,
    }
}

#[derive(Clone, Debug)]
enum NodeCtx {
    Text {
        text: String,
        size_px: f32,
        soft_wrap: bool,
        max_lines: Option<usize>,
        line_h_px: f32,
    },
}

/// The taffy node of a view, plus the inner content node of a list.
#[derive(Clone, Copy, Debug)]
struct LayoutNodes {
    outer: NodeId,
    content: Option<NodeId>,
}

fn insets(m: &Modifier) -> PaddingValues {
    m.padding_values
        .or(m.padding.map(PaddingValues::all))
        .unwrap_or_default()
}

fn padding_rect(p: PaddingValues) -> TRect<taffy::LengthPercentage> {
    TRect {
        left: length(dp_to_px(p.left)),
        right: length(dp_to_px(p.right)),
        top: length(dp_to_px(p.top)),
        bottom: length(dp_to_px(p.bottom)),
    }
}

fn style_for(v: &View, parent_axis: Option<Axis>) -> Style {
    let m = &v.modifier;
    let mut s: Style = Style::default();
    s.display = Display::Flex;

    match main_axis(&v.kind) {
        Some(Axis::Horizontal) => {
            s.flex_direction = if text_direction() == TextDirection::Rtl {
                FlexDirection::RowReverse
            } else {
                FlexDirection::Row
            };
            s.align_items = Some(AlignItems::FlexStart);
        }
        Some(Axis::Vertical) => {
            s.flex_direction = FlexDirection::Column;
            // Column children hug the start edge, which is the right one in RTL
            s.align_items = Some(match v.kind {
                ViewKind::Column if text_direction() == TextDirection::Rtl => AlignItems::FlexEnd,
                ViewKind::Column => AlignItems::FlexStart,
                _ => AlignItems::Stretch,
            });
        }
        None => {}
    }
    if m.justify_content.is_some() {
        s.justify_content = m.justify_content;
    }
    if m.align_items_container.is_some() {
        s.align_items = m.align_items_container;
    }

    if matches!(v.kind, ViewKind::LazyColumn { .. }) {
        s.overflow = Point {
            x: Overflow::Hidden,
            y: Overflow::Hidden,
        };
    }

    if m.padding.is_some() || m.padding_values.is_some() {
        s.padding = padding_rect(insets(m));
    }

    let absolute = m.position_type == Some(PositionType::Absolute);
    if absolute {
        s.position = Position::Absolute;
        let inset = |o: Option<f32>| o.map(|dp| length(dp_to_px(dp))).unwrap_or_else(auto);
        s.inset = TRect {
            left: inset(m.offset_left),
            right: inset(m.offset_right),
            top: inset(m.offset_top),
            bottom: inset(m.offset_bottom),
        };
    }

    // Explicit size first
    let mut width_set = false;
    let mut height_set = false;
    if let Some(sz) = m.size {
        s.size.width = length(dp_to_px(sz.width.max(0.0)));
        s.size.height = length(dp_to_px(sz.height.max(0.0)));
        width_set = true;
        height_set = true;
    }
    if let Some(w) = m.width {
        s.size.width = length(dp_to_px(w.max(0.0)));
        width_set = true;
    }
    if let Some(h) = m.height {
        s.size.height = length(dp_to_px(h.max(0.0)));
        height_set = true;
    }
    if (width_set || height_set) && main_axis(&v.kind).is_none() {
        s.flex_shrink = 0.0;
    }

    // Fill: along the parent's main axis it takes the remaining space, across
    // it the full extent.
    let fill_w = (m.fill_max || m.fill_max_w) && !width_set;
    let fill_h = m.fill_max && !height_set;
    let parent_axis = if absolute { None } else { parent_axis };
    let grow = |s: &mut Style| {
        s.flex_grow = s.flex_grow.max(1.0);
        s.flex_shrink = s.flex_shrink.max(1.0);
        s.flex_basis = length(0.0);
    };
    match parent_axis {
        Some(Axis::Vertical) => {
            if fill_h {
                grow(&mut s);
                s.min_size.height = length(0.0);
            }
            if fill_w {
                s.size.width = percent(1.0);
            }
        }
        Some(Axis::Horizontal) => {
            if fill_w {
                grow(&mut s);
                s.min_size.width = length(0.0);
            }
            if fill_h {
                s.size.height = percent(1.0);
            }
        }
        None => {
            if fill_w {
                s.size.width = percent(1.0);
            }
            if fill_h {
                s.size.height = percent(1.0);
            }
        }
    }

    // Explicit flex wins over fill
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
        if g > 0.0 {
            s.flex_basis = length(0.0);
            match parent_axis {
                Some(Axis::Horizontal) => s.min_size.width = length(0.0),
                Some(Axis::Vertical) => s.min_size.height = length(0.0),
                None => {}
            }
        }
    }
    if let Some(sh) = m.flex_shrink {
        s.flex_shrink = sh;
    }

    if let Some(w) = m.min_width {
        s.min_size.width = length(dp_to_px(w.max(0.0)));
    }
    if let Some(h) = m.min_height {
        s.min_size.height = length(dp_to_px(h.max(0.0)));
    }

    s
}

fn build_node(
    v: &View,
    parent_axis: Option<Axis>,
    t: &mut TaffyTree<NodeCtx>,
    nodes: &mut HashMap<ViewId, LayoutNodes>,
) -> Result<NodeId, TaffyError> {
    let style = style_for(v, parent_axis);
    let axis = main_axis(&v.kind);

    let built = match &v.kind {
        ViewKind::Text {
            text,
            style: text_style,
            soft_wrap,
            max_lines,
            ..
        } => {
            let ctx = NodeCtx::Text {
                text: text.clone(),
                size_px: sp_to_px(text_style.font_size),
                line_h_px: sp_to_px(text_style.line_height),
                soft_wrap: *soft_wrap,
                max_lines: *max_lines,
            };
            LayoutNodes {
                outer: t.new_leaf_with_context(style, ctx)?,
                content: None,
            }
        }
        ViewKind::Image { .. } => LayoutNodes {
            outer: t.new_leaf(style)?,
            content: None,
        },
        ViewKind::LazyColumn {
            spacing,
            content_padding,
            ..
        } => {
            let mut items = Vec::with_capacity(v.children.len());
            for c in &v.children {
                let n = build_node(c, axis, t, nodes)?;
                // Items keep their natural height; the viewport clips them
                let mut cs = t.style(n)?.clone();
                cs.flex_shrink = 0.0;
                t.set_style(n, cs)?;
                items.push(n);
            }
            let mut cs: Style = Style::default();
            cs.display = Display::Flex;
            cs.flex_direction = FlexDirection::Column;
            cs.align_items = Some(AlignItems::Stretch);
            cs.flex_shrink = 0.0;
            cs.padding = padding_rect(*content_padding);
            cs.gap = TSize {
                width: length(0.0),
                height: length(dp_to_px(*spacing)),
            };
            let content = t.new_with_children(cs, &items)?;
            LayoutNodes {
                outer: t.new_with_children(style, &[content])?,
                content: Some(content),
            }
        }
        ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {
            let mut kids = Vec::with_capacity(v.children.len());
            for c in &v.children {
                kids.push(build_node(c, axis, t, nodes)?);
            }
            LayoutNodes {
                outer: t.new_with_children(style, &kids)?,
                content: None,
            }
        }
    };

    nodes.insert(v.id, built);
    Ok(built.outer)
}

fn measure_text(
    known: TSize<Option<f32>>,
    avail: TSize<AvailableSpace>,
    ctx: &NodeCtx,
) -> TSize<f32> {
    let NodeCtx::Text {
        text,
        size_px,
        line_h_px,
        soft_wrap,
        max_lines,
    } = ctx;
    let single_w = text_width(text, *size_px);
    let width = match (known.width, avail.width) {
        (Some(w), _) => w,
        (None, AvailableSpace::MinContent) if *soft_wrap => min_content_width(text, *size_px),
        (None, AvailableSpace::Definite(w)) if *soft_wrap => single_w.min(w.max(0.0)),
        _ => single_w,
    };
    let n_lines = if *soft_wrap {
        wrap_lines(text, *size_px, width + WRAP_EPSILON_PX, *max_lines).len()
    } else {
        1
    };
    TSize {
        width,
        height: known
            .height
            .unwrap_or(*line_h_px * n_lines.max(1) as f32),
    }
}

/// Lays out `root` in a `size_px` window and paints it.
///
/// View ids are assigned here in pre-order starting at 1; ids set by the
/// caller are overwritten.
pub fn layout_and_paint(root: &View, size_px: (u32, u32)) -> Result<Frame, LayoutError> {
    fn stamp(v: &mut View, id: &mut u64) {
        v.id = *id;
        *id += 1;
        for c in &mut v.children {
            stamp(c, id);
        }
    }
    let mut root = root.clone();
    let mut next_id = 1u64;
    stamp(&mut root, &mut next_id);

    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    let mut nodes = HashMap::new();
    let root_node = build_node(&root, None, &mut taffy, &mut nodes)?;

    let (w, h) = (size_px.0 as f32, size_px.1 as f32);
    let mut rs = taffy.style(root_node)?.clone();
    rs.size = TSize {
        width: length(w),
        height: length(h),
    };
    taffy.set_style(root_node, rs)?;

    taffy.compute_layout_with_measure(
        root_node,
        TSize {
            width: AvailableSpace::Definite(w),
            height: AvailableSpace::Definite(h),
        },
        |known, avail, _node, ctx, _style| match ctx {
            Some(ctx) => measure_text(known, avail, ctx),
            None => TSize::ZERO,
        },
    )?;

    let mut frame = Frame {
        scene: Scene {
            clear_color: theme().background,
            nodes: vec![],
        },
        ..Default::default()
    };
    let mut cx = PaintCx {
        tree: &taffy,
        nodes: &nodes,
        frame: &mut frame,
    };
    cx.paint(&root, (0.0, 0.0))?;

    log::debug!(
        "layout {}x{}: {} views, {} scene nodes",
        size_px.0,
        size_px.1,
        next_id - 1,
        frame.scene.nodes.len()
    );
    Ok(frame)
}

/// Text of the first `Text` in `v`, in pre-order.
fn primary_label(v: &View) -> Option<String> {
    let mut label = None;
    v.visit(&mut |c| {
        if label.is_none()
            && let ViewKind::Text { text, .. } = &c.kind
        {
            label = Some(text.clone());
        }
    });
    label
}

struct PaintCx<'a> {
    tree: &'a TaffyTree<NodeCtx>,
    nodes: &'a HashMap<ViewId, LayoutNodes>,
    frame: &'a mut Frame,
}

impl PaintCx<'_> {
    fn rect_of(&self, node: NodeId, origin: (f32, f32)) -> Result<Rect, TaffyError> {
        let l = self.tree.layout(node)?;
        Ok(Rect {
            x: origin.0 + l.location.x,
            y: origin.1 + l.location.y,
            w: l.size.width,
            h: l.size.height,
        })
    }

    fn push(&mut self, node: SceneNode) {
        self.frame.scene.nodes.push(node);
    }

    fn paint(&mut self, v: &View, origin: (f32, f32)) -> Result<(), LayoutError> {
        let ln = *self.nodes.get(&v.id).ok_or(LayoutError::MissingNode(v.id))?;
        let rect = self.rect_of(ln.outer, origin)?;
        let m = &v.modifier;
        let pad = insets(m);
        let content_rect = rect.inset(
            dp_to_px(pad.left),
            dp_to_px(pad.top),
            dp_to_px(pad.right),
            dp_to_px(pad.bottom),
        );
        let radius = m.clip_rounded.map(dp_to_px).unwrap_or(0.0);

        if let Some(e) = m.shadow_elevation.filter(|e| *e > 0.0) {
            self.push(SceneNode::Shadow {
                rect,
                color: theme().shadow,
                radius,
                elevation: dp_to_px(e),
            });
        }
        if let Some(bg) = m.background {
            self.push(SceneNode::Rect {
                rect,
                color: bg,
                radius,
            });
        }

        if let Some(s) = v.semantics.as_ref().or(m.semantics.as_ref()) {
            self.frame.semantics.push(SemNode {
                id: v.id,
                role: s.role,
                label: s.label.clone(),
                rect,
            });
        }

        match &v.kind {
            ViewKind::Text {
                text,
                color,
                style,
                soft_wrap,
                max_lines,
                align,
            } => {
                let size = sp_to_px(style.font_size);
                let line_h = sp_to_px(style.line_height);
                let rtl = text_direction() == TextDirection::Rtl;
                let lines = if *soft_wrap {
                    wrap_lines(text, size, content_rect.w + WRAP_EPSILON_PX, *max_lines)
                } else {
                    vec![text.clone()]
                };
                for (i, ln) in lines.into_iter().enumerate() {
                    let line_w = text_width(&ln, size).min(content_rect.w);
                    let dx = match align {
                        TextAlign::Start if rtl => (content_rect.w - line_w).max(0.0),
                        TextAlign::Start => 0.0,
                        TextAlign::Center => ((content_rect.w - line_w) * 0.5).max(0.0),
                    };
                    self.push(SceneNode::Text {
                        rect: Rect {
                            x: content_rect.x + dx,
                            y: content_rect.y + i as f32 * line_h,
                            w: line_w,
                            h: line_h,
                        },
                        text: ln,
                        color: *color,
                        size,
                    });
                }
            }
            ViewKind::Image { image, .. } => {
                self.push(SceneNode::Image {
                    rect,
                    image: *image,
                    radius,
                });
            }
            ViewKind::LazyColumn { scroll_offset, .. } => {
                let content = ln.content.ok_or(LayoutError::MissingNode(v.id))?;
                let (content_loc, content_h) = {
                    let l = self.tree.layout(content)?;
                    (l.location, l.size.height)
                };
                self.frame.scroll_extents.push(ScrollExtent {
                    view: v.id,
                    viewport_px: rect.h,
                    content_px: content_h,
                });

                let max_off = (content_h - rect.h).max(0.0);
                let off = if scroll_offset.is_finite() {
                    scroll_offset.clamp(0.0, max_off)
                } else {
                    0.0
                };
                let items_origin = (
                    rect.x + content_loc.x,
                    rect.y + content_loc.y - off,
                );

                self.push(SceneNode::PushClip { rect, radius });
                for item in &v.children {
                    self.paint(item, items_origin)?;
                    let item_ln = *self
                        .nodes
                        .get(&item.id)
                        .ok_or(LayoutError::MissingNode(item.id))?;
                    let item_rect = self.rect_of(item_ln.outer, items_origin)?;
                    self.frame.semantics.push(SemNode {
                        id: item.id,
                        role: Role::ListItem,
                        label: primary_label(item),
                        rect: item_rect,
                    });
                }
                self.push(SceneNode::PopClip);
            }
            ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {
                let clip = m.clip_rounded.is_some() && !v.children.is_empty();
                if clip {
                    self.push(SceneNode::PushClip { rect, radius });
                }
                for c in &v.children {
                    self.paint(c, (rect.x, rect.y))?;
                }
                if clip {
                    self.push(SceneNode::PopClip);
                }
            }
        }
        Ok(())
    }
}
