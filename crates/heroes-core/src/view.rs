use crate::{Color, ImageId, Modifier, PaddingValues, Rect, Semantics, TextStyle};

pub type ViewId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    /// Vertical list with a fixed gap between items; its children are the items.
    LazyColumn {
        spacing: f32,
        content_padding: PaddingValues,
        /// px, already clamped by the owning `LazyListState`.
        scroll_offset: f32,
    },
    Text {
        text: String,
        color: Color,
        style: TextStyle,
        soft_wrap: bool,
        max_lines: Option<usize>,
        align: TextAlign,
    },
    Image {
        image: ImageId,
        content_description: Option<String>,
    },
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Surface => "Surface",
            ViewKind::Box => "Box",
            ViewKind::Row => "Row",
            ViewKind::Column => "Column",
            ViewKind::LazyColumn { .. } => "LazyColumn",
            ViewKind::Text { .. } => "Text",
            ViewKind::Image { .. } => "Image",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first, pre-order visit of this view and its descendants.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.visit(f);
        }
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Shadow {
        rect: Rect,
        color: Color,
        radius: f32,
        elevation: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    Image {
        rect: Rect,
        image: ImageId,
        radius: f32,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
}
