use std::fmt::Write;

use heroes_core::{View, ViewKind};

/// Indented, one-line-per-view description of a tree. Two equal trees give
/// equal outlines, which makes this the cheap way to snapshot a screen.
pub fn outline(root: &View) -> String {
    let mut out = String::new();
    write_view(root, 0, &mut out);
    out.truncate(out.trim_end().len());
    out
}

fn write_view(v: &View, depth: usize, out: &mut String) {
    let _ = write!(out, "{:indent$}{}", "", v.kind.name(), indent = depth * 2);
    match &v.kind {
        ViewKind::Text { text, style, .. } => {
            let _ = write!(out, " {text:?} {}sp", style.font_size);
        }
        ViewKind::Image {
            image,
            content_description,
        } => {
            let _ = write!(out, " {image}");
            if let Some(cd) = content_description {
                let _ = write!(out, " {cd:?}");
            }
        }
        ViewKind::LazyColumn { spacing, .. } => {
            let _ = write!(out, " spacing={spacing} items={}", v.children.len());
        }
        ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {}
    }
    out.push('\n');
    for c in &v.children {
        write_view(c, depth + 1, out);
    }
}
