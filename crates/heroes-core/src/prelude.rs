pub use crate::{
    Color, Dp, ImageId, Locale, Modifier, PaddingValues, Rect, Resources, Role, Scene, SceneNode,
    Semantics, Size, StringId, TextAlign, TextDirection, TextStyle, Theme, Typography, View,
    ViewId, ViewKind, dp_to_px, sp_to_px, theme, typography,
};
