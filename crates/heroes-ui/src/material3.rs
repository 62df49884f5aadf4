use heroes_core::*;
use taffy::{AlignItems, JustifyContent};

use crate::{Box, Row, Surface, TextExt, ViewExt};

pub const TOP_APP_BAR_HEIGHT_DP: f32 = 64.0;
pub const CARD_CORNER_DP: f32 = 12.0;

/// Rounded container on `surface_variant` casting a shadow of `elevation_dp`.
pub fn Card(modifier: Modifier, elevation_dp: f32, content: View) -> View {
    Surface(
        modifier
            .background(theme().surface_variant)
            .shadow(elevation_dp)
            .clip_rounded(CARD_CORNER_DP)
            .flex_shrink(0.0),
        content,
    )
    .semantics(Semantics::new(Role::Container))
}

/// Full-width bar with `title` centered on both axes. A text title is
/// announced as a heading and its lines are centered too.
pub fn CenterAlignedTopAppBar(modifier: Modifier, mut title: View) -> View {
    if let Some(s) = title.semantics.as_mut()
        && s.role == Role::Text
    {
        s.role = Role::Heading;
    }
    let title = title.align(TextAlign::Center);
    Row(modifier
        .fill_max_width()
        .height(TOP_APP_BAR_HEIGHT_DP)
        .padding_horizontal(4.0)
        .background(theme().surface)
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center))
    .child(title)
}

/// Screen skeleton: `content` fills the screen and the top bar is drawn over
/// it. The padding passed to `content` keeps its first item clear of the bar.
pub fn Scaffold(
    modifier: Modifier,
    top_bar: Option<View>,
    content: impl FnOnce(PaddingValues) -> View,
) -> View {
    let padding = PaddingValues {
        top: if top_bar.is_some() {
            TOP_APP_BAR_HEIGHT_DP
        } else {
            0.0
        },
        ..Default::default()
    };

    let mut children = vec![content(padding)];
    if let Some(bar) = top_bar {
        children.push(
            Box(Modifier::new()
                .absolute()
                .offset(Some(0.0), Some(0.0), Some(0.0), None))
            .child(bar),
        );
    }
    Box(modifier.fill_max_size()).child(children)
}
