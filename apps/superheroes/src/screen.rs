#![allow(non_snake_case)]

use heroes_core::prelude::*;
use heroes_ui::*;

use crate::R;
use crate::config::dimens;
use crate::model::Hero;

/// The whole screen: a centered title bar over the scrolling hero list.
pub fn SuperheroesApp(heroes: &[Hero], list_state: Option<&LazyListState>) -> View {
    let d = dimens();
    Scaffold(
        Modifier::new(),
        Some(TopAppBar(Modifier::new())),
        |padding| {
            LazyColumn(
                heroes,
                list_state,
                Modifier::new()
                    .fill_max_size()
                    .padding_horizontal(d.list_padding_horizontal),
                d.list_spacing,
                padding,
                |hero| HeroItem(hero, Modifier::new()),
            )
        },
    )
}

pub fn TopAppBar(modifier: Modifier) -> View {
    CenterAlignedTopAppBar(
        modifier,
        Text(string_resource(R::string::APP_NAME))
            .style(typography().headline_medium)
            .color(theme().on_surface)
            .single_line(),
    )
}

pub fn HeroItem(hero: &Hero, modifier: Modifier) -> View {
    let d = dimens();
    Card(
        modifier,
        d.card_elevation,
        Row(Modifier::new()
            .fill_max_width()
            .padding(d.item_padding)
            .size_in(None, Some(d.item_min_height)))
        .child((
            Column(Modifier::new().weight(1.0))
                .child((HeroName(hero.name), HeroDescription(hero.description))),
            Spacer(Modifier::new().width(d.image_spacing)),
            HeroImage(hero.image, hero.description),
        )),
    )
}

pub fn HeroName(name: StringId) -> View {
    Text(string_resource(name))
        .style(typography().display_small)
        .color(theme().on_surface_variant)
}

pub fn HeroDescription(description: StringId) -> View {
    Text(string_resource(description))
        .style(typography().body_large)
        .color(theme().on_surface_variant)
}

/// Square thumbnail; the description doubles as its content description.
pub fn HeroImage(image: ImageId, description: StringId) -> View {
    let d = dimens();
    Image(
        Modifier::new()
            .size(d.image_size, d.image_size)
            .clip_rounded(d.image_corner),
        painter_resource(image),
        Some(string_resource(description)),
    )
}
