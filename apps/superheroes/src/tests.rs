#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use heroes_core::*;
    use heroes_ui::*;

    use crate::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    const ATOM_ANT: Hero = Hero::new(
        StringId("atom_ant"),
        StringId("atom_ant_description"),
        ImageId("atom_ant"),
    );

    fn atom_ant_resources() -> Resources {
        let en = Locale::default();
        Resources {
            strings: Rc::new(StringTable::new(en.clone()).with_strings(
                en.clone(),
                [
                    (R::string::APP_NAME, "Superheroes"),
                    (StringId("atom_ant"), "Atom Ant"),
                    (StringId("atom_ant_description"), "Tiny but mighty"),
                ],
            )),
            images: Rc::new(ImageStore::new().with_asset(ImageAsset {
                id: ImageId("atom_ant"),
                source: "drawable/atom_ant.webp",
                width_px: 72,
                height_px: 72,
            })),
            locale: en,
        }
    }

    fn compose(config: &AppConfig, heroes: &[Hero]) -> View {
        with_app_locals(config, || SuperheroesApp(heroes, None))
    }

    fn find_list(root: &View) -> Option<&View> {
        let mut found = None;
        root.visit(&mut |v| {
            if found.is_none() && matches!(v.kind, ViewKind::LazyColumn { .. }) {
                found = Some(v);
            }
        });
        found
    }

    fn texts(v: &View) -> Vec<String> {
        let mut out = vec![];
        v.visit(&mut |v| {
            if let ViewKind::Text { text, .. } = &v.kind {
                out.push(text.clone());
            }
        });
        out
    }

    fn images(v: &View) -> Vec<(ImageId, Option<String>)> {
        let mut out = vec![];
        v.visit(&mut |v| {
            if let ViewKind::Image {
                image,
                content_description,
            } = &v.kind
            {
                out.push((*image, content_description.clone()));
            }
        });
        out
    }

    #[test]
    fn test_repository_order() {
        let heroes = HeroesRepository::heroes();
        assert_eq!(heroes.len(), 6);
        assert_eq!(heroes[0].name, R::string::HERO1);
        assert_eq!(heroes[0].image, R::drawable::ANDROID_SUPERHERO1);
        assert_eq!(heroes[5].description, R::string::DESCRIPTION6);
    }

    #[test]
    fn test_shipped_resources_are_complete() {
        let strings = crate::res::string_table();
        let images = crate::res::image_store();
        let en = Locale::default();
        for h in HeroesRepository::heroes() {
            assert!(strings.resolve(h.name, &en).is_ok(), "{}", h.name);
            assert!(strings.resolve(h.description, &en).is_ok(), "{}", h.description);
            assert!(images.get(h.image).is_ok(), "{}", h.image);
        }
        assert_eq!(images.len(), 6);
        assert_eq!(strings.resolve(R::string::APP_NAME, &en), Ok("Superheroes"));
    }

    #[test]
    fn test_one_card_per_hero_in_order() {
        let config = AppConfig::default();
        let heroes = HeroesRepository::heroes();
        let root = compose(&config, heroes);
        let list = find_list(&root).expect("list");
        assert_eq!(list.children.len(), heroes.len());

        let strings = crate::res::string_table();
        let en = Locale::default();
        for (item, hero) in list.children.iter().zip(heroes) {
            let name = strings.resolve(hero.name, &en).unwrap();
            let description = strings.resolve(hero.description, &en).unwrap();
            assert_eq!(texts(item), vec![name, description]);
            assert_eq!(
                images(item),
                vec![(hero.image, Some(description.to_string()))]
            );
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let config = AppConfig::default().dark_theme(true);
        assert_eq!(outline(&app(&config)), outline(&app(&config)));
        assert_eq!(app(&config), app(&config));
    }

    #[test]
    fn test_empty_list_keeps_title_bar() {
        let config = AppConfig::default();
        let root = compose(&config, &[]);
        assert!(find_list(&root).expect("list").children.is_empty());
        assert_eq!(texts(&root), vec!["Superheroes"]);

        let frame = render(&config, &[], (400, 800), None).unwrap();
        assert_eq!(frame.with_role(Role::ListItem).count(), 0);
        let heading = frame.with_role(Role::Heading).next().expect("heading");
        assert_eq!(heading.label.as_deref(), Some("Superheroes"));
        assert!(approx(heading.rect.y + heading.rect.h / 2.0, 32.0));
        assert_eq!(frame.scroll_extents[0].content_px, 64.0);
    }

    #[test]
    fn test_single_hero() {
        let config = AppConfig::default();
        let root = with_app_locals(&config, || {
            with_resources(atom_ant_resources(), || SuperheroesApp(&[ATOM_ANT], None))
        });
        let list = find_list(&root).expect("list");
        assert_eq!(list.children.len(), 1);
        assert_eq!(texts(&list.children[0]), vec!["Atom Ant", "Tiny but mighty"]);
        assert_eq!(
            images(&list.children[0]),
            vec![(ImageId("atom_ant"), Some("Tiny but mighty".to_string()))]
        );

        insta::assert_snapshot!(outline(&root), @r#"
        Box
          LazyColumn spacing=8 items=1
            Surface
              Row
                Column
                  Text "Atom Ant" 36sp
                  Text "Tiny but mighty" 16sp
                Box
                Image atom_ant "Tiny but mighty"
          Box
            Row
              Text "Superheroes" 28sp
        "#);
    }

    #[test]
    fn test_items_spaced_except_first() {
        let config = AppConfig::default().density(2.0);
        let frame = render(&config, HeroesRepository::heroes(), (800, 1600), None).unwrap();
        let items: Vec<Rect> = frame.with_role(Role::ListItem).map(|n| n.rect).collect();
        assert_eq!(items.len(), 6);

        // first item sits right under the 64dp bar
        assert!(approx(items[0].y, 128.0), "{:?}", items[0]);
        for pair in items.windows(2) {
            assert!(approx(pair[1].y - pair[0].bottom(), 16.0), "{pair:?}");
        }
        for r in &items {
            assert!(approx(r.x, 32.0) && approx(r.w, 800.0 - 64.0), "{r:?}");
            assert!(r.h >= 2.0 * (72.0 + 32.0) - 0.01, "{r:?}");
        }
    }

    #[test]
    fn test_list_items_announce_hero_names() {
        let frame = render(
            &AppConfig::default(),
            HeroesRepository::heroes(),
            (411, 891),
            None,
        )
        .unwrap();
        let labels: Vec<String> = frame
            .with_role(Role::ListItem)
            .filter_map(|n| n.label.clone())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Nick the Night and Day",
                "Reality Protector",
                "Andre the Giant",
                "Benjamin the Brave",
                "Magnificent Maru",
                "Dynamic Yasmine",
            ]
        );
    }

    #[test]
    fn test_rtl_card_mirrors() {
        let frame = with_text_direction(TextDirection::Rtl, || {
            render(
                &AppConfig::default(),
                &HeroesRepository::heroes()[..1],
                (411, 891),
                None,
            )
        })
        .unwrap();
        let image = frame.with_role(Role::Image).next().expect("image").rect;
        assert!(approx(image.x, 32.0), "{image:?}");

        // name starts at the card's right padding edge
        let first_line = frame
            .scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Text { text, rect, .. } if text.starts_with("Nick") => Some(*rect),
                _ => None,
            })
            .expect("name");
        assert!(approx(first_line.right(), 411.0 - 32.0), "{first_line:?}");
    }

    #[test]
    fn test_hero_image_is_rounded_square() {
        let frame = render(
            &AppConfig::default(),
            HeroesRepository::heroes(),
            (411, 891),
            None,
        )
        .unwrap();
        let image = frame
            .scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Image { rect, image, radius } => Some((*rect, *image, *radius)),
                _ => None,
            })
            .expect("image");
        assert_eq!(image.1, R::drawable::ANDROID_SUPERHERO1);
        assert!(approx(image.0.w, 72.0) && approx(image.0.h, 72.0));
        assert_eq!(image.2, 8.0);
        // right edge: 16dp list padding + 16dp card padding
        assert!(approx(image.0.right(), 411.0 - 32.0), "{:?}", image.0);
    }

    #[test]
    fn test_theme_follows_config() {
        let light = render(&AppConfig::default(), &[], (100, 100), None).unwrap();
        let dark = render(&AppConfig::default().dark_theme(true), &[], (100, 100), None).unwrap();
        assert_eq!(light.scene.clear_color, theme::LIGHT.background);
        assert_eq!(dark.scene.clear_color, theme::DARK.background);
        assert_eq!(
            dark.scene.nodes.first(),
            Some(&SceneNode::Rect {
                rect: Rect {
                    x: 0.0,
                    y: 0.0,
                    w: 100.0,
                    h: 100.0
                },
                color: theme::DARK.background,
                radius: 0.0,
            })
        );
    }

    #[test]
    fn test_locale_fallback() {
        let tr = AppConfig::default().locale("tr-TR".parse().unwrap());
        let root = compose(&tr, &HeroesRepository::heroes()[..1]);
        assert_eq!(
            texts(&root),
            vec!["Nick the Night and Day", "The Jetpack Hero", "Süper Kahramanlar"]
        );
    }

    #[test]
    fn test_list_state_scrolls_within_content() {
        let config = AppConfig::default();
        let state = LazyListState::new();
        let frame = render(&config, HeroesRepository::heroes(), (411, 400), Some(&state)).unwrap();
        let extent = frame.scroll_extents[0];
        assert!(extent.content_px > extent.viewport_px);

        let leftover = state.scroll_by(10_000.0);
        let max = extent.content_px - extent.viewport_px;
        assert!(approx(state.offset(), max));
        assert!(approx(leftover, 10_000.0 - max));

        let scrolled = render(&config, HeroesRepository::heroes(), (411, 400), Some(&state)).unwrap();
        let first = scrolled.with_role(Role::ListItem).next().unwrap().rect;
        assert!(approx(first.y, 64.0 - max), "{first:?}");
    }
}
