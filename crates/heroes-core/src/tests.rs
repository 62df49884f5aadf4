#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#12"), Color::BLACK);
    }

    #[test]
    fn test_color_from_argb() {
        assert_eq!(Color::from_argb(0xFF466800), Color(0x46, 0x68, 0x00, 0xFF));
        assert_eq!(Color::from_argb(0x80FFFFFF), Color(0xFF, 0xFF, 0xFF, 0x80));
    }

    #[test]
    fn test_rect_inset_never_negative() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };
        assert_eq!(
            rect.inset(16.0, 8.0, 16.0, 8.0),
            Rect {
                x: 26.0,
                y: 18.0,
                w: 68.0,
                h: 34.0
            }
        );
        let squashed = rect.inset(60.0, 0.0, 60.0, 0.0);
        assert_eq!(squashed.w, 0.0);
        assert_eq!(squashed.right(), 70.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_locals_nest_and_restore() {
        let light = Theme {
            background: Color::WHITE,
            ..Theme::default()
        };
        assert_eq!(theme(), Theme::default());
        with_theme(light, || {
            assert_eq!(theme().background, Color::WHITE);
            with_density(Density { scale: 2.0 }, || {
                // outer theme still visible under an unrelated frame
                assert_eq!(theme().background, Color::WHITE);
                assert_eq!(dp_to_px(8.0), 16.0);
            });
            assert_eq!(dp_to_px(8.0), 8.0);
        });
        assert_eq!(theme(), Theme::default());
    }

    #[test]
    fn test_locals_pop_on_unwind() {
        let r = std::panic::catch_unwind(|| {
            with_text_scale(TextScale(3.0), || panic!("boom"));
        });
        assert!(r.is_err());
        assert_eq!(text_scale(), TextScale(1.0));
    }

    #[test]
    fn test_sp_to_px_applies_text_scale() {
        with_density(Density { scale: 2.0 }, || {
            with_text_scale(TextScale(1.5), || {
                assert_eq!(sp_to_px(10.0), 30.0);
                assert_eq!(dp_to_px(10.0), 20.0);
            })
        });
    }

    #[test]
    fn test_locale_parse() {
        let l: Locale = "en".parse().unwrap();
        assert_eq!(l.language(), "en");
        assert_eq!(l.region(), None);

        let l: Locale = "tr_tr".parse().unwrap();
        assert_eq!(l.to_string(), "tr-TR");

        let l: Locale = "pt-rBR".parse().unwrap();
        assert_eq!(l.region(), Some("BR"));

        let l: Locale = "es-419".parse().unwrap();
        assert_eq!(l.region(), Some("419"));

        for bad in ["", "e", "english", "en-USA-x", "en-U1"] {
            assert_eq!(
                bad.parse::<Locale>(),
                Err(ResourceError::InvalidLocale(bad.to_string()))
            );
        }
    }

    const APP_NAME: StringId = StringId("app_name");
    const GREETING: StringId = StringId("greeting");

    fn table() -> StringTable {
        let en: Locale = "en".parse().unwrap();
        let tr: Locale = "tr".parse().unwrap();
        let en_gb: Locale = "en-GB".parse().unwrap();
        StringTable::new(en.clone())
            .with_strings(en, [(APP_NAME, "Superheroes"), (GREETING, "Hello")])
            .with_strings(tr, [(APP_NAME, "Süper Kahramanlar")])
            .with_strings(en_gb, [(GREETING, "Hiya")])
    }

    #[test]
    fn test_string_table_fallback_chain() {
        let t = table();
        let tr_tr: Locale = "tr-TR".parse().unwrap();
        let en_gb: Locale = "en-GB".parse().unwrap();
        let de: Locale = "de".parse().unwrap();

        // region -> language
        assert_eq!(t.resolve(APP_NAME, &tr_tr), Ok("Süper Kahramanlar"));
        // language -> default
        assert_eq!(t.resolve(GREETING, &tr_tr), Ok("Hello"));
        // exact region wins
        assert_eq!(t.resolve(GREETING, &en_gb), Ok("Hiya"));
        assert_eq!(t.resolve(APP_NAME, &en_gb), Ok("Superheroes"));
        // unknown locale -> default
        assert_eq!(t.resolve(APP_NAME, &de), Ok("Superheroes"));
    }

    #[test]
    fn test_string_table_missing() {
        let t = table();
        let missing = StringId("nope");
        let err = t.resolve(missing, t.default_locale()).unwrap_err();
        assert_eq!(
            err,
            ResourceError::MissingString {
                id: missing,
                locale: Locale::default(),
            }
        );
        assert_eq!(
            err.to_string(),
            "no string `nope` for locale `en` or its fallbacks"
        );
    }

    #[test]
    fn test_image_store() {
        let id = ImageId("android_superhero1");
        let asset = ImageAsset {
            id,
            source: "drawable/android_superhero1.webp",
            width_px: 72,
            height_px: 72,
        };
        let store = ImageStore::new().with_asset(asset);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id), Ok(&asset));
        assert_eq!(
            store.get(ImageId("missing")),
            Err(ResourceError::MissingImage(ImageId("missing")))
        );
    }

    #[test]
    fn test_modifier_weight_and_size_in() {
        let m = Modifier::new().weight(1.0).size_in(None, Some(72.0));
        assert_eq!(m.flex_grow, Some(1.0));
        assert_eq!(m.flex_shrink, Some(1.0));
        assert_eq!(m.min_width, None);
        assert_eq!(m.min_height, Some(72.0));
        assert_eq!(
            PaddingValues::horizontal(16.0),
            PaddingValues {
                left: 16.0,
                right: 16.0,
                top: 0.0,
                bottom: 0.0
            }
        );
    }

    #[test]
    fn test_view_visit_is_preorder() {
        let tree = View::new(1, ViewKind::Column).with_children(vec![
            View::new(2, ViewKind::Row).with_children(vec![View::new(3, ViewKind::Box)]),
            View::new(4, ViewKind::Box),
        ]);
        let mut ids = vec![];
        tree.visit(&mut |v| ids.push(v.id));
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
