//! String and image resources of the app.

use std::rc::Rc;

use heroes_core::{ImageAsset, ImageId, ImageStore, Locale, Resources, StringId, StringTable};

#[allow(non_snake_case)]
pub mod R {
    pub mod string {
        use heroes_core::StringId;

        pub const APP_NAME: StringId = StringId("app_name");

        pub const HERO1: StringId = StringId("hero1");
        pub const HERO2: StringId = StringId("hero2");
        pub const HERO3: StringId = StringId("hero3");
        pub const HERO4: StringId = StringId("hero4");
        pub const HERO5: StringId = StringId("hero5");
        pub const HERO6: StringId = StringId("hero6");

        pub const DESCRIPTION1: StringId = StringId("description1");
        pub const DESCRIPTION2: StringId = StringId("description2");
        pub const DESCRIPTION3: StringId = StringId("description3");
        pub const DESCRIPTION4: StringId = StringId("description4");
        pub const DESCRIPTION5: StringId = StringId("description5");
        pub const DESCRIPTION6: StringId = StringId("description6");
    }

    pub mod drawable {
        use heroes_core::ImageId;

        pub const ANDROID_SUPERHERO1: ImageId = ImageId("android_superhero1");
        pub const ANDROID_SUPERHERO2: ImageId = ImageId("android_superhero2");
        pub const ANDROID_SUPERHERO3: ImageId = ImageId("android_superhero3");
        pub const ANDROID_SUPERHERO4: ImageId = ImageId("android_superhero4");
        pub const ANDROID_SUPERHERO5: ImageId = ImageId("android_superhero5");
        pub const ANDROID_SUPERHERO6: ImageId = ImageId("android_superhero6");
    }
}

use R::{drawable, string};

const EN: &[(StringId, &str)] = &[
    (string::APP_NAME, "Superheroes"),
    (string::HERO1, "Nick the Night and Day"),
    (string::DESCRIPTION1, "The Jetpack Hero"),
    (string::HERO2, "Reality Protector"),
    (string::DESCRIPTION2, "Understands the absolute truth"),
    (string::HERO3, "Andre the Giant"),
    (string::DESCRIPTION3, "Mimics the light and night to blend in"),
    (string::HERO4, "Benjamin the Brave"),
    (
        string::DESCRIPTION4,
        "Harnesses the power of canary to develop bugless code.",
    ),
    (string::HERO5, "Magnificent Maru"),
    (
        string::DESCRIPTION5,
        "Effortlessly glides in to save the day. Never gets lost.",
    ),
    (string::HERO6, "Dynamic Yasmine"),
    (
        string::DESCRIPTION6,
        "Helps with communication between two animals",
    ),
];

const TR: &[(StringId, &str)] = &[(string::APP_NAME, "Süper Kahramanlar")];

const IMAGES: [(ImageId, &str); 6] = [
    (drawable::ANDROID_SUPERHERO1, "drawable/android_superhero1.webp"),
    (drawable::ANDROID_SUPERHERO2, "drawable/android_superhero2.webp"),
    (drawable::ANDROID_SUPERHERO3, "drawable/android_superhero3.webp"),
    (drawable::ANDROID_SUPERHERO4, "drawable/android_superhero4.webp"),
    (drawable::ANDROID_SUPERHERO5, "drawable/android_superhero5.webp"),
    (drawable::ANDROID_SUPERHERO6, "drawable/android_superhero6.webp"),
];

/// English is the default; other locales fall back to it per string.
pub fn string_table() -> StringTable {
    let en = Locale::default();
    StringTable::new(en.clone())
        .with_strings(en, EN.iter().copied())
        .with_strings(Locale::from_language("tr"), TR.iter().copied())
}

pub fn image_store() -> ImageStore {
    IMAGES
        .iter()
        .fold(ImageStore::new(), |store, &(id, source)| {
            store.with_asset(ImageAsset {
                id,
                source,
                width_px: 400,
                height_px: 400,
            })
        })
}

/// Both tables, resolved for `locale`.
pub fn resources(locale: Locale) -> Resources {
    Resources {
        strings: Rc::new(string_table()),
        images: Rc::new(image_store()),
        locale,
    }
}
