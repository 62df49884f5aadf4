//! Lookup tables for localized labels and image assets.
//!
//! Views never carry resource data directly: a `Hero` holds a `StringId`
//! and an `ImageId`, and widgets resolve them against the tables provided
//! through [`with_resources`](crate::locals::with_resources).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ResourceError;

/// Label identifier, e.g. `StringId("app_name")`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringId(pub &'static str);

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Image asset identifier, e.g. `ImageId("android_superhero1")`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub &'static str);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Language with an optional region, `en` or `en-US`.
///
/// Android resource qualifiers (`en-rUS`) and underscores (`en_US`) parse too.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Region-less locale for an already valid language code.
    pub fn from_language(language: &str) -> Self {
        Locale {
            language: language.to_ascii_lowercase(),
            region: None,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Same locale without its region.
    pub fn without_region(&self) -> Locale {
        Locale {
            language: self.language.clone(),
            region: None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            language: "en".to_string(),
            region: None,
        }
    }
}

impl FromStr for Locale {
    type Err = ResourceError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let invalid = || ResourceError::InvalidLocale(tag.to_string());
        let mut parts = tag.split(['-', '_']);

        let language = parts.next().filter(|l| {
            (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic())
        });
        let language = language.ok_or_else(invalid)?.to_ascii_lowercase();

        let region = match parts.next() {
            None => None,
            Some(r) => {
                let r = match r.strip_prefix('r') {
                    Some(rest) if rest.len() == 2 => rest,
                    _ => r,
                };
                let alpha = r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic());
                let numeric = r.len() == 3 && r.chars().all(|c| c.is_ascii_digit());
                if !alpha && !numeric {
                    return Err(invalid());
                }
                Some(r.to_ascii_uppercase())
            }
        };

        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Locale { language, region })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(r) => write!(f, "{}-{}", self.language, r),
            None => f.write_str(&self.language),
        }
    }
}

/// Localized label table with a default locale to fall back to.
#[derive(Clone, Debug, Default)]
pub struct StringTable {
    default_locale: Locale,
    tables: HashMap<Locale, HashMap<StringId, String>>,
}

impl StringTable {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            tables: HashMap::new(),
        }
    }

    pub fn with_strings<'a>(
        mut self,
        locale: Locale,
        entries: impl IntoIterator<Item = (StringId, &'a str)>,
    ) -> Self {
        let table = self.tables.entry(locale).or_default();
        for (id, value) in entries {
            table.insert(id, value.to_string());
        }
        self
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Resolves `id` for `locale`: exact match, then language only, then the
    /// default locale.
    pub fn resolve(&self, id: StringId, locale: &Locale) -> Result<&str, ResourceError> {
        let language_only = locale.without_region();
        [locale, &language_only, &self.default_locale]
            .into_iter()
            .filter_map(|l| self.tables.get(l))
            .find_map(|t| t.get(&id))
            .map(String::as_str)
            .ok_or_else(|| ResourceError::MissingString {
                id,
                locale: locale.clone(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: ImageId,
    /// Path of the encoded bitmap, relative to the asset root.
    pub source: &'static str,
    pub width_px: u32,
    pub height_px: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ImageStore {
    assets: HashMap<ImageId, ImageAsset>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, asset: ImageAsset) -> Self {
        self.register(asset);
        self
    }

    /// Registers `asset`, replacing any asset with the same id.
    pub fn register(&mut self, asset: ImageAsset) {
        self.assets.insert(asset.id, asset);
    }

    pub fn get(&self, id: ImageId) -> Result<&ImageAsset, ResourceError> {
        self.assets.get(&id).ok_or(ResourceError::MissingImage(id))
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
