use thiserror::Error;

use crate::resources::{ImageId, Locale, StringId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("no string `{id}` for locale `{locale}` or its fallbacks")]
    MissingString { id: StringId, locale: Locale },
    #[error("no image asset `{0}`")]
    MissingImage(ImageId),
    #[error("invalid locale tag `{0}`")]
    InvalidLocale(String),
}
