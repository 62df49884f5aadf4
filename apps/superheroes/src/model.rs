use heroes_core::{ImageId, StringId};

/// One entry of the list. All fields are resource identifiers; the text and
/// bitmap behind them come from the resource tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub name: StringId,
    pub description: StringId,
    pub image: ImageId,
}

impl Hero {
    pub const fn new(name: StringId, description: StringId, image: ImageId) -> Self {
        Self {
            name,
            description,
            image,
        }
    }
}
