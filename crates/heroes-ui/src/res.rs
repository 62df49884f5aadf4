use heroes_core::{ImageId, StringId, resources};

/// Resolves a label through the string table in the current locals.
///
/// Lookups that fail are logged and fall back to the raw identifier, so a
/// missing translation shows up on screen instead of blanking the view.
pub fn string_resource(id: StringId) -> String {
    let res = resources();
    match res.strings.resolve(id, &res.locale) {
        Ok(s) => s.to_string(),
        Err(e) => {
            log::warn!("{e}");
            id.0.to_string()
        }
    }
}

/// Checks `id` against the image store in the current locals and returns it
/// for use in an `Image` view. Unknown ids are logged; decoding and drawing a
/// placeholder is up to the platform.
pub fn painter_resource(id: ImageId) -> ImageId {
    if let Err(e) = resources().images.get(id) {
        log::warn!("{e}");
    }
    id
}
