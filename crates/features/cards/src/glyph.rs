use strum_macros::{AsRefStr, Display, EnumIter};
use techdeck_kernel::domain::theme::IconHandle;

/// Font Awesome family class shared by every icon on a card.
pub const ICON_FAMILY: &str = "fa-solid";

/// Fixed overlay icons drawn on top of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Glyph {
    /// Selected technology.
    Folder,
    /// Selected technology whose selection is not committed yet.
    StarOfLife,
    /// Brand colored square of the indicator strip.
    Square,
}

impl Glyph {
    #[must_use]
    pub fn class(self) -> String {
        format!("{ICON_FAMILY} fa-{self}")
    }
}

/// Class list of a catalog icon.
#[must_use]
pub fn icon_class(icon: &IconHandle) -> String {
    format!("{ICON_FAMILY} fa-{icon}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn glyph_classes_are_kebab_case() {
        let classes: Vec<String> = Glyph::iter().map(Glyph::class).collect();
        assert_eq!(classes, ["fa-solid fa-folder", "fa-solid fa-star-of-life", "fa-solid fa-square"]);
    }

    #[test]
    fn icon_class_prefixes_handle() {
        assert_eq!(icon_class(&IconHandle::from("solar-panel")), "fa-solid fa-solar-panel");
    }
}
