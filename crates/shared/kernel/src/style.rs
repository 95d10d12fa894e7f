//! Card appearance rules.
//!
//! All flag-dependent styling of a technology card is decided here so that the UI layer only
//! has to place the values. The rules:
//!
//! * background: the light shade of the card's brand color, or an image when present;
//! * opacity: full when the card is conventional, selected or hovered, dimmed otherwise;
//! * header: grey on white at rest, white on the dark brand shade while hovered, white on
//!   grey for conventional cards;
//! * overlays (never on conventional cards): a folder on selected cards, a changed marker on
//!   selected *and* changed cards, and the indicator strip with the technology icon.

use std::borrow::Cow;
use std::fmt::Write as _;
use techdeck_domain::card::CardFlags;
use techdeck_domain::constants::{
    ACTIVE_OPACITY, DEFAULT_COLS, DEFAULT_KEY, HEADER_GREY, HEADER_WHITE, IDLE_OPACITY,
    TITLE_ICON_GUTTER,
};
use techdeck_domain::theme::{ColorToken, Shade, Theme};
use typed_builder::TypedBuilder;

/// Inputs of [`CardStyle`].
///
/// ```rust
/// use techdeck_domain::card::CardFlags;
/// use techdeck_domain::theme::{ColorToken, Theme};
/// use techdeck_kernel::style::CardAppearance;
///
/// let theme = Theme::default();
/// let color = ColorToken::from("teal");
/// let style = CardAppearance::builder()
///     .theme(&theme)
///     .color(&color)
///     .flags(CardFlags::SELECTED)
///     .build()
///     .style();
/// assert!(style.show_folder);
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct CardAppearance<'a> {
    theme: &'a Theme,
    color: &'a ColorToken,
    #[builder(default = CardFlags::empty())]
    flags: CardFlags,
    #[builder(default = DEFAULT_COLS)]
    cols: u8,
    #[builder(default)]
    image: Option<&'a str>,
}

impl CardAppearance<'_> {
    #[must_use]
    pub fn style(&self) -> CardStyle {
        CardStyle::compute(self.theme, self.color, self.flags, self.cols, self.image)
    }
}

/// Resolved visual state of one card for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub bg_color: String,
    pub hover_color: String,
    pub bg_image: String,
    pub opacity: f32,
    pub box_shadow: String,
    pub max_width: String,
    pub header_color: &'static str,
    pub header_bg: String,
    pub title_width: Cow<'static, str>,
    pub show_folder: bool,
    pub show_changed_marker: bool,
    pub marker_color: String,
    pub show_indicator: bool,
    pub square_color: String,
}

impl CardStyle {
    #[must_use]
    pub fn compute(
        theme: &Theme,
        color: &ColorToken,
        flags: CardFlags,
        cols: u8,
        image: Option<&str>,
    ) -> Self {
        let bg_color = shade_or_default(theme, color, Shade::Light);
        let hover_color = shade_or_default(theme, color, Shade::Dark);

        let hovered = flags.contains(CardFlags::HOVERED);
        let selected = flags.contains(CardFlags::SELECTED);
        let conventional = flags.contains(CardFlags::CONVENTIONAL);
        let overlays = flags.has_overlays();

        let header_bg = if conventional {
            HEADER_GREY.to_owned()
        } else if hovered {
            hover_color.clone()
        } else {
            HEADER_WHITE.to_owned()
        };

        let title_width = if !flags.contains(CardFlags::FEATURED) || conventional {
            Cow::Borrowed("100%")
        } else {
            Cow::Owned(format!("calc(100% - {TITLE_ICON_GUTTER})"))
        };

        Self {
            bg_image: image.map_or_else(|| "none".to_owned(), |path| format!("url('{path}')")),
            opacity: if flags.is_prominent() { ACTIVE_OPACITY } else { IDLE_OPACITY },
            box_shadow: if selected { theme.shadow_md.clone() } else { "none".to_owned() },
            max_width: max_width(cols, &theme.space_4),
            header_color: if conventional || hovered { HEADER_WHITE } else { HEADER_GREY },
            header_bg,
            title_width,
            show_folder: overlays && selected,
            show_changed_marker: overlays && selected && flags.contains(CardFlags::CHANGED),
            marker_color: if hovered { hover_color.clone() } else { HEADER_WHITE.to_owned() },
            show_indicator: overlays,
            square_color: hover_color.clone(),
            bg_color,
            hover_color,
        }
    }

    /// Inline style of the card container.
    #[must_use]
    pub fn container_css(&self) -> String {
        let mut css = String::with_capacity(256);
        let _ = write!(
            css,
            "max-width: {}; background-color: {}; background-image: {}; opacity: {}; box-shadow: {};",
            self.max_width, self.bg_color, self.bg_image, self.opacity, self.box_shadow
        );
        css
    }

    /// Inline style of the title bar.
    #[must_use]
    pub fn header_css(&self) -> String {
        format!("color: {}; background: {};", self.header_color, self.header_bg)
    }

    #[must_use]
    pub fn title_css(&self) -> String {
        format!("width: {};", self.title_width)
    }

    #[must_use]
    pub fn marker_css(&self) -> String {
        format!("color: {};", self.marker_color)
    }

    #[must_use]
    pub fn square_css(&self) -> String {
        format!("color: {};", self.square_color)
    }
}

fn shade_or_default(theme: &Theme, color: &ColorToken, shade: Shade) -> String {
    theme.shade(color, shade).unwrap_or(DEFAULT_KEY).to_owned()
}

/// `calc(<share>% - <gap>)` where the share is an even split of the row.
fn max_width(cols: u8, gap: &str) -> String {
    let share = 100.0 / f64::from(cols.max(1));
    format!("calc({share}% - {gap})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_width_splits_row_evenly() {
        assert_eq!(max_width(4, "1rem"), "calc(25% - 1rem)");
        assert_eq!(max_width(1, "1rem"), "calc(100% - 1rem)");
        assert_eq!(max_width(3, "16px"), "calc(33.333333333333336% - 16px)");
    }

    #[test]
    fn zero_columns_behaves_like_one() {
        assert_eq!(max_width(0, "1rem"), max_width(1, "1rem"));
    }
}
