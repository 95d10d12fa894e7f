/// Key of the designated fallback entry in the icon and sector tables.
pub const DEFAULT_KEY: &str = "default";

/// Cards per row when the caller does not say otherwise.
pub const DEFAULT_COLS: u8 = 3;

/// Space below every grid.
pub const DEFAULT_MARGIN_BOTTOM: &str = "3rem";

/// Directory prefix for technology background images.
pub const DEFAULT_IMAGE_BASE: &str = "images/technology_images";

pub const IDLE_OPACITY: f32 = 0.6;
pub const ACTIVE_OPACITY: f32 = 1.0;

/// Room reserved at the end of the title for the folder/marker overlays.
pub const TITLE_ICON_GUTTER: &str = "36px";

pub const HEADER_WHITE: &str = "white";
pub const HEADER_GREY: &str = "grey";
