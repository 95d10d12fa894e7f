use crate::constants::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Name of a brand color family (e.g. `teal`), as used by the sector table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

/// Font Awesome icon name (e.g. `solar-panel`) without the `fa-` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconHandle(String);

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The `"default"` sentinel.
            #[must_use]
            pub fn fallback() -> Self {
                Self(DEFAULT_KEY.to_owned())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[must_use]
            pub fn is_fallback(&self) -> bool {
                self.0 == DEFAULT_KEY
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::fallback()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_newtype!(ColorToken);
string_newtype!(IconHandle);

/// The two shades of a brand color family the cards use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Card background.
    Light,
    /// Hover header, indicator square and changed marker.
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandShades {
    #[serde(rename = "200")]
    pub light: String,
    #[serde(rename = "900")]
    pub dark: String,
}

impl BrandShades {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self { light: light.into(), dark: dark.into() }
    }

    #[must_use]
    pub fn get(&self, shade: Shade) -> &str {
        match shade {
            Shade::Light => &self.light,
            Shade::Dark => &self.dark,
        }
    }
}

/// Theme color table and the few layout tokens the cards read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub brand: HashMap<ColorToken, BrandShades>,
    /// Grid gap, also subtracted from each card's maximum width.
    pub space_4: String,
    /// Shadow of a selected card.
    pub shadow_md: String,
}

impl Theme {
    /// Looks up a shade of a brand family. `None` when the family is not in the palette.
    #[must_use]
    pub fn shade(&self, token: &ColorToken, shade: Shade) -> Option<&str> {
        self.brand.get(token).map(|shades| shades.get(shade))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: HashMap::new(),
            space_4: "1rem".to_owned(),
            shadow_md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"
                .to_owned(),
        }
    }
}
