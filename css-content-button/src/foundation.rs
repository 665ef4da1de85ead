use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use web_sys::{HtmlElement, MouseEvent};
pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Classes, Html, Properties, html};
pub use yew::{use_effect_with, use_node_ref};

/// Block-level class every rendered button carries; modifiers hang off it.
pub const BASE_CLASS: &str = "css-content-button";

/// Custom property the stylesheet reads to draw the label.
pub const CONTENT_PROPERTY: &str = "--button-content";

/// Modifier appended to the base class while the button is disabled.
pub const DISABLED_MODIFIER: &str = "disabled";

#[must_use]
pub fn modifier_class(modifier: &str) -> String {
    format!("{BASE_CLASS}--{modifier}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl Variant {
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Warning,
        Self::Info,
    ];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub fn class(self) -> String {
        modifier_class(self.suffix())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button variant: {0}")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.suffix() == s)
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    #[must_use]
    pub fn class(self) -> String {
        modifier_class(self.suffix())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button size: {0}")]
pub struct ParseSizeError(pub String);

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.suffix() == s)
            .ok_or_else(|| ParseSizeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{BASE_CLASS, ParseSizeError, ParseVariantError, Size, Variant, modifier_class};

    #[test]
    fn variant_classes_use_block_modifier_form() {
        for variant in Variant::ALL {
            let class = variant.class();
            assert!(class.starts_with("css-content-button--"));
            assert!(class.ends_with(variant.suffix()));
        }
        assert_eq!(Variant::Danger.class(), "css-content-button--danger");
    }

    #[test]
    fn size_classes_use_block_modifier_form() {
        for size in Size::ALL {
            assert_eq!(size.class(), format!("{BASE_CLASS}--{size}"));
        }
    }

    #[test]
    fn defaults_are_primary_and_medium() {
        assert_eq!(Variant::default(), Variant::Primary);
        assert_eq!(Size::default(), Size::Medium);
    }

    #[test]
    fn tags_parse_from_their_display_names() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        for size in Size::ALL {
            assert_eq!(size.to_string().parse::<Size>(), Ok(size));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(
            "ghost".parse::<Variant>(),
            Err(ParseVariantError("ghost".into()))
        );
        assert_eq!("Large".parse::<Size>(), Err(ParseSizeError("Large".into())));
        assert_eq!(
            ParseSizeError("xl".into()).to_string(),
            "unknown button size: xl"
        );
    }

    #[test]
    fn modifier_class_joins_with_double_dash() {
        assert_eq!(modifier_class("disabled"), "css-content-button--disabled");
    }
}
