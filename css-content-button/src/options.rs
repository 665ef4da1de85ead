use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::button::ButtonProps;
use crate::foundation::{AttrValue, Callback, Classes, Size, Variant};
use crate::style::StyleMap;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Data-only button configuration, as supplied by a host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonOptions {
    pub content: String,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl ButtonOptions {
    /// Parse options from a JSON document.
    ///
    /// # Errors
    /// Returns an error when the document is not valid JSON or does not match
    /// the option schema (missing `content`, unknown variant or size).
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into component props, attaching the click handler.
    #[must_use]
    pub fn into_props(self, on_click: Option<Callback<()>>) -> ButtonProps {
        ButtonProps {
            content: AttrValue::from(self.content),
            variant: self.variant,
            size: self.size,
            disabled: self.disabled,
            on_click,
            class: self.class_name.map(Classes::from).unwrap_or_default(),
            style: self.style,
            aria_label: self.aria_label.map(AttrValue::from),
        }
    }
}
