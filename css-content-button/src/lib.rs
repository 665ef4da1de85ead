#![forbid(unsafe_code)]
//! A Yew button whose visible label is drawn by the stylesheet.
//!
//! The label text is carried in the `--button-content` custom property and
//! rendered with a `content: var(--button-content)` rule, so it never
//! appears as a DOM text node. See [`button::CssContentButton`].

pub mod button;
pub mod dom;
pub mod foundation;
pub mod mapper;
#[cfg(target_arch = "wasm32")]
pub mod mount;
pub mod options;
pub mod style;

pub use button::{ButtonProps, CssContentButton};
pub use foundation::{BASE_CLASS, CONTENT_PROPERTY, Size, Variant};
pub use mapper::{ButtonAttrs, map_props};
pub use options::{ButtonOptions, OptionsError};
pub use style::{StyleMap, escape_content};
