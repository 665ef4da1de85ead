use js_sys::Function;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::button::CssContentButton;
use crate::dom;
use crate::foundation::Callback;
use crate::options::ButtonOptions;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("mount target #{0} not found")]
    TargetMissing(String),
    #[error("invalid button options: {0}")]
    InvalidOptions(String),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}

fn click_callback(handler: Function) -> Callback<()> {
    Callback::from(move |()| {
        if let Err(err) = handler.call0(&JsValue::NULL) {
            log::error!("button click handler threw: {err:?}");
        }
    })
}

/// Render a button into the element with id `target_id`.
///
/// `options` follows the `ButtonOptions` shape (`content`, `variant`, `size`,
/// `disabled`, `className`, `style`, `ariaLabel`).
///
/// # Errors
/// Rejects when the target element is missing or the options do not
/// deserialize.
#[wasm_bindgen(js_name = mountButton)]
pub fn mount_button(
    target_id: &str,
    options: JsValue,
    on_click: Option<Function>,
) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let root = dom::element_by_id(target_id).ok_or_else(|| {
        log::error!("cannot mount button: #{target_id} is missing");
        MountError::TargetMissing(target_id.to_string())
    })?;
    let options: ButtonOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|err| MountError::InvalidOptions(err.to_string()))?;
    let props = options.into_props(on_click.map(click_callback));
    yew::Renderer::<CssContentButton>::with_root_and_props(root, props).render();
    Ok(())
}
