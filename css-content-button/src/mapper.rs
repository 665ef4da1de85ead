use crate::button::ButtonProps;
use crate::foundation::{
    AttrValue, BASE_CLASS, CONTENT_PROPERTY, Callback, Classes, DISABLED_MODIFIER, modifier_class,
};
use crate::style::{StyleMap, escape_content};

/// DOM-facing attributes resolved from a set of button props.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAttrs {
    pub classes: Classes,
    pub style: StyleMap,
    pub on_click: Option<Callback<()>>,
    pub aria_label: AttrValue,
    pub disabled: bool,
}

/// Resolve props into the attributes the rendered `<button>` carries.
///
/// Class order is fixed: base, variant, size, the disabled marker, then the
/// caller's classes. The content property is generated first and caller
/// style entries are merged over it, so a caller entry with the same key
/// wins.
#[must_use]
pub fn map_props(props: &ButtonProps) -> ButtonAttrs {
    let mut classes = Classes::new();
    classes.push(BASE_CLASS);
    classes.push(props.variant.class());
    classes.push(props.size.class());
    if props.disabled {
        classes.push(modifier_class(DISABLED_MODIFIER));
    }
    classes.push(props.class.clone());

    let mut style = StyleMap::new();
    style.insert(CONTENT_PROPERTY, escape_content(&props.content));
    for (key, value) in props.style.iter() {
        if key == CONTENT_PROPERTY {
            log::debug!("style override replaces {CONTENT_PROPERTY} with {value}");
        }
        style.insert(AttrValue::from(key.to_string()), AttrValue::from(value.to_string()));
    }

    let on_click = if props.disabled {
        None
    } else {
        props.on_click.clone()
    };

    let aria_label = match props.aria_label.as_ref() {
        Some(label) if !label.is_empty() => label.clone(),
        _ => {
            log::trace!("aria-label falls back to button content");
            props.content.clone()
        }
    };

    ButtonAttrs {
        classes,
        style,
        on_click,
        aria_label,
        disabled: props.disabled,
    }
}
