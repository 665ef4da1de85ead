use crate::dom;
use crate::foundation as f;
use crate::mapper::map_props;
use crate::style::StyleMap;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    /// Label text. Reaches the page only through the content custom property.
    pub content: f::AttrValue,
    #[prop_or_default]
    pub variant: f::Variant,
    #[prop_or_default]
    pub size: f::Size,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub on_click: Option<f::Callback<()>>,
    /// Extra classes, appended after the generated ones.
    ///
    /// These go through `Classes`, so whitespace-separated names are split
    /// and names already present are not repeated. The resulting
    /// `classList` matches appending the raw string.
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub style: StyleMap,
    /// Accessible name; the content is used when this is absent or empty.
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
}

impl ButtonProps {
    /// Props with every optional field at its default.
    #[must_use]
    pub fn new(content: impl Into<f::AttrValue>) -> Self {
        Self {
            content: content.into(),
            variant: f::Variant::default(),
            size: f::Size::default(),
            disabled: false,
            on_click: None,
            class: f::Classes::new(),
            style: StyleMap::new(),
            aria_label: None,
        }
    }
}

/// Button whose visible label is drawn by the stylesheet.
///
/// The rendered element has no text children; the label travels in the
/// `--button-content` custom property and is exposed to assistive
/// technology through `aria-label`.
#[f::function_component(CssContentButton)]
pub fn css_content_button(props: &ButtonProps) -> f::Html {
    let attrs = map_props(props);
    let node = f::use_node_ref();
    {
        let style = attrs.style.clone();
        f::use_effect_with((style, node.clone()), |(style, node)| {
            let element = node.cast::<f::HtmlElement>();
            if let Some(element) = &element {
                dom::apply_style(element, style);
            }
            let keys: Vec<String> = style.keys().map(str::to_string).collect();
            move || {
                if let Some(element) = element {
                    dom::clear_style(&element, &keys);
                }
            }
        });
    }
    let onclick = attrs
        .on_click
        .map(|cb| cb.reform(|_: f::MouseEvent| ()));
    let style = attrs.style.to_css();
    f::html! {
        <button
            ref={node}
            type="button"
            class={attrs.classes}
            style={style}
            aria-label={attrs.aria_label}
            disabled={attrs.disabled}
            {onclick}
        />
    }
}
