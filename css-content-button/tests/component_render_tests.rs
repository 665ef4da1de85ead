use css_content_button::{ButtonOptions, ButtonProps, CssContentButton, Size, Variant};
use futures::executor::block_on;
use yew::{AttrValue, Classes, LocalServerRenderer};

fn render(props: ButtonProps) -> String {
    block_on(LocalServerRenderer::<CssContentButton>::with_props(props).render())
}

#[test]
fn default_button_renders_base_classes_and_label() {
    let html = render(ButtonProps::new("Play Video"));
    assert!(html.contains(
        r#"class="css-content-button css-content-button--primary css-content-button--medium""#
    ));
    assert!(html.contains(r#"aria-label="Play Video""#));
    assert!(html.contains(r#"type="button""#));
    assert!(html.contains("--button-content: "));
    assert!(!html.contains(" disabled"));
}

#[test]
fn label_text_is_not_a_text_node() {
    let html = render(ButtonProps::new("Play Video"));
    assert!(!html.contains(">Play Video<"));
    assert!(html.contains("></button>"));
}

#[test]
fn variant_and_size_render_as_modifier_classes() {
    let props = ButtonProps {
        variant: Variant::Warning,
        size: Size::Large,
        ..ButtonProps::new("Test")
    };
    let html = render(props);
    assert!(html.contains("css-content-button--warning"));
    assert!(html.contains("css-content-button--large"));
    assert!(!html.contains("css-content-button--primary"));
    assert!(!html.contains("css-content-button--medium"));
}

#[test]
fn disabled_button_carries_marker_and_native_state() {
    let props = ButtonProps {
        disabled: true,
        ..ButtonProps::new("Test")
    };
    let html = render(props);
    assert!(html.contains("css-content-button--disabled"));
    assert!(html.contains(" disabled"));
}

#[test]
fn custom_class_and_style_are_rendered() {
    let props = ButtonProps {
        class: Classes::from("custom-class"),
        style: [("--custom-var", "test-value")].into_iter().collect(),
        ..ButtonProps::new("Test")
    };
    let html = render(props);
    assert!(html.contains("css-content-button--medium custom-class"));
    assert!(html.contains("--custom-var: test-value"));
}

#[test]
fn explicit_aria_label_wins_over_content() {
    let props = ButtonProps {
        aria_label: Some(AttrValue::from("Play the video")),
        ..ButtonProps::new("Play")
    };
    let html = render(props);
    assert!(html.contains(r#"aria-label="Play the video""#));
}

#[test]
fn options_render_the_same_button_as_props() {
    let options = ButtonOptions::from_json(
        r#"{"content":"Go","variant":"info","size":"small","className":"cta"}"#,
    )
    .unwrap();
    let from_options = render(options.into_props(None));
    let from_props = render(ButtonProps {
        variant: Variant::Info,
        size: Size::Small,
        class: Classes::from("cta"),
        ..ButtonProps::new("Go")
    });
    assert_eq!(from_options, from_props);
}

#[test]
fn trailing_backslash_content_keeps_caller_style() {
    let props = ButtonProps {
        style: [("--custom-var", "test-value")].into_iter().collect(),
        ..ButtonProps::new(r"C:\")
    };
    let html = render(props);
    assert!(html.contains(r#"style="--custom-var: test-value""#));
    assert!(html.contains(r#"aria-label="C:\""#));
}

#[test]
fn caller_style_cannot_inject_declarations() {
    let props = ButtonProps {
        style: [("--custom-var", "red; color: blue"), ("--gap", "4px")]
            .into_iter()
            .collect(),
        ..ButtonProps::new("Test")
    };
    let html = render(props);
    assert!(!html.contains("color: blue"));
    assert!(html.contains("--gap: 4px"));
}

#[test]
fn extra_class_names_are_split_and_deduplicated() {
    let props = ButtonProps {
        class: Classes::from("custom-class  css-content-button extra"),
        ..ButtonProps::new("Test")
    };
    let html = render(props);
    assert!(html.contains(
        r#"class="css-content-button css-content-button--primary css-content-button--medium custom-class extra""#
    ));
}
