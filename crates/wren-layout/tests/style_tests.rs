//! Integration tests for the style bundle and its string mutators.

use wren_layout::{
    AlignContent, AlignItems, AlignSelf, Display, FlexDirection, FlexWrap, JustifyContent, Length,
    Position, Style,
};

#[test]
fn test_initial_values() {
    // [§ 7.2 Components of Flexibility](https://www.w3.org/TR/css-flexbox-1/#flexibility)
    let style = Style::default();
    assert_eq!(style.width, Length::Auto);
    assert_eq!(style.height, Length::Auto);
    assert_eq!(style.min_width, Length::Fixed(0.0));
    assert_eq!(style.max_width, Length::Auto);
    assert_eq!(style.padding_top, Length::Fixed(0.0));
    assert_eq!(style.margin_left, Length::Fixed(0.0));
    assert_eq!(style.border_bottom, 0.0);
    assert_eq!(style.display, Display::Flex);
    assert_eq!(style.position, Position::Relative);
    assert_eq!(style.flex_basis, Length::Auto);
    assert_eq!(style.flex_grow, 0.0);
    assert_eq!(style.flex_shrink, 0.0);
    assert_eq!(style.flex_direction, FlexDirection::Row);
    assert_eq!(style.flex_wrap, FlexWrap::NoWrap);
    assert_eq!(style.justify_content, JustifyContent::FlexStart);
    assert_eq!(style.align_items, AlignItems::Stretch);
    assert_eq!(style.align_self, AlignSelf::Auto);
    assert_eq!(style.align_content, AlignContent::FlexStart);
    assert_eq!(style.order, 0);
}

#[test]
fn test_set_lengths_by_name() {
    let mut style = Style::default();
    style.set("width", "120px");
    style.set("min-height", "10px");
    style.set("maxWidth", "50%");
    assert_eq!(style.width, Length::Fixed(120.0));
    assert_eq!(style.min_height, Length::Fixed(10.0));
    assert_eq!(style.max_width, Length::Percent(50.0));
}

#[test]
fn test_camel_and_kebab_names_are_equivalent() {
    let mut kebab = Style::default();
    let mut camel = Style::default();
    kebab.set("margin-top", "8px");
    camel.set("marginTop", "8px");
    assert_eq!(kebab, camel);
}

#[test]
fn test_unknown_property_is_silent_noop() {
    let mut style = Style::default();
    let before = style.clone();
    style.set("text-align", "center");
    style.set("", "12px");
    assert_eq!(style, before);
}

#[test]
fn test_unparseable_value_keeps_prior_value() {
    let mut style = Style::default();
    style.set("width", "120px");
    style.set("width", "banana");
    assert_eq!(style.width, Length::Fixed(120.0));
    // A bare number is not a length.
    style.set("width", "42");
    assert_eq!(style.width, Length::Fixed(120.0));
}

#[test]
fn test_padding_shorthand_mirroring() {
    // [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
    //
    // 1..=4 tokens follow top, top/right, top/right/bottom,
    // top/right/bottom/left with standard mirroring.
    let mut style = Style::default();
    style.set("padding", "5px");
    assert_eq!(style.padding_top, Length::Fixed(5.0));
    assert_eq!(style.padding_right, Length::Fixed(5.0));
    assert_eq!(style.padding_bottom, Length::Fixed(5.0));
    assert_eq!(style.padding_left, Length::Fixed(5.0));

    style.set("padding", "1px 2px");
    assert_eq!(style.padding_top, Length::Fixed(1.0));
    assert_eq!(style.padding_right, Length::Fixed(2.0));
    assert_eq!(style.padding_bottom, Length::Fixed(1.0));
    assert_eq!(style.padding_left, Length::Fixed(2.0));

    style.set("padding", "1px 2px 3px");
    assert_eq!(style.padding_top, Length::Fixed(1.0));
    assert_eq!(style.padding_right, Length::Fixed(2.0));
    assert_eq!(style.padding_bottom, Length::Fixed(3.0));
    assert_eq!(style.padding_left, Length::Fixed(2.0));

    style.set("padding", "1px 2px 3px 4px");
    assert_eq!(style.padding_top, Length::Fixed(1.0));
    assert_eq!(style.padding_right, Length::Fixed(2.0));
    assert_eq!(style.padding_bottom, Length::Fixed(3.0));
    assert_eq!(style.padding_left, Length::Fixed(4.0));
}

#[test]
fn test_margin_shorthand_accepts_auto() {
    let mut style = Style::default();
    style.set("margin", "auto 10px");
    assert_eq!(style.margin_top, Length::Auto);
    assert_eq!(style.margin_right, Length::Fixed(10.0));
    assert_eq!(style.margin_bottom, Length::Auto);
    assert_eq!(style.margin_left, Length::Fixed(10.0));
}

#[test]
fn test_border_width_shorthand_stores_pixels() {
    let mut style = Style::default();
    style.set("border-width", "2px 4px");
    assert_eq!(style.border_top, 2.0);
    assert_eq!(style.border_right, 4.0);
    assert_eq!(style.border_bottom, 2.0);
    assert_eq!(style.border_left, 4.0);

    style.set("borderLeft", "1px");
    assert_eq!(style.border_left, 1.0);
}

#[test]
fn test_flex_shorthand_table() {
    // [§ 7.1.1 Basic Values of flex](https://www.w3.org/TR/css-flexbox-1/#flex-common)
    //
    // "flex: auto" is "1 1 auto"; "flex: none" is "0 0 auto";
    // "flex: <positive-number>" is "<positive-number> 1 0".
    let mut style = Style::default();
    style.set("flex", "auto");
    assert_eq!(
        (style.flex_basis, style.flex_grow, style.flex_shrink),
        (Length::Auto, 1.0, 1.0)
    );

    style.set("flex", "none");
    assert_eq!(
        (style.flex_basis, style.flex_grow, style.flex_shrink),
        (Length::Auto, 0.0, 0.0)
    );

    style.set("flex", "3");
    assert_eq!(
        (style.flex_basis, style.flex_grow, style.flex_shrink),
        (Length::Fixed(0.0), 3.0, 1.0)
    );

    // "flex: initial" is "0 1 auto".
    style.reset("flex");
    assert_eq!(
        (style.flex_basis, style.flex_grow, style.flex_shrink),
        (Length::Auto, 0.0, 1.0)
    );
}

#[test]
fn test_flex_flow_shorthand() {
    let mut style = Style::default();
    style.set("flex-flow", "column wrap");
    assert_eq!(style.flex_direction, FlexDirection::Column);
    assert_eq!(style.flex_wrap, FlexWrap::Wrap);

    style.set("flexFlow", "row-reverse");
    assert_eq!(style.flex_direction, FlexDirection::RowReverse);
    // The wrap token is optional and untouched when absent.
    assert_eq!(style.flex_wrap, FlexWrap::Wrap);

    style.reset("flex-flow");
    assert_eq!(style.flex_direction, FlexDirection::Row);
    assert_eq!(style.flex_wrap, FlexWrap::NoWrap);
}

#[test]
fn test_align_content_assignment_without_reset() {
    // Plain assignment must take effect on its own; reset only restores
    // the initial value.
    let mut style = Style::default();
    style.set("align-content", "center");
    assert_eq!(style.align_content, AlignContent::Center);
    style.set("alignContent", "space-between");
    assert_eq!(style.align_content, AlignContent::SpaceBetween);
    style.reset("align-content");
    assert_eq!(style.align_content, AlignContent::FlexStart);
}

#[test]
fn test_keyword_properties() {
    let mut style = Style::default();
    style.set("display", "none");
    assert_eq!(style.display, Display::None);
    style.set("position", "absolute");
    assert_eq!(style.position, Position::Absolute);
    style.set("justify-content", "space-around");
    assert_eq!(style.justify_content, JustifyContent::SpaceAround);
    style.set("align-items", "flex-end");
    assert_eq!(style.align_items, AlignItems::FlexEnd);
    style.set("align-self", "center");
    assert_eq!(style.align_self, AlignSelf::Center);
    style.set("flex-wrap", "wrap-reverse");
    assert_eq!(style.flex_wrap, FlexWrap::WrapReverse);
    // Unknown keyword keeps the prior value.
    style.set("display", "inline");
    assert_eq!(style.display, Display::None);
}

#[test]
fn test_order_parses_integers_only() {
    let mut style = Style::default();
    style.set("order", "7");
    assert_eq!(style.order, 7);
    style.set("order", "-2");
    assert_eq!(style.order, -2);
    style.set("order", "1.5");
    assert_eq!(style.order, -2);
}

#[test]
fn test_align_self_resolution() {
    assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
    assert_eq!(
        AlignSelf::FlexEnd.resolve(AlignItems::Center),
        AlignItems::FlexEnd
    );
}

#[test]
fn test_reset_single_property() {
    let mut style = Style::default();
    style.set("width", "100px");
    style.set("padding", "4px");
    style.reset("width");
    style.reset("padding");
    assert_eq!(style.width, Length::Auto);
    assert_eq!(style.padding_left, Length::Fixed(0.0));
}

#[test]
fn test_reset_all() {
    let mut style = Style::default();
    style.set("width", "100px");
    style.set("order", "3");
    style.set("flex-direction", "column");
    style.reset_all();
    assert_eq!(style, Style::default());
}

#[test]
fn test_serialized_keyword_casing() {
    // Layout dumps serialize keywords in kebab-case, matching the CSS
    // source of truth.
    let mut style = Style::default();
    style.set("justify-content", "space-between");
    assert_eq!(
        serde_json::to_value(style.justify_content).unwrap(),
        serde_json::json!("space-between")
    );
    assert_eq!(
        serde_json::to_value(Display::None).unwrap(),
        serde_json::json!("none")
    );
    assert_eq!(
        serde_json::to_value(Length::Auto).unwrap(),
        serde_json::json!("auto")
    );
    assert_eq!(
        serde_json::to_value(Length::Fixed(12.0)).unwrap(),
        serde_json::json!({ "fixed": 12.0 })
    );
}
