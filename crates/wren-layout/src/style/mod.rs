//! Typed style bundle and the string-keyed property mutator.
//!
//! The layout engine consumes typed values only; an external style source
//! (a CSS cascade, an embedder API) pushes raw declaration strings through
//! [`Style::set`] and [`Style::reset`]. Both kebab-case and camelCase
//! property names are accepted, mirroring how embedders forward either CSS
//! text or scripted style access.
//!
//! # Relevant Specifications
//!
//! - [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS Cascading Level 4 § 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)

/// Keyword types for display, position, and the flex properties.
pub mod keywords;
/// Tagged length values and the `px | % | auto` grammar.
pub mod length;
/// One-shot reporting for unsupported style values.
mod warning;

use serde::Serialize;

use keywords::{
    AlignContent, AlignItems, AlignSelf, Display, FlexDirection, FlexWrap, JustifyContent,
    Position,
};
use length::Length;

/// The layout-relevant properties of one node, with CSS initial values.
///
/// Pure data: nothing here resolves percentages or consults the tree.
/// Defaults follow the flexbox initial values with one engine-specific
/// deviation inherited from the embedding contract: `display` defaults to
/// `flex` because every container in this engine is a flex container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    pub width: Length,
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    pub height: Length,
    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    pub min_width: Length,
    /// Minimum height clamp applied after flex resolution.
    pub min_height: Length,
    /// Maximum width clamp; 'auto' means unbounded.
    pub max_width: Length,
    /// Maximum height clamp; 'auto' means unbounded.
    pub max_height: Length,

    /// [§ 6.2 'padding-top'](https://www.w3.org/TR/css-box-4/#padding-physical)
    pub padding_top: Length,
    /// Left padding; percentages resolve against the parent width.
    pub padding_left: Length,
    /// Bottom padding; percentages resolve against the parent width.
    pub padding_bottom: Length,
    /// Right padding; percentages resolve against the parent width.
    pub padding_right: Length,

    /// [§ 6.1 'margin-top'](https://www.w3.org/TR/css-box-4/#margin-physical)
    ///
    /// 'auto' margins absorb free space during alignment.
    pub margin_top: Length,
    /// Left margin; 'auto' absorbs free space during alignment.
    pub margin_left: Length,
    /// Bottom margin; 'auto' absorbs free space during alignment.
    pub margin_bottom: Length,
    /// Right margin; 'auto' absorbs free space during alignment.
    pub margin_right: Length,

    /// Top border width in pixels.
    pub border_top: f32,
    /// Left border width in pixels.
    pub border_left: f32,
    /// Bottom border width in pixels.
    pub border_bottom: f32,
    /// Right border width in pixels.
    pub border_right: f32,

    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    pub display: Display,
    /// [§ 3.1 'position'](https://www.w3.org/TR/css-position-3/#position-property)
    pub position: Position,

    /// [§ 7.3.1 'flex-basis'](https://www.w3.org/TR/css-flexbox-1/#flex-basis-property)
    pub flex_basis: Length,
    /// [§ 7.2.1 'flex-grow'](https://www.w3.org/TR/css-flexbox-1/#flex-grow-property)
    pub flex_grow: f32,
    /// [§ 7.2.2 'flex-shrink'](https://www.w3.org/TR/css-flexbox-1/#flex-shrink-property)
    pub flex_shrink: f32,
    /// [§ 5.1 'flex-direction'](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
    pub flex_direction: FlexDirection,
    /// [§ 5.2 'flex-wrap'](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
    pub flex_wrap: FlexWrap,
    /// [§ 8.2 'justify-content'](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
    pub justify_content: JustifyContent,
    /// [§ 8.3 'align-items'](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
    pub align_items: AlignItems,
    /// [§ 8.3 'align-self'](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
    pub align_self: AlignSelf,
    /// [§ 8.4 'align-content'](https://www.w3.org/TR/css-flexbox-1/#align-content-property)
    pub align_content: AlignContent,
    /// [§ 5.4 'order'](https://www.w3.org/TR/css-flexbox-1/#order-property)
    ///
    /// Items lay out in ascending order; ties keep document order.
    pub order: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: Length::Auto,
            height: Length::Auto,
            min_width: Length::Fixed(0.0),
            min_height: Length::Fixed(0.0),
            max_width: Length::Auto,
            max_height: Length::Auto,
            padding_top: Length::Fixed(0.0),
            padding_left: Length::Fixed(0.0),
            padding_bottom: Length::Fixed(0.0),
            padding_right: Length::Fixed(0.0),
            margin_top: Length::Fixed(0.0),
            margin_left: Length::Fixed(0.0),
            margin_bottom: Length::Fixed(0.0),
            margin_right: Length::Fixed(0.0),
            border_top: 0.0,
            border_left: 0.0,
            border_bottom: 0.0,
            border_right: 0.0,
            display: Display::Flex,
            position: Position::Relative,
            flex_basis: Length::Auto,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_self: AlignSelf::Auto,
            align_content: AlignContent::FlexStart,
            order: 0,
        }
    }
}

/// Parse a length and store it, leaving the slot untouched on failure.
fn apply_length(slot: &mut Length, value: &str) {
    if let Some(parsed) = Length::parse(value) {
        *slot = parsed;
    }
}

/// Parse a border width through the length grammar, storing the raw
/// pixel payload. Percent borders keep their number, matching the
/// embedding contract rather than full CSS.
fn apply_border(slot: &mut f32, value: &str) {
    if let Some(parsed) = Length::parse(value) {
        *slot = parsed.value();
    }
}

/// Parse a float and store it, leaving the slot untouched on failure.
fn apply_float(slot: &mut f32, value: &str) {
    if let Ok(parsed) = value.parse::<f32>() {
        *slot = parsed;
    }
}

/// [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
///
/// Expand 1..=4 whitespace-separated tokens into `[top, right, bottom,
/// left]` with the standard CSS mirroring. Extra tokens beyond four are
/// ignored.
fn expand_sides(value: &str) -> Option<[&str; 4]> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [] => None,
        &[all] => Some([all, all, all, all]),
        &[vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        &[top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        &[top, right, bottom, left, ..] => Some([top, right, bottom, left]),
    }
}

impl Style {
    /// Apply a property by name.
    ///
    /// Unrecognised names are a silent no-op; unparseable values leave the
    /// property at its prior value. Shorthands (`padding`, `margin`,
    /// `border-width`, `flex`, `flex-flow`) expand per the CSS rules.
    pub fn set(&mut self, name: &str, value: &str) {
        match name {
            "width" => apply_length(&mut self.width, value),
            "height" => apply_length(&mut self.height, value),
            "min-width" | "minWidth" => apply_length(&mut self.min_width, value),
            "min-height" | "minHeight" => apply_length(&mut self.min_height, value),
            "max-width" | "maxWidth" => apply_length(&mut self.max_width, value),
            "max-height" | "maxHeight" => apply_length(&mut self.max_height, value),

            "padding" => self.set_padding_shorthand(value),
            "padding-top" | "paddingTop" => apply_length(&mut self.padding_top, value),
            "padding-left" | "paddingLeft" => apply_length(&mut self.padding_left, value),
            "padding-bottom" | "paddingBottom" => apply_length(&mut self.padding_bottom, value),
            "padding-right" | "paddingRight" => apply_length(&mut self.padding_right, value),

            "margin" => self.set_margin_shorthand(value),
            "margin-top" | "marginTop" => apply_length(&mut self.margin_top, value),
            "margin-left" | "marginLeft" => apply_length(&mut self.margin_left, value),
            "margin-bottom" | "marginBottom" => apply_length(&mut self.margin_bottom, value),
            "margin-right" | "marginRight" => apply_length(&mut self.margin_right, value),

            "border-width" | "borderWidth" => self.set_border_shorthand(value),
            "border-top" | "borderTop" => apply_border(&mut self.border_top, value),
            "border-left" | "borderLeft" => apply_border(&mut self.border_left, value),
            "border-bottom" | "borderBottom" => apply_border(&mut self.border_bottom, value),
            "border-right" | "borderRight" => apply_border(&mut self.border_right, value),

            "position" => {
                if let Some(parsed) = Position::parse(value) {
                    self.position = parsed;
                }
            }
            "display" => {
                if let Some(parsed) = Display::parse(value) {
                    self.display = parsed;
                }
            }

            "flex" => self.set_flex_shorthand(value),
            "flex-basis" | "flexBasis" => apply_length(&mut self.flex_basis, value),
            "flex-grow" | "flexGrow" => apply_float(&mut self.flex_grow, value),
            "flex-shrink" | "flexShrink" => apply_float(&mut self.flex_shrink, value),
            "flex-direction" | "flexDirection" => {
                if let Some(parsed) = FlexDirection::parse(value) {
                    self.flex_direction = parsed;
                }
            }
            "flex-wrap" | "flexWrap" => {
                if let Some(parsed) = FlexWrap::parse(value) {
                    self.flex_wrap = parsed;
                }
            }
            "flex-flow" | "flexFlow" => self.set_flex_flow_shorthand(value),
            "justify-content" | "justifyContent" => {
                if let Some(parsed) = JustifyContent::parse(value) {
                    self.justify_content = parsed;
                }
            }
            "align-items" | "alignItems" => {
                if let Some(parsed) = AlignItems::parse(value) {
                    self.align_items = parsed;
                }
            }
            "align-self" | "alignSelf" => {
                if let Some(parsed) = AlignSelf::parse(value) {
                    self.align_self = parsed;
                }
            }
            "align-content" | "alignContent" => {
                if let Some(parsed) = AlignContent::parse(value) {
                    self.align_content = parsed;
                }
            }
            "order" => {
                if let Ok(parsed) = value.parse::<i32>() {
                    self.order = parsed;
                }
            }
            // Unrecognised property names are ignored.
            _ => {}
        }
    }

    /// Restore a property (or, for a shorthand name, every property it
    /// covers) to its initial value.
    ///
    /// `reset("flex")` restores `flex: initial`, which is `0 1 auto` per
    /// [§ 7.1.1](https://www.w3.org/TR/css-flexbox-1/#flex-common), not the
    /// longhand initial values.
    pub fn reset(&mut self, name: &str) {
        let initial = Self::default();
        match name {
            "width" => self.width = initial.width,
            "height" => self.height = initial.height,
            "min-width" | "minWidth" => self.min_width = initial.min_width,
            "min-height" | "minHeight" => self.min_height = initial.min_height,
            "max-width" | "maxWidth" => self.max_width = initial.max_width,
            "max-height" | "maxHeight" => self.max_height = initial.max_height,

            "padding" => {
                self.padding_top = initial.padding_top;
                self.padding_left = initial.padding_left;
                self.padding_bottom = initial.padding_bottom;
                self.padding_right = initial.padding_right;
            }
            "padding-top" | "paddingTop" => self.padding_top = initial.padding_top,
            "padding-left" | "paddingLeft" => self.padding_left = initial.padding_left,
            "padding-bottom" | "paddingBottom" => self.padding_bottom = initial.padding_bottom,
            "padding-right" | "paddingRight" => self.padding_right = initial.padding_right,

            "margin" => {
                self.margin_top = initial.margin_top;
                self.margin_left = initial.margin_left;
                self.margin_bottom = initial.margin_bottom;
                self.margin_right = initial.margin_right;
            }
            "margin-top" | "marginTop" => self.margin_top = initial.margin_top,
            "margin-left" | "marginLeft" => self.margin_left = initial.margin_left,
            "margin-bottom" | "marginBottom" => self.margin_bottom = initial.margin_bottom,
            "margin-right" | "marginRight" => self.margin_right = initial.margin_right,

            "border-width" | "borderWidth" => {
                self.border_top = initial.border_top;
                self.border_left = initial.border_left;
                self.border_bottom = initial.border_bottom;
                self.border_right = initial.border_right;
            }
            "border-top" | "borderTop" => self.border_top = initial.border_top,
            "border-left" | "borderLeft" => self.border_left = initial.border_left,
            "border-bottom" | "borderBottom" => self.border_bottom = initial.border_bottom,
            "border-right" | "borderRight" => self.border_right = initial.border_right,

            "position" => self.position = initial.position,
            "display" => self.display = initial.display,

            "flex" => {
                self.flex_basis = Length::Auto;
                self.flex_grow = 0.0;
                self.flex_shrink = 1.0;
            }
            "flex-basis" | "flexBasis" => self.flex_basis = initial.flex_basis,
            "flex-grow" | "flexGrow" => self.flex_grow = initial.flex_grow,
            "flex-shrink" | "flexShrink" => self.flex_shrink = initial.flex_shrink,
            "flex-direction" | "flexDirection" => self.flex_direction = initial.flex_direction,
            "flex-wrap" | "flexWrap" => self.flex_wrap = initial.flex_wrap,
            "flex-flow" | "flexFlow" => {
                self.flex_direction = initial.flex_direction;
                self.flex_wrap = initial.flex_wrap;
            }
            "justify-content" | "justifyContent" => self.justify_content = initial.justify_content,
            "align-items" | "alignItems" => self.align_items = initial.align_items,
            "align-self" | "alignSelf" => self.align_self = initial.align_self,
            "align-content" | "alignContent" => self.align_content = initial.align_content,
            "order" => self.order = initial.order,
            _ => {}
        }
    }

    /// Restore every property to its initial value.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Whether the main axis is the horizontal axis
    /// (`row` or `row-reverse`).
    #[must_use]
    pub const fn is_main_axis_horizontal(&self) -> bool {
        self.flex_direction.is_horizontal()
    }

    /// Whether items flow against the axis direction
    /// (`row-reverse` or `column-reverse`).
    #[must_use]
    pub const fn is_main_axis_reverse(&self) -> bool {
        self.flex_direction.is_reverse()
    }

    /// [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
    fn set_padding_shorthand(&mut self, value: &str) {
        if let Some([top, right, bottom, left]) = expand_sides(value) {
            apply_length(&mut self.padding_top, top);
            apply_length(&mut self.padding_right, right);
            apply_length(&mut self.padding_bottom, bottom);
            apply_length(&mut self.padding_left, left);
        }
    }

    /// [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
    fn set_margin_shorthand(&mut self, value: &str) {
        if let Some([top, right, bottom, left]) = expand_sides(value) {
            apply_length(&mut self.margin_top, top);
            apply_length(&mut self.margin_right, right);
            apply_length(&mut self.margin_bottom, bottom);
            apply_length(&mut self.margin_left, left);
        }
    }

    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#the-border-width)
    fn set_border_shorthand(&mut self, value: &str) {
        if let Some([top, right, bottom, left]) = expand_sides(value) {
            apply_border(&mut self.border_top, top);
            apply_border(&mut self.border_right, right);
            apply_border(&mut self.border_bottom, bottom);
            apply_border(&mut self.border_left, left);
        }
    }

    /// [§ 7.1 'flex'](https://www.w3.org/TR/css-flexbox-1/#flex-property)
    ///
    /// `flex: auto` is `1 1 auto`; `flex: none` is `0 0 auto`;
    /// `flex: <number>` is `<number> 1 0`.
    fn set_flex_shorthand(&mut self, value: &str) {
        match value {
            "auto" => {
                self.flex_basis = Length::Auto;
                self.flex_grow = 1.0;
                self.flex_shrink = 1.0;
            }
            "none" => {
                self.flex_basis = Length::Auto;
                self.flex_grow = 0.0;
                self.flex_shrink = 0.0;
            }
            _ => {
                if let Ok(grow) = value.parse::<f32>() {
                    self.flex_basis = Length::Fixed(0.0);
                    self.flex_grow = grow;
                    self.flex_shrink = 1.0;
                }
            }
        }
    }

    /// [§ 5.3 'flex-flow'](https://www.w3.org/TR/css-flexbox-1/#flex-flow-property)
    ///
    /// "The flex-flow property is a shorthand for setting the
    /// flex-direction and flex-wrap properties."
    fn set_flex_flow_shorthand(&mut self, value: &str) {
        let mut tokens = value.split_whitespace();
        if let Some(parsed) = tokens.next().and_then(FlexDirection::parse) {
            self.flex_direction = parsed;
        }
        if let Some(parsed) = tokens.next().and_then(FlexWrap::parse) {
            self.flex_wrap = parsed;
        }
    }
}
