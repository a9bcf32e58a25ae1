//! Keyword-valued properties for display, position, and flex layout.
//!
//! [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)

use serde::Serialize;

/// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// The display types the engine understands. `Grid` is accepted by the
/// parser but measures as a no-op until a grid algorithm exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// [§ 2.1](https://www.w3.org/TR/css-flexbox-1/#flex-containers)
    /// "The element generates a flex container box."
    Flex,
    /// Reserved: grid containers are recognised but not laid out.
    Grid,
    /// [§ 2.6 display: none](https://www.w3.org/TR/css-display-3/#valdef-display-none)
    /// "The element and its descendants generate no boxes."
    None,
}

impl Display {
    /// Parse a display keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "flex" => Some(Self::Flex),
            "grid" => Some(Self::Grid),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// [§ 3.1 'position'](https://www.w3.org/TR/css-position-3/#position-property)
///
/// Only relatively positioned children participate in flex layout;
/// absolute and fixed children are collected aside by the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// In-flow; participates in flex layout.
    Relative,
    /// Out-of-flow; skipped by the flex algorithm.
    Absolute,
    /// Out-of-flow; skipped by the flex algorithm.
    Fixed,
}

impl Position {
    /// Parse a position keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "relative" => Some(Self::Relative),
            "absolute" => Some(Self::Absolute),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// [§ 5.1 'flex-direction'](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
///
/// "The flex-direction property specifies how flex items are placed in
/// the flex container, by setting the direction of the flex container's
/// main axis."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Main axis runs left to right.
    Row,
    /// Main axis runs right to left.
    RowReverse,
    /// Main axis runs top to bottom.
    Column,
    /// Main axis runs bottom to top.
    ColumnReverse,
}

impl FlexDirection {
    /// Parse a flex-direction keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "row" => Some(Self::Row),
            "row-reverse" => Some(Self::RowReverse),
            "column" => Some(Self::Column),
            "column-reverse" => Some(Self::ColumnReverse),
            _ => None,
        }
    }

    /// Whether the main axis is the horizontal axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether items flow against the axis direction.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// [§ 5.2 'flex-wrap'](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
///
/// "The flex-wrap property controls whether the flex container is
/// single-line or multi-line, and the direction of the cross-axis."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    /// Single line; items never wrap.
    NoWrap,
    /// Multi-line; new lines stack in the cross direction.
    Wrap,
    /// Multi-line with the cross direction flipped.
    WrapReverse,
}

impl FlexWrap {
    /// Parse a flex-wrap keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "nowrap" => Some(Self::NoWrap),
            "wrap" => Some(Self::Wrap),
            "wrap-reverse" => Some(Self::WrapReverse),
            _ => None,
        }
    }
}

/// [§ 8.2 'justify-content'](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
///
/// "The justify-content property aligns flex items along the main axis
/// of the current line of the flex container."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Items pack toward the start of the line.
    FlexStart,
    /// Items pack toward the end of the line.
    FlexEnd,
    /// Items pack toward the center of the line.
    Center,
    /// Free space distributes between adjacent items.
    SpaceBetween,
    /// Free space distributes around items, half-size at the ends.
    SpaceAround,
}

impl JustifyContent {
    /// Parse a justify-content keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "flex-start" => Some(Self::FlexStart),
            "flex-end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            _ => None,
        }
    }
}

/// [§ 8.3 'align-items'](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
///
/// "align-items sets the default alignment for all of the flex
/// container's items" along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    /// Items align to the cross start of their line.
    FlexStart,
    /// Items center within their line.
    Center,
    /// Items align to the cross end of their line.
    FlexEnd,
    /// Auto-sized items fill the line's cross size.
    Stretch,
}

impl AlignItems {
    /// Parse an align-items keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "flex-start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" => Some(Self::FlexEnd),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }
}

/// [§ 8.3 'align-self'](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
///
/// "align-self allows this default alignment to be overridden for
/// individual flex items."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSelf {
    /// Inherit the container's align-items value.
    Auto,
    /// Override to flex-start.
    FlexStart,
    /// Override to center.
    Center,
    /// Override to flex-end.
    FlexEnd,
    /// Override to stretch.
    Stretch,
}

impl AlignSelf {
    /// Parse an align-self keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Self::Auto),
            "flex-start" => Some(Self::FlexStart),
            "center" => Some(Self::Center),
            "flex-end" => Some(Self::FlexEnd),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }

    /// "A value of auto computes to the value of align-items on the
    /// element's parent."
    #[must_use]
    pub const fn resolve(self, container_align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => container_align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::Center => AlignItems::Center,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

/// [§ 8.4 'align-content'](https://www.w3.org/TR/css-flexbox-1/#align-content-property)
///
/// "The align-content property aligns a flex container's lines within
/// the flex container when there is extra space in the cross-axis."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    /// Lines pack toward the cross start.
    FlexStart,
    /// Lines pack toward the cross end.
    FlexEnd,
    /// Lines pack toward the center.
    Center,
    /// Free space distributes between adjacent lines.
    SpaceBetween,
    /// Free space distributes around lines, half-size at the ends.
    SpaceAround,
    /// Lines grow equally to fill the cross size.
    Stretch,
}

impl AlignContent {
    /// Parse an align-content keyword; unknown keywords yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "flex-start" => Some(Self::FlexStart),
            "flex-end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }
}
