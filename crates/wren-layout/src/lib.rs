//! Flexbox layout engine for trees of styled rectangles.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style values** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Tagged lengths (`px`, `%`, `auto`) with reference-relative resolution
//!   - Keyword types for display, position, and the flex properties
//!   - A string-keyed property mutator with shorthand expansion
//!     (`padding`, `margin`, `border-width`, `flex`, `flex-flow`)
//!
//! - **Layout tree** ([CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Arena-allocated nodes with parent/sibling/child links
//!   - Per-node resolved box metrics (min/max, padding, margin)
//!   - Dirty marking propagated to ancestors on any mutation
//!
//! - **Flex layout** ([CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/))
//!   - Flex base and hypothetical main sizes (§ 9.2)
//!   - Line collection for single- and multi-line containers (§ 9.3)
//!   - The full flexible-length freeze loop (§ 9.7)
//!   - Cross sizing, `align-content: stretch` expansion (§ 9.4, § 9.6)
//!   - Main- and cross-axis alignment, `wrap-reverse` mirroring (§ 9.6)
//!
//! # Not Yet Implemented
//!
//! - Grid layout (`display: grid` is accepted and measures as a no-op)
//! - Absolute and fixed positioning (such children are collected but not
//!   laid out)
//! - Baseline alignment and `gap`
//!
//! # Entry point
//!
//! Build a [`LayoutTree`], attach nodes, assign styles through
//! [`LayoutTree::set_style`], then call [`LayoutTree::relayout`] on the root.
//! Every node then exposes its border-box result through the four
//! `offset_*` accessors.

/// Node tree, box metrics, and the layout pipeline per
/// [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/).
pub mod layout;
/// Style values and the property mutator per
/// [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod style;

// Re-exports for convenience
pub use layout::box_model::{Edges, LayoutMode, Side, Size};
pub use layout::node::{LayoutInfo, LayoutTree, NodeId};
pub use style::keywords::{
    AlignContent, AlignItems, AlignSelf, Display, FlexDirection, FlexWrap, JustifyContent,
    Position,
};
pub use style::length::Length;
pub use style::Style;
