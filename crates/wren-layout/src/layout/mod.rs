//! Layout tree and measurement pipeline.
//!
//! This module implements the two-pass layout protocol: a recursive
//! **measure** pass that negotiates sizes down the tree, then an
//! **alignment** pass that positions every subtree in pre-order.
//!
//! # Relevant Specifications
//!
//! - [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//!
//! # Module Structure
//!
//! - [`box_model`] - sides, edge sizes, measure results, layout modes
//! - [`node`] - the arena tree, per-node box metrics, measure dispatch
//! - `algorithm` - the per-container layout algorithm cache
//! - `flex` - the flex layout pipeline

/// The per-container layout algorithm cache.
mod algorithm;
pub mod box_model;
/// The flex layout pipeline.
mod flex;
pub mod node;

// Re-exports for convenience
pub use box_model::{Edges, LayoutMode, Side, Size};
pub use node::{LayoutInfo, LayoutTree, NodeId};
