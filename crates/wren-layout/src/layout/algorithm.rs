//! Per-container layout algorithm cache.

use crate::layout::box_model::LayoutMode;
use crate::layout::flex::FlexAlgorithm;
use crate::layout::node::{LayoutTree, NodeId};

/// The layout algorithm cached on a container between measure passes.
///
/// A closed set selected by the container's display type: flex today,
/// grid reserved. The cached value lives as long as the node; a
/// transition to `display: none` clears it, and the next flex measure
/// rebuilds it from scratch (`initialize`), while repeated measures of a
/// live container reuse it (`update`).
#[derive(Debug)]
pub(crate) enum LayoutAlgorithm {
    /// The flex pipeline and its scratch state.
    Flex(FlexAlgorithm),
}

impl LayoutAlgorithm {
    /// A fresh flex algorithm awaiting `initialize`.
    pub(crate) fn new_flex() -> Self {
        Self::Flex(FlexAlgorithm::new())
    }

    /// First-time setup: classify children and resolve sizes and modes.
    pub(crate) fn initialize(
        &mut self,
        tree: &mut LayoutTree,
        container: NodeId,
        width: f32,
        height: f32,
        width_mode: LayoutMode,
        height_mode: LayoutMode,
    ) {
        match self {
            Self::Flex(flex) => flex.initialize(tree, container, width, height, width_mode, height_mode),
        }
    }

    /// Re-resolve sizes and modes for a container measured before.
    pub(crate) fn update(
        &mut self,
        tree: &mut LayoutTree,
        container: NodeId,
        width: f32,
        height: f32,
        width_mode: LayoutMode,
        height_mode: LayoutMode,
    ) {
        match self {
            Self::Flex(flex) => flex.update(tree, container, width, height, width_mode, height_mode),
        }
    }

    /// Run the measure pipeline, producing the container's border box and
    /// every item's used sizes.
    pub(crate) fn measure(&mut self, tree: &mut LayoutTree, container: NodeId) {
        match self {
            Self::Flex(flex) => flex.measure(tree, container),
        }
    }

    /// Run the alignment pass, producing every item's offsets.
    pub(crate) fn alignment(&mut self, tree: &mut LayoutTree, container: NodeId) {
        match self {
            Self::Flex(flex) => flex.alignment(tree, container),
        }
    }
}
