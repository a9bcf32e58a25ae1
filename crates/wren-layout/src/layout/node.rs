//! The layout tree: arena-allocated nodes, box metrics, and the
//! measure/alignment entry points.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow
//! checker issues. Children are owned exclusively by their parent;
//! inserting a node elsewhere unlinks it first, so the structure stays
//! acyclic by construction.

use crate::layout::algorithm::LayoutAlgorithm;
use crate::layout::box_model::{Edges, LayoutMode, Size};
use crate::style::Style;
use crate::style::keywords::Display;

/// Upper bound substituted for `max-width`/`max-height: auto` when
/// resolving box metrics. Large enough to never clamp a real layout.
pub(crate) const MAX_RESOLVED_SIZE: f32 = 1.0e7;

/// A type-safe index into the layout tree.
///
/// `NodeId` provides O(1) access to any node in the tree without
/// borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Box metrics resolved against the containing block during measurement.
///
/// [§ 6.1 Used Values](https://www.w3.org/TR/css-cascade-4/#used)
///
/// Percentages in padding and margin resolve against the containing
/// block's **width** on all four sides, per
/// [§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties) as
/// inherited by flex layout; min/max sizes resolve against the matching
/// axis. Auto margins resolve to zero here; their keyword identity stays
/// in the style and is consulted during alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutInfo {
    /// Resolved minimum width in pixels.
    pub min_width: f32,
    /// Resolved minimum height in pixels.
    pub min_height: f32,
    /// Resolved maximum width in pixels ([`MAX_RESOLVED_SIZE`] for auto).
    pub max_width: f32,
    /// Resolved maximum height in pixels ([`MAX_RESOLVED_SIZE`] for auto).
    pub max_height: f32,
    /// Resolved padding, all four sides.
    pub padding: Edges,
    /// Resolved margin, all four sides (auto as zero).
    pub margin: Edges,
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            max_width: MAX_RESOLVED_SIZE,
            max_height: MAX_RESOLVED_SIZE,
            padding: Edges::default(),
            margin: Edges::default(),
        }
    }
}

/// One node of the layout tree.
///
/// Owns its style and resolved box metrics, caches the container's layout
/// algorithm between measure passes, and carries the four layout outputs.
#[derive(Debug)]
struct LayoutNode {
    style: Style,
    layout_info: LayoutInfo,

    parent: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
    children: Vec<NodeId>,

    dirty: bool,
    algorithm: Option<LayoutAlgorithm>,

    // Layout results: offsets are measured from the containing block's
    // padding edge, sizes are border-box.
    offset_top: f32,
    offset_left: f32,
    offset_width: f32,
    offset_height: f32,
}

impl LayoutNode {
    fn new() -> Self {
        Self {
            style: Style::default(),
            layout_info: LayoutInfo::default(),
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            children: Vec::new(),
            dirty: false,
            algorithm: None,
            offset_top: 0.0,
            offset_left: 0.0,
            offset_width: 0.0,
            offset_height: 0.0,
        }
    }
}

/// Arena-based layout tree with O(1) node access and traversal.
///
/// All nodes live in a contiguous vector and refer to each other through
/// [`NodeId`] indices. Removing a node from its parent detaches it; the
/// slot stays allocated for the lifetime of the tree.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a new detached node with default style.
    pub fn new_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode::new());
        id
    }

    /// The number of nodes ever allocated (attached or detached).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tree has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.0]
    }

    // ===== styles =====

    /// The node's style bundle.
    #[must_use]
    pub fn style(&self, id: NodeId) -> &Style {
        &self.node(id).style
    }

    /// Apply a style property by name (see [`Style::set`]) and mark the
    /// node dirty.
    pub fn set_style(&mut self, id: NodeId, name: &str, value: &str) {
        self.node_mut(id).style.set(name, value);
        self.mark_dirty(id);
    }

    /// Restore a style property to its initial value (see
    /// [`Style::reset`]) and mark the node dirty.
    pub fn reset_style(&mut self, id: NodeId, name: &str) {
        self.node_mut(id).style.reset(name);
        self.mark_dirty(id);
    }

    /// Restore every style property to its initial value and mark the
    /// node dirty.
    pub fn reset_all_styles(&mut self, id: NodeId) {
        self.node_mut(id).style.reset_all();
        self.mark_dirty(id);
    }

    // ===== tree structure =====

    /// The node's parent, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The sibling immediately before this node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// The sibling immediately after this node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// The node's first child.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.first().copied()
    }

    /// The node's last child.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// The number of children.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// All children in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children.as_slice()
    }

    /// The child at `index`, if any.
    #[must_use]
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// The position of `child` among `parent`'s children, if present.
    #[must_use]
    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.node(parent)
            .children
            .iter()
            .position(|&candidate| candidate == child)
    }

    /// Detach a node from its current parent, if any, fixing sibling
    /// links. The node keeps its children.
    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.node(child).parent else {
            return;
        };
        let prev = self.node(child).prev_sibling;
        let next = self.node(child).next_sibling;
        if let Some(prev_id) = prev {
            self.node_mut(prev_id).next_sibling = next;
        }
        if let Some(next_id) = next {
            self.node_mut(next_id).prev_sibling = prev;
        }
        if let Some(position) = self.index_of(parent, child) {
            let _ = self.node_mut(parent).children.remove(position);
        }
        let node = self.node_mut(child);
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// The child is unlinked from any previous parent first. Marks the
    /// parent's subtree dirty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let prev_last = self.node(parent).children.last().copied();
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        if let Some(prev_id) = prev_last {
            self.node_mut(prev_id).next_sibling = Some(child);
            self.node_mut(child).prev_sibling = Some(prev_id);
        }
        self.mark_dirty(parent);
    }

    /// Insert `child` immediately before `reference` among `parent`'s
    /// children. Falls back to appending when `reference` is not a child
    /// of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        if child == reference {
            return;
        }
        let Some(position) = self.index_of(parent, reference) else {
            self.append_child(parent, child);
            return;
        };
        self.detach(child);
        // Recompute: detaching the child may have shifted the reference
        // when both share a parent.
        let position = self.index_of(parent, reference).unwrap_or(position);
        self.node_mut(parent).children.insert(position, child);
        self.node_mut(child).parent = Some(parent);
        let prev = self.node(reference).prev_sibling;
        self.node_mut(child).prev_sibling = prev;
        self.node_mut(child).next_sibling = Some(reference);
        if let Some(prev_id) = prev {
            self.node_mut(prev_id).next_sibling = Some(child);
        }
        self.node_mut(reference).prev_sibling = Some(child);
        self.mark_dirty(parent);
    }

    /// Insert `child` at `index` among `parent`'s children, appending
    /// when the index is past the end.
    pub fn insert_at(&mut self, parent: NodeId, child: NodeId, index: usize) {
        match self.child_at(parent, index) {
            Some(reference) if reference != child => self.insert_before(parent, child, reference),
            _ => self.append_child(parent, child),
        }
    }

    /// Remove `child` from `parent`. A no-op when `child` is not a child
    /// of `parent`. Marks the parent's subtree dirty.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(child).parent != Some(parent) {
            return;
        }
        self.detach(child);
        self.mark_dirty(parent);
    }

    /// Remove and return the child at `index`, if any.
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> Option<NodeId> {
        let child = self.child_at(parent, index)?;
        self.remove_child(parent, child);
        Some(child)
    }

    // ===== dirty tracking =====

    /// Mark a node and all its ancestors dirty.
    ///
    /// The engine recomputes unconditionally on [`LayoutTree::measure`];
    /// the flag exists for embedders that schedule relayouts.
    pub fn mark_dirty(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node_mut(node_id);
            if node.dirty {
                break;
            }
            node.dirty = true;
            current = node.parent;
        }
    }

    /// Whether the node has been touched since the flag was last cleared
    /// by the embedder.
    #[must_use]
    pub fn is_dirty(&self, id: NodeId) -> bool {
        self.node(id).dirty
    }

    // ===== layout outputs =====

    /// Offset of the node's border box from its containing block's
    /// padding edge, top side.
    #[must_use]
    pub fn offset_top(&self, id: NodeId) -> f32 {
        self.node(id).offset_top
    }

    /// Offset of the node's border box from its containing block's
    /// padding edge, left side.
    #[must_use]
    pub fn offset_left(&self, id: NodeId) -> f32 {
        self.node(id).offset_left
    }

    /// Border-box width produced by the last measure pass.
    #[must_use]
    pub fn offset_width(&self, id: NodeId) -> f32 {
        self.node(id).offset_width
    }

    /// Border-box height produced by the last measure pass.
    #[must_use]
    pub fn offset_height(&self, id: NodeId) -> f32 {
        self.node(id).offset_height
    }

    pub(crate) fn set_offset_top(&mut self, id: NodeId, value: f32) {
        self.node_mut(id).offset_top = value;
    }

    pub(crate) fn set_offset_left(&mut self, id: NodeId, value: f32) {
        self.node_mut(id).offset_left = value;
    }

    pub(crate) fn set_offset_width(&mut self, id: NodeId, value: f32) {
        self.node_mut(id).offset_width = value;
    }

    pub(crate) fn set_offset_height(&mut self, id: NodeId, value: f32) {
        self.node_mut(id).offset_height = value;
    }

    // ===== box metrics =====

    /// The node's box metrics as resolved by the last
    /// [`LayoutTree::update_layout_info`].
    #[must_use]
    pub fn layout_info(&self, id: NodeId) -> &LayoutInfo {
        &self.node(id).layout_info
    }

    pub(crate) fn layout_info_mut(&mut self, id: NodeId) -> &mut LayoutInfo {
        &mut self.node_mut(id).layout_info
    }

    /// Resolve the node's min/max sizes, padding, and margin against its
    /// containing block.
    ///
    /// Padding and margin percentages resolve against `parent_width` on
    /// all four sides; min/max resolve against the matching axis;
    /// `max-*: auto` becomes a large sentinel bound.
    pub fn update_layout_info(&mut self, id: NodeId, parent_width: f32, parent_height: f32) {
        let node = self.node_mut(id);
        node.layout_info.min_width = node.style.min_width.resolve(parent_width);
        node.layout_info.min_height = node.style.min_height.resolve(parent_height);
        node.layout_info.max_width = if node.style.max_width.is_auto() {
            MAX_RESOLVED_SIZE
        } else {
            node.style.max_width.resolve(parent_width)
        };
        node.layout_info.max_height = if node.style.max_height.is_auto() {
            MAX_RESOLVED_SIZE
        } else {
            node.style.max_height.resolve(parent_height)
        };

        node.layout_info.padding = Edges {
            top: node.style.padding_top.resolve(parent_width),
            right: node.style.padding_right.resolve(parent_width),
            bottom: node.style.padding_bottom.resolve(parent_width),
            left: node.style.padding_left.resolve(parent_width),
        };
        node.layout_info.margin = Edges {
            top: node.style.margin_top.resolve(parent_width),
            right: node.style.margin_right.resolve(parent_width),
            bottom: node.style.margin_bottom.resolve(parent_width),
            left: node.style.margin_left.resolve(parent_width),
        };
    }

    /// Clamp a candidate width by the resolved max, then min, then the
    /// border-box floor (padding plus border), which wins on conflict.
    #[must_use]
    pub fn apply_width_constraints(&self, id: NodeId, width: f32) -> f32 {
        let node = self.node(id);
        let info = &node.layout_info;
        let clamped = width.min(info.max_width).max(info.min_width);
        let min_border_box_width =
            info.padding.left + info.padding.right + node.style.border_left + node.style.border_right;
        clamped.max(min_border_box_width)
    }

    /// Clamp a candidate height by the resolved max, then min, then the
    /// border-box floor (padding plus border), which wins on conflict.
    #[must_use]
    pub fn apply_height_constraints(&self, id: NodeId, height: f32) -> f32 {
        let node = self.node(id);
        let info = &node.layout_info;
        let clamped = height.min(info.max_height).max(info.min_height);
        let min_border_box_height =
            info.padding.top + info.padding.bottom + node.style.border_top + node.style.border_bottom;
        clamped.max(min_border_box_height)
    }

    // ===== layout =====

    /// Measure a subtree.
    ///
    /// Dispatches on the node's display: flex containers obtain (or
    /// reuse) their layout algorithm and run the flex measure pipeline;
    /// `display: none` zeroes the whole subtree; `display: grid` is
    /// reserved and reports the previous outputs unchanged. Returns the
    /// node's border-box size.
    pub fn measure(
        &mut self,
        id: NodeId,
        width: f32,
        height: f32,
        width_mode: LayoutMode,
        height_mode: LayoutMode,
    ) -> Size {
        match self.node(id).style.display {
            Display::Flex => {
                let mut algorithm = match self.node_mut(id).algorithm.take() {
                    Some(mut algorithm) => {
                        algorithm.update(self, id, width, height, width_mode, height_mode);
                        algorithm
                    }
                    None => {
                        let mut algorithm = LayoutAlgorithm::new_flex();
                        algorithm.initialize(self, id, width, height, width_mode, height_mode);
                        algorithm
                    }
                };
                algorithm.measure(self, id);
                self.node_mut(id).algorithm = Some(algorithm);
            }
            Display::Grid => {
                // Reserved display type: report previous outputs.
            }
            Display::None => self.measure_with_display_none(id),
        }
        Size {
            width: self.node(id).offset_width,
            height: self.node(id).offset_height,
        }
    }

    /// Zero the outputs of a node and every descendant and drop any
    /// cached algorithm.
    ///
    /// [§ 2.6 display: none](https://www.w3.org/TR/css-display-3/#valdef-display-none)
    /// "The element and its descendants generate no boxes."
    pub(crate) fn measure_with_display_none(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.algorithm = None;
        node.offset_top = 0.0;
        node.offset_left = 0.0;
        node.offset_width = 0.0;
        node.offset_height = 0.0;

        let mut child = self.first_child(id);
        while let Some(child_id) = child {
            self.measure_with_display_none(child_id);
            child = self.next_sibling(child_id);
        }
    }

    /// Position a measured subtree in pre-order.
    ///
    /// Subtrees without a cached algorithm (display-none, never measured)
    /// are skipped entirely.
    pub fn alignment(&mut self, id: NodeId) {
        if let Some(mut algorithm) = self.node_mut(id).algorithm.take() {
            algorithm.alignment(self, id);
            self.node_mut(id).algorithm = Some(algorithm);

            let mut child = self.first_child(id);
            while let Some(child_id) = child {
                self.alignment(child_id);
                child = self.next_sibling(child_id);
            }
        }
    }

    /// Lay out the subtree rooted at `id` inside the box
    /// `(left, top, right, bottom)`: measure with definite sizes, then
    /// align. Results are read back through the `offset_*` accessors.
    ///
    /// The root has no parent to resolve its box metrics, so the driver
    /// resolves them against the given box before measuring.
    pub fn relayout(&mut self, id: NodeId, left: f32, top: f32, right: f32, bottom: f32) {
        let width = right - left;
        let height = bottom - top;
        self.update_layout_info(id, width, height);
        let _ = self.measure(id, width, height, LayoutMode::Exact, LayoutMode::Exact);
        self.alignment(id);
    }
}
