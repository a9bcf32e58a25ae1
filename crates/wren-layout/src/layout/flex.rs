//! CSS Flexbox layout algorithm.
//!
//! [§ 9 Flex Layout Algorithm](https://www.w3.org/TR/css-flexbox-1/#layout-algorithm)
//!
//! The pipeline runs in two passes driven by the node tree:
//!
//! - **Measure**: flex base sizes (§ 9.2), container main size (§ 9.3),
//!   line collection (§ 9.3 step 5), the flexible-length freeze loop
//!   (§ 9.7), hypothetical and used cross sizes (§ 9.4), `align-content:
//!   stretch` line expansion (§ 9.6 step 15), container cross size, and
//!   finally the container's own border box.
//! - **Alignment**: `justify-content` with auto main-axis margins along
//!   the main axis (§ 9.5), then `align-content`, auto cross margins, and
//!   `align-items`/`align-self` across lines (§ 9.6), including the
//!   `wrap-reverse` cross-axis mirror.
//!
//! Children re-measure recursively wherever the algorithm needs a
//! content-driven size: auto flex bases, hypothetical cross sizes, and
//! stretched items.

use crate::layout::box_model::{LayoutMode, Side};
use crate::layout::node::{LayoutTree, NodeId};
use crate::style::keywords::{
    AlignContent, AlignItems, Display, FlexWrap, JustifyContent, Position,
};
use crate::style::length::Length;

/// Per-item bookkeeping collected while measuring a flex container.
///
/// [§ 9.2 Line Length Determination](https://www.w3.org/TR/css-flexbox-1/#algo-main-item)
#[derive(Debug, Clone, Copy)]
pub(crate) struct ItemInfo {
    /// The item node.
    node: NodeId,
    /// [§ 9.2 step 3](https://www.w3.org/TR/css-flexbox-1/#algo-main-item)
    /// The flex base size.
    flex_base_size: f32,
    /// The flex base size clamped by the item's min/max main sizes.
    hypothetical_main_size: f32,
    /// The target main size resolved by § 9.7.
    used_main_size: f32,
    /// Whether the item is frozen during the § 9.7 loop.
    frozen: bool,
    /// Cross size reported by the item when measured at its used main
    /// size (§ 9.4 step 7).
    hypothetical_cross_size: f32,
    /// Final cross size after stretch resolution (§ 9.4 step 11).
    /// Alignment reads the re-measured offsets instead; the record stays
    /// for debug dumps.
    #[allow(dead_code)]
    used_cross_size: f32,
}

impl ItemInfo {
    fn new(node: NodeId) -> Self {
        Self {
            node,
            flex_base_size: 0.0,
            hypothetical_main_size: 0.0,
            used_main_size: 0.0,
            frozen: false,
            hypothetical_cross_size: 0.0,
            used_cross_size: 0.0,
        }
    }
}

/// Data for a single flex line, used to resolve flexible lengths on the
/// main axis.
///
/// [§ 9.3 Main Size Determination](https://www.w3.org/TR/css-flexbox-1/#algo-main-container)
// Some sums are consumed only while the line is being built; they stay
// on the record for debug dumps.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
struct FlexLine {
    /// First item index (into the container's item list).
    start: usize,
    /// One past the last item index.
    end: usize,
    /// Sum of outer flex base sizes (base plus main-axis margins).
    sum_flex_base_size: f32,
    /// Sum of unfrozen flex-grow factors.
    total_flex_grow: f32,
    /// Sum of unfrozen flex-shrink factors.
    total_flex_shrink: f32,
    /// Sum of `flex-shrink * flex_base_size` over unfrozen items.
    total_weighted_flex_shrink: f32,
    /// Sum of outer hypothetical main sizes.
    sum_hypothetical_main_size: f32,
    /// Free space left on the line, updated as items freeze.
    remaining_free_space: f32,
    /// Free space snapshot after inflexible items froze (§ 9.7 step 3).
    initial_free_space: f32,
    /// Whether the line grows (true) or shrinks (false), per § 9.7 step 1.
    should_apply_grow: bool,
    /// The line's cross size (§ 9.4 step 8).
    line_cross_size: f32,
}

/// The flex pipeline and its scratch state for one container.
///
/// Scratch vectors (`items`, `absolute_items`, `lines`) live as long as
/// the algorithm and refill across repeated measures of the same
/// container. Item classification happens once, on `initialize`; the
/// `update` path only re-resolves sizes and modes.
#[derive(Debug)]
pub(crate) struct FlexAlgorithm {
    main_available_size: f32,
    cross_available_size: f32,
    main_axis_mode: LayoutMode,
    cross_axis_mode: LayoutMode,

    main_axis_horizontal: bool,
    main_axis_front: Side,
    main_axis_after: Side,
    cross_axis_front: Side,
    cross_axis_after: Side,

    items: Vec<ItemInfo>,
    /// Absolutely positioned children: collected during classification,
    /// not laid out by this pipeline.
    absolute_items: Vec<NodeId>,
    lines: Vec<FlexLine>,
}

impl FlexAlgorithm {
    pub(crate) fn new() -> Self {
        Self {
            main_available_size: 0.0,
            cross_available_size: 0.0,
            main_axis_mode: LayoutMode::Exact,
            cross_axis_mode: LayoutMode::Exact,
            main_axis_horizontal: false,
            main_axis_front: Side::Top,
            main_axis_after: Side::Bottom,
            cross_axis_front: Side::Left,
            cross_axis_after: Side::Right,
            items: Vec::new(),
            absolute_items: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// First-time setup for a container.
    ///
    /// [§ 4 Flex Items](https://www.w3.org/TR/css-flexbox-1/#flex-items)
    ///
    /// Resolves the axes, classifies every direct child (in-flow item,
    /// absolutely positioned, or display-none), applies the `order`
    /// sort, and resolves the container's sizes and modes.
    pub(crate) fn initialize(
        &mut self,
        tree: &mut LayoutTree,
        container: NodeId,
        width: f32,
        height: f32,
        width_mode: LayoutMode,
        height_mode: LayoutMode,
    ) {
        self.solve_direction(tree, container);

        // Traverse children to classify them.
        //
        // [§ 4.1 Absolutely-Positioned Flex Children](https://www.w3.org/TR/css-flexbox-1/#abspos-items)
        // "An absolutely-positioned child of a flex container does not
        // participate in flex layout."
        let mut need_order = false;
        let mut child = tree.first_child(container);
        while let Some(child_id) = child {
            if tree.style(child_id).display == Display::None {
                tree.measure_with_display_none(child_id);
            } else if tree.style(child_id).position == Position::Relative {
                if tree.style(child_id).order != 0 {
                    need_order = true;
                }
                self.items.push(ItemInfo::new(child_id));
            } else {
                self.absolute_items.push(child_id);
            }
            child = tree.next_sibling(child_id);
        }

        // [§ 5.4 'order'](https://www.w3.org/TR/css-flexbox-1/#order-property)
        //
        // The sort must be stable so that items with equal order keep
        // document order.
        if need_order {
            self.items.sort_by_key(|item| tree.style(item.node).order);
        }

        self.resolve_size_and_mode(tree, container, width, height, width_mode, height_mode);
    }

    /// Re-resolve the container's sizes and modes, keeping the item
    /// classification from `initialize`.
    pub(crate) fn update(
        &mut self,
        tree: &mut LayoutTree,
        container: NodeId,
        width: f32,
        height: f32,
        width_mode: LayoutMode,
        height_mode: LayoutMode,
    ) {
        self.resolve_size_and_mode(tree, container, width, height, width_mode, height_mode);
    }

    /// Bind the axis vocabulary to physical sides.
    ///
    /// [§ 2 Flex Layout Box Model](https://www.w3.org/TR/css-flexbox-1/#box-model)
    fn solve_direction(&mut self, tree: &LayoutTree, container: NodeId) {
        self.main_axis_horizontal = tree.style(container).is_main_axis_horizontal();
        if self.main_axis_horizontal {
            self.main_axis_front = Side::Left;
            self.main_axis_after = Side::Right;
            self.cross_axis_front = Side::Top;
            self.cross_axis_after = Side::Bottom;
        } else {
            self.main_axis_front = Side::Top;
            self.main_axis_after = Side::Bottom;
            self.cross_axis_front = Side::Left;
            self.cross_axis_after = Side::Right;
        }
    }

    /// Resolve the container's available content box and per-axis modes.
    ///
    /// [§ 9.2 step 2](https://www.w3.org/TR/css-flexbox-1/#algo-available)
    ///
    /// An axis with a supplied size (`Exact` or `AtMost`) is clamped by
    /// the container's own min/max and reduced by padding and border; an
    /// `Undefined` axis passes through untouched and is determined by
    /// content later. Item box metrics are then refreshed against the
    /// new content box.
    fn resolve_size_and_mode(
        &mut self,
        tree: &mut LayoutTree,
        container: NodeId,
        width: f32,
        height: f32,
        width_mode: LayoutMode,
        height_mode: LayoutMode,
    ) {
        let mut content_width = width;
        let mut content_height = height;
        if width_mode != LayoutMode::Undefined {
            let constrained = tree.apply_width_constraints(container, width);
            let padding = tree.layout_info(container).padding;
            let style = tree.style(container);
            content_width =
                constrained - padding.left - padding.right - style.border_left - style.border_right;
        }
        if height_mode != LayoutMode::Undefined {
            let constrained = tree.apply_height_constraints(container, height);
            let padding = tree.layout_info(container).padding;
            let style = tree.style(container);
            content_height =
                constrained - padding.top - padding.bottom - style.border_top - style.border_bottom;
        }

        if self.main_axis_horizontal {
            self.main_available_size = content_width;
            self.cross_available_size = content_height;
            self.main_axis_mode = width_mode;
            self.cross_axis_mode = height_mode;
        } else {
            self.main_available_size = content_height;
            self.cross_available_size = content_width;
            self.main_axis_mode = height_mode;
            self.cross_axis_mode = width_mode;
        }

        for index in 0..self.items.len() {
            let node = self.items[index].node;
            tree.update_layout_info(node, content_width, content_height);
        }
    }

    /// Run the measure pipeline and store the container's border box.
    pub(crate) fn measure(&mut self, tree: &mut LayoutTree, container: NodeId) {
        self.calculate_flex_basis(tree, container);
        self.determine_container_main_size(tree);
        self.collect_into_flex_lines(tree, container);
        self.resolve_flex_lines(tree);

        self.determine_hypothetical_cross_size(tree);
        self.calculate_line_cross_size(tree, container);
        self.expand_line_cross_size_for_stretch(tree, container);
        self.determine_item_used_cross_size(tree, container);
        self.determine_container_used_cross_size(tree);

        // The offsets carry the border box: content plus padding plus
        // border on each axis.
        let (content_width, content_height) = if self.main_axis_horizontal {
            (self.main_available_size, self.cross_available_size)
        } else {
            (self.cross_available_size, self.main_available_size)
        };
        let info = tree.layout_info(container);
        let style = tree.style(container);
        let border_box_width = content_width
            + info.padding.left
            + info.padding.right
            + style.border_left
            + style.border_right;
        let border_box_height = content_height
            + info.padding.top
            + info.padding.bottom
            + style.border_top
            + style.border_bottom;

        tree.set_offset_width(container, border_box_width);
        tree.set_offset_height(container, border_box_height);
    }

    /// Position every item: main axis first, then cross axis.
    pub(crate) fn alignment(&mut self, tree: &mut LayoutTree, container: NodeId) {
        self.main_axis_alignment(tree, container);
        self.cross_axis_alignment(tree, container);
    }

    /// Determine each item's flex base and hypothetical main size.
    ///
    /// [§ 9.2 step 3](https://www.w3.org/TR/css-flexbox-1/#algo-main-item)
    ///
    /// "If the item has a definite used flex basis, that's the flex base
    /// size." A percentage basis against an indefinite main size, and an
    /// auto basis falling through to an auto main size, both require
    /// measuring the item's content.
    fn calculate_flex_basis(&mut self, tree: &mut LayoutTree, container: NodeId) {
        let container_align_items = tree.style(container).align_items;
        for index in 0..self.items.len() {
            let node = self.items[index].node;
            // Freeze state belongs to a single resolution pass; stale
            // flags from a previous measure must not leak into this one.
            self.items[index].frozen = false;

            let flex_basis = tree.style(node).flex_basis;
            let flex_base_size = match flex_basis {
                Length::Fixed(value) => value,
                Length::Percent(_) => {
                    if self.main_axis_mode == LayoutMode::Undefined {
                        0.0
                    } else {
                        flex_basis.resolve(self.main_available_size)
                    }
                }
                Length::Auto => {
                    let main_size_style = if self.main_axis_horizontal {
                        tree.style(node).width
                    } else {
                        tree.style(node).height
                    };
                    match main_size_style {
                        Length::Fixed(value) => value,
                        Length::Percent(_) => {
                            if self.main_axis_mode == LayoutMode::Undefined {
                                0.0
                            } else {
                                main_size_style.resolve(self.main_available_size)
                            }
                        }
                        Length::Auto => {
                            // Size by content: measure with no main-axis
                            // constraint. A stretched item gets the
                            // container's cross size as a definite hint.
                            let mut width = 0.0;
                            let mut height = 0.0;
                            let mut width_mode = LayoutMode::Undefined;
                            let mut height_mode = LayoutMode::Undefined;
                            let align = tree.style(node).align_self.resolve(container_align_items);
                            if align == AlignItems::Stretch {
                                if self.main_axis_horizontal {
                                    height = self.cross_available_size;
                                    height_mode = LayoutMode::Exact;
                                } else {
                                    width = self.cross_available_size;
                                    width_mode = LayoutMode::Exact;
                                }
                            }
                            let result = tree.measure(node, width, height, width_mode, height_mode);
                            if self.main_axis_horizontal {
                                result.width
                            } else {
                                result.height
                            }
                        }
                    }
                }
            };

            // [§ 9.2 step 3E](https://www.w3.org/TR/css-flexbox-1/#algo-main-item)
            //
            // "The hypothetical main size is the item's flex base size
            // clamped according to its used min and max main sizes."
            self.items[index].flex_base_size = flex_base_size;
            self.items[index].hypothetical_main_size = if self.main_axis_horizontal {
                tree.apply_width_constraints(node, flex_base_size)
            } else {
                tree.apply_height_constraints(node, flex_base_size)
            };
        }
    }

    /// Determine the container's main size when it is content-driven.
    ///
    /// [§ 9.3 step 4](https://www.w3.org/TR/css-flexbox-1/#algo-main-container)
    ///
    /// "For this computation, auto margins on flex items are treated as
    /// 0." Under `Undefined` the sum of outer hypothetical sizes is the
    /// main size; under `AtMost` it is a lower bound on the supplied one.
    fn determine_container_main_size(&mut self, tree: &mut LayoutTree) {
        if self.main_axis_mode == LayoutMode::Exact {
            return;
        }
        let mut main_size_sum = 0.0;
        for item in &self.items {
            let margin = tree.layout_info(item.node).margin;
            main_size_sum += item.hypothetical_main_size
                + margin.get(self.main_axis_front)
                + margin.get(self.main_axis_after);
        }
        if self.main_axis_mode == LayoutMode::Undefined {
            self.main_available_size = main_size_sum;
        } else if self.main_axis_mode == LayoutMode::AtMost {
            self.main_available_size = main_size_sum.max(self.main_available_size);
        }

        let (parent_width, parent_height) = if self.main_axis_horizontal {
            (self.main_available_size, self.cross_available_size)
        } else {
            (self.cross_available_size, self.main_available_size)
        };
        for index in 0..self.items.len() {
            let node = self.items[index].node;
            tree.update_layout_info(node, parent_width, parent_height);
        }
    }

    /// Partition items into flex lines.
    ///
    /// [§ 9.3 step 5](https://www.w3.org/TR/css-flexbox-1/#algo-line-break)
    fn collect_into_flex_lines(&mut self, tree: &LayoutTree, container: NodeId) {
        self.lines.clear();
        let mut next_index = 0;
        while self.collect_single_flex_line(tree, container, &mut next_index) {}
    }

    /// Collect one line starting at `next_index`; returns whether a line
    /// was produced.
    ///
    /// "If the flex container is single-line, collect all the flex items
    /// into a single flex line. Otherwise ... collect consecutive items
    /// one by one until the first time that the next collected item would
    /// not fit into the flex container's inner main size ... If the very
    /// first uncollected item wouldn't fit, collect just it into the
    /// line."
    fn collect_single_flex_line(
        &mut self,
        tree: &LayoutTree,
        container: NodeId,
        next_index: &mut usize,
    ) -> bool {
        let is_single_line = tree.style(container).flex_wrap == FlexWrap::NoWrap;
        let mut sum_flex_base_size = 0.0;
        let mut total_flex_grow = 0.0;
        let mut total_flex_shrink = 0.0;
        let mut total_weighted_flex_shrink = 0.0;
        let mut sum_hypothetical_main_size = 0.0;
        let mut line_has_item = false;

        let start_index = *next_index;

        while *next_index < self.items.len() {
            let item = self.items[*next_index];
            let margin = tree.layout_info(item.node).margin;
            let outer_margins = margin.get(self.main_axis_front) + margin.get(self.main_axis_after);
            let item_outer_hypothetical_main_size = item.hypothetical_main_size + outer_margins;
            if !is_single_line
                && line_has_item
                && sum_hypothetical_main_size + item_outer_hypothetical_main_size
                    > self.main_available_size
            {
                break;
            }
            line_has_item = true;
            let style = tree.style(item.node);
            sum_flex_base_size += item.flex_base_size + outer_margins;
            total_flex_grow += style.flex_grow;
            total_flex_shrink += style.flex_shrink;
            total_weighted_flex_shrink += style.flex_shrink * item.flex_base_size;
            sum_hypothetical_main_size += item_outer_hypothetical_main_size;
            *next_index += 1;
        }

        if *next_index > start_index {
            // [§ 9.7 step 1](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
            //
            // Determine the used flex factor: outer hypothetical main
            // sizes sum versus the container's inner main size.
            let should_apply_grow = sum_hypothetical_main_size <= self.main_available_size;
            self.lines.push(FlexLine {
                start: start_index,
                end: *next_index,
                sum_flex_base_size,
                total_flex_grow,
                total_flex_shrink,
                total_weighted_flex_shrink,
                sum_hypothetical_main_size,
                remaining_free_space: self.main_available_size - sum_flex_base_size,
                initial_free_space: 0.0,
                should_apply_grow,
                line_cross_size: 0.0,
            });
            return true;
        }
        false
    }

    /// Resolve flexible lengths on every line.
    ///
    /// [§ 9.7 Resolving Flexible Lengths](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
    fn resolve_flex_lines(&mut self, tree: &LayoutTree) {
        for line_index in 0..self.lines.len() {
            self.freeze_inflexible_items(tree, line_index);
            while self.resolve_flexible_lengths(tree, line_index) {}
        }
    }

    /// [§ 9.7 step 2](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
    ///
    /// "Size inflexible items. Freeze, setting its target main size to
    /// its hypothetical main size ... any item that has a flex factor of
    /// zero; if using the flex grow factor: any item that has a flex base
    /// size greater than its hypothetical main size; if using the flex
    /// shrink factor: any item that has a flex base size smaller than its
    /// hypothetical main size."
    fn freeze_inflexible_items(&mut self, tree: &LayoutTree, line_index: usize) {
        let line = self.lines[line_index];
        let mut inflexible_item_indices = Vec::new();
        for item_index in line.start..line.end {
            let item = self.items[item_index];
            let style = tree.style(item.node);
            let flex_factor = if line.should_apply_grow {
                style.flex_grow
            } else {
                style.flex_shrink
            };
            if flex_factor == 0.0
                || (line.should_apply_grow && item.flex_base_size > item.hypothetical_main_size)
                || (!line.should_apply_grow && item.flex_base_size < item.hypothetical_main_size)
            {
                self.items[item_index].used_main_size = item.hypothetical_main_size;
                inflexible_item_indices.push(item_index);
            }
        }

        self.freeze_violations(tree, line_index, &inflexible_item_indices);
        // [§ 9.7 step 3] "Calculate initial free space."
        self.lines[line_index].initial_free_space = self.lines[line_index].remaining_free_space;
    }

    /// Freeze the given items, returning their overshoot to the line's
    /// free space and removing their factors from the line totals.
    fn freeze_violations(&mut self, tree: &LayoutTree, line_index: usize, item_indices: &[usize]) {
        for &item_index in item_indices {
            self.items[item_index].frozen = true;
            let item = self.items[item_index];
            let style = tree.style(item.node);
            let line = &mut self.lines[line_index];
            line.remaining_free_space -= item.used_main_size - item.flex_base_size;
            line.total_flex_grow -= style.flex_grow;
            line.total_flex_shrink -= style.flex_shrink;
            line.total_weighted_flex_shrink -= style.flex_shrink * item.flex_base_size;
            line.total_weighted_flex_shrink = line.total_weighted_flex_shrink.max(0.0);
        }
    }

    /// One iteration of the § 9.7 loop: distribute free space, clamp,
    /// and freeze violating items. Returns whether another iteration is
    /// needed.
    fn resolve_flexible_lengths(&mut self, tree: &LayoutTree, line_index: usize) -> bool {
        let should_apply_grow = self.lines[line_index].should_apply_grow;

        // "If the sum of the unfrozen flex items' flex factors is less
        // than one, multiply the initial free space by this sum. If the
        // magnitude of this value is less than the magnitude of the
        // remaining free space, use this as the remaining free space."
        let sum_flex_factors = if should_apply_grow {
            self.lines[line_index].total_flex_grow
        } else {
            self.lines[line_index].total_flex_shrink
        };
        if sum_flex_factors > 0.0 && sum_flex_factors < 1.0 {
            let fractional = self.lines[line_index].initial_free_space * sum_flex_factors;
            if fractional.abs() < self.lines[line_index].remaining_free_space.abs() {
                self.lines[line_index].remaining_free_space = fractional;
            }
        }

        let mut total_violation = 0.0;
        let mut used_free_space = 0.0;
        let mut min_violations = Vec::new();
        let mut max_violations = Vec::new();

        let line = self.lines[line_index];
        for item_index in line.start..line.end {
            if self.items[item_index].frozen {
                continue;
            }
            let item = self.items[item_index];
            let style = tree.style(item.node);

            // "Distribute free space proportional to the flex factors."
            let mut extra_space = 0.0;
            if line.remaining_free_space > 0.0 && line.total_flex_grow > 0.0 && should_apply_grow {
                extra_space = line.remaining_free_space * style.flex_grow / line.total_flex_grow;
            } else if line.remaining_free_space < 0.0
                && line.total_weighted_flex_shrink > 0.0
                && !should_apply_grow
                && style.flex_shrink != 0.0
            {
                extra_space = line.remaining_free_space * style.flex_shrink * item.flex_base_size
                    / line.total_weighted_flex_shrink;
            }
            let child_size = item.flex_base_size + extra_space;

            // "Fix min/max violations. Clamp each non-frozen item's
            // target main size by its used min and max main sizes."
            let adjusted_child_size = if self.main_axis_horizontal {
                tree.apply_width_constraints(item.node, child_size)
            } else {
                tree.apply_height_constraints(item.node, child_size)
            };
            self.items[item_index].used_main_size = adjusted_child_size;
            used_free_space += adjusted_child_size - item.flex_base_size;

            let violation = adjusted_child_size - child_size;
            if violation > 0.0 {
                min_violations.push(item_index);
            } else if violation < 0.0 {
                max_violations.push(item_index);
            }
            total_violation += violation;
        }

        // "Freeze over-flexed items. The total violation is the sum of
        // the adjustments ... Zero: freeze all items. Positive: freeze
        // all the items with min violations. Negative: freeze all the
        // items with max violations."
        if total_violation == 0.0 {
            self.lines[line_index].remaining_free_space -= used_free_space;
        } else if total_violation < 0.0 {
            self.freeze_violations(tree, line_index, &max_violations);
        } else {
            self.freeze_violations(tree, line_index, &min_violations);
        }

        total_violation != 0.0
    }

    /// Measure every item at its used main size to learn its
    /// hypothetical cross size.
    ///
    /// [§ 9.4 step 7](https://www.w3.org/TR/css-flexbox-1/#algo-cross-item)
    ///
    /// "Determine the hypothetical cross size of each item by performing
    /// layout with the used main size and the available space."
    fn determine_hypothetical_cross_size(&mut self, tree: &mut LayoutTree) {
        for index in 0..self.items.len() {
            let node = self.items[index].node;
            let cross_size_style = if self.main_axis_horizontal {
                tree.style(node).height
            } else {
                tree.style(node).width
            };
            let (cross_size, cross_mode) = match cross_size_style {
                Length::Fixed(value) => (value, LayoutMode::Exact),
                Length::Percent(_) => {
                    if self.cross_axis_mode == LayoutMode::Undefined {
                        (self.cross_available_size, LayoutMode::Undefined)
                    } else {
                        (
                            cross_size_style.resolve(self.cross_available_size),
                            LayoutMode::Exact,
                        )
                    }
                }
                Length::Auto => (self.cross_available_size, LayoutMode::Undefined),
            };

            let used_main_size = self.items[index].used_main_size;
            let (width, height, width_mode, height_mode) = if self.main_axis_horizontal {
                (used_main_size, cross_size, LayoutMode::Exact, cross_mode)
            } else {
                (cross_size, used_main_size, cross_mode, LayoutMode::Exact)
            };
            let result = tree.measure(node, width, height, width_mode, height_mode);
            self.items[index].hypothetical_cross_size = if self.main_axis_horizontal {
                result.height
            } else {
                result.width
            };
        }
    }

    /// Compute each line's cross size.
    ///
    /// [§ 9.4 step 8](https://www.w3.org/TR/css-flexbox-1/#algo-cross-line)
    ///
    /// "If the flex container is single-line and has a definite cross
    /// size, the cross size of the flex line is the flex container's
    /// inner cross size. Otherwise ... the largest outer hypothetical
    /// cross size among the line's items."
    fn calculate_line_cross_size(&mut self, tree: &LayoutTree, container: NodeId) {
        if tree.style(container).flex_wrap == FlexWrap::NoWrap
            && !self.lines.is_empty()
            && self.cross_axis_mode == LayoutMode::Exact
        {
            self.lines[0].line_cross_size = self.cross_available_size;
            return;
        }

        for line_index in 0..self.lines.len() {
            let line = self.lines[line_index];
            let mut max_outer_hypothetical_cross_size = 0.0_f32;
            for item_index in line.start..line.end {
                let item = self.items[item_index];
                let style = tree.style(item.node);
                let (cross_margin_front, cross_margin_after) = if self.main_axis_horizontal {
                    (style.margin_top, style.margin_bottom)
                } else {
                    (style.margin_left, style.margin_right)
                };
                // Margins against an indefinite cross size resolve to 0.
                let margin_reference = if self.cross_axis_mode == LayoutMode::Undefined {
                    0.0
                } else {
                    self.cross_available_size
                };
                let item_outer_hypothetical_cross_size = item.hypothetical_cross_size
                    + cross_margin_front.resolve(margin_reference)
                    + cross_margin_after.resolve(margin_reference);
                max_outer_hypothetical_cross_size =
                    max_outer_hypothetical_cross_size.max(item_outer_hypothetical_cross_size);
            }
            self.lines[line_index].line_cross_size = max_outer_hypothetical_cross_size;
        }
    }

    /// [§ 9.4 step 9](https://www.w3.org/TR/css-flexbox-1/#algo-line-stretch)
    ///
    /// "If the flex container has a definite cross size, align-content
    /// is stretch, and the sum of the flex lines' cross sizes is less
    /// than the flex container's inner cross size, increase the cross
    /// size of each flex line by equal amounts."
    #[allow(clippy::cast_precision_loss)]
    fn expand_line_cross_size_for_stretch(&mut self, tree: &LayoutTree, container: NodeId) {
        if self.cross_axis_mode == LayoutMode::Undefined
            || tree.style(container).align_content != AlignContent::Stretch
        {
            return;
        }
        let sum_line_cross_size: f32 = self.lines.iter().map(|line| line.line_cross_size).sum();
        if sum_line_cross_size > self.cross_available_size
            && self.cross_axis_mode == LayoutMode::AtMost
        {
            return;
        }
        if self.lines.is_empty() {
            return;
        }
        let expansion =
            (self.cross_available_size - sum_line_cross_size) / self.lines.len() as f32;
        for line in &mut self.lines {
            line.line_cross_size += expansion;
        }
    }

    /// Determine the used cross size of each flex item.
    ///
    /// [§ 9.4 step 11](https://www.w3.org/TR/css-flexbox-1/#algo-stretch)
    ///
    /// "If a flex item has align-self: stretch, its computed cross size
    /// property is auto, and neither of its cross-axis margins are auto,
    /// the used outer cross size is the used cross size of its flex
    /// line." Stretched items are laid out again under their definite
    /// used sizes so descendants see the final cross size.
    fn determine_item_used_cross_size(&mut self, tree: &mut LayoutTree, container: NodeId) {
        let container_align_items = tree.style(container).align_items;
        for line_index in 0..self.lines.len() {
            let line = self.lines[line_index];
            for item_index in line.start..line.end {
                let node = self.items[item_index].node;
                let style = tree.style(node);
                let cross_size_style = if self.main_axis_horizontal {
                    style.height
                } else {
                    style.width
                };
                let (cross_margin_front, cross_margin_after) = if self.main_axis_horizontal {
                    (style.margin_top, style.margin_bottom)
                } else {
                    (style.margin_left, style.margin_right)
                };
                let align = style.align_self.resolve(container_align_items);
                if align == AlignItems::Stretch
                    && cross_size_style.is_auto()
                    && !cross_margin_front.is_auto()
                    && !cross_margin_after.is_auto()
                {
                    let margin = tree.layout_info(node).margin;
                    let used_cross_size = line.line_cross_size
                        - margin.get(self.cross_axis_front)
                        - margin.get(self.cross_axis_after);
                    self.items[item_index].used_cross_size = used_cross_size;

                    let used_main_size = self.items[item_index].used_main_size;
                    let (width, height) = if self.main_axis_horizontal {
                        (used_main_size, used_cross_size)
                    } else {
                        (used_cross_size, used_main_size)
                    };
                    let _ = tree.measure(node, width, height, LayoutMode::Exact, LayoutMode::Exact);
                } else {
                    // "Otherwise, the used cross size is the item's
                    // hypothetical cross size."
                    self.items[item_index].used_cross_size =
                        self.items[item_index].hypothetical_cross_size;
                }
            }
        }
    }

    /// Determine the flex container's used cross size.
    ///
    /// [§ 9.4 step 15](https://www.w3.org/TR/css-flexbox-1/#algo-cross-container)
    ///
    /// "If the cross size property is a definite size, use that;
    /// otherwise, use the sum of the flex lines' cross sizes."
    fn determine_container_used_cross_size(&mut self, tree: &mut LayoutTree) {
        if self.cross_axis_mode == LayoutMode::Exact {
            return;
        }
        let sum_line_cross_size: f32 = self.lines.iter().map(|line| line.line_cross_size).sum();
        if self.cross_axis_mode == LayoutMode::Undefined {
            self.cross_available_size = sum_line_cross_size;
        } else if self.cross_axis_mode == LayoutMode::AtMost {
            self.cross_available_size = sum_line_cross_size.max(self.cross_available_size);
        }

        let (parent_width, parent_height) = if self.main_axis_horizontal {
            (self.main_available_size, self.cross_available_size)
        } else {
            (self.cross_available_size, self.main_available_size)
        };
        for index in 0..self.items.len() {
            let node = self.items[index].node;
            tree.update_layout_info(node, parent_width, parent_height);
        }
    }

    /// Position items along the main axis.
    ///
    /// [§ 9.5 Main-Axis Alignment](https://www.w3.org/TR/css-flexbox-1/#algo-main-align)
    ///
    /// "If the remaining free space is positive and at least one
    /// main-axis margin on this line is auto, distribute the free space
    /// equally among these margins. Otherwise, set all auto margins to
    /// zero. Align the items along the main-axis per justify-content."
    #[allow(clippy::cast_precision_loss)]
    fn main_axis_alignment(&self, tree: &mut LayoutTree, container: NodeId) {
        let main_axis_padding_front = tree
            .layout_info(container)
            .padding
            .get(self.main_axis_front);

        for line in &self.lines {
            // Gather outer sizes and auto margins for the line.
            let mut total_used_main_axis_size = 0.0;
            let mut auto_margins: Vec<(NodeId, Side)> = Vec::new();
            for item_index in line.start..line.end {
                let node = self.items[item_index].node;
                let margin = tree.layout_info(node).margin;
                let main_border_size = if self.main_axis_horizontal {
                    tree.offset_width(node)
                } else {
                    tree.offset_height(node)
                };
                total_used_main_axis_size += main_border_size
                    + margin.get(self.main_axis_front)
                    + margin.get(self.main_axis_after);

                let style = tree.style(node);
                let (main_margin_front, main_margin_after) = if self.main_axis_horizontal {
                    (style.margin_left, style.margin_right)
                } else {
                    (style.margin_top, style.margin_bottom)
                };
                if main_margin_front.is_auto() {
                    auto_margins.push((node, self.main_axis_front));
                }
                if main_margin_after.is_auto() {
                    auto_margins.push((node, self.main_axis_after));
                }
            }
            if total_used_main_axis_size < self.main_available_size && !auto_margins.is_empty() {
                let auto_margin_value = (self.main_available_size - total_used_main_axis_size)
                    / auto_margins.len() as f32;
                for &(node, side) in &auto_margins {
                    tree.layout_info_mut(node).margin.set(side, auto_margin_value);
                }
                total_used_main_axis_size = self.main_available_size;
            }

            // [§ 8.2 'justify-content'](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
            //
            // Under a reversed main axis the roles of flex-start and
            // flex-end swap: the remaining space moves to the opposite
            // end of the physical axis.
            let is_reverse = tree.style(container).is_main_axis_reverse();
            let mut adjust_main_start = main_axis_padding_front;
            let mut adjust_main_interval = 0.0;
            let remaining_space = self.main_available_size - total_used_main_axis_size;
            let line_item_count = line.end - line.start;
            match tree.style(container).justify_content {
                JustifyContent::FlexStart => {
                    if is_reverse {
                        adjust_main_start += remaining_space;
                    }
                }
                JustifyContent::FlexEnd => {
                    if !is_reverse {
                        adjust_main_start += remaining_space;
                    }
                }
                JustifyContent::Center => {
                    adjust_main_start += remaining_space / 2.0;
                }
                JustifyContent::SpaceBetween => {
                    if line_item_count > 1 {
                        adjust_main_interval = remaining_space / (line_item_count - 1) as f32;
                    }
                }
                JustifyContent::SpaceAround => {
                    let interval = remaining_space / (line_item_count * 2) as f32;
                    adjust_main_start += interval;
                    adjust_main_interval = 2.0 * interval;
                }
            }

            let mut line_items: Vec<NodeId> = self.items[line.start..line.end]
                .iter()
                .map(|item| item.node)
                .collect();
            if is_reverse {
                line_items.reverse();
            }

            for node in line_items {
                adjust_main_start += tree.layout_info(node).margin.get(self.main_axis_front);
                if self.main_axis_horizontal {
                    tree.set_offset_left(node, adjust_main_start);
                } else {
                    tree.set_offset_top(node, adjust_main_start);
                }
                let main_border_size = if self.main_axis_horizontal {
                    tree.offset_width(node)
                } else {
                    tree.offset_height(node)
                };
                adjust_main_start += main_border_size
                    + tree.layout_info(node).margin.get(self.main_axis_after)
                    + adjust_main_interval;
            }
        }
    }

    /// Position lines and items along the cross axis.
    ///
    /// [§ 9.6 Cross-Axis Alignment](https://www.w3.org/TR/css-flexbox-1/#algo-cross-align)
    ///
    /// Order of operations: `align-content` across lines, auto cross
    /// margins, then `align-items`/`align-self` per item, with the
    /// `wrap-reverse` mirror applied to each offset. Under wrap-reverse
    /// only the cross-axis direction flips; the main axis is untouched.
    #[allow(clippy::cast_precision_loss)]
    fn cross_axis_alignment(&self, tree: &mut LayoutTree, container: NodeId) {
        let is_wrap_reverse = tree.style(container).flex_wrap == FlexWrap::WrapReverse;
        let container_padding = tree.layout_info(container).padding;
        let cross_axis_padding_front = container_padding.get(self.cross_axis_front);
        let cross_axis_padding_after = container_padding.get(self.cross_axis_after);
        let cross_axis_padding_start = if is_wrap_reverse {
            cross_axis_padding_after
        } else {
            cross_axis_padding_front
        };

        let total_used_cross_axis_size: f32 =
            self.lines.iter().map(|line| line.line_cross_size).sum();
        let mut adjust_cross_start = cross_axis_padding_start;
        let mut adjust_cross_interval = 0.0;

        // [§ 8.4 'align-content'](https://www.w3.org/TR/css-flexbox-1/#align-content-property)
        //
        // Stretch already distributed its surplus into the line cross
        // sizes during measurement.
        let remaining_cross_axis_space = self.cross_available_size - total_used_cross_axis_size;
        let line_count = self.lines.len();
        match tree.style(container).align_content {
            AlignContent::FlexStart | AlignContent::Stretch => {}
            AlignContent::FlexEnd => {
                adjust_cross_start += remaining_cross_axis_space;
            }
            AlignContent::Center => {
                adjust_cross_start += remaining_cross_axis_space / 2.0;
            }
            AlignContent::SpaceBetween => {
                if line_count > 1 {
                    adjust_cross_interval = remaining_cross_axis_space / (line_count - 1) as f32;
                }
            }
            AlignContent::SpaceAround => {
                if line_count > 0 {
                    let interval = remaining_cross_axis_space / (line_count * 2) as f32;
                    adjust_cross_start += interval;
                    adjust_cross_interval = 2.0 * interval;
                }
            }
        }

        let container_align_items = tree.style(container).align_items;
        for line in &self.lines {
            for item_index in line.start..line.end {
                let node = self.items[item_index].node;

                // Apply auto cross margins.
                //
                // "If its outer cross size (treating those auto margins
                // as zero) is less than the cross size of its flex line,
                // distribute the difference in those sizes equally to the
                // auto margins."
                let item_cross_border_size = if self.main_axis_horizontal {
                    tree.offset_height(node)
                } else {
                    tree.offset_width(node)
                };
                let margin = tree.layout_info(node).margin;
                let mut item_outer_cross_size = item_cross_border_size
                    + margin.get(self.cross_axis_front)
                    + margin.get(self.cross_axis_after);
                let style = tree.style(node);
                let (cross_margin_front, cross_margin_after) = if self.main_axis_horizontal {
                    (style.margin_top, style.margin_bottom)
                } else {
                    (style.margin_left, style.margin_right)
                };
                let align = style.align_self.resolve(container_align_items);
                if item_outer_cross_size < line.line_cross_size {
                    let margin_front_auto = cross_margin_front.is_auto();
                    let margin_after_auto = cross_margin_after.is_auto();
                    let item_cross_remaining_space =
                        line.line_cross_size - item_outer_cross_size;
                    if margin_front_auto && margin_after_auto {
                        let info = tree.layout_info_mut(node);
                        info.margin
                            .set(self.cross_axis_front, item_cross_remaining_space / 2.0);
                        info.margin
                            .set(self.cross_axis_after, item_cross_remaining_space / 2.0);
                    } else if margin_front_auto {
                        tree.layout_info_mut(node)
                            .margin
                            .set(self.cross_axis_front, item_cross_remaining_space);
                    } else if margin_after_auto {
                        tree.layout_info_mut(node)
                            .margin
                            .set(self.cross_axis_after, item_cross_remaining_space);
                    }
                    if margin_front_auto || margin_after_auto {
                        item_outer_cross_size = line.line_cross_size;
                    }
                }

                // Align per align-self, mirroring under wrap-reverse.
                let margin_front_value = tree.layout_info(node).margin.get(self.cross_axis_front);
                let margin_after_value = tree.layout_info(node).margin.get(self.cross_axis_after);
                let item_cross_offset = match align {
                    AlignItems::FlexStart | AlignItems::Stretch => {
                        if is_wrap_reverse {
                            cross_axis_padding_front + self.cross_available_size
                                - (adjust_cross_start
                                    + margin_after_value
                                    + item_cross_border_size)
                        } else {
                            adjust_cross_start + margin_front_value
                        }
                    }
                    AlignItems::FlexEnd => {
                        if is_wrap_reverse {
                            cross_axis_padding_front + self.cross_available_size
                                - (adjust_cross_start + line.line_cross_size - margin_front_value)
                        } else {
                            (adjust_cross_start + line.line_cross_size - margin_after_value)
                                - item_cross_border_size
                        }
                    }
                    AlignItems::Center => {
                        if is_wrap_reverse {
                            cross_axis_padding_front + self.cross_available_size
                                - (adjust_cross_start + line.line_cross_size
                                    - (line.line_cross_size - item_outer_cross_size) / 2.0
                                    - margin_front_value)
                        } else {
                            adjust_cross_start
                                + (line.line_cross_size - item_outer_cross_size) / 2.0
                                + margin_front_value
                        }
                    }
                };

                if self.main_axis_horizontal {
                    tree.set_offset_top(node, item_cross_offset);
                } else {
                    tree.set_offset_left(node, item_cross_offset);
                }
            }
            // Advance to the next flex line.
            adjust_cross_start += line.line_cross_size + adjust_cross_interval;
        }
    }
}
