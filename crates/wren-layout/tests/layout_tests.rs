//! Integration tests for the flex layout pipeline.
//!
//! Each test builds a small tree, runs `relayout`, and asserts the
//! border-box offsets of every node of interest.

use wren_layout::{LayoutTree, NodeId};

/// Accept a ULP-scale error from repeated f32 accumulation.
fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

/// Root fixture: a column container, the shape embedders start from.
fn column_root(tree: &mut LayoutTree) -> NodeId {
    let root = tree.new_node();
    tree.set_style(root, "flexDirection", "column");
    root
}

/// Allocate a child under `parent` carrying the given declarations.
fn child_with(tree: &mut LayoutTree, parent: NodeId, declarations: &[(&str, &str)]) -> NodeId {
    let child = tree.new_node();
    for &(name, value) in declarations {
        tree.set_style(child, name, value);
    }
    tree.append_child(parent, child);
    child
}

fn offsets(tree: &LayoutTree, id: NodeId) -> (f32, f32, f32, f32) {
    (
        tree.offset_left(id),
        tree.offset_top(id),
        tree.offset_width(id),
        tree.offset_height(id),
    )
}

// ========== basic row flow ==========

#[test]
fn test_row_fixed_widths() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(&mut tree, root, &[("width", "40px")]);
    let b = child_with(&mut tree, root, &[("width", "40px")]);
    let c = child_with(&mut tree, root, &[("width", "40px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_eq!(offsets(&tree, root), (0.0, 0.0, 200.0, 100.0));
    assert_eq!(tree.offset_left(a), 0.0);
    assert_eq!(tree.offset_left(b), 40.0);
    assert_eq!(tree.offset_left(c), 80.0);
    for id in [a, b, c] {
        assert_eq!(tree.offset_top(id), 0.0);
        assert_eq!(tree.offset_width(id), 40.0);
        // Auto cross size stretches to the container's height.
        assert_eq!(tree.offset_height(id), 100.0);
    }
}

#[test]
fn test_row_grow_distribution() {
    // Three items with flex-grow: 1 and zero basis split the main size
    // three ways.
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let declarations: &[(&str, &str)] = &[("width", "0px"), ("flex-grow", "1")];
    let a = child_with(&mut tree, root, declarations);
    let b = child_with(&mut tree, root, declarations);
    let c = child_with(&mut tree, root, declarations);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_width(a), 200.0 / 3.0);
    assert_close(tree.offset_width(b), 200.0 / 3.0);
    assert_close(tree.offset_width(c), 200.0 / 3.0);
    assert_close(tree.offset_left(a), 0.0);
    assert_close(tree.offset_left(b), 200.0 / 3.0);
    assert_close(tree.offset_left(c), 400.0 / 3.0);
}

#[test]
fn test_row_weighted_shrink() {
    // [§ 9.7](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
    //
    // Two 60px items in a 100px container overflow by 20; equal shrink
    // weights remove 10 from each.
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let declarations: &[(&str, &str)] = &[("width", "60px"), ("flex-shrink", "1")];
    let a = child_with(&mut tree, root, declarations);
    let b = child_with(&mut tree, root, declarations);

    tree.relayout(root, 0.0, 0.0, 100.0, 100.0);

    assert_close(tree.offset_width(a), 50.0);
    assert_close(tree.offset_width(b), 50.0);
    assert_close(tree.offset_left(b), 50.0);
}

// ========== min/max violation recycling ==========

#[test]
fn test_grow_respects_max_width_and_redistributes() {
    // The clamped item freezes at its max; the freed space flows to the
    // remaining flexible item on the next loop iteration.
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(
        &mut tree,
        root,
        &[("width", "0px"), ("flex-grow", "1"), ("max-width", "50px")],
    );
    let b = child_with(&mut tree, root, &[("width", "0px"), ("flex-grow", "1")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_width(a), 50.0);
    assert_close(tree.offset_width(b), 150.0);
    assert_close(tree.offset_left(b), 50.0);
}

#[test]
fn test_shrink_respects_min_width_and_redistributes() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(
        &mut tree,
        root,
        &[("width", "80px"), ("flex-shrink", "1"), ("min-width", "60px")],
    );
    let b = child_with(&mut tree, root, &[("width", "80px"), ("flex-shrink", "1")]);

    tree.relayout(root, 0.0, 0.0, 100.0, 100.0);

    assert_close(tree.offset_width(a), 60.0);
    assert_close(tree.offset_width(b), 40.0);
    assert_close(tree.offset_width(a) + tree.offset_width(b), 100.0);
}

// ========== wrapping ==========

#[test]
fn test_wrap_into_two_lines() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "flex-wrap", "wrap");
    let declarations: &[(&str, &str)] = &[("width", "100px"), ("height", "50px")];
    let children: Vec<NodeId> = (0..5)
        .map(|_| child_with(&mut tree, root, declarations))
        .collect();

    tree.relayout(root, 0.0, 0.0, 300.0, 200.0);

    // First line holds three items, the second the remaining two.
    let expected_left = [0.0, 100.0, 200.0, 0.0, 100.0];
    let expected_top = [0.0, 0.0, 0.0, 50.0, 50.0];
    for (index, &child) in children.iter().enumerate() {
        assert_close(tree.offset_left(child), expected_left[index]);
        assert_close(tree.offset_top(child), expected_top[index]);
    }
}

#[test]
fn test_wrap_reverse_mirrors_cross_offsets() {
    // With symmetric (zero) cross margins, wrap-reverse offsets obey
    // reversed = cross_size - forward - item_cross_size.
    let declarations: &[(&str, &str)] = &[("width", "100px"), ("height", "50px")];

    let mut forward_tree = LayoutTree::new();
    let forward_root = forward_tree.new_node();
    forward_tree.set_style(forward_root, "flex-wrap", "wrap");
    let forward_children: Vec<NodeId> = (0..5)
        .map(|_| child_with(&mut forward_tree, forward_root, declarations))
        .collect();
    forward_tree.relayout(forward_root, 0.0, 0.0, 300.0, 200.0);

    let mut reverse_tree = LayoutTree::new();
    let reverse_root = reverse_tree.new_node();
    reverse_tree.set_style(reverse_root, "flex-wrap", "wrap-reverse");
    let reverse_children: Vec<NodeId> = (0..5)
        .map(|_| child_with(&mut reverse_tree, reverse_root, declarations))
        .collect();
    reverse_tree.relayout(reverse_root, 0.0, 0.0, 300.0, 200.0);

    for (&forward, &reverse) in forward_children.iter().zip(&reverse_children) {
        assert_close(forward_tree.offset_left(forward), reverse_tree.offset_left(reverse));
        let mirrored =
            200.0 - forward_tree.offset_top(forward) - forward_tree.offset_height(forward);
        assert_close(reverse_tree.offset_top(reverse), mirrored);
    }
}

// ========== justify-content ==========

#[test]
fn test_column_space_between() {
    let mut tree = LayoutTree::new();
    let root = column_root(&mut tree);
    tree.set_style(root, "justify-content", "space-between");
    let declarations: &[(&str, &str)] = &[("height", "40px")];
    let a = child_with(&mut tree, root, declarations);
    let b = child_with(&mut tree, root, declarations);
    let c = child_with(&mut tree, root, declarations);

    tree.relayout(root, 0.0, 0.0, 300.0, 200.0);

    assert_close(tree.offset_top(a), 0.0);
    assert_close(tree.offset_top(b), 80.0);
    assert_close(tree.offset_top(c), 160.0);
    // Auto width stretches to the column container's width.
    assert_close(tree.offset_width(a), 300.0);
}

#[test]
fn test_row_center_and_flex_end() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "justify-content", "center");
    let a = child_with(&mut tree, root, &[("width", "50px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);
    assert_close(tree.offset_left(a), 75.0);

    tree.set_style(root, "justify-content", "flex-end");
    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);
    assert_close(tree.offset_left(a), 150.0);
}

#[test]
fn test_space_around_row() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "justify-content", "space-around");
    let a = child_with(&mut tree, root, &[("width", "40px")]);
    let b = child_with(&mut tree, root, &[("width", "40px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    // Free space 120 over two items: 30 at each end, 60 between.
    assert_close(tree.offset_left(a), 30.0);
    assert_close(tree.offset_left(b), 130.0);
}

#[test]
fn test_row_reverse_flips_main_axis() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "flex-direction", "row-reverse");
    let a = child_with(&mut tree, root, &[("width", "40px")]);
    let b = child_with(&mut tree, root, &[("width", "40px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    // flex-start packs toward the main-axis start, which under
    // row-reverse is the right edge; the first item sits rightmost.
    assert_close(tree.offset_left(b), 120.0);
    assert_close(tree.offset_left(a), 160.0);
}

// ========== order ==========

#[test]
fn test_order_sorts_items_stably() {
    // [§ 5.4 'order'](https://www.w3.org/TR/css-flexbox-1/#order-property)
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(&mut tree, root, &[("width", "40px"), ("order", "2")]);
    let b = child_with(&mut tree, root, &[("width", "40px"), ("order", "1")]);
    let c = child_with(&mut tree, root, &[("width", "40px"), ("order", "3")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_left(b), 0.0);
    assert_close(tree.offset_left(a), 40.0);
    assert_close(tree.offset_left(c), 80.0);
}

#[test]
fn test_equal_order_keeps_document_order() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(&mut tree, root, &[("width", "10px"), ("order", "1")]);
    let b = child_with(&mut tree, root, &[("width", "20px"), ("order", "1")]);
    let c = child_with(&mut tree, root, &[("width", "30px"), ("order", "1")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_left(a), 0.0);
    assert_close(tree.offset_left(b), 10.0);
    assert_close(tree.offset_left(c), 30.0);
}

// ========== alignment and margins ==========

#[test]
fn test_auto_main_margins_center_item() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(
        &mut tree,
        root,
        &[("width", "50px"), ("margin-left", "auto"), ("margin-right", "auto")],
    );

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_left(a), 75.0);
}

#[test]
fn test_auto_cross_margins_center_item() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(
        &mut tree,
        root,
        &[("width", "50px"), ("height", "40px"), ("margin", "auto 0px")],
    );

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_top(a), 30.0);
}

#[test]
fn test_align_items_center_and_flex_end() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "align-items", "center");
    let a = child_with(&mut tree, root, &[("width", "50px"), ("height", "40px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);
    assert_close(tree.offset_top(a), 30.0);

    tree.set_style(root, "align-items", "flex-end");
    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);
    assert_close(tree.offset_top(a), 60.0);
}

#[test]
fn test_align_self_overrides_align_items() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "align-items", "flex-start");
    let a = child_with(&mut tree, root, &[("height", "40px")]);
    let b = child_with(
        &mut tree,
        root,
        &[("height", "40px"), ("align-self", "flex-end")],
    );

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_top(a), 0.0);
    assert_close(tree.offset_top(b), 60.0);
}

#[test]
fn test_align_content_stretch_expands_lines() {
    // [§ 9.4 step 9](https://www.w3.org/TR/css-flexbox-1/#algo-line-stretch)
    //
    // Two 50px lines in a 200px container gain 50px each.
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "flex-wrap", "wrap");
    tree.set_style(root, "align-content", "stretch");
    tree.set_style(root, "align-items", "flex-start");
    let declarations: &[(&str, &str)] = &[("width", "150px"), ("height", "50px")];
    let a = child_with(&mut tree, root, declarations);
    let b = child_with(&mut tree, root, declarations);

    tree.relayout(root, 0.0, 0.0, 200.0, 200.0);

    assert_close(tree.offset_top(a), 0.0);
    // The second line starts after the first expanded line.
    assert_close(tree.offset_top(b), 100.0);
}

// ========== box metrics ==========

#[test]
fn test_container_padding_offsets_items() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "padding", "10px 20px");
    let a = child_with(&mut tree, root, &[("width", "40px"), ("height", "30px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_close(tree.offset_left(a), 20.0);
    assert_close(tree.offset_top(a), 10.0);
    assert_eq!(offsets(&tree, root), (0.0, 0.0, 200.0, 100.0));
}

#[test]
fn test_percent_padding_resolves_against_parent_width() {
    // Every padding side resolves against the parent's width, including
    // the vertical ones; a 0px-wide child floors at its padding box.
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(
        &mut tree,
        root,
        &[("width", "0px"), ("padding-left", "10%"), ("padding-right", "10%")],
    );

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    // 10% of 200 on each side.
    assert_close(tree.offset_width(a), 40.0);
}

#[test]
fn test_percent_vertical_margin_resolves_against_parent_width() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let a = child_with(&mut tree, root, &[("margin-top", "10%")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    // 10% of the 200px width, not the 100px height.
    assert_close(tree.offset_top(a), 20.0);
    // The stretched cross size excludes the resolved margin.
    assert_close(tree.offset_height(a), 80.0);
}

#[test]
fn test_border_contributes_to_border_box() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "border-width", "5px");
    let a = child_with(&mut tree, root, &[("width", "40px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    // Content shrinks by the border, the border box keeps the given size.
    assert_eq!(offsets(&tree, root), (0.0, 0.0, 200.0, 100.0));
    assert_close(tree.offset_height(a), 90.0);
}

#[test]
fn test_shrink_to_fit_nested_container() {
    // A nested container with an indefinite main size takes the sum of
    // its children's hypothetical sizes.
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let inner = child_with(&mut tree, root, &[]);
    let _first = child_with(&mut tree, inner, &[("width", "50px"), ("height", "20px")]);
    let _second = child_with(&mut tree, inner, &[("width", "50px"), ("height", "20px")]);

    tree.relayout(root, 0.0, 0.0, 400.0, 200.0);

    assert_close(tree.offset_width(inner), 100.0);
    // Stretched cross size fills the root.
    assert_close(tree.offset_height(inner), 200.0);
}

// ========== display handling ==========

#[test]
fn test_display_none_zeroes_subtree() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let hidden = child_with(&mut tree, root, &[("width", "40px"), ("display", "none")]);
    let grandchild = child_with(&mut tree, hidden, &[("width", "40px")]);
    let visible = child_with(&mut tree, root, &[("width", "40px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    assert_eq!(offsets(&tree, hidden), (0.0, 0.0, 0.0, 0.0));
    assert_eq!(offsets(&tree, grandchild), (0.0, 0.0, 0.0, 0.0));
    // The hidden sibling takes no main-axis space.
    assert_close(tree.offset_left(visible), 0.0);
}

#[test]
fn test_absolute_children_are_skipped() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let absolute = child_with(
        &mut tree,
        root,
        &[("width", "40px"), ("position", "absolute")],
    );
    let a = child_with(&mut tree, root, &[("width", "40px")]);
    let b = child_with(&mut tree, root, &[("width", "40px")]);

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);

    // In-flow items pack as if the absolute child were not there.
    assert_close(tree.offset_left(a), 0.0);
    assert_close(tree.offset_left(b), 40.0);
    // The absolute child is left untouched by this pipeline.
    assert_eq!(offsets(&tree, absolute), (0.0, 0.0, 0.0, 0.0));
}

// ========== determinism ==========

#[test]
fn test_relayout_is_deterministic() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_style(root, "flex-wrap", "wrap");
    let mut children = Vec::new();
    children.push(child_with(
        &mut tree,
        root,
        &[("width", "0px"), ("flex-grow", "1"), ("max-width", "20px")],
    ));
    children.push(child_with(&mut tree, root, &[("width", "0px"), ("flex-grow", "1")]));
    children.push(child_with(
        &mut tree,
        root,
        &[("width", "120px"), ("height", "30px"), ("margin", "4px")],
    ));

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);
    let first: Vec<_> = children.iter().map(|&id| offsets(&tree, id)).collect();

    tree.relayout(root, 0.0, 0.0, 200.0, 100.0);
    let second: Vec<_> = children.iter().map(|&id| offsets(&tree, id)).collect();

    assert_eq!(first, second);
}
