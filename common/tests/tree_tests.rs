mod support;

use common::model::factory::{new_row, new_row_with_cells};
use common::model::layout::MAX_CELLS;
use common::model::{Cell, Item};
use common::tree::{
    collect_ids, find_container_id, find_node, insert_node, move_node, patch_node, remove_node,
    reorder, set_cell_count, update_node, Node, NodeMut, NodeRef, ROOT_ID,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use support::{cell, fixture, item_ids, row, text};

#[test]
fn find_node_searches_every_level() {
    let rows = fixture();
    assert!(matches!(find_node(&rows, "r2"), Some(NodeRef::Row(_))));
    assert!(matches!(find_node(&rows, "c2"), Some(NodeRef::Cell(_))));
    assert!(matches!(find_node(&rows, "b"), Some(NodeRef::Item(_))));
    assert_eq!(find_node(&rows, "d").map(|n| n.id().to_string()), Some("d".to_string()));
    assert!(find_node(&rows, "missing").is_none());
}

#[test]
fn container_of_rows_items_and_cells() {
    let rows = fixture();
    assert_eq!(find_container_id(&rows, "r1"), ROOT_ID);
    assert_eq!(find_container_id(&rows, "a"), "c1");
    assert_eq!(find_container_id(&rows, "c2"), "c2");
    assert_eq!(find_container_id(&rows, "d"), "ic");
    assert_eq!(find_container_id(&rows, "missing"), ROOT_ID);
}

#[test]
fn remove_item_returns_the_subtree_and_leaves_input_alone() {
    let rows = fixture();
    let (pruned, removed) = remove_node(&rows, "b");

    assert!(matches!(removed, Some(Node::Item(ref item)) if item.id() == "b"));
    assert_eq!(item_ids(&pruned[0].cells[0]), vec!["a"]);
    assert_eq!(item_ids(&rows[0].cells[0]), vec!["a", "b"]);
}

#[test]
fn removing_the_last_cell_drops_the_row() {
    let (pruned, removed) = remove_node(&fixture(), "c3");
    assert!(matches!(removed, Some(Node::Cell(_))));
    assert_eq!(pruned.len(), 1);
    assert_eq!(pruned[0].id, "r1");
}

#[test]
fn removing_an_unknown_id_is_a_no_op() {
    let rows = fixture();
    let (same, removed) = remove_node(&rows, "missing");
    assert!(removed.is_none());
    assert_eq!(same, rows);
}

#[test]
fn removing_inside_a_container() {
    let (pruned, removed) = remove_node(&fixture(), "d");
    assert!(matches!(removed, Some(Node::Item(_))));
    let Item::Container(inner) = &pruned[1].cells[0].items[0] else {
        panic!("container should survive losing an item");
    };
    assert!(inner.cells[0].items.is_empty());
}

#[test]
fn item_goes_before_anchor_item() {
    let rows = move_node(&fixture(), "c", "b");
    assert_eq!(item_ids(&rows[0].cells[0]), vec!["a", "c", "b"]);
    assert!(rows[0].cells[1].items.is_empty());
}

#[test]
fn item_goes_to_front_of_anchor_cell() {
    let rows = move_node(&fixture(), "a", "c2");
    assert_eq!(item_ids(&rows[0].cells[1]), vec!["a", "c"]);
}

#[test]
fn root_anchor_targets_first_cell() {
    let rows = insert_node(&fixture(), Node::Item(text("new", "N")), ROOT_ID);
    assert_eq!(item_ids(&rows[0].cells[0]), vec!["new", "a", "b"]);
}

#[test]
fn item_into_an_empty_document_creates_a_row() {
    let rows = insert_node(&[], Node::Item(text("new", "N")), ROOT_ID);
    assert_eq!(rows.len(), 1);
    assert_eq!(item_ids(&rows[0].cells[0]), vec!["new"]);
}

#[test]
fn item_can_move_into_a_container() {
    let rows = move_node(&fixture(), "a", "d");
    let Item::Container(inner) = &rows[1].cells[0].items[0] else {
        panic!("expected container");
    };
    assert_eq!(item_ids(&inner.cells[0]), vec!["a", "d"]);
}

#[test]
fn row_goes_after_anchor_row_or_at_the_end() {
    let extra = row("r3", vec![cell("c4", vec![])]);
    let after_first = insert_node(&fixture(), Node::Row(extra.clone()), "r1");
    let order: Vec<&str> = after_first.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["r1", "r3", "r2"]);

    let appended = insert_node(&fixture(), Node::Row(extra), "missing");
    assert_eq!(appended.last().map(|r| r.id.as_str()), Some("r3"));
}

#[test]
fn cell_goes_after_anchor_cell() {
    let rows = insert_node(&fixture(), Node::Cell(cell("c9", vec![])), "c1");
    let order: Vec<&str> = rows[0].cells.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["c1", "c9", "c2"]);
}

#[test]
fn cell_into_a_full_row_opens_a_new_row() {
    let mut full = new_row_with_cells(MAX_CELLS, 600, 0);
    full.id = "full".to_string();
    let anchor = full.cells[0].id.clone();
    let rows = insert_node(&[full], Node::Cell(cell("extra", vec![])), &anchor);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells.len(), MAX_CELLS);
    assert_eq!(rows[1].cells[0].id, "extra");
}

#[test]
fn duplicate_ids_are_refused() {
    let rows = fixture();
    let again = insert_node(&rows, Node::Item(text("a", "dup")), "c2");
    assert_eq!(again, rows);
}

#[test]
fn moves_never_duplicate_or_lose_ids() {
    let rows = fixture();
    let anchors = [ROOT_ID, "r1", "r2", "c1", "c2", "a", "d", "ic", "missing"];
    for id in collect_ids(&rows) {
        for anchor in anchors {
            let moved = move_node(&rows, &id, anchor);
            let ids = collect_ids(&moved);
            let hits = ids.iter().filter(|other| **other == id).count();
            assert_eq!(hits, 1, "moving {} to {}", id, anchor);

            let mut unique = ids.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), ids.len(), "moving {} to {}", id, anchor);
        }
    }
}

#[test]
fn reorder_within_one_container() {
    let rows = fixture();

    let items = reorder(&rows, "a", "b");
    assert_eq!(item_ids(&items[0].cells[0]), vec!["b", "a"]);

    let cells = reorder(&rows, "c2", "c1");
    let order: Vec<&str> = cells[0].cells.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["c2", "c1"]);

    let top = reorder(&rows, "r1", "r2");
    let order: Vec<&str> = top.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["r2", "r1"]);
}

#[test]
fn reorder_across_containers_does_nothing() {
    let rows = fixture();
    assert_eq!(reorder(&rows, "a", "c"), rows);
    assert_eq!(reorder(&rows, "a", "missing"), rows);
}

#[test]
fn array_move_shifts_intermediate_items() {
    let rows = vec![row(
        "r",
        vec![cell(
            "c",
            vec![text("1", ""), text("2", ""), text("3", ""), text("4", "")],
        )],
    )];
    let moved = reorder(&rows, "1", "3");
    assert_eq!(item_ids(&moved[0].cells[0]), vec!["2", "3", "1", "4"]);
}

#[test]
fn update_touches_only_the_target() {
    let rows = fixture();
    let updated = update_node(&rows, "r2", |node| {
        if let NodeMut::Row(row) = node {
            row.display_name = Some("Footer".to_string());
        }
    });
    assert_eq!(updated[1].display_name.as_deref(), Some("Footer"));
    assert_eq!(updated[0], rows[0]);
    assert_eq!(rows[1].display_name, None);
}

#[test]
fn patch_merges_fields_but_not_identity() {
    let rows = fixture();
    let fields = json!({ "content": "Patched", "fontSize": "18px", "id": "hijack", "type": "image" });
    let patched = patch_node(&rows, "a", fields.as_object().unwrap());

    let Item::Text(text) = &patched[0].cells[0].items[0] else {
        panic!("patch must not change the item kind");
    };
    assert_eq!(text.id, "a");
    assert_eq!(text.content, "Patched");
    assert_eq!(text.font_size, 18);
}

#[test]
fn invalid_patch_leaves_the_tree_unchanged() {
    let rows = fixture();
    let fields = json!({ "items": "not a list" });
    assert_eq!(patch_node(&rows, "c1", fields.as_object().unwrap()), rows);
}

#[test]
fn cell_count_change_redistributes_width() {
    let row = set_cell_count(&new_row(600, 10), 3, 600, 10);
    let widths: Vec<u32> = row.cells.iter().map(|c: &Cell| c.width).collect();
    assert_eq!(widths, vec![193, 193, 193]);
    let total: u32 = widths.iter().sum();
    assert!(580 - total <= 2);
}
