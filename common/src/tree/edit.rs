use crate::model::{Cell, Item, Row, layout::MAX_CELLS};
use crate::tree::{
    NodeMut, Node, ROOT_ID, collect_ids, collect_node_ids, find_container_id, find_node,
    find_node_mut,
};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Detaches `id` from the tree, wherever it lives.
///
/// Returns the pruned rows and the removed subtree. A row left without cells
/// by the removal is dropped as well. Unknown ids return the rows unchanged
/// and `None`.
pub fn remove_node(rows: &[Row], id: &str) -> (Vec<Row>, Option<Node>) {
    let mut out = rows.to_vec();
    let removed = take_from_rows(&mut out, id);
    (out, removed)
}

fn take_from_rows(rows: &mut Vec<Row>, id: &str) -> Option<Node> {
    if let Some(pos) = rows.iter().position(|r| r.id == id) {
        return Some(Node::Row(rows.remove(pos)));
    }
    for index in 0..rows.len() {
        if let Some(node) = take_from_cells(&mut rows[index].cells, id) {
            if rows[index].cells.is_empty() {
                debug!("row {} lost its last cell, dropping it", rows[index].id);
                rows.remove(index);
            }
            return Some(node);
        }
    }
    None
}

fn take_from_cells(cells: &mut Vec<Cell>, id: &str) -> Option<Node> {
    if let Some(pos) = cells.iter().position(|c| c.id == id) {
        return Some(Node::Cell(cells.remove(pos)));
    }
    for cell in cells.iter_mut() {
        if let Some(pos) = cell.items.iter().position(|i| i.id() == id) {
            return Some(Node::Item(cell.items.remove(pos)));
        }
        for index in 0..cell.items.len() {
            let Item::Container(inner) = &mut cell.items[index] else {
                continue;
            };
            if let Some(node) = take_from_cells(&mut inner.cells, id) {
                if inner.cells.is_empty() {
                    cell.items.remove(index);
                }
                return Some(node);
            }
        }
    }
    None
}

/// Inserts a detached subtree relative to `anchor_id`.
///
/// - A row goes right after the top-level row `anchor_id`, or at the end.
/// - An item goes at the front of the cell `anchor_id`, right before the item
///   `anchor_id`, or at the front of the first cell of the row `anchor_id`.
///   [`ROOT_ID`] and unknown anchors target the first cell of the first row.
/// - A cell goes right after the cell `anchor_id`, or at the end of the row
///   `anchor_id`. Anything else, or a full row, wraps it in a new row.
///
/// The node keeps its id. A node carrying an id already present in `rows` is
/// refused and the rows come back unchanged.
pub fn insert_node(rows: &[Row], node: Node, anchor_id: &str) -> Vec<Row> {
    let mut out = rows.to_vec();
    let present: HashSet<String> = collect_ids(&out).into_iter().collect();
    if let Some(dup) = collect_node_ids(&node).into_iter().find(|id| present.contains(id)) {
        warn!("refusing to insert {}: id {} already in the tree", node.id(), dup);
        return out;
    }

    match node {
        Node::Row(row) => {
            match out.iter().position(|r| r.id == anchor_id) {
                Some(pos) => out.insert(pos + 1, row),
                None => out.push(row),
            }
        }
        Node::Cell(cell) => insert_cell(&mut out, cell, anchor_id),
        Node::Item(item) => insert_item(&mut out, item, anchor_id),
    }
    out
}

fn insert_item(rows: &mut Vec<Row>, item: Item, anchor_id: &str) {
    let mut pending = Some(item);
    if anchor_id != ROOT_ID {
        let anchor_row = rows.iter_mut().find(|r| r.id == anchor_id);
        if let Some(cell) = anchor_row.and_then(|r| r.cells.first_mut()) {
            if let Some(item) = pending.take() {
                cell.items.insert(0, item);
            }
            return;
        }
        for row in rows.iter_mut() {
            if place_item(&mut row.cells, &mut pending, anchor_id) {
                return;
            }
        }
        debug!("anchor {} not found, inserting at the document start", anchor_id);
    }

    let Some(item) = pending else { return };
    match rows.first_mut().and_then(|r| r.cells.first_mut()) {
        Some(cell) => cell.items.insert(0, item),
        None => rows.push(Row::with_cells(vec![Cell::new(0).with_items(vec![item])])),
    }
}

fn place_item(cells: &mut [Cell], pending: &mut Option<Item>, anchor_id: &str) -> bool {
    for cell in cells.iter_mut() {
        if cell.id == anchor_id {
            if let Some(item) = pending.take() {
                cell.items.insert(0, item);
            }
            return true;
        }
        if let Some(pos) = cell.items.iter().position(|i| i.id() == anchor_id) {
            if let Some(item) = pending.take() {
                cell.items.insert(pos, item);
            }
            return true;
        }
        for nested in cell.items.iter_mut() {
            if let Item::Container(inner) = nested {
                if place_item(&mut inner.cells, pending, anchor_id) {
                    return true;
                }
            }
        }
    }
    false
}

fn insert_cell(rows: &mut Vec<Row>, cell: Cell, anchor_id: &str) {
    let mut pending = Some(cell);
    for row in rows.iter_mut() {
        if place_cell(row, &mut pending, anchor_id) {
            return;
        }
    }
    if let Some(cell) = pending {
        rows.push(Row::with_cells(vec![cell]));
    }
}

fn place_cell(row: &mut Row, pending: &mut Option<Cell>, anchor_id: &str) -> bool {
    let target = if row.id == anchor_id {
        Some(row.cells.len())
    } else {
        row.cells
            .iter()
            .position(|c| c.id == anchor_id)
            .map(|pos| pos + 1)
    };
    if let Some(at) = target {
        if row.cells.len() >= MAX_CELLS {
            debug!("row {} is full, cell goes to a new row", row.id);
            return false;
        }
        if let Some(cell) = pending.take() {
            row.cells.insert(at, cell);
        }
        return true;
    }
    for cell in row.cells.iter_mut() {
        for nested in cell.items.iter_mut() {
            if let Item::Container(inner) = nested {
                if place_cell(inner, pending, anchor_id) {
                    return true;
                }
            }
        }
    }
    false
}

/// Applies `edit` to the node `id`, leaving every other node as it was.
pub fn update_node<F>(rows: &[Row], id: &str, edit: F) -> Vec<Row>
where
    F: FnOnce(NodeMut<'_>),
{
    let mut out = rows.to_vec();
    match find_node_mut(&mut out, id) {
        Some(node) => edit(node),
        None => debug!("update of unknown node {} ignored", id),
    }
    out
}

/// Shallow-merges a JSON object of fields into the node `id`.
///
/// `id` and `type` keys are ignored. If the merged fields no longer describe a
/// valid node the rows come back unchanged.
pub fn patch_node(rows: &[Row], id: &str, fields: &Map<String, Value>) -> Vec<Row> {
    let Some(current) = find_node(rows, id).map(|n| n.to_owned_node()) else {
        debug!("patch of unknown node {} ignored", id);
        return rows.to_vec();
    };

    let patched = match &current {
        Node::Row(row) => merge_fields(row, fields).map(Node::Row),
        Node::Cell(cell) => merge_fields(cell, fields).map(Node::Cell),
        Node::Item(item) => merge_fields(item, fields).map(Node::Item),
    };
    let patched = match patched {
        Ok(node) => node,
        Err(e) => {
            warn!("patch of node {} rejected: {}", id, e);
            return rows.to_vec();
        }
    };

    update_node(rows, id, move |slot| match (slot, patched) {
        (NodeMut::Row(slot), Node::Row(new)) => *slot = new,
        (NodeMut::Cell(slot), Node::Cell(new)) => *slot = new,
        (NodeMut::Item(slot), Node::Item(new)) => *slot = new,
        _ => {}
    })
}

fn merge_fields<T>(node: &T, fields: &Map<String, Value>) -> Result<T, serde_json::Error>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let mut value = serde_json::to_value(node)?;
    if let Value::Object(target) = &mut value {
        for (key, field) in fields {
            if key == "id" || key == "type" {
                continue;
            }
            target.insert(key.clone(), field.clone());
        }
    }
    serde_json::from_value(value)
}

fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}

/// Moves `active_id` to the position of `over_id` when both share a container:
/// two top-level rows, two cells of one row, or two items of one cell.
/// Anything else leaves the rows unchanged.
pub fn reorder(rows: &[Row], active_id: &str, over_id: &str) -> Vec<Row> {
    let mut out = rows.to_vec();
    if active_id == over_id {
        return out;
    }

    let from = out.iter().position(|r| r.id == active_id);
    let to = out.iter().position(|r| r.id == over_id);
    if let (Some(from), Some(to)) = (from, to) {
        array_move(&mut out, from, to);
        return out;
    }
    if reorder_cells(&mut out, active_id, over_id) {
        return out;
    }

    let container = find_container_id(&out, active_id);
    if container == ROOT_ID || container != find_container_id(&out, over_id) {
        return out;
    }
    if let Some(NodeMut::Cell(cell)) = find_node_mut(&mut out, &container) {
        let from = cell.items.iter().position(|i| i.id() == active_id);
        let to = cell.items.iter().position(|i| i.id() == over_id);
        if let (Some(from), Some(to)) = (from, to) {
            array_move(&mut cell.items, from, to);
        }
    }
    out
}

fn reorder_cells(rows: &mut [Row], active_id: &str, over_id: &str) -> bool {
    for row in rows.iter_mut() {
        let from = row.cells.iter().position(|c| c.id == active_id);
        let to = row.cells.iter().position(|c| c.id == over_id);
        if let (Some(from), Some(to)) = (from, to) {
            array_move(&mut row.cells, from, to);
            return true;
        }
        for cell in row.cells.iter_mut() {
            for nested in cell.items.iter_mut() {
                if let Item::Container(inner) = nested {
                    if reorder_cells(std::slice::from_mut(inner), active_id, over_id) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Cross-container move: detaches `id` and inserts it relative to `anchor_id`,
/// keeping its id. Unknown `id` leaves the rows unchanged.
pub fn move_node(rows: &[Row], id: &str, anchor_id: &str) -> Vec<Row> {
    if id == anchor_id {
        return rows.to_vec();
    }
    match remove_node(rows, id) {
        (pruned, Some(node)) => insert_node(&pruned, node, anchor_id),
        (pruned, None) => pruned,
    }
}
