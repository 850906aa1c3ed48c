//! Structural edits over a forest of rows.
//!
//! Rows, cells and items share one id space. Every operation takes the
//! current rows by reference and hands back new rows; the input is never
//! touched. Unknown ids are not errors: lookups return `None` and edits leave
//! the tree as it was, so a drag that races a deletion simply does nothing.
//!
//! A container item (`Item::Container`) is a row living inside a cell. It is
//! addressed as an item of that cell, and its own cells and items are
//! searched like any other.

mod edit;
mod layout;

pub use edit::{insert_node, move_node, patch_node, remove_node, reorder, update_node};
pub use layout::set_cell_count;

use crate::model::{Cell, Item, Row};

/// Container id reported for top-level rows and for unknown ids.
pub const ROOT_ID: &str = "root";

/// A detached subtree, as returned by [`remove_node`] and accepted by [`insert_node`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Row(Row),
    Cell(Cell),
    Item(Item),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Row(r) => &r.id,
            Node::Cell(c) => &c.id,
            Node::Item(i) => i.id(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Row(&'a Row),
    Cell(&'a Cell),
    Item(&'a Item),
}

impl NodeRef<'_> {
    pub fn id(&self) -> &str {
        match self {
            NodeRef::Row(r) => &r.id,
            NodeRef::Cell(c) => &c.id,
            NodeRef::Item(i) => i.id(),
        }
    }

    pub fn to_owned_node(&self) -> Node {
        match *self {
            NodeRef::Row(r) => Node::Row(r.clone()),
            NodeRef::Cell(c) => Node::Cell(c.clone()),
            NodeRef::Item(i) => Node::Item(i.clone()),
        }
    }
}

#[derive(Debug)]
pub enum NodeMut<'a> {
    Row(&'a mut Row),
    Cell(&'a mut Cell),
    Item(&'a mut Item),
}

/// Depth-first lookup across rows, cells and items.
pub fn find_node<'a>(rows: &'a [Row], id: &str) -> Option<NodeRef<'a>> {
    rows.iter().find_map(|row| {
        if row.id == id {
            Some(NodeRef::Row(row))
        } else {
            find_in_cells(&row.cells, id)
        }
    })
}

fn find_in_cells<'a>(cells: &'a [Cell], id: &str) -> Option<NodeRef<'a>> {
    for cell in cells {
        if cell.id == id {
            return Some(NodeRef::Cell(cell));
        }
        for item in &cell.items {
            if item.id() == id {
                return Some(NodeRef::Item(item));
            }
            if let Item::Container(inner) = item {
                if let Some(found) = find_in_cells(&inner.cells, id) {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// Id of the node that owns `id`.
///
/// Top-level rows belong to [`ROOT_ID`]. Items belong to their cell. A cell
/// reports itself, which is what drop targets expect. Unknown ids fall back
/// to [`ROOT_ID`].
pub fn find_container_id(rows: &[Row], id: &str) -> String {
    for row in rows {
        if row.id == id {
            return ROOT_ID.to_string();
        }
        if let Some(container) = container_in_cells(&row.cells, id) {
            return container;
        }
    }
    ROOT_ID.to_string()
}

fn container_in_cells(cells: &[Cell], id: &str) -> Option<String> {
    for cell in cells {
        if cell.id == id {
            return Some(cell.id.clone());
        }
        for item in &cell.items {
            if item.id() == id {
                return Some(cell.id.clone());
            }
            if let Item::Container(inner) = item {
                if let Some(found) = container_in_cells(&inner.cells, id) {
                    return Some(found);
                }
            }
        }
    }
    None
}

pub(crate) fn find_node_mut<'a>(rows: &'a mut [Row], id: &str) -> Option<NodeMut<'a>> {
    for row in rows.iter_mut() {
        if row.id == id {
            return Some(NodeMut::Row(row));
        }
        if let Some(found) = find_in_cells_mut(&mut row.cells, id) {
            return Some(found);
        }
    }
    None
}

fn find_in_cells_mut<'a>(cells: &'a mut [Cell], id: &str) -> Option<NodeMut<'a>> {
    for cell in cells.iter_mut() {
        if cell.id == id {
            return Some(NodeMut::Cell(cell));
        }
        for item in cell.items.iter_mut() {
            if item.id() == id {
                return Some(NodeMut::Item(item));
            }
            if let Item::Container(inner) = item {
                if let Some(found) = find_in_cells_mut(&mut inner.cells, id) {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// Every id in `rows`, in depth-first order.
pub fn collect_ids(rows: &[Row]) -> Vec<String> {
    let mut ids = Vec::new();
    for row in rows {
        collect_row_ids(row, &mut ids);
    }
    ids
}

pub(crate) fn collect_node_ids(node: &Node) -> Vec<String> {
    let mut ids = Vec::new();
    match node {
        Node::Row(row) => collect_row_ids(row, &mut ids),
        Node::Cell(cell) => collect_cell_ids(cell, &mut ids),
        Node::Item(item) => collect_item_ids(item, &mut ids),
    }
    ids
}

fn collect_row_ids(row: &Row, ids: &mut Vec<String>) {
    ids.push(row.id.clone());
    for cell in &row.cells {
        collect_cell_ids(cell, ids);
    }
}

fn collect_cell_ids(cell: &Cell, ids: &mut Vec<String>) {
    ids.push(cell.id.clone());
    for item in &cell.items {
        collect_item_ids(item, ids);
    }
}

fn collect_item_ids(item: &Item, ids: &mut Vec<String>) {
    match item {
        Item::Container(inner) => collect_row_ids(inner, ids),
        other => ids.push(other.id().to_string()),
    }
}
