#![allow(dead_code)]

use common::model::{Cell, Item, Row, Text};

pub fn text(id: &str, content: &str) -> Item {
    Item::Text(Text {
        id: id.to_string(),
        content: content.to_string(),
        ..Text::default()
    })
}

pub fn cell(id: &str, items: Vec<Item>) -> Cell {
    let mut cell = Cell::new(0).with_items(items);
    cell.id = id.to_string();
    cell
}

pub fn row(id: &str, cells: Vec<Cell>) -> Row {
    let mut row = Row::with_cells(cells);
    row.id = id.to_string();
    row
}

/// r1[c1[a, b], c2[c]], r2[c3[inner[ic[d]]]]
pub fn fixture() -> Vec<Row> {
    let inner = row("inner", vec![cell("ic", vec![text("d", "D")])]);
    vec![
        row(
            "r1",
            vec![
                cell("c1", vec![text("a", "A"), text("b", "B")]),
                cell("c2", vec![text("c", "C")]),
            ],
        ),
        row("r2", vec![cell("c3", vec![Item::Container(inner)])]),
    ]
}

pub fn item_ids(cell: &Cell) -> Vec<&str> {
    cell.items.iter().map(Item::id).collect()
}

/// Blanks every id so trees built independently can be compared.
pub fn strip_ids(rows: &[Row]) -> Vec<Row> {
    rows.iter().map(strip_row).collect()
}

fn strip_row(row: &Row) -> Row {
    let mut row = row.clone();
    row.id.clear();
    row.cells = row
        .cells
        .iter()
        .map(|c| {
            let mut c = c.clone();
            c.id.clear();
            c.items = c.items.iter().map(strip_item).collect();
            c
        })
        .collect();
    row
}

fn strip_item(item: &Item) -> Item {
    let mut item = item.clone();
    match &mut item {
        Item::Text(t) => t.id.clear(),
        Item::Image(i) => i.id.clear(),
        Item::Socials(b) | Item::Icons(b) => b.id.clear(),
        Item::Spacer(s) => s.id.clear(),
        Item::Divider(d) => d.id.clear(),
        Item::Button(b) => b.id.clear(),
        Item::Container(r) => *r = strip_row(r),
    }
    item
}

/// Visible text of an HTML fragment with tags removed.
pub fn strip_tags(html: &str) -> String {
    let tags = regex::Regex::new(r"<[^>]*>").unwrap();
    tags.replace_all(html, "").trim().to_string()
}
