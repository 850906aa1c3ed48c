//! Construction of fresh nodes with their documented defaults.
//!
//! Every node built here gets a new id. The parser falls back to the same
//! defaults whenever a field cannot be recovered from HTML.

use crate::model::item::{Button, Divider, Image, Item, LinkBar, Spacer, Text};
use crate::model::layout::{Cell, Row};
use serde::{Deserialize, Serialize};

/// Cell count of a freshly created row.
pub const DEFAULT_ROW_CELLS: usize = 2;

/// Item kinds offered by the editor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Text,
    Image,
    Socials,
    Icons,
    Spacer,
    Divider,
    Button,
    Container,
}

/// Equal share of `max_width` for `count` cells separated by `cell_spacing`.
///
/// `floor((max_width - (count - 1) * cell_spacing) / count)`, saturating at 0.
pub fn cell_width(max_width: u32, cell_spacing: u32, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let count = count as u32;
    let gaps = (count - 1).saturating_mul(cell_spacing);
    max_width.saturating_sub(gaps) / count
}

/// A new row with [`DEFAULT_ROW_CELLS`] equally sized empty cells.
pub fn new_row(max_width: u32, cell_spacing: u32) -> Row {
    new_row_with_cells(DEFAULT_ROW_CELLS, max_width, cell_spacing)
}

pub fn new_row_with_cells(count: usize, max_width: u32, cell_spacing: u32) -> Row {
    let width = cell_width(max_width, cell_spacing, count);
    Row::with_cells((0..count).map(|_| Cell::new(width)).collect())
}

/// A container: a row restricted to a single auto-width cell.
pub fn new_container() -> Row {
    Row::with_cells(vec![Cell::new(0)])
}

pub fn new_item(kind: ItemKind) -> Item {
    match kind {
        ItemKind::Text => Item::Text(Text::default()),
        ItemKind::Image => Item::Image(Image::default()),
        ItemKind::Socials => Item::Socials(LinkBar::default()),
        ItemKind::Icons => Item::Icons(LinkBar::default()),
        ItemKind::Spacer => Item::Spacer(Spacer::default()),
        ItemKind::Divider => Item::Divider(Divider::default()),
        ItemKind::Button => Item::Button(Button::default()),
        ItemKind::Container => Item::Container(new_container()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_splits_width_between_two_cells() {
        let row = new_row(600, 10);
        assert_eq!(row.cells.len(), 2);
        assert!(row.cells.iter().all(|c| c.width == 295));
        assert!(row.borders.is_empty());
        assert_eq!((row.padding_top, row.padding_bottom), (0, 0));
    }

    #[test]
    fn cell_width_floors_and_saturates() {
        assert_eq!(cell_width(600, 10, 3), 193);
        assert_eq!(cell_width(10, 20, 3), 0);
        assert_eq!(cell_width(600, 0, 0), 0);
    }

    #[test]
    fn items_get_distinct_ids() {
        let a = new_item(ItemKind::Text);
        let b = new_item(ItemKind::Text);
        assert_ne!(a.id(), b.id());
    }
}
