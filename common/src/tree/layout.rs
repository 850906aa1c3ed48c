use crate::model::factory::cell_width;
use crate::model::layout::{MAX_CELLS, MIN_RESIZE_CELLS};
use crate::model::{Cell, Row};
use log::debug;

/// Returns `row` resized to `count` cells (clamped to `MIN_RESIZE_CELLS..=MAX_CELLS`) with the
/// width shared equally between them.
///
/// Growing appends empty cells. Shrinking drops empty cells from the end
/// first and only then the trailing cells, content included.
pub fn set_cell_count(row: &Row, count: usize, max_width: u32, cell_spacing: u32) -> Row {
    let count = count.clamp(MIN_RESIZE_CELLS, MAX_CELLS);
    let mut out = row.clone();

    while out.cells.len() < count {
        out.cells.push(Cell::new(0));
    }
    while out.cells.len() > count {
        match out.cells.iter().rposition(|c| c.items.is_empty()) {
            Some(pos) => {
                out.cells.remove(pos);
            }
            None => {
                if let Some(dropped) = out.cells.pop() {
                    debug!("dropping cell {} with {} items", dropped.id, dropped.items.len());
                }
            }
        }
    }

    let width = cell_width(max_width, cell_spacing, count);
    for cell in out.cells.iter_mut() {
        cell.width = width;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::factory::{new_item, new_row, ItemKind};

    #[test]
    fn growing_to_three_redistributes_width() {
        let row = set_cell_count(&new_row(600, 10), 3, 600, 10);
        let widths: Vec<u32> = row.cells.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![193, 193, 193]);
        assert!(580 - widths.iter().sum::<u32>() <= 2);
    }

    #[test]
    fn shrinking_prefers_empty_cells() {
        let mut row = set_cell_count(&new_row(600, 0), 3, 600, 0);
        row.cells[2].items.push(new_item(ItemKind::Text));
        let first = row.cells[0].id.clone();
        let kept = row.cells[2].id.clone();

        let shrunk = set_cell_count(&row, 2, 600, 0);
        let ids: Vec<&str> = shrunk.cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), kept.as_str()]);
        assert_eq!(shrunk.cells[1].width, 300);
    }

    #[test]
    fn shrinking_full_cells_drops_the_last() {
        let mut row = set_cell_count(&new_row(600, 0), 3, 600, 0);
        for cell in row.cells.iter_mut() {
            cell.items.push(new_item(ItemKind::Spacer));
        }
        let kept: Vec<String> = row.cells[..2].iter().map(|c| c.id.clone()).collect();
        let shrunk = set_cell_count(&row, 2, 600, 0);
        let ids: Vec<String> = shrunk.cells.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, kept);
    }

    #[test]
    fn count_is_clamped() {
        let row = set_cell_count(&new_row(600, 0), 4, 600, 0);
        assert_eq!(set_cell_count(&row, 0, 600, 0).cells.len(), MIN_RESIZE_CELLS);
        assert_eq!(set_cell_count(&row, 1, 600, 0).cells.len(), MIN_RESIZE_CELLS);
        assert_eq!(set_cell_count(&row, 42, 600, 0).cells.len(), MAX_CELLS);
    }
}
