//! HTML to tree, the inverse of the generator.
//!
//! The outer table must exist: without one the document is rejected with
//! [`ParseError::NoTable`]. Below it everything degrades: a row without a
//! table is skipped, a cell whose content has no recognizable shape loses
//! that item, and attributes that cannot be read take the factory defaults.

mod classify;
mod dom;
pub mod fonts;

pub use classify::classify;

use crate::error::{ParseError, ParseResult};
use crate::model::document::DEFAULT_MAX_WIDTH;
use crate::model::{
    Cell, CustomFont, Direction, Document, FlexAlign, HAlign, Padding, Row, TableProperties, VAlign,
};
use dom::{attr, attr_px, background, child_table, row_cells, style_of, table_rows};
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BODY_TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body table")
        .expect("BUG: hardcoded selector 'body table' is statically valid")
});

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("BUG: hardcoded selector 'table' is statically valid")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub document: Document,
    pub fonts: Vec<CustomFont>,
}

/// Rebuilds a document and its custom fonts from generated (or hand edited)
/// signature HTML.
pub fn parse(html: &str) -> ParseResult<ParsedDocument> {
    if html.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let page = Html::parse_document(html);
    let fonts = fonts::extract(&page);

    let outer = page
        .select(&BODY_TABLE_SELECTOR)
        .next()
        .or_else(|| page.select(&TABLE_SELECTOR).next())
        .ok_or(ParseError::NoTable)?;

    let style = style_of(outer);
    let max_width = style
        .px("max-width")
        .or_else(|| attr_px(outer, "width"))
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_MAX_WIDTH);
    let table_properties = TableProperties {
        border: style
            .px("border-width")
            .unwrap_or_else(|| style.borders().top),
        cell_spacing: attr_px(outer, "cellspacing").unwrap_or(0),
    };

    let rows: Vec<Row> = table_rows(outer)
        .into_iter()
        .filter_map(|tr| row_cells(tr).into_iter().next())
        .filter_map(parse_row_wrapper)
        .collect();
    debug!("parsed {} rows, {} fonts", rows.len(), fonts.len());

    Ok(ParsedDocument {
        document: Document {
            rows,
            max_width,
            table_properties,
        },
        fonts,
    })
}

/// A row from its wrapping `<td>`: padding on the td, everything else on the
/// table inside it.
pub(crate) fn parse_row_wrapper(td: ElementRef<'_>) -> Option<Row> {
    let Some(table) = child_table(td) else {
        warn!("skipping row without a table: {}", td.inner_html().trim());
        return None;
    };
    let mut row = parse_row_table(table);
    let padding = style_of(td).padding();
    row.padding_top = padding.padding_top.unwrap_or(0);
    row.padding_bottom = padding.padding_bottom.unwrap_or(0);
    Some(row)
}

/// A row from its table: one cell per `<td>` of the first `<tr>`.
pub(crate) fn parse_row_table(table: ElementRef<'_>) -> Row {
    let mut cells: Vec<Cell> = table_rows(table)
        .first()
        .map(|tr| row_cells(*tr).into_iter().map(parse_cell).collect())
        .unwrap_or_default();
    if cells.is_empty() {
        cells.push(Cell::new(0));
    }

    let mut row = Row::with_cells(cells);
    row.borders = style_of(table).borders();
    row.background_color = background(table);
    row
}

fn parse_cell(td: ElementRef<'_>) -> Cell {
    let style = style_of(td);
    let mut cell = Cell::new(
        attr_px(td, "width")
            .or_else(|| style.px("width"))
            .unwrap_or(0),
    );
    cell.height = attr_px(td, "height")
        .or_else(|| style.px("height"))
        .filter(|h| *h > 0);
    cell.v_align = attr(td, "valign")
        .and_then(VAlign::from_attr)
        .unwrap_or_default();
    cell.borders = style.borders();
    cell.padding = style.padding();
    cell.background_color = background(td);

    match child_table(td) {
        Some(table) => fill_items(&mut cell, table),
        None => cell.items.extend(classify(td)),
    }
    cell
}

/// Items of a cell's component table. A single `<tr>` with several `<td>`s is
/// a cell laid out as a row, anything else is one stacked item per `<tr>`.
fn fill_items(cell: &mut Cell, table: ElementRef<'_>) {
    let trs = table_rows(table);
    let first = trs.first().map(|tr| row_cells(*tr)).unwrap_or_default();

    let item_tds: Vec<ElementRef<'_>> = if trs.len() == 1 && first.len() > 1 {
        cell.direction = Direction::Row;
        cell.justify_content = attr(table, "align")
            .and_then(HAlign::from_attr)
            .map(FlexAlign::from_h_align)
            .unwrap_or_default();
        cell.align_items = attr(first[0], "valign")
            .and_then(VAlign::from_attr)
            .map(FlexAlign::from_v_align)
            .unwrap_or_default();
        first
    } else {
        trs.iter()
            .filter_map(|tr| row_cells(*tr).into_iter().next())
            .collect()
    };

    let mut aligned: Vec<(Option<HAlign>, bool)> = Vec::new();
    for td in item_tds {
        let Some(mut item) = classify(td) else {
            continue;
        };
        if let Some(padding) = item.padding_mut() {
            *padding = item_padding(td);
        }
        aligned.push((attr(td, "align").and_then(HAlign::from_attr), item.is_full_width()));
        cell.items.push(item);
    }
    cell.h_align = infer_h_align(&aligned);
}

/// Item padding is written as longhands, zero included.
fn item_padding(td: ElementRef<'_>) -> Padding {
    let style = style_of(td);
    Padding {
        padding_top: style.px("padding-top"),
        padding_right: style.px("padding-right"),
        padding_bottom: style.px("padding-bottom"),
        padding_left: style.px("padding-left"),
    }
}

/// Full-width items are always left aligned, so they only count when nothing
/// else carries an alignment.
fn infer_h_align(aligned: &[(Option<HAlign>, bool)]) -> HAlign {
    aligned
        .iter()
        .find_map(|(align, full_width)| if *full_width { None } else { *align })
        .or_else(|| aligned.iter().find_map(|(align, _)| *align))
        .unwrap_or_default()
}
