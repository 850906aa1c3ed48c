//! Mail merge: field-mapping resolution and bulk rendering.
//!
//! A template item may name a record column for some of its fields
//! (`contentMapping`, `linkMapping`, ...). Resolving copies the rows and
//! substitutes the record's value wherever the column exists; the literal
//! field stays the fallback. The template itself is never modified, so every
//! record starts from the same pristine rows.
//!
//! Only items sitting directly in a top-level row's cells are resolved.
//! Container items are copied as they are.

use crate::html::{self, GenerateOptions, RenderMode};
use crate::model::{BarLink, Button, Cell, CustomFont, Document, Image, Item, LinkBar, Row, Text};
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// One input record: column title to value.
pub type Record = HashMap<String, String>;

/// A copy of `rows` with every mapped field replaced by `record[mapping]`
/// when the record has that column.
pub fn resolve(rows: &[Row], record: &Record) -> Vec<Row> {
    substitute_rows(rows, &|column| record.get(column).cloned())
}

/// A copy of `rows` with every mapped field replaced by a `{{column}}`
/// placeholder, for previewing a template without data.
pub fn preview(rows: &[Row]) -> Vec<Row> {
    substitute_rows(rows, &|column| Some(format!("{{{{{}}}}}", column)))
}

fn substitute_rows<F>(rows: &[Row], lookup: &F) -> Vec<Row>
where
    F: Fn(&str) -> Option<String>,
{
    rows.iter()
        .map(|row| Row {
            id: row.id.clone(),
            cells: row.cells.iter().map(|cell| substitute_cell(cell, lookup)).collect(),
            borders: row.borders.clone(),
            padding_top: row.padding_top,
            padding_bottom: row.padding_bottom,
            background_color: row.background_color.clone(),
            display_name: row.display_name.clone(),
        })
        .collect()
}

fn substitute_cell<F>(cell: &Cell, lookup: &F) -> Cell
where
    F: Fn(&str) -> Option<String>,
{
    Cell {
        id: cell.id.clone(),
        width: cell.width,
        height: cell.height,
        v_align: cell.v_align,
        h_align: cell.h_align,
        direction: cell.direction,
        justify_content: cell.justify_content,
        align_items: cell.align_items,
        borders: cell.borders.clone(),
        padding: cell.padding,
        background_color: cell.background_color.clone(),
        items: cell.items.iter().map(|item| substitute_item(item, lookup)).collect(),
    }
}

fn mapped<F>(mapping: &Option<String>, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    mapping
        .as_deref()
        .filter(|column| !column.is_empty())
        .and_then(lookup)
}

fn substitute_item<F>(item: &Item, lookup: &F) -> Item
where
    F: Fn(&str) -> Option<String>,
{
    match item {
        Item::Text(text) => Item::Text(Text {
            content: mapped(&text.content_mapping, lookup).unwrap_or_else(|| text.content.clone()),
            link: mapped(&text.link_mapping, lookup).or_else(|| text.link.clone()),
            ..text.clone()
        }),
        Item::Image(image) => Item::Image(Image {
            src: mapped(&image.src_mapping, lookup).unwrap_or_else(|| image.src.clone()),
            link: mapped(&image.link_mapping, lookup).or_else(|| image.link.clone()),
            ..image.clone()
        }),
        Item::Button(button) => Item::Button(Button {
            text: mapped(&button.text_mapping, lookup).unwrap_or_else(|| button.text.clone()),
            link: mapped(&button.link_mapping, lookup).or_else(|| button.link.clone()),
            ..button.clone()
        }),
        Item::Socials(bar) => Item::Socials(substitute_bar(bar, lookup)),
        Item::Icons(bar) => Item::Icons(substitute_bar(bar, lookup)),
        Item::Spacer(_) | Item::Divider(_) => item.clone(),
        Item::Container(_) => item.clone(),
    }
}

fn substitute_bar<F>(bar: &LinkBar, lookup: &F) -> LinkBar
where
    F: Fn(&str) -> Option<String>,
{
    LinkBar {
        links: bar
            .links
            .iter()
            .map(|link| BarLink {
                url: mapped(&link.url_mapping, lookup).unwrap_or_else(|| link.url.clone()),
                label: mapped(&link.label_mapping, lookup).or_else(|| link.label.clone()),
                ..link.clone()
            })
            .collect(),
        ..bar.clone()
    }
}

/// Resolves `document` against one record and renders it.
///
/// The placeholder mode of `options` is ignored: a resolved document always
/// renders its literal values.
pub fn render_record(
    document: &Document,
    fonts: &[CustomFont],
    record: &Record,
    options: &GenerateOptions,
) -> String {
    let rows = resolve(&document.rows, record);
    let options = GenerateOptions {
        mode: RenderMode::Literal,
        ..*options
    };
    html::generate(
        &rows,
        document.max_width,
        &document.table_properties,
        fonts,
        &options,
    )
}

/// Renders one document per record. `result[i]` always belongs to
/// `records[i]`, whatever order the workers finish in.
pub fn render_all(
    document: &Document,
    fonts: &[CustomFont],
    records: &[Record],
    options: &GenerateOptions,
) -> Vec<String> {
    debug!("rendering {} records", records.len());
    records
        .par_iter()
        .map(|record| render_record(document, fonts, record, options))
        .collect()
}
