//! Tree to HTML.
//!
//! Layout is nested tables only: the outer table holds one `<tr><td>` per row,
//! each wrapping a full-width row table with one `<td>` per cell. A cell holds
//! a component table with one item per `<tr>` (stacked cells) or one item per
//! `<td>` of a single `<tr>` (cells laid out as a row).
//!
//! Output is a pure function of its input: the same tree, fonts and options
//! always give byte-identical HTML.

use crate::html::entities::{encode_text, escape_attr, text_content};
use crate::html::style::{background_declaration, border_declarations};
use crate::html::{icons, GenerateOptions, RenderMode};
use crate::merge;
use crate::model::{
    BarLayout, BarLink, Button, Cell, CustomFont, Direction, Divider, Document, FontSource,
    HAlign, Image, Item, LinkBar, Padding, Row, Spacer, TableProperties, Text,
};

const TABLE_RESET: &str = r#"cellpadding="0" cellspacing="0" border="0""#;

/// Renders `rows` as one HTML fragment, prefixed by a `<style>` block when
/// `fonts` is not empty.
pub fn generate(
    rows: &[Row],
    max_width: u32,
    table: &TableProperties,
    fonts: &[CustomFont],
    options: &GenerateOptions,
) -> String {
    let placeholders;
    let rows = match options.mode {
        RenderMode::Preview => {
            placeholders = merge::preview(rows);
            placeholders.as_slice()
        }
        RenderMode::Literal => rows,
    };

    let mut outer = vec![format!("max-width: {}px", max_width), "width: 100%".to_string()];
    if table.border > 0 {
        outer.push(format!("border: {}px solid #000000", table.border));
    }

    let mut html = font_styles(fonts);
    html.push_str(&format!(
        r#"<table cellpadding="0" cellspacing="{}" border="0"{}>"#,
        table.cell_spacing,
        style_attr(&outer)
    ));
    for row in rows {
        html.push_str("<tr>");
        html.push_str(&row_block(row, options));
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

pub fn generate_document(
    document: &Document,
    fonts: &[CustomFont],
    options: &GenerateOptions,
) -> String {
    generate(
        &document.rows,
        document.max_width,
        &document.table_properties,
        fonts,
        options,
    )
}

fn font_styles(fonts: &[CustomFont]) -> String {
    if fonts.is_empty() {
        return String::new();
    }
    let mut css = String::from("<style>\n");
    for font in fonts {
        let rule = match (font.source, &font.raw_css) {
            (FontSource::Google, _) => format!("@import url('{}');", font.url),
            (FontSource::Url, Some(raw)) => raw.clone(),
            (FontSource::Url, None) => format!(
                "@font-face {{ font-family: '{}'; src: url('{}'); }}",
                font.name, font.url
            ),
        };
        css.push_str(&rule);
        css.push('\n');
    }
    css.push_str("</style>");
    css
}

fn style_attr(declarations: &[String]) -> String {
    if declarations.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, escape_attr(&declarations.join("; ")))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// The `<td>` wrapping a row: row padding outside, borders and background on
/// the row table inside.
fn row_block(row: &Row, options: &GenerateOptions) -> String {
    let wrapper = vec![
        format!("padding-top: {}px", row.padding_top),
        format!("padding-bottom: {}px", row.padding_bottom),
    ];
    let mut css = border_declarations(&row.borders);
    if let Some(background) = non_empty(&row.background_color) {
        css.push(background_declaration(background));
    }

    let cells: String = row.cells.iter().map(|cell| cell_block(cell, options)).collect();
    format!(
        r#"<td{}><table width="100%" {}{}><tr>{}</tr></table></td>"#,
        style_attr(&wrapper),
        TABLE_RESET,
        style_attr(&css),
        cells
    )
}

fn cell_block(cell: &Cell, options: &GenerateOptions) -> String {
    let mut attrs = String::new();
    if cell.width > 0 {
        attrs.push_str(&format!(r#" width="{}""#, cell.width));
    }
    if let Some(height) = cell.height.filter(|h| *h > 0) {
        attrs.push_str(&format!(r#" height="{}""#, height));
    }
    attrs.push_str(&format!(r#" valign="{}""#, cell.v_align.as_str()));

    let mut css = border_declarations(&cell.borders);
    let sides = cell.padding.sides().map(|side| side.unwrap_or(0));
    if sides.iter().any(|side| *side > 0) {
        css.push(format!(
            "padding: {}px {}px {}px {}px",
            sides[0], sides[1], sides[2], sides[3]
        ));
    }
    if let Some(background) = non_empty(&cell.background_color) {
        css.push(background_declaration(background));
    }

    format!(
        "<td{}{}>{}</td>",
        attrs,
        style_attr(&css),
        component_table(cell, options)
    )
}

fn item_align(item: &Item, cell: &Cell) -> HAlign {
    if item.is_full_width() {
        HAlign::Left
    } else {
        cell.h_align
    }
}

fn item_padding(item: &Item) -> Vec<String> {
    let Some(padding) = item.padding() else {
        return Vec::new();
    };
    let Padding {
        padding_top,
        padding_right,
        padding_bottom,
        padding_left,
    } = *padding;
    [
        ("padding-top", padding_top),
        ("padding-right", padding_right),
        ("padding-bottom", padding_bottom),
        ("padding-left", padding_left),
    ]
    .iter()
    .filter_map(|(name, side)| side.map(|px| format!("{}: {}px", name, px)))
    .collect()
}

fn component_table(cell: &Cell, options: &GenerateOptions) -> String {
    if cell.items.is_empty() {
        return String::new();
    }
    match cell.direction {
        Direction::Column => {
            let rows: String = cell
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<tr><td align="{}"{}>{}</td></tr>"#,
                        item_align(item, cell).as_str(),
                        style_attr(&item_padding(item)),
                        render_item(item, options)
                    )
                })
                .collect();
            format!(r#"<table width="100%" {}>{}</table>"#, TABLE_RESET, rows)
        }
        Direction::Row => {
            let tds: String = cell
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<td align="{}" valign="{}"{}>{}</td>"#,
                        item_align(item, cell).as_str(),
                        cell.align_items.as_v_align().as_str(),
                        style_attr(&item_padding(item)),
                        render_item(item, options)
                    )
                })
                .collect();
            format!(
                r#"<table {} align="{}"><tr>{}</tr></table>"#,
                TABLE_RESET,
                cell.justify_content.as_h_align().as_str(),
                tds
            )
        }
    }
}

fn render_item(item: &Item, options: &GenerateOptions) -> String {
    match item {
        Item::Text(text) => render_text(text, options),
        Item::Image(image) => render_image(image, options),
        Item::Socials(bar) => render_link_bar(bar, "socials", options),
        Item::Icons(bar) => render_link_bar(bar, "icons", options),
        Item::Spacer(spacer) => render_spacer(spacer),
        Item::Divider(divider) => render_divider(divider),
        Item::Button(button) => render_button(button, options),
        Item::Container(row) => format!(
            r#"<table width="100%" {}><tr>{}</tr></table>"#,
            TABLE_RESET,
            row_block(row, options)
        ),
    }
}

/// `tel:` plus the `+` and digits of `link`, or `link` itself.
pub(crate) fn href(link: &str, as_tel: bool) -> String {
    if as_tel {
        let number: String = link
            .chars()
            .filter(|c| *c == '+' || c.is_ascii_digit())
            .collect();
        format!("tel:{}", number)
    } else {
        link.to_string()
    }
}

fn editable_attr(options: &GenerateOptions) -> &'static str {
    if options.editable {
        r#" contenteditable="true""#
    } else {
        ""
    }
}

fn click_guard(options: &GenerateOptions) -> &'static str {
    if options.editable {
        r#" onclick="return false;""#
    } else {
        ""
    }
}

fn wrap_link(
    inner: String,
    link: Option<&str>,
    as_tel: bool,
    options: &GenerateOptions,
) -> String {
    match link {
        Some(link) => format!(
            r#"<a href="{}" target="_blank" style="text-decoration: none; color: inherit"{}>{}</a>"#,
            escape_attr(&href(link, as_tel)),
            click_guard(options),
            inner
        ),
        None => inner,
    }
}

fn render_text(text: &Text, options: &GenerateOptions) -> String {
    let css = vec![
        format!("font-family: {}", text.font_family),
        format!("font-size: {}px", text.font_size),
        format!("font-weight: {}", text.font_weight),
        format!("color: {}", text.color),
        format!("line-height: {}", text.line_height),
    ];
    let div = format!(
        "<div{}{}>{}</div>",
        style_attr(&css),
        editable_attr(options),
        text_content(&text.content)
    );
    wrap_link(div, non_empty(&text.link), text.format_link_as_tel, options)
}

fn render_image(image: &Image, options: &GenerateOptions) -> String {
    let mut img = format!(
        r#"<img src="{}" alt="{}" width="{}""#,
        escape_attr(&image.src),
        escape_attr(&image.alt),
        image.width
    );
    if let Some(height) = image.height.filter(|h| *h > 0) {
        img.push_str(&format!(r#" height="{}""#, height));
    }
    img.push_str(r#" border="0""#);
    if image.border_radius > 0 {
        img.push_str(&format!(
            r#" style="border-radius: {}px""#,
            image.border_radius
        ));
    }
    img.push('>');
    wrap_link(img, non_empty(&image.link), image.format_link_as_tel, options)
}

fn render_bar_link(bar: &LinkBar, link: &BarLink, last: bool, options: &GenerateOptions) -> String {
    let vertical = bar.layout == BarLayout::Vertical;
    let mut css = vec![
        format!("display: {}", if vertical { "block" } else { "inline-block" }),
        "text-decoration: none".to_string(),
    ];
    if !last {
        let side = if vertical { "margin-bottom" } else { "margin-right" };
        css.push(format!("{}: {}px", side, bar.gap));
    }

    let icon = match (&link.custom_icon_url, link.is_custom()) {
        (Some(url), true) => format!(
            r#"<img src="{}" width="{size}" height="{size}" alt="{}" border="0" style="display: inline-block; vertical-align: middle">"#,
            escape_attr(url),
            escape_attr(link.label.as_deref().unwrap_or("custom")),
            size = bar.icon_size
        ),
        _ => icons::svg(&link.icon, &bar.icon_color, bar.icon_size),
    };
    let label = match non_empty(&link.label) {
        Some(label) => {
            let label_css = vec![
                "display: inline-block".to_string(),
                "vertical-align: middle".to_string(),
                format!("margin-left: {}px", bar.label_gap),
                format!("color: {}", bar.label_color),
                format!("font-size: {}px", bar.label_font_size),
                format!("font-family: {}", bar.font_family),
            ];
            format!(
                "<span{}{}>{}</span>",
                style_attr(&label_css),
                editable_attr(options),
                encode_text(label)
            )
        }
        None => String::new(),
    };

    format!(
        r#"<a href="{}" target="_blank"{}{}>{}{}</a>"#,
        escape_attr(&href(&link.url, link.format_link_as_tel)),
        style_attr(&css),
        click_guard(options),
        icon,
        label
    )
}

/// `kind` is written to `data-bar` so the parser can tell socials from icons.
fn render_link_bar(bar: &LinkBar, kind: &str, options: &GenerateOptions) -> String {
    let count = bar.links.len();
    let anchors: Vec<String> = bar
        .links
        .iter()
        .enumerate()
        .map(|(index, link)| render_bar_link(bar, link, index + 1 == count, options))
        .collect();
    let separator = match bar.layout {
        BarLayout::Horizontal => "&nbsp;&nbsp;",
        BarLayout::Vertical => "",
    };
    format!(
        r#"<div{} data-bar="{}">{}</div>"#,
        style_attr(&[format!("font-family: {}", bar.font_family)]),
        kind,
        anchors.join(separator)
    )
}

fn render_spacer(spacer: &Spacer) -> String {
    let h = spacer.height;
    format!(
        r#"<div style="height: {h}px; line-height: {h}px; font-size: {h}px">&nbsp;</div>"#,
        h = h
    )
}

fn render_divider(divider: &Divider) -> String {
    let css = vec![
        format!("width: {}{}", divider.width, divider.width_unit.as_str()),
        format!("height: {}px", divider.height),
        format!("line-height: {}px", divider.height),
        "font-size: 1px".to_string(),
        background_declaration(&divider.color),
    ];
    format!("<div{}>&nbsp;</div>", style_attr(&css))
}

fn render_button(button: &Button, options: &GenerateOptions) -> String {
    let css = vec![
        "display: inline-block".to_string(),
        background_declaration(&button.background_color),
        format!("color: {}", button.text_color),
        format!("font-family: {}", button.font_family),
        format!("font-size: {}px", button.font_size),
        format!("font-weight: {}", button.font_weight),
        "text-decoration: none".to_string(),
        format!(
            "padding: {}px {}px",
            button.inner_padding_y, button.inner_padding_x
        ),
        format!("border-radius: {}px", button.border_radius),
    ];
    let href_attr = match non_empty(&button.link) {
        Some(link) => format!(
            r#" href="{}" target="_blank""#,
            escape_attr(&href(link, button.format_link_as_tel))
        ),
        None => String::new(),
    };
    format!(
        "<a{}{}{}{}>{}</a>",
        href_attr,
        style_attr(&css),
        editable_attr(options),
        click_guard(options),
        encode_text(&button.text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_keeps_plus_and_digits() {
        assert_eq!(href("+1 (234) 567-8901", true), "tel:+12345678901");
        assert_eq!(href("https://a.b", false), "https://a.b");
    }

    #[test]
    fn auto_cells_have_no_width() {
        let cell = Cell::new(0);
        let html = cell_block(&cell, &GenerateOptions::default());
        assert!(!html.contains("width"));
        assert!(html.starts_with(r#"<td valign="top">"#));
    }

    #[test]
    fn unset_padding_is_not_emitted() {
        let mut cell = Cell::new(200);
        assert!(!cell_block(&cell, &GenerateOptions::default()).contains("padding"));
        cell.padding.padding_left = Some(4);
        assert!(cell_block(&cell, &GenerateOptions::default())
            .contains("padding: 0px 0px 0px 4px"));
    }

    #[test]
    fn google_and_url_fonts_get_their_own_rules() {
        let mut custom = CustomFont::url("Brand", "https://cdn.example/brand.woff2");
        let fonts = vec![
            CustomFont::google("Open Sans", "https://fonts.googleapis.com/css2?family=Open+Sans"),
            custom.clone(),
        ];
        let css = font_styles(&fonts);
        assert!(css.contains("@import url('https://fonts.googleapis.com/css2?family=Open+Sans');"));
        assert!(css.contains("@font-face { font-family: 'Brand'; src: url('https://cdn.example/brand.woff2'); }"));

        custom.raw_css = Some("@font-face{font-family:Brand;src:url(a.woff)}".to_string());
        assert_eq!(
            font_styles(&[custom]),
            "<style>\n@font-face{font-family:Brand;src:url(a.woff)}\n</style>"
        );
    }
}
