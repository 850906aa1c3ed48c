//! Item recognition for one component `<td>`.
//!
//! The generated markup is not annotated with item types, so the parser
//! recognizes items by shape. The classifiers below are tried in the order of
//! [`CLASSIFIERS`] and the first match wins; several shapes overlap (a button
//! is also an anchor with text, a linked image is also an anchor), so the
//! order is part of the contract. Content matching none of them is dropped.

use super::dom::{
    attr, attr_px, background, child_table, children, descendants, first_child, has_descendant,
    is, link_of, style_of, table_rows, row_cells, text_of,
};
use crate::html::icons::is_contact_icon;
use crate::html::style::box_sides;
use crate::model::coerce::parse_px_opt;
use crate::model::{
    BarLayout, BarLink, Button, Divider, Image, Item, LinkBar, Spacer, Text, WidthUnit,
};
use log::{debug, warn};
use scraper::ElementRef;

pub(crate) type Classifier = fn(ElementRef<'_>) -> Option<Item>;

/// Recognizers in priority order.
pub(crate) const CLASSIFIERS: &[(&str, Classifier)] = &[
    ("container", container),
    ("button", button),
    ("text", text),
    ("link bar", link_bar),
    ("image", image),
    ("divider", divider),
    ("spacer", spacer),
];

const ICON_TAGS: &[&str] = &["img", "svg"];

/// The item held by `td`, or `None` when its content has no recognizable shape.
pub fn classify(td: ElementRef<'_>) -> Option<Item> {
    for (kind, classifier) in CLASSIFIERS {
        if let Some(item) = classifier(td) {
            debug!("component cell classified as {}", kind);
            return Some(item);
        }
    }
    if first_child(td).is_some() {
        warn!("dropping unrecognized cell content: {}", td.inner_html().trim());
    }
    None
}

/// A nested table that is neither a divider nor a link bar in table form.
fn container(td: ElementRef<'_>) -> Option<Item> {
    let table = descendants(td, &["table"]).next()?;
    if is_divider_table(table) || is_link_bar_table(table) {
        return None;
    }
    let wrapped = table_rows(table)
        .first()
        .and_then(|tr| row_cells(*tr).into_iter().next())
        .filter(|inner| child_table(*inner).is_some());
    let row = match wrapped {
        Some(inner) => super::parse_row_wrapper(inner)?,
        None => super::parse_row_table(table),
    };
    Some(Item::Container(row))
}

fn is_divider_table(table: ElementRef<'_>) -> bool {
    text_of(table).is_empty()
        && !has_descendant(table, &["table", "img", "svg"])
        && descendants(table, &["td", "div"]).any(is_painted_rule)
}

fn is_link_bar_table(table: ElementRef<'_>) -> bool {
    !has_descendant(table, &["table"]) && icon_anchors(table).next().is_some()
}

fn icon_anchors(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    descendants(el, &["a"]).filter(|a| has_descendant(*a, ICON_TAGS))
}

fn height_of(el: ElementRef<'_>) -> Option<u32> {
    style_of(el).px("height").or_else(|| attr_px(el, "height"))
}

/// An anchor or div painted with a background and carrying text.
fn button(td: ElementRef<'_>) -> Option<Item> {
    let el = first_child(td).filter(|el| is(*el, "a") || is(*el, "div"))?;
    let fill = background(el)?;
    let label = text_of(el);
    if label.is_empty() || has_descendant(el, ICON_TAGS) {
        return None;
    }

    let style = style_of(el);
    let defaults = Button::default();
    let (link, format_link_as_tel) = if is(el, "a") { link_of(el) } else { (None, false) };
    let [pad_y, pad_x, _, _] = style.get("padding").map(box_sides).unwrap_or([None; 4]);
    Some(Item::Button(Button {
        text: label,
        link,
        format_link_as_tel,
        background_color: fill,
        text_color: style.get("color").map(str::to_string).unwrap_or(defaults.text_color),
        font_size: style.px("font-size").unwrap_or(defaults.font_size),
        font_weight: style.get("font-weight").map(str::to_string).unwrap_or(defaults.font_weight),
        font_family: style.get("font-family").map(str::to_string).unwrap_or(defaults.font_family),
        border_radius: style.px("border-radius").unwrap_or(defaults.border_radius),
        inner_padding_x: pad_x.unwrap_or(defaults.inner_padding_x),
        inner_padding_y: pad_y.unwrap_or(defaults.inner_padding_y),
        ..defaults
    }))
}

/// Text held directly by the cell, or by a div or anchor. Inline images are
/// part of the text unless they sit inside anchors of their own.
fn text(td: ElementRef<'_>) -> Option<Item> {
    let Some(el) = first_child(td) else {
        let content = text_of(td);
        return (!content.is_empty()).then(|| {
            Item::Text(Text {
                content,
                ..Text::default()
            })
        });
    };
    if !(is(el, "div") || is(el, "a")) || text_of(el).is_empty() {
        return None;
    }
    // labelled link bars carry text too
    if icon_anchors(el).next().is_some() {
        return None;
    }

    let (link, format_link_as_tel) = if is(el, "a") { link_of(el) } else { (None, false) };
    let styled = if is(el, "a") {
        children(el).find(|c| is(*c, "div")).unwrap_or(el)
    } else {
        el
    };
    let style = style_of(styled);
    let defaults = Text::default();
    Some(Item::Text(Text {
        content: content_of(styled),
        font_size: style.px("font-size").unwrap_or(defaults.font_size),
        font_weight: style.get("font-weight").map(str::to_string).unwrap_or(defaults.font_weight),
        color: style.get("color").map(str::to_string).unwrap_or(defaults.color),
        font_family: style.get("font-family").map(str::to_string).unwrap_or(defaults.font_family),
        line_height: style
            .get("line-height")
            .and_then(|v| v.parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(defaults.line_height),
        link,
        format_link_as_tel,
        ..defaults
    }))
}

/// Plain text with `<br>` read back as newlines; anything richer is kept as
/// the element's inner HTML.
fn content_of(el: ElementRef<'_>) -> String {
    let mut plain = String::new();
    for node in el.children() {
        if let Some(text) = node.value().as_text() {
            plain.push_str(text);
        } else if let Some(child) = ElementRef::wrap(node) {
            if is(child, "br") {
                plain.push('\n');
            } else {
                return el.inner_html();
            }
        }
    }
    plain
}

/// Anchors wrapping an icon (`<img>` or `<svg>`) inside a div or table.
fn link_bar(td: ElementRef<'_>) -> Option<Item> {
    let holder = first_child(td).filter(|el| is(*el, "div") || is(*el, "table"))?;
    let anchors: Vec<ElementRef<'_>> = icon_anchors(holder).collect();
    let first = *anchors.first()?;

    let mut bar = LinkBar::default();
    let first_style = style_of(first);
    let vertical = first_style.get("display") == Some("block") || first_style.get("margin-bottom").is_some();
    bar.layout = if vertical { BarLayout::Vertical } else { BarLayout::Horizontal };
    let gap_side = if vertical { "margin-bottom" } else { "margin-right" };
    if let Some(gap) = first_style.px(gap_side) {
        bar.gap = gap;
    }

    let mut label_family = None;
    for anchor in &anchors {
        let (url, format_link_as_tel) = link_of(*anchor);
        let mut link = BarLink {
            url: url.unwrap_or_default(),
            format_link_as_tel,
            ..BarLink::default()
        };

        if let Some(icon) = descendants(*anchor, ICON_TAGS).next() {
            if is(icon, "svg") {
                link.icon = attr(icon, "aria-label").unwrap_or("website").to_string();
                if let Some(stroke) = attr(icon, "stroke") {
                    bar.icon_color = stroke.to_string();
                }
            } else {
                link.icon = "custom".to_string();
                link.custom_icon_url = attr(icon, "src").map(str::to_string);
            }
            if let Some(size) = attr_px(icon, "width") {
                bar.icon_size = size;
            }
        }

        if let Some(label) = children(*anchor).find(|c| is(*c, "span") || is(*c, "div")) {
            let text = text_of(label);
            if !text.is_empty() {
                let style = style_of(label);
                if let Some(gap) = style.px("margin-left") {
                    bar.label_gap = gap;
                }
                if let Some(color) = style.get("color") {
                    bar.label_color = color.to_string();
                }
                if let Some(size) = style.px("font-size") {
                    bar.label_font_size = size;
                }
                if label_family.is_none() {
                    label_family = style.get("font-family").map(str::to_string);
                }
                link.label = Some(text);
            }
        }
        bar.links.push(link);
    }

    if let Some(family) = style_of(holder).get("font-family").map(str::to_string).or(label_family) {
        bar.font_family = family;
    }

    let icons = match attr(holder, "data-bar") {
        Some("icons") => true,
        Some("socials") => false,
        _ => {
            // unmarked markup: decide by the icons used
            let mut named = bar.links.iter().filter(|l| !l.is_custom()).peekable();
            named.peek().is_some() && named.all(|l| is_contact_icon(&l.icon))
        }
    };
    Some(if icons { Item::Icons(bar) } else { Item::Socials(bar) })
}

fn image(td: ElementRef<'_>) -> Option<Item> {
    let img = descendants(td, &["img"]).next()?;
    let defaults = Image::default();
    let (link, format_link_as_tel) = match first_child(td).filter(|el| is(*el, "a")) {
        Some(anchor) => link_of(anchor),
        None => (None, false),
    };
    let style = style_of(img);
    Some(Item::Image(Image {
        src: attr(img, "src").unwrap_or_default().to_string(),
        alt: img.value().attr("alt").unwrap_or_default().to_string(),
        width: attr_px(img, "width")
            .or_else(|| style.px("width"))
            .unwrap_or(defaults.width),
        height: attr_px(img, "height").or_else(|| style.px("height")).filter(|h| *h > 0),
        border_radius: style.px("border-radius").unwrap_or(0),
        link,
        format_link_as_tel,
        ..defaults
    }))
}

fn is_painted_rule(el: ElementRef<'_>) -> bool {
    background(el).is_some() && height_of(el).is_some_and(|h| h > 0)
}

/// A div with a background and a height (solid or gradient rule), or a
/// table holding one.
fn divider(td: ElementRef<'_>) -> Option<Item> {
    let holder = first_child(td)?;
    let el = if is(holder, "div") && is_painted_rule(holder) {
        holder
    } else if is(holder, "table") && is_divider_table(holder) {
        descendants(holder, &["td", "div"]).find(|el| is_painted_rule(*el))?
    } else {
        return None;
    };
    let fill = background(el)?;
    let height = height_of(el).filter(|h| *h > 0)?;

    let defaults = Divider::default();
    let declared = style_of(el)
        .get("width")
        .map(str::to_string)
        .or_else(|| attr(holder, "width").map(str::to_string));
    let (width, width_unit) = match declared.as_deref() {
        Some(w) if w.ends_with("px") => (parse_px_opt(w), WidthUnit::Px),
        Some(w) => (parse_px_opt(w.trim_end_matches('%')), WidthUnit::Percent),
        None => (None, WidthUnit::Percent),
    };
    Some(Item::Divider(Divider {
        height,
        color: fill,
        width: width.unwrap_or(defaults.width),
        width_unit,
        ..defaults
    }))
}

/// A div with a height and nothing painted.
fn spacer(td: ElementRef<'_>) -> Option<Item> {
    let el = first_child(td).filter(|el| is(*el, "div"))?;
    if background(el).is_some() {
        return None;
    }
    let height = height_of(el).filter(|h| *h > 0)?;
    Some(Item::Spacer(Spacer {
        height,
        ..Spacer::default()
    }))
}
