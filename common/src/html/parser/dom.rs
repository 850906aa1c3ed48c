//! Small traversal helpers over the scraper tree.

use crate::html::style::InlineStyle;
use crate::model::coerce::parse_px_opt;
use scraper::ElementRef;

pub(crate) fn name(el: ElementRef<'_>) -> &str {
    el.value().name()
}

pub(crate) fn is(el: ElementRef<'_>, tag: &str) -> bool {
    name(el).eq_ignore_ascii_case(tag)
}

pub(crate) fn children(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap)
}

/// First element child, skipping text and comments.
pub(crate) fn first_child(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    children(el).next()
}

pub(crate) fn child_table(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    children(el).find(|c| is(*c, "table"))
}

/// Descendants of `el` (not `el` itself) with one of the given tag names.
pub(crate) fn descendants<'a>(
    el: ElementRef<'a>,
    tags: &'a [&'a str],
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |d| tags.iter().any(|tag| is(*d, tag)))
}

pub(crate) fn has_descendant(el: ElementRef<'_>, tags: &[&str]) -> bool {
    descendants(el, tags).next().is_some()
}

/// `<tr>`s of a table, looking through the implicit `<tbody>`.
pub(crate) fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in children(table) {
        if is(child, "tr") {
            rows.push(child);
        } else if is(child, "tbody") || is(child, "thead") || is(child, "tfoot") {
            rows.extend(children(child).filter(|c| is(*c, "tr")));
        }
    }
    rows
}

pub(crate) fn row_cells(tr: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    children(tr).filter(|c| is(*c, "td") || is(*c, "th")).collect()
}

pub(crate) fn style_of(el: ElementRef<'_>) -> InlineStyle {
    InlineStyle::parse(el.value().attr("style").unwrap_or_default())
}

pub(crate) fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn attr_px(el: ElementRef<'_>, name: &str) -> Option<u32> {
    attr(el, name).and_then(parse_px_opt)
}

/// Background from the inline style, falling back to `bgcolor`.
pub(crate) fn background(el: ElementRef<'_>) -> Option<String> {
    style_of(el)
        .background()
        .or_else(|| attr(el, "bgcolor").map(str::to_string))
}

/// Visible text with whitespace runs collapsed.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    let joined: String = el.text().collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `href` of an anchor, with `tel:` links reported as the bare number.
pub(crate) fn link_of(anchor: ElementRef<'_>) -> (Option<String>, bool) {
    match attr(anchor, "href") {
        Some(href) => match href.strip_prefix("tel:") {
            Some(number) => (Some(number.to_string()), true),
            None => (Some(href.to_string()), false),
        },
        None => (None, false),
    }
}
