//! Custom font declarations recovered from `<style>` blocks.

use crate::model::CustomFont;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static STYLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("style").expect("BUG: hardcoded selector 'style' is statically valid")
});

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import\s+url\(\s*['"]?([^'")\s]+)['"]?\s*\)\s*;?"#)
        .expect("BUG: hardcoded @import regex is statically valid")
});

static FONT_FACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@font-face\s*\{[^}]*\}")
        .expect("BUG: hardcoded @font-face regex is statically valid")
});

static FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"font-family\s*:\s*['"]?([^;'"}]+?)['"]?\s*(;|\})"#)
        .expect("BUG: hardcoded font-family regex is statically valid")
});

static SRC_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url\(\s*['"]?([^'")\s]+)['"]?\s*\)"#)
        .expect("BUG: hardcoded url() regex is statically valid")
});

/// Every `@import url(...)` and `@font-face {...}` of the document, in source
/// order. Font faces keep their block verbatim in `raw_css`.
pub fn extract(document: &Html) -> Vec<CustomFont> {
    let mut fonts = Vec::new();
    for style in document.select(&STYLE_SELECTOR) {
        let css: String = style.text().collect();
        fonts.extend(extract_css(&css));
    }
    fonts
}

pub fn extract_css(css: &str) -> Vec<CustomFont> {
    let mut found: Vec<(usize, CustomFont)> = Vec::new();
    for import in IMPORT.captures_iter(css) {
        let (Some(whole), Some(url)) = (import.get(0), import.get(1)) else {
            continue;
        };
        found.push((
            whole.start(),
            CustomFont::google(&google_family(url.as_str()), url.as_str()),
        ));
    }
    for face in FONT_FACE.find_iter(css) {
        let block = face.as_str();
        let name = FAMILY
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let url = SRC_URL
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let mut font = CustomFont::url(&name, &url);
        font.raw_css = Some(block.to_string());
        found.push((face.start(), font));
    }
    found.sort_by_key(|(position, _)| *position);
    found.into_iter().map(|(_, font)| font).collect()
}

/// Family name from a stylesheet URL's `family=` parameter (`Open+Sans:wght@400`
/// reads as `Open Sans`). URLs without one are named after themselves.
fn google_family(url: &str) -> String {
    let Some((_, rest)) = url.split_once("family=") else {
        return url.to_string();
    };
    let family = rest
        .split(['&', ':'])
        .next()
        .unwrap_or_default();
    family.replace('+', " ").replace("%20", " ")
}
