//! Inline `style` attributes, in both directions.

use crate::model::coerce::{parse_px, parse_px_opt};
use crate::model::{Borders, Padding};

/// Declarations of one `style="..."` attribute, keys lowercased, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn parse(style: &str) -> Self {
        let declarations = style
            .split(';')
            .filter_map(|decl| {
                let (name, value) = decl.split_once(':')?;
                let name = name.trim().to_ascii_lowercase();
                let value = value.trim().trim_end_matches("!important").trim();
                if name.is_empty() || value.is_empty() {
                    return None;
                }
                Some((name, value.to_string()))
            })
            .collect();
        Self { declarations }
    }

    /// Last value declared for `name`, as browsers resolve duplicates.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn px(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(parse_px_opt)
    }

    /// Solid or gradient background, from `background-color`, `background`
    /// or `background-image`.
    pub fn background(&self) -> Option<String> {
        ["background-color", "background", "background-image"]
            .iter()
            .filter_map(|name| self.get(name))
            .map(str::trim)
            .find(|value| !value.is_empty() && *value != "none" && *value != "transparent")
            .map(str::to_string)
    }

    /// Per-side padding from the `padding` shorthand and the `padding-*`
    /// longhands, longhands winning. Zero sides read as unset.
    pub fn padding(&self) -> Padding {
        let mut sides = self.get("padding").map(box_sides).unwrap_or([None; 4]);
        for (index, name) in ["padding-top", "padding-right", "padding-bottom", "padding-left"]
            .iter()
            .enumerate()
        {
            if let Some(value) = self.get(name) {
                sides[index] = parse_px_opt(value);
            }
        }
        let [top, right, bottom, left] = sides.map(|side| side.filter(|px| *px > 0));
        Padding {
            padding_top: top,
            padding_right: right,
            padding_bottom: bottom,
            padding_left: left,
        }
    }

    pub fn borders(&self) -> Borders {
        let mut borders = Borders::default();
        let mut color = None;
        if let Some(all) = self.get("border") {
            let (width, c) = border_side(all);
            borders.top = width;
            borders.right = width;
            borders.bottom = width;
            borders.left = width;
            color = c;
        }
        let sides: [(&str, &mut u32); 4] = [
            ("border-top", &mut borders.top),
            ("border-right", &mut borders.right),
            ("border-bottom", &mut borders.bottom),
            ("border-left", &mut borders.left),
        ];
        for (name, slot) in sides {
            if let Some(value) = self.get(name) {
                let (width, c) = border_side(value);
                *slot = width;
                if c.is_some() && width > 0 {
                    color = color.or(c);
                }
            }
        }
        if let Some(c) = self.get("border-color") {
            color = Some(c.to_string());
        }
        if let Some(c) = color {
            borders.color = c;
        }
        borders.radius = self.px("border-radius").unwrap_or(0);
        borders
    }
}

/// Expands a 1 to 4 value box shorthand (`10px`, `10px 20px`, ...) to
/// top/right/bottom/left.
pub fn box_sides(value: &str) -> [Option<u32>; 4] {
    let parts: Vec<Option<u32>> = value.split_whitespace().map(parse_px_opt).collect();
    match parts.as_slice() {
        [all] => [*all; 4],
        [v, h] => [*v, *h, *v, *h],
        [t, h, b] => [*t, *h, *b, *h],
        [t, r, b, l, ..] => [*t, *r, *b, *l],
        [] => [None; 4],
    }
}

/// Width and color of a `1px solid #ccc` border value.
fn border_side(value: &str) -> (u32, Option<String>) {
    let mut width = 0;
    let mut color = None;
    for token in value.split_whitespace() {
        if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            width = parse_px(token);
        } else if token.starts_with('#') || token.starts_with("rgb") {
            color = Some(token.to_string());
        }
    }
    (width, color)
}

/// Declaration setting `background` to a solid color or a gradient.
pub fn background_declaration(background: &str) -> String {
    if background.contains("gradient(") {
        format!("background: {}", background)
    } else {
        format!("background-color: {}", background)
    }
}

/// `border-*` and `border-radius` declarations for the sides that are set.
pub fn border_declarations(borders: &Borders) -> Vec<String> {
    let mut css = Vec::new();
    for (name, width) in [
        ("border-top", borders.top),
        ("border-right", borders.right),
        ("border-bottom", borders.bottom),
        ("border-left", borders.left),
    ] {
        if width > 0 {
            css.push(format!("{}: {}px solid {}", name, width, borders.color));
        }
    }
    if borders.radius > 0 {
        css.push(format!("border-radius: {}px", borders.radius));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declarations_case_insensitively() {
        let style = InlineStyle::parse("Font-Size: 14px; color:#333 ;; bogus");
        assert_eq!(style.get("font-size"), Some("14px"));
        assert_eq!(style.get("color"), Some("#333"));
        assert_eq!(style.px("font-size"), Some(14));
        assert_eq!(style.get("bogus"), None);
    }

    #[test]
    fn box_shorthand_expands() {
        assert_eq!(box_sides("10px 20px"), [Some(10), Some(20), Some(10), Some(20)]);
        assert_eq!(box_sides("1px 2px 3px"), [Some(1), Some(2), Some(3), Some(2)]);
    }

    #[test]
    fn padding_longhand_overrides_shorthand() {
        let padding = InlineStyle::parse("padding: 5px 0px 0px 0px; padding-left: 7px").padding();
        assert_eq!(padding.sides(), [Some(5), None, None, Some(7)]);
    }

    #[test]
    fn borders_read_sides_color_and_radius() {
        let borders =
            InlineStyle::parse("border-top: 2px solid #ff0000; border-radius: 4px").borders();
        assert_eq!((borders.top, borders.left), (2, 0));
        assert_eq!(borders.color, "#ff0000");
        assert_eq!(borders.radius, 4);
    }

    #[test]
    fn gradient_background_uses_shorthand() {
        assert_eq!(
            background_declaration("linear-gradient(90deg, #fff, #000)"),
            "background: linear-gradient(90deg, #fff, #000)"
        );
        assert_eq!(background_declaration("#eee"), "background-color: #eee");
    }
}
