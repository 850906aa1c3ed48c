//! Inline SVG artwork for link bar icons.
//!
//! Icons are stroked 24x24 glyphs tinted with the bar's icon color. Every SVG
//! carries its icon name in `aria-label`, which is how the parser tells them
//! apart again.

use crate::html::entities::escape_attr;

const FALLBACK: &str = "website";

const PATHS: &[(&str, &str)] = &[
    ("facebook", "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"),
    ("twitter", "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"),
    ("x", "M4 4l16 16M20 4L4 20"),
    ("linkedin", "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"),
    ("instagram", "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01"),
    ("youtube", "M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33zM9.75 15.02l5.75-3.27-5.75-3.27z"),
    ("github", "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"),
    ("tiktok", "M9 12a4 4 0 1 0 4 4V2h3a5 5 0 0 0 5 5"),
    ("pinterest", "M12 2a10 10 0 0 0-3.6 19.3M9.5 21l2.2-9M10 9.5a3 3 0 1 1 4.5 2.6c-1 .6-2.5.4-3-.6"),
    ("phone", "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"),
    ("email", "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6"),
    ("website", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"),
    ("location", "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z"),
];

/// Icons describing a way to reach the person rather than a network profile.
pub const CONTACT_ICONS: &[&str] = &["phone", "email", "website", "location"];

pub fn is_contact_icon(name: &str) -> bool {
    CONTACT_ICONS.contains(&name)
}

fn path_for(name: &str) -> &'static str {
    let lookup = |wanted: &str| PATHS.iter().find(|(n, _)| *n == wanted).map(|(_, d)| *d);
    lookup(name).or_else(|| lookup(FALLBACK)).unwrap_or_default()
}

/// The SVG element for `name`. Unknown names get the website globe but keep
/// their own `aria-label`.
pub fn svg(name: &str, color: &str, size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" role="img" aria-label="{label}" style="display: inline-block; vertical-align: middle"><path d="{path}"/></svg>"#,
        size = size,
        color = escape_attr(color),
        label = escape_attr(name),
        path = path_for(name),
    )
}
