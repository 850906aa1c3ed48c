use crate::model::coerce;
use crate::model::layout::{Padding, Row};
use crate::model::new_id;
use serde::{Deserialize, Serialize};

/// A leaf content node, or a nested row acting as a container.
///
/// The set of kinds is closed: the generator, parser and resolver all match
/// on it exhaustively, so adding a kind is a compile error at every dispatch
/// site until it is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Text(Text),
    Image(Image),
    Socials(LinkBar),
    Icons(LinkBar),
    Spacer(Spacer),
    Divider(Divider),
    Button(Button),
    Container(Row),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Text(t) => &t.id,
            Item::Image(i) => &i.id,
            Item::Socials(b) | Item::Icons(b) => &b.id,
            Item::Spacer(s) => &s.id,
            Item::Divider(d) => &d.id,
            Item::Button(b) => &b.id,
            Item::Container(r) => &r.id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Item::Text(_) => "text",
            Item::Image(_) => "image",
            Item::Socials(_) => "socials",
            Item::Icons(_) => "icons",
            Item::Spacer(_) => "spacer",
            Item::Divider(_) => "divider",
            Item::Button(_) => "button",
            Item::Container(_) => "container",
        }
    }

    /// Spacers and dividers span the whole cell and ignore its horizontal alignment.
    pub fn is_full_width(&self) -> bool {
        matches!(self, Item::Spacer(_) | Item::Divider(_))
    }

    /// Outer padding of the item. Containers carry row padding instead.
    pub fn padding(&self) -> Option<&Padding> {
        match self {
            Item::Text(t) => Some(&t.padding),
            Item::Image(i) => Some(&i.padding),
            Item::Socials(b) | Item::Icons(b) => Some(&b.padding),
            Item::Spacer(s) => Some(&s.padding),
            Item::Divider(d) => Some(&d.padding),
            Item::Button(b) => Some(&b.padding),
            Item::Container(_) => None,
        }
    }

    pub fn padding_mut(&mut self) -> Option<&mut Padding> {
        match self {
            Item::Text(t) => Some(&mut t.padding),
            Item::Image(i) => Some(&mut i.padding),
            Item::Socials(b) | Item::Icons(b) => Some(&mut b.padding),
            Item::Spacer(s) => Some(&mut s.padding),
            Item::Divider(d) => Some(&mut d.padding),
            Item::Button(b) => Some(&mut b.padding),
            Item::Container(_) => None,
        }
    }

    /// Names of the fields that accept a `<field>Mapping` companion.
    ///
    /// For link bars the mapping lives on each link (`url`, `label`).
    pub fn mappable_fields(&self) -> &'static [&'static str] {
        match self {
            Item::Text(_) => &["content", "link"],
            Item::Image(_) => &["src", "link"],
            Item::Button(_) => &["text", "link"],
            Item::Socials(_) | Item::Icons(_) => &["url", "label"],
            Item::Spacer(_) | Item::Divider(_) | Item::Container(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Text {
    pub id: String,
    /// Plain text, or an HTML fragment produced by the inline editor.
    pub content: String,
    #[serde(deserialize_with = "coerce::px")]
    pub font_size: u32,
    pub font_weight: String,
    pub color: String,
    pub font_family: String,
    pub line_height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub format_link_as_tel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_mapping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_mapping: Option<String>,
    #[serde(flatten)]
    pub padding: Padding,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            id: new_id(),
            content: String::new(),
            font_size: 14,
            font_weight: "normal".to_string(),
            color: "#333333".to_string(),
            font_family: "Arial".to_string(),
            line_height: 1.4,
            link: None,
            format_link_as_tel: false,
            content_mapping: None,
            link_mapping: None,
            padding: Padding::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub src: String,
    pub alt: String,
    #[serde(deserialize_with = "coerce::px")]
    pub width: u32,
    #[serde(deserialize_with = "coerce::opt_px", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(deserialize_with = "coerce::px")]
    pub border_radius: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub format_link_as_tel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_mapping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_mapping: Option<String>,
    #[serde(flatten)]
    pub padding: Padding,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            id: new_id(),
            src: String::new(),
            alt: String::new(),
            width: 120,
            height: None,
            border_radius: 0,
            link: None,
            format_link_as_tel: false,
            src_mapping: None,
            link_mapping: None,
            padding: Padding::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarLayout {
    #[default]
    Horizontal,
    Vertical,
}

/// One icon link of a [`LinkBar`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarLink {
    /// Network (`facebook`, `linkedin`, …) or contact icon (`phone`, `email`, …),
    /// or `custom` when `custom_icon_url` supplies the artwork.
    pub icon: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_icon_url: Option<String>,
    pub format_link_as_tel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_mapping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_mapping: Option<String>,
}

impl BarLink {
    pub fn new(icon: &str, url: &str) -> Self {
        Self {
            icon: icon.to_string(),
            url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn is_custom(&self) -> bool {
        self.icon == "custom"
    }
}

/// Shared body of the Socials and Icons items: a bar of icon links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkBar {
    pub id: String,
    pub links: Vec<BarLink>,
    pub icon_color: String,
    #[serde(deserialize_with = "coerce::px")]
    pub icon_size: u32,
    pub layout: BarLayout,
    #[serde(deserialize_with = "coerce::px")]
    pub gap: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub label_gap: u32,
    pub label_color: String,
    #[serde(deserialize_with = "coerce::px")]
    pub label_font_size: u32,
    pub font_family: String,
    #[serde(flatten)]
    pub padding: Padding,
}

impl Default for LinkBar {
    fn default() -> Self {
        Self {
            id: new_id(),
            links: Vec::new(),
            icon_color: "#555555".to_string(),
            icon_size: 24,
            layout: BarLayout::Horizontal,
            gap: 10,
            label_gap: 8,
            label_color: "#333333".to_string(),
            label_font_size: 12,
            font_family: "Arial".to_string(),
            padding: Padding::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spacer {
    pub id: String,
    #[serde(deserialize_with = "coerce::px")]
    pub height: u32,
    #[serde(flatten)]
    pub padding: Padding,
}

impl Default for Spacer {
    fn default() -> Self {
        Self {
            id: new_id(),
            height: 10,
            padding: Padding::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidthUnit {
    #[default]
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "px")]
    Px,
}

impl WidthUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            WidthUnit::Percent => "%",
            WidthUnit::Px => "px",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Divider {
    pub id: String,
    #[serde(deserialize_with = "coerce::px")]
    pub height: u32,
    /// Solid color or a CSS `linear-gradient(...)`.
    pub color: String,
    #[serde(deserialize_with = "coerce::px")]
    pub width: u32,
    pub width_unit: WidthUnit,
    #[serde(flatten)]
    pub padding: Padding,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            id: new_id(),
            height: 1,
            color: "#cccccc".to_string(),
            width: 100,
            width_unit: WidthUnit::Percent,
            padding: Padding::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Button {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub format_link_as_tel: bool,
    /// Solid color or a CSS `linear-gradient(...)`.
    pub background_color: String,
    pub text_color: String,
    #[serde(deserialize_with = "coerce::px")]
    pub font_size: u32,
    pub font_weight: String,
    pub font_family: String,
    #[serde(deserialize_with = "coerce::px")]
    pub border_radius: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub inner_padding_x: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub inner_padding_y: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_mapping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_mapping: Option<String>,
    #[serde(flatten)]
    pub padding: Padding,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            id: new_id(),
            text: "Click here".to_string(),
            link: None,
            format_link_as_tel: false,
            background_color: "#007bff".to_string(),
            text_color: "#ffffff".to_string(),
            font_size: 14,
            font_weight: "bold".to_string(),
            font_family: "Arial".to_string(),
            border_radius: 5,
            inner_padding_x: 20,
            inner_padding_y: 10,
            text_mapping: None,
            link_mapping: None,
            padding: Padding::default(),
        }
    }
}
