use crate::model::coerce;
use crate::model::item::Item;
use crate::model::new_id;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of cells a row may hold.
pub const MAX_CELLS: usize = 10;

/// Fewest cells a row can be resized to. Removing cells one by one may still
/// leave a single cell behind.
pub const MIN_RESIZE_CELLS: usize = 2;

/// Vertical alignment of a cell's content, emitted as the `valign` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Middle => "middle",
            VAlign::Bottom => "bottom",
        }
    }

    /// Reads a `valign` attribute value. `center` is accepted as an alias of `middle`.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Some(VAlign::Top),
            "middle" | "center" => Some(VAlign::Middle),
            "bottom" => Some(VAlign::Bottom),
            _ => None,
        }
    }
}

/// Horizontal alignment of items inside a cell, emitted as the item `<td align>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(HAlign::Left),
            "center" | "middle" => Some(HAlign::Center),
            "right" => Some(HAlign::Right),
            _ => None,
        }
    }
}

/// Whether a cell stacks its items (`column`) or lays them out inline (`row`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Flex-like alignment keyword used by cells laid out as a `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexAlign {
    #[default]
    Start,
    Center,
    End,
}

impl FlexAlign {
    pub fn as_h_align(self) -> HAlign {
        match self {
            FlexAlign::Start => HAlign::Left,
            FlexAlign::Center => HAlign::Center,
            FlexAlign::End => HAlign::Right,
        }
    }

    pub fn as_v_align(self) -> VAlign {
        match self {
            FlexAlign::Start => VAlign::Top,
            FlexAlign::Center => VAlign::Middle,
            FlexAlign::End => VAlign::Bottom,
        }
    }

    pub fn from_h_align(align: HAlign) -> Self {
        match align {
            HAlign::Left => FlexAlign::Start,
            HAlign::Center => FlexAlign::Center,
            HAlign::Right => FlexAlign::End,
        }
    }

    pub fn from_v_align(align: VAlign) -> Self {
        match align {
            VAlign::Top => FlexAlign::Start,
            VAlign::Middle => FlexAlign::Center,
            VAlign::Bottom => FlexAlign::End,
        }
    }
}

/// Four independent side widths sharing one color and one corner radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Borders {
    #[serde(deserialize_with = "coerce::px")]
    pub top: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub right: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub bottom: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub left: u32,
    pub color: String,
    #[serde(deserialize_with = "coerce::px")]
    pub radius: u32,
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: 0,
            left: 0,
            color: "#000000".to_string(),
            radius: 0,
        }
    }
}

impl Borders {
    pub fn is_empty(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }
}

/// Optional per-side padding. `None` means "inherit", which emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Padding {
    #[serde(deserialize_with = "coerce::opt_px", skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(deserialize_with = "coerce::opt_px", skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<u32>,
    #[serde(deserialize_with = "coerce::opt_px", skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(deserialize_with = "coerce::opt_px", skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<u32>,
}

impl Padding {
    pub fn sides(&self) -> [Option<u32>; 4] {
        [
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
            self.padding_left,
        ]
    }

    pub fn is_unset(&self) -> bool {
        self.sides().iter().all(Option::is_none)
    }
}

/// One column of a [`Row`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cell {
    pub id: String,
    /// Pixel width. `0` means "share the remaining space with the other auto cells".
    #[serde(deserialize_with = "coerce::px")]
    pub width: u32,
    #[serde(deserialize_with = "coerce::opt_px", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub v_align: VAlign,
    pub h_align: HAlign,
    pub direction: Direction,
    pub justify_content: FlexAlign,
    pub align_items: FlexAlign,
    pub borders: Borders,
    #[serde(flatten)]
    pub padding: Padding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub items: Vec<Item>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Cell {
    pub fn new(width: u32) -> Self {
        Self {
            id: new_id(),
            width,
            height: None,
            v_align: VAlign::default(),
            h_align: HAlign::default(),
            direction: Direction::default(),
            justify_content: FlexAlign::default(),
            align_items: FlexAlign::default(),
            borders: Borders::default(),
            padding: Padding::default(),
            background_color: None,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}

/// A horizontal band of cells. Also used, restricted to one cell, as the
/// "container" item that nests content inside another cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    pub cells: Vec<Cell>,
    pub borders: Borders,
    #[serde(deserialize_with = "coerce::px")]
    pub padding_top: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub padding_bottom: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Default for Row {
    fn default() -> Self {
        Self::with_cells(vec![Cell::default()])
    }
}

impl Row {
    pub fn with_cells(cells: Vec<Cell>) -> Self {
        Self {
            id: new_id(),
            cells,
            borders: Borders::default(),
            padding_top: 0,
            padding_bottom: 0,
            background_color: None,
            display_name: None,
        }
    }
}
