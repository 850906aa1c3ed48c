use crate::model::coerce;
use crate::model::layout::Row;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_WIDTH: u32 = 600;

/// Attributes applied to the generated outer `<table>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableProperties {
    #[serde(deserialize_with = "coerce::px")]
    pub border: u32,
    #[serde(deserialize_with = "coerce::px")]
    pub cell_spacing: u32,
}

/// The root of the tree: an ordered list of rows plus page-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub rows: Vec<Row>,
    #[serde(deserialize_with = "coerce::px")]
    pub max_width: u32,
    pub table_properties: TableProperties,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            max_width: DEFAULT_MAX_WIDTH,
            table_properties: TableProperties::default(),
        }
    }
}
