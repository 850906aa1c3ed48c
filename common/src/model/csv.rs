use serde::{Deserialize, Serialize};

/// One column of an inspected CSV data source.
///
/// Column titles are kept exactly as they appear in the header line; they are
/// the names an item's `<field>Mapping` refers to.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnCheck {
    pub title: String,
    /// Value of this column in the first data row, shown as an example next to
    /// the mapping target.
    pub first_row: Option<String>,
}
