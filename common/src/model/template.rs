//! Saved signature templates and their JSON import format.
//!
//! A template is a named snapshot of a [`Document`]. Saving under an existing
//! id replaces the snapshot; nothing else ever mutates one.
//!
//! Import accepts either one template object or an array of them. Each entry
//! is checked minimally (string `id`, string `name`, array `rows`, numeric
//! `maxWidth`, object `tableProperties`) and skipped, not rejected, when the
//! check fails or its id is already taken. Callers only learn how many entries
//! were accepted.

use crate::model::coerce;
use crate::model::document::{Document, TableProperties};
use crate::model::layout::Row;
use crate::model::new_id;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureTemplate {
    pub id: String,
    pub name: String,
    pub rows: Vec<Row>,
    #[serde(deserialize_with = "coerce::px")]
    pub max_width: u32,
    pub table_properties: TableProperties,
}

impl SignatureTemplate {
    /// Snapshots `document` under a fresh id.
    pub fn snapshot(name: &str, document: &Document) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            rows: document.rows.clone(),
            max_width: document.max_width,
            table_properties: document.table_properties,
        }
    }

    pub fn to_document(&self) -> Document {
        Document {
            rows: self.rows.clone(),
            max_width: self.max_width,
            table_properties: self.table_properties,
        }
    }
}

/// Templates accepted by [`import_templates`], in input order.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub accepted: Vec<SignatureTemplate>,
}

impl ImportOutcome {
    pub fn count(&self) -> usize {
        self.accepted.len()
    }
}

fn has_template_shape(entry: &Value) -> bool {
    entry.get("id").is_some_and(Value::is_string)
        && entry.get("name").is_some_and(Value::is_string)
        && entry.get("rows").is_some_and(Value::is_array)
        && entry.get("maxWidth").is_some_and(Value::is_number)
        && entry.get("tableProperties").is_some_and(Value::is_object)
}

/// Imports templates from JSON text, skipping malformed entries and entries
/// whose id is in `existing_ids` or repeats an earlier entry of the batch.
///
/// Only malformed JSON text is an error.
pub fn import_templates(
    json: &str,
    existing_ids: &HashSet<String>,
) -> Result<ImportOutcome, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    let entries = match value {
        Value::Array(entries) => entries,
        single @ Value::Object(_) => vec![single],
        _ => Vec::new(),
    };

    let mut seen = existing_ids.clone();
    let mut outcome = ImportOutcome::default();
    for entry in entries {
        if !has_template_shape(&entry) {
            warn!("skipping template entry without the expected shape");
            continue;
        }
        let template: SignatureTemplate = match serde_json::from_value(entry) {
            Ok(t) => t,
            Err(e) => {
                warn!("skipping template entry: {}", e);
                continue;
            }
        };
        if !seen.insert(template.id.clone()) {
            debug!("skipping template {}: id already present", template.id);
            continue;
        }
        outcome.accepted.push(template);
    }
    Ok(outcome)
}
