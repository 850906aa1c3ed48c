//! SQLite persistence of saved signature templates.
//!
//! One row per template: its id, its name for listing, and the whole template
//! as a JSON body. Saving under an existing id replaces that row and nothing
//! else; no other table references templates.

use common::model::template::{import_templates, SignatureTemplate};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS templates (
    id   TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    body TEXT NOT NULL
)";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid template JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle on the template database. Each operation opens its own connection,
/// so the handle is cheap to clone into every worker.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    /// Opens (creating if needed) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.connect()?.execute(SCHEMA, [])?;
        info!("template store ready at {}", store.path.display());
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    pub fn list(&self) -> Result<Vec<SignatureTemplate>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT body FROM templates ORDER BY name, id")?;
        let bodies = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        bodies
            .iter()
            .map(|body| Ok(serde_json::from_str(body)?))
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Option<SignatureTemplate>, StoreError> {
        let conn = self.connect()?;
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM templates WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// Inserts `template`, replacing any template with the same id.
    pub fn save(&self, template: &SignatureTemplate) -> Result<(), StoreError> {
        let body = serde_json::to_string(template)?;
        self.connect()?.execute(
            "INSERT OR REPLACE INTO templates (id, name, body) VALUES (?1, ?2, ?3)",
            params![template.id, template.name, body],
        )?;
        debug!("saved template {}", template.id);
        Ok(())
    }

    /// Returns whether a template was deleted.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let deleted = self
            .connect()?
            .execute("DELETE FROM templates WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn ids(&self) -> Result<HashSet<String>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id FROM templates")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(ids)
    }

    /// Imports templates from JSON text (one object or an array). Entries that
    /// are malformed or whose id is taken are skipped. Returns how many were
    /// stored.
    pub fn import(&self, json: &str) -> Result<usize, StoreError> {
        let outcome = import_templates(json, &self.ids()?)?;
        for template in &outcome.accepted {
            self.save(template)?;
        }
        info!("imported {} templates", outcome.count());
        Ok(outcome.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::document::Document;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, TemplateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::open(dir.path().join("t.sqlite")).unwrap();
        (dir, store)
    }

    fn template(id: &str, name: &str) -> SignatureTemplate {
        let mut template = SignatureTemplate::snapshot(name, &Document::default());
        template.id = id.to_string();
        template
    }

    #[test]
    fn save_replaces_by_id() {
        let (_dir, store) = open_store();
        store.save(&template("a", "First")).unwrap();
        store.save(&template("a", "Renamed")).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Renamed");
    }

    #[test]
    fn get_and_delete() {
        let (_dir, store) = open_store();
        store.save(&template("a", "A")).unwrap();
        store.save(&template("b", "B")).unwrap();

        assert_eq!(store.get("a").unwrap().map(|t| t.name), Some("A".to_string()));
        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert!(store.get("a").unwrap().is_none());
        assert!(store.get("b").unwrap().is_some());
    }

    #[test]
    fn import_skips_taken_ids() {
        let (_dir, store) = open_store();
        store.save(&template("a", "A")).unwrap();

        let json = serde_json::to_string(&vec![template("a", "Dup"), template("c", "C")]).unwrap();
        assert_eq!(store.import(&json).unwrap(), 1);
        assert_eq!(store.get("a").unwrap().map(|t| t.name), Some("A".to_string()));
        assert_eq!(store.ids().unwrap().len(), 2);
    }

    #[test]
    fn import_rejects_malformed_json() {
        let (_dir, store) = open_store();
        assert!(matches!(store.import("[{"), Err(StoreError::Json(_))));
    }
}
