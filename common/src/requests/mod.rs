use crate::merge::Record;
use crate::model::{CustomFont, Document};
use serde::{Deserialize, Serialize};

/// Payload of `POST /api/signatures/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateRequest {
    pub document: Document,
    pub fonts: Vec<CustomFont>,
    pub editable: bool,
    /// Render mapped fields as `{{field}}` placeholders. Ignored when `record` is set.
    pub preview: bool,
    /// Resolve mappings against this record before rendering.
    pub record: Option<Record>,
}

/// Payload of `POST /api/signatures/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    pub html: String,
}

/// `json` part of the multipart `POST /api/merge/start` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMergeRequest {
    pub template_id: String,
    #[serde(default)]
    pub editable: bool,
}

/// Response of `POST /api/templates/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub accepted: usize,
}
