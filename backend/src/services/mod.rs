pub mod data_sources;
pub mod merge;
pub mod signatures;
pub mod templates;

use actix_multipart::{Field, Multipart};
use actix_web::web;
use futures_util::StreamExt;
use std::collections::HashMap;

/// Registers every API scope. Shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(signatures::configure_routes())
        .service(templates::configure_routes())
        .service(data_sources::csv::configure_routes())
        .service(merge::configure_routes());
}

async fn read_field(field: &mut Field) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk.map_err(|e| e.to_string())?);
    }
    Ok(bytes)
}

/// Reads every named part of a multipart body into memory.
///
/// A part named `file` must carry a `.csv` file name.
pub(crate) async fn read_multipart(
    mut payload: Multipart,
) -> Result<HashMap<String, Vec<u8>>, String> {
    let mut parts = HashMap::new();
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| e.to_string())?;
        let Some(name) = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()))
        else {
            continue;
        };

        if name == "file" {
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                .unwrap_or_default();
            if !filename.to_ascii_lowercase().ends_with(".csv") {
                return Err("The file must end with .csv".to_string());
            }
        }
        let bytes = read_field(&mut field).await?;
        parts.insert(name, bytes);
    }
    Ok(parts)
}
