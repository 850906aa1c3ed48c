//! # Template Services
//!
//! HTTP surface of the saved signature templates. Persistence lives in
//! [`store`]; the handlers only translate between requests and store calls.

mod delete;
mod get;
mod import;
mod save;
pub mod store;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`GET ""`**: every saved template, ordered by name.
/// *   **`POST /save`**: stores a `SignatureTemplate`, replacing one with the same id.
/// *   **`POST /import`**: raw JSON, one template or an array; answers `{ "accepted": n }`.
/// *   **`GET /{template_id}`**: one template, or `404`.
/// *   **`DELETE /{template_id}`**: removes one template, or `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::list))
        .route("/save", post().to(save::process))
        .route("/import", post().to(import::process))
        .route("/{template_id}", get().to(get::process))
        .route("/{template_id}", delete().to(delete::process))
}
