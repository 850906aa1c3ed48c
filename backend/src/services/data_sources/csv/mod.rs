use actix_web::web::{post, scope};
use actix_web::Scope;

mod inspect;
pub mod records;

const API_PATH: &str = "/api/data_sources/csv";

/// Configures and returns the Actix scope for CSV data source routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Column titles and sample values of an uploaded CSV.
        .route("/inspect", post().to(inspect::process))
}
