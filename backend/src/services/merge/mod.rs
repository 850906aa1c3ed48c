//! # Merge Services
//!
//! Bulk rendering of one saved template against every record of a CSV data
//! source. A merge runs as a background job: `/start` answers with a job id,
//! `/status` reports progress and `/result` serves the rendered documents
//! once the job is completed, until the job is deleted or evicted.

mod result;
mod start;
mod status;

use actix_web::web;

const API_PATH: &str = "/api/merge";

/// Configures and returns the Actix `Scope` for all merge-related routes.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH)
        .route("/start", web::post().to(start::process))
        .route("/status/{job_id}", web::get().to(status::process))
        .route("/result/{job_id}", web::get().to(result::all))
        .route("/result/{job_id}", web::delete().to(result::delete))
        .route("/result/{job_id}/{index}", web::get().to(result::one))
}
