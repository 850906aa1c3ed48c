//! # Merge Result Service
//!
//! Serves the documents of a completed merge job. Results are indexed in the
//! order of the records they were rendered from. Clients that are done with a
//! job delete it; otherwise it is forgotten once enough newer merges complete.

use crate::job_controller::state::{Discard, JobsState};
use actix_web::{web, HttpResponse, Responder};
use log::info;

/// `GET /api/merge/result/{job_id}`: every document as a JSON array of HTML
/// strings.
pub(crate) async fn all(
    job_id: web::Path<String>,
    state: web::Data<JobsState>,
) -> impl Responder {
    let results = state.results.read().await;
    match results.get(job_id.as_str()) {
        Some(documents) => HttpResponse::Ok().json(documents),
        None => HttpResponse::NotFound().body("No results for this job"),
    }
}

/// `GET /api/merge/result/{job_id}/{index}`: one document as `text/html`.
pub(crate) async fn one(
    path: web::Path<(String, usize)>,
    state: web::Data<JobsState>,
) -> impl Responder {
    let (job_id, index) = path.into_inner();
    let results = state.results.read().await;
    match results.get(&job_id).and_then(|documents| documents.get(index)) {
        Some(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html.clone()),
        None => HttpResponse::NotFound().body("No such document"),
    }
}

/// `DELETE /api/merge/result/{job_id}`: forgets a finished job and its
/// documents. A job still running answers `409`.
pub(crate) async fn delete(
    job_id: web::Path<String>,
    state: web::Data<JobsState>,
) -> impl Responder {
    match state.discard(&job_id).await {
        Discard::Removed => {
            info!("merge job {} discarded", job_id);
            HttpResponse::NoContent().finish()
        }
        Discard::Running => HttpResponse::Conflict().body("Job is still running"),
        Discard::Unknown => HttpResponse::NotFound().body("Job ID not found"),
    }
}
