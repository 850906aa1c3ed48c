//! # Merge Start Service
//!
//! Backs `POST /api/merge/start`. The multipart request carries a `json` part
//! (`StartMergeRequest`) and a CSV `file` part. The template is looked up
//! before the job is registered, so an unknown template is answered with
//! `404` instead of a failed job.
//!
//! The rendering itself runs on the blocking pool. Records are rendered in
//! chunks, each chunk in parallel, and an `InProgress(percent)` update is sent
//! after every chunk. All updates of a job go through the same channel in the
//! order they were produced, and the results are stored before `Completed` is
//! sent.

use crate::config::ServerConfig;
use crate::job_controller::state::{JobUpdate, JobsState};
use crate::services::data_sources::csv::records::read_records;
use crate::services::read_multipart;
use crate::services::templates::store::TemplateStore;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::html::GenerateOptions;
use common::jobs::JobStatus;
use common::merge::render_all;
use common::model::Document;
use common::requests::StartMergeRequest;
use log::{error, info};
use std::time::Instant;
use tokio::sync::mpsc;

pub(crate) async fn process(
    state: web::Data<JobsState>,
    store: web::Data<TemplateStore>,
    config: web::Data<ServerConfig>,
    payload: Multipart,
) -> impl Responder {
    let mut parts = match read_multipart(payload).await {
        Ok(parts) => parts,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    let request: StartMergeRequest = match parts.get("json").map(|b| serde_json::from_slice(b)) {
        Some(Ok(request)) => request,
        Some(Err(e)) => return HttpResponse::BadRequest().body(format!("Invalid request: {}", e)),
        None => return HttpResponse::BadRequest().body("Missing json part"),
    };
    let Some(csv) = parts.remove("file") else {
        return HttpResponse::BadRequest().body("Missing CSV file");
    };

    let document = match store.get(&request.template_id) {
        Ok(Some(template)) => template.to_document(),
        Ok(None) => return HttpResponse::NotFound().body("Template not found"),
        Err(e) => {
            return HttpResponse::ServiceUnavailable()
                .body(format!("Error retrieving template: {}", e))
        }
    };

    let job = MergeJob {
        document,
        csv,
        editable: request.editable,
        chunk_size: config.merge_chunk_size.max(1),
        keep_results: config.merge_results_kept,
    };
    let job_id = schedule_merge_job(state.get_ref().clone(), job).await;
    info!("merge job {} started for template {}", job_id, request.template_id);
    HttpResponse::Ok().json(serde_json::json!({ "job_id": job_id }))
}

/// Everything a merge worker needs, owned so it can move to another thread.
struct MergeJob {
    document: Document,
    csv: Vec<u8>,
    editable: bool,
    chunk_size: usize,
    keep_results: usize,
}

async fn schedule_merge_job(state: JobsState, job: MergeJob) -> String {
    let job_id = state.register().await;

    let task_job_id = job_id.clone();
    let keep_results = job.keep_results;
    tokio::spawn(async move {
        let tx = state.tx.clone();
        let blocking_job_id = task_job_id.clone();
        let handle =
            tokio::task::spawn_blocking(move || merge_blocking(&tx, &blocking_job_id, job));

        let status = match handle.await {
            Ok(Ok(documents)) => {
                let count = documents.len();
                state
                    .store_results(task_job_id.clone(), documents, keep_results)
                    .await;
                JobStatus::Completed(count)
            }
            Ok(Err(e)) => JobStatus::Failed(e),
            Err(e) => JobStatus::Failed(format!("Merge task failed: {}", e)),
        };
        if let JobStatus::Failed(reason) = &status {
            error!("merge job {} failed: {}", task_job_id, reason);
        }
        let _ = state
            .tx
            .send(JobUpdate {
                job_id: task_job_id,
                status,
            })
            .await;
    });

    job_id
}

fn progress(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (done * 100 / total) as u32
}

/// Parses the records and renders them chunk by chunk, reporting progress.
fn merge_blocking(
    tx: &mpsc::Sender<JobUpdate>,
    job_id: &str,
    job: MergeJob,
) -> Result<Vec<String>, String> {
    let start = Instant::now();
    let report = |status| {
        let _ = tx.blocking_send(JobUpdate {
            job_id: job_id.to_string(),
            status,
        });
    };
    report(JobStatus::InProgress(0));

    let (_, records) = read_records(&job.csv)?;
    let options = GenerateOptions {
        editable: job.editable,
        ..GenerateOptions::default()
    };

    let mut documents = Vec::with_capacity(records.len());
    for chunk in records.chunks(job.chunk_size) {
        documents.extend(render_all(&job.document, &[], chunk, &options));
        report(JobStatus::InProgress(progress(documents.len(), records.len())));
    }

    info!(
        "merge job {} rendered {} documents in {:.2?}",
        job_id,
        documents.len(),
        start.elapsed()
    );
    Ok(documents)
}
