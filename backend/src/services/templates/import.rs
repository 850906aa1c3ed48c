//! # Template Import Service
//!
//! Backs `POST /api/templates/import`. The body is raw JSON text holding one
//! template or an array of them. Malformed entries and entries whose id is
//! already stored are skipped; the response only says how many were taken.

use super::store::{StoreError, TemplateStore};
use actix_web::{web, HttpResponse, Responder};
use common::requests::ImportResponse;
use log::error;

pub async fn process(store: web::Data<TemplateStore>, body: String) -> impl Responder {
    match store.import(&body) {
        Ok(accepted) => HttpResponse::Ok().json(ImportResponse { accepted }),
        Err(StoreError::Json(e)) => HttpResponse::BadRequest().body(format!("Invalid JSON: {}", e)),
        Err(e) => {
            error!("template import failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error importing templates: {}", e))
        }
    }
}
