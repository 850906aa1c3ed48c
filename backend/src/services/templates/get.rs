//! # Template Retrieval Service
//!
//! Backs `GET /api/templates` and `GET /api/templates/{template_id}`.

use super::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for the `GET /api/templates/{template_id}` endpoint.
///
/// # Returns
/// - `200 OK` with the `SignatureTemplate` as JSON.
/// - `404 Not Found` if no template has this id.
/// - `503 Service Unavailable` if the database cannot be read.
pub async fn process(
    store: web::Data<TemplateStore>,
    template_id: web::Path<String>,
) -> impl Responder {
    match store.get(&template_id) {
        Ok(Some(template)) => HttpResponse::Ok().json(template),
        Ok(None) => HttpResponse::NotFound().body("Template not found"),
        Err(e) => {
            error!("reading template {} failed: {}", template_id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving template: {}", e))
        }
    }
}

/// Actix web handler for the `GET /api/templates` endpoint.
pub async fn list(store: web::Data<TemplateStore>) -> impl Responder {
    match store.list() {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => {
            error!("listing templates failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error listing templates: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::{configure, test_support::TestContext};
    use actix_web::{test, web, App};
    use common::model::{Document, SignatureTemplate};

    #[actix_web::test]
    async fn lists_by_name_and_gets_one() {
        let ctx = TestContext::new();
        for name in ["Zulu", "Alpha"] {
            let mut template = SignatureTemplate::snapshot(name, &Document::default());
            template.id = name.to_lowercase();
            ctx.store.save(&template).unwrap();
        }
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.store.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let listed: Vec<SignatureTemplate> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<_> = listed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Zulu"]);

        let req = test::TestRequest::get().uri("/api/templates/zulu").to_request();
        let one: SignatureTemplate = test::call_and_read_body_json(&app, req).await;
        assert_eq!(one.name, "Zulu");

        let req = test::TestRequest::get().uri("/api/templates/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
