//! # Template Saving Service
//!
//! Backs `POST /api/templates/save`. Saving under an existing id replaces that
//! template; no other stored data is touched.

use super::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::SignatureTemplate;
use log::{error, info};

pub async fn process(
    store: web::Data<TemplateStore>,
    template: web::Json<SignatureTemplate>,
) -> impl Responder {
    if template.id.trim().is_empty() {
        return HttpResponse::BadRequest().body("Template id must not be empty");
    }
    match store.save(&template) {
        Ok(()) => {
            info!("template {} saved", template.id);
            HttpResponse::Ok().body("Template saved successfully")
        }
        Err(e) => {
            error!("saving template {} failed: {}", template.id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving template: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::{configure, test_support::TestContext};
    use actix_web::{test, web, App};
    use common::model::{Document, SignatureTemplate};

    #[actix_web::test]
    async fn save_replaces_and_rejects_empty_id() {
        let ctx = TestContext::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.store.clone()))
                .configure(configure),
        )
        .await;

        let mut template = SignatureTemplate::snapshot("First", &Document::default());
        for name in ["First", "Second"] {
            template.name = name.to_string();
            let req = test::TestRequest::post()
                .uri("/api/templates/save")
                .set_json(&template)
                .to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }
        let stored = ctx.store.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Second");

        template.id = String::new();
        let req = test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(&template)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}
