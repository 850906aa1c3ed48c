//! # Signature Generation Service
//!
//! Backs `POST /api/signatures/generate`. Renders a document to email-safe
//! table HTML, optionally resolved against one merge record or with mapped
//! fields shown as `{{column}}` placeholders.
//!
//! Generation is deterministic, so the `ETag` (MD5 of the body) only changes
//! when the rendered output does.

use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use common::html::{generate_document, GenerateOptions, RenderMode};
use common::merge::render_record;
use common::requests::GenerateRequest;
use log::debug;

pub async fn process(request: web::Json<GenerateRequest>) -> impl Responder {
    let request = request.into_inner();
    let options = GenerateOptions {
        editable: request.editable,
        mode: if request.preview {
            RenderMode::Preview
        } else {
            RenderMode::Literal
        },
    };

    let html = match &request.record {
        Some(record) => render_record(&request.document, &request.fonts, record, &options),
        None => generate_document(&request.document, &request.fonts, &options),
    };
    let etag = format!("\"{:x}\"", md5::compute(html.as_bytes()));
    debug!("generated {} bytes of signature HTML, etag {}", html.len(), etag);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((header::ETAG, etag))
        .body(html)
}

#[cfg(test)]
mod tests {
    use crate::services::configure;
    use actix_web::{http::header, test, App};
    use common::merge::Record;
    use common::model::factory::{new_item, new_row, ItemKind};
    use common::model::{Document, Item, Text};
    use common::requests::GenerateRequest;

    fn request() -> GenerateRequest {
        let mut row = new_row(600, 0);
        row.cells[0].items.push(Item::Text(Text {
            content: "Jane".to_string(),
            content_mapping: Some("name".to_string()),
            ..Text::default()
        }));
        row.cells[0].items.push(new_item(ItemKind::Spacer));
        GenerateRequest {
            document: Document {
                rows: vec![row],
                ..Document::default()
            },
            ..GenerateRequest::default()
        }
    }

    async fn generate(body: &GenerateRequest) -> (String, String) {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/signatures/generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let etag = resp
            .headers()
            .get(header::ETAG)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        let body = test::read_body(resp).await;
        (String::from_utf8(body.to_vec()).unwrap(), etag)
    }

    #[actix_web::test]
    async fn etag_is_md5_of_body_and_stable() {
        let (html, etag) = generate(&request()).await;
        assert_eq!(etag, format!("\"{:x}\"", md5::compute(html.as_bytes())));
        assert!(html.contains("Jane"));

        let (again, again_etag) = generate(&request()).await;
        assert_eq!(html, again);
        assert_eq!(etag, again_etag);
    }

    #[actix_web::test]
    async fn preview_and_record_modes() {
        let mut preview = request();
        preview.preview = true;
        let (html, _) = generate(&preview).await;
        assert!(html.contains("{{name}}"));

        let mut merged = request();
        merged.preview = true;
        merged.record = Some(Record::from([("name".to_string(), "Bob".to_string())]));
        let (html, _) = generate(&merged).await;
        assert!(html.contains("Bob"));
        assert!(!html.contains("{{name}}"));
    }
}
