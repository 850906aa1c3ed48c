//! # Signature Parsing Service
//!
//! Backs `POST /api/signatures/parse`: rebuilds a document tree and its
//! custom fonts from signature HTML.

use actix_web::{web, HttpResponse, Responder};
use common::html::parse;
use common::requests::ParseRequest;
use log::warn;

pub async fn process(request: web::Json<ParseRequest>) -> impl Responder {
    match parse(&request.html) {
        Ok(parsed) => HttpResponse::Ok().json(parsed),
        Err(e) => {
            warn!("rejected signature HTML: {}", e);
            HttpResponse::UnprocessableEntity().body(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::configure;
    use actix_web::{test, App};
    use common::html::ParsedDocument;
    use common::requests::ParseRequest;

    #[actix_web::test]
    async fn parses_a_table() {
        let app = test::init_service(App::new().configure(configure)).await;
        let html = r#"<table width="500"><tr><td><table><tr><td valign="top"><div>Hi</div></td></tr></table></td></tr></table>"#;
        let req = test::TestRequest::post()
            .uri("/api/signatures/parse")
            .set_json(ParseRequest {
                html: html.to_string(),
            })
            .to_request();
        let parsed: ParsedDocument = test::call_and_read_body_json(&app, req).await;
        assert_eq!(parsed.document.max_width, 500);
        assert_eq!(parsed.document.rows.len(), 1);
    }

    #[actix_web::test]
    async fn html_without_table_is_unprocessable() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/signatures/parse")
            .set_json(ParseRequest {
                html: "<p>hello</p>".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("no top-level <table>"));
    }
}
