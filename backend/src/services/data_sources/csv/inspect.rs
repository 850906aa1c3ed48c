//! # CSV Inspection Service
//!
//! Backs `POST /api/data_sources/csv/inspect`. Reads an uploaded CSV `file`
//! part and answers with its column titles, each paired with the first data
//! row's value. Nothing is stored.

use super::records;
use crate::services::read_multipart;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use log::{info, warn};

pub async fn process(payload: Multipart) -> impl Responder {
    let mut parts = match read_multipart(payload).await {
        Ok(parts) => parts,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    let Some(file) = parts.remove("file") else {
        return HttpResponse::BadRequest().body("Missing CSV file");
    };

    match records::inspect(&file) {
        Ok(columns) => {
            info!("inspected CSV with {} columns", columns.len());
            HttpResponse::Ok().json(columns)
        }
        Err(e) => {
            warn!("unreadable CSV upload: {}", e);
            HttpResponse::BadRequest().body(format!("Invalid CSV: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::configure;
    use crate::services::test_support::multipart_body;
    use actix_web::{http::header, test, App};
    use common::model::csv::ColumnCheck;

    #[actix_web::test]
    async fn answers_columns_of_an_upload() {
        let app = test::init_service(App::new().configure(configure)).await;
        let (content_type, body) =
            multipart_body(&[("file", Some("people.csv"), "name;title\nJane;CEO\n")]);
        let req = test::TestRequest::post()
            .uri("/api/data_sources/csv/inspect")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let columns: Vec<ColumnCheck> = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<_> = columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["name", "title"]);
        assert_eq!(columns[1].first_row.as_deref(), Some("CEO"));
    }

    #[actix_web::test]
    async fn rejects_non_csv_files() {
        let app = test::init_service(App::new().configure(configure)).await;
        let (content_type, body) = multipart_body(&[("file", Some("people.txt"), "name\n")]);
        let req = test::TestRequest::post()
            .uri("/api/data_sources/csv/inspect")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}
