use super::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

/// Actix web handler for `DELETE /api/templates/{template_id}`.
pub async fn process(
    store: web::Data<TemplateStore>,
    template_id: web::Path<String>,
) -> impl Responder {
    match store.delete(&template_id) {
        Ok(true) => {
            info!("template {} deleted", template_id);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => HttpResponse::NotFound().body("Template not found"),
        Err(e) => {
            error!("deleting template {} failed: {}", template_id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error deleting template: {}", e))
        }
    }
}
