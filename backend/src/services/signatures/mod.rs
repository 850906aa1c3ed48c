//! # Signature Services
//!
//! Stateless rendering endpoints: document tree to table HTML and back.

mod generate;
mod parse;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/signatures";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/generate", post().to(generate::process))
        .route("/parse", post().to(parse::process))
}
