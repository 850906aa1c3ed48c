mod config;
mod job_controller;
mod services;

use crate::config::ServerConfig;
use crate::job_controller::state::{start_job_updater, JobsState};
use crate::services::templates::store::TemplateStore;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServerConfig::parse();
    env_logger::init_from_env(Env::default().default_filter_or(&config.log_level));

    let store = TemplateStore::open(&config.database).map_err(io::Error::other)?;

    // Initialize job controller state
    let (jobs_state, rx) = JobsState::new();
    tokio::spawn(start_job_updater(jobs_state.clone(), rx));

    info!("Server running at http://{}:{}", config.host, config.port);

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(config.json_limit))
            .app_data(web::PayloadConfig::default().limit(config.json_limit))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(jobs_state.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(services::configure)
    })
    .bind(bind)?
    .run()
    .await
}
