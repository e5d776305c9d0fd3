use crate::config::config::Config;
use crate::controller::handler::{health_check, not_found};
use crate::repository::database::Database;
use crate::repository::migrations::run_migrations;
use crate::util::real_ip_key_extractor::RealIpKeyExtractor;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use log::info;
use std::io;

mod config;
mod controller;
mod error;
mod model;
mod repository;
mod service;
mod util;

pub struct AppState {
    db: Database,
    config: Config,
}

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::init().map_err(startup_error)?;
    log4rs::init_file(&config.log_config_path, Default::default())
        .map_err(|e| startup_error(format!("log config {}: {}", config.log_config_path, e)))?;

    if config.run_migrations {
        let database_url = config.database_url.clone();
        web::block(move || run_migrations(&database_url))
            .await
            .map_err(startup_error)?
            .map_err(startup_error)?;
    }

    let db = Database::new(&config).map_err(startup_error)?;
    let bind_addr = (config.server_host.clone(), config.server_port);

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_per_second)
        .burst_size(config.rate_limit_burst)
        .key_extractor(RealIpKeyExtractor)
        .finish()
        .ok_or_else(|| startup_error("invalid rate limit configuration"))?;

    let app_data = web::Data::new(AppState { db, config });

    info!("listening on {}:{}", bind_addr.0, bind_addr.1);
    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(controller::handler::config)
            .service(health_check)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
            .wrap(Governor::new(&governor_conf))
    })
    .bind(bind_addr)?
    .run()
    .await
}
