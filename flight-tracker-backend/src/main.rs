//! Backend crate for the flight paths tracker.
//!
//! Uses actix to serve the tracking API, taking in an unordered bag of tickets and answering with
//! where the whole trip starts and ends.

pub mod api_docs;
pub mod config;
pub mod errors;
pub mod logging;
pub mod request_id;
pub mod tracker;
pub mod web_app;

use actix_web::{
    middleware::{from_fn, Logger},
    web, App, HttpServer,
};
use anyhow::Context;
use clap::Parser;
use config::ServerConfig;
use tracker::FlightTracker;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logging::init_logger(config.log_format, config.verbose)?;
    config.validate()?;
    tracing::debug!("Server config: {:?}", config);

    let tracker = web::Data::new(FlightTracker::new());
    let json_limit = config.json_limit;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(tracker.clone())
            .configure(|cfg| web_app::configure(cfg, json_limit))
            .wrap(from_fn(request_id::propagate))
            .wrap(Logger::new(logging::ACCESS_LOG_FORMAT))
    })
    // SIGINT/SIGTERM stop accepting connections, in-flight requests get this long to finish
    .shutdown_timeout(config.shutdown_timeout);

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    tracing::info!("Listening server on {}:{}", config.host, config.port);
    server.run().await.context("server exited with an error")?;
    tracing::info!("Server gracefully stopped");

    Ok(())
}
