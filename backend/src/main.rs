//! Entry point: wires the REST endpoints, health probes, and OpenAPI docs.

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use edutrack::inbound::http::health::HealthState;
use edutrack::server::{ServerConfig, build_app, build_http_state, seed_example_data};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    let state = web::Data::new(build_http_state());
    if config.seed_example_data {
        if let Err(error) = seed_example_data(&state).await {
            warn!(error = %error, "example data seeding failed");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flag stays shared.
    let server_health_state = health_state.clone();
    let server_state = state.clone();
    let server = HttpServer::new(move || {
        build_app(server_state.clone(), server_health_state.clone())
    })
    .bind((config.bind_addr.as_str(), config.port))?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, port = config.port, "edutrack listening");
    server.run().await
}
