//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::get_user_profile;

/// Register every API route on a service config.
///
/// Shared between the real server and integration tests so both exercise
/// identical wiring.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").service(get_user_profile))
        .service(ready)
        .service(live);
}

/// Run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns [`std::io::Error`] when binding or serving fails.
pub async fn run(config: ServerConfig, http_state: HttpState) -> std::io::Result<()> {
    let http_state = web::Data::new(http_state);
    let health_state = web::Data::new(HealthState::new());

    let server = HttpServer::new({
        let http_state = http_state.clone();
        let health_state = health_state.clone();
        move || {
            App::new()
                .app_data(http_state.clone())
                .app_data(health_state.clone())
                .configure(configure_api)
        }
    })
    .bind(config.bind_addr())?;

    info!(addr = %config.bind_addr(), "listening");
    health_state.mark_ready();
    server.run().await
}
