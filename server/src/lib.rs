//! # Armstrong Checker Backend
//!
//! JSON API around the [`armstrong`] evaluator. Each call is recorded as an
//! attempt against the requesting user so history can be paged back out.
//!
//! ## Endpoints
//!
//! - `POST /check` `{user, number}`: single-number check with the worked-out
//!   derivation in the response
//! - `POST /range` `{user, min, max}`: every Armstrong number in the
//!   inclusive range, width capped by `RANGE_LIMIT`
//! - `GET /attempts?user=&page=`: newest-first attempt history, paginated
//!
//! ## Input policy
//!
//! The evaluator itself answers any integer, but the API mirrors the form
//! rules: negative numbers and inverted ranges are rejected with 400 before
//! anything is evaluated or stored. Range width is capped here too, the
//! evaluator places no limit of its own.
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use routes::{attempts_handler, check_handler, range_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .map(|origin| origin.parse().expect("CORS origins misconfigured!"))
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/check", post(check_handler))
        .route("/range", post(range_handler))
        .route("/attempts", get(attempts_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
