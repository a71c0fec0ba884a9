//! # nb-api
//!
//! The Nodebucket HTTP surface: five employee task endpoints under
//! `/api/employees`, a health check, and an optional static frontend.
//!
//! Errors from every route (including unmatched ones) are rendered by
//! [`ApiError`] as `{type: "error", status, message, stack?}`.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use std::path::Path;
use std::time::Duration;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{Method, header::CONTENT_TYPE},
    middleware,
    routing::{delete, get},
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

use nb_config::ServerConfig;

/// Build the application router.
///
/// When `static_dir` is set, unmatched paths are served from that directory
/// first and only fall through to the 404 envelope if no file exists.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/{emp_id}", get(handlers::get_employee))
        .route(
            "/{emp_id}/tasks",
            get(handlers::list_tasks)
                .post(handlers::create_task)
                .put(handlers::replace_task_lists),
        )
        .route("/{emp_id}/tasks/{task_id}", delete(handlers::delete_task));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/employees", api);

    let app = match static_dir {
        // Non-GET requests to unmatched paths get the 404 envelope, not a bare 405.
        Some(dir) => app.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(handlers::not_found.into_service()),
        ),
        None => app.fallback(handlers::not_found),
    };

    app.layer(middleware::from_fn_with_state(state.clone(), error::attach_stack))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let app = router(state, config.static_dir.as_deref().map(Path::new));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(%address, environment = ?config.environment, "nodebucket listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
