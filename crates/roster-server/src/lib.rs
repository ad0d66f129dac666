pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use anyhow::Context;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::Router;
use roster_core::config::Config;
use roster_core::Roster;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(roster: Arc<Roster>) -> Router {
    let app_state = state::AppState::new(roster);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        // Activities
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(routes::activities::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(routes::activities::unregister),
        )
        // Health
        .route("/api/health", get(routes::health::health))
        // Frontend
        .route("/static/{*path}", get(embed::static_handler))
        .fallback(embed::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the roster server on the address named in `config`.
pub async fn serve(config: &Config, open_browser: bool) -> anyhow::Result<()> {
    let roster = Arc::new(config.roster().context("failed to load activity catalog")?);
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    serve_on(roster, listener, open_browser).await
}

/// Start the roster server on a pre-bound listener.
///
/// Accepts a `TcpListener` that was already bound so the caller can read the
/// actual port before starting (useful when `port = 0`).
pub async fn serve_on(
    roster: Arc<Roster>,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let activities = roster.len();
    let app = build_router(roster);

    tracing::info!(
        activities,
        "activity roster listening on http://localhost:{actual_port}"
    );

    if open_browser {
        let url = format!("http://localhost:{actual_port}/");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
