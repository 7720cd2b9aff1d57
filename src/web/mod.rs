pub mod render;
pub mod routes;

use std::path::Path;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use routes::{modal, pages, participants};

/// Builds the full application: pages, modal fragments, registration and static assets.
pub fn router(pool: SqlitePool, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::home_page))
        .route("/about-us", get(pages::about_us_page))
        .route("/join-event", get(pages::join_event_page))
        .route("/faq", get(pages::faq_page))
        // Modal fragments
        .route("/modal/join-online", get(modal::join_online_modal))
        .route("/close-modal", get(modal::close_modal))
        // Registration
        .route(
            "/participants/online",
            post(participants::submit_registration),
        )
        .route(
            "/registration-confirmed",
            get(participants::registration_confirmed),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        // State
        .with_state(pool)
}
