pub mod middleware;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::ActivityStore;
use routes::{activities, activity, health};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ActivityStore>,
}

impl AppState {
    pub fn new(store: ActivityStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub const INDEX_PATH: &str = "/static/index.html";

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::activity_unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())).layer(
                SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ),
            ),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum_middleware::from_fn(middleware::request_log::request_log))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
