//! Router configuration for the HTTP host.

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers, routes, state::AppState};

/// Create the main router.
///
/// API and asset routes are registered directly; every other request falls
/// through to the page handler, which consults the route table.
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::OPENAPI, get(handlers::openapi_handler))
        .nest_service(routes::ASSETS, assets)
        .fallback(handlers::page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_missing_asset_is_not_a_page() {
        let config = Config {
            service_port: 3000,
            service_host: "127.0.0.1".to_string(),
            assets_dir: PathBuf::from("does-not-exist"),
        };
        let app = create_router(AppState::new(config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/assets/profile_picture.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("Page not found"));
    }

    #[tokio::test]
    async fn test_health_is_routed_before_fallback() {
        let config = Config {
            service_port: 3000,
            service_host: "127.0.0.1".to_string(),
            assets_dir: PathBuf::from("assets"),
        };
        let app = create_router(AppState::new(config));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
