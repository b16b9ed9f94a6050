use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::views;

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of page routes the shell serves
    pub routes: usize,
}

/// Errors a page request can end in.
///
/// The first two render as a full HTML page inside the shell, so a browser
/// that lands on a bad URL still sees the site layout.
#[derive(Debug)]
pub enum ApiError {
    /// No entry in the route table for this path
    RouteNotFound(String),
    /// Pages only answer GET and HEAD
    MethodNotAllowed(Method),
    /// A template failed to render
    Render(askama::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RouteNotFound(path) => match views::render_not_found(&path) {
                Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
                Err(err) => ApiError::Render(err).into_response(),
            },
            ApiError::MethodNotAllowed(method) => {
                match views::render_method_not_allowed(method.as_str()) {
                    Ok(page) => (
                        StatusCode::METHOD_NOT_ALLOWED,
                        [(header::ALLOW, HeaderValue::from_static("GET, HEAD"))],
                        page,
                    )
                        .into_response(),
                    Err(err) => ApiError::Render(err).into_response(),
                }
            }
            ApiError::Render(err) => {
                tracing::error!("Template render failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::Render(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_is_internal_server_error() {
        let err = askama::Error::Custom(Box::new(std::fmt::Error));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = ApiError::MethodNotAllowed(Method::PUT).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET, HEAD");
    }
}
