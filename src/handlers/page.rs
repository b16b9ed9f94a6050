use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use crate::views::{self, shell::ShellTemplate};
use axum::{
    extract::State,
    http::{Method, Uri},
};

/// Page navigation handler, mounted as the router fallback
///
/// Every path that is not an API or asset route lands here and is looked up
/// in the route table. Unknown paths get the not-found page with a 404.
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Biography page", content_type = "text/html", body = String),
        (status = 404, description = "No page at this path", content_type = "text/html", body = String),
        (status = 405, description = "Method other than GET or HEAD", content_type = "text/html", body = String),
        (status = 500, description = "Template render failure", body = String)
    ),
    tag = "pages"
)]
pub async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<ShellTemplate, ApiError> {
    let path = uri.path();

    if method != Method::GET && method != Method::HEAD {
        tracing::warn!("Rejected {} for page path: {}", method, path);
        return Err(ApiError::MethodNotAllowed(method));
    }

    match state.routes.resolve(path) {
        Some(view) => {
            tracing::info!("Rendering {:?} view for path: {}", view, path);
            Ok(views::render_page(view)?)
        }
        None => {
            tracing::warn!("No route matched path: {}", path);
            Err(ApiError::RouteNotFound(path.to_string()))
        }
    }
}
