use utoipa::OpenApi;

use crate::error::HealthResponse;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ranaland",
        version = "0.1.0",
        description = "Personal biography page served behind a single-route shell"
    ),
    paths(
        handlers::health::health_handler,
        handlers::page::page_handler
    ),
    components(
        schemas(HealthResponse)
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "pages", description = "Rendered HTML pages")
    )
)]
pub struct ApiDoc;
