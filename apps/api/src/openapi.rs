//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Locadora API",
        version = "0.1.0",
        description = "REST API for managing rental store items",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/itens", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Itens", description = "Rental item management endpoints")
    )
)]
pub struct ApiDoc;
