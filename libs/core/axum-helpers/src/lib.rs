//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP services in this
//! workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with a shared [`AppError`]
//! - **[`extractors`]**: Custom extractors (integer path ids, validated JSON)
//! - **[`http`]**: Security header middleware
//! - **[`server`]**: Router setup with OpenAPI docs, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};
