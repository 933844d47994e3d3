//! Items Domain
//!
//! This module provides a complete domain implementation for managing rental
//! items: the physical copies (DVD, Blu-ray, VHS) of a titled work in the
//! rental catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, title resolution
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{
//!     handlers,
//!     repository::{InMemoryCatalog, InMemoryItemRepository},
//!     service::ItemService,
//! };
//!
//! // Create repositories and service
//! let items = InMemoryItemRepository::new();
//! let catalog = InMemoryCatalog::new();
//! let service = ItemService::new(items, catalog);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Class, Item, ItemDto, ItemInput, MediaType, NewItem, Title};
pub use postgres::{PgCatalog, PgItemRepository};
pub use repository::{CatalogRepository, InMemoryCatalog, InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
