//! Repository traits and in-memory implementations.
//!
//! The traits are the seams the service is built against; the Postgres
//! implementations live in [`crate::postgres`], and the in-memory ones here
//! back hermetic tests and local development.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{ItemError, ItemResult};
use crate::models::{Class, Item, NewItem, Title};

/// Storage operations for items.
///
/// Identifiers are assigned by the store on insert; callers never supply
/// them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn insert(&self, item: NewItem) -> ItemResult<Item>;
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;
    async fn list(&self) -> ItemResult<Vec<Item>>;
    /// Full replace of the stored item. Fails with [`ItemError::NotFound`]
    /// when no item exists under `id`.
    async fn update(&self, id: i64, item: NewItem) -> ItemResult<Item>;
    /// Returns whether an item was actually removed.
    async fn delete(&self, id: i64) -> ItemResult<bool>;
}

/// Read access to the titles/classes catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn title_by_id(&self, id: i64) -> ItemResult<Option<Title>>;
    async fn class_by_id(&self, id: i64) -> ItemResult<Option<Class>>;
}

/// In-memory item store keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<i64, Item>>>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, item: NewItem) -> ItemResult<Item> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item {
            id,
            serial_number: item.serial_number,
            acquisition_date: item.acquisition_date,
            media_type: item.media_type,
            title: item.title,
        };

        let mut items = self.items.write().await;
        items.insert(id, item.clone());
        info!(item_id = id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;
        let mut all: Vec<Item> = items.values().cloned().collect();
        all.sort_by_key(|item| item.id);
        Ok(all)
    }

    async fn update(&self, id: i64, item: NewItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;
        if !items.contains_key(&id) {
            return Err(ItemError::NotFound(id));
        }

        let updated = Item {
            id,
            serial_number: item.serial_number,
            acquisition_date: item.acquisition_date,
            media_type: item.media_type,
            title: item.title,
        };
        items.insert(id, updated.clone());
        info!(item_id = id, "Updated item");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        let removed = items.remove(&id).is_some();
        if removed {
            info!(item_id = id, "Deleted item");
        }
        Ok(removed)
    }
}

/// In-memory catalog with seeding helpers for tests and local runs.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    titles: Arc<RwLock<HashMap<i64, Title>>>,
    classes: Arc<RwLock<HashMap<i64, Class>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_title(&self, title: Title) {
        let mut titles = self.titles.write().await;
        titles.insert(title.id, title);
    }

    pub async fn insert_class(&self, class: Class) {
        let mut classes = self.classes.write().await;
        classes.insert(class.id, class);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn title_by_id(&self, id: i64) -> ItemResult<Option<Title>> {
        let titles = self.titles.read().await;
        Ok(titles.get(&id).cloned())
    }

    async fn class_by_id(&self, id: i64) -> ItemResult<Option<Class>> {
        let classes = self.classes.read().await;
        Ok(classes.get(&id).cloned())
    }
}
