//! Business logic for the items domain.
//!
//! The service owns validation and title resolution; repositories only move
//! data. Dependencies are injected through the constructor so tests can
//! substitute mocks or in-memory stores.

use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{Class, ItemDto, ItemInput, NewItem, Title};
use crate::repository::{CatalogRepository, ItemRepository};

/// Item business logic over injected repositories.
pub struct ItemService<R, C>
where
    R: ItemRepository,
    C: CatalogRepository,
{
    items: Arc<R>,
    catalog: Arc<C>,
}

impl<R, C> Clone for ItemService<R, C>
where
    R: ItemRepository,
    C: CatalogRepository,
{
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<R, C> ItemService<R, C>
where
    R: ItemRepository,
    C: CatalogRepository,
{
    pub fn new(items: R, catalog: C) -> Self {
        Self {
            items: Arc::new(items),
            catalog: Arc::new(catalog),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<ItemDto>> {
        let items = self.items.list().await?;
        Ok(items.iter().map(ItemDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<ItemDto> {
        let item = self
            .items
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;
        Ok(ItemDto::from(item))
    }

    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: ItemInput) -> ItemResult<ItemDto> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let title = self.resolve_title(input.title_id).await?;
        let created = self.items.insert(NewItem::new(input, title)).await?;
        Ok(ItemDto::from(created))
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i64, input: ItemInput) -> ItemResult<ItemDto> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let title = self.resolve_title(input.title_id).await?;
        let updated = self.items.update(id, NewItem::new(input, title)).await?;
        Ok(ItemDto::from(updated))
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        if self.items.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    /// The Title the item is a copy of.
    #[instrument(skip(self))]
    pub async fn title_for_item(&self, id: i64) -> ItemResult<Title> {
        let item = self
            .items
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;
        Ok(item.title)
    }

    /// Classification of a Title, looked up directly by title id.
    #[instrument(skip(self))]
    pub async fn class_for_title(&self, title_id: i64) -> ItemResult<Class> {
        let title = self
            .catalog
            .title_by_id(title_id)
            .await?
            .ok_or(ItemError::TitleNotFound(title_id))?;
        self.catalog
            .class_by_id(title.class_id)
            .await?
            .ok_or(ItemError::ClassNotFound(title.class_id))
    }

    /// Classification of an item, traversing item -> title -> class.
    #[instrument(skip(self))]
    pub async fn class_for_item(&self, id: i64) -> ItemResult<Class> {
        let title = self.title_for_item(id).await?;
        self.catalog
            .class_by_id(title.class_id)
            .await?
            .ok_or(ItemError::ClassNotFound(title.class_id))
    }

    async fn resolve_title(&self, title_id: i64) -> ItemResult<Title> {
        self.catalog
            .title_by_id(title_id)
            .await?
            .ok_or(ItemError::InvalidTitleRef(title_id))
    }
}
