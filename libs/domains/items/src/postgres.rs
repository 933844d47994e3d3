//! PostgreSQL repository implementations backed by Sea-ORM.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use tracing::info;

use crate::entity::{self, item, title};
use crate::error::{ItemError, ItemResult};
use crate::models::{Class, Item, NewItem, Title};
use crate::repository::{CatalogRepository, ItemRepository};

/// Item repository over a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Title/class catalog over a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgCatalog {
    db: DatabaseConnection,
}

impl PgCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> ItemError {
    ItemError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn insert(&self, new_item: NewItem) -> ItemResult<Item> {
        let active = item::ActiveModel {
            id: NotSet,
            serial_number: Set(new_item.serial_number),
            acquisition_date: Set(new_item.acquisition_date),
            media_type: Set(new_item.media_type),
            title_id: Set(new_item.title.id),
        };

        let model = active.insert(&self.db).await.map_err(db_err)?;
        info!(item_id = model.id, "Created item");
        Ok(entity::item_with_title(model, new_item.title))
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let row = item::Entity::find_by_id(id)
            .find_also_related(title::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match row {
            Some((model, Some(title_model))) => {
                Ok(Some(entity::item_with_title(model, title_model.into())))
            }
            // Foreign key guarantees a title; a missing one means the data
            // is corrupt.
            Some((model, None)) => Err(ItemError::Internal(format!(
                "Item {} references a missing title",
                model.id
            ))),
            None => Ok(None),
        }
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let rows = item::Entity::find()
            .find_also_related(title::Entity)
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        rows.into_iter()
            .map(|(model, title_model)| match title_model {
                Some(title_model) => Ok(entity::item_with_title(model, title_model.into())),
                None => Err(ItemError::Internal(format!(
                    "Item {} references a missing title",
                    model.id
                ))),
            })
            .collect()
    }

    async fn update(&self, id: i64, new_item: NewItem) -> ItemResult<Item> {
        let existing = item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(ItemError::NotFound(id))?;

        let mut active: item::ActiveModel = existing.into();
        active.serial_number = Set(new_item.serial_number);
        active.acquisition_date = Set(new_item.acquisition_date);
        active.media_type = Set(new_item.media_type);
        active.title_id = Set(new_item.title.id);

        let model = active.update(&self.db).await.map_err(db_err)?;
        info!(item_id = model.id, "Updated item");
        Ok(entity::item_with_title(model, new_item.title))
    }

    async fn delete(&self, id: i64) -> ItemResult<bool> {
        let result = item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        let removed = result.rows_affected > 0;
        if removed {
            info!(item_id = id, "Deleted item");
        }
        Ok(removed)
    }
}

#[async_trait]
impl CatalogRepository for PgCatalog {
    async fn title_by_id(&self, id: i64) -> ItemResult<Option<Title>> {
        let model = title::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Title::from))
    }

    async fn class_by_id(&self, id: i64) -> ItemResult<Option<Class>> {
        let model = entity::class::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Class::from))
    }
}
