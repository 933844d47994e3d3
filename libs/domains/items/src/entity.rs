//! Sea-ORM entities for the items, titles and classes tables.

use crate::models::{Class, Item, Title};

pub mod class {
    use sea_orm::entity::prelude::*;

    /// Sea-ORM Entity for the classes table
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "classes")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::title::Entity")]
        Title,
    }

    impl Related<super::title::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Title.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod title {
    use sea_orm::entity::prelude::*;

    /// Sea-ORM Entity for the titles table
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "titles")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
        pub class_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::class::Entity",
            from = "Column::ClassId",
            to = "super::class::Column::Id"
        )]
        Class,
        #[sea_orm(has_many = "super::item::Entity")]
        Item,
    }

    impl Related<super::class::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Class.def()
        }
    }

    impl Related<super::item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Item.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod item {
    use sea_orm::entity::prelude::*;

    use crate::models::MediaType;

    /// Sea-ORM Entity for the items table
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "items")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub serial_number: String,
        pub acquisition_date: Date,
        pub media_type: MediaType,
        pub title_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::title::Entity",
            from = "Column::TitleId",
            to = "super::title::Column::Id"
        )]
        Title,
    }

    impl Related<super::title::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Title.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// Conversions from Sea-ORM models to domain types

impl From<class::Model> for Class {
    fn from(model: class::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<title::Model> for Title {
    fn from(model: title::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            class_id: model.class_id,
        }
    }
}

/// Combine a fetched item row with its (already resolved) Title.
pub(crate) fn item_with_title(model: item::Model, title: Title) -> Item {
    Item {
        id: model.id,
        serial_number: model.serial_number,
        acquisition_date: model.acquisition_date,
        media_type: model.media_type,
        title,
    }
}
