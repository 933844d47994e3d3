use chrono::NaiveDate;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

/// Physical media format of a rental item
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "media_type")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MediaType {
    #[sea_orm(string_value = "DVD")]
    Dvd,
    #[sea_orm(string_value = "BLURAY")]
    Bluray,
    #[sea_orm(string_value = "VHS")]
    Vhs,
}

/// A titled work in the rental catalog. Items are physical copies of a Title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    /// Unique identifier
    pub id: i64,
    /// Display name of the work
    pub name: String,
    /// Classification this title belongs to
    pub class_id: i64,
}

/// Classification associated with a Title (and transitively with its Items)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    /// Unique identifier
    pub id: i64,
    /// Classification name
    pub name: String,
}

/// Item entity - a physical rentable copy of a Title.
///
/// The Title relation is held fully resolved; an Item never carries a
/// dangling title reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub serial_number: String,
    pub acquisition_date: NaiveDate,
    pub media_type: MediaType,
    pub title: Title,
}

/// Wire representation of an Item: the Title relation flattened to its id.
///
/// All item endpoints respond with this shape; the domain entity is never
/// serialized directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i64,
    pub serial_number: String,
    pub acquisition_date: NaiveDate,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title_id: i64,
}

/// Request body for creating or updating an item (full-replace semantics).
///
/// The server assigns identifiers: a client-supplied `id` field is ignored.
/// `titleId` must reference an existing title; an unresolved reference is a
/// client error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[validate(length(min = 1, max = 64))]
    pub serial_number: String,
    pub acquisition_date: NaiveDate,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[validate(range(min = 1))]
    pub title_id: i64,
}

/// A fully resolved item payload, ready for persistence.
///
/// Produced by the service after the catalog confirmed the title reference.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub serial_number: String,
    pub acquisition_date: NaiveDate,
    pub media_type: MediaType,
    pub title: Title,
}

impl NewItem {
    /// Combine a validated input with its resolved Title.
    pub fn new(input: ItemInput, title: Title) -> Self {
        debug_assert_eq!(input.title_id, title.id);
        Self {
            serial_number: input.serial_number,
            acquisition_date: input.acquisition_date,
            media_type: input.media_type,
            title,
        }
    }
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            serial_number: item.serial_number.clone(),
            acquisition_date: item.acquisition_date,
            media_type: item.media_type,
            title_id: item.title.id,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        (&item).into()
    }
}
