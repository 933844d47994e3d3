use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestReferenceResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{Class, ItemDto, ItemInput, MediaType, Title};
use crate::repository::{CatalogRepository, ItemRepository};
use crate::service::ItemService;

const TAG: &str = "Itens";

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        get_item,
        update_item,
        delete_item,
        get_item_title,
        get_item_class,
        get_title_class,
    ),
    components(
        schemas(ItemDto, ItemInput, Title, Class, MediaType),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestReferenceResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Rental item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R, C>(service: ItemService<R, C>) -> Router
where
    R: ItemRepository + 'static,
    C: CatalogRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/{id}/titulo", get(get_item_title))
        .route("/{id}/classe", get(get_item_class))
        .route("/titulos/{id}/classe", get(get_title_class))
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of items", body = Vec<ItemDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
) -> ItemResult<Json<Vec<ItemDto>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created successfully", body = ItemDto),
        (status = 400, response = BadRequestReferenceResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<ItemDto>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Replace an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> ItemResult<Json<ItemDto>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
    IdPath(id): IdPath,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the title an item is a copy of
#[utoipa::path(
    get,
    path = "/{id}/titulo",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Title of the item", body = Title),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item_title<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Title>> {
    let title = service.title_for_item(id).await?;
    Ok(Json(title))
}

/// Get the classification of an item, through its title
#[utoipa::path(
    get,
    path = "/{id}/classe",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Classification of the item", body = Class),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item_class<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Class>> {
    let class = service.class_for_item(id).await?;
    Ok(Json(class))
}

/// Get the classification of a title
#[utoipa::path(
    get,
    path = "/titulos/{id}/classe",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Title ID")
    ),
    responses(
        (status = 200, description = "Classification of the title", body = Class),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_title_class<R: ItemRepository, C: CatalogRepository>(
    State(service): State<Arc<ItemService<R, C>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Class>> {
    let class = service.class_for_title(id).await?;
    Ok(Json(class))
}
