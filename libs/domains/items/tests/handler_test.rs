//! HTTP-level tests for the items router, against in-memory repositories.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_items::{
    Class, InMemoryCatalog, InMemoryItemRepository, ItemService, Title, handlers,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let items = InMemoryItemRepository::new();
    let catalog = InMemoryCatalog::new();

    catalog
        .insert_class(Class {
            id: 3,
            name: "Sci-Fi".to_string(),
        })
        .await;
    catalog
        .insert_class(Class {
            id: 4,
            name: "Drama".to_string(),
        })
        .await;
    catalog
        .insert_title(Title {
            id: 5,
            name: "Blade Runner".to_string(),
            class_id: 3,
        })
        .await;
    catalog
        .insert_title(Title {
            id: 6,
            name: "Casablanca".to_string(),
            class_id: 4,
        })
        .await;

    handlers::router(ItemService::new(items, catalog))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_item(serial: &str, title_id: i64) -> Value {
    json!({
        "serialNumber": serial,
        "acquisitionDate": "2024-01-10",
        "type": "DVD",
        "titleId": title_id
    })
}

#[tokio::test]
async fn test_create_item_returns_created_dto() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/", sample_item("SN-001", 5)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["serialNumber"], "SN-001");
    assert_eq!(body["acquisitionDate"], "2024-01-10");
    assert_eq!(body["type"], "DVD");
    assert_eq!(body["titleId"], 5);
}

#[tokio::test]
async fn test_create_item_ignores_client_supplied_id() {
    let app = test_app().await;

    let mut payload = sample_item("SN-001", 5);
    payload["id"] = json!(999);

    let response = app
        .oneshot(json_request("POST", "/", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_create_item_with_unknown_title_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/", sample_item("SN-001", 999)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Title not found for the supplied ID: 999")
    );
}

#[tokio::test]
async fn test_create_item_with_empty_serial_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/", sample_item("", 5)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_item_round_trip() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/", sample_item("SN-001", 5)))
        .await
        .unwrap();
    let created_body = json_body(created).await;
    let id = created_body["id"].as_i64().unwrap();

    let response = app.oneshot(get_request(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, created_body);
}

#[tokio::test]
async fn test_get_unknown_item_is_not_found() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_item_with_non_numeric_id_is_bad_request() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_items_returns_all_in_id_order() {
    let app = test_app().await;

    for serial in ["SN-001", "SN-002"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/", sample_item(serial, 5)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["serialNumber"], "SN-001");
    assert_eq!(items[1]["serialNumber"], "SN-002");
}

#[tokio::test]
async fn test_update_item_replaces_fields() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/", sample_item("SN-001", 5)))
        .await
        .unwrap();
    let id = json_body(created).await["id"].as_i64().unwrap();

    let replacement = json!({
        "serialNumber": "SN-099",
        "acquisitionDate": "2025-06-01",
        "type": "BLURAY",
        "titleId": 6
    });
    let response = app
        .oneshot(json_request("PUT", &format!("/{}", id), replacement))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["serialNumber"], "SN-099");
    assert_eq!(body["type"], "BLURAY");
    assert_eq!(body["titleId"], 6);
}

#[tokio::test]
async fn test_update_unknown_item_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("PUT", "/42", sample_item("SN-001", 5)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_item_then_get_is_not_found() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/", sample_item("SN-001", 5)))
        .await
        .unwrap();
    let id = json_body(created).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_item_title() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/", sample_item("SN-001", 5)))
        .await
        .unwrap();
    let id = json_body(created).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(get_request(&format!("/{}/titulo", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["name"], "Blade Runner");
    assert_eq!(body["classId"], 3);
}

#[tokio::test]
async fn test_get_item_class_traverses_title() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/", sample_item("SN-001", 6)))
        .await
        .unwrap();
    let id = json_body(created).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(get_request(&format!("/{}/classe", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Drama");
}

#[tokio::test]
async fn test_get_title_class() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/titulos/5/classe")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["name"], "Sci-Fi");
}

#[tokio::test]
async fn test_get_class_for_unknown_title_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(get_request("/titulos/999/classe"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
