//! Integration tests for the user registry endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_user_generates_identifiers() {
    let app = helpers::TestApp::new();

    let first = app.create_user("N", "n@x.com").await;
    let second = app.create_user("M", "m@x.com").await;

    let id = first["id"].as_str().unwrap();
    assert_eq!(id.len(), 20);
    assert!(first["memberNo"].as_u64().unwrap() < 1_000_000_000);
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_list_users_in_insertion_order() {
    let app = helpers::TestApp::new();
    app.create_user("First", "1@x.com").await;
    app.create_user("Second", "2@x.com").await;

    let response = app.request("GET", "/api/users", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "First");
    assert_eq!(users[1]["name"], "Second");
}

#[tokio::test]
async fn test_update_user_name_only() {
    let app = helpers::TestApp::new();
    let user = app.create_user("Old", "o@x.com").await;
    let id = user["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(serde_json::json!({ "name": "New" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = &response.body["data"];
    assert_eq!(updated["name"], "New");
    assert_eq!(updated["email"], "o@x.com");
    assert_eq!(updated["id"], user["id"]);
    assert_eq!(updated["memberNo"], user["memberNo"]);

    let listed = app.request("GET", "/api/users", None).await;
    let users = listed.body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "New");
}

#[tokio::test]
async fn test_update_unknown_user() {
    let app = helpers::TestApp::new();
    app.create_user("Keep", "k@x.com").await;

    let response = app
        .request(
            "PUT",
            "/api/users/00000000000000000000",
            Some(serde_json::json!({ "name": "Changed" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let listed = app.request("GET", "/api/users", None).await;
    assert_eq!(listed.body["data"][0]["name"], "Keep");
}

#[tokio::test]
async fn test_create_user_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({ "name": "", "email": "nope" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_email_resolves_to_first() {
    let app = helpers::TestApp::new();
    let first = app.create_user("First", "dup@x.com").await;
    app.create_user("Second", "dup@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({ "email": "dup@x.com" })),
        )
        .await;

    assert_eq!(response.body["data"]["id"], first["id"]);
    assert_eq!(response.body["data"]["name"], "First");
}

#[tokio::test]
async fn test_health_reports_user_count() {
    let app = helpers::TestApp::new();
    app.create_user("H", "h@x.com").await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["users"], 1);
}
