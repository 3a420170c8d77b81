//! Integration tests for token issuance and session validation.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_authenticate_known_user() {
    let app = helpers::TestApp::new();
    let user = app.create_user("N", "known@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({ "email": "known@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["code"], 200);
    assert_eq!(data["message"], "Success");
    assert_eq!(data["expired"], 600);
    assert_eq!(data["id"], user["id"]);
    assert_eq!(data["memberNo"], user["memberNo"]);
    assert!(!data["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_authenticate_unknown_user_is_not_an_error() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth",
            Some(serde_json::json!({ "email": "missing@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["code"], 404);
    assert_eq!(data["token"], "");
    assert_eq!(data["id"], "");
    assert_eq!(data["name"], "");
    assert_eq!(data["email"], "");
    assert!(data["memberNo"].is_null());
}

#[tokio::test]
async fn test_authenticate_empty_email_is_denied() {
    let app = helpers::TestApp::new();
    app.create_user("N", "n@x.com").await;

    let response = app
        .request("POST", "/api/auth", Some(serde_json::json!({ "email": "" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["code"], 404);
    assert_eq!(data["token"], "");
    assert!(data["memberNo"].is_null());
}

#[tokio::test]
async fn test_validate_session_round_trip() {
    let app = helpers::TestApp::new();
    let user = app.create_user("V", "v@x.com").await;
    let token = app.token_for("v@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "tokenId": token, "email": "v@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["id"], user["id"]);
    assert_eq!(data["name"], "V");
    assert_eq!(data["memberNo"], user["memberNo"]);
    assert_eq!(data["expired"], 600);
}

#[tokio::test]
async fn test_token_bound_to_its_email() {
    let app = helpers::TestApp::new();
    app.create_user("A", "a@x.com").await;
    app.create_user("B", "b@x.com").await;
    let token = app.token_for("a@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "tokenId": token, "email": "b@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_expired_token() {
    let app = helpers::TestApp::new();
    app.create_user("E", "e@x.com").await;
    let token = app.token_for("e@x.com").await;

    app.clock.advance_seconds(601);

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "tokenId": token, "email": "e@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_tampered_token() {
    let app = helpers::TestApp::new();
    app.create_user("T", "t@x.com").await;
    let token = app.token_for("t@x.com").await;

    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let signature = parts.pop().unwrap();
    let flipped = if signature.starts_with('A') { "B" } else { "A" };
    parts.push(format!("{flipped}{}", &signature[1..]));
    let tampered = parts.join(".");

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "tokenId": tampered, "email": "t@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_session_for_unknown_email() {
    let app = helpers::TestApp::new();
    app.create_user("U", "u@x.com").await;
    let token = app.token_for("u@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/session",
            Some(serde_json::json!({ "tokenId": token, "email": "ghost@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}
