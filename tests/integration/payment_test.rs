//! Integration tests for member-number payment lookups.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_payment_for_existing_member() {
    let app = helpers::TestApp::new();
    let user = app.create_user("P", "p@x.com").await;
    let member_no = user["memberNo"].as_u64().unwrap();

    let response = app
        .request("GET", &format!("/api/payments/{member_no}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["amount"], 500_000);
    assert_eq!(data["memberNo"], user["memberNo"]);
    assert_eq!(data["email"], "p@x.com");
}

#[tokio::test]
async fn test_payment_for_unknown_member() {
    let app = helpers::TestApp::new();
    let user = app.create_user("P", "p@x.com").await;
    let unknown = (user["memberNo"].as_u64().unwrap() + 1) % 1_000_000_000;

    let response = app
        .request("GET", &format!("/api/payments/{unknown}"), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}
