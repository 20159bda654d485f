// tests/e2e_services.rs
use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;
use support::{TEST_TOKEN, assert_error_response, empty_request, json_request, read_json, service_payload};

/// サービスの作成・公開一覧・管理一覧・更新・削除
#[tokio::test]
async fn e2e_service_crud() {
    let app = support::make_test_router().await;

    let mut ids = Vec::new();
    for (title, order) in [("Hernia Repair", 2), ("Appendectomy", 1)] {
        let resp = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/services",
                Some(TEST_TOKEN),
                &service_payload(title, order),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        ids.push(read_json(resp).await["id"].as_str().unwrap().to_string());
    }

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/services", None))
        .await
        .unwrap();
    let listed = read_json(resp).await;
    assert_eq!(listed[0]["title"], "Appendectomy");
    assert_eq!(listed[1]["title"], "Hernia Repair");

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/services/admin?limit=1", None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            "/api/services/admin?limit=1",
            Some(TEST_TOKEN),
        ))
        .await
        .unwrap();
    let page = read_json(resp).await;
    assert_eq!(page["total"], 2);
    assert_eq!(page["pages"], 2);
    assert_eq!(page["items"][0]["title"], "Appendectomy");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/services/{}", ids[0]),
            Some(TEST_TOKEN),
            &json!({ "title": "appendectomy" }),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/services/{}", ids[0]),
            Some(TEST_TOKEN),
            &json!({ "title": "Inguinal Hernia Repair", "image": "/uploads/hernia.png" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["slug"], "inguinal-hernia-repair");
    assert_eq!(updated["image"], "/uploads/hernia.png");
    assert_eq!(updated["order"], 2);

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            "/api/services/by-slug/inguinal-hernia-repair",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/services/{}", ids[1]),
            Some(TEST_TOKEN),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/services/{}", ids[1]),
            Some(TEST_TOKEN),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_unknown_service_slug_is_404() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(empty_request(Method::GET, "/api/services/by-slug/nothing-here", None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}
