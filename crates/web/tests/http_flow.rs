use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use services::AppServices;
use storage::repository::Storage;
use tower::ServiceExt;
use web::{AppContext, build_router};

fn in_memory_app() -> Router {
    let services = AppServices::from_storage(&Storage::in_memory());
    build_router(AppContext::new(services))
}

async fn sqlite_app(name: &str) -> Router {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let services = AppServices::new_sqlite(&url).await.expect("open sqlite");
    build_router(AppContext::new(services))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn fresh_dashboard_is_all_zero() {
    let app = in_memory_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dsa"], 0);
    assert_eq!(body["subjects"], 0);
    assert_eq!(body["mocks"], 0);
    assert_eq!(body["dsa_progress"], 0);
    assert_eq!(body["subject_progress"], 0);
}

#[tokio::test]
async fn dsa_progress_and_status_filter() {
    let app = sqlite_app("memdb_http_dsa").await;

    let (status, body) = post_form(
        &app,
        "/dsa",
        "problem=Two+Sum&platform=LeetCode&difficulty=Easy&status=Solved",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = post_form(
        &app,
        "/dsa",
        "problem=Median&platform=LeetCode&difficulty=Hard&status=Unsolved",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, dashboard) = get(&app, "/").await;
    assert_eq!(dashboard["dsa"], 2);
    assert_eq!(dashboard["dsa_progress"], 50);

    let (status, body) = get(&app, "/dsa?status=Solved").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["problem"], "Two Sum");
    assert_eq!(rows[0]["platform"], "LeetCode");
    assert_eq!(rows[0]["difficulty"], "Easy");
    assert_eq!(rows[0]["status"], "Solved");

    let (_, body) = get(&app, "/dsa?difficulty=Hard&status=Solved").await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (_, body) = get(&app, "/dsa?difficulty=&status=").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn post_applies_create_before_filtered_list() {
    let app = in_memory_app();
    post_form(
        &app,
        "/dsa",
        "problem=A&platform=CF&difficulty=Easy&status=Unsolved",
    )
    .await;

    let (status, body) = post_form(
        &app,
        "/dsa?status=Solved",
        "problem=B&platform=CF&difficulty=Easy&status=Solved",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["problem"], "B");
}

#[tokio::test]
async fn missing_form_field_is_rejected_without_insert() {
    let app = in_memory_app();
    let (status, body) = post_form(&app, "/dsa", "problem=Two+Sum&platform=LeetCode").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing_field");

    let (_, body) = get(&app, "/dsa").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_form_values_are_accepted() {
    let app = in_memory_app();
    let (status, body) = post_form(&app, "/dsa", "problem=&platform=&difficulty=&status=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["status"], "");

    let (_, dashboard) = get(&app, "/").await;
    assert_eq!(dashboard["dsa_progress"], 0);
}

#[tokio::test]
async fn delete_redirects_and_is_idempotent() {
    let app = in_memory_app();
    let (_, body) = post_form(
        &app,
        "/dsa",
        "problem=Two+Sum&platform=LeetCode&difficulty=Easy&status=Solved",
    )
    .await;
    let delete_url = body["data"][0]["delete_url"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(&delete_url).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dsa");
    }

    let (_, body) = get(&app, "/dsa").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_integer_delete_id_is_rejected() {
    let app = in_memory_app();
    for uri in ["/delete/dsa/abc", "/delete/dsa/-3", "/delete/subjects/1.5"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "invalid_id");
    }
}

#[tokio::test]
async fn subjects_feed_subject_progress() {
    let app = in_memory_app();
    for status in ["Completed", "In+Progress", "Completed", "Pending"] {
        let form = format!("subject=OS&topic=Paging&status={status}");
        let (code, _) = post_form(&app, "/subjects", &form).await;
        assert_eq!(code, StatusCode::OK);
    }

    let (_, body) = get(&app, "/subjects").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1]["status"], "In Progress");

    let (_, dashboard) = get(&app, "/").await;
    assert_eq!(dashboard["subjects"], 4);
    assert_eq!(dashboard["subject_progress"], 50);

    let (status, body) = post_form(&app, "/subjects", "subject=OS&topic=Paging").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "missing required field `status`");
}

#[tokio::test]
async fn mock_test_average_score() {
    let app = sqlite_app("memdb_http_mocks").await;

    let (_, body) = get(&app, "/mocktests").await;
    assert!(body["avg_score"].is_null());

    for score in [70, 80, 90] {
        let form = format!("test_name=Mock+{score}&score={score}&date=2024-08-0{}", score / 10);
        let (status, _) = post_form(&app, "/mocktests", &form).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get(&app, "/mocktests").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["avg_score"].as_f64(), Some(80.0));
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, dashboard) = get(&app, "/").await;
    assert_eq!(dashboard["mocks"], 3);
}

#[tokio::test]
async fn non_numeric_score_is_a_client_error() {
    let app = in_memory_app();
    let (status, body) = post_form(&app, "/mocktests", "test_name=Mock&score=high&date=today").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");

    let (_, body) = get(&app, "/mocktests").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let app = sqlite_app("memdb_http_health").await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn form_post_without_urlencoded_body_is_json_400() {
    let app = in_memory_app();
    for uri in ["/dsa", "/subjects", "/mocktests"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "invalid_input", "{uri}");
    }

    let (_, dashboard) = get(&app, "/").await;
    assert_eq!(dashboard["dsa"], 0);
    assert_eq!(dashboard["subjects"], 0);
    assert_eq!(dashboard["mocks"], 0);
}

#[tokio::test]
async fn created_subject_is_in_the_same_response() {
    let app = in_memory_app();
    let (status, body) =
        post_form(&app, "/subjects", "subject=DBMS&topic=Normalization&status=Completed").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["subject"], "DBMS");
    assert_eq!(rows[0]["topic"], "Normalization");
    assert_eq!(rows[0]["completed"], true);
}

#[tokio::test]
async fn subject_and_mock_test_deletes_redirect_to_their_lists() {
    let app = in_memory_app();
    let (_, subjects) = post_form(&app, "/subjects", "subject=OS&topic=Paging&status=Pending").await;
    let (_, mocks) =
        post_form(&app, "/mocktests", "test_name=Mock+1&score=75&date=2024-08-01").await;

    let cases = [
        (subjects["data"][0]["delete_url"].as_str().unwrap().to_string(), "/subjects"),
        (mocks["data"][0]["delete_url"].as_str().unwrap().to_string(), "/mocktests"),
    ];
    for (delete_url, list) in cases {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(&delete_url).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{delete_url}");
        assert_eq!(response.headers()[header::LOCATION], list);

        let (_, body) = get(&app, list).await;
        assert!(body["data"].as_array().unwrap().is_empty(), "{list}");
    }

    let (_, body) = get(&app, "/mocktests").await;
    assert!(body["avg_score"].is_null());
}
