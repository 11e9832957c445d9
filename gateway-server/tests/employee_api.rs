//! End-to-end router tests: real gateway router + real upstream
//! adapter, talking to an in-process employee-mock listener.

use std::sync::Arc;

use axum::Router;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use shared::{Employee, ErrorBody};
use tower::ServiceExt;

use gateway_server::{Config, ServerState, app};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

/// Gateway router wired against a freshly spawned mock upstream
async fn gateway_over_mock(seed: Vec<Employee>) -> Router {
    let addr = employee_mock::spawn(seed).await.unwrap();
    let config = Config::with_overrides(format!("http://{addr}/api/v1/employee"), 0);
    app(ServerState::initialize(&config).unwrap())
}

async fn expect_error(response: axum::response::Response, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.error, code);
}

// --- health ---

#[tokio::test]
async fn health_answers_ok() {
    let app = gateway_over_mock(vec![]).await;
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["upstream_url"].as_str().unwrap().contains("/api/v1/employee"));
}

// --- list ---

#[tokio::test]
async fn list_returns_seeded_employees_in_wire_shape() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app.oneshot(get("/api/v1/employee")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = body_json(resp).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 12);
    assert!(list[0].get("employee_name").is_some());
    assert!(list[0].get("employee_salary").is_some());
}

#[tokio::test]
async fn list_of_empty_upstream_is_no_records_found() {
    let app = gateway_over_mock(vec![]).await;
    let resp = app.oneshot(get("/api/v1/employee")).await.unwrap();
    expect_error(resp, StatusCode::BAD_REQUEST, "ERR-201").await;
}

// --- search ---

#[tokio::test]
async fn search_filters_by_case_sensitive_substring() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app
        .oneshot(get("/api/v1/employee/search/Top"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Vec<Employee> = body_json(resp).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Top Earner");
}

#[tokio::test]
async fn search_miss_is_name_not_found() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app
        .oneshot(get("/api/v1/employee/search/nobody"))
        .await
        .unwrap();
    expect_error(resp, StatusCode::BAD_REQUEST, "ERR-202").await;
}

// --- get by id ---

#[tokio::test]
async fn get_by_id_returns_single_employee() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app.oneshot(get("/api/v1/employee/e-99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let employee: Employee = body_json(resp).await;
    assert_eq!(employee.name, "Top Earner");
}

#[tokio::test]
async fn get_by_unknown_id_is_no_records_found() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app.oneshot(get("/api/v1/employee/ghost")).await.unwrap();
    expect_error(resp, StatusCode::BAD_REQUEST, "ERR-201").await;
}

// --- aggregations ---

#[tokio::test]
async fn highest_salary_spans_all_employees() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app
        .oneshot(get("/api/v1/employee/highest-salary"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let salary: i64 = body_json(resp).await;
    assert_eq!(salary, 250000);
}

#[tokio::test]
async fn top_ten_names_ranked_by_salary_descending() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app
        .oneshot(get("/api/v1/employee/top-10-highest-earning"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let names: Vec<String> = body_json(resp).await;
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Top Earner");
    // seed salaries rise with index, so the tail of the seed follows
    assert_eq!(names[1], "Employee 11");
}

// --- create ---

#[tokio::test]
async fn create_assigns_id_and_stores_upstream() {
    let addr = employee_mock::spawn(vec![]).await.unwrap();
    let config = Config::with_overrides(format!("http://{addr}/api/v1/employee"), 0);
    let state = ServerState::initialize(&config).unwrap();

    let resp = app(state.clone())
        .oneshot(json_request(
            "POST",
            "/api/v1/employee",
            r#"{"name": "Dana", "salary": "77000", "age": "38", "title": "Lead", "email": "dana@corp.example"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Employee = body_json(resp).await;
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Dana");
    assert_eq!(created.salary, "77000");
    assert_eq!(created.title, "Lead");

    // the record is now visible through the gateway again
    let resp = app(state)
        .oneshot(get(&format!("/api/v1/employee/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Employee = body_json(resp).await;
    assert_eq!(fetched.name, "Dana");
}

#[tokio::test]
async fn create_rejects_invalid_input_with_stable_codes() {
    let cases = [
        (r#"{"salary": "1000", "age": "30"}"#, "ERR-302"),
        (r#"{"name": "X", "age": "30"}"#, "ERR-303"),
        (r#"{"name": "X", "salary": "abc", "age": "30"}"#, "ERR-303"),
        (r#"{"name": "X", "salary": 1000, "age": "30"}"#, "ERR-303"),
        (r#"{"name": "X", "salary": "-5", "age": "30"}"#, "ERR-304"),
        (r#"{"name": "X", "salary": "1000", "age": "old"}"#, "ERR-305"),
        (r#"{"name": "X", "salary": "1000", "age": -1}"#, "ERR-305"),
        (r#"{"name": "X", "salary": "1000", "age": "-1"}"#, "ERR-306"),
        (r#"{"name": "X", "salary": "1000", "age": "101"}"#, "ERR-307"),
    ];
    for (body, code) in cases {
        let app = gateway_over_mock(vec![]).await;
        let resp = app
            .oneshot(json_request("POST", "/api/v1/employee", body))
            .await
            .unwrap();
        expect_error(resp, StatusCode::BAD_REQUEST, code).await;
    }
}

// --- delete ---

#[tokio::test]
async fn delete_returns_the_removed_employees_name() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app
        .oneshot(json_request("DELETE", "/api/v1/employee/e-99", ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let name: String = body_json(resp).await;
    assert_eq!(name, "Top Earner");
}

#[tokio::test]
async fn delete_of_unknown_id_is_no_records_found() {
    let app = gateway_over_mock(employee_mock::seed_employees()).await;
    let resp = app
        .oneshot(json_request("DELETE", "/api/v1/employee/ghost", ""))
        .await
        .unwrap();
    expect_error(resp, StatusCode::BAD_REQUEST, "ERR-201").await;
}

// --- upstream failures ---

#[tokio::test]
async fn unreachable_upstream_is_api_request_failure() {
    // bind then drop a listener so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::with_overrides(format!("http://{addr}/api/v1/employee"), 0);
    let app = app(ServerState::initialize(&config).unwrap());

    let resp = app.oneshot(get("/api/v1/employee")).await.unwrap();
    expect_error(resp, StatusCode::BAD_REQUEST, "ERR-101").await;
}

#[tokio::test]
async fn undecodable_upstream_body_is_json_parse_failure() {
    // upstream answering 200 with a non-envelope body
    let broken = Router::new().route(
        "/api/v1/employee",
        axum::routing::get(|| async { "this is not json" }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, broken).await;
    });

    let config = Config::with_overrides(format!("http://{addr}/api/v1/employee"), 0);
    let app = app(ServerState::initialize(&config).unwrap());

    let resp = app.oneshot(get("/api/v1/employee")).await.unwrap();
    expect_error(resp, StatusCode::BAD_REQUEST, "ERR-102").await;
}

// --- unexpected errors ---

/// Upstream double that fails with an unclassified error
struct ExplodingApi;

#[async_trait::async_trait]
impl gateway_server::EmployeeApi for ExplodingApi {
    async fn list_all(&self) -> shared::AppResult<Vec<Employee>> {
        Err(shared::AppError::unexpected("simulated internal failure"))
    }

    async fn get_by_id(&self, _id: &str) -> shared::AppResult<Option<Employee>> {
        Err(shared::AppError::unexpected("simulated internal failure"))
    }

    async fn create(
        &self,
        _payload: &shared::EmployeeCreate,
    ) -> shared::AppResult<Employee> {
        Err(shared::AppError::unexpected("simulated internal failure"))
    }

    async fn delete(&self, _id: &str) -> shared::AppResult<bool> {
        Err(shared::AppError::unexpected("simulated internal failure"))
    }
}

#[tokio::test]
async fn unexpected_errors_answer_500_with_generic_message() {
    let config = Config::with_overrides("http://unused/api/v1/employee", 0);
    let state = ServerState::with_api(config, Arc::new(ExplodingApi));

    let resp = app(state).oneshot(get("/api/v1/employee")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "GENERAL_ERROR");
    assert_eq!(body.message, "An unexpected error occurred");
    assert!(!body.message.contains("simulated"));
}
