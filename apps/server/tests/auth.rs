use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use fintrack_server::{api::app_router, build_state, config::Config};
use rand::RngCore;
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    // Plain-text bodies (the health probes) fall back to Null.
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn register_login_and_dashboard_flow() {
    let tmp = tempdir().unwrap();
    std::env::set_var("FT_DB_PATH", tmp.path().join("test.db"));

    let mut secret_bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut secret_bytes);
    std::env::set_var("FT_SECRET_KEY", BASE64.encode(secret_bytes));

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    // Liveness probes are public
    let (status, _) = send(&app, Method::GET, "/api/v1/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);

    // Protected routes fail closed without a token
    let (status, _) = send(&app, Method::GET, "/api/v1/dashboard", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Register
    let (status, registered) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "password": "correct horse battery",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["tokenType"], "Bearer");
    assert_eq!(registered["user"]["email"], "asha@example.com");
    assert!(registered["user"]["passwordHash"].is_null());
    let first_token = registered["accessToken"].as_str().unwrap().to_string();

    // Duplicate email conflicts
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "name": "Asha Again",
            "email": "asha@example.com",
            "password": "another password",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Wrong password and unknown email are indistinguishable
    let (wrong_pw_status, wrong_pw_body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({"email": "asha@example.com", "password": "nope"})),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({"email": "nobody@example.com", "password": "nope"})),
    )
    .await;
    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw_body, unknown_body);

    // Login with the right password
    let (status, logged_in) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({"email": "asha@example.com", "password": "correct horse battery"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = logged_in["accessToken"].as_str().unwrap().to_string();

    // The registration token works too
    let (status, me) = send(&app, Method::GET, "/api/v1/auth/me", Some(&first_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "asha@example.com");

    // Record one income and one expense in the current month
    let now = Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/incomes",
        Some(&token),
        Some(json!({"source": "Salary", "amount": 5000.0, "date": now})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/expenses",
        Some(&token),
        Some(json!({
            "category": "Rent",
            "amount": 2000.0,
            "date": now,
            "description": "Monthly rent",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Dashboard reflects exactly those records
    let (status, dashboard) = send(&app, Method::GET, "/api/v1/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["monthlyIncome"], 5000.0);
    assert_eq!(dashboard["monthlyExpenses"], 2000.0);
    assert_eq!(dashboard["totalSavings"], 3000.0);
    assert_eq!(dashboard["netWorth"], 3000.0);
    assert_eq!(dashboard["savingsRate"], 60.0);
    assert_eq!(dashboard["recentTransactions"].as_array().unwrap().len(), 2);
    assert_eq!(dashboard["expenseBreakdown"][0]["category"], "Rent");
    assert_eq!(dashboard["expenseBreakdown"][0]["percentage"], 100.0);

    // Settings accept only the enumerated fields
    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/v1/settings",
        Some(&token),
        Some(json!({"preferredCurrency": "EUR"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["preferredCurrency"], "EUR");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/settings",
        Some(&token),
        Some(json!({"passwordHash": "sneaky"})),
    )
    .await;
    assert!(status.is_client_error());

    // Garbage tokens are rejected with the same generic 401
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    for key in ["FT_DB_PATH", "FT_SECRET_KEY", "DATABASE_URL"] {
        std::env::remove_var(key);
    }
}
