//! End-to-end API flows over an in-memory database
//!
//! Run: cargo test -p shear-server --test api_flows

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shear_server::{ServerState, api};

async fn test_app() -> Router {
    let state = ServerState::for_tests().await.expect("test state");
    api::build_router(state)
}

async fn request(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

/// Register a user and return their token
async fn register(app: &Router, name: &str, email: &str, role: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": name,
            "email": email,
            "password": "Sup3r-secret!",
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    body["token"].as_str().expect("token").to_string()
}

async fn create_shop(app: &Router, token: &str, name: &str) -> Value {
    let (status, body) = request(
        app,
        "POST",
        "/api/barbershops",
        Some(token),
        Some(json!({
            "name": name,
            "address": "12 High Street",
            "phone": "0123456789",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "shop create failed: {body}");
    body
}

async fn create_staff(app: &Router, token: &str, shop_id: &str, email: &str, role: &str) -> Value {
    let (status, body) = request(
        app,
        "POST",
        "/api/staff",
        Some(token),
        Some(json!({
            "name": "Staff Member",
            "email": email,
            "password": "Sup3r-secret!",
            "barbershop_id": shop_id,
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "staff create failed: {body}");
    body
}

async fn login(app: &Router, email: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": "Sup3r-secret!"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token").to_string()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app().await;
    let (status, body) = request(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn register_then_duplicate_email_conflicts() {
    let app = test_app().await;
    register(&app, "Ana", "ana@example.com", "customer").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Ana Again",
            "email": "ana@example.com",
            "password": "Sup3r-secret!",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "expected 409: {body}");
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn privileged_roles_cannot_self_register() {
    let app = test_app().await;
    for role in ["admin", "co-owner"] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Sneaky",
                "email": format!("sneaky-{role}@example.com"),
                "password": "Sup3r-secret!",
                "role": role,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "role {role} should be rejected");
    }
}

#[tokio::test]
async fn capster_can_self_register_and_starts_unlinked() {
    let app = test_app().await;
    let token = register(&app, "Cal", "cal@example.com", "capster").await;

    // No staff link yet, so no shops are visible
    let (status, body) = request(&app, "GET", "/api/barbershops", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 0);

    // And no booking rights either
    let owner = register(&app, "Olive", "olive@example.com", "owner").await;
    let shop = create_shop(&app, &owner, "Fade Factory").await;
    let (status, _) = request(
        &app,
        "POST",
        "/api/appointments",
        Some(&token),
        Some(json!({
            "barbershop_id": shop["id"],
            "staff_id": "staff:none",
            "service_id": "service:none",
            "scheduled_at": "2026-09-01T10:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn login_with_wrong_password_is_generic() {
    let app = test_app().await;
    register(&app, "Ana", "ana@example.com", "customer").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "ana@example.com", "password": "WrongPass1!"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let wrong_pass_msg = body["message"].clone();

    // Unknown email gets the identical message
    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "ghost@example.com", "password": "WrongPass1!"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], wrong_pass_msg);
}

#[tokio::test]
async fn duplicate_shop_name_conflicts_until_soft_deleted() {
    let app = test_app().await;
    let token = register(&app, "Olive", "olive@example.com", "owner").await;

    let shop = create_shop(&app, &token, "Fade Factory").await;
    let shop_id = shop["id"].as_str().expect("id");

    // Same name from a different owner: still a conflict
    let rival = register(&app, "Reggie", "reggie@example.com", "owner").await;
    let (status, body) = request(
        &app,
        "POST",
        "/api/barbershops",
        Some(&rival),
        Some(json!({
            "name": "Fade Factory",
            "address": "34 Low Street",
            "phone": "0987654321",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "expected 409: {body}");

    // Soft-delete frees the name for anyone
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/barbershops/{shop_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    create_shop(&app, &rival, "Fade Factory").await;
}

#[tokio::test]
async fn created_shop_reads_back_with_identical_fields() {
    let app = test_app().await;
    let token = register(&app, "Olive", "olive@example.com", "owner").await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/barbershops",
        Some(&token),
        Some(json!({
            "name": "Cutlass",
            "address": "12 High Street",
            "phone": "0123456789",
            "plan": "premium",
            "hours": {"open_time": "09:00", "close_time": "18:00"},
            "days_open": ["mon", "tue", "wed"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {created}");

    let (status, listed) = request(&app, "GET", "/api/barbershops", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let shop = &listed.as_array().expect("array")[0];

    for field in ["id", "name", "address", "phone", "plan", "days_open", "owner_id"] {
        assert_eq!(shop[field], created[field], "field {field} changed on read-back");
    }
    assert_eq!(shop["hours"]["open_time"], "09:00");
    assert_eq!(shop["hours"]["close_time"], "18:00");
}

#[tokio::test]
async fn owner_visibility_covers_owned_shops() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    let omar = register(&app, "Omar", "omar@example.com", "owner").await;

    create_shop(&app, &olive, "Shop A").await;
    create_shop(&app, &olive, "Shop B").await;
    create_shop(&app, &omar, "Shop C").await;

    let (status, body) = request(&app, "GET", "/api/barbershops", Some(&olive), None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Shop A", "Shop B"]);
}

#[tokio::test]
async fn staff_visibility_is_their_linked_shop_only() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    let shop_x = create_shop(&app, &olive, "Shop X").await;
    create_shop(&app, &olive, "Shop Y").await;

    create_staff(
        &app,
        &olive,
        shop_x["id"].as_str().expect("id"),
        "addie@example.com",
        "admin",
    )
    .await;

    let addie = login(&app, "addie@example.com").await;
    let (status, body) = request(&app, "GET", "/api/barbershops", Some(&addie), None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Shop X"]);
}

#[tokio::test]
async fn customer_shop_list_is_empty_but_public_list_is_not() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    create_shop(&app, &olive, "Fade Factory").await;

    let cara = register(&app, "Cara", "cara@example.com", "customer").await;
    let (status, body) = request(&app, "GET", "/api/barbershops", Some(&cara), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("array").is_empty());

    // Anonymous public browse still sees the shop
    let (status, body) = request(&app, "GET", "/api/public/barbershops", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 1);

    // Search narrows by substring, case-insensitive
    let (status, body) =
        request(&app, "GET", "/api/public/barbershops?search=fade", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 1);

    let (status, body) =
        request(&app, "GET", "/api/public/barbershops?search=nope", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn customer_cannot_manage_staff_or_shops() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    let shop = create_shop(&app, &olive, "Fade Factory").await;
    let shop_id = shop["id"].as_str().expect("id");

    let cara = register(&app, "Cara", "cara@example.com", "customer").await;

    let (status, _) = request(&app, "GET", "/api/staff", Some(&cara), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = request(
        &app,
        "POST",
        "/api/staff",
        Some(&cara),
        Some(json!({
            "name": "Sneaky",
            "email": "sneaky@example.com",
            "password": "Sup3r-secret!",
            "barbershop_id": shop_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = request(
        &app,
        "POST",
        "/api/barbershops",
        Some(&cara),
        Some(json!({
            "name": "Cara's Cuts",
            "address": "56 Side Street",
            "phone": "0123456789",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn only_primary_owner_updates_or_deletes_shop() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    let omar = register(&app, "Omar", "omar@example.com", "owner").await;
    let shop = create_shop(&app, &olive, "Fade Factory").await;
    let shop_id = shop["id"].as_str().expect("id");

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/barbershops/{shop_id}"),
        Some(&omar),
        Some(json!({"name": "Omar's Now"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/barbershops/{shop_id}"),
        Some(&olive),
        Some(json!({"name": "Fade Factory Deluxe"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Fade Factory Deluxe");
    // Untouched fields survive a partial update
    assert_eq!(body["address"], "12 High Street");
}

#[tokio::test]
async fn admin_may_hire_but_not_fire() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    let shop = create_shop(&app, &olive, "Fade Factory").await;
    let shop_id = shop["id"].as_str().expect("id");

    create_staff(&app, &olive, shop_id, "addie@example.com", "admin").await;
    let addie = login(&app, "addie@example.com").await;

    // Admin hires a capster at their own shop
    let capster = create_staff(&app, &addie, shop_id, "caz@example.com", "capster").await;
    let capster_id = capster["id"].as_str().expect("id");

    // But cannot fire
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/staff/{capster_id}"),
        Some(&addie),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The owner can
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/staff/{capster_id}"),
        Some(&olive),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn admin_of_one_shop_cannot_hire_at_another() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    let omar = register(&app, "Omar", "omar@example.com", "owner").await;
    let shop_a = create_shop(&app, &olive, "Shop A").await;
    let shop_b = create_shop(&app, &omar, "Shop B").await;

    create_staff(
        &app,
        &olive,
        shop_a["id"].as_str().expect("id"),
        "addie@example.com",
        "admin",
    )
    .await;
    let addie = login(&app, "addie@example.com").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/staff",
        Some(&addie),
        Some(json!({
            "name": "Across Town",
            "email": "across@example.com",
            "password": "Sup3r-secret!",
            "barbershop_id": shop_b["id"].as_str().expect("id"),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

async fn setup_booking(app: &Router) -> (String, String, Value) {
    let olive = register(app, "Olive", "olive@example.com", "owner").await;
    let shop = create_shop(app, &olive, "Fade Factory").await;
    let shop_id = shop["id"].as_str().expect("id").to_string();

    let staff = create_staff(app, &olive, &shop_id, "caz@example.com", "capster").await;

    let (status, service) = request(
        app,
        "POST",
        "/api/services",
        Some(&olive),
        Some(json!({
            "name": "Skin Fade",
            "price": 28.5,
            "duration_minutes": 45,
            "barbershop_id": shop_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "service create failed: {service}");

    let cara = register(app, "Cara", "cara@example.com", "customer").await;
    let (status, appointment) = request(
        app,
        "POST",
        "/api/appointments",
        Some(&cara),
        Some(json!({
            "barbershop_id": shop_id,
            "staff_id": staff["id"].as_str().expect("id"),
            "service_id": service["id"].as_str().expect("id"),
            "scheduled_at": "2026-09-01T10:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "booking failed: {appointment}");
    assert_eq!(appointment["status"], "PENDING");

    (olive, cara, appointment)
}

#[tokio::test]
async fn appointment_lifecycle_happy_path_and_rejections() {
    let app = test_app().await;
    let (olive, cara, appointment) = setup_booking(&app).await;
    let appt_id = appointment["id"].as_str().expect("id");
    let status_path = format!("/api/appointments/{appt_id}/status");

    // Customer may not transition, not even their own booking
    let (status, _) = request(
        &app,
        "PATCH",
        &status_path,
        Some(&cara),
        Some(json!({"status": "CANCELLED"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Owner confirms
    let (status, body) = request(
        &app,
        "PATCH",
        &status_path,
        Some(&olive),
        Some(json!({"status": "CONFIRMED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "CONFIRMED");

    // Backwards is rejected
    let (status, _) = request(
        &app,
        "PATCH",
        &status_path,
        Some(&olive),
        Some(json!({"status": "PENDING"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Re-writing the current status is rejected too
    let (status, _) = request(
        &app,
        "PATCH",
        &status_path,
        Some(&olive),
        Some(json!({"status": "CONFIRMED"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Complete, then the record is final
    let (status, _) = request(
        &app,
        "PATCH",
        &status_path,
        Some(&olive),
        Some(json!({"status": "COMPLETED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        "PATCH",
        &status_path,
        Some(&olive),
        Some(json!({"status": "CANCELLED"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_rejects_cross_shop_service() {
    let app = test_app().await;
    let olive = register(&app, "Olive", "olive@example.com", "owner").await;
    let shop_a = create_shop(&app, &olive, "Shop A").await;
    let shop_b = create_shop(&app, &olive, "Shop B").await;
    let shop_a_id = shop_a["id"].as_str().expect("id");
    let shop_b_id = shop_b["id"].as_str().expect("id");

    let staff_a = create_staff(&app, &olive, shop_a_id, "caz@example.com", "capster").await;

    // Service lives at shop B
    let (status, service_b) = request(
        &app,
        "POST",
        "/api/services",
        Some(&olive),
        Some(json!({
            "name": "Beard Trim",
            "price": 12,
            "duration_minutes": 20,
            "barbershop_id": shop_b_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let cara = register(&app, "Cara", "cara@example.com", "customer").await;
    let (status, body) = request(
        &app,
        "POST",
        "/api/appointments",
        Some(&cara),
        Some(json!({
            "barbershop_id": shop_a_id,
            "staff_id": staff_a["id"].as_str().expect("id"),
            "service_id": service_b["id"].as_str().expect("id"),
            "scheduled_at": "2026-09-01T10:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "expected 400: {body}");
}

#[tokio::test]
async fn owner_cannot_book() {
    let app = test_app().await;
    let (olive, _cara, _appt) = setup_booking(&app).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/appointments",
        Some(&olive),
        Some(json!({
            "barbershop_id": "barbershop:any",
            "staff_id": "staff:any",
            "service_id": "service:any",
            "scheduled_at": "2026-09-01T10:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn protected_routes_require_token() {
    let app = test_app().await;

    let (status, _) = request(&app, "GET", "/api/barbershops", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(&app, "GET", "/api/appointments", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &app,
        "GET",
        "/api/barbershops",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
