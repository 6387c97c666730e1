use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::Service;

mod support;
use support::{admin_token, build_app, create, login, register, send};

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn test_car_lifecycle() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;

    let id = create(&app, "/api/cars", &admin, json!({"make": "Volvo", "model": "XC60", "year": 2022})).await?;
    let (status, car) = send(&app, "GET", &format!("/api/cars/{}", id), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(car, json!({"id": id, "make": "Volvo", "model": "XC60", "year": 2022}));

    let (status, _) = send(&app, "PUT", &format!("/api/cars/{}", id), Some(&admin), Some(json!({"make": "Volvo", "model": "XC90", "year": 2023}))).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, cars) = send(&app, "GET", "/api/cars", None, None).await?;
    assert_eq!(cars[0]["model"], json!("XC90"));
    assert_eq!(cars.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, "DELETE", &format!("/api/cars/{}", id), Some(&admin), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "DELETE", &format!("/api/cars/{}", id), Some(&admin), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Car does not exist"));

    let (status, body) = send(&app, "GET", &format!("/api/cars/{}", id), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Car does not exist"));
    Ok(())
}

#[tokio::test]
async fn test_validation_and_missing_rows() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;

    let (status, body) = send(&app, "POST", "/api/cars", Some(&admin), Some(json!({"make": " ", "model": "X", "year": 2020}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Car is invalid"));

    // update of a missing row with a valid payload persists nothing
    let (status, body) = send(&app, "PUT", "/api/cars/4242", Some(&admin), Some(json!({"make": "A", "model": "B", "year": 1}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Car does not exist"));
    let (_, cars) = send(&app, "GET", "/api/cars", None, None).await?;
    assert_eq!(cars, json!([]));

    // invalid payload is rejected before the existence check
    let (status, _) = send(&app, "PUT", "/api/cars/4242", Some(&admin), Some(json!({"make": "", "model": "B", "year": 1}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "POST", "/api/configurations/car/999", Some(&admin), Some(json!({
        "name": "Base", "fuel_type": "Petrol", "transmission_type": "Manual", "number_of_seats": 5
    }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Car does not exist"));

    let (status, body) = send(&app, "POST", "/api/locations/region/77", Some(&admin), Some(json!({"name": "Nowhere"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Region does not exist"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_requests() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;

    let (status, body) = send(&app, "GET", "/api/cars/abc", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/api/cars")
        .header("authorization", format!("Bearer {}", admin))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/cars", Some(&admin), Some(json!({"make": "Volvo"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_access_gate() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;
    let car = json!({"make": "Tesla", "model": "Model 3", "year": 2021});

    let (status, body) = send(&app, "POST", "/api/cars", None, Some(car.clone())).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.is_null());

    let user_id = register(&app, "driver@example.com", "DriverPass1").await?;
    let user = login(&app, "driver@example.com", "DriverPass1").await?;
    let (status, body) = send(&app, "POST", "/api/cars", Some(&user), Some(car.clone())).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], json!("User not admin"));

    let (status, _) = send(&app, "GET", "/api/users", Some(&user), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // deactivation takes effect on the next request with the same token
    let (status, _) = send(&app, "PUT", &format!("/api/users/{}/active", user_id), Some(&admin), Some(json!({"active": false}))).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "POST", "/api/rentals/rental-object/1/pickup/1/dropoff/1", Some(&user), Some(json!({"start_time": 1, "end_time": 2}))).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], json!("User deactivated"));

    let (status, users) = send(&app, "GET", "/api/users", Some(&admin), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().map(Vec::len), Some(2));
    assert!(users[0].get("password_hash").is_none());

    let (status, _) = send(&app, "PUT", "/api/users/999/active", Some(&admin), Some(json!({"active": true}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

/// Region West with Bergen, provider P1 operating there, configuration C1
/// offered by P1 through one rental object.
async fn seed_west_bergen(app: &axum::Router, admin: &str) -> anyhow::Result<(i32, i32, i32)> {
    let west = create(app, "/api/regions", admin, json!({"name": "West"})).await?;
    let bergen = create(app, &format!("/api/locations/region/{}", west), admin, json!({"name": "Bergen"})).await?;
    let p1 = create(app, "/api/providers", admin, json!({"name": "P1"})).await?;
    let (status, _) = send(app, "PUT", &format!("/api/providers/{}/region/add/{}", p1, west), Some(admin), None).await?;
    assert_eq!(status, StatusCode::OK);

    let car = create(app, "/api/cars", admin, json!({"make": "Volvo", "model": "V90", "year": 2020})).await?;
    let c1 = create(app, &format!("/api/configurations/car/{}", car), admin, json!({
        "name": "C1", "fuel_type": "Diesel", "transmission_type": "Automatic", "number_of_seats": 5
    })).await?;
    let ro = create(app, &format!("/api/rentalobjects/provider/{}/configuration/{}", p1, c1), admin, json!({"price": 650.0})).await?;
    Ok((bergen, c1, ro))
}

fn ids(found: &Value) -> Vec<i64> {
    found.as_array().map(|a| a.iter().filter_map(|c| c["id"].as_i64()).collect()).unwrap_or_default()
}

#[tokio::test]
async fn test_availability_search() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;
    let (bergen, c1, ro) = seed_west_bergen(&app, &admin).await?;

    let query = |start: i64, end: i64| json!({
        "pick_up_location_id": bergen, "drop_off_location_id": bergen, "start_time": start, "end_time": end
    });

    let (status, found) = send(&app, "POST", "/api/configurations/available", None, Some(query(100, 200))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&found), vec![c1 as i64]);

    register(&app, "renter@example.com", "RenterPass1").await?;
    let renter = login(&app, "renter@example.com", "RenterPass1").await?;
    let uri = format!("/api/rentals/rental-object/{}/pickup/{}/dropoff/{}", ro, bergen, bergen);
    let rental = create(&app, &uri, &renter, json!({"start_time": 150, "end_time": 160})).await?;

    let (_, found) = send(&app, "POST", "/api/configurations/available", None, Some(query(100, 200))).await?;
    assert!(ids(&found).is_empty());
    let (_, found) = send(&app, "POST", "/api/configurations/available", None, Some(query(201, 300))).await?;
    assert_eq!(ids(&found), vec![c1 as i64]);

    // time-only search ignores locations
    let (_, found) = send(&app, "POST", "/api/configurations/available", None, Some(json!({"start_time": 201, "end_time": 300}))).await?;
    assert_eq!(ids(&found), vec![c1 as i64]);

    // one-sided location search matches nothing
    let (_, found) = send(&app, "POST", "/api/configurations/available", None, Some(json!({
        "pick_up_location_id": bergen, "start_time": 201, "end_time": 300
    }))).await?;
    assert!(ids(&found).is_empty());

    let (status, body) = send(&app, "POST", "/api/configurations/available", None, Some(json!({
        "pick_up_location_id": 999, "drop_off_location_id": bergen, "start_time": 0, "end_time": 1
    }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Pick up location does not exist"));

    // the booking belongs to the caller
    let (_, booked) = send(&app, "GET", &format!("/api/rentals/{}", rental), None, None).await?;
    assert_eq!(booked["rental_object_id"], json!(ro));
    assert_eq!(booked["pick_up_location_id"], json!(bergen));
    Ok(())
}

#[tokio::test]
async fn test_rental_parent_checks_in_order() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;
    let (bergen, _, _) = seed_west_bergen(&app, &admin).await?;
    let window = json!({"start_time": 10, "end_time": 20});

    let (status, body) = send(&app, "POST", "/api/rentals/rental-object/999/pickup/998/dropoff/997", Some(&admin), Some(window.clone())).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Pick up location does not exist"));

    let uri = format!("/api/rentals/rental-object/999/pickup/{}/dropoff/997", bergen);
    let (_, body) = send(&app, "POST", &uri, Some(&admin), Some(window.clone())).await?;
    assert_eq!(body["message"], json!("Drop off location does not exist"));

    let uri = format!("/api/rentals/rental-object/999/pickup/{}/dropoff/{}", bergen, bergen);
    let (_, body) = send(&app, "POST", &uri, Some(&admin), Some(window)).await?;
    assert_eq!(body["message"], json!("Rental object does not exist"));
    Ok(())
}

#[tokio::test]
async fn test_configuration_summaries() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;
    let (_, c1, _) = seed_west_bergen(&app, &admin).await?;

    let p2 = create(&app, "/api/providers", &admin, json!({"name": "P2"})).await?;
    create(&app, &format!("/api/rentalobjects/provider/{}/configuration/{}", p2, c1), &admin, json!({"price": 499.5})).await?;

    let (_, cars) = send(&app, "GET", "/api/cars", None, None).await?;
    let car = cars[0]["id"].as_i64().unwrap_or_default();
    create(&app, &format!("/api/configurations/car/{}", car), &admin, json!({
        "name": "Bare", "fuel_type": "Electric", "transmission_type": "Automatic", "number_of_seats": 4
    })).await?;

    let (status, rows) = send(&app, "GET", "/api/configurations/search", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows[0], json!({
        "make": "Volvo", "model": "V90", "name": "C1", "fuel_type": "Diesel",
        "transmission_type": "Automatic", "number_of_seats": 5, "price": 499.5
    }));
    assert_eq!(rows[1]["name"], json!("Bare"));
    assert_eq!(rows[1]["price"], json!(9999.0));
    Ok(())
}

#[tokio::test]
async fn test_provider_regions() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;

    let west = create(&app, "/api/regions", &admin, json!({"name": "West"})).await?;
    let p = create(&app, "/api/providers", &admin, json!({"name": "Fjord Cars"})).await?;

    for _ in 0..2 {
        let (status, _) = send(&app, "PUT", &format!("/api/providers/{}/region/add/{}", p, west), Some(&admin), None).await?;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, view) = send(&app, "GET", &format!("/api/providers/{}", p), None, None).await?;
    assert_eq!(view["regions"], json!([{"id": west, "name": "West"}]));

    let (status, body) = send(&app, "PUT", &format!("/api/providers/{}/region/add/555", p), Some(&admin), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Region does not exist"));
    let (_, body) = send(&app, "PUT", &format!("/api/providers/555/region/add/{}", west), Some(&admin), None).await?;
    assert_eq!(body["message"], json!("Provider does not exist"));

    let (status, _) = send(&app, "PUT", &format!("/api/providers/{}/region/remove/{}", p, west), Some(&admin), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, view) = send(&app, "GET", &format!("/api/providers/{}", p), None, None).await?;
    assert_eq!(view["regions"], json!([]));
    Ok(())
}

#[tokio::test]
async fn test_reviews_and_extra_features() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_app().await?;
    let admin = admin_token(&app).await?;
    let (_, c1, _) = seed_west_bergen(&app, &admin).await?;

    let feature = create(&app, &format!("/api/extrafeatures/configuration/{}", c1), &admin, json!({"name": "Child seat"})).await?;
    let (_, body) = send(&app, "GET", &format!("/api/extrafeatures/{}", feature), None, None).await?;
    assert_eq!(body["configuration_id"], json!(c1));

    let (status, body) = send(&app, "POST", &format!("/api/reviews/configuration/{}", c1), Some(&admin), Some(json!({"rating": 9, "text": "too good"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Review is invalid"));

    let review = create(&app, &format!("/api/reviews/configuration/{}", c1), &admin, json!({"rating": 5, "text": "Smooth ride"})).await?;
    let (_, body) = send(&app, "GET", &format!("/api/reviews/{}", review), None, None).await?;
    assert_eq!(body["rating"], json!(5));
    assert_eq!(body["configuration_id"], json!(c1));

    // deleting the configuration cascades to its dependants
    let (status, _) = send(&app, "DELETE", &format!("/api/configurations/{}", c1), Some(&admin), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", &format!("/api/reviews/{}", review), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, features) = send(&app, "GET", "/api/extrafeatures", None, None).await?;
    assert_eq!(features, json!([]));
    Ok(())
}
