use std::time::Duration;

use actix_web::test;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hotel_pricing_api::services::currency::CurrencyLocale;
use hotel_pricing_api::services::room_catalog::RoomCatalog;

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_health_reports_static_catalog() {
    let app = test::init_service(TestApp::new(CurrencyLocale::FrCa).create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["room_catalog"]["status"], "static");
    assert_eq!(body["services"]["pricing"]["status"], "ok");
}

#[actix_web::test]
async fn test_room_listing_starting_from() {
    let app = test::init_service(TestApp::new(CurrencyLocale::FrCa).create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let rooms = body.as_array().unwrap();
    // the misconfigured room is dropped from the listing
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["id"], "deluxe-king");
    assert_eq!(rooms[0]["starting_from"], 189.0);
    assert_eq!(rooms[0]["starting_from_display"], "189,00\u{a0}$");
    assert_eq!(rooms[1]["starting_from"], 1299.0);
    assert_eq!(rooms[1]["starting_from_display"], "1\u{a0}299,00\u{a0}$");
}

#[actix_web::test]
async fn test_room_quote() {
    let app = test::init_service(TestApp::new(CurrencyLocale::EnCa).create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms/deluxe-king/quote?check_in=2024-05-03&check_out=2024-05-04")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["room_id"], "deluxe-king");
    assert_eq!(body["nights"]["weekend_nights"], 1);
    assert_eq!(body["nights"]["weekday_nights"], 0);
    assert_eq!(body["quote"]["subtotal"], 220.0);
    assert_eq!(body["rates"]["base_price"], 189.0);
}

#[actix_web::test]
async fn test_room_quote_errors() {
    let app = test::init_service(TestApp::new(CurrencyLocale::EnCa).create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms/penthouse/quote?check_in=2024-05-03&check_out=2024-05-04")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");

    let req = test::TestRequest::get()
        .uri("/api/rooms/broken/quote?check_in=2024-05-03&check_out=2024-05-04")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get()
        .uri("/api/rooms/deluxe-king/quote?check_in=2024-05-04&check_out=2024-05-03")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_backend_room_quote_and_invalidation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/deluxe-king"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "deluxe-king",
            "name": "Deluxe King",
            "base_price": 189.0,
            "weekend_price": 220.0
        })))
        .expect(2)
        .mount(&server)
        .await;

    let catalog = RoomCatalog::from_backend(
        Url::parse(&server.uri()).unwrap(),
        Duration::from_secs(5),
        16,
        Duration::from_secs(60),
    )
    .unwrap();
    let app = test::init_service(
        TestApp::with_catalog(catalog, CurrencyLocale::EnCa).create_app(),
    )
    .await;

    let quote_uri = "/api/rooms/deluxe-king/quote?check_in=2024-05-02&check_out=2024-05-05";
    for _ in 0..2 {
        let req = test::TestRequest::get().uri(quote_uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["quote"]["total"], 723.19);
    }

    let req = test::TestRequest::post()
        .uri("/api/rooms/cache/invalidate")
        .set_json(&json!({ "room_id": "deluxe-king" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["cached_entries"], 0);

    // refetched after invalidation: second and last backend hit
    let req = test::TestRequest::get().uri(quote_uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_backend_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = RoomCatalog::from_backend(
        Url::parse(&server.uri()).unwrap(),
        Duration::from_secs(5),
        16,
        Duration::from_secs(60),
    )
    .unwrap();
    let app = test::init_service(
        TestApp::with_catalog(catalog, CurrencyLocale::EnCa).create_app(),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/rooms").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_gateway");
}
