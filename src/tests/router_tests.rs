// src/tests/router_tests.rs

use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::router::handle;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

/// Config pointing at unroutable endpoints; routes under test here
/// never reach the network.
fn test_config() -> AppConfig {
    AppConfig {
        parcels_url: "http://127.0.0.1:1/parcels".to_string(),
        geocoder_url: "http://127.0.0.1:1/geocode".to_string(),
        port: 0,
    }
}

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

#[test]
fn root_reports_backend_running() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &test_config()).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body = body_string(resp);
    assert!(body.contains("Property search backend is running"));
}

#[test]
fn ui_page_loads() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/ui")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &test_config()).expect("Handler failed");

    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Denton County Property Finder"));
    assert!(body.contains("searchBtn"));
    assert!(body.contains("/api/properties/search"));
}

#[test]
fn liveness_endpoint_responds() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/test")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &test_config()).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("backend"));
}

#[test]
fn unknown_route_is_not_found() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn malformed_json_body_is_a_bad_request() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/properties/search")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let err = handle(req, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn blank_address_is_a_bad_request() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/properties/search")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"address": "   "}"#))
        .unwrap();

    let err = handle(req, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn nonpositive_radius_is_a_bad_request() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/properties/export")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"address": "123 Main St", "radius_miles": -1.0}"#,
        ))
        .unwrap();

    let err = handle(req, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn cors_preflight_succeeds() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/properties/search")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &test_config()).expect("Handler failed");

    assert_eq!(resp.status(), 204);
    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(resp
        .headers()
        .get("Access-Control-Allow-Methods")
        .is_some());
}
