// src/tests/router_tests/pages_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{fixture_store, get, read_body};

#[test]
fn home_page_links_to_both_modes() {
    let store = fixture_store();

    let resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains(r#"href="/stays""#));
    assert!(body.contains(r#"href="/properties""#));
}

#[test]
fn detail_page_looks_up_a_listing_by_id() {
    let store = fixture_store();

    let resp = handle(get("/stays/2"), &store).unwrap();
    let body = read_body(resp);

    assert!(body.contains("Hilltop House"));
    assert!(body.contains("KES 9,000"));
    assert!(body.contains("4 bedroom family home"));
}

#[test]
fn detail_ids_are_scoped_per_mode() {
    let store = fixture_store();

    let body = read_body(handle(get("/properties/2"), &store).unwrap());
    assert!(body.contains("Karen Villa"));
    assert!(!body.contains("Hilltop House"));
}

#[test]
fn unknown_listing_id_is_not_found() {
    let store = fixture_store();

    let err = handle(get("/stays/999"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(get("/stays/abc"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn unknown_route_is_not_found() {
    let store = fixture_store();

    let err = handle(get("/campaigns"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn static_assets_are_served_with_content_types() {
    let store = fixture_store();

    let css = handle(get("/static/main.css"), &store).unwrap();
    assert_eq!(css.status(), 200);
    assert_eq!(
        css.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css"
    );
    assert!(read_body(css).contains(".property-card"));

    let js = handle(get("/static/app.js"), &store).unwrap();
    assert_eq!(js.status(), 200);
    assert_eq!(
        js.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/javascript"
    );
    assert!(read_body(js).contains("scrollBy"));
}
