//! Unit tests for the RPC dispatch layer: method routing, parameter
//! validation, and a full navigate-advance-snapshot flow over JSON.

use std::sync::Mutex;

use serde_json::{json, Value};

use emubrowser::app::BrowserSession;
use emubrowser::rpc_handler::handle_method;

const START: &str = "https://www.example.com";

fn session() -> Mutex<BrowserSession> {
    Mutex::new(BrowserSession::with_initial_url(START))
}

#[test]
fn test_snapshot_returns_full_state() {
    let app = session();
    let result = handle_method(&app, "session.snapshot", &json!({})).unwrap();
    assert_eq!(result["active_tab_id"], 1);
    assert_eq!(result["tabs"].as_array().unwrap().len(), 1);
    assert_eq!(result["tabs"][0]["url"], START);
}

#[test]
fn test_navigate_then_advance_resolves_title() {
    let app = session();
    handle_method(
        &app,
        "nav.navigate",
        &json!({"id": 1, "url": "openai.com"}),
    )
    .unwrap();

    let snapshot = handle_method(&app, "session.snapshot", &json!({})).unwrap();
    assert_eq!(snapshot["tabs"][0]["loading"], true);

    let result = handle_method(&app, "session.advance", &json!({"ms": 800})).unwrap();
    assert_eq!(result["now_ms"], 800);

    let snapshot = handle_method(&app, "session.snapshot", &json!({})).unwrap();
    assert_eq!(snapshot["tabs"][0]["loading"], false);
    assert_eq!(snapshot["tabs"][0]["title"], "openai.com");
    assert_eq!(snapshot["tabs"][0]["url"], "https://openai.com/");
}

#[test]
fn test_tab_new_and_close() {
    let app = session();
    let result = handle_method(&app, "tab.new", &json!({})).unwrap();
    assert_eq!(result["id"], 2);

    handle_method(&app, "tab.close", &json!({"id": 2})).unwrap();
    let snapshot = handle_method(&app, "session.snapshot", &json!({})).unwrap();
    assert_eq!(snapshot["tabs"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["active_tab_id"], 1);
}

#[test]
fn test_tab_activate_reports_unknown_ids() {
    let app = session();
    let result = handle_method(&app, "tab.activate", &json!({"id": 99})).unwrap();
    assert_eq!(result["ok"], false);
}

#[test]
fn test_back_and_forward_report_legality() {
    let app = session();
    let result = handle_method(&app, "nav.back", &json!({"id": 1})).unwrap();
    assert_eq!(result["moved"], false);

    handle_method(&app, "nav.navigate", &json!({"id": 1, "url": "a.com"})).unwrap();
    handle_method(&app, "session.advance", &json!({"ms": 800})).unwrap();

    let result = handle_method(&app, "nav.back", &json!({"id": 1})).unwrap();
    assert_eq!(result["moved"], true);
    let result = handle_method(&app, "nav.forward", &json!({"id": 1})).unwrap();
    assert_eq!(result["moved"], true);
}

#[test]
fn test_missing_params_are_errors() {
    let app = session();
    assert!(handle_method(&app, "nav.navigate", &json!({"id": 1})).is_err());
    assert!(handle_method(&app, "nav.navigate", &json!({"url": "a.com"})).is_err());
    assert!(handle_method(&app, "session.advance", &json!({})).is_err());
    assert!(handle_method(&app, "tab.close", &json!({})).is_err());
}

#[test]
fn test_unknown_method_is_an_error() {
    let app = session();
    let err = handle_method(&app, "bogus.method", &json!({})).unwrap_err();
    assert!(err.contains("unknown method"));
}

#[test]
fn test_personality_list_and_get() {
    let app = session();
    let list = handle_method(&app, "personality.list", &json!({})).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 4);

    let one = handle_method(&app, "personality.get", &json!({"key": "midnight"})).unwrap();
    assert_eq!(one["name"], "Midnight");
    assert!(one["home_url"].as_str().unwrap().starts_with("https://"));

    assert!(handle_method(&app, "personality.get", &json!({"key": "nope"})).is_err());
}

#[test]
fn test_page_render_reflects_tab_state() {
    let app = session();
    handle_method(&app, "nav.navigate", &json!({"id": 1, "url": "openai.com"})).unwrap();
    handle_method(&app, "session.advance", &json!({"ms": 800})).unwrap();

    let content = handle_method(&app, "page.render", &json!({"id": 1})).unwrap();
    assert_eq!(content["heading"], "openai.com");
    assert_eq!(content["error"], false);

    assert!(handle_method(&app, "page.render", &json!({"id": 9})).is_err());
}

#[test]
fn test_error_results_leave_session_usable() {
    let app = session();
    assert!(handle_method(&app, "tab.close", &json!({"id": 77})).is_err());
    let snapshot: Value = handle_method(&app, "session.snapshot", &json!({})).unwrap();
    assert_eq!(snapshot["tabs"].as_array().unwrap().len(), 1);
}
