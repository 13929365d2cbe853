use ent_client::error::AppError;
use ent_client::model::requests::{
    FeedFilter, RequestBody, RequestFingerprint, RequestOptions, SearchFilter, encode_form,
};
use reqwest::Method;
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn test_default_options() {
    let options = RequestOptions::new();
    assert_eq!(options.method, Method::GET);
    assert!(options.body.is_none());
    assert!(options.headers.is_none());
    assert!(options.use_cache);
    assert!(options.absolute_path);
    assert!(!options.body_is_json);
    assert!(!options.inject_csrf_token);
}

#[test]
fn test_fingerprint_equality() {
    let a = RequestOptions::post()
        .json(json!({"search": "dupont"}))
        .header("Accept", "application/json")
        .fingerprint("communication/visible");
    let b = RequestOptions::post()
        .json(json!({"search": "dupont"}))
        .header("Accept", "application/json")
        .fingerprint("communication/visible");
    assert_eq!(a, b);

    let other_method = RequestOptions::new().fingerprint("communication/visible");
    let other_header = RequestOptions::post()
        .json(json!({"search": "dupont"}))
        .fingerprint("communication/visible");
    assert_ne!(a, other_method);
    assert_ne!(a, other_header);
}

#[test]
fn test_fingerprint_excludes_csrf_flag() {
    let plain = RequestOptions::post().fingerprint("rack");
    let injected = RequestOptions::post()
        .inject_csrf_token(true)
        .fingerprint("rack");
    assert_eq!(plain, injected);
}

#[test]
fn test_fingerprint_header_order_is_irrelevant() {
    let mut first = BTreeMap::new();
    first.insert("A".to_string(), "1".to_string());
    first.insert("B".to_string(), "2".to_string());
    let second = RequestOptions::new()
        .header("B", "2")
        .header("A", "1")
        .fingerprint("x");

    assert_eq!(
        RequestFingerprint::new(&Method::GET, "x", None, Some(&first)),
        second
    );
}

#[test]
fn test_fingerprint_display_redacts_body() {
    let fingerprint = RequestOptions::post()
        .form(json!({"password": "hunter2"}))
        .fingerprint("auth/login");

    let display = fingerprint.to_string();
    assert!(display.starts_with("POST auth/login"));
    assert!(display.contains("bytes"));
    assert!(!display.contains("hunter2"));
    assert!(!format!("{fingerprint:?}").contains("hunter2"));
    assert!(fingerprint.body().is_some());
}

#[test]
fn test_encode_form() {
    let encoded = encode_form(&json!({
        "email": "jean.dupont@ent.fr",
        "ids": ["a", "b"],
        "skip": null,
        "flag": true,
    }))
    .unwrap();

    let mut pairs: Vec<&str> = encoded.split('&').collect();
    pairs.sort_unstable();
    assert_eq!(
        pairs,
        vec!["email=jean.dupont%40ent.fr", "flag=true", "ids=a", "ids=b"]
    );
}

#[test]
fn test_encode_form_rejects_non_object() {
    assert!(matches!(
        encode_form(&json!(["a"])),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_body_encoding() {
    let body = RequestBody::Structured(json!({"a": "b c"}));

    let form = body.encode(false).unwrap();
    assert_eq!(form.bytes, b"a=b%20c");
    assert_eq!(form.content_type, Some("application/x-www-form-urlencoded"));

    let as_json = body.encode(true).unwrap();
    assert_eq!(as_json.bytes, br#"{"a":"b c"}"#);
    assert_eq!(as_json.content_type, None);

    let raw = RequestBody::Raw(vec![1, 2, 3]).encode(true).unwrap();
    assert_eq!(raw.bytes, vec![1, 2, 3]);
    assert_eq!(raw.content_type, None);
}

#[test]
fn test_search_filter_query() {
    let filter = SearchFilter::query("dupont");
    assert_eq!(filter.query, "dupont");
    assert!(filter.classes.is_none());
}

#[test]
fn test_feed_filter_query() {
    assert_eq!(FeedFilter::default().to_query(), "");

    let filter = FeedFilter {
        types: vec!["MESSAGERIE".to_string(), "BLOG".to_string()],
        page: Some(2),
    };
    assert_eq!(filter.to_query(), "?type=MESSAGERIE&type=BLOG&page=2");
}
