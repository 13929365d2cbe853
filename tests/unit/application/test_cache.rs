use ent_client::application::cache::RequestCache;
use ent_client::model::requests::RequestOptions;
use ent_client::model::transport::HttpResponse;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_cache_starts_empty() {
    let cache = RequestCache::new();
    assert!(cache.is_empty().await);
    assert_eq!(cache.len().await, 0);
    assert!(cache.get(&RequestOptions::new().fingerprint("echo")).await.is_none());
}

#[tokio::test]
async fn test_cache_put_and_get() {
    let cache = RequestCache::new();
    let fingerprint = RequestOptions::new().fingerprint("zimbra/zimbra");
    let response = Arc::new(HttpResponse::new(StatusCode::OK, "page"));

    cache.put(fingerprint.clone(), response.clone()).await;

    let cached = cache.get(&fingerprint).await.expect("entry stored");
    assert!(Arc::ptr_eq(&cached, &response));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_cache_replaces_entry() {
    let cache = RequestCache::new();
    let fingerprint = RequestOptions::new().fingerprint("rack/list");

    cache
        .put(fingerprint.clone(), Arc::new(HttpResponse::new(StatusCode::OK, "old")))
        .await;
    cache
        .put(fingerprint.clone(), Arc::new(HttpResponse::new(StatusCode::OK, "new")))
        .await;

    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.get(&fingerprint).await.unwrap().text(), "new");
}

#[tokio::test]
async fn test_cache_distinguishes_bodies() {
    let cache = RequestCache::new();
    let first = RequestOptions::post()
        .json(json!({"search": "dupont"}))
        .fingerprint("communication/visible");
    let second = RequestOptions::post()
        .json(json!({"search": "martin"}))
        .fingerprint("communication/visible");

    cache
        .put(first.clone(), Arc::new(HttpResponse::new(StatusCode::OK, "dupont")))
        .await;

    assert!(cache.get(&first).await.is_some());
    assert!(cache.get(&second).await.is_none());
}
