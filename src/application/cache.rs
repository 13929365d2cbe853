/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::requests::RequestFingerprint;
use crate::model::transport::HttpResponse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store of successful responses keyed by request fingerprint.
///
/// Entries live as long as the client: there is no eviction, no size bound
/// and no invalidation. A write such as sending a mail leaves earlier
/// cached reads of the same resources untouched.
#[derive(Default)]
pub struct RequestCache {
    entries: RwLock<HashMap<RequestFingerprint, Arc<HttpResponse>>>,
}

impl RequestCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached response for `fingerprint`
    pub async fn get(&self, fingerprint: &RequestFingerprint) -> Option<Arc<HttpResponse>> {
        self.entries.read().await.get(fingerprint).cloned()
    }

    /// Stores `response`, replacing any previous entry
    pub async fn put(&self, fingerprint: RequestFingerprint, response: Arc<HttpResponse>) {
        self.entries.write().await.insert(fingerprint, response);
    }

    /// Number of cached responses
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing is cached
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
