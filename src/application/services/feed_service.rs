use crate::application::registry::{App, AppKind};
use crate::error::AppResult;
use crate::model::http::HttpClient;
use crate::model::requests::FeedFilter;
use crate::model::responses::TimelineResponse;
use crate::presentation::feed::FeedItem;
use std::sync::Arc;
use tracing::debug;

/// Timeline service
pub struct FeedService {
    http: Arc<HttpClient>,
}

impl App for FeedService {
    const KIND: AppKind = AppKind::Feed;

    fn build(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

impl FeedService {
    /// Latest notifications matching `filter`
    pub async fn fetch(&self, filter: &FeedFilter) -> AppResult<Vec<FeedItem>> {
        let path = format!("timeline/lastNotifications{}", filter.to_query());
        let response: TimelineResponse = self.http.get_json(&path).await?;
        let items: Vec<FeedItem> = response.results.into_iter().map(FeedItem::from).collect();
        debug!("Feed obtained: {} notifications", items.len());
        Ok(items)
    }
}
