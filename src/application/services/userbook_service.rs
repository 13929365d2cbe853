use crate::application::registry::{App, AppKind};
use crate::error::AppResult;
use crate::model::http::HttpClient;
use crate::model::responses::PersonResponse;
use crate::presentation::user::User;
use crate::presentation::userbook::UserbookData;
use std::sync::Arc;

/// Userbook service
pub struct UserbookService {
    http: Arc<HttpClient>,
}

impl App for UserbookService {
    const KIND: AppKind = AppKind::Userbook;

    fn build(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

impl UserbookService {
    /// Social profile of `user`
    pub async fn fetch(&self, user: &User) -> AppResult<UserbookData> {
        let path = format!("userbook/api/person?id={}", urlencoding::encode(&user.id));
        let response: PersonResponse = self.http.get_json(&path).await?;
        Ok(UserbookData::from_rows(response.result))
    }
}
