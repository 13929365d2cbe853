/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::registry::{App, AppKind};
use crate::error::AppResult;
use crate::model::http::HttpClient;
use crate::model::requests::RequestOptions;
use crate::model::responses::UserInfo;
use crate::presentation::user::User;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Logged-in account
pub struct AccountService {
    http: Arc<HttpClient>,
    info: RwLock<Option<UserInfo>>,
}

impl App for AccountService {
    const KIND: AppKind = AppKind::Account;

    fn build(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            info: RwLock::new(None),
        }
    }
}

impl AccountService {
    /// Fetches the account info again, bypassing the request cache
    pub async fn refresh(&self) -> AppResult<User> {
        let info: UserInfo = self
            .http
            .request("auth/oauth2/userinfo", RequestOptions::new().use_cache(false))
            .await?
            .json()?;
        info!("Account information obtained for {}", info.user_id);

        let user = User::from(info.clone());
        *self.info.write().await = Some(info);
        Ok(user)
    }

    /// The account as a user, fetched on first call
    pub async fn user(&self) -> AppResult<User> {
        if let Some(info) = self.info.read().await.clone() {
            return Ok(User::from(info));
        }
        self.refresh().await
    }
}
