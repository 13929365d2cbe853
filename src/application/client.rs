/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::registry::{App, AppRegistry};
use crate::application::services::{
    AccountService, ExercisesService, FeedService, MailService, RackService, UserbaseService,
    UserbookService,
};
use crate::error::AppResult;
use crate::presentation::rack::RackStorage;
use crate::model::http::HttpClient;
use crate::model::transport::Transport;
use std::sync::Arc;
use tracing::info;

/// Logged-in ENT account and its apps
pub struct Client {
    http: Arc<HttpClient>,
    registry: AppRegistry,
}

impl Client {
    /// Validates the credentials, opens a session and logs in
    pub async fn new(config: Config) -> AppResult<Self> {
        let client = Self::new_lazy(config)?;
        client.login().await?;
        Ok(client)
    }

    /// Opens a session without logging in
    pub fn new_lazy(config: Config) -> AppResult<Self> {
        config.credentials.validate()?;
        let http = Arc::new(HttpClient::with_reqwest(Arc::new(config))?);
        Ok(Self::from_http(http))
    }

    /// Opens a session over a custom transport, without logging in
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> AppResult<Self> {
        config.credentials.validate()?;
        let http = Arc::new(HttpClient::new(Arc::new(config), transport));
        Ok(Self::from_http(http))
    }

    fn from_http(http: Arc<HttpClient>) -> Self {
        Self {
            registry: AppRegistry::new(http.clone()),
            http,
        }
    }

    /// Logs in with the configured credentials
    pub async fn login(&self) -> AppResult<()> {
        self.http.login().await?;
        info!("Client ready on {}", self.http.config().rest_api.base_url);
        Ok(())
    }

    /// Session manager shared by every app
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// App registry
    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    /// Instance of any app
    pub fn app<A: App>(&self) -> Arc<A> {
        self.registry.get::<A>()
    }

    /// Webmail
    pub fn mail(&self) -> Arc<MailService> {
        self.app()
    }

    /// Rack
    pub fn rack(&self) -> Arc<RackService> {
        self.app()
    }

    /// User and group directory
    pub fn userbase(&self) -> Arc<UserbaseService> {
        self.app()
    }

    /// Social profiles
    pub fn userbook(&self) -> Arc<UserbookService> {
        self.app()
    }

    /// Exercises
    pub fn exercises(&self) -> Arc<ExercisesService> {
        self.app()
    }

    /// Notification timeline
    pub fn feed(&self) -> Arc<FeedService> {
        self.app()
    }

    /// Logged-in account
    pub fn account(&self) -> Arc<AccountService> {
        self.app()
    }

    /// Rack quota of the logged-in account
    pub async fn rack_storage(&self) -> AppResult<RackStorage> {
        let user = self.account().user().await?;
        self.rack().storage(&user.id).await
    }

    /// Rack quota of the logged-in account, fetched again
    pub async fn refresh_rack_storage(&self) -> AppResult<RackStorage> {
        let user = self.account().user().await?;
        self.rack().refresh_storage(&user.id).await
    }
}
