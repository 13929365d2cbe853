/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Directory of the users and groups visible to the account.

use crate::application::registry::{App, AppKind};
use crate::error::AppResult;
use crate::model::http::HttpClient;
use crate::model::requests::{RequestOptions, SearchFilter};
use crate::model::responses::VisibleResponse;
use crate::presentation::user::{Group, User};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::debug;

/// Userbase service
pub struct UserbaseService {
    http: Arc<HttpClient>,
}

impl App for UserbaseService {
    const KIND: AppKind = AppKind::Userbase;

    fn build(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

/// Search payload shared by user and group searches
pub fn search_payload(filter: &SearchFilter) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("search".to_string(), json!(filter.query));
    payload.insert("classes".to_string(), json!(filter.classes));
    payload.insert("structures".to_string(), json!(filter.schools));
    payload.insert("functions".to_string(), json!(filter.functions));
    payload
}

impl UserbaseService {
    async fn search(&self, payload: Map<String, Value>) -> AppResult<VisibleResponse> {
        self.http
            .request(
                "communication/visible",
                RequestOptions::post()
                    .json(Value::Object(payload))
                    .inject_csrf_token(true),
            )
            .await?
            .json()
    }

    /// Users matching `filter`
    pub async fn search_users(&self, filter: &SearchFilter) -> AppResult<Vec<User>> {
        let mut payload = search_payload(filter);
        payload.insert("types".to_string(), json!(["User"]));

        let users: Vec<User> = self
            .search(payload)
            .await?
            .users
            .into_iter()
            .map(User::from)
            .collect();
        debug!("Userbase search {:?}: {} users", filter.query, users.len());
        Ok(users)
    }

    /// Groups of type `group_type` (usually `Group`) matching `filter`
    pub async fn search_groups(&self, filter: &SearchFilter, group_type: &str) -> AppResult<Vec<Group>> {
        let mut payload = search_payload(filter);
        payload.insert("types".to_string(), json!(group_type));
        payload.insert("groupType".to_string(), json!(true));
        payload.insert("nbUsersInGroups".to_string(), json!(true));

        let groups: Vec<Group> = self
            .search(payload)
            .await?
            .groups
            .into_iter()
            .map(Group::from)
            .collect();
        debug!("Userbase search {:?}: {} groups", filter.query, groups.len());
        Ok(groups)
    }
}
