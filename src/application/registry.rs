/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Lazily built, memoized app services.

use crate::model::http::HttpClient;
use pretty_simple_display::DisplaySimple;
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Kinds of ENT apps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DisplaySimple, Serialize)]
pub enum AppKind {
    /// Zimbra webmail
    Mail,
    /// File drop-box
    Rack,
    /// User and group directory
    Userbase,
    /// Social profiles
    Userbook,
    /// Exercise results
    Exercises,
    /// Notification timeline
    Feed,
    /// Logged-in account
    Account,
}

/// An app service bound to the session manager
pub trait App: Send + Sync + 'static {
    /// Registry slot of this app
    const KIND: AppKind;

    /// Builds the service over `http`
    fn build(http: Arc<HttpClient>) -> Self;
}

type AppSlot = Arc<dyn Any + Send + Sync>;

/// One instance per app kind, built on first access
pub struct AppRegistry {
    http: Arc<HttpClient>,
    apps: Mutex<HashMap<AppKind, AppSlot>>,
}

impl AppRegistry {
    /// Creates an empty registry
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            apps: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the instance of `A`, building it on first call.
    ///
    /// Later calls return the same `Arc`.
    pub fn get<A: App>(&self) -> Arc<A> {
        let mut apps = self.lock();

        if let Some(app) = apps.get(&A::KIND) {
            if let Ok(app) = Arc::clone(app).downcast::<A>() {
                return app;
            }
        }

        debug!("Building {} app", A::KIND);
        let app = Arc::new(A::build(self.http.clone()));
        apps.insert(A::KIND, app.clone());
        app
    }

    /// Whether `kind` has been built
    pub fn contains(&self, kind: AppKind) -> bool {
        self.lock().contains_key(&kind)
    }

    /// Number of built apps
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no app has been built yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Inserts are single operations, a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<AppKind, AppSlot>> {
        self.apps.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
