/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Credentials and session state of one ENT login.
//!
//! The handshake itself goes through [`crate::model::http::HttpClient::login`]
//! so that it shares the request primitive with every other call.

use crate::application::config::Credentials;
use crate::model::auth::{LoginForm, SessionState};
use tokio::sync::RwLock;
use tracing::debug;

/// Authentication state holder
pub struct Auth {
    credentials: Credentials,
    state: RwLock<SessionState>,
}

impl Auth {
    /// Creates an unauthenticated holder for `credentials`
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            state: RwLock::new(SessionState::Unauthenticated),
        }
    }

    /// Account credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Form posted to the login endpoint
    pub fn login_form(&self) -> LoginForm {
        LoginForm {
            email: self.credentials.username.clone(),
            password: self.credentials.password.clone(),
        }
    }

    /// Current state
    pub async fn state(&self) -> SessionState {
        *self.state.read().await
    }

    /// Replaces the state
    pub async fn set_state(&self, state: SessionState) {
        let mut current = self.state.write().await;
        if *current != state {
            debug!("Session state: {} -> {}", *current, state);
        }
        *current = state;
    }
}
