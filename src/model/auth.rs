/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Lifecycle of an ENT session.
///
/// The only transition is `Unauthenticated -> Authenticated`, through a
/// successful login. A session that expires server-side stays
/// `Authenticated` and subsequent calls fail with `RequestFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub enum SessionState {
    /// No login performed yet
    #[default]
    Unauthenticated,
    /// The CSRF cookie was observed after login
    Authenticated,
}

impl SessionState {
    /// Whether the session has logged in
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

/// Form posted to the login endpoint
#[derive(Clone, Serialize)]
pub struct LoginForm {
    /// Account identifier, the portal calls it `email`
    pub email: String,
    /// Account password
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
