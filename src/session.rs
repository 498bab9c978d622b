//! Authentication state for the running page.
//!
//! The token is opaque: it is stored on login, copied into every protected
//! request's bearer header and dropped on logout.  Nothing here inspects or
//! refreshes it.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, token: String, user: String) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
