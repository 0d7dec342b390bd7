use crate::environment::types::{ApiError, User};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuthState {
    pub jwt: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.jwt.is_some()
    }
}
