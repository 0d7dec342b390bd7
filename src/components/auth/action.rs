use strum_macros::{Display, EnumIter};

use crate::environment::types::{ApiError, AuthResponse, User};
use crate::event::{error_payload, payload, DecodeError, RawEvent};

#[derive(EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AuthOperation {
    Register,
    Login,
    Profile,
}

impl AuthOperation {
    fn prefix(&self) -> &'static str {
        match self {
            AuthOperation::Register => "REGISTER",
            AuthOperation::Login => "LOGIN",
            AuthOperation::Profile => "GET_PROFILE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    Request(AuthOperation),
    Registered(AuthResponse),
    LoggedIn(AuthResponse),
    ProfileLoaded(User),
    Failed(AuthOperation, ApiError),
    Logout,
}

impl AuthAction {
    pub fn kind(&self) -> &'static str {
        use AuthOperation::*;
        match self {
            AuthAction::Request(Register) => "REGISTER_REQUEST",
            AuthAction::Request(Login) => "LOGIN_REQUEST",
            AuthAction::Request(Profile) => "GET_PROFILE_REQUEST",
            AuthAction::Registered(_) => "REGISTER_SUCCESS",
            AuthAction::LoggedIn(_) => "LOGIN_SUCCESS",
            AuthAction::ProfileLoaded(_) => "GET_PROFILE_SUCCESS",
            AuthAction::Failed(Register, _) => "REGISTER_FAILURE",
            AuthAction::Failed(Login, _) => "LOGIN_FAILURE",
            AuthAction::Failed(Profile, _) => "GET_PROFILE_FAILURE",
            AuthAction::Logout => "LOGOUT",
        }
    }

    /// `None` if the kind isn't an auth kind
    pub fn decode(raw: &RawEvent) -> Result<Option<Self>, DecodeError> {
        use strum::IntoEnumIterator;
        if raw.kind == "LOGOUT" {
            return Ok(Some(AuthAction::Logout));
        }
        let Some((operation, phase)) = AuthOperation::iter().find_map(|operation| {
            raw.kind
                .strip_prefix(operation.prefix())
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|phase| (operation, phase))
        }) else {
            return Ok(None);
        };
        let action = match (operation, phase) {
            (_, "REQUEST") => AuthAction::Request(operation),
            (_, "FAILURE") => AuthAction::Failed(operation, error_payload(raw)?),
            (AuthOperation::Register, "SUCCESS") => AuthAction::Registered(payload(raw)?),
            (AuthOperation::Login, "SUCCESS") => AuthAction::LoggedIn(payload(raw)?),
            (AuthOperation::Profile, "SUCCESS") => AuthAction::ProfileLoaded(payload(raw)?),
            _ => return Ok(None),
        };
        Ok(Some(action))
    }
}
