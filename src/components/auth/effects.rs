//! Sign up, sign in and profile loading. Each call announces itself with
//! a REQUEST and ends in exactly one SUCCESS or FAILURE.

use itertools::Itertools;
use serde::de::DeserializeOwned;

use crate::environment::storage::Dispatcher;
use crate::environment::types::{ApiError, AuthResponse, Credentials, User};
use crate::environment::{Api, ApiRequest};
use crate::event::AppEvent;

use super::{AuthAction, AuthOperation, RegisterForm};

const SIGNUP_PATH: &str = "/auth/signup";
const SIGNIN_PATH: &str = "/auth/signin";
const PROFILE_PATH: &str = "/api/users/profile";

/// An invalid form never reaches the server
pub async fn register<A: Api + ?Sized>(api: &A, dispatcher: &Dispatcher, form: &RegisterForm) {
    if let Err(errors) = form.validate() {
        let error = ApiError::new(errors.iter().join("; "));
        dispatcher.send(AppEvent::Auth(AuthAction::Failed(AuthOperation::Register, error)));
        return;
    }
    let request = ApiRequest::post(SIGNUP_PATH, form);
    let Some(response) =
        call::<_, AuthResponse>(api, dispatcher, AuthOperation::Register, request).await
    else {
        return;
    };
    api.set_token(Some(response.token.clone()));
    dispatcher.send(AppEvent::Auth(AuthAction::Registered(response)));
    profile(api, dispatcher).await;
}

pub async fn login<A: Api + ?Sized>(api: &A, dispatcher: &Dispatcher, credentials: &Credentials) {
    let request = ApiRequest::post(SIGNIN_PATH, credentials);
    let Some(response) =
        call::<_, AuthResponse>(api, dispatcher, AuthOperation::Login, request).await
    else {
        return;
    };
    api.set_token(Some(response.token.clone()));
    dispatcher.send(AppEvent::Auth(AuthAction::LoggedIn(response)));
    profile(api, dispatcher).await;
}

pub async fn profile<A: Api + ?Sized>(api: &A, dispatcher: &Dispatcher) {
    let request = Ok(ApiRequest::get(PROFILE_PATH));
    if let Some(user) = call::<_, User>(api, dispatcher, AuthOperation::Profile, request).await {
        dispatcher.send(AppEvent::Auth(AuthAction::ProfileLoaded(user)));
    }
}

pub fn logout<A: Api + ?Sized>(api: &A, dispatcher: &Dispatcher) {
    api.set_token(None);
    dispatcher.send(AppEvent::Auth(AuthAction::Logout));
}

/// Sends REQUEST, performs the call and sends FAILURE on error.
/// The success event is left to the caller.
async fn call<A: Api + ?Sized, T: DeserializeOwned>(
    api: &A,
    dispatcher: &Dispatcher,
    operation: AuthOperation,
    request: Result<ApiRequest, ApiError>,
) -> Option<T> {
    use crate::environment::model::ResultExt;
    dispatcher.send(AppEvent::Auth(AuthAction::Request(operation)));
    let result = match request {
        Ok(request) => {
            let call = request.call();
            api.send(request)
                .await
                .and_then(|value| serde_json::from_value(value).api_error(&call))
        }
        Err(e) => Err(e),
    };
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            dispatcher.send(AppEvent::Auth(AuthAction::Failed(operation, error)));
            None
        }
    }
}
