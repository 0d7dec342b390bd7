use super::{AuthAction, AuthState};

pub fn reduce(state: AuthState, action: &AuthAction) -> AuthState {
    log::trace!("{}", action.kind());
    match action {
        AuthAction::Request(_) => AuthState {
            loading: true,
            error: None,
            ..state
        },
        AuthAction::Registered(response) | AuthAction::LoggedIn(response) => AuthState {
            jwt: Some(response.token.clone()),
            loading: false,
            error: None,
            ..state
        },
        AuthAction::ProfileLoaded(user) => AuthState {
            user: Some(user.clone()),
            loading: false,
            error: None,
            ..state
        },
        AuthAction::Failed(_, error) => AuthState {
            loading: false,
            error: Some(error.clone()),
            ..state
        },
        AuthAction::Logout => AuthState::default(),
    }
}
