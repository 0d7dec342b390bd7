mod action;
pub mod effects;
mod form;
mod reducer;
mod state;

pub use action::{AuthAction, AuthOperation};
pub use form::{Gender, RegisterForm};
pub use reducer::reduce;
pub use state::AuthState;

use crate::event::AppEvent;

pub struct AuthReducer;

impl super::Reducer for AuthReducer {
    type Action = AppEvent;

    type State = AuthState;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppEvent::Auth(action) => reducer::reduce(state, action),
            _ => state,
        }
    }
}
