pub mod auth;
pub mod meal_plan;
pub mod post;
pub mod resource;
pub mod status;

/// A state slice and the pure function that folds events into it.
/// Reducers never perform I/O, that is the job of the effects.
pub trait Reducer {
    type Action;

    type State: Default + Clone;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State;

    fn initial_state() -> Self::State {
        Self::State::default()
    }
}
