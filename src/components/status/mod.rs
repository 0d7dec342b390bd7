use crate::environment::storage::AppState;
use crate::environment::types::{StatusDraft, StatusPost};
use crate::event::AppEvent;

use super::resource::catalog::STATUS_EVENTS;
use super::resource::{
    Endpoints, EventCatalog, ResourceAction, ResourceFamily, ResourceReducer, ResourceState,
};

pub type StatusAction = ResourceAction<StatusPost>;
pub type State = ResourceState<StatusPost>;
pub type StatusReducer = ResourceReducer<StatusFamily>;

/// Workout updates: distance, pushups and weights
pub struct StatusFamily;

impl ResourceFamily for StatusFamily {
    type Item = StatusPost;

    type Draft = StatusDraft;

    const CATALOG: EventCatalog = STATUS_EVENTS;

    const ENDPOINTS: Endpoints = Endpoints {
        collection: "/api/status",
        comments: "/api/comments/status",
    };

    fn project(event: &AppEvent) -> Option<&StatusAction> {
        match event {
            AppEvent::Status(action) => Some(action),
            _ => None,
        }
    }

    fn wrap(action: StatusAction) -> AppEvent {
        AppEvent::Status(action)
    }

    fn state(app: &AppState) -> &State {
        &app.statuses
    }
}
