//! The state shared by every content family: posts, meal plans and
//! workout statuses all fold their events the same way. A family only
//! contributes its item type, its event names and its endpoints.

mod action;
pub mod catalog;
pub mod effects;
mod reducer;
mod state;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use action::ResourceAction;
pub use catalog::{EventCatalog, Operation, Phase, Resource};
pub use reducer::reduce;
pub use state::ResourceState;

use crate::environment::storage::AppState;
use crate::environment::types::{FeedItem, PostId};
use crate::event::AppEvent;

/// Where a family lives on the server
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Endpoints {
    pub collection: &'static str,
    pub comments: &'static str,
}

impl Endpoints {
    pub fn item(&self, id: PostId) -> String {
        format!("{}/{id}", self.collection)
    }

    pub fn like(&self, id: PostId) -> String {
        format!("{}/like/{id}", self.collection)
    }

    pub fn comment(&self, id: PostId) -> String {
        format!("{}/{id}", self.comments)
    }
}

pub trait ResourceFamily: 'static {
    type Item: FeedItem
        + Clone
        + std::fmt::Debug
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;
    /// The body sent on create and update
    type Draft: Serialize + Send + Sync;

    const CATALOG: EventCatalog;
    const ENDPOINTS: Endpoints;

    /// The part of an app event that belongs to this family
    fn project(event: &AppEvent) -> Option<&ResourceAction<Self::Item>>;
    fn wrap(action: ResourceAction<Self::Item>) -> AppEvent;
    fn state(app: &AppState) -> &ResourceState<Self::Item>;
}

/// One reducer instance per family
pub struct ResourceReducer<F>(PhantomData<F>);

impl<F: ResourceFamily> super::Reducer for ResourceReducer<F> {
    type Action = AppEvent;

    type State = ResourceState<F::Item>;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match F::project(action) {
            Some(action) => reducer::reduce::<F>(state, action),
            None => state,
        }
    }
}
