use crate::environment::storage::AppState;
use crate::environment::types::{Post, PostDraft};
use crate::event::AppEvent;

use super::resource::catalog::POST_EVENTS;
use super::resource::{
    Endpoints, EventCatalog, ResourceAction, ResourceFamily, ResourceReducer, ResourceState,
};

pub type PostAction = ResourceAction<Post>;
pub type State = ResourceState<Post>;
pub type PostReducer = ResourceReducer<PostFamily>;

pub struct PostFamily;

impl ResourceFamily for PostFamily {
    type Item = Post;

    type Draft = PostDraft;

    const CATALOG: EventCatalog = POST_EVENTS;

    const ENDPOINTS: Endpoints = Endpoints {
        collection: "/api/posts",
        comments: "/api/comments/post",
    };

    fn project(event: &AppEvent) -> Option<&PostAction> {
        match event {
            AppEvent::Post(action) => Some(action),
            _ => None,
        }
    }

    fn wrap(action: PostAction) -> AppEvent {
        AppEvent::Post(action)
    }

    fn state(app: &AppState) -> &State {
        &app.posts
    }
}
