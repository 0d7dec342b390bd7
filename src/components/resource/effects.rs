//! The server calls of a content family. A REQUEST goes out first when
//! the family has one for the operation. Every call then ends in exactly
//! one SUCCESS or FAILURE event, except a failed comment: comments have
//! no FAILURE kind, so that error is only logged.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::environment::model::ResultExt;
use crate::environment::storage::Dispatcher;
use crate::environment::types::{ApiError, Comment, CommentDraft, PostCollection, PostId};
use crate::environment::{Api, ApiRequest};

use super::{Operation, ResourceAction, ResourceFamily};

pub async fn create<F: ResourceFamily, A: Api + ?Sized>(
    api: &A,
    dispatcher: &Dispatcher,
    draft: &F::Draft,
) {
    let request = ApiRequest::post(F::ENDPOINTS.collection, draft);
    perform::<F, A, F::Item>(api, dispatcher, Operation::Create, request, ResourceAction::Created)
        .await
}

pub async fn read_all<F: ResourceFamily, A: Api + ?Sized>(api: &A, dispatcher: &Dispatcher) {
    let request = Ok(ApiRequest::get(F::ENDPOINTS.collection));
    perform::<F, A, PostCollection<F::Item>>(
        api,
        dispatcher,
        Operation::ReadAll,
        request,
        ResourceAction::Loaded,
    )
    .await
}

pub async fn like<F: ResourceFamily, A: Api + ?Sized>(
    api: &A,
    dispatcher: &Dispatcher,
    id: PostId,
) {
    let request = ApiRequest::put(F::ENDPOINTS.like(id), None::<&()>);
    perform::<F, A, F::Item>(api, dispatcher, Operation::Like, request, ResourceAction::Liked).await
}

/// The server's answer is passed through as is, the list is not touched
pub async fn delete<F: ResourceFamily, A: Api + ?Sized>(
    api: &A,
    dispatcher: &Dispatcher,
    id: PostId,
) {
    let request = Ok(ApiRequest::delete(F::ENDPOINTS.item(id)));
    perform::<F, A, Value>(api, dispatcher, Operation::Delete, request, ResourceAction::Deleted)
        .await
}

pub async fn update<F: ResourceFamily, A: Api + ?Sized>(
    api: &A,
    dispatcher: &Dispatcher,
    id: PostId,
    draft: &F::Draft,
) {
    let request = ApiRequest::put(F::ENDPOINTS.item(id), Some(draft));
    perform::<F, A, F::Item>(api, dispatcher, Operation::Update, request, ResourceAction::Updated)
        .await
}

pub async fn create_comment<F: ResourceFamily, A: Api + ?Sized>(
    api: &A,
    dispatcher: &Dispatcher,
    id: PostId,
    draft: &CommentDraft,
) {
    let request = ApiRequest::post(F::ENDPOINTS.comment(id), draft);
    perform::<F, A, Comment>(
        api,
        dispatcher,
        Operation::CreateComment,
        request,
        ResourceAction::CommentCreated,
    )
    .await
}

async fn perform<F, A, T>(
    api: &A,
    dispatcher: &Dispatcher,
    operation: Operation,
    request: Result<ApiRequest, ApiError>,
    success: impl FnOnce(T) -> ResourceAction<F::Item>,
) where
    F: ResourceFamily,
    A: Api + ?Sized,
    T: DeserializeOwned,
{
    if F::CATALOG.kinds(operation).request.is_some() {
        dispatcher.send(F::wrap(ResourceAction::Request(operation)));
    }
    let result = match request {
        Ok(request) => {
            let call = request.call();
            api.send(request)
                .await
                .and_then(|value| serde_json::from_value::<T>(value).api_error(&call))
        }
        Err(e) => Err(e),
    };
    let action = match result {
        Ok(payload) => success(payload),
        Err(error) if F::CATALOG.kinds(operation).failure.is_none() => {
            log::error!(
                "{} {operation} failed, nothing to report: {error}",
                F::CATALOG.resource
            );
            return;
        }
        Err(error) => {
            log::warn!("{} {operation} failed: {error}", F::CATALOG.resource);
            ResourceAction::Failed(operation, error)
        }
    };
    dispatcher.send(F::wrap(action));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::components::meal_plan::MealPlanFamily;
    use crate::components::post::PostFamily;
    use crate::components::status::StatusFamily;
    use crate::environment::mock::MockApi;
    use crate::environment::storage::Store;
    use crate::environment::types::{MealPlanDraft, PostDraft};
    use crate::environment::Method;
    use crate::event::AppEvent;
    use std::sync::Arc;

    fn user() -> Value {
        json!({ "id": 1, "firstName": "Jane", "lastName": "Doe" })
    }

    #[tokio::test]
    async fn create_sends_request_then_success() {
        let api = MockApi::default();
        api.respond(Ok(json!({ "id": 7, "caption": "run", "user": user() })));
        let mut store = Store::default();
        let dispatcher = store.dispatcher();
        let draft = PostDraft {
            caption: "run".to_string(),
            ..Default::default()
        };
        create::<PostFamily, _>(&api, &dispatcher, &draft).await;

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/api/posts");
        assert_eq!(requests[0].body.as_ref().unwrap()["caption"], "run");

        assert_eq!(store.drain(), 2);
        let state = store.state();
        assert_eq!(state.posts.posts[0].id, PostId(7));
        assert!(!state.posts.loading);
    }

    #[tokio::test]
    async fn failures_end_in_a_failure_event() {
        let api = MockApi::default();
        api.respond(Err(ApiError::with_status("Forbidden", 403)));
        let mut store = Store::default();
        delete::<MealPlanFamily, _>(&api, &store.dispatcher(), PostId(3)).await;

        assert_eq!(api.requests()[0].call(), "DELETE /api/mealplans/3");
        store.drain();
        let state = store.state();
        assert!(!state.meal_plans.loading);
        assert_eq!(
            state.meal_plans.error,
            Some(ApiError::with_status("Forbidden", 403))
        );
    }

    #[tokio::test]
    async fn malformed_answers_are_failures() {
        let api = MockApi::default();
        api.respond(Ok(json!({ "unexpected": true })));
        let mut store = Store::default();
        update::<MealPlanFamily, _>(
            &api,
            &store.dispatcher(),
            PostId(2),
            &MealPlanDraft::default(),
        )
        .await;
        store.drain();
        let state = store.state();
        assert!(state.meal_plans.error.is_some());
        assert_eq!(api.requests()[0].method, Method::Put);
        assert_eq!(api.requests()[0].path, "/api/mealplans/2");
    }

    #[tokio::test]
    async fn like_has_no_body() {
        let api = MockApi::default();
        api.respond(Ok(json!({ "id": 4, "user": user(), "liked": [user()] })));
        let store = Store::default();
        like::<StatusFamily, _>(&api, &store.dispatcher(), PostId(4)).await;
        let requests = api.requests();
        let request = &requests[0];
        assert_eq!(request.call(), "PUT /api/status/like/4");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn comments_skip_the_request_event() {
        let api = MockApi::default();
        api.respond(Ok(json!({ "id": 9, "content": "nice", "user": user() })));
        let mut store = Store::default();
        let draft = CommentDraft {
            content: "nice".to_string(),
        };
        create_comment::<PostFamily, _>(&api, &store.dispatcher(), PostId(1), &draft).await;
        assert_eq!(api.requests()[0].path, "/api/comments/post/1");

        assert_eq!(store.drain(), 1);
        let state = store.state();
        assert!(!state.posts.loading);
        assert_eq!(
            state.posts.new_comment.as_ref().map(|c| c.content.as_str()),
            Some("nice")
        );
    }

    #[tokio::test]
    async fn failed_comments_leave_the_state_alone() {
        let api = MockApi::default();
        api.respond(Ok(json!([{ "id": 1, "user": user() }])));
        api.respond(Err(ApiError::with_status("Server down", 500)));
        let mut store = Store::default();
        let dispatcher = store.dispatcher();
        read_all::<PostFamily, _>(&api, &dispatcher).await;
        store.drain();
        let in_flight = store.dispatch(AppEvent::Post(ResourceAction::Request(Operation::Update)));

        let draft = CommentDraft {
            content: "nice".to_string(),
        };
        create_comment::<PostFamily, _>(&api, &dispatcher, PostId(1), &draft).await;
        assert_eq!(api.requests()[1].path, "/api/comments/post/1");
        assert_eq!(store.drain(), 0);
        let state = store.state();
        assert!(Arc::ptr_eq(&in_flight, &state));
        assert!(state.posts.loading);
        assert_eq!(state.posts.error, None);
    }

    #[tokio::test]
    async fn read_all_accepts_both_shapes() {
        let api = MockApi::default();
        api.respond(Ok(json!([{ "id": 1, "user": user() }])));
        api.respond(Ok(json!({
            "posts": [{ "id": 2, "user": user() }],
            "comments": [{ "id": 5, "content": "go", "user": user() }]
        })));
        let mut store = Store::default();
        let dispatcher = store.dispatcher();

        read_all::<PostFamily, _>(&api, &dispatcher).await;
        store.drain();
        assert_eq!(store.state().posts.posts.len(), 1);
        assert!(store.state().posts.comments.is_empty());

        read_all::<PostFamily, _>(&api, &dispatcher).await;
        store.drain();
        let state = store.state();
        assert_eq!(state.posts.posts[0].id, PostId(2));
        assert_eq!(state.posts.comments.len(), 1);
    }
}
