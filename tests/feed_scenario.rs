use std::sync::Arc;

use fitfeed::components::resource::{Operation, ResourceAction};
use fitfeed::environment::mock::{make_comment, make_post, make_status};
use fitfeed::types::{ApiError, PostCollection, PostId};
use fitfeed::{AppEvent, Store};

#[test]
fn create_request_then_success() {
    let mut store = Store::default();
    let initial = store.state();
    assert!(initial.posts.posts.is_empty());
    assert!(!initial.posts.loading);
    assert_eq!(initial.posts.error, None);

    let state = store.dispatch(AppEvent::Post(ResourceAction::Request(Operation::Create)));
    assert!(state.posts.loading);
    assert_eq!(state.posts.error, None);
    assert!(state.posts.posts.is_empty());

    let run = make_post(1, "run");
    let state = store.dispatch(AppEvent::Post(ResourceAction::Created(run.clone())));
    assert!(!state.posts.loading);
    assert_eq!(state.posts.error, None);
    assert_eq!(state.posts.posts.iter().cloned().collect::<Vec<_>>(), vec![run.clone()]);
    assert_eq!(state.posts.post, Some(run));
}

#[test]
fn the_same_update_twice_is_the_same_as_once() {
    let mut store = Store::default();
    store.dispatch(AppEvent::Status(ResourceAction::Loaded(PostCollection {
        items: vec![make_status(1, "a"), make_status(2, "old")],
        comments: Vec::new(),
    })));
    let update = AppEvent::Status(ResourceAction::Updated(make_status(2, "new")));
    let once = store.dispatch(update.clone());
    let twice = store.dispatch(update);
    assert_eq!(*once, *twice);
    assert!(Arc::ptr_eq(&once, &twice));
    let captions: Vec<_> = twice.statuses.posts.iter().map(|s| s.caption.as_str()).collect();
    assert_eq!(captions, vec!["a", "new"]);
}

#[test]
fn a_failure_is_cleared_by_the_next_request() {
    let mut store = Store::default();
    store.dispatch(AppEvent::Post(ResourceAction::Created(make_post(2, "swim"))));
    let state = store.dispatch(AppEvent::Post(ResourceAction::Failed(
        Operation::Delete,
        ApiError::with_status("Not allowed", 403),
    )));
    assert_eq!(state.posts.error_message(), Some("Not allowed"));
    assert_eq!(state.posts.posts[0].id, PostId(2));

    let state = store.dispatch(AppEvent::Post(ResourceAction::Request(Operation::ReadAll)));
    assert_eq!(state.posts.error, None);
    assert!(state.posts.loading);
}

#[test]
fn wire_events_drive_the_store() {
    let mut store = Store::default();
    for json in [
        r#"{"type":"CREATE_MEAL_PLAN_POST_REQUEST"}"#,
        r#"{"type":"CREATE_MEAL_PLAN_POST_SUCCESS","payload":{"id":3,"caption":"oats","description":"with honey","user":{"id":1,"firstName":"Jane","lastName":"Doe"}}}"#,
        r#"{"type":"SEARCH_USER_SUCCESS","payload":[]}"#,
    ] {
        store.dispatch(AppEvent::from_json(json).unwrap());
    }
    let state = store.state();
    assert!(!state.meal_plans.loading);
    assert_eq!(state.meal_plans.posts[0].description, "with honey");
    assert!(state.posts.posts.is_empty());
}

#[test]
fn comment_failures_do_not_touch_a_running_request() {
    let mut store = Store::default();
    let comment = make_comment(1, "nice");
    store.dispatch(AppEvent::Post(ResourceAction::CommentCreated(comment)));
    let request = AppEvent::from_json(r#"{"type":"GET_ALL_POST_REQUEST"}"#).unwrap();
    let before = store.dispatch(request);
    assert!(before.posts.loading);

    let failure =
        AppEvent::from_json(r#"{"type":"CREATE_COMMENT_FAILURE","payload":"boom"}"#).unwrap();
    let after = store.dispatch(failure);
    assert!(Arc::ptr_eq(&before, &after));
    assert!(after.posts.loading);
    assert_eq!(after.posts.error, None);
}
