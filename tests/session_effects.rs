use std::cell::RefCell;
use std::rc::Rc;

use fitfeed::components::auth::{effects as auth, AuthState, Gender, RegisterForm};
use fitfeed::components::post::PostFamily;
use fitfeed::components::resource::effects;
use fitfeed::environment::mock::MockApi;
use fitfeed::environment::Method;
use fitfeed::types::{ApiError, Credentials, PostId, UserId};
use fitfeed::view_model::PostViewModel;
use fitfeed::Store;
use serde_json::json;

fn user() -> serde_json::Value {
    json!({ "id": 1, "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com" })
}

/// Loading flags as the subscribers saw them
fn loading_transitions(store: &mut Store) -> Vec<&'static str> {
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let cloned = kinds.clone();
    store.subscribe(move |state| {
        cloned
            .borrow_mut()
            .push(if state.is_loading() { "loading" } else { "idle" })
    });
    store.drain();
    let seen = kinds.borrow().clone();
    seen
}

#[tokio::test]
async fn login_stores_the_token_and_loads_the_profile() {
    let api = MockApi::default();
    api.respond(Ok(json!({ "jwt": "token-1", "message": "Login Success" })))
        .respond(Ok(user()));
    let mut store = Store::default();
    let credentials = Credentials {
        email: "jane@example.com".to_string(),
        password: "secret1".to_string(),
    };
    auth::login(&api, &store.dispatcher(), &credentials).await;

    let calls: Vec<_> = api.requests().iter().map(|r| r.call()).collect();
    assert_eq!(calls, vec!["POST /auth/signin", "GET /api/users/profile"]);
    assert_eq!(api.token().as_deref(), Some("token-1"));

    assert_eq!(store.drain(), 4);
    let state = store.state();
    assert!(state.auth.is_logged_in());
    assert_eq!(state.current_user().map(|u| u.id), Some(UserId(1)));
    assert!(!state.auth.loading);
}

#[tokio::test]
async fn invalid_registration_never_reaches_the_server() {
    let api = MockApi::default();
    let mut store = Store::default();
    let form = RegisterForm {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "not-an-email".to_string(),
        password: "secret1".to_string(),
        gender: Some(Gender::Female),
        pro_image: String::new(),
    };
    auth::register(&api, &store.dispatcher(), &form).await;
    assert!(api.requests().is_empty());
    assert_eq!(store.drain(), 1);
    let state = store.state();
    assert_eq!(
        state.auth.error.as_ref().map(|e| e.message.as_str()),
        Some("Invalid email")
    );
}

#[tokio::test]
async fn rejected_login_keeps_the_user_signed_out() {
    let api = MockApi::default();
    api.respond(Err(ApiError::with_status("Invalid password", 401)));
    let mut store = Store::default();
    auth::login(&api, &store.dispatcher(), &Credentials::default()).await;
    assert_eq!(api.requests().len(), 1);
    assert_eq!(api.token(), None);

    store.drain();
    let state = store.state();
    assert!(!state.auth.is_logged_in());
    assert_eq!(state.auth.error, Some(ApiError::with_status("Invalid password", 401)));
}

#[tokio::test]
async fn logout_resets_everything_auth() {
    let api = MockApi::default();
    api.respond(Ok(json!({ "token": "t" }))).respond(Ok(user()));
    let mut store = Store::default();
    let dispatcher = store.dispatcher();
    auth::login(&api, &dispatcher, &Credentials::default()).await;
    auth::logout(&api, &dispatcher);
    store.drain();
    assert_eq!(api.token(), None);
    assert_eq!(store.state().auth, AuthState::default());
}

#[tokio::test]
async fn effects_report_loading_then_idle() {
    let api = MockApi::default();
    api.respond(Ok(json!([{ "id": 1, "caption": "run", "user": user() }])));
    let mut store = Store::default();
    effects::read_all::<PostFamily, _>(&api, &store.dispatcher()).await;
    assert_eq!(loading_transitions(&mut store), vec!["loading", "idle"]);
}

#[tokio::test]
async fn liked_posts_render_for_the_viewer() {
    let api = MockApi::default();
    api.respond(Ok(json!([{ "id": 1, "caption": "run", "user": user() }])))
        .respond(Ok(json!({ "id": 1, "caption": "run", "user": user(), "liked": [{ "id": 2, "firstName": "Max", "lastName": "Mu" }] })));
    let mut store = Store::default();
    let dispatcher = store.dispatcher();
    effects::read_all::<PostFamily, _>(&api, &dispatcher).await;
    effects::like::<PostFamily, _>(&api, &dispatcher, PostId(1)).await;
    assert_eq!(api.requests()[1].method, Method::Put);

    store.drain();
    let state = store.state();
    let viewer = PostViewModel::new(&state.posts.posts[0], Some(UserId(2)));
    assert!(viewer.is_liked);
    assert!(!viewer.can_delete);
    assert_eq!(viewer.like_count, 1);
    assert!(state.posts.like.is_some());
}
