use std::sync::Arc;

use flume::{Receiver, Sender};

use crate::components::auth::{AuthReducer, AuthState};
use crate::components::meal_plan::{self, MealPlanReducer};
use crate::components::post::{self, PostReducer};
use crate::components::resource::{ResourceFamily, ResourceState};
use crate::components::status::{self, StatusReducer};
use crate::components::Reducer;
use crate::environment::types::User;
use crate::event::AppEvent;

/// The whole session state. One instance per family, nothing else holds
/// any of this.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub posts: post::State,
    pub meal_plans: meal_plan::State,
    pub statuses: status::State,
}

impl AppState {
    /// Every reducer sees every event and ignores what isn't theirs
    pub fn reduce(self, event: &AppEvent) -> Self {
        Self {
            auth: AuthReducer::reduce(self.auth, event),
            posts: PostReducer::reduce(self.posts, event),
            meal_plans: MealPlanReducer::reduce(self.meal_plans, event),
            statuses: StatusReducer::reduce(self.statuses, event),
        }
    }

    pub fn resource<F: ResourceFamily>(&self) -> &ResourceState<F::Item> {
        F::state(self)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.auth.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.auth.loading || self.posts.loading || self.meal_plans.loading || self.statuses.loading
    }
}

/// A handle the effects use to hand events to the store. Cheap to clone
/// and fine to move into spawned tasks.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    sender: Sender<AppEvent>,
}

impl Dispatcher {
    pub fn send(&self, event: AppEvent) {
        if let Err(e) = self.sender.send(event) {
            log::error!("Store is gone, dropping {:?}", e.0);
        }
    }
}

type Subscriber = Box<dyn Fn(&Arc<AppState>)>;

/// Holds the current snapshot and replaces it wholesale on every change.
/// Snapshots that were handed out are never touched again.
pub struct Store {
    state: Arc<AppState>,
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("queued", &self.receiver.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            state: Arc::new(state),
            sender,
            receiver,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            sender: self.sender.clone(),
        }
    }

    /// Called with the new snapshot after every change
    pub fn subscribe(&mut self, subscriber: impl Fn(&Arc<AppState>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Arc<AppState> {
        log::debug!("dispatch {}", event.kind().unwrap_or("UNKNOWN"));
        let next = AppState::clone(&self.state).reduce(&event);
        if next == *self.state {
            return self.state.clone();
        }
        self.state = Arc::new(next);
        for subscriber in self.subscribers.iter() {
            subscriber(&self.state);
        }
        self.state.clone()
    }

    /// Fold everything the effects queued so far, in arrival order.
    /// Returns the number of events.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.dispatch(event);
            count += 1;
        }
        count
    }

    /// Wait for the next queued event and fold it
    pub async fn next(&mut self) -> Arc<AppState> {
        // we hold a sender ourselves, so this never disconnects
        if let Ok(event) = self.receiver.recv_async().await {
            self.dispatch(event);
        }
        self.state.clone()
    }
}
