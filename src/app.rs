use std::sync::Arc;

use crate::components::meal_plan::MealPlanFamily;
use crate::components::post::PostFamily;
use crate::components::resource::effects;
use crate::components::status::StatusFamily;
use crate::environment::config::Config;
use crate::environment::storage::{AppState, Dispatcher, Store};
use crate::environment::types::ApiError;
use crate::environment::Environment;

/// Safe to call more than once, later calls are ignored
pub fn init_logging() {
    use env_logger::Env;
    use std::io::Write;
    let result = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init();
    if result.is_err() {
        log::trace!("Logger already initialized");
    }
}

/// One signed in (or anonymous) client: the connection plus the store
/// all of its effects report to.
#[derive(Debug)]
pub struct Session {
    pub environment: Environment,
    pub store: Store,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let environment = Environment::new(config)?;
        log::info!("Using {}", environment.model.url);
        Ok(Self {
            environment,
            store: Store::default(),
        })
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.store.dispatcher()
    }

    pub fn state(&self) -> Arc<AppState> {
        self.store.state()
    }

    /// Load all three feeds at once and fold the results
    pub async fn refresh(&mut self) -> Arc<AppState> {
        let dispatcher = self.store.dispatcher();
        let api = &self.environment.model;
        futures_util::join!(
            effects::read_all::<PostFamily, _>(api, &dispatcher),
            effects::read_all::<MealPlanFamily, _>(api, &dispatcher),
            effects::read_all::<StatusFamily, _>(api, &dispatcher),
        );
        let count = self.store.drain();
        log::debug!("refresh folded {count} events");
        self.store.state()
    }
}

/// Set up logging and a session configured from the environment
pub fn run() -> Result<Session, ApiError> {
    init_logging();
    Session::new(Config::load())
}
