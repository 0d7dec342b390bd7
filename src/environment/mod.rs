pub mod config;
pub mod storage;
pub mod types;

mod native;
pub use native::*;

use self::config::Config;

/// Everything the effects need to talk to the outside world
#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub config: Config,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(config: Config) -> Result<Self, types::ApiError> {
        let model = Model::new(&config)?;
        Ok(Self { model, config })
    }
}
