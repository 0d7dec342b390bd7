mod app;
pub mod components;
pub mod environment;
pub mod event;
mod helper;
pub mod view_model;

pub use app::{init_logging, run, Session};
pub use environment::config::Config;
pub use environment::storage::{AppState, Dispatcher, Store};
pub use environment::types;
pub use event::{AppEvent, DecodeError, RawEvent};

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}
