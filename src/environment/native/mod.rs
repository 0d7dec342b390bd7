pub mod model;
pub use model::{Api, ApiRequest, Method, Model};

#[cfg(debug_assertions)]
pub use model::mock;
