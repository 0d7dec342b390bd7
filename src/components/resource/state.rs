use im::Vector;

use crate::environment::types::{ApiError, Comment};

/// The view state of one resource family.
///
/// The collections are persistent vectors: cloning a state is cheap and a
/// clone never observes changes made to the other copy.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceState<P: Clone> {
    /// The most recently created or updated item
    pub post: Option<P>,
    /// Newest first
    pub posts: Vector<P>,
    /// The item as returned by the last like
    pub like: Option<P>,
    pub comments: Vector<Comment>,
    pub new_comment: Option<Comment>,
    pub loading: bool,
    pub error: Option<ApiError>,
    /// Result of the last delete
    pub message: Option<serde_json::Value>,
}

impl<P: Clone> Default for ResourceState<P> {
    fn default() -> Self {
        Self {
            post: None,
            posts: Vector::new(),
            like: None,
            comments: Vector::new(),
            new_comment: None,
            loading: false,
            error: None,
            message: None,
        }
    }
}

impl<P: Clone> ResourceState<P> {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}
