use crate::environment::types::{ApiError, Comment, PostCollection};

use super::catalog::{EventCatalog, Operation, Phase};

/// The events of one resource family. Every variant has an explicit
/// payload type, so nothing loosely typed reaches the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceAction<P> {
    Request(Operation),
    Created(P),
    Updated(P),
    /// The server's confirmation of a delete, passed through untouched
    Deleted(serde_json::Value),
    Loaded(PostCollection<P>),
    Liked(P),
    CommentCreated(Comment),
    Failed(Operation, ApiError),
}

impl<P> ResourceAction<P> {
    pub fn operation(&self) -> Operation {
        match self {
            ResourceAction::Request(operation) | ResourceAction::Failed(operation, _) => *operation,
            ResourceAction::Created(_) => Operation::Create,
            ResourceAction::Updated(_) => Operation::Update,
            ResourceAction::Deleted(_) => Operation::Delete,
            ResourceAction::Loaded(_) => Operation::ReadAll,
            ResourceAction::Liked(_) => Operation::Like,
            ResourceAction::CommentCreated(_) => Operation::CreateComment,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ResourceAction::Request(_) => Phase::Request,
            ResourceAction::Failed(..) => Phase::Failure,
            _ => Phase::Success,
        }
    }

    /// The kind name of this event in the given family, if the family knows it
    pub fn kind(&self, catalog: &EventCatalog) -> Option<&'static str> {
        catalog.kind(self.operation(), self.phase())
    }
}
