use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::components::auth::AuthAction;
use crate::components::meal_plan::MealPlanFamily;
use crate::components::post::PostFamily;
use crate::components::resource::{Operation, Phase, ResourceAction, ResourceFamily};
use crate::components::status::StatusFamily;
use crate::environment::types::{ApiError, MealPlanPost, Post, StatusPost};

/// Everything that can be dispatched to the store
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Auth(AuthAction),
    Post(ResourceAction<Post>),
    MealPlan(ResourceAction<MealPlanPost>),
    Status(ResourceAction<StatusPost>),
    /// A kind no reducer knows. Kept so the caller can log it.
    Unknown(String),
}

impl AppEvent {
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            AppEvent::Auth(action) => Some(action.kind()),
            AppEvent::Post(action) => action.kind(&PostFamily::CATALOG),
            AppEvent::MealPlan(action) => action.kind(&MealPlanFamily::CATALOG),
            AppEvent::Status(action) => action.kind(&StatusFamily::CATALOG),
            AppEvent::Unknown(_) => None,
        }
    }

    /// Parse a `{"type": ..., "payload": ...}` event
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let raw: RawEvent = serde_json::from_str(json)?;
        Self::decode(&raw)
    }

    /// Check the payload of a loosely typed event against its kind.
    /// Kinds nobody knows become `Unknown`, a known kind with a broken
    /// payload is an error.
    pub fn decode(raw: &RawEvent) -> Result<Self, DecodeError> {
        if let Some(action) = AuthAction::decode(raw)? {
            return Ok(AppEvent::Auth(action));
        }
        if let Some(event) = decode_resource::<PostFamily>(raw)? {
            return Ok(event);
        }
        if let Some(event) = decode_resource::<MealPlanFamily>(raw)? {
            return Ok(event);
        }
        if let Some(event) = decode_resource::<StatusFamily>(raw)? {
            return Ok(event);
        }
        log::debug!("Unknown event kind {}", raw.kind);
        Ok(AppEvent::Unknown(raw.kind.clone()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed event: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid payload for {kind}: {source}")]
    Payload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn payload<T: DeserializeOwned>(raw: &RawEvent) -> Result<T, DecodeError> {
    serde_json::from_value(raw.payload.clone()).map_err(|source| DecodeError::Payload {
        kind: raw.kind.clone(),
        source,
    })
}

/// Failures carry whatever the effect layer produced. A bare string is
/// taken as the message.
pub(crate) fn error_payload(raw: &RawEvent) -> Result<ApiError, DecodeError> {
    match &raw.payload {
        Value::String(message) => Ok(ApiError::new(message.clone())),
        _ => payload(raw),
    }
}

fn decode_resource<F: ResourceFamily>(raw: &RawEvent) -> Result<Option<AppEvent>, DecodeError> {
    let Some((operation, phase)) = F::CATALOG.lookup(&raw.kind) else {
        return Ok(None);
    };
    let action = match (operation, phase) {
        (_, Phase::Request) => ResourceAction::Request(operation),
        (_, Phase::Failure) => ResourceAction::Failed(operation, error_payload(raw)?),
        (Operation::Create, Phase::Success) => ResourceAction::Created(payload(raw)?),
        (Operation::Update, Phase::Success) => ResourceAction::Updated(payload(raw)?),
        (Operation::Like, Phase::Success) => ResourceAction::Liked(payload(raw)?),
        (Operation::ReadAll, Phase::Success) => ResourceAction::Loaded(payload(raw)?),
        (Operation::Delete, Phase::Success) => ResourceAction::Deleted(raw.payload.clone()),
        (Operation::CreateComment, Phase::Success) => {
            ResourceAction::CommentCreated(payload(raw)?)
        }
    };
    Ok(Some(F::wrap(action)))
}
