use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// Server Types

/// Missing and `null` both end up as the default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
    /// Profile image url, empty if the user never uploaded one
    #[serde(default, deserialize_with = "null_as_default")]
    pub pro_image: String,
}

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub user: User,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The parts every kind of feed entry shares, regardless of family
pub trait FeedItem {
    fn id(&self) -> PostId;
    fn user(&self) -> &User;
    fn caption(&self) -> &str;
    fn liked(&self) -> &[User];
    fn comments(&self) -> &[Comment];
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

macro_rules! feed_item {
    ($name:ty) => {
        impl FeedItem for $name {
            fn id(&self) -> PostId {
                self.id
            }
            fn user(&self) -> &User {
                &self.user
            }
            fn caption(&self) -> &str {
                &self.caption
            }
            fn liked(&self) -> &[User] {
                &self.liked
            }
            fn comments(&self) -> &[Comment] {
                &self.comments
            }
            fn created_at(&self) -> Option<DateTime<Utc>> {
                self.created_at
            }
        }
    };
}

/// A generic post: a caption with an optional picture or video
#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    pub user: User,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked: Vec<User>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

feed_item!(Post);

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanPost {
    pub id: PostId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub user: User,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked: Vec<User>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

feed_item!(MealPlanPost);

/// A workout status update
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPost {
    pub id: PostId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance_run: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pushups_completed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight_lifted: f64,
    pub user: User,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked: Vec<User>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

feed_item!(StatusPost);

/// The response of a "get all" call. The server either sends a plain list
/// or an object with the items and the comments of the whole collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostCollection<P> {
    pub items: Vec<P>,
    pub comments: Vec<Comment>,
}

impl<P> Default for PostCollection<P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            comments: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionWire<P> {
    List(Vec<P>),
    Wrapped {
        #[serde(alias = "posts")]
        items: Vec<P>,
        #[serde(default)]
        comments: Vec<Comment>,
    },
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for PostCollection<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match CollectionWire::deserialize(deserializer)? {
            CollectionWire::List(items) => PostCollection {
                items,
                comments: Vec::new(),
            },
            CollectionWire::Wrapped { items, comments } => PostCollection { items, comments },
        })
    }
}

/// Sent back by the sign up and sign in calls
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "jwt")]
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Whatever went wrong during a call. The reducers store it verbatim,
/// they never look inside.
#[derive(Error, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

// Request bodies

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub caption: String,
    pub image: Option<String>,
    pub video: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanDraft {
    pub caption: String,
    pub image: Option<String>,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDraft {
    pub caption: String,
    pub distance_run: f64,
    pub pushups_completed: u32,
    pub weight_lifted: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
