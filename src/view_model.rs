use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::environment::types::{Comment, CommentId, FeedItem, PostId, User, UserId};
use crate::helper::{display_name, format_datetime, format_number, handle};

#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct UserViewModel {
    pub id: UserId,
    pub display_name: String,
    pub handle: String,
    pub image: String,
    /// Shown in place of the picture when there is none
    pub avatar_initial: Option<char>,
}

impl PartialEq for UserViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UserViewModel {}

impl UserViewModel {
    pub fn new(user: &User) -> Self {
        Self {
            id: user.id,
            display_name: display_name(user),
            handle: handle(user),
            image: user.pro_image.clone(),
            avatar_initial: avatar_initial(user),
        }
    }
}

pub fn avatar_initial(user: &User) -> Option<char> {
    if !user.pro_image.trim().is_empty() {
        return None;
    }
    user.first_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
}

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommentViewModel {
    pub id: CommentId,
    pub user: UserViewModel,
    pub content: String,
    pub created_human: Option<String>,
}

impl CommentViewModel {
    pub fn new(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            user: UserViewModel::new(&comment.user),
            content: comment.content.clone(),
            created_human: comment
                .created_at
                .map(|created| format_datetime(&created, Utc::now()).0),
        }
    }
}

/// What a feed entry looks like to one particular viewer
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct PostViewModel {
    pub id: PostId,
    pub author: UserViewModel,
    pub caption: String,
    pub comments: Vec<CommentViewModel>,
    pub is_liked: bool,
    pub can_delete: bool,
    pub like_count: usize,
    pub likes: String,
    pub comment_count: usize,
    pub replies: String,
    pub created: Option<DateTime<Utc>>,
    pub created_human: Option<String>,
    pub created_full: Option<String>,
}

impl PartialEq for PostViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.is_liked == other.is_liked
            && self.like_count == other.like_count
            && self.comment_count == other.comment_count
            && self.caption == other.caption
    }
}

impl PostViewModel {
    pub fn new<P: FeedItem>(post: &P, viewer: Option<UserId>) -> Self {
        let (created_human, created_full) = match post.created_at() {
            Some(created) => {
                let (h, f) = format_datetime(&created, Utc::now());
                (Some(h), Some(f))
            }
            None => (None, None),
        };
        let like_count = post.liked().len();
        let comment_count = post.comments().len();
        Self {
            id: post.id(),
            author: UserViewModel::new(post.user()),
            caption: post.caption().to_string(),
            comments: post.comments().iter().map(CommentViewModel::new).collect(),
            is_liked: viewer.map(|v| is_liked_by(v, post)).unwrap_or_default(),
            can_delete: viewer.map(|v| can_delete(v, post)).unwrap_or_default(),
            like_count,
            likes: format_number(like_count as i64),
            comment_count,
            replies: format_number(comment_count as i64),
            created: post.created_at(),
            created_human,
            created_full,
        }
    }

    /// Title for the like button
    pub fn likes_title(&self) -> String {
        format!(
            "Likes{}",
            self.is_liked
                .then_some(": You liked this")
                .unwrap_or_default()
        )
    }
}

pub fn is_liked_by<P: FeedItem + ?Sized>(viewer: UserId, post: &P) -> bool {
    post.liked().iter().any(|user| user.id == viewer)
}

pub fn can_delete<P: FeedItem + ?Sized>(viewer: UserId, post: &P) -> bool {
    post.user().id == viewer
}
