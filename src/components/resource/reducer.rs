use im::Vector;

use crate::environment::types::FeedItem;

use super::{ResourceAction, ResourceFamily, ResourceState};

/// Fold one event of family `F` into its state.
///
/// Events that have no kind in the family's catalog leave the state as it
/// was. Known gaps: a delete does not remove the item from `posts` and a
/// new comment is not appended to `comments`, the caller reloads for that.
/// `loading` is a boolean, not a counter, so with overlapping requests on
/// one family the first SUCCESS or FAILURE clears it early.
pub fn reduce<F: ResourceFamily>(
    state: ResourceState<F::Item>,
    action: &ResourceAction<F::Item>,
) -> ResourceState<F::Item> {
    let Some(kind) = action.kind(&F::CATALOG) else {
        log::trace!("{}: ignoring {action:?}", F::CATALOG.resource);
        return state;
    };
    log::trace!("{kind}");

    let mut next = state;
    match action {
        ResourceAction::Request(_) => {
            next.loading = true;
            next.error = None;
            return next;
        }
        ResourceAction::Failed(_, error) => {
            next.loading = false;
            next.error = Some(error.clone());
            return next;
        }
        ResourceAction::Created(post) => {
            next.post = Some(post.clone());
            next.posts.push_front(post.clone());
        }
        ResourceAction::Updated(post) => {
            next.post = Some(post.clone());
            replace_by_id(&mut next.posts, post);
        }
        ResourceAction::Deleted(message) => {
            next.message = Some(message.clone());
        }
        ResourceAction::Loaded(collection) => {
            next.posts = collection.items.iter().cloned().collect();
            next.comments = collection.comments.iter().cloned().collect();
        }
        ResourceAction::Liked(post) => {
            next.like = Some(post.clone());
            replace_by_id(&mut next.posts, post);
        }
        ResourceAction::CommentCreated(comment) => {
            next.new_comment = Some(comment.clone());
        }
    }
    next.loading = false;
    next.error = None;
    next
}

/// Replace the first entry with the same id. Unknown ids are dropped on
/// the floor, the list is never extended here.
fn replace_by_id<P: FeedItem + Clone>(posts: &mut Vector<P>, post: &P) {
    let id = post.id();
    if let Some(index) = posts.iter().position(|p| p.id() == id) {
        posts.set(index, post.clone());
    } else {
        log::debug!("No entry for {id}, keeping the list as is");
    }
}
