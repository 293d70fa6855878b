//! Post engagement service - the lifecycle of a Post and its embedded
//! likes and comments.
//!
//! Every operation is stateless between calls: load zero or one documents
//! from the store, apply a pure in-memory transformation, persist the
//! result. Failures are terminal for the request; nothing is retried or
//! partially applied.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::engagement::{push_front, remove_first_where};
use crate::domain::{Comment, Like, Post, validate_text};
use crate::error::DomainError;
use crate::ports::{PostStore, ProfileStore};

/// The authenticated author of a post or comment, resolved from verified
/// token claims - never from the request body.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Post engagement service.
///
/// `profiles` is the legacy profile-lookup collaborator: when present it
/// is consulted on delete/like/unlike, but its result never gates the
/// operation. Wire it as `None` to skip the lookup entirely.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
    profiles: Option<Arc<dyn ProfileStore>>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            profiles: None,
        }
    }

    /// Enable the legacy profile lookup on delete/like/unlike.
    pub fn with_profile_lookup(mut self, profiles: Arc<dyn ProfileStore>) -> Self {
        self.profiles = Some(profiles);
        self
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.find_all().await?)
    }

    /// Fetch a single post.
    pub async fn get(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.load(post_id).await
    }

    /// Create a new post with empty engagement collections.
    pub async fn create(&self, author: Author, text: String) -> Result<Post, DomainError> {
        validate_text(&text)?;

        let post = Post::new(author.id, author.name, author.avatar, text);
        let saved = self.store.insert(post).await?;

        tracing::debug!(post_id = %saved.id, user = %saved.user, "post created");
        Ok(saved)
    }

    /// Delete a post. Only the owner may delete; the ownership check is a
    /// hard guard - an unauthorized attempt aborts before any mutation.
    pub async fn delete(&self, post_id: Uuid, requester: Uuid) -> Result<(), DomainError> {
        self.legacy_profile_lookup(requester).await?;

        let post = self.load(post_id).await?;
        if post.user != requester {
            return Err(DomainError::Unauthorized);
        }

        self.store.delete(post_id).await?;
        tracing::debug!(post_id = %post_id, user = %requester, "post deleted");
        Ok(())
    }

    /// Like a post. Fails with `Conflict` if `requester` already likes it.
    pub async fn like(&self, post_id: Uuid, requester: Uuid) -> Result<Post, DomainError> {
        self.legacy_profile_lookup(requester).await?;

        let mut post = self.load(post_id).await?;
        if post.liked_by(requester) {
            return Err(DomainError::Conflict(
                "User has already liked this post".into(),
            ));
        }

        push_front(&mut post.likes, Like { user: requester });
        Ok(self.store.save(post).await?)
    }

    /// Remove the requester's like. Fails with `Conflict` if absent.
    pub async fn unlike(&self, post_id: Uuid, requester: Uuid) -> Result<Post, DomainError> {
        self.legacy_profile_lookup(requester).await?;

        let mut post = self.load(post_id).await?;
        if remove_first_where(&mut post.likes, |like| like.user == requester).is_none() {
            return Err(DomainError::Conflict(
                "User has not liked this post".into(),
            ));
        }

        Ok(self.store.save(post).await?)
    }

    /// Append a comment to a post, newest first.
    pub async fn comment(
        &self,
        post_id: Uuid,
        author: Author,
        text: String,
    ) -> Result<Post, DomainError> {
        validate_text(&text)?;

        let mut post = self.load(post_id).await?;
        let comment = Comment::new(author.id, author.name, author.avatar, text);

        push_front(&mut post.comments, comment);
        Ok(self.store.save(post).await?)
    }

    /// Remove a comment by id. Other comments keep their ids and order.
    pub async fn uncomment(&self, post_id: Uuid, comment_id: Uuid) -> Result<Post, DomainError> {
        let mut post = self.load(post_id).await?;
        if remove_first_where(&mut post.comments, |c| c.id == comment_id).is_none() {
            return Err(DomainError::not_found("Comment", comment_id));
        }

        Ok(self.store.save(post).await?)
    }

    async fn load(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.store
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::not_found("Post", post_id))
    }

    /// Legacy collaborator call carried over from the previous system: the
    /// profile is fetched but its presence never gates the operation.
    async fn legacy_profile_lookup(&self, user: Uuid) -> Result<(), DomainError> {
        if let Some(profiles) = &self.profiles {
            if profiles.find_by_user(user).await?.is_none() {
                tracing::debug!(user = %user, "engagement by user without a profile");
            }
        }
        Ok(())
    }
}
