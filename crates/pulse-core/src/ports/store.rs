use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Profile};
use crate::error::StoreError;

/// Document store holding Post records, addressed by id.
///
/// The service works read-modify-write against this port: load a post,
/// mutate it in memory, `save` it back. There is no isolation against
/// concurrent writers - two racing engagement calls on the same post can
/// both read the same prior state and the slower write wins. Adapters may
/// strengthen this with store-level atomic array updates, but callers must
/// not assume they do.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest first by creation date.
    ///
    /// An empty store yields an empty vec; a store failure is an error,
    /// never an empty result.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Find a post by id. `Ok(None)` means the id is genuinely absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Insert a newly created post.
    async fn insert(&self, post: Post) -> Result<Post, StoreError>;

    /// Persist a mutated post, replacing the stored document.
    async fn save(&self, post: Post) -> Result<Post, StoreError>;

    /// Delete a post by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Profile lookup collaborator, read-only from this service's perspective.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Find the profile owned by `user`.
    async fn find_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError>;
}
