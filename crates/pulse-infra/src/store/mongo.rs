//! MongoDB document store.
//!
//! Posts are stored as a single document per post with likes and comments
//! embedded, mirroring the domain shape. Ids are stored as UUID strings
//! and timestamps as BSON dates, so the mapping between the wire document
//! and the domain entity is explicit rather than relying on serde
//! defaults for `Uuid` and `chrono` types.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pulse_core::domain::{Comment, Like, Post, Profile};
use pulse_core::error::StoreError;
use pulse_core::ports::{PostStore, ProfileStore};

/// MongoDB connection configuration.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct LikeDocument {
    user: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct CommentDocument {
    #[serde(rename = "_id")]
    id: String,
    user: String,
    text: String,
    name: String,
    avatar: String,
    date: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id")]
    id: String,
    user: String,
    text: String,
    name: String,
    avatar: String,
    likes: Vec<LikeDocument>,
    comments: Vec<CommentDocument>,
    date: bson::DateTime,
}

impl From<&Post> for PostDocument {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            user: post.user.to_string(),
            text: post.text.clone(),
            name: post.name.clone(),
            avatar: post.avatar.clone(),
            likes: post
                .likes
                .iter()
                .map(|like| LikeDocument {
                    user: like.user.to_string(),
                })
                .collect(),
            comments: post
                .comments
                .iter()
                .map(|c| CommentDocument {
                    id: c.id.to_string(),
                    user: c.user.to_string(),
                    text: c.text.clone(),
                    name: c.name.clone(),
                    avatar: c.avatar.clone(),
                    date: bson::DateTime::from_chrono(c.date),
                })
                .collect(),
            date: bson::DateTime::from_chrono(post.date),
        }
    }
}

impl TryFrom<PostDocument> for Post {
    type Error = StoreError;

    fn try_from(doc: PostDocument) -> Result<Self, StoreError> {
        let likes = doc
            .likes
            .into_iter()
            .map(|like| Ok(Like { user: parse_uuid(&like.user)? }))
            .collect::<Result<Vec<_>, StoreError>>()?;

        let comments = doc
            .comments
            .into_iter()
            .map(|c| {
                Ok(Comment {
                    id: parse_uuid(&c.id)?,
                    user: parse_uuid(&c.user)?,
                    text: c.text,
                    name: c.name,
                    avatar: c.avatar,
                    date: c.date.to_chrono(),
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Post {
            id: parse_uuid(&doc.id)?,
            user: parse_uuid(&doc.user)?,
            text: doc.text,
            name: doc.name,
            avatar: doc.avatar,
            likes,
            comments,
            date: doc.date.to_chrono(),
        })
    }
}

fn parse_uuid(s: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(s).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn query_err(err: mongodb::error::Error) -> StoreError {
    StoreError::Query(err.to_string())
}

/// Post store over a MongoDB collection.
pub struct MongoPostStore {
    posts: Collection<PostDocument>,
}

impl MongoPostStore {
    /// Connect to MongoDB and bind the `posts` collection.
    pub async fn connect(config: &MongoConfig) -> Result<(Self, Database), StoreError> {
        let client = Client::with_uri_str(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let db = client.database(&config.database);

        tracing::info!(database = %config.database, "connected to MongoDB");

        Ok((
            Self {
                posts: db.collection("posts"),
            },
            db,
        ))
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let docs: Vec<PostDocument> = self
            .posts
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await
            .map_err(query_err)?
            .try_collect()
            .await
            .map_err(query_err)?;

        docs.into_iter().map(Post::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let found = self
            .posts
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;

        found.map(Post::try_from).transpose()
    }

    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let doc = PostDocument::from(&post);
        self.posts.insert_one(&doc).await.map_err(query_err)?;
        Ok(post)
    }

    async fn save(&self, post: Post) -> Result<Post, StoreError> {
        let doc = PostDocument::from(&post);
        self.posts
            .replace_one(doc! { "_id": doc.id.clone() }, &doc)
            .await
            .map_err(query_err)?;
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.posts
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(query_err)?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProfileDocument {
    #[serde(rename = "_id")]
    id: String,
    user: String,
    handle: String,
    created_at: bson::DateTime,
}

/// Profile store over a MongoDB collection, read-only here.
pub struct MongoProfileStore {
    profiles: Collection<ProfileDocument>,
}

impl MongoProfileStore {
    pub fn new(db: &Database) -> Self {
        Self {
            profiles: db.collection("profiles"),
        }
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn find_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError> {
        let found = self
            .profiles
            .find_one(doc! { "user": user.to_string() })
            .await
            .map_err(query_err)?;

        found
            .map(|doc| {
                Ok(Profile {
                    id: parse_uuid(&doc.id)?,
                    user: parse_uuid(&doc.user)?,
                    handle: doc.handle,
                    created_at: doc.created_at.to_chrono(),
                })
            })
            .transpose()
    }
}
