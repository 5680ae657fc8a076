//! Storage adapter layer
//!
//! The resolver layer talks to storage only through the [`DataStore`] trait,
//! so backends are interchangeable without touching any resolver:
//! - [`InMemoryAdapter`]: collections live in process memory
//! - [`FileAdapter`]: the same collections, mirrored to a JSON snapshot
//!
//! Both are a [`CollectionStore`] with a different [`Persistence`] hook, and
//! every collection is a [`Collection`], the generic add/find/update/delete
//! implementation.

pub mod collection;
pub mod file;
pub mod memory;
pub mod store;

pub use collection::{generate_id, Collection};
pub use file::{FileAdapter, JsonSnapshot};
pub use memory::{InMemoryAdapter, Volatile};
pub use store::{CollectionStore, Collections, Persistence};

use std::sync::Arc;

use async_trait::async_trait;
use gamereview_shared_config::{StorageBackend, StorageConfig};

use crate::error::ApiResult;
use crate::models::{
    Author, AuthorPatch, Game, GamePatch, NewAuthor, NewGame, NewReview, Review, ReviewPatch,
};

/// Storage contract for authors, games and reviews
///
/// Lookups by identifier fail with `ApiError::NotFound` when nothing
/// matches; list and filter operations return an empty list instead.
/// List results are always in creation order.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Short name of the backend, for logs and health output
    fn backend(&self) -> &'static str;

    /// Prepare the backing resource; must be called once before any other operation
    async fn connect(&self) -> ApiResult<()>;

    /// Cheap read-only check that the store can serve requests
    async fn ping(&self) -> ApiResult<()>;

    // ==================== Authors ====================

    async fn add_author(&self, author: NewAuthor) -> ApiResult<Author>;
    async fn delete_author(&self, id: &str) -> ApiResult<String>;
    async fn fetch_author(&self, id: &str) -> ApiResult<Author>;
    async fn fetch_authors(&self) -> ApiResult<Vec<Author>>;
    async fn update_author(&self, id: &str, author: AuthorPatch) -> ApiResult<Author>;

    // ==================== Games ====================

    async fn add_game(&self, game: NewGame) -> ApiResult<Game>;
    async fn delete_game(&self, id: &str) -> ApiResult<String>;
    async fn fetch_game(&self, id: &str) -> ApiResult<Game>;
    async fn fetch_games(&self) -> ApiResult<Vec<Game>>;
    async fn update_game(&self, id: &str, game: GamePatch) -> ApiResult<Game>;

    // ==================== Reviews ====================

    async fn add_review(&self, review: NewReview) -> ApiResult<Review>;
    async fn delete_review(&self, id: &str) -> ApiResult<String>;
    async fn fetch_review(&self, id: &str) -> ApiResult<Review>;
    async fn fetch_reviews(&self) -> ApiResult<Vec<Review>>;
    async fn fetch_reviews_by_author_id(&self, author_id: &str) -> ApiResult<Vec<Review>>;
    async fn fetch_reviews_by_game_id(&self, game_id: &str) -> ApiResult<Vec<Review>>;
    async fn update_review(&self, id: &str, review: ReviewPatch) -> ApiResult<Review>;
}

/// Shared handle the schema and routes hold on to
pub type SharedStore = Arc<dyn DataStore>;

/// Construct the adapter selected by configuration
///
/// The returned store is not connected yet.
pub fn build_store(config: &StorageConfig) -> SharedStore {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryAdapter::new()),
        StorageBackend::File => Arc::new(FileAdapter::new(config.data_file.clone())),
    }
}
