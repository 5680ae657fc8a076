//! Lock-guarded collections behind the `DataStore` contract
//!
//! [`CollectionStore`] owns the three collections and implements every
//! storage operation once. What happens after a change is applied is left to
//! its [`Persistence`] hook: nothing for the in-memory backend, a JSON
//! snapshot for the file backend.
//!
//! A single `RwLock` guards all collections and each operation holds it for
//! its whole read-modify-write, so concurrent requests never see a
//! half-applied change. When the hook's `save` can fail, the change is staged
//! on a copy and only swapped in once it has been saved.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{Collection, DataStore};
use crate::error::ApiResult;
use crate::models::{
    Author, AuthorPatch, Game, GamePatch, NewAuthor, NewGame, NewReview, Review, ReviewPatch,
};

/// The full data set: one collection per entity kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collections {
    #[serde(default)]
    pub authors: Collection<Author>,
    #[serde(default)]
    pub games: Collection<Game>,
    #[serde(default)]
    pub reviews: Collection<Review>,
}

impl Collections {
    /// Reviews written by an author
    pub fn reviews_by_author(&self, author_id: &str) -> Vec<Review> {
        self.reviews.filter(|review| review.is_by_author(author_id))
    }

    /// Reviews of a game
    pub fn reviews_by_game(&self, game_id: &str) -> Vec<Review> {
        self.reviews.filter(|review| review.is_for_game(game_id))
    }
}

/// Where the data set comes from and where committed changes go
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Backend name reported by [`DataStore::backend`]
    const BACKEND: &'static str;

    /// Whether `save` can fail; if so, writes are staged on a copy first
    const STAGED: bool;

    /// Data set to start from; `None` keeps what the store already holds
    async fn load(&self) -> ApiResult<Option<Collections>>;

    /// Make a changed data set durable
    async fn save(&self, data: &Collections) -> ApiResult<()>;

    /// Cheap check that the backing resource is usable
    async fn check(&self) -> ApiResult<()> {
        Ok(())
    }
}

/// Storage adapter over in-process collections
#[derive(Debug, Default)]
pub struct CollectionStore<P> {
    data: RwLock<Collections>,
    persistence: P,
}

impl<P> CollectionStore<P> {
    /// Create a store holding `data` and committing through `persistence`
    pub fn with_persistence(persistence: P, data: Collections) -> Self {
        Self {
            data: RwLock::new(data),
            persistence,
        }
    }

    /// The persistence hook
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Copy of the current data set
    pub async fn snapshot(&self) -> Collections {
        self.data.read().await.clone()
    }

    async fn read<R>(&self, f: impl FnOnce(&Collections) -> R + Send) -> R {
        let data = self.data.read().await;
        f(&data)
    }
}

impl<P: Persistence> CollectionStore<P> {
    /// Apply a change and commit it, all under the write lock
    ///
    /// Neither a failed change nor a failed save leaves anything behind.
    async fn write<R: Send>(
        &self,
        f: impl FnOnce(&mut Collections) -> ApiResult<R> + Send,
    ) -> ApiResult<R> {
        let mut data = self.data.write().await;

        if !P::STAGED {
            let result = f(&mut data)?;
            self.persistence.save(&data).await?;
            return Ok(result);
        }

        let mut staged = data.clone();
        let result = f(&mut staged)?;

        if let Err(e) = self.persistence.save(&staged).await {
            tracing::error!(
                backend = P::BACKEND,
                error = %e,
                "Failed to persist change, discarding it"
            );
            return Err(e);
        }

        *data = staged;
        Ok(result)
    }
}

#[async_trait]
impl<P: Persistence> DataStore for CollectionStore<P> {
    fn backend(&self) -> &'static str {
        P::BACKEND
    }

    async fn connect(&self) -> ApiResult<()> {
        if let Some(loaded) = self.persistence.load().await? {
            *self.data.write().await = loaded;
        }
        Ok(())
    }

    async fn ping(&self) -> ApiResult<()> {
        drop(self.data.read().await);
        self.persistence.check().await
    }

    // ==================== Authors ====================

    async fn add_author(&self, author: NewAuthor) -> ApiResult<Author> {
        let author = self.write(|data| Ok(data.authors.add(author))).await?;
        tracing::debug!(id = %author.id, "Author added");
        Ok(author)
    }

    async fn delete_author(&self, id: &str) -> ApiResult<String> {
        self.write(|data| data.authors.delete(id)).await
    }

    async fn fetch_author(&self, id: &str) -> ApiResult<Author> {
        self.read(|data| data.authors.find(id).cloned()).await
    }

    async fn fetch_authors(&self) -> ApiResult<Vec<Author>> {
        Ok(self.read(|data| data.authors.all().to_vec()).await)
    }

    async fn update_author(&self, id: &str, author: AuthorPatch) -> ApiResult<Author> {
        self.write(|data| data.authors.update(id, author)).await
    }

    // ==================== Games ====================

    async fn add_game(&self, game: NewGame) -> ApiResult<Game> {
        let game = self.write(|data| Ok(data.games.add(game))).await?;
        tracing::debug!(id = %game.id, "Game added");
        Ok(game)
    }

    async fn delete_game(&self, id: &str) -> ApiResult<String> {
        self.write(|data| data.games.delete(id)).await
    }

    async fn fetch_game(&self, id: &str) -> ApiResult<Game> {
        self.read(|data| data.games.find(id).cloned()).await
    }

    async fn fetch_games(&self) -> ApiResult<Vec<Game>> {
        Ok(self.read(|data| data.games.all().to_vec()).await)
    }

    async fn update_game(&self, id: &str, game: GamePatch) -> ApiResult<Game> {
        self.write(|data| data.games.update(id, game)).await
    }

    // ==================== Reviews ====================

    async fn add_review(&self, review: NewReview) -> ApiResult<Review> {
        let review = self.write(|data| Ok(data.reviews.add(review))).await?;
        tracing::debug!(id = %review.id, "Review added");
        Ok(review)
    }

    async fn delete_review(&self, id: &str) -> ApiResult<String> {
        self.write(|data| data.reviews.delete(id)).await
    }

    async fn fetch_review(&self, id: &str) -> ApiResult<Review> {
        self.read(|data| data.reviews.find(id).cloned()).await
    }

    async fn fetch_reviews(&self) -> ApiResult<Vec<Review>> {
        Ok(self.read(|data| data.reviews.all().to_vec()).await)
    }

    async fn fetch_reviews_by_author_id(&self, author_id: &str) -> ApiResult<Vec<Review>> {
        Ok(self.read(|data| data.reviews_by_author(author_id)).await)
    }

    async fn fetch_reviews_by_game_id(&self, game_id: &str) -> ApiResult<Vec<Review>> {
        Ok(self.read(|data| data.reviews_by_game(game_id)).await)
    }

    async fn update_review(&self, id: &str, review: ReviewPatch) -> ApiResult<Review> {
        self.write(|data| data.reviews.update(id, review)).await
    }
}
