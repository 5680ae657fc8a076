//! Review GraphQL type
//!
//! Reviews point at their author and game by identifier only. Those
//! references are not checked on write, so either side may be gone by the
//! time it is resolved; such a reference resolves to `null` instead of
//! failing the query.

use async_graphql::{Context, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::ApiResult;
use crate::models::Review as ReviewRecord;

use super::author::Author;
use super::game::Game;

/// Review information exposed via GraphQL
pub struct Review {
    inner: ReviewRecord,
}

impl Review {
    /// Create a new GraphQL Review from a stored Review
    pub fn new(review: ReviewRecord) -> Self {
        Self { inner: review }
    }
}

impl From<ReviewRecord> for Review {
    fn from(review: ReviewRecord) -> Self {
        Self::new(review)
    }
}

/// Turn a lookup miss into `None`, keeping every other failure
fn dangling_to_none<T>(result: ApiResult<T>, review_id: &str) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            tracing::debug!(review_id = %review_id, error = %e, "Dangling review reference");
            Ok(None)
        }
        Err(e) => Err(e.into_graphql_error()),
    }
}

#[Object]
impl Review {
    /// Unique review identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Score given by the author
    async fn rating(&self) -> i32 {
        self.inner.rating
    }

    /// Review text
    async fn content(&self) -> &str {
        &self.inner.content
    }

    // Relationship resolvers

    /// The reviewing author, or null if that author no longer exists
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let store = ctx.data::<SharedStore>()?;
        let author = store.fetch_author(&self.inner.author_id).await;
        Ok(dangling_to_none(author, &self.inner.id)?.map(Author::from))
    }

    /// The reviewed game, or null if that game no longer exists
    async fn game(&self, ctx: &Context<'_>) -> Result<Option<Game>> {
        let store = ctx.data::<SharedStore>()?;
        let game = store.fetch_game(&self.inner.game_id).await;
        Ok(dangling_to_none(game, &self.inner.id)?.map(Game::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_dangling_to_none_swallows_not_found_only() {
        let missing: ApiResult<u8> = Err(ApiError::not_found("author", "a1"));
        assert!(matches!(dangling_to_none(missing, "r1"), Ok(None)));

        let found: ApiResult<u8> = Ok(7);
        assert!(matches!(dangling_to_none(found, "r1"), Ok(Some(7))));

        let broken: ApiResult<u8> = Err(ApiError::Internal("boom".to_string()));
        assert!(dangling_to_none(broken, "r1").is_err());
    }
}
