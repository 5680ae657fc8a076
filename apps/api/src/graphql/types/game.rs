//! Game GraphQL type

use async_graphql::{Context, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::ApiError;
use crate::models::Game as GameRecord;

use super::review::Review;

/// Game information exposed via GraphQL
pub struct Game {
    inner: GameRecord,
}

impl Game {
    /// Create a new GraphQL Game from a stored Game
    pub fn new(game: GameRecord) -> Self {
        Self { inner: game }
    }
}

impl From<GameRecord> for Game {
    fn from(game: GameRecord) -> Self {
        Self::new(game)
    }
}

#[Object]
impl Game {
    /// Unique game identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Game title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Platforms the game runs on
    async fn platform(&self) -> &[String] {
        &self.inner.platform
    }

    /// Reviews of this game, in creation order
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let store = ctx.data::<SharedStore>()?;
        let reviews = store
            .fetch_reviews_by_game_id(&self.inner.id)
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(reviews.into_iter().map(Review::from).collect())
    }
}
