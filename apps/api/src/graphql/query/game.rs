//! Game queries

use async_graphql::{Context, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::ApiError;
use crate::graphql::types::Game;

/// Game lookups
#[derive(Default)]
pub struct GameQuery;

#[Object]
impl GameQuery {
    /// List all games in creation order
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let store = ctx.data::<SharedStore>()?;
        let games = store
            .fetch_games()
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(games.into_iter().map(Game::from).collect())
    }

    /// Get a game by ID
    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let store = ctx.data::<SharedStore>()?;
        let game = store
            .fetch_game(&id)
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(Some(Game::from(game)))
    }
}
