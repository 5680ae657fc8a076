//! Game mutations

use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::{ApiError, ApiResult};
use crate::graphql::types::Game;
use crate::models::{GamePatch, NewGame};

use super::{require_non_blank, require_platforms};

/// Input for creating a game
#[derive(Debug, InputObject)]
pub struct AddGameInput {
    /// Game title
    pub title: String,
    /// Platforms the game runs on
    pub platform: Vec<String>,
}

/// Input for updating a game
///
/// A provided `platform` list replaces the stored one entirely.
#[derive(Debug, Default, InputObject)]
pub struct EditGameInput {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl AddGameInput {
    fn validate(&self) -> ApiResult<()> {
        require_non_blank("title", &self.title)?;
        require_platforms(&self.platform)
    }
}

impl EditGameInput {
    fn validate(&self) -> ApiResult<()> {
        if let Some(title) = &self.title {
            require_non_blank("title", title)?;
        }
        if let Some(platform) = &self.platform {
            require_platforms(platform)?;
        }
        Ok(())
    }
}

impl From<AddGameInput> for NewGame {
    fn from(input: AddGameInput) -> Self {
        Self {
            title: input.title,
            platform: input.platform,
        }
    }
}

impl From<EditGameInput> for GamePatch {
    fn from(input: EditGameInput) -> Self {
        Self {
            title: input.title,
            platform: input.platform,
        }
    }
}

/// Game mutations
#[derive(Default)]
pub struct GameMutation;

#[Object]
impl GameMutation {
    /// Create a new game
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Result<Game> {
        game.validate().map_err(ApiError::into_graphql_error)?;

        let store = ctx.data::<SharedStore>()?;
        let game = store
            .add_game(game.into())
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(game_id = %game.id, "Game created");
        Ok(Game::from(game))
    }

    /// Delete a game and return its ID
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let store = ctx.data::<SharedStore>()?;
        let deleted = store
            .delete_game(&id)
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(game_id = %deleted, "Game deleted");
        Ok(ID(deleted))
    }

    /// Update a game
    async fn update_game(&self, ctx: &Context<'_>, id: ID, game: EditGameInput) -> Result<Game> {
        game.validate().map_err(ApiError::into_graphql_error)?;

        let store = ctx.data::<SharedStore>()?;
        let game = store
            .update_game(&id, game.into())
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(game_id = %game.id, "Game updated");
        Ok(Game::from(game))
    }
}
