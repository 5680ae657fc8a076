//! Game model

use serde::{Deserialize, Serialize};

use super::Entity;

/// Stored game record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique game identifier
    pub id: String,

    /// Game title
    pub title: String,

    /// Platforms the game is available on, in the order given
    pub platform: Vec<String>,
}

/// Game creation input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub platform: Vec<String>,
}

/// Partial game update
///
/// A present `platform` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GamePatch {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl Entity for Game {
    type New = NewGame;
    type Patch = GamePatch;

    const KIND: &'static str = "game";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: NewGame) -> Self {
        Self {
            id,
            title: input.title,
            platform: input.platform,
        }
    }

    fn merge(&mut self, patch: GamePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(platform) = patch.platform {
            self.platform = platform;
        }
    }
}
