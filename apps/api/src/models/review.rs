//! Review model
//!
//! A review links one author to one game. Both links are soft references:
//! nothing checks that `author_id` or `game_id` point at a stored record.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Stored review record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review identifier
    pub id: String,

    /// Score given by the author
    pub rating: i32,

    /// Review body
    pub content: String,

    /// Identifier of the reviewing author
    pub author_id: String,

    /// Identifier of the reviewed game
    pub game_id: String,
}

/// Review creation input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewReview {
    pub rating: i32,
    pub content: String,
    pub author_id: String,
    pub game_id: String,
}

/// Partial review update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewPatch {
    pub rating: Option<i32>,
    pub content: Option<String>,
    pub author_id: Option<String>,
    pub game_id: Option<String>,
}

impl Entity for Review {
    type New = NewReview;
    type Patch = ReviewPatch;

    const KIND: &'static str = "review";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: NewReview) -> Self {
        Self {
            id,
            rating: input.rating,
            content: input.content,
            author_id: input.author_id,
            game_id: input.game_id,
        }
    }

    fn merge(&mut self, patch: ReviewPatch) {
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = author_id;
        }
        if let Some(game_id) = patch.game_id {
            self.game_id = game_id;
        }
    }
}

impl Review {
    /// Whether this review was written by the given author
    pub fn is_by_author(&self, author_id: &str) -> bool {
        self.author_id == author_id
    }

    /// Whether this review is about the given game
    pub fn is_for_game(&self, game_id: &str) -> bool {
        self.game_id == game_id
    }
}
