//! Review mutations
//!
//! `author_id` and `game_id` are stored as given. They are not checked
//! against existing authors or games; see `graphql::types::Review` for how
//! unknown references resolve.

use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::ApiError;
use crate::graphql::types::Review;
use crate::models::{NewReview, ReviewPatch};

/// Input for creating a review
#[derive(Debug, InputObject)]
pub struct AddReviewInput {
    /// Score
    pub rating: i32,
    /// Review text
    pub content: String,
    /// Reviewing author
    #[graphql(name = "author_id")]
    pub author_id: ID,
    /// Reviewed game
    #[graphql(name = "game_id")]
    pub game_id: ID,
}

/// Input for updating a review; omitted fields keep their value
#[derive(Debug, Default, InputObject)]
pub struct EditReviewInput {
    pub rating: Option<i32>,
    pub content: Option<String>,
    #[graphql(name = "author_id")]
    pub author_id: Option<ID>,
    #[graphql(name = "game_id")]
    pub game_id: Option<ID>,
}

impl From<AddReviewInput> for NewReview {
    fn from(input: AddReviewInput) -> Self {
        Self {
            rating: input.rating,
            content: input.content,
            author_id: input.author_id.0,
            game_id: input.game_id.0,
        }
    }
}

impl From<EditReviewInput> for ReviewPatch {
    fn from(input: EditReviewInput) -> Self {
        Self {
            rating: input.rating,
            content: input.content,
            author_id: input.author_id.map(|id| id.0),
            game_id: input.game_id.map(|id| id.0),
        }
    }
}

/// Review mutations
#[derive(Default)]
pub struct ReviewMutation;

#[Object]
impl ReviewMutation {
    /// Create a new review
    async fn add_review(&self, ctx: &Context<'_>, review: AddReviewInput) -> Result<Review> {
        let store = ctx.data::<SharedStore>()?;
        let review = store
            .add_review(review.into())
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(
            review_id = %review.id,
            author_id = %review.author_id,
            game_id = %review.game_id,
            "Review created"
        );
        Ok(Review::from(review))
    }

    /// Delete a review and return its ID
    async fn delete_review(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let store = ctx.data::<SharedStore>()?;
        let deleted = store
            .delete_review(&id)
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(review_id = %deleted, "Review deleted");
        Ok(ID(deleted))
    }

    /// Update a review
    async fn update_review(
        &self,
        ctx: &Context<'_>,
        id: ID,
        review: EditReviewInput,
    ) -> Result<Review> {
        let store = ctx.data::<SharedStore>()?;
        let review = store
            .update_review(&id, review.into())
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(review_id = %review.id, "Review updated");
        Ok(Review::from(review))
    }
}
