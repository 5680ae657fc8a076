//! Review queries

use async_graphql::{Context, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::ApiError;
use crate::graphql::types::Review;

/// Review lookups
#[derive(Default)]
pub struct ReviewQuery;

#[Object]
impl ReviewQuery {
    /// List all reviews in creation order
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let store = ctx.data::<SharedStore>()?;
        let reviews = store
            .fetch_reviews()
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(reviews.into_iter().map(Review::from).collect())
    }

    /// Get a review by ID
    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let store = ctx.data::<SharedStore>()?;
        let review = store
            .fetch_review(&id)
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(Some(Review::from(review)))
    }
}
