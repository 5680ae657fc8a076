//! Author GraphQL type
//!
//! This module defines the GraphQL type for authors with their reviews
//! relationship resolver.

use async_graphql::{Context, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::ApiError;
use crate::models::Author as AuthorRecord;

use super::review::Review;

/// Author information exposed via GraphQL
pub struct Author {
    inner: AuthorRecord,
}

impl Author {
    /// Create a new GraphQL Author from a stored Author
    pub fn new(author: AuthorRecord) -> Self {
        Self { inner: author }
    }
}

impl From<AuthorRecord> for Author {
    fn from(author: AuthorRecord) -> Self {
        Self::new(author)
    }
}

#[Object]
impl Author {
    /// Unique author identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether the author is verified
    async fn verified(&self) -> bool {
        self.inner.verified
    }

    // Relationship resolvers

    /// Reviews written by this author, in creation order
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let store = ctx.data::<SharedStore>()?;
        let reviews = store
            .fetch_reviews_by_author_id(&self.inner.id)
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(reviews.into_iter().map(Review::from).collect())
    }
}
