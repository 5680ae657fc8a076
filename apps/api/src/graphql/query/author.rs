//! Author queries

use async_graphql::{Context, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::ApiError;
use crate::graphql::types::Author;

/// Author lookups
#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    /// List all authors in creation order
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let store = ctx.data::<SharedStore>()?;
        let authors = store
            .fetch_authors()
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(authors.into_iter().map(Author::from).collect())
    }

    /// Get an author by ID
    ///
    /// An unknown ID is reported as a `NOT_FOUND` error on this field.
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let store = ctx.data::<SharedStore>()?;
        let author = store
            .fetch_author(&id)
            .await
            .map_err(ApiError::into_graphql_error)?;
        Ok(Some(Author::from(author)))
    }
}
