//! Author mutations
//!
//! - addAuthor: Create an author
//! - updateAuthor: Partially update an author
//! - deleteAuthor: Remove an author (their reviews are kept)

use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::adapters::SharedStore;
use crate::error::{ApiError, ApiResult};
use crate::graphql::types::Author;
use crate::models::{AuthorPatch, NewAuthor};

use super::require_non_blank;

// =============================================================================
// Input Types
// =============================================================================

/// Input for creating an author
#[derive(Debug, InputObject)]
pub struct AddAuthorInput {
    /// Display name
    pub name: String,
    /// Whether the author is verified
    pub verified: bool,
}

/// Input for updating an author; omitted fields keep their value
#[derive(Debug, Default, InputObject)]
pub struct EditAuthorInput {
    pub name: Option<String>,
    pub verified: Option<bool>,
}

impl AddAuthorInput {
    fn validate(&self) -> ApiResult<()> {
        require_non_blank("name", &self.name)
    }
}

impl EditAuthorInput {
    fn validate(&self) -> ApiResult<()> {
        match &self.name {
            Some(name) => require_non_blank("name", name),
            None => Ok(()),
        }
    }
}

impl From<AddAuthorInput> for NewAuthor {
    fn from(input: AddAuthorInput) -> Self {
        Self {
            name: input.name,
            verified: input.verified,
        }
    }
}

impl From<EditAuthorInput> for AuthorPatch {
    fn from(input: EditAuthorInput) -> Self {
        Self {
            name: input.name,
            verified: input.verified,
        }
    }
}

// =============================================================================
// Mutations
// =============================================================================

/// Author mutations
#[derive(Default)]
pub struct AuthorMutation;

#[Object]
impl AuthorMutation {
    /// Create a new author
    ///
    /// # Returns
    /// The stored author with its generated ID
    async fn add_author(&self, ctx: &Context<'_>, author: AddAuthorInput) -> Result<Author> {
        author.validate().map_err(ApiError::into_graphql_error)?;

        let store = ctx.data::<SharedStore>()?;
        let author = store
            .add_author(author.into())
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(author_id = %author.id, "Author created");
        Ok(Author::from(author))
    }

    /// Delete an author and return its ID
    ///
    /// Reviews written by the author are not removed.
    async fn delete_author(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let store = ctx.data::<SharedStore>()?;
        let deleted = store
            .delete_author(&id)
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(author_id = %deleted, "Author deleted");
        Ok(ID(deleted))
    }

    /// Update an author
    ///
    /// Only the fields present in the input are changed.
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
        author: EditAuthorInput,
    ) -> Result<Author> {
        author.validate().map_err(ApiError::into_graphql_error)?;

        let store = ctx.data::<SharedStore>()?;
        let author = store
            .update_author(&id, author.into())
            .await
            .map_err(ApiError::into_graphql_error)?;

        tracing::info!(author_id = %author.id, "Author updated");
        Ok(Author::from(author))
    }
}
