//! GraphQL mutations
//!
//! This module contains all mutation resolvers, organized by entity. Each
//! entity gets an add/update/delete triple; deletes return the removed ID.

mod author;
mod game;
mod review;

pub use author::{AddAuthorInput, AuthorMutation, EditAuthorInput};
pub use game::{AddGameInput, EditGameInput, GameMutation};
pub use review::{AddReviewInput, EditReviewInput, ReviewMutation};

use async_graphql::MergedObject;

use crate::error::{ApiError, ApiResult};

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(AuthorMutation, GameMutation, ReviewMutation);

// =============================================================================
// Input Validation
// =============================================================================

/// Reject empty or whitespace-only text
fn require_non_blank(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::ValidationError(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Reject a platform list containing a blank entry
///
/// An empty list is allowed.
fn require_platforms(platform: &[String]) -> ApiResult<()> {
    if let Some(index) = platform.iter().position(|p| p.trim().is_empty()) {
        return Err(ApiError::ValidationError(format!(
            "platform[{}] cannot be empty",
            index
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Jane", true)]
    #[case(" x ", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t\n", false)]
    fn test_require_non_blank(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(require_non_blank("name", value).is_ok(), ok);
    }

    #[test]
    fn test_require_platforms_reports_index() {
        let platforms = vec!["PC".to_string(), " ".to_string()];
        let err = require_platforms(&platforms).unwrap_err();
        assert_eq!(err.to_string(), "validation error: platform[1] cannot be empty");

        assert!(require_platforms(&[]).is_ok());
        assert!(require_platforms(&["PC".to_string()]).is_ok());
    }
}
