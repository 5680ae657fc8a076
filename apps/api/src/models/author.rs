//! Author model
//!
//! Authors write reviews. They are referenced from reviews through
//! `Review::author_id`.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Stored author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique author identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Whether the author's identity has been verified
    pub verified: bool,
}

/// Author creation input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub verified: bool,
}

/// Partial author update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub verified: Option<bool>,
}

impl Entity for Author {
    type New = NewAuthor;
    type Patch = AuthorPatch;

    const KIND: &'static str = "author";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: NewAuthor) -> Self {
        Self {
            id,
            name: input.name,
            verified: input.verified,
        }
    }

    fn merge(&mut self, patch: AuthorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author::create(
            "a1".to_string(),
            NewAuthor {
                name: "A".to_string(),
                verified: false,
            },
        )
    }

    #[test]
    fn test_merge_overwrites_present_fields_only() {
        let mut author = author();
        author.merge(AuthorPatch {
            verified: Some(true),
            ..Default::default()
        });

        assert_eq!(
            author,
            Author {
                id: "a1".to_string(),
                name: "A".to_string(),
                verified: true,
            }
        );
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut author = author();
        author.merge(AuthorPatch::default());
        assert_eq!(author, self::author());
    }

    #[test]
    fn test_author_serialization() {
        let json = serde_json::to_value(author()).expect("serialization should succeed");
        assert_eq!(
            json,
            serde_json::json!({"id": "a1", "name": "A", "verified": false})
        );
    }
}
