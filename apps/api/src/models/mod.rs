//! Entity models for the game review API
//!
//! This module contains the stored records and their create/edit variants:
//! - Authors who write reviews
//! - Games being reviewed
//! - Reviews linking an author to a game
//!
//! Every record implements [`Entity`], which is what lets the storage
//! adapters keep all three kinds in one generic collection type.

pub mod author;
pub mod game;
pub mod review;

pub use author::{Author, AuthorPatch, NewAuthor};
pub use game::{Game, GamePatch, NewGame};
pub use review::{NewReview, Review, ReviewPatch};

/// A stored record with an immutable string identifier
pub trait Entity: Clone + Send + Sync + 'static {
    /// Create input, everything except the identifier
    type New: Send;

    /// Partial update, every field optional
    type Patch: Send;

    /// Human-readable kind used in errors and logs
    const KIND: &'static str;

    /// The record's identifier
    fn id(&self) -> &str;

    /// Build the full record from a freshly generated identifier and the create input
    fn create(id: String, input: Self::New) -> Self;

    /// Shallow merge: fields present in the patch overwrite, absent fields are kept
    fn merge(&mut self, patch: Self::Patch);
}
