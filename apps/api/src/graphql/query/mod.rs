//! GraphQL queries
//!
//! This module contains all query resolvers, organized by entity.

mod author;
mod game;
mod review;

pub use author::AuthorQuery;
pub use game::GameQuery;
pub use review::ReviewQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(AuthorQuery, GameQuery, ReviewQuery);
