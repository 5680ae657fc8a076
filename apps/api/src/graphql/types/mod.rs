//! GraphQL type definitions
//!
//! This module contains the GraphQL object types exposed through the API.
//! Each wraps a stored record and adds the relationship resolvers.

mod author;
mod game;
mod review;

pub use author::Author;
pub use game::Game;
pub use review::Review;
