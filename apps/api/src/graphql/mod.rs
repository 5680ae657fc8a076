//! GraphQL schema and resolvers
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for authors, games and reviews
//! - Mutation resolvers for adding, updating and deleting them
//! - Object types with the relationship resolvers between them

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, export_sdl, ReviewSchema, SchemaBuilder};
