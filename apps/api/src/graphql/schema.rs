//! GraphQL schema builder
//!
//! This module provides the schema construction for the async-graphql API.
//! The storage adapter is injected as context data, so any [`DataStore`]
//! implementation can back the schema.
//!
//! [`DataStore`]: crate::adapters::DataStore

use async_graphql::{EmptySubscription, Schema};

use crate::adapters::SharedStore;

use super::mutation::Mutation;
use super::query::Query;

/// Maximum query depth accepted by the schema
const MAX_QUERY_DEPTH: usize = 16;

/// The game review GraphQL schema type
pub type ReviewSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
pub struct SchemaBuilder {
    store: SharedStore,
    introspection: bool,
}

impl SchemaBuilder {
    /// Create a new schema builder backed by the given store
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            introspection: true,
        }
    }

    /// Enable or disable introspection queries
    pub fn introspection(mut self, enabled: bool) -> Self {
        self.introspection = enabled;
        self
    }

    /// Build the schema
    pub fn build(self) -> ReviewSchema {
        let mut builder = Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(self.store)
            .limit_depth(MAX_QUERY_DEPTH);

        if !self.introspection {
            builder = builder.disable_introspection();
        }

        builder.finish()
    }
}

/// Create a new GraphQL schema backed by the given store
pub fn build_schema(store: SharedStore) -> ReviewSchema {
    SchemaBuilder::new(store).build()
}

/// Render the schema contract as SDL
///
/// No store is attached; the result is only good for printing.
pub fn export_sdl() -> String {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .finish()
        .sdl()
}
