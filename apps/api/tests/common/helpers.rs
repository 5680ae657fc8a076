//! Test helper functions for API integration tests
//!
//! Provides schema construction and request execution that return plain
//! JSON, so assertions read like the wire format.

#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::Value;

use gamereview_api::adapters::{InMemoryAdapter, SharedStore};
use gamereview_api::graphql::{build_schema, ReviewSchema};

/// Schema over a fresh in-memory store, plus a handle to that store
pub fn memory_schema() -> (ReviewSchema, SharedStore) {
    let store: SharedStore = Arc::new(InMemoryAdapter::new());
    (build_schema(store.clone()), store)
}

/// Execute a document and return the serialized response
/// (`{"data": ..., "errors": [...]}`)
pub async fn execute(schema: &ReviewSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).expect("response should serialize")
}

/// Execute a document that must succeed and return its `data`
pub async fn execute_ok(schema: &ReviewSchema, query: &str, variables: Value) -> Value {
    let response = execute(schema, query, variables).await;
    assert!(
        response.get("errors").is_none(),
        "unexpected errors: {}",
        response["errors"]
    );
    response["data"].clone()
}

/// The `extensions.code` of every error in a response
pub fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["extensions"]["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
