//! Common test utilities for API integration tests
//!
//! This module provides shared test infrastructure for integration tests,
//! including input fixtures, a failing store double, and schema helpers.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;
pub mod mocks;

pub use fixtures::*;
pub use helpers::*;
pub use mocks::*;
