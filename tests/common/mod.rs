//! Common test utilities for promstack integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory with config and secrets files
//! - Fixtures: Reusable configuration documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
