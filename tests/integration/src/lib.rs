//! Integration test utilities for the alumni platform
//!
//! This crate provides in-memory repository implementations and data
//! fixtures for running the service layer end-to-end without a database.

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use memory::*;
