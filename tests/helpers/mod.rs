// Test Helper Modules
//
// Shared fixtures and in-memory collaborators for contract and integration tests.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]


pub use fakes::*;
pub use test_data::*;
