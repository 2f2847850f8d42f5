//! Storage Integration Tests
//!
//! The service over directory-backed and caller-supplied stores.

#[path = "../common/mod.rs"]
mod common;

mod custom_store;
