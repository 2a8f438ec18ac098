//! Brewdex Core - Shared types library.
//!
//! This crate provides common types used across all Brewdex components:
//! - `api` - The public cafe directory HTTP API
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! SQLite column mappings are feature-gated behind `sqlite` so that consumers
//! without a database (e.g. tests of pure serialization) stay dependency-free.
//!
//! # Modules
//!
//! - [`types`] - Newtype ID wrapper and amenity flags

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
