//! Core types for Brewdex.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amenities;
pub mod id;

pub use amenities::Amenities;
pub use id::CafeId;
