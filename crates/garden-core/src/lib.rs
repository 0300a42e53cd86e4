//! # garden-core
//!
//! Core types, schema declarations, and error types for the garden tracker.
//!
//! This crate provides the foundational types shared across all garden crates:
//! - Entity structs for locations, pots, plants, seed lots, and plantings
//! - Entity kinds and ID prefix constants
//! - Explicit per-entity schema declarations (field types, limits, relations)
//! - Pure field validation and the error taxonomy it reports through
//! - Human-readable render functions
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod render;
pub mod responses;
pub mod schema;
