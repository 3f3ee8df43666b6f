//! Shared types for the DexLab REST API
//!
//! This crate provides the core type definitions used across the DexLab SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Scope`], [`Method`] - API partition and HTTP verb
//! - [`MarketId`] - Symbolic pair name or on-chain market address
//! - [`Query`] - Query-string / JSON-body parameters
//! - [`Endpoint`] - Static endpoint descriptor, see [`catalog`]

pub mod catalog;
pub mod enums;
pub mod market;
pub mod query;

// Re-export commonly used types
pub use catalog::Endpoint;
pub use enums::*;
pub use market::*;
pub use query::*;
