//! Split builder API modules
//!
//! Provides the fluent API for configuring separators and empty-token
//! handling, and for running the split.

pub mod builder_core;
pub mod execution;
pub mod separators;

// Re-export all public types for convenience
pub use builder_core::*;
pub use separators::*;
