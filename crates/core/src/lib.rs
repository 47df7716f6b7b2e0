//! # Stowage Core
//!
//! Core abstractions for the stowage container-loading engine.
//!
//! This crate provides the pieces shared by loading-domain crates:
//!
//! - **Error types**: [`Error`], [`Result`]
//! - **Strategies**: the item-ordering rules cycled by the meta-search
//! - **Search framework**: a restart-based runner that executes seeded,
//!   independent trials and keeps the best outcome
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization/deserialization support

pub mod error;
pub mod search;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use search::{SearchResult, SearchRunner, TrialProblem};
pub use solver::{SearchConfig, Strategy, Termination};
