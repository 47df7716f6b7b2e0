//! # Stowage
//!
//! Container-loading optimization engine.
//!
//! This crate bundles the stowage workspace:
//!
//! - [`core`]: error types, strategies and the restart-search framework
//! - [`load`]: the 3D container-loading optimizer
//!
//! ## Quick Start
//!
//! ```
//! use stowage::{ContainerTemplate, Item, Packer};
//!
//! let mut packer = Packer::new(ContainerTemplate::new(100.0, 100.0, 100.0, 1000.0), 0.001);
//! packer.add_item(Item::new("cube", 50.0, 50.0, 50.0, 10.0));
//!
//! let plan = packer.pack_all();
//! assert_eq!(plan.container_count(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for public types

/// Core abstractions and the search framework.
pub use stowage_core as core;

/// 3D container-loading algorithms.
pub use stowage_load as load;

// Re-export commonly used types at root level
pub use stowage_core::{Error, Result, SearchConfig, Strategy, Termination};
pub use stowage_load::{
    BinReport, ContainerTemplate, Item, LoadPlan, PackedItem, Packer, PlanSummary, Rotation,
};
