//! # Stowage Load
//!
//! 3D container-loading optimizer for the stowage engine.
//!
//! Given a heterogeneous set of rectangular cartons and a container
//! template, the optimizer produces an ordered placement into one or more
//! containers that respects geometric non-overlap, weight capacity and
//! physical plausibility (support, fragility, balance, longitudinal weight
//! distribution), while minimizing containers used and maximizing
//! volumetric utilization.
//!
//! The search runs on two levels: an outer meta-loop cycles item-ordering
//! strategies with randomized tie perturbation, and an inner constructive
//! engine places cartons greedily at pivot points with six-way rotation.
//!
//! ## Quick Start
//!
//! ```
//! use stowage_load::{ContainerTemplate, Item, Packer};
//!
//! // A 40 ft container and a 67 m³ load target.
//! let template = ContainerTemplate::new(235.0, 239.0, 1200.0, 28_000.0);
//! let mut packer = Packer::new(template, 67.0);
//!
//! packer.add_item(
//!     Item::new("carton-1", 60.0, 40.0, 50.0, 12.5)
//!         .with_name("SKU-A")
//!         .with_fragility(2),
//! );
//!
//! let plan = packer.pack_all();
//! println!(
//!     "{} containers, {:.1} % efficiency, {} unpacked",
//!     plan.container_count(),
//!     plan.average_efficiency(),
//!     plan.unpacked_count(),
//! );
//! ```
//!
//! ## Units
//!
//! Linear dimensions are centimeters, weights kilograms, the load target
//! cubic meters. Y is the vertical axis; the floor is `y = 0`.

pub mod container;
pub mod engine;
pub mod geometry;
pub mod item;
pub mod metrics;
pub mod packer;
pub mod plan;
pub mod stability;
pub mod trial;

// Re-exports
pub use container::{ContainerSpec, ContainerTemplate};
pub use engine::PackedItem;
pub use geometry::Rotation;
pub use item::Item;
pub use metrics::BinReport;
pub use packer::Packer;
pub use plan::{LoadPlan, PlanSummary};
pub use trial::TrialOutcome;
pub use stowage_core::{Error, Result, SearchConfig, Strategy, Termination};
