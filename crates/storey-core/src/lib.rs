//! Core value types for the Storey layout generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: linear units and
//! conversions, internal-unit points, grid axes, and element handles
//! for host documents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod id;
pub mod units;

pub use geometry::{Axis, Point3};
pub use id::ElementId;
pub use units::{LinearUnit, LinearValue, UnitConversion};
