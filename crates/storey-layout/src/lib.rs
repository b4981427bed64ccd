//! Grid and level generation for Storey.
//!
//! [`LayoutGenerator`] turns a [`LayoutRequest`] into a [`LayoutResult`]:
//! an ordered set of named reference grids and a cumulative stack of
//! named levels. Generation is pure and total; it never fails and never
//! touches a host document.
//!
//! Free-text input is adapted by [`HeightParser`] and [`LayoutForm`],
//! which substitute configured defaults for anything unparseable.
//!
//! # Example
//!
//! ```
//! use storey_core::{LinearUnit, UnitConversion};
//! use storey_layout::{LayoutGenerator, LayoutRequest};
//!
//! let m = UnitConversion::identity(LinearUnit::Meters);
//! let request = LayoutRequest {
//!     grid_count_x: 2,
//!     grid_count_y: 2,
//!     spacing_x: m.linear(8.0),
//!     spacing_y: m.linear(8.0),
//!     level_heights: vec![m.linear(3.0); 3],
//! };
//! let result = LayoutGenerator::default().generate(&request);
//! assert_eq!(result.grids.len(), 4);
//! let elevations: Vec<f64> = result.levels.iter().map(|l| l.elevation).collect();
//! assert_eq!(elevations, vec![3.0, 6.0, 9.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod form;
pub mod generator;
pub mod layout;
pub mod naming;
pub mod parse;
pub mod project;
pub mod request;

pub use config::{ConfigError, LayoutConfig};
pub use form::LayoutForm;
pub use generator::LayoutGenerator;
pub use layout::{GridSpec, LayoutResult, LevelSpec};
pub use naming::GridNaming;
pub use parse::{parse_level_heights, HeightParser};
pub use project::ProjectInfo;
pub use request::{LayoutRequest, RequestError};
