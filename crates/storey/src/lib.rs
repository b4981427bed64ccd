//! Storey: a parametric grid and level layout generator for building models.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Storey sub-crates. For most users, adding `storey` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use storey::prelude::*;
//!
//! // Everything in meters, no conversion.
//! let config = LayoutConfig {
//!     units: UnitConversion::identity(LinearUnit::Meters),
//!     ..LayoutConfig::default()
//! };
//! let form = LayoutForm {
//!     grid_count_x: "2".into(),
//!     grid_count_y: "2".into(),
//!     spacing_x: "8".into(),
//!     spacing_y: "8".into(),
//!     level_heights: "3, 3, 3".into(),
//! };
//!
//! let setup = ProjectSetup::new(config, SetupOptions::default()).unwrap();
//! let mut doc = MemoryDocument::new();
//! let outcome = setup
//!     .run(&mut Some(form), &mut doc, &mut LogNotifier)
//!     .unwrap();
//! assert!(matches!(outcome, SetupOutcome::Succeeded(_)));
//!
//! let elevations: Vec<f64> = doc.levels().map(|l| l.elevation).collect();
//! assert_eq!(elevations, vec![3.0, 6.0, 9.0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `storey-core` | Units, linear values, points, axes, element IDs |
//! | [`layout`] | `storey-layout` | Generator, records, parsing, configuration |
//! | [`host`] | `storey-host` | Document seam, transactional apply, setup command |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Units, linear values, points, axes, and element IDs (`storey-core`).
pub use storey_core as types;

/// Grid and level generation, free-text parsing, configuration
/// (`storey-layout`).
///
/// [`layout::LayoutGenerator`] is the pure core; [`layout::HeightParser`]
/// and [`layout::LayoutForm`] adapt dialog input to a
/// [`layout::LayoutRequest`].
pub use storey_layout as layout;

/// Host integration (`storey-host`).
///
/// Implement [`host::LayoutDocument`] for a real host, or use
/// [`host::MemoryDocument`] for tooling and tests.
pub use storey_host as host;

/// Common imports for typical Storey usage.
///
/// ```rust
/// use storey::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use storey_core::{Axis, ElementId, LinearUnit, LinearValue, Point3, UnitConversion};

    // Layout
    pub use storey_layout::{
        parse_level_heights, ConfigError, GridNaming, GridSpec, HeightParser, LayoutConfig,
        LayoutForm, LayoutGenerator, LayoutRequest, LayoutResult, LevelSpec, ProjectInfo,
        RequestError,
    };

    // Host
    pub use storey_host::{
        apply_setup, HostError, LayoutDocument, LogNotifier, MemoryDocument, Notifier,
        ParameterSource, ProjectSetup, SetupError, SetupOptions, SetupOutcome, SetupReport,
        ValidationPolicy,
    };
}
