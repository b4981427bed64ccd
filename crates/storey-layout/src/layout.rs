//! Generated layout records.
//!
//! These are plain immutable values. They carry no identity beyond their
//! computed attributes; a host materializes them into real objects.

use serde::{Deserialize, Serialize};
use storey_core::{Axis, Point3};

/// A named straight reference line.
///
/// An X-axis grid at ordinal `i` sits at `x = i * spacing_x` and spans
/// `y` from 0 to `spacing_y * (count_y - 1)`; Y-axis grids are the
/// transpose. Coordinates are in internal units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Axis the grid is numbered along.
    pub axis: Axis,
    /// 0-based position along [`axis`](Self::axis).
    pub index: usize,
    /// Display name, unique within the axis.
    pub name: String,
    /// First endpoint.
    pub start: Point3,
    /// Second endpoint.
    pub end: Point3,
}

impl GridSpec {
    /// Length of the line segment in internal units.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// A named horizontal elevation marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// 0-based position in the stack.
    pub index: usize,
    /// Display name.
    pub name: String,
    /// Elevation above zero, in internal units.
    pub elevation: f64,
}

/// Everything a host needs to materialize a layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// X-axis grids in ascending index, then Y-axis grids in ascending index.
    pub grids: Vec<GridSpec>,
    /// Levels in input order.
    pub levels: Vec<LevelSpec>,
}

impl LayoutResult {
    /// Grids belonging to `axis`, in index order.
    pub fn grids_on(&self, axis: Axis) -> impl Iterator<Item = &GridSpec> {
        self.grids.iter().filter(move |g| g.axis == axis)
    }

    /// Topmost level, if any.
    pub fn top_level(&self) -> Option<&LevelSpec> {
        self.levels.last()
    }

    /// `true` when there is nothing to materialize.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty() && self.levels.is_empty()
    }
}
