//! Deterministic grid and level generation.
//!
//! Both operations are total: degenerate input (zero counts, non-positive
//! spacing, empty height lists) yields empty or zero-length geometry,
//! never an error. The output depends only on the arguments and the
//! naming configuration; there are no counters or hidden state.

use storey_core::{Axis, LinearValue, Point3};

use crate::config::LayoutConfig;
use crate::layout::{GridSpec, LayoutResult, LevelSpec};
use crate::naming::GridNaming;
use crate::request::LayoutRequest;

/// Computes [`GridSpec`]s and [`LevelSpec`]s from layout parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutGenerator {
    x_naming: GridNaming,
    y_naming: GridNaming,
    level_prefix: String,
}

impl Default for LayoutGenerator {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl LayoutGenerator {
    /// Build a generator using the naming schemes in `config`.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            x_naming: config.x_naming.clone(),
            y_naming: config.y_naming.clone(),
            level_prefix: config.level_prefix.clone(),
        }
    }

    /// Generate X-axis grids followed by Y-axis grids.
    ///
    /// The X grid at ordinal `i` runs from `(i·sx, 0)` to
    /// `(i·sx, sy·(count_y − 1))`; Y grids are the transpose. When the
    /// perpendicular count is 0 the span collapses to zero length.
    pub fn generate_grids(
        &self,
        count_x: u32,
        count_y: u32,
        spacing_x: LinearValue,
        spacing_y: LinearValue,
    ) -> Vec<GridSpec> {
        let sx = spacing_x.internal();
        let sy = spacing_y.internal();
        let span_x = sx * last_ordinal(count_x);
        let span_y = sy * last_ordinal(count_y);

        let mut grids = Vec::with_capacity(count_x as usize + count_y as usize);
        for i in 0..count_x {
            let x = sx * f64::from(i);
            grids.push(GridSpec {
                axis: Axis::X,
                index: i as usize,
                name: self.x_naming.label(i as usize),
                start: Point3::planar(x, 0.0),
                end: Point3::planar(x, span_y),
            });
        }
        for j in 0..count_y {
            let y = sy * f64::from(j);
            grids.push(GridSpec {
                axis: Axis::Y,
                index: j as usize,
                name: self.y_naming.label(j as usize),
                start: Point3::planar(0.0, y),
                end: Point3::planar(span_x, y),
            });
        }
        tracing::debug!(count_x, count_y, sx, sy, "generated grids");
        grids
    }

    /// Generate one level per height, at the running sum of heights.
    ///
    /// `heights[i]` is the rise from level `i` to level `i + 1`, with
    /// the first height measured from elevation 0.
    pub fn generate_levels(&self, heights: &[LinearValue]) -> Vec<LevelSpec> {
        let mut elevation = 0.0;
        let levels: Vec<LevelSpec> = heights
            .iter()
            .enumerate()
            .map(|(index, height)| {
                elevation += height.internal();
                LevelSpec {
                    index,
                    name: format!("{}{}", self.level_prefix, index + 1),
                    elevation,
                }
            })
            .collect();
        tracing::debug!(levels = levels.len(), top = elevation, "generated levels");
        levels
    }

    /// Generate the full layout for `request`.
    pub fn generate(&self, request: &LayoutRequest) -> LayoutResult {
        LayoutResult {
            grids: self.generate_grids(
                request.grid_count_x,
                request.grid_count_y,
                request.spacing_x,
                request.spacing_y,
            ),
            levels: self.generate_levels(&request.level_heights),
        }
    }
}

/// `count - 1` as a span multiplier, clamped at zero.
fn last_ordinal(count: u32) -> f64 {
    f64::from(count.saturating_sub(1))
}
