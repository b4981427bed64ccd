//! Request and form fixtures.
//!
//! All fixtures work in meters with an identity conversion so expected
//! coordinates can be written as plain literals.

use storey_core::{LinearUnit, UnitConversion};
use storey_layout::{LayoutForm, LayoutRequest};

/// Identity conversion in meters.
pub fn meters() -> UnitConversion {
    UnitConversion::identity(LinearUnit::Meters)
}

/// A request with equal spacing on both axes.
pub fn request(count_x: u32, count_y: u32, spacing: f64, heights: &[f64]) -> LayoutRequest {
    let m = meters();
    LayoutRequest {
        grid_count_x: count_x,
        grid_count_y: count_y,
        spacing_x: m.linear(spacing),
        spacing_y: m.linear(spacing),
        level_heights: heights.iter().map(|&h| m.linear(h)).collect(),
    }
}

/// A filled-in dialog form.
pub fn form(count_x: &str, count_y: &str, spacing: &str, heights: &str) -> LayoutForm {
    LayoutForm {
        grid_count_x: count_x.to_string(),
        grid_count_y: count_y.to_string(),
        spacing_x: spacing.to_string(),
        spacing_y: spacing.to_string(),
        level_heights: heights.to_string(),
    }
}
