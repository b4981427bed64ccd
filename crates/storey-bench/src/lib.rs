//! Benchmark profiles for the Storey layout generator.
//!
//! Provides pre-built [`LayoutRequest`] profiles and free-text inputs:
//!
//! - [`reference_profile`]: 10x10 grid, 12 levels (a typical mid-rise)
//! - [`stress_profile`]: 1000x1000 grid, 500 levels
//! - [`heights_text`]: a separated height list with periodic garbage tokens

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use storey_core::{LinearUnit, UnitConversion};
use storey_layout::LayoutRequest;

fn profile(count: u32, levels: usize) -> LayoutRequest {
    let conv = UnitConversion::new(LinearUnit::Meters, LinearUnit::Feet);
    LayoutRequest {
        grid_count_x: count,
        grid_count_y: count,
        spacing_x: conv.linear(8.0),
        spacing_y: conv.linear(7.5),
        level_heights: (0..levels)
            .map(|i| conv.linear(if i == 0 { 4.5 } else { 3.6 }))
            .collect(),
    }
}

/// A 10x10 grid with 12 levels.
pub fn reference_profile() -> LayoutRequest {
    profile(10, 12)
}

/// A 1000x1000 grid with 500 levels.
pub fn stress_profile() -> LayoutRequest {
    profile(1000, 500)
}

/// `count` heights separated by mixed separators; every seventh token
/// is unparseable.
pub fn heights_text(count: usize) -> String {
    let separators = [", ", ";", " ", "\t"];
    let mut out = String::new();
    for i in 0..count {
        if i > 0 {
            out.push_str(separators[i % separators.len()]);
        }
        if i % 7 == 6 {
            out.push_str("n/a");
        } else {
            out.push_str(&format!("{}.{}", 3 + i % 2, i % 10));
        }
    }
    out
}
