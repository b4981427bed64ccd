//! Layout requests and the optional strict validation pass.
//!
//! The generator accepts any [`LayoutRequest`] and produces degenerate
//! geometry for degenerate input. Callers that would rather reject such
//! input before anything is generated call [`LayoutRequest::validate`].

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use storey_core::{Axis, LinearValue};

use crate::config::is_positive_finite;

/// Input to [`LayoutGenerator::generate`](crate::LayoutGenerator::generate).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Number of X-axis grids.
    pub grid_count_x: u32,
    /// Number of Y-axis grids.
    pub grid_count_y: u32,
    /// Distance between consecutive X-axis grids.
    pub spacing_x: LinearValue,
    /// Distance between consecutive Y-axis grids.
    pub spacing_y: LinearValue,
    /// Successive inter-level heights, bottom first.
    pub level_heights: Vec<LinearValue>,
}

/// Reasons [`LayoutRequest::validate`] rejects a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestError {
    /// No grids requested on an axis.
    NoGrids {
        /// The empty axis.
        axis: Axis,
    },
    /// Spacing is NaN, infinite, zero, or negative.
    InvalidSpacing {
        /// Axis the spacing belongs to.
        axis: Axis,
        /// The invalid internal-unit value.
        value: f64,
    },
    /// No level heights supplied.
    NoLevels,
    /// A level height is NaN, infinite, zero, or negative.
    InvalidHeight {
        /// Position in [`LayoutRequest::level_heights`].
        index: usize,
        /// The invalid internal-unit value.
        value: f64,
    },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGrids { axis } => write!(f, "no grids requested on {axis}"),
            Self::InvalidSpacing { axis, value } => {
                write!(f, "spacing on {axis} must be finite and positive, got {value}")
            }
            Self::NoLevels => write!(f, "no level heights supplied"),
            Self::InvalidHeight { index, value } => {
                write!(f, "level height {index} must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for RequestError {}

impl LayoutRequest {
    /// Reject requests that would produce empty or degenerate geometry.
    ///
    /// Reports the first problem found, checking grids before levels.
    pub fn validate(&self) -> Result<(), RequestError> {
        for (axis, count, spacing) in [
            (Axis::X, self.grid_count_x, self.spacing_x),
            (Axis::Y, self.grid_count_y, self.spacing_y),
        ] {
            if count == 0 {
                return Err(RequestError::NoGrids { axis });
            }
            if !is_positive_finite(spacing.internal()) {
                return Err(RequestError::InvalidSpacing {
                    axis,
                    value: spacing.internal(),
                });
            }
        }
        if self.level_heights.is_empty() {
            return Err(RequestError::NoLevels);
        }
        if let Some((index, h)) = self
            .level_heights
            .iter()
            .enumerate()
            .find(|(_, h)| !is_positive_finite(h.internal()))
        {
            return Err(RequestError::InvalidHeight {
                index,
                value: h.internal(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storey_core::{LinearUnit, UnitConversion};

    fn valid_request() -> LayoutRequest {
        let m = UnitConversion::identity(LinearUnit::Meters);
        LayoutRequest {
            grid_count_x: 3,
            grid_count_y: 2,
            spacing_x: m.linear(8.0),
            spacing_y: m.linear(6.0),
            level_heights: vec![m.linear(4.0), m.linear(3.0)],
        }
    }

    #[test]
    fn validate_valid_request_succeeds() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn validate_zero_count_fails() {
        let mut req = valid_request();
        req.grid_count_y = 0;
        match req.validate() {
            Err(RequestError::NoGrids { axis: Axis::Y }) => {}
            other => panic!("expected NoGrids(Y), got {other:?}"),
        }
    }

    #[test]
    fn validate_negative_spacing_fails() {
        let mut req = valid_request();
        req.spacing_x = UnitConversion::identity(LinearUnit::Meters).linear(-1.0);
        match req.validate() {
            Err(RequestError::InvalidSpacing { axis: Axis::X, value }) => {
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidSpacing(X), got {other:?}"),
        }
    }

    #[test]
    fn validate_empty_heights_fails() {
        let mut req = valid_request();
        req.level_heights.clear();
        assert_eq!(req.validate(), Err(RequestError::NoLevels));
    }

    #[test]
    fn validate_reports_first_bad_height() {
        let m = UnitConversion::identity(LinearUnit::Meters);
        let mut req = valid_request();
        req.level_heights = vec![m.linear(3.0), m.linear(0.0), m.linear(f64::NAN)];
        match req.validate() {
            Err(RequestError::InvalidHeight { index: 1, .. }) => {}
            other => panic!("expected InvalidHeight(1), got {other:?}"),
        }
    }
}
