//! Raw dialog input and its conversion to a [`LayoutRequest`].

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::parse::{parse_magnitude, HeightParser};
use crate::request::LayoutRequest;

/// The free-text fields a parameter dialog collects.
///
/// Conversion follows the same substitute-on-failure policy as
/// [`HeightParser`]: anything that does not parse is replaced by the
/// matching default in [`LayoutConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutForm {
    /// Number of X-axis grids.
    pub grid_count_x: String,
    /// Number of Y-axis grids.
    pub grid_count_y: String,
    /// X spacing in display units.
    pub spacing_x: String,
    /// Y spacing in display units.
    pub spacing_y: String,
    /// Separated list of level heights in display units.
    pub level_heights: String,
}

impl LayoutForm {
    /// Convert to a request, substituting defaults from `config`.
    pub fn to_request(&self, config: &LayoutConfig) -> LayoutRequest {
        let units = config.units;
        LayoutRequest {
            grid_count_x: parse_count(&self.grid_count_x, config.default_grid_count_x),
            grid_count_y: parse_count(&self.grid_count_y, config.default_grid_count_y),
            spacing_x: units.linear(
                parse_magnitude(&self.spacing_x).unwrap_or(config.default_spacing_x),
            ),
            spacing_y: units.linear(
                parse_magnitude(&self.spacing_y).unwrap_or(config.default_spacing_y),
            ),
            level_heights: HeightParser::from_config(config).parse(&self.level_heights),
        }
    }
}

fn parse_count(text: &str, default: u32) -> u32 {
    text.trim().parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storey_core::{LinearUnit, UnitConversion};

    fn meters_config() -> LayoutConfig {
        LayoutConfig {
            units: UnitConversion::identity(LinearUnit::Meters),
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn well_formed_form_converts_verbatim() {
        let form = LayoutForm {
            grid_count_x: "4".into(),
            grid_count_y: " 3 ".into(),
            spacing_x: "7.5".into(),
            spacing_y: "6".into(),
            level_heights: "4.2, 3.6, 3.6".into(),
        };
        let req = form.to_request(&meters_config());
        assert_eq!(req.grid_count_x, 4);
        assert_eq!(req.grid_count_y, 3);
        assert_eq!(req.spacing_x.magnitude(), 7.5);
        assert_eq!(req.spacing_y.internal(), 6.0);
        let heights: Vec<f64> = req.level_heights.iter().map(|h| h.magnitude()).collect();
        assert_eq!(heights, vec![4.2, 3.6, 3.6]);
    }

    #[test]
    fn blank_form_uses_defaults() {
        let req = LayoutForm::default().to_request(&meters_config());
        assert_eq!(req.grid_count_x, 5);
        assert_eq!(req.grid_count_y, 5);
        assert_eq!(req.spacing_x.magnitude(), 8.0);
        assert_eq!(req.spacing_y.magnitude(), 8.0);
        assert_eq!(req.level_heights.len(), 1);
        assert_eq!(req.level_heights[0].magnitude(), 3.0);
    }

    #[test]
    fn garbage_falls_back_field_by_field() {
        let form = LayoutForm {
            grid_count_x: "-2".into(),
            grid_count_y: "six".into(),
            spacing_x: "NaN".into(),
            spacing_y: "9".into(),
            level_heights: "3;?".into(),
        };
        let req = form.to_request(&meters_config());
        assert_eq!(req.grid_count_x, 5);
        assert_eq!(req.grid_count_y, 5);
        assert_eq!(req.spacing_x.magnitude(), 8.0);
        assert_eq!(req.spacing_y.magnitude(), 9.0);
        let heights: Vec<f64> = req.level_heights.iter().map(|h| h.magnitude()).collect();
        assert_eq!(heights, vec![3.0, 3.0]);
    }

    #[test]
    fn zero_count_is_passed_through() {
        let form = LayoutForm {
            grid_count_x: "0".into(),
            ..LayoutForm::default()
        };
        assert_eq!(form.to_request(&meters_config()).grid_count_x, 0);
    }
}
