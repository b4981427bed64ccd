//! Layout configuration, validation, and error types.
//!
//! [`LayoutConfig`] gathers every knob the generator and the free-text
//! adapters consult: unit conversion, naming schemes, tokenizer
//! separators and the fallback values substituted for unparseable input.
//! [`validate()`](LayoutConfig::validate) checks structural invariants
//! once, up front.

use std::error::Error;
use std::fmt;

use smallvec::{smallvec, SmallVec};
use storey_core::{Axis, UnitConversion};

use crate::naming::GridNaming;
use crate::project::ProjectInfo;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`LayoutConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// No separator characters configured for the height tokenizer.
    NoSeparators,
    /// A separator character can appear inside a number.
    NumericSeparator {
        /// The offending separator.
        separator: char,
    },
    /// The fallback height is NaN, infinite, zero, or negative.
    InvalidDefaultHeight {
        /// The invalid value.
        value: f64,
    },
    /// A fallback grid spacing is NaN, infinite, zero, or negative.
    InvalidDefaultSpacing {
        /// Axis the spacing belongs to.
        axis: Axis,
        /// The invalid value.
        value: f64,
    },
    /// Some X grid name equals some Y grid name, either because the
    /// schemes coincide or because one prefix extends the other by
    /// digits (`X` and `X1` both yield `X11`).
    AmbiguousGridNaming,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSeparators => write!(f, "at least one height separator is required"),
            Self::NumericSeparator { separator } => {
                write!(f, "separator {separator:?} can appear inside a number")
            }
            Self::InvalidDefaultHeight { value } => {
                write!(f, "default_height must be finite and positive, got {value}")
            }
            Self::InvalidDefaultSpacing { axis, value } => {
                write!(
                    f,
                    "default spacing on {axis} must be finite and positive, got {value}"
                )
            }
            Self::AmbiguousGridNaming => {
                write!(f, "x and y grid naming schemes can produce the same name")
            }
        }
    }
}

impl Error for ConfigError {}

// ── LayoutConfig ───────────────────────────────────────────────────

/// Complete configuration for generating a layout from user input.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Display-to-internal unit conversion. Default: meters to feet.
    pub units: UnitConversion,
    /// Naming scheme for X-axis grids. Default: `X1, X2, ...`.
    pub x_naming: GridNaming,
    /// Naming scheme for Y-axis grids. Default: `Y1, Y2, ...`.
    pub y_naming: GridNaming,
    /// Prefix for level names. Default: `"Level "`.
    pub level_prefix: String,
    /// Characters that split the level-height text. Default: `, ; space tab`.
    pub separators: SmallVec<[char; 4]>,
    /// Height substituted for unparseable tokens and blank input, in
    /// display units. Default: 3.0.
    pub default_height: f64,
    /// Grid count used when the X count text is unparseable. Default: 5.
    pub default_grid_count_x: u32,
    /// Grid count used when the Y count text is unparseable. Default: 5.
    pub default_grid_count_y: u32,
    /// Spacing used when the X spacing text is unparseable. Default: 8.0.
    pub default_spacing_x: f64,
    /// Spacing used when the Y spacing text is unparseable. Default: 8.0.
    pub default_spacing_y: f64,
    /// Project metadata written with the layout.
    pub project: ProjectInfo,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            units: UnitConversion::default(),
            x_naming: GridNaming::Prefixed("X".to_string()),
            y_naming: GridNaming::Prefixed("Y".to_string()),
            level_prefix: "Level ".to_string(),
            separators: smallvec![',', ';', ' ', '\t'],
            default_height: 3.0,
            default_grid_count_x: 5,
            default_grid_count_y: 5,
            default_spacing_x: 8.0,
            default_spacing_y: 8.0,
            project: ProjectInfo::default(),
        }
    }
}

impl LayoutConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Tokenizer needs separators that cannot occur in a number.
        if self.separators.is_empty() {
            return Err(ConfigError::NoSeparators);
        }
        if let Some(&separator) = self
            .separators
            .iter()
            .find(|&&c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        {
            return Err(ConfigError::NumericSeparator { separator });
        }
        // 2. Fallback values must themselves be usable.
        if !is_positive_finite(self.default_height) {
            return Err(ConfigError::InvalidDefaultHeight {
                value: self.default_height,
            });
        }
        for (axis, value) in [
            (Axis::X, self.default_spacing_x),
            (Axis::Y, self.default_spacing_y),
        ] {
            if !is_positive_finite(value) {
                return Err(ConfigError::InvalidDefaultSpacing { axis, value });
            }
        }
        // 3. Grid names must not collide across axes.
        if self.x_naming.overlaps(&self.y_naming) {
            return Err(ConfigError::AmbiguousGridNaming);
        }
        Ok(())
    }
}

pub(crate) fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
