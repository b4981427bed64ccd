//! Linear units and the fixed-factor conversion to internal units.
//!
//! Every length handed to the generator is a [`LinearValue`]: the magnitude
//! the user typed, the unit it was typed in, and the equivalent length in
//! the host's internal unit. Values are only ever built through a
//! [`UnitConversion`], so the two representations cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A linear unit with a fixed length in meters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinearUnit {
    /// SI meter.
    Meters,
    /// 1/100 m.
    Centimeters,
    /// 1/1000 m.
    Millimeters,
    /// International foot (0.3048 m). Internal unit of most BIM hosts.
    Feet,
    /// International inch (0.0254 m).
    Inches,
}

impl LinearUnit {
    /// Length of one unit, in micrometers. Exact for every variant.
    pub fn micrometers(self) -> f64 {
        match self {
            Self::Meters => 1_000_000.0,
            Self::Centimeters => 10_000.0,
            Self::Millimeters => 1_000.0,
            Self::Feet => 304_800.0,
            Self::Inches => 25_400.0,
        }
    }

    /// Length of one unit, in meters.
    pub fn meters(self) -> f64 {
        self.micrometers() / 1_000_000.0
    }

    /// Short symbol used when formatting values.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Feet => "ft",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fixed scale between a user-facing (display) unit and the internal unit.
///
/// The factor is `display.micrometers() / internal.micrometers()`. It is strictly
/// positive and finite for every [`LinearUnit`] pair, so conversion is
/// injective and [`to_display`](Self::to_display) inverts
/// [`to_internal`](Self::to_internal) up to rounding.
///
/// # Examples
///
/// ```
/// use storey_core::{LinearUnit, UnitConversion};
///
/// let conv = UnitConversion::new(LinearUnit::Meters, LinearUnit::Millimeters);
/// assert_eq!(conv.to_internal(8.0), 8000.0);
/// assert_eq!(conv.to_display(8000.0), 8.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    display: LinearUnit,
    internal: LinearUnit,
}

impl UnitConversion {
    /// Conversion from `display` to `internal` units.
    pub fn new(display: LinearUnit, internal: LinearUnit) -> Self {
        Self { display, internal }
    }

    /// A conversion whose display and internal units coincide (factor 1).
    pub fn identity(unit: LinearUnit) -> Self {
        Self::new(unit, unit)
    }

    /// The user-facing unit.
    pub fn display_unit(&self) -> LinearUnit {
        self.display
    }

    /// The unit geometry is computed in.
    pub fn internal_unit(&self) -> LinearUnit {
        self.internal
    }

    /// Internal units per display unit.
    pub fn factor(&self) -> f64 {
        self.display.micrometers() / self.internal.micrometers()
    }

    /// Convert a display magnitude to internal units.
    pub fn to_internal(&self, magnitude: f64) -> f64 {
        magnitude * self.factor()
    }

    /// Convert an internal length back to display units.
    pub fn to_display(&self, internal: f64) -> f64 {
        internal / self.factor()
    }

    /// Build a [`LinearValue`] from a display magnitude.
    pub fn linear(&self, magnitude: f64) -> LinearValue {
        LinearValue {
            magnitude,
            unit: self.display,
            internal_unit: self.internal,
            internal: self.to_internal(magnitude),
        }
    }

    /// Build a [`LinearValue`] from a length already in internal units.
    pub fn from_internal(&self, internal: f64) -> LinearValue {
        LinearValue {
            magnitude: self.to_display(internal),
            unit: self.display,
            internal_unit: self.internal,
            internal,
        }
    }
}

impl Default for UnitConversion {
    /// Meters on screen, feet inside the host document.
    fn default() -> Self {
        Self::new(LinearUnit::Meters, LinearUnit::Feet)
    }
}

/// A length in a declared unit together with its internal-unit equivalent.
///
/// Construct through [`UnitConversion::linear`] or
/// [`UnitConversion::from_internal`]. Deserialization recomputes
/// `internal` from the magnitude and both units; a serialized `internal`
/// field is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "LinearValueSerde")]
pub struct LinearValue {
    magnitude: f64,
    unit: LinearUnit,
    internal_unit: LinearUnit,
    internal: f64,
}

#[derive(Deserialize)]
struct LinearValueSerde {
    magnitude: f64,
    unit: LinearUnit,
    internal_unit: LinearUnit,
}

impl From<LinearValueSerde> for LinearValue {
    fn from(value: LinearValueSerde) -> Self {
        UnitConversion::new(value.unit, value.internal_unit).linear(value.magnitude)
    }
}

impl LinearValue {
    /// Magnitude in [`unit`](Self::unit).
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit [`magnitude`](Self::magnitude) is expressed in.
    pub fn unit(&self) -> LinearUnit {
        self.unit
    }

    /// Equivalent length in internal units.
    pub fn internal(&self) -> f64 {
        self.internal
    }

    /// The conversion this value was built with.
    pub fn conversion(&self) -> UnitConversion {
        UnitConversion::new(self.unit, self.internal_unit)
    }
}

impl fmt::Display for LinearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
