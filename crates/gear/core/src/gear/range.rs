//! Size ranges and the derived operational range.

use super::{GearType, Millimeters};

/// Physical min/max spread of an expanding device (fully closed to fully open).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionRange {
    pub min: Millimeters,
    pub max: Millimeters,
}

impl ExpansionRange {
    pub const fn new(min: Millimeters, max: Millimeters) -> Self {
        Self { min, max }
    }

    pub fn delta(&self) -> Millimeters {
        self.max - self.min
    }
}

/// Recommended placement span, trimmed from both ends of the expansion range.
///
/// Never stored independently: always computed by [`OperationalRange::derive`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationalRange {
    pub min: Millimeters,
    pub max: Millimeters,
}

impl OperationalRange {
    /// Margin trimmed from the closed end (devices are insecure near full closure).
    pub const CLOSED_MARGIN: f64 = 0.10;
    /// Ball nuts lose reliability faster near their minimum.
    pub const BALL_NUT_CLOSED_MARGIN: f64 = 0.25;
    /// Margin trimmed from the open end (holding power degrades near full expansion).
    pub const OPEN_MARGIN: f64 = 0.25;

    /// Computes the operational range for `gear_type`.
    ///
    /// Returns `None` for types without a continuous expansion mechanism
    /// (hexes and nuts). Big Bros keep their full expansion maximum.
    pub fn derive(gear_type: GearType, expansion: ExpansionRange) -> Option<Self> {
        if !gear_type.is_active() {
            return None;
        }

        let delta = expansion.delta();
        let closed_margin = match gear_type {
            GearType::BallNut => Self::BALL_NUT_CLOSED_MARGIN,
            _ => Self::CLOSED_MARGIN,
        };

        let min = round1(expansion.min + closed_margin * delta);
        let max = match gear_type {
            GearType::BigBro => expansion.max,
            _ => round1(expansion.max - Self::OPEN_MARGIN * delta),
        };

        Some(Self { min, max })
    }

    /// Width of the span, rounded to one decimal for display.
    pub fn width(&self) -> Millimeters {
        round1(self.max - self.min)
    }
}

/// Contact widths of a passive device in each placement orientation.
///
/// `p1_5` exists only for hexes with a third (offset) placement.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveRange {
    pub p1: Millimeters,
    pub p1_5: Option<Millimeters>,
    pub p2: Millimeters,
}

impl PassiveRange {
    /// Placements in ascending orientation order, skipping absent ones.
    pub fn placements(&self) -> impl Iterator<Item = Millimeters> + '_ {
        [Some(self.p1), self.p1_5, Some(self.p2)].into_iter().flatten()
    }

    pub fn min(&self) -> Millimeters {
        self.placements().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> Millimeters {
        self.placements().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Rounds to one decimal place.
///
/// Display precision, not physical precision: derived values are published
/// with one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
