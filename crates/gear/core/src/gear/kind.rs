//! Enumerations describing what a piece of gear is.

/// Kind of protection device.
///
/// The type decides which range and strength fields a record carries:
///
/// ```text
///            | expansion | passive p1/p2 | passive p1_5 |
///   Ball Nut |     X     |               |              |
///    Big Bro |     X     |               |              |
///        Cam |     X     |               |              |
///        Hex |           |       X       |   optional   |
///        Nut |           |       X       |              |
///     Tricam |     X     |       X       |              |
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum GearType {
    #[strum(to_string = "Ball Nut", serialize = "ballnut")]
    BallNut,
    #[strum(to_string = "Big Bro", serialize = "bigbro")]
    BigBro,
    Cam,
    Hex,
    Nut,
    Tricam,
}

impl GearType {
    /// Display name, e.g. `"Ball Nut"`.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Devices with a continuous expansion mechanism (and thus an operational range).
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::BallNut | Self::BigBro | Self::Cam | Self::Tricam)
    }

    /// Devices placed by wedging on fixed contact widths.
    pub const fn is_passive(&self) -> bool {
        matches!(self, Self::Hex | Self::Nut | Self::Tricam)
    }

    /// Whether the range-width label is meaningful for this type.
    ///
    /// Hexes and nuts have discrete placements, not a continuous span.
    pub const fn has_span(&self) -> bool {
        !matches!(self, Self::Hex | Self::Nut)
    }
}

/// Connection style between the device head and the rope.
///
/// Informational only; it never affects filtering or sorting.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Stem {
    Flex,
    Rigid,
    Sling,
    Wired,
}

/// Display colour of a device, from the fixed site palette.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Silver,
    Black,
}

impl Color {
    /// Light text used on dark bars.
    pub const TEXT_LIGHT: &'static str = "hsl(42deg 24% 92%)";
    /// Dark text used on light bars.
    pub const TEXT_DARK: &'static str = "#41444B";

    /// Hex code used when rendering this colour.
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#C96868",
            Self::Orange => "#FFB26F",
            Self::Yellow => "#FADFA1",
            Self::Green => "#9DBC98",
            Self::Blue => "#8CC0DE",
            Self::Purple => "#A888B5",
            Self::Silver => "#C7C8CC",
            Self::Black => "#41444B",
        }
    }

    /// Text colour that stays readable on top of this colour.
    pub const fn text_hex(&self) -> &'static str {
        match self {
            Self::Black => Self::TEXT_LIGHT,
            _ => Self::TEXT_DARK,
        }
    }
}
