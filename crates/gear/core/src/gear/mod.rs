//! Gear domain model.
//!
//! A [`GearRecord`] is one physical product size: brand, model, colour, size
//! label, weight, stem and a type-specific [`GearProfile`]. Records are built
//! from flat [`GearSpec`] values (the shape stored in catalog files) and are
//! immutable afterwards.
//!
//! # Units
//!
//! - Sizes (ranges and placements): millimeters
//! - Strength: kilonewtons
//! - Weight: grams

pub mod kind;
pub mod maker;
pub mod range;
pub mod record;
pub mod spec;

pub use kind::{Color, GearType, Stem};
pub use maker::{GearBrand, GearModel};
pub use range::{ExpansionRange, OperationalRange, PassiveRange, round1};
pub use record::{
    ActiveSpec, GearProfile, GearRecord, Measure, PassiveSpec, PassiveStrength, StrengthTable,
};
pub use spec::{GearSpec, RangeSpec, StrengthSpec};

/// Length in millimeters.
pub type Millimeters = f64;

/// Force in kilonewtons.
pub type Kilonewtons = f64;

/// Mass in grams.
pub type Grams = f64;
