//! Brands and models.
//!
//! Both are shared between many records (`Arc<GearBrand>`, `Arc<GearModel>`)
//! and never change after catalog assembly.

/// Manufacturer of a device.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearBrand {
    name: String,
    short: Option<String>,
}

impl GearBrand {
    pub fn new(name: impl Into<String>, short: Option<String>) -> Self {
        Self {
            name: name.into(),
            short,
        }
    }

    /// Full brand name, e.g. `"Black Diamond"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shorthand, falling back to the full name.
    pub fn short(&self) -> &str {
        self.short.as_deref().unwrap_or(&self.name)
    }

    /// Full name or shorthand.
    pub fn label(&self, shorthand: bool) -> &str {
        if shorthand { self.short() } else { self.name() }
    }
}

/// Product line of a brand, e.g. Camalot C4.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearModel {
    name: String,
    short: Option<String>,
    available: bool,
}

impl GearModel {
    pub fn new(name: impl Into<String>, short: Option<String>, available: bool) -> Self {
        Self {
            name: name.into(),
            short,
            available,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shorthand, falling back to the full name.
    pub fn short(&self) -> &str {
        self.short.as_deref().unwrap_or(&self.name)
    }

    /// Whether the model is still in production.
    pub fn available(&self) -> bool {
        self.available
    }

    pub fn label(&self, shorthand: bool) -> &str {
        if shorthand { self.short() } else { self.name() }
    }
}
