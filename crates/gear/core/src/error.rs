//! Common error infrastructure for gear-core.
//!
//! The only fallible step in the pipeline is catalog assembly: once a
//! [`crate::Catalog`] exists, filtering, sorting, scaling and projection are
//! total functions. Errors are therefore concentrated in [`CatalogError`].
//!
//! # Design Principles
//!
//! - **Fail fast**: a malformed record aborts catalog assembly instead of
//!   leaking `None` into chart math
//! - **Rich Context**: every record-level error names brand, model and size
//! - **Severity Classification**: errors are categorized for callers that log
//!   or surface them differently

use core::fmt;

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input data that must be corrected at the source.
    ///
    /// Examples: missing active strength on a cam, inverted expansion range
    Validation,

    /// Unexpected inconsistency between related pieces of data.
    ///
    /// Examples: a model registered under a different brand than the record
    Internal,

    /// The catalog cannot be assembled at all.
    ///
    /// Examples: unknown brand reference, duplicate model id
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Identifies the catalog entry an error refers to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordContext {
    pub brand: String,
    pub model: Option<String>,
    pub size: String,
}

impl RecordContext {
    pub fn new(brand: impl Into<String>, model: Option<String>, size: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model,
            size: size.into(),
        }
    }
}

impl fmt::Display for RecordContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.model {
            Some(model) => write!(f, "{} {} {}", self.brand, model, self.size),
            None => write!(f, "{} {}", self.brand, self.size),
        }
    }
}

/// Common trait for all gear-core errors.
///
/// Provides a uniform interface for error classification across the crate.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Include [`RecordContext`] in variants that point at a single record
/// - Return a stable SCREAMING_SNAKE_CASE code from `error_code`
pub trait GearError: fmt::Display + fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the record this error refers to, if any.
    fn context(&self) -> Option<&RecordContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while assembling a catalog from gear specifications.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// A field the gear type requires is absent.
    #[error("{context}: {gear_type} requires {field}")]
    MissingField {
        context: RecordContext,
        gear_type: &'static str,
        field: &'static str,
    },

    /// A field that does not apply to the gear type is present.
    #[error("{context}: {field} does not apply to {gear_type}")]
    UnexpectedField {
        context: RecordContext,
        gear_type: &'static str,
        field: &'static str,
    },

    /// A numeric field is NaN, infinite or negative.
    #[error("{context}: {field} must be a finite non-negative number, got {value}")]
    InvalidNumber {
        context: RecordContext,
        field: &'static str,
        value: f64,
    },

    /// Weight must be strictly positive.
    #[error("{context}: weight must be positive, got {weight}")]
    InvalidWeight { context: RecordContext, weight: f64 },

    /// A `{min, max}` or `{p1, p2}` pair is inverted or degenerate.
    #[error("{context}: {field} is inverted (min {min} must be below max {max})")]
    InvertedRange {
        context: RecordContext,
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A record has an empty size label.
    #[error("{context}: size label is empty")]
    EmptySize { context: RecordContext },

    /// A record references a brand id that was never registered.
    #[error("unknown brand '{brand}' referenced by size {size}")]
    UnknownBrand { brand: String, size: String },

    /// A record references a model id that was never registered.
    #[error("{context}: unknown model '{model}'")]
    UnknownModel {
        context: RecordContext,
        model: String,
    },

    /// The referenced model belongs to another brand.
    #[error("{context}: model '{model}' belongs to brand '{owner}'")]
    ModelBrandMismatch {
        context: RecordContext,
        model: String,
        owner: String,
    },

    /// A brand or model id was registered twice.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

impl GearError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            MissingField { .. }
            | UnexpectedField { .. }
            | InvalidNumber { .. }
            | InvalidWeight { .. }
            | InvertedRange { .. }
            | EmptySize { .. } => ErrorSeverity::Validation,

            ModelBrandMismatch { .. } => ErrorSeverity::Internal,

            UnknownBrand { .. } | UnknownModel { .. } | DuplicateId { .. } => ErrorSeverity::Fatal,
        }
    }

    fn context(&self) -> Option<&RecordContext> {
        use CatalogError::*;
        match self {
            MissingField { context, .. }
            | UnexpectedField { context, .. }
            | InvalidNumber { context, .. }
            | InvalidWeight { context, .. }
            | InvertedRange { context, .. }
            | EmptySize { context }
            | UnknownModel { context, .. }
            | ModelBrandMismatch { context, .. } => Some(context),
            UnknownBrand { .. } | DuplicateId { .. } => None,
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            MissingField { .. } => "CATALOG_MISSING_FIELD",
            UnexpectedField { .. } => "CATALOG_UNEXPECTED_FIELD",
            InvalidNumber { .. } => "CATALOG_INVALID_NUMBER",
            InvalidWeight { .. } => "CATALOG_INVALID_WEIGHT",
            InvertedRange { .. } => "CATALOG_INVERTED_RANGE",
            EmptySize { .. } => "CATALOG_EMPTY_SIZE",
            UnknownBrand { .. } => "CATALOG_UNKNOWN_BRAND",
            UnknownModel { .. } => "CATALOG_UNKNOWN_MODEL",
            ModelBrandMismatch { .. } => "CATALOG_MODEL_BRAND_MISMATCH",
            DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
        }
    }
}

/// Chart configuration values that would silently break the filter pipeline.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A threshold or padding is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A padding fraction is below zero.
    #[error("{field} must be a non-negative fraction, got {value}")]
    NegativePad { field: &'static str, value: f64 },

    /// The range slider step is zero or negative.
    #[error("range_step must be positive, got {0}")]
    NonPositiveStep(f64),

    /// The initial size window is inverted.
    #[error("range_min {min} exceeds range_max {max}")]
    InvertedWindow { min: f64, max: f64 },
}

impl GearError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "CONFIG_NON_FINITE",
            Self::NegativePad { .. } => "CONFIG_NEGATIVE_PAD",
            Self::NonPositiveStep(_) => "CONFIG_NON_POSITIVE_STEP",
            Self::InvertedWindow { .. } => "CONFIG_INVERTED_WINDOW",
        }
    }
}
