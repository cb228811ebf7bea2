//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  ├── CoreError        - Checked pricing failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bazaar-quote errors (CLI)                                             │
//! │  └── ConfigError      - Configuration loading failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (CLI main) → stderr        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The permissive calculator never fails. Only the checked entry points
//! (`quote_checked`, `PricingCalculator::try_new`) return these errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors from the checked pricing entry points.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart entry failed validation.
    ///
    /// ## When This Occurs
    /// - Negative unit price
    /// - Quantity of 0, negative, or above the per-item limit
    /// - Missing product id
    #[error("Invalid line item at position {index}: {source}")]
    InvalidLineItem {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// The pricing policy is inconsistent (e.g. min fee above max fee).
    #[error("Invalid pricing policy: {0}")]
    InvalidPolicy(ValidationError),

    /// Validation error not tied to a single item (e.g. cart too large).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Two related values are in the wrong order.
    #[error("{lower} must not exceed {upper}")]
    Inverted { lower: String, upper: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
