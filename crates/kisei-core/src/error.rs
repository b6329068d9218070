//! # Validation Errors
//!
//! Structured error types shared across the stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Both variants are local and recoverable: the presentation layer maps
//! them to a validation message (HTTP 422, CLI exit code 1) rather than
//! terminating the process.

use thiserror::Error;

/// Input validation failures for zoning calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The supplied zoning-category name is not one of the twelve districts
    /// in the Hōfu city plan. Unreachable when the caller only offers
    /// catalog-provided names, but checked defensively.
    #[error("unknown use district: \"{0}\" (expected one of the twelve Hōfu city-plan categories)")]
    UnknownDistrict(String),

    /// An area input is negative or not a finite number. Areas are measured
    /// in square metres and must be finite and non-negative.
    #[error("invalid {field}: {value} ㎡ (areas must be finite and non-negative)")]
    InvalidArea {
        /// Which input field was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
