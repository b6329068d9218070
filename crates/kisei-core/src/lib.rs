#![deny(missing_docs)]

//! # kisei-core — Foundational Types for the Hōfu Building Restriction Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde` and `thiserror`
//! from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One closed [`UseDistrict`] enum.** The twelve zoning categories of
//!    Hōfu's city plan are a fixed enumeration, not free-form strings. A
//!    name that is not in the set cannot be constructed, and every `match`
//!    on a district is exhaustive.
//!
//! 2. **Errors carry the offending value.** [`ValidationError`] variants
//!    include the rejected input so operators can diagnose a bad request
//!    without reproducing it.

pub mod district;
pub mod error;

pub use district::UseDistrict;
pub use error::ValidationError;
