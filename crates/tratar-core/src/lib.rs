//! # tratar-core — Normalization Core for Brazilian Registry Data
//!
//! The dependency-light foundation of the tratar workspace: two total,
//! pure row functions for cleaning registry extracts, the validated
//! [`Cnpj`] newtype, and the structured error type. The registration
//! surface that exposes the row functions to a batch engine lives in
//! `tratar-udf`; this crate depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Total row functions.** [`normalize_cnpj`] and [`sanitize_string`]
//!    never fail: absent input propagates to absent output, and invalid
//!    present input maps to the empty-string sentinel. A batch engine can
//!    apply them to any column without a per-row error channel.
//!
//! 2. **Newtype for the validated identifier.** Code that holds a CNPJ it
//!    believes to be well-formed holds a [`Cnpj`], not a bare string.
//!    Validation happens at construction (and at deserialization).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tratar-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod cnpj;
pub mod error;
pub mod normalize;

// Re-export primary items for ergonomic imports.
pub use cnpj::Cnpj;
pub use error::ValidationError;
pub use normalize::{normalize_cnpj, sanitize_string};
