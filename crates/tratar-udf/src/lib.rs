//! # tratar-udf — Row-Function Registration Surface
//!
//! Exposes the `tratar-core` normalization functions to a batch/row-wise
//! execution engine as named, single-argument, nullable-text transforms.
//! The engine side — discovery, partitioning, scheduling — is external
//! glue; this crate guarantees only the function contract: stateless,
//! deterministic, total over nullable text.
//!
//! ## Usage
//!
//! ```
//! use tratar_udf::TransformRegistry;
//!
//! let registry = TransformRegistry::with_builtins();
//! let cleaned = registry
//!     .apply("normalize_cnpj", Some("12.345.678/0001-95"))
//!     .unwrap();
//! assert_eq!(cleaned, Some("12.345.678/0001-95".to_string()));
//! ```

pub mod registry;
pub mod transform;

// Re-export primary items for ergonomic imports.
pub use registry::{RegistryError, TransformRegistry};
pub use transform::{CnpjNormalizer, RowTransform, StringSanitizer};
