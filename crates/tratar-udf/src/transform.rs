//! # Row Transform Trait & Built-ins
//!
//! Defines [`RowTransform`], the seam between the pure normalization
//! functions in `tratar-core` and whatever batch engine applies them per
//! row, plus the two built-in transforms the original pipeline registers.
//!
//! ## Engine Contract
//!
//! Implementors must be stateless and deterministic: the same input
//! always yields the same output, so an engine may partition, reorder,
//! and re-execute calls freely (speculative retry included) without
//! observable effect. No locking, no I/O, no cancellation semantics.

use std::fmt;

use tratar_core::{normalize_cnpj, sanitize_string};

/// A named, single-argument, nullable-text-to-nullable-text row function.
///
/// The nullable signature is deliberate: `None` in means `None` out, and
/// a present input always produces a present output — invalid-shaped
/// values are encoded as sentinel values by the transform itself, never
/// as errors. This keeps column application infallible (see
/// [`TransformRegistry::apply_column`](crate::registry::TransformRegistry::apply_column);
/// the only failure mode there is an unknown transform name).
pub trait RowTransform: Send + Sync + fmt::Debug {
    /// The name the transform is registered and invoked under.
    fn name(&self) -> &str;

    /// Apply the transform to a single row value.
    fn apply(&self, input: Option<&str>) -> Option<String>;
}

/// Row transform wrapping [`tratar_core::normalize_cnpj`].
///
/// Registered name: `normalize_cnpj`. Masks well-formed 14-digit runs as
/// `DD.DDD.DDD/DDDD-DD`; anything else becomes the empty-string sentinel.
#[derive(Debug, Default, Clone, Copy)]
pub struct CnpjNormalizer;

impl RowTransform for CnpjNormalizer {
    fn name(&self) -> &str {
        "normalize_cnpj"
    }

    fn apply(&self, input: Option<&str>) -> Option<String> {
        normalize_cnpj(input)
    }
}

/// Row transform wrapping [`tratar_core::sanitize_string`].
///
/// Registered name: `sanitize_string`. Trims, uppercases, and strips
/// everything outside the `[A-Z0-9 ]` class.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringSanitizer;

impl RowTransform for StringSanitizer {
    fn name(&self) -> &str {
        "sanitize_string"
    }

    fn apply(&self, input: Option<&str>) -> Option<String> {
        sanitize_string(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_delegate_to_core() {
        assert_eq!(
            CnpjNormalizer.apply(Some("12345678000195")),
            Some("12.345.678/0001-95".to_string())
        );
        assert_eq!(
            StringSanitizer.apply(Some("  joão's Café!  ")),
            Some("JOOS CAF".to_string())
        );
    }

    #[test]
    fn builtins_propagate_absent() {
        assert_eq!(CnpjNormalizer.apply(None), None);
        assert_eq!(StringSanitizer.apply(None), None);
    }

    #[test]
    fn builtin_names_are_stable() {
        // Wire names: engine-side column expressions refer to these.
        assert_eq!(CnpjNormalizer.name(), "normalize_cnpj");
        assert_eq!(StringSanitizer.name(), "sanitize_string");
    }
}
