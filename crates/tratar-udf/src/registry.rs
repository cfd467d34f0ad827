//! # Transform Registry
//!
//! Name-keyed registry of [`RowTransform`]s. The original pipeline
//! registered its two cleanup functions with the engine at import time;
//! [`TransformRegistry::with_builtins`] is that registration pair, and
//! `register` is the extension point for deployment-specific transforms.
//!
//! The registry is the library-side half of the engine interface only:
//! how an engine discovers the registry and schedules rows against it is
//! the caller's glue code.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::transform::{CnpjNormalizer, RowTransform, StringSanitizer};

/// Error applying a registered transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No transform is registered under the requested name.
    #[error("unknown transform: {0:?}")]
    UnknownTransform(String),
}

/// Registry of named row transforms.
///
/// Transforms are shared as `Arc<dyn RowTransform>` so a registry can be
/// cloned into any number of worker contexts; the transforms themselves
/// are stateless, so concurrent application needs no locking.
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    transforms: HashMap<String, Arc<dyn RowTransform>>,
}

impl TransformRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in transforms registered:
    /// [`CnpjNormalizer`] and [`StringSanitizer`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CnpjNormalizer));
        registry.register(Arc::new(StringSanitizer));
        registry
    }

    /// Register a transform under its own name.
    ///
    /// Re-registering a name replaces the previous transform. Name
    /// uniqueness policy belongs to the engine collaborator; here a
    /// replacement is logged, not rejected.
    pub fn register(&mut self, transform: Arc<dyn RowTransform>) {
        let name = transform.name().to_string();
        if self.transforms.insert(name.clone(), transform).is_some() {
            tracing::warn!(name = %name, "transform re-registered, replacing previous");
        } else {
            tracing::debug!(name = %name, "transform registered");
        }
    }

    /// Look up a transform by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn RowTransform>> {
        self.transforms.get(name).cloned()
    }

    /// Registered transform names, in no particular order.
    pub fn names(&self) -> Vec<&str> {
        self.transforms.keys().map(String::as_str).collect()
    }

    /// Apply a named transform to a single row value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTransform`] if no transform is
    /// registered under `name`. The transform application itself cannot
    /// fail.
    pub fn apply(&self, name: &str, input: Option<&str>) -> Result<Option<String>, RegistryError> {
        let transform = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTransform(name.to_string()))?;
        Ok(transform.apply(input))
    }

    /// Apply a named transform row-wise over a nullable text column.
    ///
    /// Rows are independent; no ordering is guaranteed between the
    /// per-row applications beyond positional correspondence of the
    /// output vector.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTransform`] if no transform is
    /// registered under `name`.
    pub fn apply_column(
        &self,
        name: &str,
        column: &[Option<String>],
    ) -> Result<Vec<Option<String>>, RegistryError> {
        let transform = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTransform(name.to_string()))?;

        tracing::debug!(name = %name, rows = column.len(), "applying transform to column");
        Ok(column
            .iter()
            .map(|value| transform.apply(value.as_deref()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Registration --

    #[test]
    fn builtins_are_registered() {
        let registry = TransformRegistry::with_builtins();
        assert!(registry.get("normalize_cnpj").is_some());
        assert!(registry.get("sanitize_string").is_some());
        assert_eq!(registry.names().len(), 2);
    }

    #[test]
    fn empty_registry_has_no_transforms() {
        let registry = TransformRegistry::new();
        assert!(registry.get("normalize_cnpj").is_none());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn reregistering_replaces() {
        #[derive(Debug)]
        struct Shadow;
        impl RowTransform for Shadow {
            fn name(&self) -> &str {
                "sanitize_string"
            }
            fn apply(&self, _input: Option<&str>) -> Option<String> {
                Some("shadowed".to_string())
            }
        }

        let mut registry = TransformRegistry::with_builtins();
        registry.register(Arc::new(Shadow));
        assert_eq!(registry.names().len(), 2);
        assert_eq!(
            registry.apply("sanitize_string", Some("x")).unwrap(),
            Some("shadowed".to_string())
        );
    }

    // -- Single-row application --

    #[test]
    fn apply_routes_by_name() {
        let registry = TransformRegistry::with_builtins();
        assert_eq!(
            registry.apply("normalize_cnpj", Some("12345678000195")).unwrap(),
            Some("12.345.678/0001-95".to_string())
        );
        assert_eq!(
            registry.apply("sanitize_string", Some("  abc  ")).unwrap(),
            Some("ABC".to_string())
        );
    }

    #[test]
    fn apply_unknown_name_errors() {
        let registry = TransformRegistry::with_builtins();
        assert_eq!(
            registry.apply("no_such_transform", Some("x")),
            Err(RegistryError::UnknownTransform(
                "no_such_transform".to_string()
            ))
        );
    }

    // -- Column application --

    #[test]
    fn apply_column_preserves_positions_and_nulls() {
        let registry = TransformRegistry::with_builtins();
        let column = vec![
            Some("12345678000195".to_string()),
            None,
            Some("123".to_string()),
            Some("12.345.678/0001-95".to_string()),
        ];

        let out = registry.apply_column("normalize_cnpj", &column).unwrap();
        assert_eq!(
            out,
            vec![
                Some("12.345.678/0001-95".to_string()),
                None,
                Some(String::new()),
                Some("12.345.678/0001-95".to_string()),
            ]
        );
    }

    #[test]
    fn apply_column_empty_is_empty() {
        let registry = TransformRegistry::with_builtins();
        let out = registry.apply_column("sanitize_string", &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn apply_column_unknown_name_errors() {
        let registry = TransformRegistry::with_builtins();
        let column = vec![Some("x".to_string())];
        assert!(matches!(
            registry.apply_column("missing", &column),
            Err(RegistryError::UnknownTransform(_))
        ));
    }

    #[test]
    fn registry_clone_shares_transforms() {
        // Cloning into worker contexts must see the same registrations.
        let registry = TransformRegistry::with_builtins();
        let worker = registry.clone();
        assert_eq!(
            worker.apply("sanitize_string", Some("abc 123 XYZ")).unwrap(),
            Some("ABC 123 XYZ".to_string())
        );
    }
}
