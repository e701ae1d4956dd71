//! Explicit style → `MatchSpec` table.
//!
//! The registry is an owned object the caller builds once at process start
//! and passes where needed; there is no module-level global. Registration is
//! insert-once: specs are read-only after startup.

use indexmap::IndexMap;

use crate::errors::MatchError;
use crate::spec::MatchSpec;
use crate::styles;

#[derive(Debug, Default)]
pub struct StyleRegistry {
    specs: IndexMap<String, MatchSpec>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        StyleRegistry { specs: IndexMap::new() }
    }

    /// Registry preloaded with the shipped calculation styles.
    pub fn builtin() -> Self {
        let mut registry = StyleRegistry::new();
        for spec in styles::builtin_specs() {
            registry.specs.insert(spec.style().to_string(), spec);
        }
        registry
    }

    /// Register a spec under its style name. Styles are registered once;
    /// a second spec for the same style is a configuration error.
    pub fn register(&mut self, spec: MatchSpec) -> Result<(), MatchError> {
        if self.specs.contains_key(spec.style()) {
            return Err(MatchError::DuplicateStyle { style: spec.style().to_string() });
        }
        self.specs.insert(spec.style().to_string(), spec);
        Ok(())
    }

    pub fn get(&self, style: &str) -> Option<&MatchSpec> {
        self.specs.get(style)
    }

    /// Lookup that treats an unregistered style as an error.
    pub fn spec_for(&self, style: &str) -> Result<&MatchSpec, MatchError> {
        match self.specs.get(style) {
            Some(spec) => Ok(spec),
            None => Err(MatchError::UnknownStyle { style: style.to_string() }),
        }
    }

    /// Registered style names, in registration order.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
