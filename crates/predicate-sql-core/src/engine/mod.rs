//! Database engine capabilities.
//!
//! Engines differ in which predicate forms they accept natively. Builders
//! never inspect an engine beyond this trait: they ask the two capability
//! questions and pick a rendering accordingly.

use std::borrow::Cow;

mod generic;
mod postgres;

pub use generic::GenericEngine;
pub use postgres::PostgresEngine;

/// Capability descriptor of a database engine.
pub trait DatabaseEngine {
    /// Returns the name of the engine.
    fn name(&self) -> &'static str;

    /// Returns whether the engine compares row values natively,
    /// e.g. `(a, b) > (?, ?)` and `(a, b) IN (VALUES (?, ?))`.
    fn supports_tuple_comparison(&self) -> bool;

    /// Returns whether the engine binds an array as one parameter for
    /// `column = ANY(?)`.
    fn supports_any_list(&self) -> bool;

    /// Returns the bind-parameter placeholder symbol.
    fn parameter_placeholder(&self) -> &str {
        "?"
    }

    /// Returns the maximum number of parameters one statement may bind, if
    /// the engine has a cap worth batching around.
    fn max_bound_parameters(&self) -> Option<usize> {
        None
    }
}

/// A plain-data engine descriptor.
///
/// Useful when capabilities come from configuration or from a runtime probe
/// done by the connection layer, and for pinning a branch in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCapabilities {
    name: &'static str,
    supports_tuple_comparison: bool,
    supports_any_list: bool,
    placeholder: Cow<'static, str>,
    max_bound_parameters: Option<usize>,
}

impl EngineCapabilities {
    /// Creates a descriptor with both native forms disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: "custom",
            supports_tuple_comparison: false,
            supports_any_list: false,
            placeholder: Cow::Borrowed("?"),
            max_bound_parameters: None,
        }
    }

    /// Copies the capabilities of another engine.
    #[must_use]
    pub fn of<E: DatabaseEngine + ?Sized>(engine: &E) -> Self {
        Self {
            name: engine.name(),
            supports_tuple_comparison: engine.supports_tuple_comparison(),
            supports_any_list: engine.supports_any_list(),
            placeholder: Cow::Owned(engine.parameter_placeholder().to_owned()),
            max_bound_parameters: engine.max_bound_parameters(),
        }
    }

    /// Sets the engine name reported in logs.
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Enables or disables native row-value comparison.
    #[must_use]
    pub const fn with_tuple_comparison(mut self, supported: bool) -> Self {
        self.supports_tuple_comparison = supported;
        self
    }

    /// Enables or disables array binding for `= ANY(?)`.
    #[must_use]
    pub const fn with_any_list(mut self, supported: bool) -> Self {
        self.supports_any_list = supported;
        self
    }

    /// Overrides the placeholder symbol.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the bound-parameter cap used by the batching helpers.
    #[must_use]
    pub const fn with_max_bound_parameters(mut self, max: Option<usize>) -> Self {
        self.max_bound_parameters = max;
        self
    }
}

impl Default for EngineCapabilities {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseEngine for EngineCapabilities {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_tuple_comparison(&self) -> bool {
        self.supports_tuple_comparison
    }

    fn supports_any_list(&self) -> bool {
        self.supports_any_list
    }

    fn parameter_placeholder(&self) -> &str {
        &self.placeholder
    }

    fn max_bound_parameters(&self) -> Option<usize> {
        self.max_bound_parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capabilities() {
        let caps = EngineCapabilities::default();
        assert_eq!(caps.name(), "custom");
        assert!(!caps.supports_tuple_comparison());
        assert!(!caps.supports_any_list());
        assert_eq!(caps.parameter_placeholder(), "?");
        assert_eq!(caps.max_bound_parameters(), None);
    }

    #[test]
    fn test_flags_are_independent() {
        let caps = EngineCapabilities::new().with_any_list(true);
        assert!(caps.supports_any_list());
        assert!(!caps.supports_tuple_comparison());

        let caps = EngineCapabilities::new().with_tuple_comparison(true);
        assert!(caps.supports_tuple_comparison());
        assert!(!caps.supports_any_list());
    }

    #[test]
    fn test_of_copies_engine() {
        let caps = EngineCapabilities::of(&PostgresEngine::new()).with_placeholder("%s");
        assert_eq!(caps.name(), "postgres");
        assert!(caps.supports_tuple_comparison());
        assert!(caps.supports_any_list());
        assert_eq!(caps.parameter_placeholder(), "%s");
        assert_eq!(caps.max_bound_parameters(), Some(65535));
    }

    #[test]
    fn test_owned_placeholder_survives_clone() {
        let symbol = String::from("$1");
        let caps = EngineCapabilities::new().with_placeholder(symbol);
        let copy = caps.clone();
        drop(caps);
        assert_eq!(copy.parameter_placeholder(), "$1");
    }

    #[test]
    fn test_usable_as_trait_object() {
        let engines: Vec<Box<dyn DatabaseEngine>> = vec![
            Box::new(GenericEngine::new()),
            Box::new(PostgresEngine::new()),
        ];
        let names: Vec<_> = engines.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["generic", "postgres"]);
    }
}
