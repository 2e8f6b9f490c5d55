//! Variable environment

use indexmap::IndexMap;

/// A mapping from variable names to values.
///
/// Each top-level session owns one environment, and every function call
/// gets a fresh one of its own. Environments never chain: a lookup that
/// misses here does not fall back to the caller.
///
/// # Example
///
/// ```
/// use numlang::Environment;
///
/// let mut env = Environment::new();
/// env.define("x", 1.0);
/// env.define("x", 2.0); // Overwrites
///
/// assert_eq!(env.get("x"), Some(2.0));
/// assert_eq!(env.get("y"), None);
/// assert_eq!(env.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: IndexMap<String, f64>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, overwriting any previous value.
    ///
    /// Returns the previous value, if there was one.
    pub fn define(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.bindings.insert(name.into(), value)
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterate over all bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Remove all bindings.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}
