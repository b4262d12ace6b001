//! Environment port.
//!
//! Adapters back this with the process table or an in-memory map.

/// A mutable table of environment variables.
pub trait Environment {
    /// Gets a variable. `None` if unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets a variable, overwriting any existing value.
    fn set(&mut self, key: &str, value: &str);

    /// Gets a variable, treating the empty string as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Gets a variable, or the empty string if unset.
    fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
