//! Callback type for notifying the host about color selections.
//!
//! Callbacks deliberately return nothing. The picker pushes values out;
//! the host reacts, it does not steer the engine from inside a callback.

use std::fmt;

/// An optional callback taking a value of type `T`.
pub struct Callback<T> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> Callback<T> {
    /// Create a callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback that does nothing when emitted.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the callback with a value, if one is set.
    pub fn emit(&self, value: T) {
        if let Some(f) = &self.f {
            f(value);
        }
    }

    /// Whether a function is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Whether the callback is empty.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        // Boxed closures cannot be cloned, so a clone starts out empty.
        Self::none()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_some() {
            write!(f, "Callback(Some)")
        } else {
            write!(f, "Callback(None)")
        }
    }
}
