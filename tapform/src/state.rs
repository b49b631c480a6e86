use std::sync::{Arc, RwLock};

/// Shared value slot with interior mutability.
///
/// `State<T>` is cheap to clone; clones share the same value.
/// A poisoned lock is treated as "no write happened".
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value unless it equals the current one.
    /// Returns true if the value was written.
    pub fn replace_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        match self.inner.write() {
            Ok(mut guard) if *guard != value => {
                *guard = value;
                true
            }
            _ => false,
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
