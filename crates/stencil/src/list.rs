use crate::{Shared, Value};
use std::fmt;
use std::iter;
use std::slice;

/// An ordered, immutable sequence of values.
///
/// A list is a handle: cloning it shares the underlying storage, and two lists
/// compare equal only if they share the same storage.
///
/// # Examples
///
/// ```rust
/// use stencil::{List, Value};
///
/// let list = List::from(vec![Value::from(10), Value::from(20)]);
/// assert_eq!(2, list.len());
///
/// assert_eq!(Value::from(20), list.index(1));
/// assert!(list.index(5).is_undefined());
/// assert!(list.index(-1).is_undefined());
/// ```
#[derive(Clone)]
#[repr(transparent)]
pub struct List {
    inner: Shared<[Value]>,
}

impl List {
    /// Construct a new empty list.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Get the value at the given position, or [Value::Undefined] if the
    /// position is out of bounds.
    pub fn index(&self, index: i64) -> Value {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.inner.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// Get a reference to the value at the given index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    /// Iterate over the values in the list.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.inner.iter()
    }

    /// Access the values of the list as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.inner
    }

    /// Test if two lists share the same storage.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Shared::ptr_eq(&a.inner, &b.inner)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl From<Vec<Value>> for List {
    fn from(vec: Vec<Value>) -> Self {
        Self {
            inner: Shared::from(vec),
        }
    }
}

impl iter::FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
