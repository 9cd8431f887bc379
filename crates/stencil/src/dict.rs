use crate::collections::{hash_map, HashMap};
use crate::{Shared, Value};
use std::borrow;
use std::cmp;
use std::fmt;
use std::hash;
use std::iter;

/// An iterator over the entries of a `Dict`.
///
/// This `struct` is created by the [`iter`] method on [`Dict`]. See its
/// documentation for more.
///
/// [`iter`]: struct.Dict.html#method.iter
/// [`Dict`]: struct.Dict.html
pub type Iter<'a> = hash_map::Iter<'a, String, Value>;

/// An immutable mapping from strings to values.
///
/// Like [List][crate::List], a dict is a handle over shared storage and two
/// dicts are only equal if they share that storage.
///
/// # Examples
///
/// ```rust
/// use stencil::{Dict, Value};
///
/// let dict = Dict::from_iter([(String::from("a"), Value::from(1))]);
///
/// assert_eq!(Value::from(1), dict.key("a"));
/// assert!(dict.key("missing").is_undefined());
/// ```
#[derive(Clone)]
#[repr(transparent)]
pub struct Dict {
    inner: Shared<HashMap<String, Value>>,
}

impl Dict {
    /// Construct a new empty dict.
    pub fn new() -> Self {
        Self::from(HashMap::new())
    }

    /// Returns the number of entries in the dict.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the dict contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the value bound to the given key, or [Value::Undefined] if there is
    /// no such key.
    pub fn key(&self, k: &str) -> Value {
        self.inner.get(k).cloned().unwrap_or_default()
    }

    /// Returns a reference to the value corresponding to the key.
    #[inline]
    pub fn get<Q: ?Sized>(&self, k: &Q) -> Option<&Value>
    where
        String: borrow::Borrow<Q>,
        Q: hash::Hash + cmp::Eq,
    {
        self.inner.get(k)
    }

    /// Returns `true` if the dict contains a value for the specified key.
    pub fn contains_key<Q: ?Sized>(&self, k: &Q) -> bool
    where
        String: borrow::Borrow<Q>,
        Q: hash::Hash + cmp::Eq,
    {
        self.inner.contains_key(k)
    }

    /// An iterator visiting all key-value pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        self.inner.iter()
    }

    /// Iterate over all entries ordered by key.
    pub fn sorted(&self) -> impl Iterator<Item = (&String, &Value)> + '_ {
        let mut entries = self.inner.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// An iterator visiting all keys in arbitrary order.
    pub fn keys(&self) -> hash_map::Keys<'_, String, Value> {
        self.inner.keys()
    }

    /// Test if two dicts share the same storage.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Shared::ptr_eq(&a.inner, &b.inner)
    }
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted()).finish()
    }
}

impl From<HashMap<String, Value>> for Dict {
    fn from(map: HashMap<String, Value>) -> Self {
        Self {
            inner: Shared::new(map),
        }
    }
}

impl iter::FromIterator<(String, Value)> for Dict {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<_, _>>())
    }
}
