use std::fmt;
use std::ops;
use std::sync::Arc;

/// A shared, immutable value.
///
/// Cloning a `Shared` hands out another handle to the same allocation. The
/// identity of that allocation is what [`Shared::ptr_eq`] compares, which is
/// the notion of equality used for lists and dicts.
///
/// # Examples
///
/// ```rust
/// use stencil::Shared;
///
/// let a = Shared::new(vec![1, 2, 3]);
/// let b = a.clone();
/// let c = Shared::new(vec![1, 2, 3]);
///
/// assert!(Shared::ptr_eq(&a, &b));
/// assert!(!Shared::ptr_eq(&a, &c));
/// assert_eq!(*a, *c);
/// ```
pub struct Shared<T: ?Sized> {
    inner: Arc<T>,
}

impl<T> Shared<T> {
    /// Construct a new shared value.
    pub fn new(data: T) -> Self {
        Self {
            inner: Arc::new(data),
        }
    }
}

impl<T: ?Sized> Shared<T> {
    /// Test if two handles refer to the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// The number of live handles to the underlying allocation.
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.inner)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> ops::Deref for Shared<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: ?Sized> AsRef<T> for Shared<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> fmt::Debug for Shared<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl From<&str> for Shared<str> {
    fn from(string: &str) -> Self {
        Self {
            inner: Arc::from(string),
        }
    }
}

impl From<String> for Shared<str> {
    fn from(string: String) -> Self {
        Self {
            inner: Arc::from(string),
        }
    }
}

impl From<Box<str>> for Shared<str> {
    fn from(string: Box<str>) -> Self {
        Self {
            inner: Arc::from(string),
        }
    }
}

impl<T> From<Vec<T>> for Shared<[T]> {
    fn from(vec: Vec<T>) -> Self {
        Self {
            inner: Arc::from(vec),
        }
    }
}

impl<T: ?Sized> From<Arc<T>> for Shared<T> {
    fn from(inner: Arc<T>) -> Self {
        Self { inner }
    }
}
