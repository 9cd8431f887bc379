use crate::collections::HashMap;
use crate::{Dict, List, Shared, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Trait for converting native types into values.
///
/// This can be derived for structs with `#[derive(ToValue)]`, in which case
/// every public field becomes an entry of a [Dict], keyed by the field name
/// with its first character lower-cased.
///
/// # Examples
///
/// ```rust
/// use stencil::{ToValue, Value};
///
/// let value = vec![Some(1), None].to_value();
/// assert_eq!("[1, null]", value.render());
/// ```
pub trait ToValue {
    /// Convert into a value.
    fn to_value(&self) -> Value;
}

/// Types which can be used as the keys of a native mapping being converted
/// into a [Dict].
///
/// Only text-like types implement this, so a mapping with any other kind of
/// key is rejected at compile time.
pub trait DictKey {
    /// Access the key as a string.
    fn as_key(&self) -> &str;
}

impl DictKey for str {
    fn as_key(&self) -> &str {
        self
    }
}

impl DictKey for String {
    fn as_key(&self) -> &str {
        self
    }
}

impl DictKey for Box<str> {
    fn as_key(&self) -> &str {
        self
    }
}

impl DictKey for Rc<str> {
    fn as_key(&self) -> &str {
        self
    }
}

impl DictKey for Arc<str> {
    fn as_key(&self) -> &str {
        self
    }
}

impl DictKey for Cow<'_, str> {
    fn as_key(&self) -> &str {
        self
    }
}

impl<K: ?Sized> DictKey for &K
where
    K: DictKey,
{
    fn as_key(&self) -> &str {
        K::as_key(*self)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for List {
    fn to_value(&self) -> Value {
        Value::List(self.clone())
    }
}

impl ToValue for Dict {
    fn to_value(&self) -> Value {
        Value::Dict(self.clone())
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

// Indirection impls

impl<T: ?Sized> ToValue for &T
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        T::to_value(*self)
    }
}

impl<T: ?Sized> ToValue for &mut T
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        T::to_value(*self)
    }
}

macro_rules! impl_pointer {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> ToValue for $ty<T>
            where
                T: ToValue,
            {
                fn to_value(&self) -> Value {
                    T::to_value(self)
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T> ToValue for Option<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        match self {
            Some(some) => some.to_value(),
            None => Value::Null,
        }
    }
}

// Primitive impls

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! number_value_trait {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Integer(*self as i64)
                }
            }
        )*
    };
}

number_value_trait!(i8, i16, i32, i64, i128, isize);
number_value_trait!(u8, u16, u32, u64, u128, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(*self as f64)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

// String impls

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(Shared::from(self))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(Shared::from(self.as_str()))
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::String(Shared::from(self.as_ref()))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        let mut buf = [0; 4];
        Value::String(Shared::from(&*self.encode_utf8(&mut buf)))
    }
}

// Sequence impls

impl<T> ToValue for [T]
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T, const N: usize> ToValue for [T; N]
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        self[..].to_value()
    }
}

impl<T> ToValue for Vec<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        self[..].to_value()
    }
}

impl<T> ToValue for VecDeque<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

// Map impls

macro_rules! impl_map {
    ($($tt:tt)*) => {
        $($tt)*
        {
            fn to_value(&self) -> Value {
                log::trace!("lifting map with {} entries", self.len());

                let mut output = HashMap::with_capacity(self.len());

                for (key, value) in self {
                    output.insert(key.as_key().to_owned(), value.to_value());
                }

                Value::Dict(Dict::from(output))
            }
        }
    };
}

impl_map! {
    impl<K, V, S> ToValue for std::collections::HashMap<K, V, S>
    where
        K: DictKey,
        V: ToValue,
        S: BuildHasher,
}

impl_map! {
    impl<K, V, S> ToValue for HashMap<K, V, S>
    where
        K: DictKey,
        V: ToValue,
        S: BuildHasher,
}

impl_map! {
    impl<K, V> ToValue for BTreeMap<K, V>
    where
        K: DictKey,
        V: ToValue,
}
