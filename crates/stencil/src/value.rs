use crate::{Dict, List, Shared, TypeInfo, ValueError, ValueErrorKind};
use std::fmt;

/// A dynamic value, as operated on by template expressions.
///
/// The set of variants is closed. Primitives compare by value, while lists and
/// dicts are handles that compare by identity.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value, like a missing variable or an out of bounds
    /// index.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A float.
    Float(f64),
    /// An immutable UTF-8 string.
    String(Shared<str>),
    /// An ordered sequence of values.
    List(List),
    /// A mapping from strings to values.
    Dict(Dict),
}

impl Value {
    /// Construct a string.
    pub fn string<S>(string: S) -> Self
    where
        Shared<str>: From<S>,
    {
        Self::String(Shared::from(string))
    }

    /// Construct a list.
    pub fn list(vec: Vec<Value>) -> Self {
        Self::List(List::from(vec))
    }

    /// Construct a dict.
    pub fn dict<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self::Dict(entries.into_iter().collect())
    }

    /// Test if the value is [Value::Undefined].
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Test if the value is [Value::Null].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerce the value into a boolean for use in a conditional.
    ///
    /// Undefined, null, `false`, zero, `0.0` and the empty string are falsy.
    /// Lists and dicts are always truthy, even when empty.
    ///
    /// Note that `NaN` is truthy, since it does not compare equal to `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stencil::Value;
    ///
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::list(vec![]).is_truthy());
    /// assert!(!Value::Undefined.is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined => false,
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Integer(integer) => *integer != 0,
            Self::Float(float) => *float != 0.0,
            Self::String(string) => !string.is_empty(),
            Self::List(..) => true,
            Self::Dict(..) => true,
        }
    }

    /// Test if two values are equal.
    ///
    /// * Undefined and null are only equal to themselves.
    /// * Booleans and strings are equal to values of the same type with the
    ///   same content.
    /// * Integers and floats are equal to each other if they are numerically
    ///   equal when compared as floats.
    /// * Lists and dicts are only equal to themselves, that is, if they share
    ///   the same underlying storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stencil::Value;
    ///
    /// assert!(Value::from(3).equals(&Value::from(3.0)));
    /// assert!(!Value::from(3).equals(&Value::from("3")));
    ///
    /// let a = Value::list(vec![Value::from(1)]);
    /// let b = Value::list(vec![Value::from(1)]);
    /// assert!(a.equals(&a.clone()));
    /// assert!(!a.equals(&b));
    /// ```
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::String(a), Self::String(b)) => **a == **b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) => *a as f64 == *b,
            (Self::Float(a), Self::Integer(b)) => *a == *b as f64,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::List(a), Self::List(b)) => List::ptr_eq(a, b),
            (Self::Dict(a), Self::Dict(b)) => Dict::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Render the value as text for display in a template.
    ///
    /// # Panics
    ///
    /// Rendering an undefined value is a template error and panics. Use
    /// [Value::try_render] to handle it instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stencil::Value;
    ///
    /// let value = Value::list(vec![Value::from(1), Value::from("a"), Value::from(true)]);
    /// assert_eq!("[1, a, true]", value.render());
    /// assert_eq!("1e+06", Value::from(1e6).render());
    /// ```
    pub fn render(&self) -> String {
        match self.try_render() {
            Ok(string) => string,
            Err(error) => {
                log::error!("failed to render value: {}", error);
                panic!("{}", error)
            }
        }
    }

    /// Render the value as text, failing if the value or any value nested
    /// inside of it is undefined.
    pub fn try_render(&self) -> Result<String, ValueError> {
        let mut out = String::new();
        crate::fmt::render(self, &mut out)?;
        Ok(out)
    }

    /// Get the value at the given index of a list.
    ///
    /// Out of bounds indexes produce [Value::Undefined], but indexing into
    /// anything but a list is an error.
    pub fn index(&self, index: i64) -> Result<Value, ValueError> {
        Ok(self.as_list()?.index(index))
    }

    /// Get the value bound to the given key of a dict.
    ///
    /// Missing keys produce [Value::Undefined], but looking up a key in
    /// anything but a dict is an error.
    pub fn key(&self, key: &str) -> Result<Value, ValueError> {
        Ok(self.as_dict()?.key(key))
    }

    /// Try to coerce value into a boolean.
    #[inline]
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Self::Bool(b) => Ok(*b),
            actual => Err(ValueError::from(ValueErrorKind::ExpectedBool {
                actual: actual.type_info(),
            })),
        }
    }

    /// Try to coerce value into an integer.
    #[inline]
    pub fn as_integer(&self) -> Result<i64, ValueError> {
        match self {
            Self::Integer(integer) => Ok(*integer),
            actual => Err(ValueError::from(ValueErrorKind::ExpectedInteger {
                actual: actual.type_info(),
            })),
        }
    }

    /// Try to coerce value into a float.
    #[inline]
    pub fn as_float(&self) -> Result<f64, ValueError> {
        match self {
            Self::Float(float) => Ok(*float),
            actual => Err(ValueError::from(ValueErrorKind::ExpectedFloat {
                actual: actual.type_info(),
            })),
        }
    }

    /// Try to coerce value into a string.
    #[inline]
    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Self::String(string) => Ok(string),
            actual => Err(ValueError::from(ValueErrorKind::ExpectedString {
                actual: actual.type_info(),
            })),
        }
    }

    /// Try to coerce value into a list.
    #[inline]
    pub fn as_list(&self) -> Result<&List, ValueError> {
        match self {
            Self::List(list) => Ok(list),
            actual => Err(ValueError::from(ValueErrorKind::ExpectedList {
                actual: actual.type_info(),
            })),
        }
    }

    /// Try to coerce value into a dict.
    #[inline]
    pub fn as_dict(&self) -> Result<&Dict, ValueError> {
        match self {
            Self::Dict(dict) => Ok(dict),
            actual => Err(ValueError::from(ValueErrorKind::ExpectedDict {
                actual: actual.type_info(),
            })),
        }
    }

    /// Get the type information for the current value.
    pub fn type_info(&self) -> TypeInfo {
        match self {
            Self::Undefined => TypeInfo::Undefined,
            Self::Null => TypeInfo::Null,
            Self::Bool(..) => TypeInfo::Bool,
            Self::Integer(..) => TypeInfo::Integer,
            Self::Float(..) => TypeInfo::Float,
            Self::String(..) => TypeInfo::String,
            Self::List(..) => TypeInfo::List,
            Self::Dict(..) => TypeInfo::Dict,
        }
    }
}

impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Renders the value as with [Value::render].
///
/// Undefined values can't be rendered, and will cause the formatter to error.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::fmt::render(self, &mut out).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => {
                write!(f, "undefined")?;
            }
            Value::Null => {
                write!(f, "null")?;
            }
            Value::Bool(value) => {
                write!(f, "{:?}", value)?;
            }
            Value::Integer(value) => {
                write!(f, "{:?}", value)?;
            }
            Value::Float(value) => {
                write!(f, "{:?}", value)?;
            }
            Value::String(value) => {
                write!(f, "{:?}", value)?;
            }
            Value::List(value) => {
                write!(f, "{:?}", value)?;
            }
            Value::Dict(value) => {
                write!(f, "{:?}", value)?;
            }
        }

        Ok(())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(Shared::from(string))
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(Shared::from(string))
    }
}

impl From<Vec<Value>> for Value {
    fn from(vec: Vec<Value>) -> Self {
        Self::List(List::from(vec))
    }
}

macro_rules! impl_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    };
}

impl_from!(bool, Bool);
impl_from!(i64, Integer);
impl_from!(f64, Float);
impl_from!(Shared<str>, String);
impl_from!(List, List);
impl_from!(Dict, Dict);

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_size() {
        assert! {
            std::mem::size_of::<Value>() <= 24,
        };
    }

    #[test]
    fn test_default_is_undefined() {
        assert!(Value::default().is_undefined());
    }

    #[test]
    fn test_nan() {
        let nan = Value::Float(f64::NAN);
        assert!(nan.is_truthy());
        assert!(!nan.equals(&nan));
    }
}
