use crate::TypeInfo;
use serde::ser;
use std::fmt;
use thiserror::Error;

/// Errors raised when interacting with or constructing a value.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ValueError {
    kind: Box<ValueErrorKind>,
}

impl ValueError {
    /// Inspect the value error kind.
    pub fn kind(&self) -> &ValueErrorKind {
        &self.kind
    }

    /// Convert into the value error kind.
    pub fn into_kind(self) -> ValueErrorKind {
        *self.kind
    }
}

impl<E> From<E> for ValueError
where
    ValueErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            kind: Box::new(ValueErrorKind::from(err)),
        }
    }
}

impl ser::Error for ValueError {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::from(ValueErrorKind::Custom {
            message: msg.to_string(),
        })
    }
}

/// The kind of a [ValueError].
#[derive(Debug, Error)]
pub enum ValueErrorKind {
    /// Error raised when we expected a boolean value.
    #[error("expected boolean, but found `{actual}`")]
    ExpectedBool {
        /// The actual type found.
        actual: TypeInfo,
    },
    /// Error raised when an integer value was expected.
    #[error("expected integer, but found `{actual}`")]
    ExpectedInteger {
        /// The actual type found.
        actual: TypeInfo,
    },
    /// Error raised when we expected a float value.
    #[error("expected float, but found `{actual}`")]
    ExpectedFloat {
        /// The actual type found.
        actual: TypeInfo,
    },
    /// Error raised when we expected a string.
    #[error("expected a string but found `{actual}`")]
    ExpectedString {
        /// The actual type observed instead.
        actual: TypeInfo,
    },
    /// Error raised when we expected a list.
    #[error("expected a list but found `{actual}`")]
    ExpectedList {
        /// The actual type observed instead.
        actual: TypeInfo,
    },
    /// Error raised when we expected a map.
    #[error("expected a map but found `{actual}`")]
    ExpectedDict {
        /// The actual type observed instead.
        actual: TypeInfo,
    },
    /// An undefined value was coerced into a string.
    #[error("attempted to coerce an undefined value into a string")]
    RenderUndefined,
    /// A mapping whose keys are not strings was lifted.
    #[error("map keys must be strings, but found a key of kind `{actual}`")]
    NonStringKey {
        /// The kind of the offending key.
        actual: &'static str,
    },
    /// A native value with no counterpart in the value model was lifted.
    #[error("unexpected data type: {kind}")]
    Unsupported {
        /// Description of the unsupported kind.
        kind: String,
    },
    /// A custom error raised by a `Serialize` implementation.
    #[error("{message}")]
    Custom {
        /// The error message.
        message: String,
    },
}
