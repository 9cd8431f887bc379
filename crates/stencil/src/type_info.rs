use std::fmt;

/// Type information about a value, that can be printed for human consumption
/// through its [Display][fmt::Display] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeInfo {
    /// The type of [Value::Undefined][crate::Value::Undefined].
    Undefined,
    /// The type of [Value::Null][crate::Value::Null].
    Null,
    /// The type of [Value::Bool][crate::Value::Bool].
    Bool,
    /// The type of [Value::Integer][crate::Value::Integer].
    Integer,
    /// The type of [Value::Float][crate::Value::Float].
    Float,
    /// The type of [Value::String][crate::Value::String].
    String,
    /// The type of [Value::List][crate::Value::List].
    List,
    /// The type of [Value::Dict][crate::Value::Dict].
    Dict,
}

impl TypeInfo {
    /// The name of the type as it appears in templates.
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Dict => "map",
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "type({})", self.name())
    }
}
