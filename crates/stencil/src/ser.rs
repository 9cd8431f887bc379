//! Lifting of native data into values through the serde data model.

use crate::collections::HashMap;
use crate::{Dict, List, Shared, Value, ValueError, ValueErrorKind};
use serde::ser::{self, Impossible, Serialize};

/// Convert any serializable native value into a [Value].
///
/// * Integers of any width become [Value::Integer], values outside of the
///   range of an `i64` are truncated.
/// * `None` and `()` become [Value::Null], `Some` and newtype wrappers are
///   looked through.
/// * Sequences, tuples and tuple structs become [Value::List].
/// * Maps become [Value::Dict], and must have string keys.
/// * Structs become [Value::Dict], keyed by field name with the first
///   character lower-cased.
/// * Unit enum variants become the name of the variant, any other kind of
///   enum variant is unsupported.
///
/// # Errors
///
/// Errors if a map has keys which are not strings, or if the value contains
/// a kind of data which has no counterpart in the value model.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[allow(non_snake_case)]
/// struct User {
///     UserName: String,
///     age: u32,
/// }
///
/// let user = User { UserName: String::from("bob"), age: 42 };
/// let value = stencil::to_value(&user)?;
///
/// assert_eq!(stencil::Value::from("bob"), value.key("userName")?);
/// assert_eq!(stencil::Value::from(42), value.key("age")?);
/// # Ok::<_, stencil::ValueError>(())
/// ```
pub fn to_value<T: ?Sized>(value: &T) -> Result<Value, ValueError>
where
    T: Serialize,
{
    value.serialize(Serializer)
}

/// Convert any serializable native value into a [Value], treating failure as
/// a fatal error.
///
/// # Panics
///
/// Supplying data which can't be lifted, like a map without string keys, is a
/// programming error and panics. See [to_value] for the fallible version.
///
/// # Examples
///
/// ```rust
/// let value = stencil::lift(&[1, 2, 3]);
/// assert_eq!("[1, 2, 3]", value.render());
/// ```
pub fn lift<T: ?Sized>(value: &T) -> Value
where
    T: Serialize,
{
    match to_value(value) {
        Ok(value) => value,
        Err(error) => {
            log::error!("failed to lift value: {}", error);
            panic!("{}", error)
        }
    }
}

/// Lower-case the first character of a field name, so that `UserName` becomes
/// `userName`.
pub(crate) fn field_key(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => {
            let mut key = String::with_capacity(name.len());
            // Only the leading char of a multi-char mapping is kept, so that
            // `İd` becomes `id`.
            key.push(first.to_lowercase().next().unwrap_or(first));
            key.extend(chars);
            key
        }
        None => String::new(),
    }
}

fn unsupported(kind: String) -> ValueError {
    ValueError::from(ValueErrorKind::Unsupported { kind })
}

/// Serializer producing values.
pub(crate) struct Serializer;

impl ser::Serializer for Serializer {
    type Ok = Value;
    type Error = ValueError;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;
    type SerializeTupleVariant = Impossible<Value, ValueError>;
    type SerializeMap = SerializeDict;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = Impossible<Value, ValueError>;

    #[inline]
    fn serialize_bool(self, v: bool) -> Result<Value, ValueError> {
        Ok(Value::Bool(v))
    }

    #[inline]
    fn serialize_i8(self, v: i8) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_i16(self, v: i16) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_i32(self, v: i32) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_i64(self, v: i64) -> Result<Value, ValueError> {
        Ok(Value::Integer(v))
    }

    #[inline]
    fn serialize_i128(self, v: i128) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_u8(self, v: u8) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_u16(self, v: u16) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_u32(self, v: u32) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_u64(self, v: u64) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_u128(self, v: u128) -> Result<Value, ValueError> {
        Ok(Value::Integer(v as i64))
    }

    #[inline]
    fn serialize_f32(self, v: f32) -> Result<Value, ValueError> {
        Ok(Value::Float(v as f64))
    }

    #[inline]
    fn serialize_f64(self, v: f64) -> Result<Value, ValueError> {
        Ok(Value::Float(v))
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<Value, ValueError> {
        let mut buf = [0; 4];
        Ok(Value::String(Shared::from(&*v.encode_utf8(&mut buf))))
    }

    #[inline]
    fn serialize_str(self, v: &str) -> Result<Value, ValueError> {
        Ok(Value::String(Shared::from(v)))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, ValueError> {
        Ok(Value::List(v.iter().map(|&b| Value::Integer(b as i64)).collect()))
    }

    #[inline]
    fn serialize_none(self) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    #[inline]
    fn serialize_some<T: ?Sized>(self, value: &T) -> Result<Value, ValueError>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    #[inline]
    fn serialize_unit(self) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Value, ValueError> {
        Ok(Value::Dict(Dict::new()))
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
    ) -> Result<Value, ValueError> {
        Ok(Value::String(Shared::from(variant)))
    }

    #[inline]
    fn serialize_newtype_struct<T: ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<Value, ValueError>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        name: &'static str,
        _: u32,
        variant: &'static str,
        _: &T,
    ) -> Result<Value, ValueError>
    where
        T: Serialize,
    {
        Err(unsupported(format!("newtype variant `{}::{}`", name, variant)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeList, ValueError> {
        Ok(SerializeList {
            vec: Vec::with_capacity(len.unwrap_or_default()),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeList, ValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        len: usize,
    ) -> Result<SerializeList, ValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, ValueError> {
        Err(unsupported(format!("tuple variant `{}::{}`", name, variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeDict, ValueError> {
        log::trace!("lifting map with {:?} entries", len);

        Ok(SerializeDict {
            map: HashMap::with_capacity(len.unwrap_or_default()),
            next_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<SerializeRecord, ValueError> {
        log::trace!("lifting struct `{}` with {} fields", name, len);

        Ok(SerializeRecord {
            map: HashMap::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, ValueError> {
        Err(unsupported(format!("struct variant `{}::{}`", name, variant)))
    }
}

pub(crate) struct SerializeList {
    vec: Vec<Value>,
}

impl ser::SerializeSeq for SerializeList {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: ?Sized>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize,
    {
        self.vec.push(value.serialize(Serializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::List(List::from(self.vec)))
    }
}

impl ser::SerializeTuple for SerializeList {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: ?Sized>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeList {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: ?Sized>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        ser::SerializeSeq::end(self)
    }
}

pub(crate) struct SerializeDict {
    map: HashMap<String, Value>,
    next_key: Option<String>,
}

impl ser::SerializeMap for SerializeDict {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_key<T: ?Sized>(&mut self, key: &T) -> Result<(), ValueError>
    where
        T: Serialize,
    {
        self.next_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize,
    {
        let key = match self.next_key.take() {
            Some(key) => key,
            None => {
                return Err(ValueError::from(ValueErrorKind::Custom {
                    message: String::from("map value serialized before its key"),
                }))
            }
        };

        self.map.insert(key, value.serialize(Serializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Dict(Dict::from(self.map)))
    }
}

pub(crate) struct SerializeRecord {
    map: HashMap<String, Value>,
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ValueError>
    where
        T: Serialize,
    {
        self.map.insert(field_key(key), value.serialize(Serializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Dict(Dict::from(self.map)))
    }
}

fn non_string_key(actual: &'static str) -> ValueError {
    ValueError::from(ValueErrorKind::NonStringKey { actual })
}

/// Serializer for map keys, which only accepts strings.
struct KeySerializer;

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = ValueError;

    type SerializeSeq = Impossible<String, ValueError>;
    type SerializeTuple = Impossible<String, ValueError>;
    type SerializeTupleStruct = Impossible<String, ValueError>;
    type SerializeTupleVariant = Impossible<String, ValueError>;
    type SerializeMap = Impossible<String, ValueError>;
    type SerializeStruct = Impossible<String, ValueError>;
    type SerializeStructVariant = Impossible<String, ValueError>;

    #[inline]
    fn serialize_str(self, v: &str) -> Result<String, ValueError> {
        Ok(v.to_owned())
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<String, ValueError> {
        Ok(v.to_string())
    }

    #[inline]
    fn serialize_newtype_struct<T: ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<String, ValueError>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, _: bool) -> Result<String, ValueError> {
        Err(non_string_key("bool"))
    }

    fn serialize_i8(self, _: i8) -> Result<String, ValueError> {
        Err(non_string_key("i8"))
    }

    fn serialize_i16(self, _: i16) -> Result<String, ValueError> {
        Err(non_string_key("i16"))
    }

    fn serialize_i32(self, _: i32) -> Result<String, ValueError> {
        Err(non_string_key("i32"))
    }

    fn serialize_i64(self, _: i64) -> Result<String, ValueError> {
        Err(non_string_key("i64"))
    }

    fn serialize_i128(self, _: i128) -> Result<String, ValueError> {
        Err(non_string_key("i128"))
    }

    fn serialize_u8(self, _: u8) -> Result<String, ValueError> {
        Err(non_string_key("u8"))
    }

    fn serialize_u16(self, _: u16) -> Result<String, ValueError> {
        Err(non_string_key("u16"))
    }

    fn serialize_u32(self, _: u32) -> Result<String, ValueError> {
        Err(non_string_key("u32"))
    }

    fn serialize_u64(self, _: u64) -> Result<String, ValueError> {
        Err(non_string_key("u64"))
    }

    fn serialize_u128(self, _: u128) -> Result<String, ValueError> {
        Err(non_string_key("u128"))
    }

    fn serialize_f32(self, _: f32) -> Result<String, ValueError> {
        Err(non_string_key("f32"))
    }

    fn serialize_f64(self, _: f64) -> Result<String, ValueError> {
        Err(non_string_key("f64"))
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<String, ValueError> {
        Err(non_string_key("bytes"))
    }

    fn serialize_none(self) -> Result<String, ValueError> {
        Err(non_string_key("none"))
    }

    fn serialize_some<T: ?Sized>(self, _: &T) -> Result<String, ValueError>
    where
        T: Serialize,
    {
        Err(non_string_key("option"))
    }

    fn serialize_unit(self) -> Result<String, ValueError> {
        Err(non_string_key("unit"))
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<String, ValueError> {
        Err(non_string_key("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<String, ValueError> {
        Err(non_string_key("enum"))
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<String, ValueError>
    where
        T: Serialize,
    {
        Err(non_string_key("enum"))
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, ValueError> {
        Err(non_string_key("sequence"))
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, ValueError> {
        Err(non_string_key("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, ValueError> {
        Err(non_string_key("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, ValueError> {
        Err(non_string_key("enum"))
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, ValueError> {
        Err(non_string_key("map"))
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStruct, ValueError> {
        Err(non_string_key("struct"))
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, ValueError> {
        Err(non_string_key("enum"))
    }
}

#[cfg(test)]
mod tests {
    use super::field_key;

    #[test]
    fn test_field_key() {
        assert_eq!(field_key("UserName"), "userName");
        assert_eq!(field_key("userName"), "userName");
        assert_eq!(field_key("URL"), "uRL");
        assert_eq!(field_key("Ärger"), "ärger");
        assert_eq!(field_key("İd"), "id");
        assert_eq!(field_key(""), "");
    }
}
