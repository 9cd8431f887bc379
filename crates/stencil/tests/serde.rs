use serde::de::value::{Error, SeqDeserializer};
use serde::Deserialize;
use stencil::Value;

#[test]
fn test_deserialize_json() {
    let value: Value = serde_json::from_str(
        r#"{"name": "bob", "tags": ["a", "b"], "age": 42, "score": 1.5, "admin": false, "boss": null}"#,
    )
    .unwrap();

    assert_eq!(Value::from("bob"), value.key("name").unwrap());
    assert_eq!(Value::from(42), value.key("age").unwrap());
    assert_eq!(Value::from(1.5), value.key("score").unwrap());
    assert!(!value.key("admin").unwrap().is_truthy());
    assert!(value.key("boss").unwrap().is_null());
    assert!(value.key("missing").unwrap().is_undefined());
    assert_eq!("[a, b]", value.key("tags").unwrap().render());
}

#[test]
fn test_deserialize_unsigned_wraps() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert!(matches!(value, Value::Integer(-1)));
}

#[test]
fn test_serialize_json() {
    let value = Value::dict([
        (String::from("b"), Value::list(vec![Value::from(1), Value::Null])),
        (String::from("a"), Value::from("x")),
        (String::from("c"), Value::from(2.5)),
    ]);

    assert_eq!(
        r#"{"a":"x","b":[1,null],"c":2.5}"#,
        serde_json::to_string(&value).unwrap()
    );
}

#[test]
fn test_serialize_undefined() {
    assert!(serde_json::to_string(&Value::Undefined).is_err());
    assert!(serde_json::to_string(&Value::list(vec![Value::Undefined])).is_err());
}

#[test]
fn test_value_is_lifted_as_itself() {
    let value: Value = serde_json::from_str(r#"{"a": [1, 2]}"#).unwrap();
    let lifted = stencil::lift(&value);

    assert_eq!("{a: [1, 2]}", lifted.render());
}

#[test]
fn test_deserialize_oversized_size_hint() {
    struct Claims;

    impl Iterator for Claims {
        type Item = i64;

        fn next(&mut self) -> Option<i64> {
            None
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX / 2, Some(usize::MAX / 2))
        }
    }

    let value = Value::deserialize(SeqDeserializer::<_, Error>::new(Claims)).unwrap();
    assert!(value.as_list().unwrap().is_empty());

    let value = Value::deserialize(SeqDeserializer::<_, Error>::new(vec![1i64, 2].into_iter()))
        .unwrap();
    assert_eq!("[1, 2]", value.render());
}
