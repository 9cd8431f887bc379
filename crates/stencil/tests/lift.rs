use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use stencil::{ToValue, Value, ValueErrorKind};

#[test]
fn test_lift_primitives() {
    let value = stencil::lift(&0);
    assert!(matches!(value, Value::Integer(0)));
    assert!(!value.is_truthy());

    let value = stencil::lift("");
    assert_eq!(Value::from(""), value);
    assert!(!value.is_truthy());

    assert!(matches!(stencil::lift(&true), Value::Bool(true)));
    assert!(matches!(stencil::lift(&-7i8), Value::Integer(-7)));
    assert!(matches!(stencil::lift(&65535u16), Value::Integer(65535)));
    assert!(matches!(stencil::lift(&1.5f32), Value::Float(f) if f == 1.5));
    assert!(matches!(stencil::lift(&2.25f64), Value::Float(f) if f == 2.25));
    assert_eq!(Value::from("x"), stencil::lift(&'x'));
    assert_eq!(Value::from("abc"), stencil::lift(&String::from("abc")));
}

#[test]
fn test_lift_unsigned_wraps() {
    assert!(matches!(stencil::lift(&u64::MAX), Value::Integer(-1)));
    assert!(matches!(
        stencil::lift(&(i64::MAX as u64 + 1)),
        Value::Integer(i64::MIN)
    ));
    assert!(matches!(stencil::lift(&u128::MAX), Value::Integer(-1)));
}

#[test]
fn test_lift_null() {
    assert!(stencil::lift(&()).is_null());
    assert!(stencil::lift(&None::<i32>).is_null());
    assert!(stencil::lift(&Some(Box::new(None::<String>))).is_null());
    assert_eq!(Value::from(3), stencil::lift(&Some(Some(3))));
}

#[test]
fn test_lift_indirection() {
    let inner = Arc::new(Box::new(Rc::new(5)));
    assert_eq!(Value::from(5), stencil::lift(&&&inner));

    #[derive(Serialize)]
    struct Wrapper(u32);

    assert_eq!(Value::from(9), stencil::lift(&Wrapper(9)));
}

#[test]
fn test_lift_sequences() {
    let value = stencil::lift(&vec![1, 2, 3]);
    assert_eq!("[1, 2, 3]", value.render());

    let value = stencil::lift(&Vec::<i32>::new());
    let list = value.as_list().unwrap();
    assert!(list.is_empty());
    assert!(value.is_truthy());

    let value = stencil::lift(&(1, "a", true));
    assert_eq!("[1, a, true]", value.render());

    let value = stencil::lift(&vec![vec![1], vec![]]);
    assert_eq!("[[1], []]", value.render());
}

#[test]
fn test_lift_identity() {
    let l = stencil::lift(&[1, 2]);
    assert!(l.equals(&l));

    let l1 = stencil::lift(&[1, 2]);
    let l2 = stencil::lift(&[1, 2]);
    assert!(!l1.equals(&l2));
}

#[test]
fn test_lift_map() {
    let mut map = HashMap::new();
    map.insert("a", 1);
    map.insert("b", 2);

    let value = stencil::lift(&map);
    assert_eq!(Value::from(1), value.key("a").unwrap());
    assert!(value.key("missing").unwrap().is_undefined());
    assert_eq!("{a: 1, b: 2}", value.render());

    let mut map = BTreeMap::new();
    map.insert(String::from("k"), vec![Some(1.5), None]);
    assert_eq!("{k: [1.5, null]}", stencil::lift(&map).render());
}

#[test]
fn test_lift_map_non_string_key() {
    let mut map = HashMap::new();
    map.insert(1, "one");

    let error = stencil::to_value(&map).unwrap_err();

    match error.kind() {
        ValueErrorKind::NonStringKey { actual } => assert_eq!(*actual, "i32"),
        actual => panic!("expected non-string key error but got: {:?}", actual),
    }
}

#[test]
#[should_panic(expected = "map keys must be strings")]
fn test_lift_map_non_string_key_is_fatal() {
    let mut map = BTreeMap::new();
    map.insert(true, 1);
    stencil::lift(&map);
}

#[test]
fn test_lift_struct() {
    #[derive(Serialize)]
    #[allow(non_snake_case)]
    struct Address {
        City: String,
        zip: Option<String>,
    }

    #[derive(Serialize)]
    #[allow(non_snake_case)]
    struct User {
        UserName: String,
        Age: u8,
        Address: Address,
        #[serde(skip)]
        #[allow(unused)]
        Password: String,
    }

    let user = User {
        UserName: String::from("bob"),
        Age: 42,
        Address: Address {
            City: String::from("Oslo"),
            zip: None,
        },
        Password: String::from("hunter2"),
    };

    let value = stencil::lift(&user);
    let dict = value.as_dict().unwrap();

    assert_eq!(3, dict.len());
    assert_eq!(Value::from("bob"), dict.key("userName"));
    assert_eq!(Value::from(42), dict.key("age"));
    assert!(dict.key("UserName").is_undefined());
    assert!(dict.key("password").is_undefined());

    let address = dict.key("address");
    assert_eq!(Value::from("Oslo"), address.key("city").unwrap());
    assert!(address.key("zip").unwrap().is_null());

    assert_eq!(
        "{address: {city: Oslo, zip: null}, age: 42, userName: bob}",
        value.render()
    );
}

#[test]
fn test_lift_unit_struct_and_enum() {
    #[derive(Serialize)]
    struct Empty;

    #[derive(Serialize)]
    enum Color {
        Red,
        #[allow(unused)]
        Custom(u8, u8, u8),
    }

    let value = stencil::lift(&Empty);
    assert!(value.as_dict().unwrap().is_empty());

    assert_eq!(Value::from("Red"), stencil::lift(&Color::Red));
}

#[test]
fn test_lift_unsupported() {
    #[derive(Serialize)]
    enum Shape {
        Circle { radius: f64 },
        Line(f64),
    }

    let error = stencil::to_value(&Shape::Circle { radius: 1.0 }).unwrap_err();
    assert!(matches!(error.kind(), ValueErrorKind::Unsupported { .. }));
    assert_eq!(
        "unexpected data type: struct variant `Shape::Circle`",
        error.to_string()
    );

    let error = stencil::to_value(&vec![Shape::Line(1.0)]).unwrap_err();
    assert!(matches!(error.kind(), ValueErrorKind::Unsupported { .. }));
}

#[test]
#[should_panic(expected = "unexpected data type")]
fn test_lift_unsupported_is_fatal() {
    #[derive(Serialize)]
    enum Tagged {
        Value(i32),
    }

    stencil::lift(&Tagged::Value(1));
}

#[test]
fn test_lift_bytes() {
    let bytes = serde_bytes_like(&[1, 2, 255]);
    assert_eq!("[1, 2, 255]", bytes.render());
}

fn serde_bytes_like(bytes: &[u8]) -> Value {
    struct Bytes<'a>(&'a [u8]);

    impl Serialize for Bytes<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_bytes(self.0)
        }
    }

    stencil::lift(&Bytes(bytes))
}

#[test]
fn test_to_value_trait() {
    assert!(matches!(0u64.to_value(), Value::Integer(0)));
    assert!(matches!(u64::MAX.to_value(), Value::Integer(-1)));
    assert!(matches!(2.5f32.to_value(), Value::Float(f) if f == 2.5));
    assert!(().to_value().is_null());
    assert!(None::<&str>.to_value().is_null());
    assert_eq!(Value::from("a"), "a".to_value());
    assert_eq!(Value::from("é"), 'é'.to_value());
    assert_eq!(Value::from(4), Box::new(Rc::new(4)).to_value());

    let value = vec![Some("x"), None].to_value();
    assert_eq!("[x, null]", value.render());

    let value = [[1, 2], [3, 4]].to_value();
    assert_eq!("[[1, 2], [3, 4]]", value.render());

    let mut map = HashMap::new();
    map.insert(String::from("b"), vec![true]);
    map.insert(String::from("a"), vec![]);
    assert_eq!("{a: [], b: [true]}", map.to_value().render());

    let mut map = stencil::collections::HashMap::new();
    map.insert(Arc::<str>::from("k"), 1);
    assert_eq!("{k: 1}", map.to_value().render());
}

#[test]
fn test_to_value_shares_existing_values() {
    let list = stencil::lift(&[1]);
    let nested = vec![list.clone(), list.clone()].to_value();
    let nested = nested.as_list().unwrap();

    assert!(nested.index(0).equals(&nested.index(1)));
    assert!(nested.index(0).equals(&list));
}

#[test]
fn test_lift_key_lowercase_is_single_char() {
    #[derive(Serialize)]
    #[allow(non_snake_case)]
    struct Record {
        İd: i32,
    }

    let value = stencil::lift(&Record { İd: 1 });
    assert_eq!(Value::from(1), value.key("id").unwrap());
    assert_eq!("{id: 1}", value.render());
}

#[test]
fn test_lift_hashbrown_map() {
    let mut map = stencil::collections::HashMap::new();
    map.insert(String::from("b"), vec![1, 2]);
    map.insert(String::from("a"), Vec::new());

    let value = stencil::lift(&map);
    assert_eq!("{a: [], b: [1, 2]}", value.render());

    let mut map = stencil::collections::HashMap::new();
    map.insert(1u8, "one");
    let error = stencil::to_value(&map).unwrap_err();
    assert!(matches!(error.kind(), ValueErrorKind::NonStringKey { actual: "u8" }));
}
