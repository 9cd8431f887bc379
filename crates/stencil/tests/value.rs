use stencil::{Dict, List, TypeInfo, Value, ValueErrorKind};

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(List: Send, Sync);
static_assertions::assert_impl_all!(Dict: Send, Sync);

fn list(values: Vec<Value>) -> Value {
    Value::list(values)
}

fn dict(entries: &[(&str, Value)]) -> Value {
    Value::dict(
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone())),
    )
}

#[test]
fn test_truthy() {
    assert!(!Value::Undefined.is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Integer(0).is_truthy());
    assert!(Value::Integer(-1).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(!Value::Float(-0.0).is_truthy());
    assert!(Value::Float(0.5).is_truthy());
    assert!(Value::Float(f64::NAN).is_truthy());
    assert!(!Value::from("").is_truthy());
    assert!(Value::from("0").is_truthy());
    assert!(list(vec![]).is_truthy());
    assert!(dict(&[]).is_truthy());
}

#[test]
fn test_numeric_equality() {
    assert!(Value::from(3).equals(&Value::from(3.0)));
    assert!(Value::from(3.0).equals(&Value::from(3)));
    assert!(!Value::from(3).equals(&Value::from(3.5)));
    assert!(!Value::from(3).equals(&Value::from("3")));
    assert!(!Value::from("3").equals(&Value::from(3)));
    assert_eq!(Value::from(3), Value::from(3));
    assert_ne!(Value::from(3), Value::from(4));
}

#[test]
fn test_primitive_equality() {
    assert_eq!(Value::Undefined, Value::Undefined);
    assert_eq!(Value::Null, Value::Null);
    assert_ne!(Value::Undefined, Value::Null);
    assert_ne!(Value::Null, Value::Undefined);
    assert_eq!(Value::from(true), Value::from(true));
    assert_ne!(Value::from(true), Value::from(false));
    assert_ne!(Value::from(true), Value::from(1));
    assert_eq!(Value::from("abc"), Value::from(String::from("abc")));
    assert_eq!(Value::from("abc"), Value::string("abc"));
    assert_ne!(Value::from("abc"), Value::from("abd"));
    assert_ne!(Value::from(0), Value::Null);
    assert_ne!(Value::from(""), Value::Undefined);
}

#[test]
fn test_composite_identity() {
    let a = list(vec![Value::from(1), Value::from(2)]);
    let b = list(vec![Value::from(1), Value::from(2)]);

    assert!(a.equals(&a));
    assert!(a.equals(&a.clone()));
    assert!(!a.equals(&b));

    let a = dict(&[("a", Value::from(1))]);
    let b = dict(&[("a", Value::from(1))]);

    assert!(a.equals(&a.clone()));
    assert!(!a.equals(&b));

    let empty = list(vec![]);
    assert!(!empty.equals(&list(vec![])));
    assert!(!list(vec![]).equals(&dict(&[])));
}

#[test]
fn test_render() {
    assert_eq!("null", Value::Null.render());
    assert_eq!("true", Value::from(true).render());
    assert_eq!("false", Value::from(false).render());
    assert_eq!("-42", Value::from(-42).render());
    assert_eq!("9223372036854775807", Value::from(i64::MAX).render());
    assert_eq!("3.14", Value::from(3.14).render());
    assert_eq!("3", Value::from(3.0).render());
    assert_eq!("hello", Value::from("hello").render());
    assert_eq!(
        "[1, a, true]",
        list(vec![Value::from(1), Value::from("a"), Value::from(true)]).render()
    );
    assert_eq!("[]", list(vec![]).render());
    assert_eq!("{}", dict(&[]).render());
    assert_eq!(
        "{a: 1, b: [null], c: {d: x}}",
        dict(&[
            ("c", dict(&[("d", Value::from("x"))])),
            ("a", Value::from(1)),
            ("b", list(vec![Value::Null])),
        ])
        .render()
    );
}

#[test]
fn test_render_float_round_trip() {
    let rendered = Value::from(3.14).render();
    assert_eq!(rendered.parse::<f64>().unwrap(), 3.14);

    let rendered = Value::from(0.1 + 0.2).render();
    assert_eq!(rendered.parse::<f64>().unwrap(), 0.1 + 0.2);
}

#[test]
fn test_display() {
    assert_eq!("[1, 2.5]", list(vec![Value::from(1), Value::from(2.5)]).to_string());

    let mut out = String::new();
    assert!(std::fmt::write(&mut out, format_args!("{}", Value::Undefined)).is_err());
}

#[test]
#[should_panic(expected = "attempted to coerce an undefined value into a string")]
fn test_render_undefined() {
    Value::Undefined.render();
}

#[test]
fn test_try_render_undefined() {
    let error = Value::Undefined.try_render().unwrap_err();
    assert!(matches!(error.kind(), ValueErrorKind::RenderUndefined));

    let nested = list(vec![Value::from(1), Value::Undefined]);
    let error = nested.try_render().unwrap_err();
    assert!(matches!(error.kind(), ValueErrorKind::RenderUndefined));
}

#[test]
fn test_index() {
    let value = list(vec![Value::from(10), Value::from(20)]);
    let list = value.as_list().unwrap();

    assert_eq!(Value::from(10), list.index(0));
    assert_eq!(Value::from(20), list.index(1));
    assert!(list.index(2).is_undefined());
    assert!(list.index(5).is_undefined());
    assert!(list.index(-1).is_undefined());
    assert!(list.index(i64::MIN).is_undefined());
    assert!(!list.index(5).is_truthy());

    assert_eq!(Value::from(20), value.index(1).unwrap());
    assert!(value.index(7).unwrap().is_undefined());
}

#[test]
fn test_key() {
    let value = dict(&[("a", Value::from(1)), ("n", Value::Null)]);
    let dict = value.as_dict().unwrap();

    assert_eq!(Value::from(1), dict.key("a"));
    assert!(dict.key("n").is_null());
    assert!(dict.key("missing").is_undefined());
    assert!(!dict.key("missing").is_truthy());

    assert_eq!(Value::from(1), value.key("a").unwrap());
    assert!(value.key("missing").unwrap().is_undefined());
}

#[test]
fn test_accessor_on_wrong_variant() {
    let error = Value::Undefined.index(0).unwrap_err();

    match error.kind() {
        ValueErrorKind::ExpectedList { actual } => assert_eq!(*actual, TypeInfo::Undefined),
        actual => panic!("expected list error but got: {:?}", actual),
    }

    let error = Value::from(1).key("a").unwrap_err();

    match error.kind() {
        ValueErrorKind::ExpectedDict { actual } => assert_eq!(*actual, TypeInfo::Integer),
        actual => panic!("expected dict error but got: {:?}", actual),
    }

    assert_eq!(
        "expected a map but found `type(int)`",
        Value::from(1).key("a").unwrap_err().to_string()
    );
}

#[test]
fn test_typed_access() {
    assert_eq!(true, Value::from(true).as_bool().unwrap());
    assert_eq!(7, Value::from(7).as_integer().unwrap());
    assert_eq!(1.5, Value::from(1.5).as_float().unwrap());
    assert_eq!("x", Value::from("x").as_str().unwrap());
    assert!(Value::from(1).as_float().is_err());
    assert!(Value::Null.as_str().is_err());
    assert!(Value::from("x").as_list().is_err());
}

#[test]
fn test_type_info() {
    assert_eq!("undefined", Value::Undefined.type_info().name());
    assert_eq!("null", Value::Null.type_info().name());
    assert_eq!("bool", Value::from(true).type_info().name());
    assert_eq!("int", Value::from(1).type_info().name());
    assert_eq!("float", Value::from(1.0).type_info().name());
    assert_eq!("string", Value::from("").type_info().name());
    assert_eq!("list", list(vec![]).type_info().name());
    assert_eq!("map", dict(&[]).type_info().name());
}

#[test]
fn test_debug() {
    let value = list(vec![Value::Undefined, Value::Null, Value::from("a")]);
    assert_eq!("[undefined, null, \"a\"]", format!("{:?}", value));
}
