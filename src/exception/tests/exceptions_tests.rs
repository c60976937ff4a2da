//! Building exception records and chains.

use exception::{
    Accessor, Category, Class, Error, Exception, Exceptions, Value,
};

#[test]
fn defaults() {
    let e = Exception::default();
    assert_eq!(e.get_class().name(), "RuntimeError");
    assert_eq!(e.get_category(), Category::Generic);
    assert_eq!(e.get_message(), Ok(None));
    assert_eq!(e.get_backtrace(), Ok(None));
    assert!(e.get_cause().is_nil());
}

#[test]
fn named_classes_are_not_generic() {
    let e = Exception::new(Class::default());
    assert_eq!(e.get_category(), Category::Other);
    assert_eq!(e.get_class().name(), "RuntimeError");
}

#[test]
fn builder() {
    let e = Exception::new(Class::new("ArgumentError"))
        .message("wrong number of arguments")
        .backtrace(["a.rb:1:in 'f'", "a.rb:2:in '<main>'"]);

    assert_eq!(e.get_message(), Ok(Some("wrong number of arguments")));
    let frames = e.get_backtrace().unwrap().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].as_str(), Some("a.rb:2:in '<main>'"));
}

#[test]
fn raising_message() {
    let e = Exception::default()
        .message_accessor(Accessor::Raises("NoMethodError".into()));

    assert!(matches!(
        e.get_message(),
        Err(Error::Raised { attribute: "message", .. })
    ));
}

#[test]
fn cyclic_causes() {
    let mut exceptions = Exceptions::new();
    let a = exceptions.insert(Exception::default().message("a"));
    let b = exceptions.insert(Exception::default().message("b").cause(a));
    exceptions.set_cause(a, Value::from(b)).unwrap();

    let a_cause = exceptions.get(a).unwrap().get_cause();
    let b_cause = exceptions.get(b).unwrap().get_cause();
    assert_eq!(a_cause.as_exception(), Some(b));
    assert_eq!(b_cause.as_exception(), Some(a));
}

#[test]
fn set_backtrace() {
    let mut exceptions = Exceptions::new();
    let a = exceptions.insert(Exception::default());
    exceptions
        .set_backtrace(a, Some(vec![Value::from("x.rb:1")]))
        .unwrap();

    let frames = exceptions.get(a).unwrap().get_backtrace().unwrap();
    assert_eq!(frames.map(<[Value]>::len), Some(1));
}

#[test]
fn missing_record() {
    let mut exceptions = Exceptions::new();
    let a = exceptions.insert(Exception::default());
    let mut other = Exceptions::new();
    assert_eq!(other.set_cause(a, Value::Nil), Err(Error::Missing(0)));
}
