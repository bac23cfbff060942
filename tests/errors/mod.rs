use causal_rail::errors::{ExceptionError, InvalidOperationError, MessageError, NotFoundError};
use causal_rail::traits::ErrorCapability;
use std::error::Error;
use std::io;

#[test]
fn message_error_renders_its_message() {
    let error = MessageError::new("plain");
    assert_eq!(error.message(), "plain");
    assert_eq!(error.kind(), "message");
    assert_eq!(error.to_string(), "plain");

    let owned = MessageError::new(format!("id {}", 3));
    assert_eq!(owned.message(), "id 3");
}

#[test]
fn not_found_with_and_without_key() {
    let bare = NotFoundError::new("config file");
    assert_eq!(bare.message(), "config file not found");
    assert_eq!(bare.key(), None);

    let keyed = NotFoundError::new("user").with_key("u-1");
    assert_eq!(keyed.message(), "user `u-1` not found");
    assert_eq!(keyed.resource(), "user");
    assert_eq!(keyed.key(), Some("u-1"));
    assert_eq!(keyed.kind(), "not_found");
}

#[test]
fn invalid_operation_names_operation_and_reason() {
    let error = InvalidOperationError::new("commit", "transaction already rolled back");
    assert_eq!(error.message(), "cannot commit: transaction already rolled back");
    assert_eq!(error.operation(), "commit");
    assert_eq!(error.reason(), "transaction already rolled back");
    assert_eq!(error.kind(), "invalid_operation");
}

#[test]
fn exception_error_keeps_type_message_and_original() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let adapted = ExceptionError::new(io_err);

    assert_eq!(adapted.type_name(), "Error");
    assert_eq!(adapted.message(), "access denied");
    assert_eq!(adapted.kind(), "exception");
    assert_eq!(adapted.to_string(), "Error: access denied");

    let original = adapted.downcast_original::<io::Error>().unwrap();
    assert_eq!(original.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(adapted.source().unwrap().to_string(), "access denied");
}

#[test]
fn exception_error_from_boxed() {
    let boxed: Box<dyn Error + Send + Sync> = "not a number".parse::<f64>().unwrap_err().into();
    let adapted = ExceptionError::from_boxed(boxed);

    assert_eq!(adapted.type_name(), "dyn Error");
    assert_eq!(adapted.message(), "invalid float literal");
    assert!(adapted.downcast_original::<std::num::ParseFloatError>().is_some());
}

#[test]
fn exception_error_falls_back_to_type_name_for_empty_messages() {
    #[derive(Debug)]
    struct Silent;

    impl std::fmt::Display for Silent {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    impl Error for Silent {}

    let adapted = ExceptionError::new(Silent);
    assert_eq!(adapted.message(), "Silent");
}

#[test]
fn empty_messages_are_never_reported() {
    assert_eq!(MessageError::new("").message(), "unspecified error");
    assert_eq!(MessageError::new("").to_string(), "unspecified error");
    assert_eq!("".message(), "unspecified error");
    assert_eq!(String::new().message(), "unspecified error");
}

#[test]
fn exception_error_from_boxed_named() {
    let boxed: Box<dyn Error + Send + Sync> = io::Error::new(io::ErrorKind::Other, "gone").into();
    let adapted = ExceptionError::from_boxed_named(boxed, "io::Error");

    assert_eq!(adapted.type_name(), "io::Error");
    assert_eq!(adapted.to_string(), "io::Error: gone");
    assert!(adapted.downcast_original::<io::Error>().is_some());
}
