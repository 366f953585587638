use anyhow::Result;
use nullsafe_commons::{
    illegal_argument_exception, illegal_state_exception, precondition, require,
    require_non_blank, require_non_empty, require_some, runtime_exception, CommonsError,
    ErrorCategory,
};
use std::fmt::Display;

struct Connection {
    open: bool,
}

impl Connection {
    fn send(&self, payload: &[u8]) -> nullsafe_commons::Result<usize> {
        nullsafe_commons::precondition!(self.open, "connection is closed")?;
        let payload = require_non_empty(Some(payload), "payload is empty", &[])?;
        Ok(payload.len())
    }
}

#[test]
fn test_argument_and_state_checks_use_distinct_categories() {
    let err = require(|| false, "bad {}", &[&"argument"]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Argument);

    let err = precondition(|| false, "bad {}", &[&"state"]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::State);
}

#[test]
fn test_checks_inside_methods() -> Result<()> {
    let open = Connection { open: true };
    assert_eq!(open.send(b"ping")?, 4);

    let err = open.send(b"").unwrap_err();
    assert_eq!(err, CommonsError::illegal_argument("payload is empty"));

    let closed = Connection { open: false };
    let err = closed.send(b"ping").unwrap_err();
    assert_eq!(err, CommonsError::illegal_state("connection is closed"));
    Ok(())
}

#[test]
fn test_require_macro_formats_arguments() {
    let (min, actual) = (3, 1);
    let err = nullsafe_commons::require!(actual >= min, "need {} but got {}", min, actual)
        .unwrap_err();
    assert_eq!(err.message(), "need 3 but got 1");
}

#[test]
fn test_typed_wrappers_return_value_for_inline_use() -> Result<()> {
    let name = require_non_blank("svc", "name is blank", &[])?;
    let port = require_some(Some(8080u16), "port missing", &[])?;
    assert_eq!(format!("{}:{}", name, port), "svc:8080");
    Ok(())
}

#[test]
fn test_absent_values_raise_reference_errors() {
    let err = require_non_blank(None, "{} is required", &[&"name"]).unwrap_err();
    assert_eq!(err, CommonsError::null_reference("name is required"));

    let err = require_non_empty(None::<&Vec<i32>>, "ids missing", &[]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Reference);
}

#[test]
fn test_factories_in_lookup_chain() -> Result<()> {
    let registry = [("alpha", 1), ("beta", 2)];
    let key = "gamma";
    let args: [&dyn Display; 1] = [&key];

    let found = registry
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, id)| *id)
        .ok_or_else(illegal_state_exception("no entry for {}", &args)?);
    assert_eq!(found, Err(CommonsError::illegal_state("no entry for gamma")));

    let attempts = 3;
    let args: [&dyn Display; 1] = [&attempts];
    let supplier = runtime_exception("failed after {} attempts", &args)?;
    assert_eq!(supplier(), CommonsError::runtime("failed after 3 attempts"));
    Ok(())
}

#[test]
fn test_factories_reject_blank_templates() {
    assert!(illegal_argument_exception("", &[]).is_err());
    assert!(illegal_state_exception("", &[]).is_err());
    assert!(runtime_exception("", &[]).is_err());
}
