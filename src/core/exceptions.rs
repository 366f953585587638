//! Deferred-construction failures.
//!
//! Each factory validates its template up front and returns a closure that
//! builds the error only when called, which makes it a drop-in argument for
//! `Option::ok_or_else`:
//!
//! ```
//! use nullsafe_commons::core::exceptions::illegal_state_exception;
//!
//! # fn main() -> nullsafe_commons::Result<()> {
//! let port: Option<u16> = None;
//! let err = port.ok_or_else(illegal_state_exception("no port bound", &[])?);
//! assert_eq!(err.unwrap_err().message(), "no port bound");
//! # Ok(())
//! # }
//! ```

use crate::core::contract::require_non_blank;
use crate::utils::error::{CommonsError, Result};
use crate::utils::format::format_message;
use std::fmt::Display;

fn deferred<'a>(
    message: &'a str,
    args: &'a [&'a dyn Display],
    build: fn(String) -> CommonsError,
) -> Result<impl Fn() -> CommonsError + 'a> {
    let message = require_non_blank(message, "message is blank", &[])?;
    Ok(move || {
        let error = build(format_message(message, args));
        tracing::trace!(category = ?error.category(), "building deferred error");
        error
    })
}

/// Supplies [`CommonsError::IllegalState`] with the resolved message.
pub fn illegal_state_exception<'a>(
    message: &'a str,
    args: &'a [&'a dyn Display],
) -> Result<impl Fn() -> CommonsError + 'a> {
    deferred(message, args, |message| CommonsError::IllegalState { message })
}

/// Supplies [`CommonsError::IllegalArgument`] with the resolved message.
pub fn illegal_argument_exception<'a>(
    message: &'a str,
    args: &'a [&'a dyn Display],
) -> Result<impl Fn() -> CommonsError + 'a> {
    deferred(message, args, |message| CommonsError::IllegalArgument { message })
}

/// Supplies [`CommonsError::Runtime`] with the resolved message.
pub fn runtime_exception<'a>(
    message: &'a str,
    args: &'a [&'a dyn Display],
) -> Result<impl Fn() -> CommonsError + 'a> {
    deferred(message, args, |message| CommonsError::Runtime { message })
}
