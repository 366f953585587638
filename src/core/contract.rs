//! Parameterised runtime checks that return categorised failures.
//!
//! Every argument check funnels through [`require`], which raises
//! [`CommonsError::IllegalArgument`]. [`precondition`] is the state-check
//! twin and raises [`CommonsError::IllegalState`]. The typed wrappers first
//! reject an absent value with [`CommonsError::NullReference`] and then
//! delegate the content check to [`require`].
//!
//! Messages are templates resolved with [`format_message`] at the moment a
//! check fails, so passing checks never format anything.

use crate::core::strings::non_blank;
use crate::domain::ports::{Container, Requirement};
use crate::utils::error::{CommonsError, Result};
use crate::utils::format::format_message;
use std::fmt::Display;

fn violated(error: CommonsError) -> CommonsError {
    tracing::debug!(category = ?error.category(), message = %error.message(), "contract violated");
    error
}

/// Fails with an argument-validation error unless `requirement` holds.
pub fn require(requirement: impl Requirement, template: &str, args: &[&dyn Display]) -> Result<()> {
    if requirement.test() {
        return Ok(());
    }
    Err(violated(CommonsError::illegal_argument(format_message(
        template, args,
    ))))
}

/// Fails with a state-validation error unless `requirement` holds.
pub fn precondition(
    requirement: impl Requirement,
    template: &str,
    args: &[&dyn Display],
) -> Result<()> {
    if requirement.test() {
        return Ok(());
    }
    Err(violated(CommonsError::illegal_state(format_message(
        template, args,
    ))))
}

/// Returns the present value, or a reference-validation error if absent.
pub fn require_non_null<T>(value: Option<T>, template: &str, args: &[&dyn Display]) -> Result<T> {
    value.ok_or_else(|| violated(CommonsError::null_reference(format_message(template, args))))
}

/// Checks that `container` is present and holds at least one element.
///
/// Works for slices and arrays of any element type, the standard
/// collections and maps. The container is handed back for inline use.
pub fn require_non_empty<'c, C: Container + ?Sized>(
    container: Option<&'c C>,
    template: &str,
    args: &[&dyn Display],
) -> Result<&'c C> {
    let container = require_non_null(container, template, args)?;
    require(|| container.element_count() > 0, template, args)?;
    Ok(container)
}

/// Checks that `string` is present and has at least one character.
///
/// Whitespace counts as content: `" "` passes.
pub fn require_non_blank<'a>(
    string: impl Into<Option<&'a str>>,
    template: &str,
    args: &[&dyn Display],
) -> Result<&'a str> {
    let string = require_non_null(string.into(), template, args)?;
    require(|| non_blank(string), template, args)?;
    Ok(string)
}

/// Unwraps an optional value, failing with an argument-validation error when
/// it holds nothing.
pub fn require_some<T>(optional: Option<T>, template: &str, args: &[&dyn Display]) -> Result<T> {
    require(|| optional.is_some(), template, args)?;
    optional.ok_or_else(|| CommonsError::illegal_argument(format_message(template, args)))
}

/// `require!(condition, "template {}", arg, ...)` forwards to [`require`].
#[macro_export]
macro_rules! require {
    ($condition:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::core::contract::require(|| $condition, $template, &[$(&$arg),*])
    };
}

/// `precondition!(condition, "template {}", arg, ...)` forwards to [`precondition`].
#[macro_export]
macro_rules! precondition {
    ($condition:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::core::contract::precondition(|| $condition, $template, &[$(&$arg),*])
    };
}
