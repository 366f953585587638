use crate::core::contract::{require_non_empty, require_non_null};
use crate::core::exceptions::illegal_argument_exception;
use crate::core::sequence::{concat_and_sequence, sequence, SequenceExt};
use crate::utils::error::Result;
use std::borrow::Borrow;

/// Materialises any source into a list. An absent source gives an empty list.
pub fn as_list<S: IntoIterator>(items: Option<S>) -> Vec<S::Item> {
    sequence(items).collect()
}

/// Builds a list of `first` followed by every element of `others`.
///
/// `first` is mandatory; `others` may be absent or empty.
pub fn as_non_empty_list<T, S>(first: Option<T>, others: Option<S>) -> Result<Vec<T>>
where
    S: IntoIterator<Item = T>,
{
    let first = require_non_null(first, "first can not be null", &[])?;
    Ok(std::iter::once(first).chain(sequence(others)).collect())
}

/// Concatenates two sources into a single list, `first` elements first.
pub fn concat<A, B>(first: Option<A>, second: Option<B>) -> Vec<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    concat_and_sequence(first, second).collect()
}

pub fn head_of<S: IntoIterator>(source: Option<S>) -> Result<S::Item> {
    sequence(source)
        .next()
        .ok_or_else(illegal_argument_exception("iterable is empty", &[])?)
}

pub fn tail_of<S: IntoIterator>(source: Option<S>) -> Result<S::Item> {
    sequence(source)
        .last()
        .ok_or_else(illegal_argument_exception("iterable is empty", &[])?)
}

/// Returns whether any element of `source` satisfies `predicate`.
pub fn contains_any<S, P>(source: Option<S>, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    sequence(source).any(|item| predicate(&item))
}

/// Returns whether `source` contains an element equal to one of `candidates`.
///
/// Fails with an argument-validation error when no candidates are given.
pub fn contains_one_of<S, T>(source: Option<S>, candidates: &[T]) -> Result<bool>
where
    S: IntoIterator,
    S::Item: Borrow<T>,
    T: PartialEq,
{
    let candidates = require_non_empty(Some(candidates), "No items specified", &[])?;
    Ok(contains_any(source, |item| {
        let item = <S::Item as Borrow<T>>::borrow(item);
        candidates.iter().any(|candidate| candidate == item)
    }))
}

/// Returns a new list with the elements of `collection` in reverse order.
///
/// Pass a reference to keep the input untouched.
pub fn reverse<S: IntoIterator>(collection: S) -> Vec<S::Item> {
    collection.into_iter().collect_reversed()
}
