//! Uniform lazy sequences over possibly absent sources.
//!
//! Every source shape (slice, collection, iterator) is accepted as
//! `Option<S>` where `S: IntoIterator`; `None` behaves as a source with
//! zero elements.

use std::iter::{Chain, FusedIterator};
use std::ops::Deref;

/// A lazy, finite sequence over an optional source.
///
/// Single pass: a sequence built from an iterator cannot be restarted. One
/// built from a slice or collection reference can be traversed again by
/// calling [`sequence`] a second time.
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    inner: Option<I>,
}

impl<I> Sequence<I> {
    pub fn empty() -> Self {
        Self { inner: None }
    }
}

impl<I> Default for Sequence<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Sequence<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Sequence<I> {}

impl<I: FusedIterator> FusedIterator for Sequence<I> {}

/// Adapts a possibly absent source into a [`Sequence`].
pub fn sequence<S: IntoIterator>(source: Option<S>) -> Sequence<S::IntoIter> {
    Sequence {
        inner: source.map(IntoIterator::into_iter),
    }
}

/// Lazily yields every element of `first`, then every element of `second`.
pub fn concat_and_sequence<A, B>(
    first: Option<A>,
    second: Option<B>,
) -> Chain<Sequence<A::IntoIter>, Sequence<B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    sequence(first).chain(sequence(second))
}

/// Concatenates any number of possibly absent sources, in source order.
pub fn concat_all<I, S>(sources: I) -> impl Iterator<Item = S::Item>
where
    I: IntoIterator<Item = Option<S>>,
    S: IntoIterator,
{
    sources.into_iter().flat_map(sequence)
}

/// A list collected in reverse encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversedList<T>(Vec<T>);

impl<T> ReversedList<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> FromIterator<T> for ReversedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list: Vec<T> = iter.into_iter().collect();
        list.reverse();
        Self(list)
    }
}

impl<T> Deref for ReversedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<ReversedList<T>> for Vec<T> {
    fn from(list: ReversedList<T>) -> Self {
        list.0
    }
}

pub trait SequenceExt: Iterator + Sized {
    /// Collects the remaining elements into a list in reverse order.
    fn collect_reversed(self) -> Vec<Self::Item> {
        self.collect::<ReversedList<_>>().into_inner()
    }
}

impl<I: Iterator> SequenceExt for I {}
