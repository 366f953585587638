use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// Anything that can report how many elements it holds.
///
/// Implemented for slices, arrays, the standard collections, key-value maps
/// and `Option` (zero or one element). Only the element count is queried,
/// never the contents.
pub trait Container {
    fn element_count(&self) -> usize;
}

/// A deferred boolean check evaluated by the contract layer.
pub trait Requirement {
    fn test(&self) -> bool;
}

impl<F> Requirement for F
where
    F: Fn() -> bool,
{
    fn test(&self) -> bool {
        self()
    }
}

impl<T> Container for [T] {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Container for [T; N] {
    fn element_count(&self) -> usize {
        N
    }
}

impl<T> Container for Option<T> {
    fn element_count(&self) -> usize {
        usize::from(self.is_some())
    }
}

macro_rules! impl_container {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Container for $ty<$($param),+> {
                fn element_count(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_container!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BinaryHeap<T>,
    HashSet<T, S>,
    BTreeSet<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
);
