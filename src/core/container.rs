use crate::domain::ports::Container;

/// Returns whether `container` is absent or holds no elements.
pub fn is_empty<C: Container + ?Sized>(container: Option<&C>) -> bool {
    container.map_or(true, |c| c.element_count() == 0)
}

/// Returns whether `container` is present and holds at least one element.
pub fn non_empty<C: Container + ?Sized>(container: Option<&C>) -> bool {
    !is_empty(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap, HashSet};

    #[test]
    fn test_primitive_arrays() {
        let ints: [i32; 0] = [];
        assert!(is_empty(Some(&ints)));
        assert!(non_empty(Some(&[1i64, 2, 3])));
        assert!(is_empty(None::<&[i64]>));
        assert!(!non_empty(None::<&[i64]>));
    }

    #[test]
    fn test_object_slices_and_collections() {
        let words = vec!["a".to_string()];
        assert!(non_empty(Some(&words)));
        assert!(non_empty(Some(words.as_slice())));
        assert!(is_empty(Some(&Vec::<String>::new())));
        assert!(is_empty(Some(&HashSet::<u8>::new())));
    }

    #[test]
    fn test_maps() {
        let mut map = HashMap::new();
        assert!(is_empty(Some(&map)));
        map.insert("k", 1);
        assert!(non_empty(Some(&map)));
        assert!(is_empty(None::<&BTreeMap<String, i32>>));
    }

    #[test]
    fn test_optional_values() {
        assert!(non_empty(Some(&Some(5))));
        assert!(is_empty(Some(&None::<i32>)));
        assert!(is_empty(None::<&Option<i32>>));
    }
}
