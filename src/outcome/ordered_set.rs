use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

// ============================================================================
// Ordered Set - Insertion-Ordered, Duplicate-Free, Read-Only
// ============================================================================
//
// Backs both the event and the error-message collections of an Outcome.
// Elements keep the position of their first occurrence; later duplicates
// are dropped silently. Equality is set equality and ignores order, and
// hashing agrees with it.
//
// Deduplication goes through an IndexSet; the result is kept as a plain
// Vec so callers can borrow it as a slice.
//
// ============================================================================

/// Insertion-ordered collection with duplicates collapsed by `Eq`/`Hash`.
///
/// Built once through [`FromIterator`] and never mutated afterwards.
#[derive(Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T> OrderedSet<T> {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// First element in insertion order
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> OrderedSet<T> {
    /// Linear scan; use set equality for whole-set comparisons.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let unique: IndexSet<T> = iter.into_iter().collect();
        Self {
            items: unique.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Eq + Hash> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        // Both sides are duplicate-free, so equal length plus containment
        // is set equality.
        if self.len() != other.len() {
            return false;
        }
        let theirs: HashSet<&T> = other.items.iter().collect();
        self.items.iter().all(|item| theirs.contains(item))
    }
}

impl<T: Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Hash> Hash for OrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: element hashes are summed with a fixed-key
        // hasher, so sets equal in any order hash alike.
        let combined = self.items.iter().fold(0_u64, |acc, item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_usize(self.items.len());
        state.write_u64(combined);
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse_keeping_first_position() {
        let set: OrderedSet<&str> = ["b", "a", "b", "c", "a"].into_iter().collect();

        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice(), &["b", "a", "c"]);
        assert_eq!(set.first(), Some(&"b"));
    }

    #[test]
    fn test_empty_set() {
        let set: OrderedSet<u32> = OrderedSet::default();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
        assert!(set.iter().next().is_none());
    }

    #[test]
    fn test_equality_ignores_order() {
        let left: OrderedSet<u32> = vec![1, 2, 3].into_iter().collect();
        let right: OrderedSet<u32> = vec![3, 1, 2].into_iter().collect();

        assert_eq!(left, right);
        // Iteration order is still what was inserted
        assert_eq!(left.as_slice(), &[1, 2, 3]);
        assert_eq!(right.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn test_equality_detects_different_contents() {
        let left: OrderedSet<u32> = vec![1, 2].into_iter().collect();
        let subset: OrderedSet<u32> = vec![1].into_iter().collect();
        let other: OrderedSet<u32> = vec![1, 4].into_iter().collect();

        assert_ne!(left, subset);
        assert_ne!(left, other);
    }

    #[test]
    fn test_rebuilding_from_a_set_keeps_order() {
        let original: OrderedSet<String> =
            ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        let rebuilt: OrderedSet<String> = original.clone().into_iter().collect();

        assert_eq!(rebuilt.as_slice(), original.as_slice());
    }

    #[test]
    fn test_debug_renders_as_set() {
        let set: OrderedSet<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(format!("{:?}", set), r#"{"a", "b"}"#);
    }

    #[test]
    fn test_borrowed_iteration_and_into_vec() {
        let set: OrderedSet<u8> = [5, 5, 6].into_iter().collect();

        let doubled: Vec<u8> = (&set).into_iter().map(|n| n * 2).collect();
        assert_eq!(doubled, vec![10, 12]);
        assert!(set.contains(&6));
        assert!(!set.contains(&7));
        assert_eq!(set.into_vec(), vec![5, 6]);
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_hash_ignores_order() {
        let left: OrderedSet<&str> = ["a", "b", "c"].into_iter().collect();
        let right: OrderedSet<&str> = ["c", "a", "b", "a"].into_iter().collect();
        let other: OrderedSet<&str> = ["a", "b", "d"].into_iter().collect();

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
        assert_ne!(hash_of(&left), hash_of(&other));
    }

    #[test]
    fn test_large_input_builds_and_compares() {
        let count = 100_000_u32;
        let forward: OrderedSet<String> = (0..count)
            .chain(0..count)
            .map(|n| format!("row {} is invalid", n))
            .collect();
        let backward: OrderedSet<String> = (0..count)
            .rev()
            .map(|n| format!("row {} is invalid", n))
            .collect();

        assert_eq!(forward.len(), count as usize);
        assert_eq!(forward.first().map(String::as_str), Some("row 0 is invalid"));
        assert_eq!(backward.first().map(String::as_str), Some("row 99999 is invalid"));
        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }
}
