use std::{fmt, marker::PhantomData, vec};

use crate::{CollectionKey, Entries, Iter, Keys};

/// Ordered backing store of a collection.
///
/// Elements are kept in insertion order and addressed by the position they
/// were appended at. `Elements` has no public insertion method; items are
/// added through [`Collection::add_item`], which checks the declared item
/// type. A store handed to [`Collection::from_elements`] is taken as is, so
/// moving a filled store into a collection of another declared type skips
/// that check.
///
/// [`Collection::add_item`]: crate::Collection::add_item
/// [`Collection::from_elements`]: crate::Collection::from_elements
pub struct Elements<K, T> {
    items: Vec<T>,
    phantom: PhantomData<K>,
}

impl<K, T> Elements<K, T>
where
    K: CollectionKey,
{
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            phantom: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            phantom: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, item: T) -> K {
        let key = K::from(self.items.len());
        self.items.push(item);
        key
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.items.get(key.to_usize())
    }

    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        key.to_usize() < self.items.len()
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn entries(&self) -> Entries<'_, K, T> {
        Entries::new(self.items.iter())
    }

    #[inline]
    pub fn keys(&self) -> Keys<K> {
        Keys::new(self.items.len())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<K, T> Default for Elements<K, T>
where
    K: CollectionKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Clone for Elements<K, T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            phantom: PhantomData,
        }
    }
}

impl<K, T> fmt::Debug for Elements<K, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<'a, K, T> IntoIterator for &'a Elements<K, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K, T> IntoIterator for Elements<K, T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_keys() {
        let mut elements: Elements<usize, &str> = Elements::new();
        assert_eq!(elements.push("a"), 0);
        assert_eq!(elements.push("b"), 1);
        assert_eq!(elements.push("c"), 2);

        assert_eq!(elements.len(), 3);
        assert_eq!(elements.get(1), Some(&"b"));
        assert_eq!(elements.get(3), None);
        assert!(elements.contains_key(2));
        assert!(!elements.contains_key(3));
    }

    #[test]
    fn test_empty() {
        let elements: Elements<usize, u8> = Elements::default();
        assert!(elements.is_empty());
        assert_eq!(elements.first(), None);
        assert_eq!(elements.keys().count(), 0);
        assert_eq!(format!("{elements:?}"), "[]");
    }

    #[test]
    fn test_entries_follow_insertion_order() {
        let mut elements: Elements<usize, char> = Elements::with_capacity(2);
        elements.push('x');
        elements.push('y');

        let entries: Vec<_> = elements.entries().collect();
        assert_eq!(entries, vec![(0, &'x'), (1, &'y')]);
        assert_eq!(elements.keys().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(elements.into_vec(), vec!['x', 'y']);
    }
}
