use std::{iter::FusedIterator, marker::PhantomData, ops::Range, slice};

use crate::CollectionKey;

/// Borrowing iterator over the items of a collection, in insertion order.
pub type Iter<'a, T> = slice::Iter<'a, T>;

/// Iterator over `(key, &item)` pairs in insertion order.
#[derive(Debug, Clone)]
pub struct Entries<'a, K, T> {
    inner: slice::Iter<'a, T>,
    next_key: usize,
    phantom: PhantomData<K>,
}

impl<'a, K, T> Entries<'a, K, T> {
    pub(crate) fn new(inner: slice::Iter<'a, T>) -> Self {
        Self {
            inner,
            next_key: 0,
            phantom: PhantomData,
        }
    }
}

impl<'a, K, T> Iterator for Entries<'a, K, T>
where
    K: CollectionKey,
{
    type Item = (K, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let key = K::from(self.next_key);
        self.next_key += 1;
        Some((key, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T> ExactSizeIterator for Entries<'_, K, T> where K: CollectionKey {}

impl<K, T> FusedIterator for Entries<'_, K, T> where K: CollectionKey {}

/// Iterator over the keys of a collection, in insertion order.
#[derive(Debug, Clone)]
pub struct Keys<K> {
    range: Range<usize>,
    phantom: PhantomData<K>,
}

impl<K> Keys<K> {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            range: 0..len,
            phantom: PhantomData,
        }
    }
}

impl<K> Iterator for Keys<K>
where
    K: CollectionKey,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.range.next().map(K::from)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<K> ExactSizeIterator for Keys<K> where K: CollectionKey {}

impl<K> FusedIterator for Keys<K> where K: CollectionKey {}
