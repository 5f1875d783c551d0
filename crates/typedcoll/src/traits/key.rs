use std::{fmt::Debug, hash::Hash};

/// Trait for types that can be used as collection keys.
///
/// Keys are assigned sequentially on append, so a key is a position in
/// insertion order. This trait is automatically implemented for any type
/// that satisfies the required bounds. No manual implementation is needed.
pub trait CollectionKey
where
    Self: Debug + Copy + Clone + PartialEq + Eq + PartialOrd + Ord + Hash,
    Self: From<usize> + Into<usize> + 'static,
{
    /// Converts this key to a `usize` position.
    #[inline]
    fn to_usize(self) -> usize {
        self.into()
    }
}

impl<K> CollectionKey for K where
    K: Debug
        + Copy
        + Clone
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash
        + From<usize>
        + Into<usize>
        + 'static
{
}
