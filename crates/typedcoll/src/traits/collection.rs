use log::{debug, warn};

use crate::{CollectionKey, Elements, Entries, Error, Item, ItemType, Iter, Keys, Result};

/// An ordered, keyed group of items of a single declared type.
///
/// A concrete collection owns an [`Elements`] store and names the item type
/// it accepts with [`item_type`](Collection::item_type). Everything else
/// (insertion checks, iteration, lookup, filtering) is provided.
///
/// Most collections are a tuple struct around [`Elements`] and get their
/// implementation from [`impl_collection!`](crate::impl_collection):
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// pub struct Wallet(Elements<usize, Money>);
///
/// impl_collection!(Wallet, usize, Money, ItemType::of::<Money>());
/// ```
///
/// # Type Parameters
/// - `K`: The key type, must implement [`CollectionKey`]
/// - `T`: The item type, must implement [`Item`]
///
/// Insertion takes `&mut self` and an [`Iter`] borrows the collection, so
/// items cannot be added while iterating. Sharing a collection across
/// threads needs the caller's own synchronization.
pub trait Collection: Sized {
    /// The key type used to address items in this collection.
    type K: CollectionKey;
    /// The item type stored in this collection.
    type T: Item;

    /// The type every item must be, or declare itself a subtype of.
    fn item_type() -> ItemType;

    /// Builds a collection of this concrete type around `elements`.
    ///
    /// Items in `elements` are not checked against
    /// [`item_type`](Collection::item_type). The provided methods only ever
    /// pass an empty store.
    #[doc(hidden)]
    fn from_elements(elements: Elements<Self::K, Self::T>) -> Self;

    #[doc(hidden)]
    fn elements(&self) -> &Elements<Self::K, Self::T>;

    #[doc(hidden)]
    fn elements_mut(&mut self) -> &mut Elements<Self::K, Self::T>;

    #[doc(hidden)]
    fn into_elements(self) -> Elements<Self::K, Self::T>;

    /// Creates an empty collection.
    fn new() -> Self {
        Self::from_elements(Elements::new())
    }

    /// Builds a collection from `items`, in order.
    ///
    /// Fails with [`Error::UnsupportedItemType`] on the first item that is
    /// not of the declared type; nothing built so far is returned.
    fn from_array<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self::T>,
    {
        let items = items.into_iter();
        let mut collection = Self::from_elements(Elements::with_capacity(items.size_hint().0));

        for item in items {
            if let Err(error) = collection.add_item(item) {
                debug!(
                    "from_array aborted after {} item(s): {error}",
                    collection.count()
                );
                return Err(error);
            }
        }

        Ok(collection)
    }

    /// Appends `item` at the next key.
    ///
    /// Fails with [`Error::UnsupportedItemType`] if `item` is not of the
    /// declared type, in which case the collection is left unchanged.
    fn add_item(&mut self, item: Self::T) -> Result<()> {
        let declared = Self::item_type();

        if !item.is_a(declared) {
            let actual = item.item_type();
            debug!("Rejected {actual} from collection of {declared}");
            return Err(Error::UnsupportedItemType {
                actual: actual.name(),
                declared: declared.name(),
            });
        }

        self.elements_mut().push(item);
        Ok(())
    }

    /// Iterates over items in insertion order.
    #[inline]
    fn iter(&self) -> Iter<'_, Self::T> {
        self.elements().iter()
    }

    /// Iterates over `(key, &item)` pairs in insertion order.
    #[inline]
    fn entries(&self) -> Entries<'_, Self::K, Self::T> {
        self.elements().entries()
    }

    #[inline]
    fn keys(&self) -> Keys<Self::K> {
        self.elements().keys()
    }

    /// Returns a new collection of the same type holding the items for which
    /// `predicate` returns true, in their original order.
    ///
    /// Items are re-inserted through [`add_item`](Collection::add_item).
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::T) -> bool,
    {
        let mut filtered = Self::new();

        for item in self.iter() {
            if !predicate(item) {
                continue;
            }
            if let Err(error) = filtered.add_item(item.clone()) {
                // Only reachable when `is_a` answers differently for the same item.
                warn!("Dropped item while filtering: {error}");
            }
        }

        filtered
    }

    /// Calls `action` on each item in insertion order.
    fn walk<F>(&self, action: F)
    where
        F: FnMut(&Self::T),
    {
        self.iter().for_each(action);
    }

    #[inline]
    fn count(&self) -> usize {
        self.elements().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Returns true if an item equal to `item` is stored.
    fn has(&self, item: &Self::T) -> bool {
        self.iter().any(|element| element.equals_to(item))
    }

    #[inline]
    fn has_key(&self, key: Self::K) -> bool {
        self.elements().contains_key(key)
    }

    #[inline]
    fn get(&self, key: Self::K) -> Option<&Self::T> {
        self.elements().get(key)
    }

    /// Returns the earliest inserted item.
    #[inline]
    fn first(&self) -> Option<&Self::T> {
        self.elements().first()
    }

    /// Consumes the collection, returning its items in insertion order.
    fn into_vec(self) -> Vec<Self::T> {
        self.into_elements().into_vec()
    }
}
