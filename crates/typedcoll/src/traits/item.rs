use std::{any::Any, fmt::Debug};

use crate::ItemType;

/// Capabilities an element needs to live in a collection.
///
/// `equals_to` is structural equality and is what [`Collection::has`] uses.
/// `item_type` reports the runtime type of the value, and `is_a` answers
/// whether the value may be stored in a collection declaring `declared`.
///
/// Types standing in for a subtype override [`accepts_type`] to also accept
/// what their supertypes accept, which makes the relation follow the whole
/// supertype chain. With the `derive` feature, `#[derive(Item)]` covers the
/// common case.
///
/// [`Collection::has`]: crate::Collection::has
/// [`accepts_type`]: Item::accepts_type
pub trait Item: Clone + Debug + 'static {
    fn equals_to(&self, other: &Self) -> bool;

    fn item_type(&self) -> ItemType;

    /// Returns true if values of this type may be stored in a collection
    /// declaring `declared`.
    #[inline]
    fn accepts_type(declared: ItemType) -> bool {
        declared.is::<Self>()
    }

    #[inline]
    fn is_a(&self, declared: ItemType) -> bool {
        self.item_type() == declared || Self::accepts_type(declared)
    }
}

/// Object-safe view of an [`Item`], for collections fed with loosely typed
/// input. Implemented for every item; not meant to be implemented
/// by hand.
///
/// `Box<dyn ValueObject>` is itself an [`Item`]: equality downcasts the other
/// side to the concrete type, and type checks are forwarded to the boxed
/// value. Since that makes the box a `ValueObject` too, boxing it again is
/// possible; equality and [`downcast_ref`](Self::downcast_ref) look through
/// such nested boxes.
pub trait ValueObject: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn equals_dyn(&self, other: &dyn ValueObject) -> bool;

    fn item_type_dyn(&self) -> ItemType;

    fn is_a_dyn(&self, declared: ItemType) -> bool;

    fn clone_boxed(&self) -> Box<dyn ValueObject>;
}

impl<V> ValueObject for V
where
    V: Item,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals_dyn(&self, other: &dyn ValueObject) -> bool {
        other
            .innermost()
            .as_any()
            .downcast_ref::<V>()
            .is_some_and(|other| self.equals_to(other))
    }

    #[inline]
    fn item_type_dyn(&self) -> ItemType {
        self.item_type()
    }

    #[inline]
    fn is_a_dyn(&self, declared: ItemType) -> bool {
        self.is_a(declared)
    }

    fn clone_boxed(&self) -> Box<dyn ValueObject> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ValueObject> {
    fn clone(&self) -> Self {
        (**self).clone_boxed()
    }
}

impl Item for Box<dyn ValueObject> {
    fn equals_to(&self, other: &Self) -> bool {
        (**self).innermost().equals_dyn(&**other)
    }

    fn item_type(&self) -> ItemType {
        (**self).item_type_dyn()
    }

    fn is_a(&self, declared: ItemType) -> bool {
        (**self).is_a_dyn(declared)
    }
}

impl dyn ValueObject {
    /// Returns the boxed value as `T` if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.innermost().as_any().downcast_ref::<T>()
    }

    /// Unwraps `Box<dyn ValueObject>` layers down to the actual value.
    fn innermost(&self) -> &dyn ValueObject {
        let mut value = self;
        while let Some(inner) = value.as_any().downcast_ref::<Box<dyn ValueObject>>() {
            value = &**inner;
        }
        value
    }
}
