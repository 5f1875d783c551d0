/// Implements [`Collection`](crate::Collection) for a tuple struct wrapping
/// [`Elements`](crate::Elements).
///
/// # Usage
/// ```ignore
/// #[derive(Debug, Clone)]
/// pub struct Wallet(Elements<usize, Money>);
///
/// impl_collection!(Wallet, usize, Money, ItemType::of::<Money>());
/// ```
///
/// The last argument is the declared item type and is evaluated on every
/// insertion, so it should be a constant expression.
///
/// This generates implementations for:
/// - `Collection`
/// - `Default`
/// - `IntoIterator` for `&Wrapper` and `Wrapper`
#[macro_export]
macro_rules! impl_collection {
    ($wrapper:ident, $key:ty, $item:ty, $item_type:expr $(,)?) => {
        impl $crate::Collection for $wrapper {
            type K = $key;
            type T = $item;

            #[inline]
            fn item_type() -> $crate::ItemType {
                $item_type
            }

            #[inline]
            fn from_elements(elements: $crate::Elements<$key, $item>) -> Self {
                Self(elements)
            }

            #[inline]
            fn elements(&self) -> &$crate::Elements<$key, $item> {
                &self.0
            }

            #[inline]
            fn elements_mut(&mut self) -> &mut $crate::Elements<$key, $item> {
                &mut self.0
            }

            #[inline]
            fn into_elements(self) -> $crate::Elements<$key, $item> {
                self.0
            }
        }

        impl ::std::default::Default for $wrapper {
            fn default() -> Self {
                <Self as $crate::Collection>::new()
            }
        }

        impl<'a> ::std::iter::IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = $crate::Iter<'a, $item>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl ::std::iter::IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = ::std::vec::IntoIter<$item>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }
    };
}
