#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use typedcoll_derive::Item;

mod elements;
mod error;
mod item_type;
mod iterators;
mod macros;
mod traits;

pub use elements::*;
pub use error::*;
pub use item_type::*;
pub use iterators::*;
pub use traits::*;
