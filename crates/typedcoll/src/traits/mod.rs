mod collection;
mod item;
mod key;

pub use collection::*;
pub use item::*;
pub use key::*;
