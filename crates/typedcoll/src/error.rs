use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for typedcoll operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unsupported item type {actual}, collection accepts {declared}")]
    UnsupportedItemType {
        actual: &'static str,
        declared: &'static str,
    },
}
