//! Errors reported by the public tree operations.

use thiserror::Error;

/// The ways a tree operation can be rejected.
///
/// Every error carries the key that caused it. A rejected operation leaves the
/// tree exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError<K> {
    /// `find` or `remove` was called with a key that is not in the tree.
    #[error("element with key {0:?} not found")]
    NotFound(K),
    /// `insert` was called with a key that is already in the tree.
    #[error("element with key {0:?} already exists")]
    AlreadyExists(K),
}

impl<K> TreeError<K> {
    /// The offending key.
    pub fn key(&self) -> &K {
        match self {
            TreeError::NotFound(key) | TreeError::AlreadyExists(key) => key,
        }
    }

    pub fn into_key(self) -> K {
        match self {
            TreeError::NotFound(key) | TreeError::AlreadyExists(key) => key,
        }
    }
}

pub type TreeResult<T, K> = Result<T, TreeError<K>>;
