//! Client-local key/value slots
//!
//! Every value is a JSON string stored under a fixed key (`activeOrders`,
//! `formOrder:<department>`). Writes replace the whole slot.

mod memory;
mod file;

pub use self::memory::MemoryStorage;
pub use self::file::RedbStorage;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend refused the operation (quota, unavailable)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String slot store
///
/// Implementations must be shareable across threads; the ledger and the
/// form synchronizer hold the same store behind an `Arc`.
pub trait LocalStorage: Send + Sync {
    /// Read a slot, `None` when it was never written
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace a slot
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}
