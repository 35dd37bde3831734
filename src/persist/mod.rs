//! Save/restore: the snapshot codec and the storage port.
//!
//! The engine never touches the filesystem. [`codec`] turns a
//! [`crate::engine::GameState`] into a self-describing byte record and
//! back; [`store`] defines the [`SaveStore`] port the shell wires to an
//! in-memory fake or the file-backed implementation.

pub mod codec;
pub mod store;

pub use codec::{decode, encode, SaveGame, SAVE_FORMAT_VERSION};
pub use store::{FileStore, MemoryStore, SaveStore};

use thiserror::Error;

/// Persistence failures. All recoverable at the shell level; the
/// in-memory game state is never touched by a failed load.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The named save does not exist.
    #[error("save '{0}' not found")]
    NotFound(String),

    /// The bytes do not parse into the expected record shape.
    #[error("corrupt save data: {0}")]
    CorruptData(String),

    /// The record parsed but references identities or invariants that
    /// cannot be resolved.
    #[error("invalid saved state: {0}")]
    InvalidState(String),

    /// Underlying I/O failure in a store.
    #[error("save I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
