//! Structured errors for the `Result`-returning convenience wrappers around [`crate::table::Table`].
//!
//! The core `Table` operations report success or failure as plain values (`Option<Handle>`,
//! `bool`) rather than through this type, matching how the distilled design treats errors as
//! values at the library boundary. `TableError` exists only for callers who'd rather use `?`.

use thiserror::Error;

/// The error type for fallible `Table` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// `emplace` was rejected because a unique index already holds an equal view.
    #[error("insert rejected: a unique index already contains an equal view")]
    Rejected,

    /// `erase` was given a handle that does not name a live record.
    #[error("handle does not name a live record")]
    NotFound,
}
