use thiserror::Error;

/// A specialized `Result` type for timestamp scanning.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all the ways scanning a [`SqliteTimestamp`][crate::SqliteTimestamp] can fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The source value was neither text nor a byte sequence.
    ///
    /// Carries the runtime type name of the rejected value.
    #[error("cannot convert type {0} to a timestamp")]
    UnsupportedType(String),

    /// Non-empty text that matched none of the known SQLite timestamp formats.
    #[error("could not parse time")]
    Parse,
}
