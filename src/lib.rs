//! A timestamp type that reads every timestamp text layout a SQLite driver may have written.
//!
//! SQLite stores `DATETIME` values as plain text, and different drivers (or different versions
//! of one driver) render them differently: with or without a `T` separator, fractional seconds,
//! a UTC offset or a trailing `Z`, or as a bare date. [`SqliteTimestamp`] accepts all of the
//! layouts in [`SQLITE_TIMESTAMP_FORMATS`] and always binds back as a native
//! [`OffsetDateTime`][time::OffsetDateTime], leaving serialization to the driver.
//!
//! | Source value            | Result                                                   |
//! |-------------------------|----------------------------------------------------------|
//! | `TEXT` / `BLOB`, empty  | success; the timestamp is left unchanged                 |
//! | `TEXT` / `BLOB`         | the first matching layout wins, otherwise [`Error::Parse`] |
//! | anything else           | [`Error::UnsupportedType`] naming the runtime type       |
//!
//! ### `sqlx`
//!
//! Requires the `sqlite` Cargo feature flag (enabled by default).
//!
//! ```rust,no_run
//! # async fn example(conn: &mut sqlx::SqliteConnection) -> sqlx::Result<()> {
//! use sqlite_timestamp::SqliteTimestamp;
//!
//! let created_at: SqliteTimestamp = sqlx::query_scalar("SELECT created_at FROM posts")
//!     .fetch_one(&mut *conn)
//!     .await?;
//!
//! sqlx::query("INSERT INTO posts (created_at) VALUES (?)")
//!     .bind(created_at)
//!     .execute(&mut *conn)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Use `Option<SqliteTimestamp>` for nullable columns; decoding SQL `NULL` into a bare
//! [`SqliteTimestamp`] is an [`Error::UnsupportedType`].

mod error;
pub mod formats;
mod timestamp;
mod value;

#[cfg(feature = "sqlite")]
mod sqlite;

pub use error::{Error, Result};
pub use formats::{parse_timestamp, TimestampFormat, SQLITE_TIMESTAMP_FORMATS};
pub use timestamp::SqliteTimestamp;
pub use value::RawValue;
