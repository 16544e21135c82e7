use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::str;

use time::macros::datetime;
use time::OffsetDateTime;

use crate::error::{Error, Result};
use crate::formats::{parse_timestamp, SQLITE_TIMESTAMP_FORMATS};
use crate::value::RawValue;

/// A point in time that scans from any of the timestamp text layouts a SQLite driver may have
/// written, and binds back as a native [`OffsetDateTime`].
///
/// See [`SQLITE_TIMESTAMP_FORMATS`] for the accepted layouts. Text without an offset is read as
/// UTC; text with one keeps it.
///
/// Empty text is how an absent timestamp is stored, so scanning it succeeds and leaves the
/// current value alone. Text that matches no layout is an error.
///
/// ```rust
/// use sqlite_timestamp::{RawValue, SqliteTimestamp};
///
/// let mut ts = SqliteTimestamp::default();
///
/// ts.scan(RawValue::from(""))?;
/// assert!(ts.is_zero());
///
/// ts.scan(RawValue::from("2024-03-01 12:30:00"))?;
/// assert_eq!(ts.year(), 2024);
/// # Ok::<(), sqlite_timestamp::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqliteTimestamp(pub OffsetDateTime);

impl SqliteTimestamp {
    /// The zero instant, `0001-01-01 00:00:00 UTC`.
    pub const ZERO: Self = SqliteTimestamp(datetime!(1-01-01 0:00 UTC));

    pub const fn new(dt: OffsetDateTime) -> Self {
        SqliteTimestamp(dt)
    }

    pub const fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    /// Returns `true` if this is [`SqliteTimestamp::ZERO`].
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The value to bind when this timestamp is used as a query parameter.
    ///
    /// Always the wrapped instant; serialization is left to the driver.
    pub const fn value(&self) -> OffsetDateTime {
        self.0
    }

    /// Populate this timestamp from a raw column value.
    ///
    /// On error `self` is left untouched.
    pub fn scan(&mut self, raw: RawValue<'_>) -> Result<()> {
        tracing::trace!(source = raw.type_name(), "scanning timestamp");

        match raw {
            RawValue::Bytes(bytes) => match str::from_utf8(bytes) {
                Ok(text) => self.parse(text),
                Err(error) => {
                    tracing::debug!(%error, "timestamp bytes are not valid UTF-8");
                    Err(Error::Parse)
                }
            },

            RawValue::Text(text) => self.parse(text),

            RawValue::Other(type_name) => {
                tracing::debug!(%type_name, "cannot scan a timestamp from this type");
                Err(Error::UnsupportedType(type_name.into_owned()))
            }
        }
    }

    fn parse(&mut self, text: &str) -> Result<()> {
        // empty text is an absent timestamp, not a malformed one
        if text.is_empty() {
            return Ok(());
        }

        self.0 = parse_timestamp(text)?;

        Ok(())
    }
}

impl Default for SqliteTimestamp {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Deref for SqliteTimestamp {
    type Target = OffsetDateTime;

    fn deref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl From<OffsetDateTime> for SqliteTimestamp {
    fn from(dt: OffsetDateTime) -> Self {
        SqliteTimestamp(dt)
    }
}

impl From<SqliteTimestamp> for OffsetDateTime {
    fn from(ts: SqliteTimestamp) -> Self {
        ts.0
    }
}

impl Display for SqliteTimestamp {
    /// Renders with the first (offset-bearing) layout of [`SQLITE_TIMESTAMP_FORMATS`].
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = SQLITE_TIMESTAMP_FORMATS[0]
            .format(self.0)
            .map_err(|_| fmt::Error)?;

        f.write_str(&text)
    }
}
