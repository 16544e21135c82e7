//! The timestamp text layouts SQLite drivers are known to produce.
//!
//! SQLite has no native date/time storage class, so a `DATETIME` column holds whatever text the
//! writing driver chose. [`SQLITE_TIMESTAMP_FORMATS`] lists the layouts in the order they are
//! tried; the first layout that consumes the whole input wins.
//!
//! The order follows the `SQLiteTimestampFormats` list of the `go-sqlite3` driver, with an
//! optional trailing `Z` accepted by the offset-less layouts so that RFC 3339 UTC text (which is
//! what `sqlx` writes for an [`OffsetDateTime`]) scans as well.

use time::format_description::BorrowedFormatItem;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::{Error, Result};

/// The ordered list of accepted timestamp text layouts.
///
/// Keep this the single place that decides what text a column may hold.
pub const SQLITE_TIMESTAMP_FORMATS: &[TimestampFormat] = &[
    TimestampFormat {
        pattern: "YYYY-MM-DD HH:MM:SS.FFFFFFFFF+HH:MM",
        items: items::SPACE_SECONDS_OFFSET,
        kind: FormatKind::Offset,
    },
    TimestampFormat {
        pattern: "YYYY-MM-DDTHH:MM:SS.FFFFFFFFF+HH:MM",
        items: items::T_SECONDS_OFFSET,
        kind: FormatKind::Offset,
    },
    TimestampFormat {
        pattern: "YYYY-MM-DD HH:MM:SS.FFFFFFFFF",
        items: items::SPACE_SECONDS,
        kind: FormatKind::Naive,
    },
    TimestampFormat {
        pattern: "YYYY-MM-DDTHH:MM:SS.FFFFFFFFF",
        items: items::T_SECONDS,
        kind: FormatKind::Naive,
    },
    TimestampFormat {
        pattern: "YYYY-MM-DD HH:MM",
        items: items::SPACE_MINUTES,
        kind: FormatKind::Naive,
    },
    TimestampFormat {
        pattern: "YYYY-MM-DDTHH:MM",
        items: items::T_MINUTES,
        kind: FormatKind::Naive,
    },
    TimestampFormat {
        pattern: "YYYY-MM-DD",
        items: items::DATE,
        kind: FormatKind::Date,
    },
];

/// How the fields of a [`TimestampFormat`] map onto an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Date, time and a UTC offset.
    Offset,
    /// Date and time without an offset; interpreted as UTC.
    Naive,
    /// Date only; interpreted as midnight UTC.
    Date,
}

/// A single timestamp text layout.
#[derive(Debug, Clone, Copy)]
pub struct TimestampFormat {
    pattern: &'static str,
    items: &'static [BorrowedFormatItem<'static>],
    kind: FormatKind,
}

impl TimestampFormat {
    /// A human readable rendering of the layout, e.g. `YYYY-MM-DD HH:MM`.
    ///
    /// Fractional seconds are optional and may have one to nine digits.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Whether this layout carries an offset, a naive date-time, or a date only.
    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    /// Parse `text` with this layout alone. The whole input must be consumed.
    pub fn parse(&self, text: &str) -> Option<OffsetDateTime> {
        match self.kind {
            FormatKind::Offset => OffsetDateTime::parse(text, self.items).ok(),
            FormatKind::Naive => PrimitiveDateTime::parse(text, self.items)
                .ok()
                .map(PrimitiveDateTime::assume_utc),
            FormatKind::Date => Date::parse(text, self.items)
                .ok()
                .map(|date| date.midnight().assume_utc()),
        }
    }

    /// Render `dt` with this layout.
    ///
    /// Layouts without an offset render the instant in UTC.
    pub fn format(&self, dt: OffsetDateTime) -> Result<String, time::error::Format> {
        match self.kind {
            FormatKind::Offset => dt.format(self.items),
            FormatKind::Naive | FormatKind::Date => dt.to_offset(UtcOffset::UTC).format(self.items),
        }
    }
}

/// Parse `text` against [`SQLITE_TIMESTAMP_FORMATS`], returning the first match.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime> {
    for format in SQLITE_TIMESTAMP_FORMATS {
        if let Some(dt) = format.parse(text) {
            tracing::trace!(pattern = format.pattern, "parsed sqlite timestamp");
            return Ok(dt);
        }
    }

    tracing::debug!(text, "text matched no sqlite timestamp format");

    Err(Error::Parse)
}

mod items {
    use time::format_description::BorrowedFormatItem::{Component, Compound, Literal, Optional};
    use time::format_description::{modifier, BorrowedFormatItem, Component::*};

    const YEAR: BorrowedFormatItem<'_> = Component(Year({
        let mut value = modifier::Year::default();
        value.padding = modifier::Padding::Zero;
        value.repr = modifier::YearRepr::Full;
        value.iso_week_based = false;
        value.sign_is_mandatory = false;
        value
    }));

    const MONTH: BorrowedFormatItem<'_> = Component(Month({
        let mut value = modifier::Month::default();
        value.padding = modifier::Padding::Zero;
        value.repr = modifier::MonthRepr::Numerical;
        value.case_sensitive = true;
        value
    }));

    const DAY: BorrowedFormatItem<'_> = Component(Day({
        let mut value = modifier::Day::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const HOUR: BorrowedFormatItem<'_> = Component(Hour({
        let mut value = modifier::Hour::default();
        value.padding = modifier::Padding::Zero;
        value.is_12_hour_clock = false;
        value
    }));

    const MINUTE: BorrowedFormatItem<'_> = Component(Minute({
        let mut value = modifier::Minute::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const SECOND: BorrowedFormatItem<'_> = Component(Second({
        let mut value = modifier::Second::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const SUBSECOND: BorrowedFormatItem<'_> = Component(Subsecond({
        let mut value = modifier::Subsecond::default();
        value.digits = modifier::SubsecondDigits::OneOrMore;
        value
    }));

    const OFFSET_HOUR: BorrowedFormatItem<'_> = Component(OffsetHour({
        let mut value = modifier::OffsetHour::default();
        value.sign_is_mandatory = true;
        value.padding = modifier::Padding::Zero;
        value
    }));

    const OFFSET_MINUTE: BorrowedFormatItem<'_> = Component(OffsetMinute({
        let mut value = modifier::OffsetMinute::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    // `.` followed by 1-9 digits, or nothing at all
    const FRACTION: BorrowedFormatItem<'_> = Optional(&Compound(&[Literal(b"."), SUBSECOND]));

    const UTC_SUFFIX: BorrowedFormatItem<'_> = Optional(&Literal(b"Z"));

    pub(super) const DATE: &[BorrowedFormatItem<'_>] =
        &[YEAR, Literal(b"-"), MONTH, Literal(b"-"), DAY];

    pub(super) const SPACE_SECONDS_OFFSET: &[BorrowedFormatItem<'_>] = &[
        Compound(DATE),
        Literal(b" "),
        HOUR,
        Literal(b":"),
        MINUTE,
        Literal(b":"),
        SECOND,
        FRACTION,
        OFFSET_HOUR,
        Literal(b":"),
        OFFSET_MINUTE,
    ];

    pub(super) const T_SECONDS_OFFSET: &[BorrowedFormatItem<'_>] = &[
        Compound(DATE),
        Literal(b"T"),
        HOUR,
        Literal(b":"),
        MINUTE,
        Literal(b":"),
        SECOND,
        FRACTION,
        OFFSET_HOUR,
        Literal(b":"),
        OFFSET_MINUTE,
    ];

    pub(super) const SPACE_SECONDS: &[BorrowedFormatItem<'_>] = &[
        Compound(DATE),
        Literal(b" "),
        HOUR,
        Literal(b":"),
        MINUTE,
        Literal(b":"),
        SECOND,
        FRACTION,
        UTC_SUFFIX,
    ];

    pub(super) const T_SECONDS: &[BorrowedFormatItem<'_>] = &[
        Compound(DATE),
        Literal(b"T"),
        HOUR,
        Literal(b":"),
        MINUTE,
        Literal(b":"),
        SECOND,
        FRACTION,
        UTC_SUFFIX,
    ];

    pub(super) const SPACE_MINUTES: &[BorrowedFormatItem<'_>] = &[
        Compound(DATE),
        Literal(b" "),
        HOUR,
        Literal(b":"),
        MINUTE,
        UTC_SUFFIX,
    ];

    pub(super) const T_MINUTES: &[BorrowedFormatItem<'_>] = &[
        Compound(DATE),
        Literal(b"T"),
        HOUR,
        Literal(b":"),
        MINUTE,
        UTC_SUFFIX,
    ];
}
