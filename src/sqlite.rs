//! Integration with the `sqlx` SQLite driver.

use std::borrow::Cow;
use std::str;

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{SqliteTypeInfo, SqliteValueRef};
use sqlx::{Database, Decode, Encode, Sqlite, Type, TypeInfo, ValueRef};
use time::OffsetDateTime;

use crate::{RawValue, SqliteTimestamp};

impl Type<Sqlite> for SqliteTimestamp {
    fn type_info() -> SqliteTypeInfo {
        <OffsetDateTime as Type<Sqlite>>::type_info()
    }

    // Every storage class is let through so that `decode` reports unsupported ones along with
    // their type name.
    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl<'q> Encode<'q, Sqlite> for SqliteTimestamp {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Sqlite>::encode(self.value(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for SqliteTimestamp {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let mut timestamp = SqliteTimestamp::ZERO;
        timestamp.scan(raw_value(value)?)?;

        Ok(timestamp)
    }
}

fn raw_value<'r>(value: SqliteValueRef<'r>) -> Result<RawValue<'r>, BoxDynError> {
    // a NULL value reports the declared column type, not its own
    if value.is_null() {
        return Ok(RawValue::Other(Cow::Borrowed("NULL")));
    }

    let type_info = value.type_info().into_owned();

    match type_info.name() {
        // read as bytes so that malformed UTF-8 fails the scan like any other unparseable text
        "TEXT" => {
            let bytes = <&'r [u8] as Decode<'r, Sqlite>>::decode(value)?;

            Ok(match str::from_utf8(bytes) {
                Ok(text) => RawValue::Text(text),
                Err(_) => RawValue::Bytes(bytes),
            })
        }
        "BLOB" => Ok(RawValue::Bytes(<&'r [u8] as Decode<'r, Sqlite>>::decode(value)?)),
        other => Ok(RawValue::Other(Cow::Owned(other.to_owned()))),
    }
}
