use std::env;
use std::error::Error as StdError;

use sqlx::{Connection, SqliteConnection};

pub fn setup_if_needed() {
    let _ = dotenvy::dotenv();
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `DATABASE_URL`, or a private in-memory database when it is unset.
pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| String::from("sqlite::memory:"))
}

// Make a new connection
// Ensure [dotenvy] and [env_logger] have been setup
pub async fn new() -> anyhow::Result<SqliteConnection> {
    setup_if_needed();
    Ok(SqliteConnection::connect(&database_url()).await?)
}

/// The error a `Decode` impl returned, if `err` is a column decode failure of type `E`.
pub fn decode_error<E: StdError + 'static>(err: &sqlx::Error) -> Option<&E> {
    match err {
        sqlx::Error::ColumnDecode { source, .. } => source.downcast_ref::<E>(),
        _ => None,
    }
}

// Test type encoding and decoding
#[macro_export]
macro_rules! test_type {
    ($name:ident<$ty:ty>($sql:literal, $($text:literal == $value:expr),+ $(,)?)) => {
        paste::item! {
            #[tokio::test]
            async fn [< test_prepared_type_ $name >] () -> anyhow::Result<()> {
                use sqlx::Row;

                let mut conn = $crate::new().await?;

                $(
                    let query = format!($sql, $text);

                    let row = sqlx::query(&query)
                        .bind($value)
                        .bind($value)
                        .fetch_one(&mut conn)
                        .await?;

                    let matches: i32 = row.try_get(0)?;
                    let returned: $ty = row.try_get(1)?;
                    let round_trip: $ty = row.try_get(2)?;

                    assert!(matches != 0,
                            "[1] DB value mismatch; given value: {:?}\n\
                             as text: {:?}\n\
                             as returned: {:?}\n\
                             round-trip: {:?}",
                            $value, $text, returned, round_trip);

                    assert_eq!($value, returned,
                            "[2] DB value mismatch; given value: {:?}\n\
                                     as text: {:?}\n\
                                     as returned: {:?}\n\
                                     round-trip: {:?}",
                                    $value, $text, returned, round_trip);

                    assert_eq!($value, round_trip,
                            "[3] DB value mismatch; given value: {:?}\n\
                                     as text: {:?}\n\
                                     as returned: {:?}\n\
                                     round-trip: {:?}",
                                    $value, $text, returned, round_trip);
                )+

                Ok(())
            }
        }
    };
}

// Test type decoding for both the prepared and the unprepared query API
#[macro_export]
macro_rules! test_decode_type {
    ($name:ident<$ty:ty>($($text:literal == $value:expr),+ $(,)?)) => {
        paste::item! {
            #[tokio::test]
            async fn [< test_prepared_decode_type_ $name >] () -> anyhow::Result<()> {
                use sqlx::Row;

                let mut conn = $crate::new().await?;

                $(
                    let query = format!("SELECT {}", $text);

                    let row = sqlx::query(&query)
                        .fetch_one(&mut conn)
                        .await?;

                    let rec: $ty = row.try_get(0)?;

                    assert!($value == rec, "decoded {:?} from {}", rec, $text);
                )+

                Ok(())
            }

            #[tokio::test]
            async fn [< test_unprepared_decode_type_ $name >] () -> anyhow::Result<()> {
                use sqlx::{Executor, Row};
                use futures::TryStreamExt;

                let mut conn = $crate::new().await?;

                $(
                    let query = format!("SELECT {}", $text);
                    let mut s = conn.fetch(&*query);
                    let row = s.try_next().await?.expect("query returned no rows");
                    let rec = row.try_get::<$ty, _>(0)?;

                    assert!($value == rec, "decoded {:?} from {}", rec, $text);

                    drop(s);
                )+

                Ok(())
            }
        }
    };
}
