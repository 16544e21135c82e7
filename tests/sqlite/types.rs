use sqlite_timestamp::SqliteTimestamp;
use sqlite_timestamp_test::{test_decode_type, test_type};
use time::macros::datetime;

macro_rules! ts {
    ($($dt:tt)+) => {
        SqliteTimestamp::new(datetime!($($dt)+))
    };
}

test_type!(timestamp<SqliteTimestamp>(
    "SELECT datetime({0}) is datetime(?), {0}, ?",
    "'2015-11-19 01:01:39+01:00'" == ts!(2015 - 11 - 19 1:01:39 +1),
    "'2014-10-18 00:00:38.697+00:00'" == ts!(2014 - 10 - 18 00:00:38.697 +0),
    "'2016-03-07T22:36:55.135+03:30'" == ts!(2016 - 3 - 7 22:36:55.135 +3:30),
    "'2019-01-02 05:10:20'" == ts!(2019 - 1 - 2 5:10:20 UTC),
    "'2017-11-30 03:08'" == ts!(2017 - 11 - 30 3:08 UTC),
    "'2016-10-29T02:07:17'" == ts!(2016 - 10 - 29 2:07:17 UTC),
    "'2014-08-27T00:05'" == ts!(2014 - 8 - 27 0:05 UTC),
    "'2013-07-26 23:04:14Z'" == ts!(2013 - 7 - 26 23:04:14 UTC),
    "'2009-03-22T19:00:10.21Z'" == ts!(2009 - 3 - 22 19:00:10.21 UTC),
));

test_type!(timestamp_date<SqliteTimestamp>(
    "SELECT date({0}) is date(?), {0}, ?",
    "'2024-03-01'" == ts!(2024 - 3 - 1 0:00 UTC),
    "'1999-12-31'" == ts!(1999 - 12 - 31 0:00 UTC),
));

test_decode_type!(timestamp_text<SqliteTimestamp>(
    "'2024-03-01 12:30:00'" == ts!(2024 - 3 - 1 12:30:00 UTC),
    "'2020-01-02 03:04:05.123456789'" == ts!(2020 - 1 - 2 3:04:05.123456789 UTC),
    "'2013-09-17 23:59:00-01:00'" == ts!(2013 - 9 - 18 0:59 UTC),
));

test_decode_type!(timestamp_blob<SqliteTimestamp>(
    "CAST('2024-03-01' AS BLOB)" == ts!(2024 - 3 - 1 0:00 UTC),
    "X'323032342D30332D30312031323A33303A3030'" == ts!(2024 - 3 - 1 12:30:00 UTC),
));

test_decode_type!(timestamp_empty<SqliteTimestamp>(
    "''" == SqliteTimestamp::ZERO,
    "X''" == SqliteTimestamp::ZERO,
));

test_decode_type!(timestamp_sqlite_functions<SqliteTimestamp>(
    "datetime('2024-03-01 12:30:00', '+1 day')" == ts!(2024 - 3 - 2 12:30:00 UTC),
    "date('2024-03-01 12:30:00')" == ts!(2024 - 3 - 1 0:00 UTC),
    "strftime('%Y-%m-%dT%H:%M', '2024-03-01 12:30:00')" == ts!(2024 - 3 - 1 12:30 UTC),
));

test_decode_type!(nullable_timestamp<Option<SqliteTimestamp>>(
    "NULL" == None::<SqliteTimestamp>,
    "'2024-03-01 12:30:00'" == Some(ts!(2024 - 3 - 1 12:30:00 UTC)),
));

#[tokio::test]
async fn it_scans_a_table_column() -> anyhow::Result<()> {
    use sqlx::Row;

    let mut conn = sqlite_timestamp_test::new().await?;

    sqlx::query("CREATE TEMPORARY TABLE events (id INTEGER PRIMARY KEY, at DATETIME NOT NULL)")
        .execute(&mut conn)
        .await?;

    sqlx::query("INSERT INTO events (at) VALUES ('2024-03-01 12:30:00'), ('2024-03-01'), (?)")
        .bind(ts!(2024 - 3 - 1 12:30:00 +2))
        .execute(&mut conn)
        .await?;

    let rows = sqlx::query("SELECT at FROM events ORDER BY id")
        .fetch_all(&mut conn)
        .await?;

    let scanned = rows
        .iter()
        .map(|row| row.try_get::<SqliteTimestamp, _>("at"))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(
        scanned,
        [
            ts!(2024 - 3 - 1 12:30:00 UTC),
            ts!(2024 - 3 - 1 0:00 UTC),
            ts!(2024 - 3 - 1 10:30:00 UTC),
        ]
    );

    // the bound value keeps its offset on the way back
    assert_eq!(scanned[2].offset(), time::UtcOffset::from_hms(2, 0, 0)?);

    Ok(())
}

#[tokio::test]
async fn it_binds_the_native_instant() -> anyhow::Result<()> {
    let mut conn = sqlite_timestamp_test::new().await?;

    let stored: String = sqlx::query_scalar("SELECT ?")
        .bind(ts!(2024 - 3 - 1 12:30:00 UTC))
        .fetch_one(&mut conn)
        .await?;

    assert_eq!(stored, "2024-03-01T12:30:00Z");

    Ok(())
}
