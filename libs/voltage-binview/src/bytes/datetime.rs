//! S7 DATE_AND_TIME codec
//!
//! 8-byte BCD record used by Siemens S7 PLCs:
//!
//! | byte | content                                   |
//! |------|-------------------------------------------|
//! | 0    | year (two digits, < 90 → 20xx, else 19xx) |
//! | 1    | month 1..=12                              |
//! | 2    | day 1..=31                                |
//! | 3    | hour                                      |
//! | 4    | minute                                    |
//! | 5    | second                                    |
//! | 6    | millisecond hundreds and tens             |
//! | 7    | millisecond ones (high nibble), weekday (low nibble, 1 = Sunday) |
//!
//! Endianness does not apply; the record is read byte by byte.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use tracing::warn;

use super::{bcd_to_decimal, decimal_to_bcd, read_array, write_array};
use crate::error::{BinViewError, Result};

/// Size of an S7 date-time record in bytes
pub const S7_DATETIME_LEN: usize = 8;

/// Two-digit years below this pivot belong to the 21st century
pub const S7_CENTURY_PIVOT: i32 = 90;

/// First and last years the two-digit year field can express
pub const S7_MIN_YEAR: i32 = 1990;
pub const S7_MAX_YEAR: i32 = 2089;

/// Timestamp returned when a record names an impossible calendar value
pub fn s7_epoch() -> NaiveDateTime {
    NaiveDateTime::default()
}

/// Decode the S7 date-time record at `offset`.
///
/// BCD violations propagate as [`BinViewError::InvalidBcdDigit`]. A record
/// whose fields are valid BCD but do not form a real date or time (month 13,
/// February 30th, hour 25) decodes to [`s7_epoch`] instead of failing.
pub fn get_s7_datetime(buf: &[u8], offset: usize) -> Result<NaiveDateTime> {
    let raw = read_array::<S7_DATETIME_LEN>(buf, offset)?;

    let mut year = i32::from(bcd_to_decimal(raw[0])?);
    year += if year < S7_CENTURY_PIVOT { 2000 } else { 1900 };

    let month = u32::from(bcd_to_decimal(raw[1])?);
    let day = u32::from(bcd_to_decimal(raw[2])?);
    let hour = u32::from(bcd_to_decimal(raw[3])?);
    let minute = u32::from(bcd_to_decimal(raw[4])?);
    let second = u32::from(bcd_to_decimal(raw[5])?);
    // low byte carries ms ones * 10 + weekday
    let millisecond =
        u32::from(bcd_to_decimal(raw[6])?) * 10 + u32::from(bcd_to_decimal(raw[7])?) / 10;

    let decoded = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millisecond));

    match decoded {
        Some(datetime) => Ok(datetime),
        None => {
            warn!(
                "S7 date-time at offset {} is not a valid calendar value \
                 ({}-{}-{} {}:{}:{}.{}), using epoch",
                offset, year, month, day, hour, minute, second, millisecond
            );
            Ok(s7_epoch())
        },
    }
}

/// Encode `datetime` as an S7 record at `offset`.
///
/// Years outside 1990..=2089 cannot be represented and are rejected with
/// [`BinViewError::OutOfRange`] before anything is written.
pub fn set_s7_datetime(buf: &mut [u8], offset: usize, datetime: &NaiveDateTime) -> Result<()> {
    let year = datetime.year();
    if !(S7_MIN_YEAR..=S7_MAX_YEAR).contains(&year) {
        return Err(BinViewError::out_of_range(year, S7_MIN_YEAR, S7_MAX_YEAR));
    }

    // leap-second nanos run past 1e9
    let millisecond = (datetime.nanosecond() / 1_000_000).min(999);
    let weekday = datetime.weekday().number_from_sunday();

    let record = [
        decimal_to_bcd((year % 100) as u8)?,
        decimal_to_bcd(datetime.month() as u8)?,
        decimal_to_bcd(datetime.day() as u8)?,
        decimal_to_bcd(datetime.hour() as u8)?,
        decimal_to_bcd(datetime.minute() as u8)?,
        decimal_to_bcd(datetime.second() as u8)?,
        decimal_to_bcd((millisecond / 10) as u8)?,
        decimal_to_bcd(((millisecond % 10) * 10 + weekday) as u8)?,
    ];

    write_array(buf, offset, record)
}
