//! Display formatting for monetary amounts and payment timestamps.

use jiff::{Timestamp, fmt::strtime, tz::TimeZone};
use rust_decimal::Decimal;

const PAYMENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Format an amount held in minor currency units (e.g. cents) as a decimal
/// string with two fractional digits: `12345` becomes `123.45`.
#[must_use]
pub fn minor_units(minor: i64) -> String {
    Decimal::new(minor, 2).to_string()
}

/// Format an amount in minor units together with its currency code:
/// `12345` with `USD` becomes `123.45 USD`.
#[must_use]
pub fn amount_with_currency(minor: i64, currency: &str) -> String {
    format!("{} {currency}", minor_units(minor))
}

/// Format a Unix-seconds payment timestamp in the system time zone.
#[must_use]
pub fn payment_timestamp(seconds: i64) -> String {
    payment_timestamp_in(seconds, TimeZone::system())
}

/// Format a Unix-seconds payment timestamp in the given time zone.
///
/// Falls back to the raw seconds value when the timestamp is outside the
/// representable range.
#[must_use]
pub fn payment_timestamp_in(seconds: i64, tz: TimeZone) -> String {
    Timestamp::from_second(seconds)
        .map(|instant| instant.to_zoned(tz))
        .and_then(|zoned| strtime::format(PAYMENT_TIMESTAMP_FORMAT, &zoned))
        .unwrap_or_else(|_error| seconds.to_string())
}
