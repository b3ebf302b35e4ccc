//! Wall-clock source for timestamps stamped onto client state.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Current UTC time. Uses `Date.now()` under wasm via time's `wasm-bindgen` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Render `at` as an RFC 3339 UTC timestamp truncated to milliseconds,
/// matching what `Date.prototype.toISOString` stores. The fraction is always
/// three digits, even when zero.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(UtcOffset::UTC);
    let layout = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.format(layout).unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Parse a timestamp produced by [`iso_timestamp`].
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}
