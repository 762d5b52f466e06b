//! ISO-8601 duration values with canonical rendering.
//!
//! Parses the `P[nD][T[nH][nM][n[.f]S]]` form (letters case-insensitive,
//! optional leading sign, fraction only on seconds, up to nanosecond
//! precision) and renders the normalized hour/minute/second form: `P1D`
//! parses fine but renders as `PT24H`, so rendering is canonical regardless
//! of how the value was written.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

/// Total magnitude is capped at `i64::MAX` seconds plus a second's worth of
/// nanos, so `seconds()` can always return an `i64`.
const MAX_TOTAL_NANOS: i128 = i64::MAX as i128 * NANOS_PER_SECOND + (NANOS_PER_SECOND - 1);

/// An ISO-8601 duration with nanosecond precision.
///
/// Immutable value type; ordering, equality, and hashing are over the total
/// nanosecond count, so `P1D` and `PT24H` are the same duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoDuration {
    total_nanos: i128,
}

impl IsoDuration {
    pub const ZERO: IsoDuration = IsoDuration { total_nanos: 0 };

    pub fn from_secs(secs: i64) -> Self {
        Self {
            total_nanos: secs as i128 * NANOS_PER_SECOND,
        }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self {
            total_nanos: millis as i128 * 1_000_000,
        }
    }

    /// Whole seconds, truncated toward zero.
    pub fn seconds(&self) -> i64 {
        (self.total_nanos / NANOS_PER_SECOND) as i64
    }

    /// Sub-second nanoseconds, carrying the duration's sign.
    pub fn subsec_nanos(&self) -> i32 {
        (self.total_nanos % NANOS_PER_SECOND) as i32
    }

    pub fn is_zero(&self) -> bool {
        self.total_nanos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.total_nanos < 0
    }

    /// Convert to a [`std::time::Duration`]. `None` for negative durations.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        if self.is_negative() {
            return None;
        }
        let secs = (self.total_nanos / NANOS_PER_SECOND) as u64;
        let nanos = (self.total_nanos % NANOS_PER_SECOND) as u32;
        Some(std::time::Duration::new(secs, nanos))
    }
}

/// The input is not a parseable ISO-8601 duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid ISO-8601 duration")]
pub struct ParseDurationError;

impl FromStr for IsoDuration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        let mut i = 0;

        let negative = match b.first().copied() {
            Some(b'+') => {
                i += 1;
                false
            }
            Some(b'-') => {
                i += 1;
                true
            }
            _ => false,
        };

        if !matches!(b.get(i).copied(), Some(b'P' | b'p')) {
            return Err(ParseDurationError);
        }
        i += 1;

        let mut total: i128 = 0;
        let mut any = false;

        // Date part: only days are meaningful for a duration.
        if let Some(days) = take_digits(b, &mut i)? {
            if !matches!(b.get(i).copied(), Some(b'D' | b'd')) {
                return Err(ParseDurationError);
            }
            i += 1;
            total += days as i128 * NANOS_PER_DAY;
            any = true;
        }

        if matches!(b.get(i).copied(), Some(b'T' | b't')) {
            i += 1;
            // Components must appear in H, M, S order, each at most once.
            let mut rank = 0;
            let mut time_any = false;
            while let Some(n) = take_digits(b, &mut i)? {
                match b.get(i).copied() {
                    Some(b'H' | b'h') if rank < 1 => {
                        i += 1;
                        rank = 1;
                        total += n as i128 * NANOS_PER_HOUR;
                    }
                    Some(b'M' | b'm') if rank < 2 => {
                        i += 1;
                        rank = 2;
                        total += n as i128 * NANOS_PER_MINUTE;
                    }
                    Some(b'S' | b's') if rank < 3 => {
                        i += 1;
                        rank = 3;
                        total += n as i128 * NANOS_PER_SECOND;
                    }
                    Some(b'.' | b',') if rank < 3 => {
                        i += 1;
                        let start = i;
                        let Some(frac) = take_digits(b, &mut i)? else {
                            return Err(ParseDurationError);
                        };
                        let digits = (i - start) as u32;
                        if digits > 9 || !matches!(b.get(i).copied(), Some(b'S' | b's')) {
                            return Err(ParseDurationError);
                        }
                        i += 1;
                        rank = 3;
                        total += n as i128 * NANOS_PER_SECOND
                            + frac as i128 * 10i128.pow(9 - digits);
                    }
                    _ => return Err(ParseDurationError),
                }
                time_any = true;
            }
            if !time_any {
                return Err(ParseDurationError);
            }
            any = true;
        }

        if !any || i != b.len() || total > MAX_TOTAL_NANOS {
            return Err(ParseDurationError);
        }

        Ok(IsoDuration {
            total_nanos: if negative { -total } else { total },
        })
    }
}

/// Consume a run of ASCII digits into a `u64`. `Ok(None)` when the cursor is
/// not on a digit; `Err` when the run overflows.
fn take_digits(b: &[u8], i: &mut usize) -> Result<Option<u64>, ParseDurationError> {
    let start = *i;
    let mut n: u64 = 0;
    while let Some(d) = b.get(*i).filter(|c| c.is_ascii_digit()) {
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add((d - b'0') as u64))
            .ok_or(ParseDurationError)?;
        *i += 1;
    }
    Ok((*i > start).then_some(n))
}

impl fmt::Display for IsoDuration {
    /// Canonical form: `PT0S` for zero, otherwise hours (unbounded), minutes,
    /// and seconds with trailing-zero-trimmed fraction. Negative durations
    /// take a leading `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_nanos == 0 {
            return write!(f, "PT0S");
        }

        if self.total_nanos < 0 {
            write!(f, "-")?;
        }
        let abs = self.total_nanos.unsigned_abs();
        let nanos = (abs % NANOS_PER_SECOND as u128) as u32;
        let total_secs = (abs / NANOS_PER_SECOND as u128) as u64;
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let secs = total_secs % 60;

        write!(f, "PT")?;
        if hours > 0 {
            write!(f, "{hours}H")?;
        }
        if minutes > 0 {
            write!(f, "{minutes}M")?;
        }
        if secs > 0 || nanos > 0 || (hours == 0 && minutes == 0) {
            if nanos > 0 {
                let frac = format!("{nanos:09}");
                write!(f, "{secs}.{}S", frac.trim_end_matches('0'))?;
            } else {
                write!(f, "{secs}S")?;
            }
        }
        Ok(())
    }
}
