//! Token expiry: embedding and checking the Unix timestamp segment.

use crate::clock::Clock;
use crate::SignetError;
use chrono::{DateTime, Duration, Utc};

/// Delimiter between token segments.
pub const DELIMITER: char = '.';

/// Compute the absolute expiry timestamp (Unix seconds) for a token signed now.
///
/// Sub-second precision is truncated. Durations that overflow the calendar
/// saturate at the representable bounds.
pub fn expires_at<C: Clock + ?Sized>(clock: &C, duration: Duration) -> i64 {
    let now = clock.now_utc();
    now.checked_add_signed(duration)
        .unwrap_or(if duration > Duration::zero() {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        })
        .timestamp()
}

/// Append the expiry segment: `<message>.<timestamp>`.
pub fn append_expiry(message: &str, expires: i64) -> String {
    format!("{}{}{}", message, DELIMITER, expires)
}

/// Split `<message>.<timestamp>` on the last delimiter.
///
/// # Errors
/// * `InvalidFormat` - No delimiter present
/// * `InvalidTimestamp` - Suffix is not a base-10 integer
pub fn split_expiry(message: &str) -> Result<(&str, i64), SignetError> {
    let (original, timestamp) = message
        .rsplit_once(DELIMITER)
        .ok_or(SignetError::InvalidFormat)?;

    let expires = timestamp
        .parse::<i64>()
        .map_err(|_| SignetError::InvalidTimestamp)?;

    Ok((original, expires))
}

/// Check that an expiry timestamp is strictly after the current time.
///
/// Compared in whole seconds: a whole-second `expires` is after `now` exactly
/// when it is after `now` truncated to the second. Any `i64` is accepted,
/// including values beyond the calendar range.
///
/// # Errors
/// * `Expired` - Timestamp is at or before now
pub fn check_expiry<C: Clock + ?Sized>(expires: i64, clock: &C) -> Result<(), SignetError> {
    if expires > clock.now_utc().timestamp() {
        Ok(())
    } else {
        Err(SignetError::Expired)
    }
}

/// Split and check in one step, returning the original message.
pub fn strip_and_check_expiry<'a, C: Clock + ?Sized>(
    message: &'a str,
    clock: &C,
) -> Result<&'a str, SignetError> {
    let (original, expires) = split_expiry(message)?;
    check_expiry(expires, clock)?;
    Ok(original)
}
