//! DateTime display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A `Timestamp` shown in the system timezone.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let ts = Timestamp::from_second(1_748_736_000).unwrap(); // 2025-06-01 00:00:00 UTC
        let output = LocalDateTime(&ts).to_string();
        // Date part depends on the local zone; the layout does not.
        assert_eq!(&output[4..5], "-");
        assert_eq!(&output[13..14], ":");
        assert!(output.starts_with("2025-0"));
    }
}
