use chrono::DateTime;

/// ISO-8601 local date-time, second precision, no offset designator.
pub const ISO_LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats epoch seconds as a UTC calendar date-time without a zone suffix.
///
/// Returns `None` when the timestamp falls outside the representable range.
/// Strings produced here sort lexicographically in chronological order for
/// four-digit years.
pub fn epoch_to_local_iso(epoch_secs: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|dt| dt.naive_utc().format(ISO_LOCAL_DATE_TIME).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_in_utc() {
        assert_eq!(epoch_to_local_iso(0).as_deref(), Some("1970-01-01T00:00:00"));
        assert_eq!(
            epoch_to_local_iso(1_700_000_000).as_deref(),
            Some("2023-11-14T22:13:20")
        );
        assert_eq!(
            epoch_to_local_iso(1_700_003_600).as_deref(),
            Some("2023-11-14T23:13:20")
        );
    }

    #[test]
    fn keeps_zero_seconds() {
        assert_eq!(
            epoch_to_local_iso(1_699_999_980).as_deref(),
            Some("2023-11-14T22:13:00")
        );
    }

    #[test]
    fn negative_epochs_precede_1970() {
        assert_eq!(epoch_to_local_iso(-1).as_deref(), Some("1969-12-31T23:59:59"));
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(epoch_to_local_iso(i64::MAX).is_none());
        assert!(epoch_to_local_iso(i64::MIN).is_none());
    }
}
