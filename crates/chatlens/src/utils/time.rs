use time::{OffsetDateTime, UtcOffset};

const NANOS_PER_MILLI: i128 = 1_000_000;

#[must_use]
pub fn format_epoch_seconds(seconds: f64) -> Option<String> {
    if !seconds.is_finite() {
        return None;
    }

    let millis = (seconds * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return None;
    }

    let nanos = i128::from(millis as i64).checked_mul(NANOS_PER_MILLI)?;
    let dt = OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()?
        .to_offset(UtcOffset::UTC);
    Some(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.millisecond()
    ))
}

#[cfg(test)]
mod tests {
    use super::format_epoch_seconds;

    #[test]
    fn formats_epoch_origin() {
        assert_eq!(
            format_epoch_seconds(0.0).as_deref(),
            Some("1970-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn keeps_millisecond_fraction() {
        assert_eq!(
            format_epoch_seconds(1_700_000_000.5).as_deref(),
            Some("2023-11-14T22:13:20.500Z")
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(format_epoch_seconds(f64::NAN), None);
        assert_eq!(format_epoch_seconds(f64::INFINITY), None);
    }
}
