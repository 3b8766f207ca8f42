//! Converts UTC timestamps to a local timezone for display.

use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};
use time_tz::{Offset, TimeZone, Tz};

use crate::Error;

/// The timezone used for dates when none is configured.
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:zero]/[month repr:numerical padding:zero]/[year]");

/// Get the timezone for a canonical timezone name, e.g. "America/Sao_Paulo".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the name is not in the timezone database.
pub fn get_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))
}

/// The UTC offset that `timezone` observed at `instant`.
///
/// Daylight saving time is taken from the timezone's rules at `instant`,
/// not from the current date.
pub fn get_offset_at(timezone: &Tz, instant: OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(&instant).to_utc()
}

/// Format `timestamp` as a "dd/MM/yyyy" date in `timezone`.
///
/// # Errors
/// Returns [Error::InvalidTimestamp] if the converted date-time is outside
/// the supported range of years, or [Error::DateFormatError] if the date
/// cannot be formatted.
pub fn format_date(timestamp: OffsetDateTime, timezone: &Tz) -> Result<String, Error> {
    let offset = get_offset_at(timezone, timestamp);
    let local_timestamp = timestamp
        .checked_to_offset(offset)
        .ok_or_else(|| Error::InvalidTimestamp(timestamp.to_string()))?;

    local_timestamp
        .format(DATE_FORMAT)
        .map_err(|error| Error::DateFormatError(error.to_string()))
}

#[cfg(test)]
mod tests {
    use time::{UtcOffset, macros::datetime};

    use crate::Error;

    use super::{DEFAULT_TIMEZONE, format_date, get_offset_at, get_timezone};

    #[test]
    fn rolls_date_back_across_midnight() {
        let timezone = get_timezone(DEFAULT_TIMEZONE).unwrap();

        let got = format_date(datetime!(2023-03-15 02:30 UTC), timezone).unwrap();

        assert_eq!(got, "14/03/2023");
    }

    #[test]
    fn keeps_date_when_offset_does_not_cross_midnight() {
        let timezone = get_timezone(DEFAULT_TIMEZONE).unwrap();

        let got = format_date(datetime!(2023-03-15 03:00 UTC), timezone).unwrap();

        assert_eq!(got, "15/03/2023");
    }

    #[test]
    fn pads_day_and_month() {
        let timezone = get_timezone("Etc/UTC").unwrap();

        let got = format_date(datetime!(2020-04-05 12:00 UTC), timezone).unwrap();

        assert_eq!(got, "05/04/2020");
    }

    #[test]
    fn applies_historical_daylight_saving_time() {
        let timezone = get_timezone(DEFAULT_TIMEZONE).unwrap();

        // Brazil observed UTC-2 summer time until February 2018.
        assert_eq!(
            get_offset_at(timezone, datetime!(2018-01-15 12:00 UTC)),
            UtcOffset::from_hms(-2, 0, 0).unwrap()
        );
        assert_eq!(
            format_date(datetime!(2018-01-15 01:30 UTC), timezone).unwrap(),
            "14/01/2018"
        );
        assert_eq!(
            format_date(datetime!(2018-01-15 02:30 UTC), timezone).unwrap(),
            "15/01/2018"
        );
    }

    #[test]
    fn uses_standard_offset_after_daylight_saving_was_abolished() {
        let timezone = get_timezone(DEFAULT_TIMEZONE).unwrap();

        assert_eq!(
            get_offset_at(timezone, datetime!(2023-01-15 12:00 UTC)),
            UtcOffset::from_hms(-3, 0, 0).unwrap()
        );
    }

    #[test]
    fn accepts_timestamps_with_non_utc_offsets() {
        let timezone = get_timezone(DEFAULT_TIMEZONE).unwrap();

        // Same instant as 2023-03-15 02:30 UTC.
        let got = format_date(datetime!(2023-03-15 14:30 +12), timezone).unwrap();

        assert_eq!(got, "14/03/2023");
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = get_timezone("Mars/Olympus_Mons");

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }
}
