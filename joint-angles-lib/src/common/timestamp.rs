use std::fmt;

use chrono::{NaiveDateTime, Timelike};

/// Format of the date and time tokens in a sensor log line, joined by a space.
pub const SENSOR_TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M:%S%.f";

const MAX_FRACTION_DIGITS: usize = 6;

/// Wall-clock time of a sensor reading, microsecond precision.
///
/// Used as the join key between sensors, so equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    /// Parses the date token (`MM/DD/YY`) and time token (`HH:MM:SS.ffffff`)
    /// of a sensor log line.
    ///
    /// The fractional seconds must be present and have 1 to 6 digits. Leap
    /// seconds (`:60`) are rejected.
    pub fn parse_sensor(date: &str, time: &str) -> Option<Self> {
        let (_, fraction) = time.split_once('.')?;
        if fraction.is_empty()
            || fraction.len() > MAX_FRACTION_DIGITS
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let date_time =
            NaiveDateTime::parse_from_str(&format!("{} {}", date, time), SENSOR_TIMESTAMP_FORMAT)
                .ok()?;
        // chrono folds second 60 into nanosecond >= 1e9
        if date_time.nanosecond() >= 1_000_000_000 {
            return None;
        }
        Some(Self(date_time))
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    pub fn microsecond(&self) -> u32 {
        self.0.nanosecond() / 1_000
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }
}

impl fmt::Display for Timestamp {
    // 2023-07-14 13:05:02.123456, fraction dropped on whole seconds
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))?;
        let microsecond = self.microsecond();
        if microsecond != 0 {
            write!(f, ".{:06}", microsecond)?;
        }
        Ok(())
    }
}
