use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::AppError;
use crate::models::reading::Reading;

/// One PVOutput status upload: the wall-clock stamp plus the two lifetime
/// energy totals extracted from an Envoy report.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    /// Calendar date, `YYYYMMDD`.
    pub date: String,
    /// 24-hour wall-clock time, `HH:MM`.
    pub time: String,
    /// Lifetime production in watt-hours (PVOutput `v1`).
    pub generated_wh: f64,
    /// Lifetime consumption in watt-hours (PVOutput `v3`).
    pub consumed_wh: f64,
}

impl StatusUpdate {
    /// Builds an update stamped with the current instant, rendered in the
    /// named timezone or, when `timezone` is `None`, the local one. An
    /// unresolvable timezone name is an error, not a silent fallback.
    pub fn now(reading: &Reading, timezone: Option<&str>) -> Result<Self, AppError> {
        match timezone {
            Some(name) => {
                let tz: Tz = name
                    .parse()
                    .map_err(|_| AppError::UnknownTimezone(name.to_string()))?;
                Self::at(reading, &Utc::now().with_timezone(&tz))
            }
            None => Self::at(reading, &Local::now()),
        }
    }

    /// Builds an update stamped with an explicit instant.
    pub fn at<Z>(reading: &Reading, instant: &DateTime<Z>) -> Result<Self, AppError>
    where
        Z: TimeZone,
        Z::Offset: std::fmt::Display,
    {
        let (date, time) = format_timestamp(instant);
        Ok(Self {
            date,
            time,
            generated_wh: reading.production_meter()?.wh_lifetime,
            consumed_wh: reading.consumption_meter()?.wh_lifetime,
        })
    }
}

/// Splits an instant into PVOutput's `YYYYMMDD` date and `HH:MM` time.
pub fn format_timestamp<Z>(instant: &DateTime<Z>) -> (String, String)
where
    Z: TimeZone,
    Z::Offset: std::fmt::Display,
{
    (
        instant.format("%Y%m%d").to_string(),
        instant.format("%H:%M").to_string(),
    )
}

/// Formats a watt-hour value the way PVOutput expects: a plain decimal
/// string, no exponent, no trailing zeros.
pub fn format_watt_hours(value: f64) -> String {
    format!("{value}")
}
