//! Imagery query windows

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fieldgeo_core::error::{FieldgeoError, Result};

/// Length of every imagery query window, in days. Fixed business rule.
pub const IMAGE_QUERY_WINDOW_DAYS: i64 = 14;

const DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Start and end of an imagery query, both at midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl QueryWindow {
    /// Window opening at midnight on `planting_date` (`YYYY-MM-DD`)
    pub fn from_planting_date(planting_date: &str) -> Result<Self> {
        // chrono skips whitespace before numeric fields
        if planting_date.contains(char::is_whitespace) {
            return Err(FieldgeoError::parse(
                "date",
                format!("'{}': whitespace is not allowed", planting_date),
            ));
        }
        let date = NaiveDate::parse_from_str(planting_date, DATE_FORMAT)
            .map_err(|e| FieldgeoError::parse("date", format!("'{}': {}", planting_date, e)))?;
        let start = date.and_time(chrono::NaiveTime::MIN);
        let end = start
            .checked_add_signed(Duration::days(IMAGE_QUERY_WINDOW_DAYS))
            .ok_or_else(|| {
                FieldgeoError::parse("date", format!("'{}' is out of range", planting_date))
            })?;
        Ok(Self { start, end })
    }

    pub fn start_iso(&self) -> String {
        self.start.format(ISO_DATETIME_FORMAT).to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.format(ISO_DATETIME_FORMAT).to_string()
    }
}

/// ISO-8601 `(start, end)` of the imagery query window for a planting date
pub fn image_query_window(planting_date: &str) -> Result<(String, String)> {
    let window = QueryWindow::from_planting_date(planting_date)?;
    Ok((window.start_iso(), window.end_iso()))
}
