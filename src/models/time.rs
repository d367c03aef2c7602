use serde::{Deserialize, Serialize};

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(f64);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - 40587.0) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86400.0 + 40587.0)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        chrono::DateTime::from_timestamp(secs_i64, nanos).unwrap_or(chrono::DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }

    /// Midnight UTC at the start of a calendar date.
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        let dt = date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            .and_utc();
        Self::from_datetime(dt)
    }

    /// Elapsed time from `earlier` to `self`, in hours.
    pub fn hours_since(&self, earlier: ModifiedJulianDate) -> f64 {
        (self.value() - earlier.value()) * 24.0
    }

    /// Elapsed time from `earlier` to `self`, in minutes.
    pub fn minutes_since(&self, earlier: ModifiedJulianDate) -> f64 {
        (self.value() - earlier.value()) * 24.0 * 60.0
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl std::ops::Add<f64> for ModifiedJulianDate {
    type Output = ModifiedJulianDate;

    /// Offset an MJD by a number of days.
    fn add(self, days: f64) -> ModifiedJulianDate {
        ModifiedJulianDate::new(self.0 + days)
    }
}
