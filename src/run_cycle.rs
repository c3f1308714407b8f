//! Estimate which GFS model run is the newest one available.
use chrono::{DateTime, Timelike, Utc};
use strum_macros::{AsRefStr, Display, EnumIter};

/// The four daily GFS initialization times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum ModelRun {
    /// 00 UTC
    #[strum(serialize = "00Z")]
    Z00,
    /// 06 UTC
    #[strum(serialize = "06Z")]
    Z06,
    /// 12 UTC
    #[strum(serialize = "12Z")]
    Z12,
    /// 18 UTC
    #[strum(serialize = "18Z")]
    Z18,
}

impl ModelRun {
    /// The most recent run expected to be available at `now`.
    ///
    /// Output is assumed to be ready about 3 hours after initialization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use sounding_indices::ModelRun;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 5, 20, 10, 30, 0).unwrap();
    /// assert_eq!(ModelRun::estimate(now), ModelRun::Z06);
    /// assert_eq!(ModelRun::estimate(now).to_string(), "06Z");
    /// ```
    pub fn estimate(now: DateTime<Utc>) -> Self {
        match now.hour() {
            3..=8 => ModelRun::Z00,
            9..=14 => ModelRun::Z06,
            15..=20 => ModelRun::Z12,
            _ => ModelRun::Z18,
        }
    }

    /// The most recent run expected to be available right now.
    #[inline]
    pub fn latest() -> Self {
        Self::estimate(Utc::now())
    }

    /// Initialization hour in UTC.
    #[inline]
    pub fn hour(self) -> u32 {
        match self {
            ModelRun::Z00 => 0,
            ModelRun::Z06 => 6,
            ModelRun::Z12 => 12,
            ModelRun::Z18 => 18,
        }
    }
}
