//! Raw, time indexed model output as handed over by the data provider.
use chrono::NaiveDateTime;
use optional::{none, some, Optioned};
use std::collections::HashMap;

/// A table of model fields keyed by name, e.g. `temperature_850hPa`, where every field is a time
/// series.
///
/// Values that are missing or not numeric are stored as missing. All series are expected to be the
/// same length as the time axis, but nothing enforces it; lookups past the end of a series are
/// treated as missing values.
#[derive(Clone, Debug, Default)]
pub struct RawProfileData {
    times: Vec<NaiveDateTime>,
    fields: HashMap<String, Vec<Optioned<f64>>>,
}

impl RawProfileData {
    /// Create a new, empty table. This is a proxy for default with a clearer name.
    #[inline]
    pub fn new() -> Self {
        RawProfileData::default()
    }

    /// Builder method for the valid times of the series.
    #[inline]
    pub fn with_times(self, times: Vec<NaiveDateTime>) -> Self {
        Self { times, ..self }
    }

    /// Builder method to add a field.
    ///
    /// Non-finite values are stored as missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_indices::RawProfileData;
    ///
    /// let raw = RawProfileData::new()
    ///     .with_field("temperature_2m", vec![Some(20.0), None, Some(std::f64::NAN)]);
    ///
    /// assert_eq!(raw.value("temperature_2m", 0), Some(20.0));
    /// assert_eq!(raw.value("temperature_2m", 1), None);
    /// assert_eq!(raw.value("temperature_2m", 2), None);
    /// assert_eq!(raw.value("temperature_2m", 3), None);
    /// assert_eq!(raw.value("dewpoint_2m", 0), None);
    /// ```
    pub fn with_field<K, I>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = Option<f64>>,
    {
        self.insert_field(key, values);
        self
    }

    /// Add a field, replacing any field already stored under the same key.
    pub fn insert_field<K, I>(&mut self, key: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = Option<f64>>,
    {
        let series = values
            .into_iter()
            .map(|val| match val {
                Some(v) if v.is_finite() => some(v),
                _ => none(),
            })
            .collect();

        self.fields.insert(key.into(), series);
    }

    /// Get the valid times.
    #[inline]
    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    /// Get the valid time at an index, if there is a time axis.
    #[inline]
    pub fn time(&self, time_idx: usize) -> Option<NaiveDateTime> {
        self.times.get(time_idx).copied()
    }

    /// Get a whole series.
    #[inline]
    pub fn field(&self, key: &str) -> Option<&[Optioned<f64>]> {
        self.fields.get(key).map(|series| series.as_slice())
    }

    /// Iterate over all the keys in the table, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// The number of time steps available. This is the length of the time axis, or if there is no
    /// time axis, the length of the longest series.
    pub fn num_times(&self) -> usize {
        if !self.times.is_empty() {
            self.times.len()
        } else {
            self.fields.values().map(|s| s.len()).max().unwrap_or(0)
        }
    }

    /// Look up a numeric value.
    ///
    /// Returns `None` if the key is not present, the index is past the end of the series, or the
    /// value is missing.
    #[inline]
    pub fn value(&self, key: &str, time_idx: usize) -> Option<f64> {
        self.fields
            .get(key)
            .and_then(|series| series.get(time_idx))
            .and_then(|val| val.into_option())
    }
}
