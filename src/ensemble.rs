//! Reduce ensemble output to a single deterministic series per variable.
//!
//! Ensemble providers return one series per member with keys like `cape_member03`. The members
//! are averaged so the rest of the crate can treat the result like any other model run.
use crate::raw_data::RawProfileData;
use std::collections::HashMap;

const MEMBER_TAG: &str = "_member";

/// Split a key like `temperature_850hPa_member07` into `temperature_850hPa`. Returns `None` for
/// keys that are not member keys.
fn member_base(key: &str) -> Option<&str> {
    let idx = key.rfind(MEMBER_TAG)?;
    let suffix = &key[(idx + MEMBER_TAG.len())..];

    if idx > 0 && !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) {
        Some(&key[..idx])
    } else {
        None
    }
}

impl RawProfileData {
    /// Collapse every group of ensemble member fields into a single field holding the mean of the
    /// members.
    ///
    /// Missing member values are skipped when averaging, if all members are missing at a time
    /// step the mean is missing too. Fields that are not member fields are kept as is, except a
    /// member mean replaces a control field stored under the base key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_indices::RawProfileData;
    ///
    /// let raw = RawProfileData::new()
    ///     .with_field("cape_member01", vec![Some(100.0), None])
    ///     .with_field("cape_member02", vec![Some(300.0), None])
    ///     .with_field("lifted_index", vec![Some(-2.0), Some(1.0)])
    ///     .ensemble_mean();
    ///
    /// assert_eq!(raw.value("cape", 0), Some(200.0));
    /// assert_eq!(raw.value("cape", 1), None);
    /// assert_eq!(raw.value("lifted_index", 0), Some(-2.0));
    /// assert!(raw.field("cape_member01").is_none());
    /// ```
    pub fn ensemble_mean(&self) -> RawProfileData {
        let mut groups: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut reduced = RawProfileData::new().with_times(self.times().to_vec());

        for key in self.keys() {
            match member_base(key) {
                Some(base) => groups.entry(base).or_default().push(key),
                None => {
                    if let Some(series) = self.field(key) {
                        reduced.insert_field(key, series.iter().map(|v| v.into_option()));
                    }
                }
            }
        }

        for (base, members) in groups {
            let len = members
                .iter()
                .filter_map(|m| self.field(m))
                .map(|s| s.len())
                .max()
                .unwrap_or(0);

            let mean: Vec<Option<f64>> = (0..len)
                .map(|time_idx| {
                    let (sum, count) = members
                        .iter()
                        .filter_map(|m| self.value(m, time_idx))
                        .fold((0.0, 0usize), |(sum, count), val| (sum + val, count + 1));

                    if count > 0 {
                        Some(sum / count as f64)
                    } else {
                        None
                    }
                })
                .collect();

            tracing::trace!(base, members = members.len(), "averaged ensemble members");
            reduced.insert_field(base, mean);
        }

        reduced
    }
}
