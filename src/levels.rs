//! This module finds the level of a profile to use for a target height.
//!
//! Heights are never interpolated. The sampled level closest to the target is used, so the depth
//! of a "0-3 km" layer depends on the vertical spacing of the requested pressure levels. Code that
//! needs a level at a height goes through the [`LevelLocator`] trait, so a locator that
//! interpolates can be swapped in without changing the index formulas.
use crate::{
    error::{AnalysisError, Result},
    sounding::{LevelSample, Profile},
};
use metfor::{Meters, Quantity};

/// Strategy for choosing the row of a profile that represents a target height.
pub trait LevelLocator {
    /// Index into `profile.levels()` of the row chosen for `target_height`.
    fn locate(&self, profile: &Profile, target_height: Meters) -> Result<usize>;
}

/// Pick the sampled level nearest to the target height.
///
/// Ties go to the first (lowest) level in the profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearestLevel;

impl LevelLocator for NearestLevel {
    fn locate(&self, profile: &Profile, target_height: Meters) -> Result<usize> {
        let target = target_height.unpack();

        profile
            .levels()
            .iter()
            .map(|lvl| (lvl.height.unpack() - target).abs())
            .enumerate()
            .fold(None, |acc: Option<(usize, f64)>, (i, diff)| match acc {
                // Strictly less keeps the first of any ties.
                Some((_, best)) if diff >= best => acc,
                _ => Some((i, diff)),
            })
            .map(|(i, _)| i)
            .ok_or(AnalysisError::NotEnoughData)
    }
}

/// Find the sampled level closest to `target_height`, including the surface row.
///
/// # Examples
///
/// ```rust
/// use metfor::{Celsius, HectoPascal, Knots, Meters, WindSpdDir};
/// use sounding_indices::{nearest_level, LevelSample, Profile, SurfaceSample};
///
/// let wind = WindSpdDir { speed: Knots(10.0), direction: 180.0 };
/// let sfc = SurfaceSample { temperature: Celsius(20.0), dew_point: Celsius(15.0), wind };
/// let lvl = LevelSample {
///     pressure: optional::some(HectoPascal(700.0)),
///     temperature: Celsius(0.0),
///     dew_point: Celsius(-10.0),
///     wind,
///     height: Meters(3100.0),
/// };
///
/// let profile = Profile::new(sfc, Meters(10.0)).with_levels(vec![lvl]);
///
/// assert_eq!(nearest_level(&profile, Meters(3000.0)).unwrap().height, Meters(3100.0));
/// assert_eq!(nearest_level(&profile, Meters(1000.0)).unwrap().height, Meters(10.0));
/// ```
pub fn nearest_level(profile: &Profile, target_height: Meters) -> Result<&LevelSample> {
    let idx = NearestLevel.locate(profile, target_height)?;
    profile.levels().get(idx).ok_or(AnalysisError::NotEnoughData)
}
