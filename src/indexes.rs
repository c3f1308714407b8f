//! Thermodynamic indexes calculated directly from the profile, without lifting a parcel.

use crate::{
    error::{AnalysisError, Result},
    sounding::Profile,
};
use metfor::{Celsius, HectoPascal, JpKg, Meters};

/// Meters of cloud base height per degree of surface dew point depression.
const LCL_METERS_PER_DEGREE: f64 = 125.0;

/// Temperature and dew point at a mandatory level.
fn level_t_dp(profile: &Profile, pressure: HectoPascal) -> Result<(f64, f64)> {
    let lvl = profile
        .level_at_pressure(pressure)
        .ok_or(AnalysisError::MissingLevel(pressure))?;

    let Celsius(t) = lvl.temperature;
    let Celsius(dp) = lvl.dew_point;

    Ok((t, dp))
}

/// Estimated height of the lifting condensation level above the surface.
///
/// Uses the rule of thumb of 125 m per degree of surface dew point depression. The value is not
/// clamped, a surface dew point above the temperature gives a negative height.
///
/// # Examples
///
/// ```rust
/// use metfor::{Celsius, Knots, Meters, WindSpdDir};
/// use sounding_indices::{lcl_height, Profile, SurfaceSample};
///
/// let sfc = SurfaceSample {
///     temperature: Celsius(20.0),
///     dew_point: Celsius(15.0),
///     wind: WindSpdDir { speed: Knots(0.0), direction: 0.0 },
/// };
///
/// assert_eq!(lcl_height(&Profile::new(sfc, Meters(10.0))), Meters(625.0));
/// ```
#[inline]
pub fn lcl_height(profile: &Profile) -> Meters {
    let sfc = profile.surface();
    let Celsius(t) = sfc.temperature;
    let Celsius(dp) = sfc.dew_point;

    Meters(LCL_METERS_PER_DEGREE * (t - dp))
}

/// The K-index.
///
/// Requires the 850, 700, and 500 hPa levels.
#[inline]
pub fn kindex(profile: &Profile) -> Result<f64> {
    let (t850, dp850) = level_t_dp(profile, HectoPascal(850.0))?;
    let (t700, dp700) = level_t_dp(profile, HectoPascal(700.0))?;
    let (t500, _) = level_t_dp(profile, HectoPascal(500.0))?;

    Ok((t850 - t500) + dp850 - (t700 - dp700))
}

/// The Total-Totals index.
///
/// Requires the 850 and 500 hPa levels.
#[inline]
pub fn total_totals(profile: &Profile) -> Result<f64> {
    let (t850, dp850) = level_t_dp(profile, HectoPascal(850.0))?;
    let (t500, _) = level_t_dp(profile, HectoPascal(500.0))?;

    Ok((t850 + dp850) - 2.0 * t500)
}

/// CAPE as computed by the model, zero if it was not provided.
#[inline]
pub fn model_cape(profile: &Profile) -> JpKg {
    profile.cape().into_option().unwrap_or(JpKg(0.0))
}

/// Lifted index as computed by the model, zero if it was not provided.
#[inline]
pub fn model_lifted_index(profile: &Profile) -> f64 {
    profile.lifted_index().into_option().unwrap_or(0.0)
}

/// Convective inhibition.
///
/// The model data does not include it, so this is always zero. Zero here means unknown, not that
/// there is no inhibition.
#[inline]
pub fn model_cin(_profile: &Profile) -> JpKg {
    JpKg(0.0)
}
