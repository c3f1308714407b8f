//! Build a [`Profile`] for one valid time out of raw model fields.
//!
//! Upper air levels with any missing or non-numeric value are dropped entirely, nothing is filled
//! in. The surface values are required, without them no profile can be made.
use crate::{
    config::EngineConfig,
    error::{AnalysisError, Result},
    keys::{LevelVariable, PassThroughVariable, SurfaceVariable},
    raw_data::RawProfileData,
    sounding::{LevelSample, Profile, SurfaceSample},
    utility::is_numeric,
    wind::speed_to_knots,
};
use metfor::{Celsius, HectoPascal, JpKg, Meters, WindSpdDir};
use optional::Optioned;
use tracing::{debug, warn};

fn surface_value(raw: &RawProfileData, var: SurfaceVariable, time_idx: usize) -> Result<f64> {
    raw.value(var.as_ref(), time_idx)
        .filter(|val| is_numeric(*val))
        .ok_or_else(|| AnalysisError::MissingField(var.to_string()))
}

fn level_value(
    raw: &RawProfileData,
    var: LevelVariable,
    pressure_hpa: u32,
    time_idx: usize,
) -> Option<f64> {
    raw.value(&var.key(pressure_hpa), time_idx)
        .filter(|val| is_numeric(*val))
}

fn pass_through_value(
    raw: &RawProfileData,
    var: PassThroughVariable,
    time_idx: usize,
) -> Optioned<f64> {
    match raw.value(var.as_ref(), time_idx) {
        Some(val) if is_numeric(val) => optional::some(val),
        _ => optional::none(),
    }
}

/// Build the level for a single pressure, `None` if anything is missing.
fn upper_air_level(
    raw: &RawProfileData,
    config: &EngineConfig,
    pressure_hpa: u32,
    time_idx: usize,
) -> Option<LevelSample> {
    use crate::keys::LevelVariable::*;

    if pressure_hpa == 0 {
        return None;
    }

    let t = level_value(raw, Temperature, pressure_hpa, time_idx)?;
    let dp = level_value(raw, DewPoint, pressure_hpa, time_idx)?;
    let spd = level_value(raw, WindSpeed, pressure_hpa, time_idx)?;
    let dir = level_value(raw, WindDirection, pressure_hpa, time_idx)?;
    let hgt = level_value(raw, GeopotentialHeight, pressure_hpa, time_idx)?;

    Some(LevelSample {
        pressure: optional::some(HectoPascal(f64::from(pressure_hpa))),
        temperature: Celsius(t),
        dew_point: Celsius(dp),
        wind: WindSpdDir {
            speed: speed_to_knots(spd, config.wind_speed_unit()),
            direction: dir,
        },
        height: Meters(hgt),
    })
}

/// Build the profile at `time_idx`.
///
/// Levels are kept in the order of `config.pressure_levels()`, levels with missing data are
/// skipped. Fails only if a surface field is missing, or if `time_idx` is past the end of the
/// time axis.
///
/// # Examples
///
/// ```rust
/// use sounding_indices::{normalize_profile, EngineConfig, RawProfileData, WindSpeedUnit};
///
/// let raw = RawProfileData::new()
///     .with_field("temperature_2m", vec![Some(20.0)])
///     .with_field("dewpoint_2m", vec![Some(15.0)])
///     .with_field("windspeed_10m", vec![Some(10.0)])
///     .with_field("winddirection_10m", vec![Some(180.0)])
///     .with_field("temperature_850hPa", vec![Some(10.0)])
///     .with_field("dewpoint_850hPa", vec![Some(5.0)])
///     .with_field("windspeed_850hPa", vec![Some(30.0)])
///     .with_field("winddirection_850hPa", vec![Some(220.0)])
///     .with_field("geopotential_height_850hPa", vec![Some(1500.0)])
///     // 700 hPa is incomplete, it gets dropped.
///     .with_field("temperature_700hPa", vec![Some(0.0)]);
///
/// let config = EngineConfig::new()
///     .with_pressure_levels(vec![850, 700])
///     .with_wind_speed_unit(WindSpeedUnit::Knots);
///
/// let profile = normalize_profile(&raw, &config, 0).unwrap();
/// assert_eq!(profile.len(), 2);
/// ```
pub fn normalize_profile(
    raw: &RawProfileData,
    config: &EngineConfig,
    time_idx: usize,
) -> Result<Profile> {
    if !raw.times().is_empty() && time_idx >= raw.times().len() {
        return Err(AnalysisError::InvalidInput);
    }

    let unit = config.wind_speed_unit();
    let surface = SurfaceSample {
        temperature: Celsius(surface_value(raw, SurfaceVariable::Temperature, time_idx)?),
        dew_point: Celsius(surface_value(raw, SurfaceVariable::DewPoint, time_idx)?),
        wind: WindSpdDir {
            speed: speed_to_knots(surface_value(raw, SurfaceVariable::WindSpeed, time_idx)?, unit),
            direction: surface_value(raw, SurfaceVariable::WindDirection, time_idx)?,
        },
    };

    let levels: Vec<LevelSample> = config
        .pressure_levels()
        .iter()
        .filter_map(|&p| {
            let lvl = upper_air_level(raw, config, p, time_idx);
            if lvl.is_none() {
                debug!(pressure_hpa = p, time_idx, "dropping incomplete level");
            }
            lvl
        })
        .collect();

    let cape = pass_through_value(raw, PassThroughVariable::CAPE, time_idx).map_t(JpKg);
    let lifted_index = pass_through_value(raw, PassThroughVariable::LiftedIndex, time_idx);

    let profile = Profile::new(surface, config.surface_height())
        .with_levels(levels)
        .with_valid_time(raw.time(time_idx))
        .with_cape(cape)
        .with_lifted_index(lifted_index);

    if !profile.is_height_ascending() {
        warn!(time_idx, "profile heights do not increase from the surface up");
    }

    Ok(profile)
}
