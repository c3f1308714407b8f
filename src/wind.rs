//! Wind speed unit conversions and vector decomposition.
//!
//! Directions are always the compass direction the wind is blowing *from*. Unit conversion is done
//! by the caller before decomposing, so the decomposition itself does not care about units.
use crate::keys::WindSpeedUnit;
use metfor::{Knots, MetersPSec, Quantity, WindSpdDir, WindUV};

/// Kilometers per hour to meters per second.
pub const KMH_TO_MPS: f64 = 0.27778;
/// Kilometers per hour to knots.
pub const KMH_TO_KNOTS: f64 = 0.539957;
/// Meters per second to knots.
pub const MPS_TO_KNOTS: f64 = 1.943844;

/// Split a speed and direction into `(u, v)` components in the same units as `speed`.
///
/// No validation is done, a negative speed produces a vector pointing the opposite way.
///
/// # Examples
///
/// ```rust
/// use sounding_indices::wind_components;
///
/// // A westerly wind blows toward the east.
/// let (u, v) = wind_components(20.0, 270.0);
/// assert!((u - 20.0).abs() < 1.0e-10);
/// assert!(v.abs() < 1.0e-10);
/// ```
#[inline]
pub fn wind_components(speed: f64, direction_deg: f64) -> (f64, f64) {
    let (sin, cos) = direction_deg.to_radians().sin_cos();
    (-speed * sin, -speed * cos)
}

/// Convert a wind to its u-v components in m/s.
#[inline]
pub fn wind_vector(wind: WindSpdDir<Knots>) -> WindUV<MetersPSec> {
    let MetersPSec(speed) = MetersPSec::from(wind.speed);
    let (u, v) = wind_components(speed, wind.direction);

    WindUV {
        u: MetersPSec(u),
        v: MetersPSec(v),
    }
}

/// The speed of a wind given by its components.
#[inline]
pub fn wind_magnitude(wind: WindUV<MetersPSec>) -> MetersPSec {
    MetersPSec(wind.u.unpack().hypot(wind.v.unpack()))
}

/// Convert a raw wind speed to knots.
#[inline]
pub fn speed_to_knots(speed: f64, unit: WindSpeedUnit) -> Knots {
    match unit {
        WindSpeedUnit::KilometersPerHour => Knots(speed * KMH_TO_KNOTS),
        WindSpeedUnit::MetersPerSecond => Knots(speed * MPS_TO_KNOTS),
        WindSpeedUnit::Knots => Knots(speed),
    }
}

/// Convert a raw wind speed to meters per second.
#[inline]
pub fn speed_to_mps(speed: f64, unit: WindSpeedUnit) -> MetersPSec {
    match unit {
        WindSpeedUnit::KilometersPerHour => MetersPSec(speed * KMH_TO_MPS),
        WindSpeedUnit::MetersPerSecond => MetersPSec(speed),
        WindSpeedUnit::Knots => MetersPSec(speed / MPS_TO_KNOTS),
    }
}
