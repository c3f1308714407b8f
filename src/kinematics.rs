//! Wind based indexes: bulk shear, storm motion, and storm relative helicity.
use crate::{
    error::{AnalysisError, Result},
    levels::LevelLocator,
    sounding::Profile,
    wind::wind_vector,
};
use itertools::Itertools;
use metfor::{IntHelicityM2pS2, Meters, MetersPSec, Quantity, WindUV};

/// Calculate the bulk shear vector between the surface and the level chosen for `depth`.
///
/// Returns the shear vector, top minus bottom, in m/s.
pub fn bulk_shear<L>(profile: &Profile, locator: &L, depth: Meters) -> Result<WindUV<MetersPSec>>
where
    L: LevelLocator + ?Sized,
{
    let top_idx = locator.locate(profile, depth)?;
    let top = profile
        .levels()
        .get(top_idx)
        .ok_or(AnalysisError::NotEnoughData)?;

    let WindUV {
        u: bottom_u,
        v: bottom_v,
    } = wind_vector(profile.surface().wind);
    let WindUV { u: top_u, v: top_v } = wind_vector(top.wind);

    Ok(WindUV {
        u: MetersPSec(top_u.unpack() - bottom_u.unpack()),
        v: MetersPSec(top_v.unpack() - bottom_v.unpack()),
    })
}

/// Estimate the storm motion as the mean wind from the surface up to the level chosen for
/// `depth`, inclusive.
///
/// This is a plain average of the sampled winds. It is NOT height weighted and it is NOT the
/// Bunkers right mover, there is no deviation from the mean wind.
pub fn mean_wind_storm_motion<L>(
    profile: &Profile,
    locator: &L,
    depth: Meters,
) -> Result<WindUV<MetersPSec>>
where
    L: LevelLocator + ?Sized,
{
    let top_idx = locator.locate(profile, depth)?;

    let (sum_u, sum_v, count) = profile
        .levels()
        .get(..=top_idx)
        .ok_or(AnalysisError::NotEnoughData)?
        .iter()
        .map(|lvl| wind_vector(lvl.wind))
        .fold((0.0, 0.0, 0usize), |(sum_u, sum_v, count), WindUV { u, v }| {
            (sum_u + u.unpack(), sum_v + v.unpack(), count + 1)
        });

    // The slice always includes the surface row, so count is at least 1.
    Ok(WindUV {
        u: MetersPSec(sum_u / count as f64),
        v: MetersPSec(sum_v / count as f64),
    })
}

/// Storm relative helicity from the surface to the level chosen for `depth`.
///
/// Summed over adjacent pairs of rows strictly below the chosen level. The sign is dropped, so
/// the result is the magnitude whether the hodograph turns clockwise or counter-clockwise. If
/// there are fewer than two rows below the chosen level the result is zero.
pub fn sr_helicity<L, W>(
    profile: &Profile,
    locator: &L,
    depth: Meters,
    storm_motion_uv_ms: W,
) -> Result<IntHelicityM2pS2>
where
    L: LevelLocator + ?Sized,
    WindUV<MetersPSec>: From<W>,
{
    let top_idx = locator.locate(profile, depth)?;
    let WindUV {
        u: storm_u,
        v: storm_v,
    } = WindUV::<MetersPSec>::from(storm_motion_uv_ms);
    let (storm_u, storm_v) = (storm_u.unpack(), storm_v.unpack());

    let helicity = profile
        .levels()
        .get(..top_idx)
        .ok_or(AnalysisError::NotEnoughData)?
        .iter()
        // Convert the wind and unpack it, subtract the storm motion.
        .map(|lvl| {
            let WindUV { u, v } = wind_vector(lvl.wind);
            (u.unpack() - storm_u, v.unpack() - storm_v)
        })
        // Make windows to see two levels at a time.
        .tuple_windows::<(_, _)>()
        .map(|((u0, v0), (u1, v1))| u0 * v1 - u1 * v0)
        .sum::<f64>();

    Ok(IntHelicityM2pS2(helicity.abs()))
}
