//! Data type and functions for assembling the full set of indexes for a profile.
//!
//! All of the values are calculated together. If any one of them cannot be calculated, none of
//! them are reported. The lenient entry points ([`analyze_or_default`], [`derive_indices`]) hand
//! back [`DerivedIndices::default`], which is all zeros, while the strict ones ([`analyze`],
//! [`try_derive_indices`]) return the error.
use crate::{
    composite::{significant_tornado, supercell_composite},
    config::EngineConfig,
    error::{AnalysisError, Result},
    indexes::{kindex, lcl_height, model_cape, model_cin, model_lifted_index, total_totals},
    keys::IndexKey,
    kinematics::{bulk_shear, mean_wind_storm_motion, sr_helicity},
    levels::{LevelLocator, NearestLevel},
    normalize::normalize_profile,
    raw_data::RawProfileData,
    sounding::Profile,
    wind::{wind_magnitude, MPS_TO_KNOTS},
};
use metfor::{IntHelicityM2pS2, JpKg, Knots, Meters, Quantity};
use strum::IntoEnumIterator;
use tracing::warn;

/// The severe weather indexes for a single profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedIndices {
    cape: JpKg,
    cin: JpKg,
    lifted_index: f64,
    lcl_height: Meters,
    k_index: f64,
    total_totals: f64,
    shear_0_6km: Knots,
    srh_0_3km: IntHelicityM2pS2,
    scp: f64,
    stp: f64,
}

impl Default for DerivedIndices {
    fn default() -> Self {
        DerivedIndices {
            cape: JpKg(0.0),
            cin: JpKg(0.0),
            lifted_index: 0.0,
            lcl_height: Meters(0.0),
            k_index: 0.0,
            total_totals: 0.0,
            shear_0_6km: Knots(0.0),
            srh_0_3km: IntHelicityM2pS2(0.0),
            scp: 0.0,
            stp: 0.0,
        }
    }
}

impl DerivedIndices {
    /// Model CAPE.
    #[inline]
    pub fn cape(&self) -> JpKg {
        self.cape
    }

    /// Convective inhibition, always zero. This means unknown, not a lack of inhibition.
    #[inline]
    pub fn cin(&self) -> JpKg {
        self.cin
    }

    /// Model lifted index.
    #[inline]
    pub fn lifted_index(&self) -> f64 {
        self.lifted_index
    }

    /// Estimated LCL height.
    #[inline]
    pub fn lcl_height(&self) -> Meters {
        self.lcl_height
    }

    /// K-index
    #[inline]
    pub fn k_index(&self) -> f64 {
        self.k_index
    }

    /// Total-Totals
    #[inline]
    pub fn total_totals(&self) -> f64 {
        self.total_totals
    }

    /// Surface to 6 km bulk shear.
    #[inline]
    pub fn shear_0_6km(&self) -> Knots {
        self.shear_0_6km
    }

    /// Surface to 3 km storm relative helicity, sign removed.
    #[inline]
    pub fn srh_0_3km(&self) -> IntHelicityM2pS2 {
        self.srh_0_3km
    }

    /// Supercell composite parameter.
    #[inline]
    pub fn scp(&self) -> f64 {
        self.scp
    }

    /// Significant tornado parameter.
    #[inline]
    pub fn stp(&self) -> f64 {
        self.stp
    }

    /// Get a value by key, unpacked from its units.
    pub fn get(&self, key: IndexKey) -> f64 {
        use crate::keys::IndexKey::*;

        match key {
            CAPE => self.cape.unpack(),
            CIN => self.cin.unpack(),
            LI => self.lifted_index,
            LCLHeight => self.lcl_height.unpack(),
            K => self.k_index,
            TotalTotals => self.total_totals,
            Shear0To6km => self.shear_0_6km.unpack(),
            SRH0To3km => self.srh_0_3km.unpack(),
            SCP => self.scp,
            STP => self.stp,
        }
    }

    /// Iterate over every index and its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_indices::DerivedIndices;
    ///
    /// for (key, val) in DerivedIndices::default().iter() {
    ///     println!("{} = {}", key, val);
    ///     assert_eq!(val, 0.0);
    /// }
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (IndexKey, f64)> + '_ {
        IndexKey::iter().map(move |key| (key, self.get(key)))
    }

    // Reject the whole set if anything went to NaN or infinity.
    fn check_finite(self) -> Result<Self> {
        let bad_key = self
            .iter()
            .find(|(_, val)| !val.is_finite())
            .map(|(key, _)| key);

        match bad_key {
            Some(key) => Err(AnalysisError::NonFiniteValue(key)),
            None => Ok(self),
        }
    }
}

/// Calculate all the indexes for a profile using the nearest sampled level for layer tops.
#[inline]
pub fn analyze(profile: &Profile, config: &EngineConfig) -> Result<DerivedIndices> {
    analyze_with(profile, config, &NearestLevel)
}

/// Calculate all the indexes for a profile, choosing layer tops with `locator`.
pub fn analyze_with<L>(
    profile: &Profile,
    config: &EngineConfig,
    locator: &L,
) -> Result<DerivedIndices>
where
    L: LevelLocator + ?Sized,
{
    // Thermodynamics
    let cape = model_cape(profile);
    let lcl_height = lcl_height(profile);
    let k_index = kindex(profile)?;
    let total_totals = total_totals(profile)?;

    // Kinematics
    let shear = wind_magnitude(bulk_shear(profile, locator, config.shear_depth())?);
    let storm_motion = mean_wind_storm_motion(profile, locator, config.shear_depth())?;
    let srh = sr_helicity(profile, locator, config.helicity_depth(), storm_motion)?;

    DerivedIndices {
        cape,
        cin: model_cin(profile),
        lifted_index: model_lifted_index(profile),
        lcl_height,
        k_index,
        total_totals,
        shear_0_6km: Knots(shear.unpack() * MPS_TO_KNOTS),
        srh_0_3km: srh,
        scp: supercell_composite(cape, shear, srh),
        stp: significant_tornado(cape, lcl_height, srh, shear),
    }
    .check_finite()
}

/// Calculate all the indexes for a profile, or all zeros if that is not possible.
pub fn analyze_or_default(profile: &Profile, config: &EngineConfig) -> DerivedIndices {
    analyze(profile, config).unwrap_or_else(|err| {
        warn!(%err, valid_time = ?profile.valid_time(), "analysis failed, using zeros");
        DerivedIndices::default()
    })
}

/// Normalize the raw data at `time_idx` and calculate all the indexes.
pub fn try_derive_indices(
    raw: &RawProfileData,
    config: &EngineConfig,
    time_idx: usize,
) -> Result<DerivedIndices> {
    let profile = normalize_profile(raw, config, time_idx)?;
    analyze(&profile, config)
}

/// Normalize the raw data at `time_idx` and calculate all the indexes, or all zeros if that is not
/// possible.
///
/// This never fails and never panics on bad data.
///
/// # Examples
///
/// ```rust
/// use sounding_indices::{derive_indices, DerivedIndices, EngineConfig, RawProfileData};
///
/// // No data at all.
/// let indices = derive_indices(&RawProfileData::new(), &EngineConfig::new(), 0);
/// assert_eq!(indices, DerivedIndices::default());
/// ```
pub fn derive_indices(
    raw: &RawProfileData,
    config: &EngineConfig,
    time_idx: usize,
) -> DerivedIndices {
    try_derive_indices(raw, config, time_idx).unwrap_or_else(|err| {
        warn!(%err, time_idx, "analysis failed, using zeros");
        DerivedIndices::default()
    })
}

/// Calculate the indexes independently for every valid time in the raw data.
pub fn derive_all(raw: &RawProfileData, config: &EngineConfig) -> Vec<DerivedIndices> {
    (0..raw.num_times())
        .map(|time_idx| derive_indices(raw, config, time_idx))
        .collect()
}
