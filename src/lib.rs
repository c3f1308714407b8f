#![warn(missing_docs)]
/*!
Severe weather indexes derived from forecast model soundings.

Raw model output, a table of time series keyed like `temperature_850hPa`, is normalized into a
[`Profile`] for a single valid time. The profile is then analyzed to produce a
[`DerivedIndices`]: K-index, Total-Totals, an LCL height estimate, 0-6 km bulk shear, 0-3 km
storm relative helicity, and the supercell and significant tornado composite parameters, along
with CAPE and lifted index passed through from the model.

The calculations are deliberately simple. Layer tops use the nearest sampled level, there is no
interpolation; the storm motion is the mean wind, not the Bunkers right mover; and no parcel is
lifted. If any index cannot be calculated the whole set comes back as zeros from the lenient
functions ([`derive_indices`], [`analyze_or_default`]), the strict functions
([`try_derive_indices`], [`analyze`]) return the error instead.

```rust
use sounding_indices::{derive_indices, EngineConfig, RawProfileData};

// Data missing the 700 hPa level cannot produce a K-index, so everything is zero.
let raw = RawProfileData::new()
    .with_field("temperature_2m", vec![Some(20.0)])
    .with_field("dewpoint_2m", vec![Some(15.0)])
    .with_field("windspeed_10m", vec![Some(15.0)])
    .with_field("winddirection_10m", vec![Some(180.0)]);

let indices = derive_indices(&raw, &EngineConfig::new(), 0);
assert_eq!(indices.k_index(), 0.0);
assert_eq!(indices.lcl_height().0, 0.0);
```
*/

//
// API
//
pub use crate::{
    analysis::{
        analyze, analyze_or_default, analyze_with, derive_all, derive_indices,
        try_derive_indices, DerivedIndices,
    },
    cache::TtlCache,
    composite::{significant_tornado, supercell_composite},
    config::{EngineConfig, DEFAULT_PRESSURE_LEVELS},
    error::{AnalysisError, Result},
    indexes::{kindex, lcl_height, model_cape, model_cin, model_lifted_index, total_totals},
    keys::{IndexKey, LevelVariable, PassThroughVariable, SurfaceVariable, WindSpeedUnit},
    kinematics::{bulk_shear, mean_wind_storm_motion, sr_helicity},
    levels::{nearest_level, LevelLocator, NearestLevel},
    normalize::normalize_profile,
    raw_data::RawProfileData,
    run_cycle::ModelRun,
    sounding::{LevelSample, Profile, SurfaceSample},
    wind::{
        speed_to_knots, speed_to_mps, wind_components, wind_magnitude, wind_vector,
        KMH_TO_KNOTS, KMH_TO_MPS, MPS_TO_KNOTS,
    },
};

//
// Internal use only
//

// Modules
mod analysis;
mod cache;
mod composite;
mod config;
mod ensemble;
mod error;
mod indexes;
mod keys;
mod kinematics;
mod levels;
mod normalize;
mod raw_data;
mod run_cycle;
mod sounding;
mod utility;
mod wind;

#[cfg(test)]
mod test_data;
