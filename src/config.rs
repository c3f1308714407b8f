//! Options controlling how raw model data is turned into a profile and analyzed.
use crate::keys::WindSpeedUnit;
use metfor::Meters;

/// Pressure levels (hPa) requested from the GFS by default, ordered from the surface up.
pub const DEFAULT_PRESSURE_LEVELS: [u32; 14] = [
    1000, 975, 950, 925, 900, 850, 800, 700, 600, 500, 400, 300, 250, 200,
];

/// Configuration for the normalizer and the index calculations.
///
/// # Examples
///
/// ```rust
/// use metfor::Meters;
/// use sounding_indices::{EngineConfig, WindSpeedUnit};
///
/// let config = EngineConfig::new()
///     .with_pressure_levels(vec![1000, 850, 700, 500, 300])
///     .with_wind_speed_unit(WindSpeedUnit::Knots);
///
/// assert_eq!(config.pressure_levels(), &[1000, 850, 700, 500, 300]);
/// assert_eq!(config.helicity_depth(), Meters(3000.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pressure_levels: Vec<u32>,
    wind_speed_unit: WindSpeedUnit,
    surface_height: Meters,
    shear_depth: Meters,
    helicity_depth: Meters,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            pressure_levels: DEFAULT_PRESSURE_LEVELS.to_vec(),
            wind_speed_unit: WindSpeedUnit::KilometersPerHour,
            surface_height: Meters(10.0),
            shear_depth: Meters(6000.0),
            helicity_depth: Meters(3000.0),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default values. This is a proxy for default with a
    /// clearer name.
    #[inline]
    pub fn new() -> Self {
        EngineConfig::default()
    }

    /// Builder method for the pressure levels to look for in the raw data.
    ///
    /// They should be ordered from high pressure to low pressure, the normalizer keeps them in
    /// the order given.
    #[inline]
    pub fn with_pressure_levels(self, pressure_levels: Vec<u32>) -> Self {
        Self {
            pressure_levels,
            ..self
        }
    }

    /// The pressure levels (hPa) to look for in the raw data.
    #[inline]
    pub fn pressure_levels(&self) -> &[u32] {
        &self.pressure_levels
    }

    /// Builder method for the units wind speeds are reported in by the data provider.
    #[inline]
    pub fn with_wind_speed_unit(self, wind_speed_unit: WindSpeedUnit) -> Self {
        Self {
            wind_speed_unit,
            ..self
        }
    }

    /// The units of the raw wind speeds.
    #[inline]
    pub fn wind_speed_unit(&self) -> WindSpeedUnit {
        self.wind_speed_unit
    }

    /// Builder method for the height assigned to the synthetic surface level.
    #[inline]
    pub fn with_surface_height(self, surface_height: Meters) -> Self {
        Self {
            surface_height,
            ..self
        }
    }

    /// The height assigned to the synthetic surface level, 10 m by default.
    #[inline]
    pub fn surface_height(&self) -> Meters {
        self.surface_height
    }

    /// Builder method for the depth of the bulk shear and storm motion layer.
    #[inline]
    pub fn with_shear_depth(self, shear_depth: Meters) -> Self {
        Self {
            shear_depth,
            ..self
        }
    }

    /// Depth of the bulk shear and mean wind layer, 6 km by default.
    #[inline]
    pub fn shear_depth(&self) -> Meters {
        self.shear_depth
    }

    /// Builder method for the depth of the storm relative helicity layer.
    #[inline]
    pub fn with_helicity_depth(self, helicity_depth: Meters) -> Self {
        Self {
            helicity_depth,
            ..self
        }
    }

    /// Depth of the storm relative helicity layer, 3 km by default.
    #[inline]
    pub fn helicity_depth(&self) -> Meters {
        self.helicity_depth
    }
}
