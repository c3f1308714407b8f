//! Enums used as keys for looking up raw model fields and derived indexes.
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Variables requested for every pressure level of a profile.
///
/// The `Display`/`AsRefStr` form is the prefix of the raw field key, see [`LevelVariable::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum LevelVariable {
    /// Temperature (C)
    #[strum(serialize = "temperature")]
    Temperature,
    /// Dew point (C)
    #[strum(serialize = "dewpoint")]
    DewPoint,
    /// Wind speed in the input unit.
    #[strum(serialize = "windspeed")]
    WindSpeed,
    /// Direction the wind is blowing from in degrees.
    #[strum(serialize = "winddirection")]
    WindDirection,
    /// Geopotential height (m)
    #[strum(serialize = "geopotential_height")]
    GeopotentialHeight,
}

impl LevelVariable {
    /// The raw field key for this variable at a pressure level, e.g. `temperature_850hPa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_indices::LevelVariable;
    ///
    /// assert_eq!(LevelVariable::DewPoint.key(700), "dewpoint_700hPa");
    /// assert_eq!(
    ///     LevelVariable::GeopotentialHeight.key(500),
    ///     "geopotential_height_500hPa"
    /// );
    /// ```
    pub fn key(self, pressure_hpa: u32) -> String {
        format!("{}_{}hPa", self.as_ref(), pressure_hpa)
    }
}

/// Near surface variables, the `Display` form is the raw field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum SurfaceVariable {
    /// 2 meter temperature (C)
    #[strum(serialize = "temperature_2m")]
    Temperature,
    /// 2 meter dew point (C)
    #[strum(serialize = "dewpoint_2m")]
    DewPoint,
    /// 10 meter wind speed in the input unit.
    #[strum(serialize = "windspeed_10m")]
    WindSpeed,
    /// 10 meter wind direction in degrees.
    #[strum(serialize = "winddirection_10m")]
    WindDirection,
}

/// Fields computed by the model and passed straight through to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum PassThroughVariable {
    /// Convective Available Potential Energy (J/kg)
    #[strum(serialize = "cape")]
    CAPE,
    /// Lifted index
    #[strum(serialize = "lifted_index")]
    LiftedIndex,
}

/// Keys for the values in a [`DerivedIndices`](crate::DerivedIndices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString)]
pub enum IndexKey {
    /// Convective Available Potential Energy, or CAPE. (J/kg)
    #[strum(serialize = "cape")]
    CAPE,
    /// Convective Inhibition, or CIN (J/kg). Always zero, meaning unknown.
    #[strum(serialize = "cin")]
    CIN,
    /// Lifted Index
    #[strum(serialize = "lifted_index")]
    LI,
    /// Lifting Condensation Level height in meters
    #[strum(serialize = "lcl_height_m")]
    LCLHeight,
    /// K-index
    #[strum(serialize = "k_index")]
    K,
    /// Total-Totals
    #[strum(serialize = "total_totals")]
    TotalTotals,
    /// Surface to 6 km bulk shear (knots)
    #[strum(serialize = "shear_0_6km_kt")]
    Shear0To6km,
    /// Surface to 3 km storm relative helicity (m^2/s^2)
    #[strum(serialize = "srh_0_3km")]
    SRH0To3km,
    /// Supercell Composite Parameter
    #[strum(serialize = "scp")]
    SCP,
    /// Significant Tornado Parameter
    #[strum(serialize = "stp")]
    STP,
}

/// Units wind speeds arrive in from the model data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString)]
pub enum WindSpeedUnit {
    /// Kilometers per hour
    #[strum(serialize = "kmh")]
    KilometersPerHour,
    /// Meters per second
    #[strum(serialize = "ms")]
    MetersPerSecond,
    /// Knots
    #[strum(serialize = "kn")]
    Knots,
}
