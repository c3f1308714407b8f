//! Data types to store a model sounding at a single valid time.

use chrono::NaiveDateTime;
use metfor::{Celsius, HectoPascal, JpKg, Knots, Meters, Quantity, WindSpdDir};
use optional::Optioned;

/// One row of the sounding.
///
/// The surface is stored as a row too, it has no pressure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSample {
    /// Pressure in hPa, missing for the surface row.
    pub pressure: Optioned<HectoPascal>,
    /// Temperature in C
    pub temperature: Celsius,
    /// Dew point in C
    pub dew_point: Celsius,
    /// Wind, direction it is blowing from.
    pub wind: WindSpdDir<Knots>,
    /// Geopotential Height in meters
    pub height: Meters,
}

/// Near surface values, 2 meter temperatures and 10 meter wind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// 2 meter temperature in C
    pub temperature: Celsius,
    /// 2 meter dew point in C
    pub dew_point: Celsius,
    /// 10 meter wind
    pub wind: WindSpdDir<Knots>,
}

impl SurfaceSample {
    /// Convert to a row of the sounding placed at `height`.
    #[inline]
    pub fn to_level(self, height: Meters) -> LevelSample {
        LevelSample {
            pressure: optional::none(),
            temperature: self.temperature,
            dew_point: self.dew_point,
            wind: self.wind,
            height,
        }
    }
}

/// A sounding for a single valid time.
///
/// The first row is always the surface. The remaining rows are the pressure levels that survived
/// normalization in the order they were requested, which is expected to be ascending in height.
#[derive(Clone, Debug)]
pub struct Profile {
    // Valid time of the sounding, if known.
    valid_time: Option<NaiveDateTime>,

    // Surface row followed by upper air rows.
    rows: Vec<LevelSample>,

    // Values computed by the model, passed through to the analysis.
    cape: Optioned<JpKg>,
    lifted_index: Optioned<f64>,
}

impl Profile {
    /// Create a profile with only a surface row placed at `surface_height`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, Knots, Meters, WindSpdDir};
    /// use sounding_indices::{Profile, SurfaceSample};
    ///
    /// let sfc = SurfaceSample {
    ///     temperature: Celsius(20.0),
    ///     dew_point: Celsius(15.0),
    ///     wind: WindSpdDir { speed: Knots(10.0), direction: 180.0 },
    /// };
    ///
    /// let profile = Profile::new(sfc, Meters(10.0));
    /// assert_eq!(profile.len(), 1);
    /// assert_eq!(profile.surface().height, Meters(10.0));
    /// ```
    pub fn new(surface: SurfaceSample, surface_height: Meters) -> Self {
        Profile {
            valid_time: None,
            rows: vec![surface.to_level(surface_height)],
            cape: optional::none(),
            lifted_index: optional::none(),
        }
    }

    /// Builder method to append the upper air levels, in order, above the surface.
    pub fn with_levels<I>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = LevelSample>,
    {
        self.rows.extend(levels);
        self
    }

    /// Builder method for the valid time.
    #[inline]
    pub fn with_valid_time<T>(self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        Self {
            valid_time: Option::from(valid_time),
            ..self
        }
    }

    /// Builder method for the model CAPE.
    #[inline]
    pub fn with_cape<T>(self, cape: T) -> Self
    where
        Optioned<JpKg>: From<T>,
    {
        Self {
            cape: Optioned::from(cape),
            ..self
        }
    }

    /// Builder method for the model lifted index.
    #[inline]
    pub fn with_lifted_index<T>(self, lifted_index: T) -> Self
    where
        Optioned<f64>: From<T>,
    {
        Self {
            lifted_index: Optioned::from(lifted_index),
            ..self
        }
    }

    /// Get the valid time.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    /// Model CAPE, if it was provided.
    #[inline]
    pub fn cape(&self) -> Optioned<JpKg> {
        self.cape
    }

    /// Model lifted index, if it was provided.
    #[inline]
    pub fn lifted_index(&self) -> Optioned<f64> {
        self.lifted_index
    }

    /// All rows, starting with the surface.
    #[inline]
    pub fn levels(&self) -> &[LevelSample] {
        &self.rows
    }

    /// The surface row.
    #[inline]
    pub fn surface(&self) -> &LevelSample {
        // A profile can only be built with a surface row.
        &self.rows[0]
    }

    /// The number of rows, including the surface.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false, a profile always has a surface row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the row at a pressure level, if that level was kept.
    pub fn level_at_pressure(&self, pressure: HectoPascal) -> Option<&LevelSample> {
        self.rows
            .iter()
            .find(|row| row.pressure.into_option() == Some(pressure))
    }

    /// Check that heights strictly increase going up the profile.
    pub fn is_height_ascending(&self) -> bool {
        self.rows
            .windows(2)
            .all(|pair| pair[0].height.unpack() < pair[1].height.unpack())
    }
}
