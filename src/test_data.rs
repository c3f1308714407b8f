//! Data used in tests.

use crate::{
    raw_data::RawProfileData,
    sounding::{LevelSample, Profile, SurfaceSample},
};
use metfor::{Celsius, HectoPascal, JpKg, Knots, Meters, WindSpdDir};

pub fn make_surface(t: f64, dp: f64, spd_kt: f64, dir: f64) -> SurfaceSample {
    SurfaceSample {
        temperature: Celsius(t),
        dew_point: Celsius(dp),
        wind: WindSpdDir {
            speed: Knots(spd_kt),
            direction: dir,
        },
    }
}

pub fn make_level(p: u32, hgt: f64, t: f64, dp: f64, spd_kt: f64, dir: f64) -> LevelSample {
    LevelSample {
        pressure: optional::some(HectoPascal(f64::from(p))),
        temperature: Celsius(t),
        dew_point: Celsius(dp),
        wind: WindSpdDir {
            speed: Knots(spd_kt),
            direction: dir,
        },
        height: Meters(hgt),
    }
}

// (pressure, height, temperature, dew point, wind speed kt, wind direction)
const STANDARD_LEVELS: [(u32, f64, f64, f64, f64, f64); 7] = [
    (1000, 110.0, 19.0, 14.0, 20.0, 180.0),
    (925, 780.0, 16.0, 12.0, 25.0, 200.0),
    (850, 1500.0, 10.0, 5.0, 30.0, 220.0),
    (700, 3100.0, 0.0, -10.0, 35.0, 240.0),
    (500, 5800.0, -20.0, -30.0, 45.0, 260.0),
    (400, 7400.0, -30.0, -40.0, 55.0, 270.0),
    (300, 9500.0, -42.0, -52.0, 65.0, 270.0),
];

/// A veering, strengthening wind profile with moist low levels.
pub fn standard_profile() -> Profile {
    Profile::new(make_surface(20.0, 15.0, 20.0, 180.0), Meters(10.0))
        .with_levels(
            STANDARD_LEVELS
                .iter()
                .map(|&(p, h, t, dp, spd, dir)| make_level(p, h, t, dp, spd, dir)),
        )
        .with_cape(JpKg(2000.0))
        .with_lifted_index(-5.0)
}

/// The same data as `standard_profile`, in raw form with wind speeds in knots.
pub fn standard_raw_data() -> RawProfileData {
    let mut raw = RawProfileData::new()
        .with_field("temperature_2m", vec![Some(20.0)])
        .with_field("dewpoint_2m", vec![Some(15.0)])
        .with_field("windspeed_10m", vec![Some(20.0)])
        .with_field("winddirection_10m", vec![Some(180.0)])
        .with_field("cape", vec![Some(2000.0)])
        .with_field("lifted_index", vec![Some(-5.0)]);

    for &(p, h, t, dp, spd, dir) in STANDARD_LEVELS.iter() {
        raw.insert_field(format!("temperature_{}hPa", p), vec![Some(t)]);
        raw.insert_field(format!("dewpoint_{}hPa", p), vec![Some(dp)]);
        raw.insert_field(format!("windspeed_{}hPa", p), vec![Some(spd)]);
        raw.insert_field(format!("winddirection_{}hPa", p), vec![Some(dir)]);
        raw.insert_field(format!("geopotential_height_{}hPa", p), vec![Some(h)]);
    }

    raw
}

/// The pressure levels in the standard data.
pub fn standard_levels() -> Vec<u32> {
    STANDARD_LEVELS.iter().map(|lvl| lvl.0).collect()
}
