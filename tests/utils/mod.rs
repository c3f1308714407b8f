use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use sounding_indices::{
    IndexKey, LevelVariable, PassThroughVariable, RawProfileData, SurfaceVariable,
};

pub mod index_tests;

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {

            use std::collections::HashMap;

            use sounding_indices::RawProfileData;
            use crate::utils;

            fn load_data() -> (RawProfileData, HashMap<String, f64>) {
                utils::load_test_file($fname)
            }

            mod indexes {
                use super::load_data;
                use crate::utils::index_tests;
                use sounding_indices::IndexKey;

                #[test]
                fn test_thermodynamic_indexes() {
                    let (raw, fvals) = load_data();
                    for &key in &[
                        IndexKey::CAPE,
                        IndexKey::CIN,
                        IndexKey::LI,
                        IndexKey::LCLHeight,
                        IndexKey::K,
                        IndexKey::TotalTotals,
                    ] {
                        index_tests::test_index(&raw, &fvals, key, 0.5);
                    }
                }

                #[test]
                fn test_kinematic_indexes() {
                    let (raw, fvals) = load_data();
                    index_tests::test_index(&raw, &fvals, IndexKey::Shear0To6km, 0.5);
                    index_tests::test_index(&raw, &fvals, IndexKey::SRH0To3km, 0.5);
                }

                #[test]
                fn test_composite_indexes() {
                    let (raw, fvals) = load_data();
                    index_tests::test_index(&raw, &fvals, IndexKey::SCP, 0.05);
                    index_tests::test_index(&raw, &fvals, IndexKey::STP, 0.05);
                }

                #[test]
                fn test_all_or_nothing() {
                    let (raw, _) = load_data();
                    index_tests::test_all_or_nothing(&raw);
                }

                #[test]
                fn test_deterministic() {
                    let (raw, _) = load_data();
                    index_tests::test_deterministic(&raw);
                }
            }
        }
    };
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}

/// Send log output to the test harness, `RUST_LOG=debug cargo test` shows why levels are dropped.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn load_test_file(fname: &str) -> (RawProfileData, HashMap<String, f64>) {
    init_logging();

    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv(&test_path)
}

#[allow(dead_code)]
fn parse(token: &str) -> Option<f64> {
    f64::from_str(token.trim()).ok()
}

// Each test file holds a single valid time. Wind speeds are in km/h.
#[allow(dead_code)]
fn load_test_csv(location: &PathBuf) -> (RawProfileData, HashMap<String, f64>) {
    let mut f = File::open(location).expect(&format!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", location));

    let mut raw = RawProfileData::new();
    let mut line_iter = contents
        .lines()
        .filter(|line| !line.starts_with('#') || line.starts_with("###"));

    //
    // Parse the upper air levels
    //
    for line in line_iter.by_ref() {
        if line.starts_with("### Surface Data ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 6 {
            continue;
        }
        let pressure = match u32::from_str(tokens[0].trim()) {
            Ok(p) => p,
            Err(_) => continue, // Header
        };

        for (var, token) in [
            (LevelVariable::GeopotentialHeight, tokens[1]),
            (LevelVariable::Temperature, tokens[2]),
            (LevelVariable::DewPoint, tokens[3]),
            (LevelVariable::WindSpeed, tokens[4]),
            (LevelVariable::WindDirection, tokens[5]),
        ]
        .iter()
        {
            raw.insert_field(var.key(pressure), vec![parse(token)]);
        }
    }

    //
    // Parse the surface data
    //
    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Float Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 6 || tokens[0].starts_with("temperature") {
            continue;
        }

        let surface_keys = [
            SurfaceVariable::Temperature.to_string(),
            SurfaceVariable::DewPoint.to_string(),
            SurfaceVariable::WindSpeed.to_string(),
            SurfaceVariable::WindDirection.to_string(),
            PassThroughVariable::CAPE.to_string(),
            PassThroughVariable::LiftedIndex.to_string(),
        ];
        for (key, token) in surface_keys.iter().zip(tokens.iter()) {
            raw.insert_field(key.as_str(), vec![parse(token)]);
        }
    }

    //
    // Parse the expected values
    //
    let mut fvals = HashMap::new();
    for line in line_iter {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() != 2 {
            continue;
        }

        let key = tokens[0].trim();
        assert!(
            IndexKey::from_str(key).is_ok(),
            "unknown index in test file: {}",
            key
        );
        if let Some(val) = parse(tokens[1]) {
            fvals.insert(key.to_owned(), val);
        }
    }

    (raw, fvals)
}
