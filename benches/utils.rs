use sounding_indices::{
    normalize_profile, EngineConfig, LevelVariable, PassThroughVariable, Profile, RawProfileData,
    SurfaceVariable,
};
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

#[allow(dead_code)]
pub fn load_all_test_files() -> [RawProfileData; 4] {
    let raw1 = load_test_file("supercell.csv");
    let raw2 = load_test_file("missing_700.csv");
    let raw3 = load_test_file("dry_high_base.csv");
    let raw4 = load_test_file("sparse_levels.csv");

    [raw1, raw2, raw3, raw4]
}

#[allow(dead_code)]
pub fn load_all_profiles() -> Vec<Profile> {
    let config = EngineConfig::new();

    load_all_test_files()
        .iter()
        .map(|raw| normalize_profile(raw, &config, 0).expect("surface data is present"))
        .collect()
}

fn load_test_file(fname: &str) -> RawProfileData {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv(&test_path)
}

fn parse(token: &str) -> Option<f64> {
    f64::from_str(token.trim()).ok()
}

fn load_test_csv(location: &PathBuf) -> RawProfileData {
    let mut f = File::open(location).expect(&format!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", location));

    let mut raw = RawProfileData::new();
    let mut line_iter = contents.lines().filter(|line| !line.starts_with("# "));

    //
    // Upper air levels
    //
    for line in line_iter.by_ref() {
        if line.starts_with("### Surface Data ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        let pressure = match tokens.get(0).and_then(|tok| u32::from_str(tok).ok()) {
            Some(p) if tokens.len() >= 6 => p,
            _ => continue,
        };

        raw.insert_field(
            LevelVariable::GeopotentialHeight.key(pressure),
            vec![parse(tokens[1])],
        );
        raw.insert_field(LevelVariable::Temperature.key(pressure), vec![parse(tokens[2])]);
        raw.insert_field(LevelVariable::DewPoint.key(pressure), vec![parse(tokens[3])]);
        raw.insert_field(LevelVariable::WindSpeed.key(pressure), vec![parse(tokens[4])]);
        raw.insert_field(LevelVariable::WindDirection.key(pressure), vec![parse(tokens[5])]);
    }

    //
    // Surface data, the expected values after it are not needed here.
    //
    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Float Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 6 || parse(tokens[0]).is_none() {
            continue;
        }

        raw.insert_field(SurfaceVariable::Temperature.to_string(), vec![parse(tokens[0])]);
        raw.insert_field(SurfaceVariable::DewPoint.to_string(), vec![parse(tokens[1])]);
        raw.insert_field(SurfaceVariable::WindSpeed.to_string(), vec![parse(tokens[2])]);
        raw.insert_field(SurfaceVariable::WindDirection.to_string(), vec![parse(tokens[3])]);
        raw.insert_field(PassThroughVariable::CAPE.to_string(), vec![parse(tokens[4])]);
        raw.insert_field(PassThroughVariable::LiftedIndex.to_string(), vec![parse(tokens[5])]);
    }

    raw
}
