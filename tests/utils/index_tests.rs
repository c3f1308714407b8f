use super::*;
use sounding_indices::{derive_indices, try_derive_indices, DerivedIndices, EngineConfig};

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_index(
    raw: &RawProfileData,
    tgt_float_vals: &HashMap<String, f64>,
    key: IndexKey,
    eps: f64,
) {
    let name: &str = key.as_ref();
    let target_val = *tgt_float_vals
        .get(name)
        .expect(&format!("no target value for {}", key));

    let analysis = derive_indices(raw, &EngineConfig::new(), 0).get(key);
    assert!(
        approx_equal(analysis, target_val, eps),
        "{}: {} != {}",
        key,
        analysis,
        target_val
    );
}

/// Either every index is calculated, or the result is exactly the default.
#[allow(dead_code)]
pub fn test_all_or_nothing(raw: &RawProfileData) {
    let config = EngineConfig::new();
    let lenient = derive_indices(raw, &config, 0);

    match try_derive_indices(raw, &config, 0) {
        Ok(strict) => {
            assert_eq!(strict, lenient);
            for (key, val) in strict.iter() {
                assert!(val.is_finite(), "{} is not finite", key);
            }
        }
        Err(_) => assert_eq!(lenient, DerivedIndices::default()),
    }
}

#[allow(dead_code)]
pub fn test_deterministic(raw: &RawProfileData) {
    let config = EngineConfig::new();
    let first = derive_indices(raw, &config, 0);

    for _ in 0..3 {
        assert_eq!(derive_indices(raw, &config, 0), first);
    }
}
