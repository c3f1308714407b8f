//! Composite parameters combining instability and wind shear.
//!
//! The shear terms are in meters per second, not knots.
use metfor::{IntHelicityM2pS2, JpKg, Meters, MetersPSec, Quantity};

/// Supercell Composite Parameter.
///
/// `(CAPE / 1000) * (shear / 20 m/s) * (SRH / 50)`
///
/// # Examples
///
/// ```rust
/// use metfor::{IntHelicityM2pS2, JpKg, MetersPSec};
/// use sounding_indices::supercell_composite;
///
/// let scp = supercell_composite(JpKg(2000.0), MetersPSec(20.0), IntHelicityM2pS2(100.0));
/// assert!((scp - 4.0).abs() < 1.0e-10);
/// ```
#[inline]
pub fn supercell_composite(cape: JpKg, shear: MetersPSec, srh: IntHelicityM2pS2) -> f64 {
    (cape.unpack() / 1000.0) * (shear.unpack() / 20.0) * (srh.unpack() / 50.0)
}

/// Significant Tornado Parameter.
///
/// `(CAPE / 1500) * clamp((2000 - LCL) / 1000, 0, 1) * (SRH / 150) * (shear / 20 m/s)`
#[inline]
pub fn significant_tornado(
    cape: JpKg,
    lcl_height: Meters,
    srh: IntHelicityM2pS2,
    shear: MetersPSec,
) -> f64 {
    let lcl_term = ((2000.0 - lcl_height.unpack()) / 1000.0).max(0.0).min(1.0);

    (cape.unpack() / 1500.0) * lcl_term * (srh.unpack() / 150.0) * (shear.unpack() / 20.0)
}
