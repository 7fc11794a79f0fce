use crate::PvError;

/// Absolute tolerance when matching engine-reported depths to requested ones.
pub const DEPTH_TOLERANCE: f64 = 1e-3;

/// Decimal places kept for the surface/base modulus ratio.
pub const RATIO_DECIMALS: i32 = 2;

/// Strict absolute-difference comparison: `|a - b| < tol`.
pub fn within_abs(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

/// Surface modulus over base modulus, rounded for reporting.
pub fn modulus_ratio(surface: f64, base: f64) -> Result<f64, PvError> {
    if base == 0.0 {
        return Err(PvError::InvalidArg {
            what: "base modulus must be non-zero",
        });
    }
    ensure_finite(round_to(surface / base, RATIO_DECIMALS), "modulus ratio")
}

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, PvError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PvError::NonFinite { what, value: v })
    }
}
