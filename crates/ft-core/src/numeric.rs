use crate::CoreError;

/// Floating point type used throughout the table pipeline
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Format a value in exponential notation with `digits` decimals and a signed,
/// at least two digit exponent (`1.00000000000e+05`).
///
/// Non-finite values are written as `nan`, `inf` and `-inf`.
pub fn format_exp(v: Real, digits: usize) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{:.*e}", digits, v);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}
