//! sRGB transfer functions and the signed-power helper.
//!
//! The transform works in linear light; samples cross this module on the way
//! in and out. Conversions follow the IEC 61966-2-1 curve exactly, because
//! the hash is an interchange format and quantization must agree with other
//! implementations bit for bit.

use std::sync::OnceLock;

/// Linear-light value for every 8-bit sRGB sample, built on first use.
static SRGB_TO_LINEAR: OnceLock<[f64; 256]> = OnceLock::new();

fn srgb_table() -> &'static [f64; 256] {
    SRGB_TO_LINEAR.get_or_init(|| {
        let mut table = [0.0f64; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let v = i as f64 / 255.0;
            *slot = if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            };
        }
        table
    })
}

/// Convert an 8-bit sRGB sample to linear light in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use placehash::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0), 0.0);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    srgb_table()[value as usize]
}

/// Convert a linear-light value to an 8-bit sRGB sample, rounding to the
/// nearest representable level. Input outside `[0, 1]` is clamped.
///
/// # Examples
///
/// ```
/// use placehash::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(-0.25), 0);
/// ```
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    let v = value.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        (v * 12.92 * 255.0 + 0.5) as u8
    } else {
        ((1.055 * v.powf(1.0 / 2.4) - 0.055) * 255.0 + 0.5) as u8
    }
}

/// `sign(value) * |value|^exp`.
///
/// Compresses or expands dynamic range symmetrically around zero; the
/// quantizer uses exponent 0.5 and the dequantizer undoes it with 2.
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}
