//! Inverse transform: parse a hash string and reconstruct a blurred raster
//! preview at any requested resolution.

use std::f64::consts::PI;

use crate::base83;
use crate::color::{linear_to_srgb, sign_pow, srgb_to_linear};
use crate::error::PlacehashError;
use crate::pixels::RgbaImage;

/// Read the component counts from a hash's size flag.
///
/// Also validates the overall length against those counts, so an `Ok` result
/// guarantees the hash has the full `4 + 2 * x * y` layout.
///
/// # Errors
///
/// Returns [`PlacehashError::InvalidHash`] if the hash is shorter than the
/// 6-character minimum or its length contradicts the size flag, and
/// [`PlacehashError::InvalidCharacter`] if it contains anything outside the
/// base83 alphabet that the flag decode touches.
///
/// # Examples
///
/// ```
/// use placehash::components;
/// let (x, y) = components("LFE.@D9F01_2%L%MIVD*9Goe-;WB").unwrap();
/// assert_eq!((x, y), (4, 3));
/// ```
pub fn components(hash: &str) -> Result<(u32, u32), PlacehashError> {
    if hash.chars().count() < 6 {
        return Err(PlacehashError::InvalidHash {
            reason: "shorter than the 6-character minimum",
        });
    }
    // Reject non-ASCII up front, one rune at a time; everything below
    // byte-indexes the string.
    if let Some(ch) = hash.chars().find(|ch| !ch.is_ascii()) {
        return Err(PlacehashError::InvalidCharacter(ch));
    }

    let size_flag = base83::decode(&hash[..1])?;
    let x = (size_flag % 9 + 1) as u32;
    let y = (size_flag / 9 + 1) as u32;
    if hash.len() != 4 + 2 * (x * y) as usize {
        return Err(PlacehashError::InvalidHash {
            reason: "length does not match the size flag",
        });
    }
    Ok((x, y))
}

/// Reconstruct a `width` x `height` RGBA preview from a hash.
///
/// `punch` scales the AC components: values above 1 exaggerate the preview's
/// contrast, values below 1 flatten it, and 0 is treated as 1. The output is
/// fully opaque.
///
/// # Errors
///
/// Propagates everything [`components`] rejects, plus
/// [`PlacehashError::InvalidCharacter`] for malformed digits in any field.
///
/// # Examples
///
/// ```
/// use placehash::decode;
/// let preview = decode("LFE.@D9F01_2%L%MIVD*9Goe-;WB", 32, 32, 1.0).unwrap();
/// assert_eq!(preview.as_raw().len(), 32 * 32 * 4);
/// ```
pub fn decode(
    hash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<RgbaImage, PlacehashError> {
    let (x_components, y_components) = components(hash)?;
    let punch = if punch == 0.0 { 1.0 } else { punch };

    let quantised_max = base83::decode(&hash[1..2])?;
    let max_value = (quantised_max as f64 + 1.0) / 166.0 * punch;

    let component_count = (x_components * y_components) as usize;
    let mut colors: Vec<[f64; 3]> = Vec::with_capacity(component_count);

    let dc_value = base83::decode(&hash[2..6])?;
    colors.push([
        srgb_to_linear((dc_value >> 16) as u8),
        srgb_to_linear((dc_value >> 8 & 255) as u8),
        srgb_to_linear((dc_value & 255) as u8),
    ]);

    for idx in 1..component_count {
        let start = 4 + idx * 2;
        let ac_value = base83::decode(&hash[start..start + 2])?;
        let quant_r = (ac_value / (19 * 19)) as f64;
        let quant_g = ((ac_value / 19) % 19) as f64;
        let quant_b = (ac_value % 19) as f64;
        colors.push([
            sign_pow((quant_r - 9.0) / 9.0, 2.0) * max_value,
            sign_pow((quant_g - 9.0) / 9.0, 2.0) * max_value,
            sign_pow((quant_b - 9.0) / 9.0, 2.0) * max_value,
        ]);
    }

    let w = width as usize;
    let h = height as usize;
    let wf = width as f64;
    let hf = height as f64;

    // cos_x[i][x] = cos(PI * x * i / width), and likewise for the y axis.
    let cos_x: Vec<Vec<f64>> = (0..x_components as usize)
        .map(|i| {
            (0..w)
                .map(|x| (PI * x as f64 * i as f64 / wf).cos())
                .collect()
        })
        .collect();
    let cos_y: Vec<Vec<f64>> = (0..y_components as usize)
        .map(|j| {
            (0..h)
                .map(|y| (PI * y as f64 * j as f64 / hf).cos())
                .collect()
        })
        .collect();

    let mut data = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let mut r = 0.0f64;
            let mut g = 0.0f64;
            let mut b = 0.0f64;
            for (j, cos_y_row) in cos_y.iter().enumerate() {
                let cy = cos_y_row[y];
                for (i, cos_x_row) in cos_x.iter().enumerate() {
                    let basis = cos_x_row[x] * cy;
                    let color = &colors[i + j * x_components as usize];
                    r += color[0] * basis;
                    g += color[1] * basis;
                    b += color[2] * basis;
                }
            }
            let idx = (y * w + x) * 4;
            data[idx] = linear_to_srgb(r);
            data[idx + 1] = linear_to_srgb(g);
            data[idx + 2] = linear_to_srgb(b);
            data[idx + 3] = 255;
        }
    }

    Ok(RgbaImage::from_parts(width, height, data))
}
