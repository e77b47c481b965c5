//! Forward transform: project an image onto the 2-D cosine basis and pack
//! the quantized components into a hash string.

use std::f64::consts::PI;

use crate::base83;
use crate::color::{linear_to_srgb, sign_pow, srgb_to_linear};
use crate::error::PlacehashError;
use crate::pixels::PixelSource;

/// Encode an image into a placeholder hash.
///
/// `x_components` and `y_components` select how many horizontal and vertical
/// frequencies the hash keeps, each within `1..=9`. More components produce a
/// longer hash and a more detailed preview; the resulting string is always
/// `4 + 2 * x_components * y_components` characters.
///
/// # Errors
///
/// Returns [`PlacehashError::InvalidParameter`] if either component count is
/// outside `1..=9`.
///
/// # Examples
///
/// ```
/// use placehash::{encode, RgbSource};
///
/// let pixels = vec![128u8; 4 * 4 * 3]; // 4x4 gray image
/// let source = RgbSource::new(&pixels, 4, 4).unwrap();
/// let hash = encode(&source, 4, 3).unwrap();
/// assert_eq!(hash.len(), 4 + 2 * 4 * 3);
/// ```
pub fn encode<S: PixelSource>(
    source: &S,
    x_components: u32,
    y_components: u32,
) -> Result<String, PlacehashError> {
    if !(1..=9).contains(&x_components) {
        return Err(PlacehashError::InvalidParameter {
            component: "x",
            value: x_components,
        });
    }
    if !(1..=9).contains(&y_components) {
        return Err(PlacehashError::InvalidParameter {
            component: "y",
            value: y_components,
        });
    }

    let width = source.width() as usize;
    let height = source.height() as usize;
    let wf = width as f64;
    let hf = height as f64;

    // Gamma-decode every sample once up front; the basis loops below revisit
    // each pixel x_components * y_components times.
    let mut linear: Vec<[f64; 3]> = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = source.rgb(x as u32, y as u32);
            linear.push([srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]);
        }
    }

    // cos_x[i][x] = cos(PI * i * x / width), and likewise for the y axis.
    let cos_x: Vec<Vec<f64>> = (0..x_components as usize)
        .map(|i| {
            (0..width)
                .map(|x| (PI * i as f64 * x as f64 / wf).cos())
                .collect()
        })
        .collect();
    let cos_y: Vec<Vec<f64>> = (0..y_components as usize)
        .map(|j| {
            (0..height)
                .map(|y| (PI * j as f64 * y as f64 / hf).cos())
                .collect()
        })
        .collect();

    let component_count = (x_components * y_components) as usize;
    let mut factors: Vec<[f64; 3]> = Vec::with_capacity(component_count);

    for (j, cos_y_row) in cos_y.iter().enumerate() {
        for (i, cos_x_row) in cos_x.iter().enumerate() {
            // The DC term is a plain average; every AC term carries the
            // factor 2 of the cosine basis.
            let normalisation = if i == 0 && j == 0 { 1.0 } else { 2.0 };
            let mut r = 0.0f64;
            let mut g = 0.0f64;
            let mut b = 0.0f64;
            for (y, &cy) in cos_y_row.iter().enumerate() {
                let row = y * width;
                for (x, &cx) in cos_x_row.iter().enumerate() {
                    let basis = cx * cy;
                    let px = &linear[row + x];
                    r += basis * px[0];
                    g += basis * px[1];
                    b += basis * px[2];
                }
            }
            let scale = normalisation / (wf * hf);
            factors.push([r * scale, g * scale, b * scale]);
        }
    }

    let dc = factors[0];
    let dc_value = ((linear_to_srgb(dc[0]) as u64) << 16)
        | ((linear_to_srgb(dc[1]) as u64) << 8)
        | linear_to_srgb(dc[2]) as u64;

    let ac = &factors[1..];
    let (quantised_max, max_value) = if ac.is_empty() {
        (0u64, 1.0)
    } else {
        let actual_max = ac
            .iter()
            .flat_map(|factor| factor.iter())
            .fold(0.0f64, |acc, &v| acc.max(v.abs()));
        let quantised = (actual_max * 166.0 - 0.5).floor().clamp(0.0, 82.0) as u64;
        (quantised, (quantised as f64 + 1.0) / 166.0)
    };

    let quantise_ac = |v: f64| -> u64 {
        (sign_pow(v / max_value, 0.5) * 9.0 + 9.5)
            .floor()
            .clamp(0.0, 18.0) as u64
    };

    // Assemble the hash through the buffer-offset codec API; one allocation
    // for the whole string.
    let expected_len = 4 + 2 * component_count;
    let mut hash = vec![0u8; expected_len];
    let size_flag = ((x_components - 1) + (y_components - 1) * 9) as u64;
    let mut pos = base83::encode_into(size_flag, 1, &mut hash, 0)?;
    pos = base83::encode_into(quantised_max, 1, &mut hash, pos)?;
    pos = base83::encode_into(dc_value, 4, &mut hash, pos)?;
    for factor in ac {
        let packed =
            quantise_ac(factor[0]) * 19 * 19 + quantise_ac(factor[1]) * 19 + quantise_ac(factor[2]);
        pos = base83::encode_into(packed, 2, &mut hash, pos)?;
    }

    if pos != expected_len {
        return Err(PlacehashError::EncodingInvariant {
            reason: "assembled hash length does not match the component layout",
        });
    }

    // SAFETY: encode_into only writes alphabet bytes, which are pure ASCII.
    Ok(unsafe { String::from_utf8_unchecked(hash) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base83;
    use crate::pixels::RgbSource;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgb);
        }
        pixels
    }

    #[test]
    fn rejects_out_of_range_components() {
        let pixels = solid(4, 4, [0, 0, 0]);
        let source = RgbSource::new(&pixels, 4, 4).unwrap();
        assert_eq!(
            encode(&source, 0, 3),
            Err(PlacehashError::InvalidParameter { component: "x", value: 0 })
        );
        assert_eq!(
            encode(&source, 10, 3),
            Err(PlacehashError::InvalidParameter { component: "x", value: 10 })
        );
        assert_eq!(
            encode(&source, 4, 0),
            Err(PlacehashError::InvalidParameter { component: "y", value: 0 })
        );
        assert_eq!(
            encode(&source, 4, 10),
            Err(PlacehashError::InvalidParameter { component: "y", value: 10 })
        );
    }

    #[test]
    fn hash_length_matches_component_grid() {
        let pixels = solid(8, 8, [120, 90, 60]);
        let source = RgbSource::new(&pixels, 8, 8).unwrap();
        assert_eq!(encode(&source, 1, 1).unwrap().len(), 6);
        assert_eq!(encode(&source, 4, 3).unwrap().len(), 28);
        assert_eq!(encode(&source, 9, 9).unwrap().len(), 166);
    }

    #[test]
    fn size_flag_is_first_character() {
        let pixels = solid(4, 4, [0, 0, 0]);
        let source = RgbSource::new(&pixels, 4, 4).unwrap();
        let hash = encode(&source, 4, 3).unwrap();
        // (4-1) + (3-1)*9 = 21
        assert_eq!(base83::decode(&hash[..1]).unwrap(), 21);
    }

    #[test]
    fn single_pixel_image() {
        let pixels = [128u8, 64, 32];
        let source = RgbSource::new(&pixels, 1, 1).unwrap();
        let hash = encode(&source, 1, 1).unwrap();
        assert_eq!(hash.len(), 6);
    }

    #[test]
    fn output_stays_inside_the_alphabet() {
        let mut pixels = Vec::with_capacity(16 * 16 * 3);
        for y in 0..16u32 {
            for x in 0..16u32 {
                pixels.push((x * 16) as u8);
                pixels.push((y * 16) as u8);
                pixels.push(200);
            }
        }
        let source = RgbSource::new(&pixels, 16, 16).unwrap();
        let hash = encode(&source, 4, 4).unwrap();
        for ch in hash.chars() {
            assert!(
                base83::ALPHABET.contains(&(ch as u8)),
                "character {ch:?} escaped the alphabet"
            );
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let pixels = solid(16, 16, [10, 200, 40]);
        let source = RgbSource::new(&pixels, 16, 16).unwrap();
        assert_eq!(
            encode(&source, 4, 4).unwrap(),
            encode(&source, 4, 4).unwrap()
        );
    }
}
