//! # placehash
//!
//! Compact blurred-placeholder hashes for images.
//!
//! A placeholder hash is a short printable string — usually 20 to 30
//! characters — that captures an image's average color and its low-frequency
//! color variation. A client can decode it into a plausible blurred preview
//! while the real image is still on the wire. The string format is
//! interchange-compatible with the de facto BlurHash format, so hashes
//! produced here decode anywhere a compliant decoder runs, and vice versa.
//!
//! The crate is the codec only: encoding works against any [`PixelSource`]
//! and decoding produces an owned [`RgbaImage`]. File loading, image format
//! decoding, and CLI plumbing belong to callers.
//!
//! ## Quick start
//!
//! ```
//! use placehash::{components, decode, encode, RgbSource};
//!
//! // Encode: pixels -> hash.
//! let pixels = vec![128u8; 4 * 4 * 3]; // 4x4 gray image, row-major RGB
//! let source = RgbSource::new(&pixels, 4, 4).unwrap();
//! let hash = encode(&source, 4, 3).unwrap();
//! assert_eq!(components(&hash).unwrap(), (4, 3));
//!
//! // Decode: hash -> RGBA preview at whatever resolution suits the UI.
//! let preview = decode(&hash, 32, 32, 1.0).unwrap();
//! assert_eq!(preview.as_raw().len(), 32 * 32 * 4);
//! ```

pub mod base83;
pub mod color;
pub mod error;
pub mod pixels;

mod decode;
mod encode;

// Re-export the primary API at the crate root.
pub use color::{linear_to_srgb, sign_pow, srgb_to_linear};
pub use decode::{components, decode};
pub use encode::encode;
pub use error::PlacehashError;
pub use pixels::{PixelSource, Rgb16Source, RgbSource, RgbaImage};
