//! Encode and decode walkthrough.
//!
//! Run with: cargo run --example demo

use placehash::{components, decode, encode, RgbSource};

fn main() {
    // A small two-axis gradient: red left to right, green top to bottom.
    let width = 16u32;
    let height = 16u32;
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / (width - 1)) as u8);
            pixels.push((y * 255 / (height - 1)) as u8);
            pixels.push(128);
        }
    }

    let source = RgbSource::new(&pixels, width, height).expect("buffer matches dimensions");
    let hash = encode(&source, 4, 3).expect("component counts are in range");
    println!("encoded {width}x{height} gradient -> {hash} ({} chars)", hash.len());

    let (cx, cy) = components(&hash).expect("hash is well formed");
    println!("size flag says {cx}x{cy} components");

    let preview = decode(&hash, 8, 8, 1.0).expect("hash is well formed");
    println!(
        "decoded preview: {}x{}, top-left {:?}, bottom-right {:?}",
        preview.width(),
        preview.height(),
        preview.pixel(0, 0),
        preview.pixel(7, 7),
    );
}
