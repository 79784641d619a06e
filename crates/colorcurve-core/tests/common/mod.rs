#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use ndarray::Array3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Array of shape (h, w, channels) cycling through every 8-bit level.
pub fn make_level_array(h: usize, w: usize, channels: usize) -> Array3<u8> {
    Array3::from_shape_fn((h, w, channels), |(row, col, c)| {
        ((row * w + col) * channels + c) as u8
    })
}

/// RGB image whose channels sweep all 256 levels.
pub fn make_gradient_rgb(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let v = ((y * w + x) % 256) as u8;
        Rgb([v, v.wrapping_add(85), v.wrapping_add(170)])
    })
}

/// RGBA image with gradient color channels and a constant alpha.
pub fn make_gradient_rgba(w: u32, h: u32, alpha: u8) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        let v = ((y * w + x) % 256) as u8;
        Rgba([v, 255 - v, v / 2, alpha])
    })
}
