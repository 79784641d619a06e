use image::{DynamicImage, ImageBuffer, Pixel};
use ndarray::{Array3, ArrayView3};
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{COLOR_CHANNEL_COUNT, LUT_SIZE, PARALLEL_PIXEL_THRESHOLD};
use crate::curve::{CurveSampler, LookupTable};
use crate::error::{CurveError, Result};

/// Per-channel output levels, indexed by input level.
type ChannelLevels = [[u8; LUT_SIZE]; COLOR_CHANNEL_COUNT];

/// Remaps the R, G and B channels of an image through three independently
/// sampled lookup tables. Extra channels (alpha) pass through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct ChannelRemapper {
    sampler: CurveSampler,
}

impl ChannelRemapper {
    pub fn new(sampler: CurveSampler) -> Self {
        Self { sampler }
    }

    /// Sample one table per color channel, in R, G, B order.
    pub fn sample_tables<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<[LookupTable; COLOR_CHANNEL_COUNT]> {
        Ok([
            self.sampler.sample_lookup_table(rng)?,
            self.sampler.sample_lookup_table(rng)?,
            self.sampler.sample_lookup_table(rng)?,
        ])
    }

    /// Remap an array of shape (height, width, channels).
    pub fn apply_array<R: Rng + ?Sized>(
        &self,
        image: ArrayView3<u8>,
        rng: &mut R,
    ) -> Result<Array3<u8>> {
        check_channel_count(image.dim().2)?;
        let tables = self.sample_tables(rng)?;
        remap_array(image, &tables)
    }

    /// Remap an 8-bit image buffer with at least three channels.
    pub fn apply_buffer<P, R>(
        &self,
        image: &ImageBuffer<P, Vec<u8>>,
        rng: &mut R,
    ) -> Result<ImageBuffer<P, Vec<u8>>>
    where
        P: Pixel<Subpixel = u8>,
        R: Rng + ?Sized,
    {
        check_channel_count(P::CHANNEL_COUNT as usize)?;
        let tables = self.sample_tables(rng)?;
        remap_buffer(image, &tables)
    }

    /// Remap an 8-bit RGB or RGBA dynamic image.
    pub fn apply_dynamic<R: Rng + ?Sized>(
        &self,
        image: &DynamicImage,
        rng: &mut R,
    ) -> Result<DynamicImage> {
        check_dynamic(image)?;
        let tables = self.sample_tables(rng)?;
        remap_dynamic(image, &tables)
    }
}

/// Apply already sampled tables to an array of shape (height, width, channels).
pub fn remap_array(
    image: ArrayView3<u8>,
    tables: &[LookupTable; COLOR_CHANNEL_COUNT],
) -> Result<Array3<u8>> {
    let (_, width, channels) = image.dim();
    check_channel_count(channels)?;

    let mut out = image.as_standard_layout().into_owned();
    let data = out
        .as_slice_mut()
        .ok_or_else(|| CurveError::InputFormat("array is not contiguous".into()))?;
    remap_interleaved(data, width, channels, &channel_levels(tables));
    Ok(out)
}

/// Apply already sampled tables to an 8-bit image buffer.
pub fn remap_buffer<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    tables: &[LookupTable; COLOR_CHANNEL_COUNT],
) -> Result<ImageBuffer<P, Vec<u8>>>
where
    P: Pixel<Subpixel = u8>,
{
    let channels = P::CHANNEL_COUNT as usize;
    check_channel_count(channels)?;

    let width = image.width() as usize;
    let mut out = image.clone();
    remap_interleaved(&mut out, width, channels, &channel_levels(tables));
    Ok(out)
}

/// Apply already sampled tables to an 8-bit RGB or RGBA dynamic image.
pub fn remap_dynamic(
    image: &DynamicImage,
    tables: &[LookupTable; COLOR_CHANNEL_COUNT],
) -> Result<DynamicImage> {
    match image {
        DynamicImage::ImageRgb8(buf) => Ok(DynamicImage::ImageRgb8(remap_buffer(buf, tables)?)),
        DynamicImage::ImageRgba8(buf) => Ok(DynamicImage::ImageRgba8(remap_buffer(buf, tables)?)),
        other => Err(unsupported_color(other)),
    }
}

fn check_dynamic(image: &DynamicImage) -> Result<()> {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Ok(()),
        other => Err(unsupported_color(other)),
    }
}

fn unsupported_color(image: &DynamicImage) -> CurveError {
    CurveError::InputFormat(format!(
        "expected 8-bit RGB or RGBA image, got {:?}",
        image.color()
    ))
}

fn check_channel_count(channels: usize) -> Result<()> {
    if channels < COLOR_CHANNEL_COUNT {
        return Err(CurveError::InputFormat(format!(
            "expected at least {COLOR_CHANNEL_COUNT} channels, got {channels}"
        )));
    }
    Ok(())
}

fn channel_levels(tables: &[LookupTable; COLOR_CHANNEL_COUNT]) -> ChannelLevels {
    std::array::from_fn(|c| tables[c].to_levels())
}

/// Remap interleaved pixel data in place. Only the first three channels of
/// each pixel are touched.
fn remap_interleaved(data: &mut [u8], width: usize, channels: usize, levels: &ChannelLevels) {
    let row_len = width * channels;
    if row_len == 0 {
        return;
    }

    let pixels = data.len() / channels;
    if pixels >= PARALLEL_PIXEL_THRESHOLD {
        debug!(pixels, "Remapping channels in parallel");
        data.par_chunks_mut(row_len)
            .for_each(|row| remap_row(row, channels, levels));
    } else {
        remap_row(data, channels, levels);
    }
}

fn remap_row(row: &mut [u8], channels: usize, levels: &ChannelLevels) {
    for pixel in row.chunks_exact_mut(channels) {
        for (value, table) in pixel.iter_mut().zip(levels.iter()) {
            *value = table[*value as usize];
        }
    }
}
