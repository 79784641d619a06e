use std::fmt;

use image::{DynamicImage, ImageBuffer, Pixel};
use ndarray::{Array3, ArrayView3};
use rand::Rng;
use tracing::debug;

use crate::config::ColorCurveConfig;
use crate::consts::COLOR_CHANNEL_COUNT;
use crate::curve::{CurveSampler, LookupTable};
use crate::error::Result;
use crate::params::{normalize, BoundSpec, CurveParam, SampleRange};
use crate::remap::ChannelRemapper;

/// Randomly maps the color channels through smooth non-linear curves.
///
/// Instead of parameterizing gamma or S-curves directly, the mapping is
/// defined by constraints: the new black point (output at 0), the new white
/// point (output at 1) and bounds on the slope between neighbouring control
/// points. Each call samples a fresh curve per channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonLinearColorJitter {
    white_point: SampleRange,
    black_point: SampleRange,
    slope: SampleRange,
}

impl NonLinearColorJitter {
    pub fn new(
        white_point: impl Into<BoundSpec>,
        black_point: impl Into<BoundSpec>,
        slope: impl Into<BoundSpec>,
    ) -> Result<Self> {
        let jitter = Self {
            white_point: normalize(white_point.into(), CurveParam::WhitePoint)?,
            black_point: normalize(black_point.into(), CurveParam::BlackPoint)?,
            slope: normalize(slope.into(), CurveParam::Slope)?,
        };
        debug!(
            white_point = %jitter.white_point,
            black_point = %jitter.black_point,
            slope = %jitter.slope,
            "Color curve jitter configured"
        );
        Ok(jitter)
    }

    pub fn from_config(config: &ColorCurveConfig) -> Result<Self> {
        Self::new(config.white_point, config.black_point, config.slope)
    }

    pub fn white_range(&self) -> SampleRange {
        self.white_point
    }

    pub fn black_range(&self) -> SampleRange {
        self.black_point
    }

    pub fn slope_range(&self) -> SampleRange {
        self.slope
    }

    pub fn sampler(&self) -> CurveSampler {
        CurveSampler::new(self.black_point, self.white_point, self.slope)
    }

    pub fn remapper(&self) -> ChannelRemapper {
        ChannelRemapper::new(self.sampler())
    }

    /// Sample the R, G, B lookup tables for one application.
    pub fn get_params<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<[LookupTable; COLOR_CHANNEL_COUNT]> {
        self.remapper().sample_tables(rng)
    }

    pub fn apply_array<R: Rng + ?Sized>(
        &self,
        image: ArrayView3<u8>,
        rng: &mut R,
    ) -> Result<Array3<u8>> {
        self.remapper().apply_array(image, rng)
    }

    pub fn apply_buffer<P, R>(
        &self,
        image: &ImageBuffer<P, Vec<u8>>,
        rng: &mut R,
    ) -> Result<ImageBuffer<P, Vec<u8>>>
    where
        P: Pixel<Subpixel = u8>,
        R: Rng + ?Sized,
    {
        self.remapper().apply_buffer(image, rng)
    }

    pub fn apply_dynamic<R: Rng + ?Sized>(
        &self,
        image: &DynamicImage,
        rng: &mut R,
    ) -> Result<DynamicImage> {
        self.remapper().apply_dynamic(image, rng)
    }
}

impl Default for NonLinearColorJitter {
    fn default() -> Self {
        Self::from_config(&ColorCurveConfig::default()).expect("default bounds are valid")
    }
}

impl fmt::Display for NonLinearColorJitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NonLinearColorJitter(white_point={}, black_point={}, slope={})",
            self.white_point, self.black_point, self.slope
        )
    }
}
