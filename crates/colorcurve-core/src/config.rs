use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLACK_POINT, DEFAULT_SLOPE, DEFAULT_WHITE_POINT};
use crate::error::{CurveError, Result};
use crate::params::BoundSpec;

/// User-facing configuration of the color curve jitter.
///
/// Each field is a jitter amount around its center or an explicit
/// `[min, max]` pair. Omitted fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorCurveConfig {
    #[serde(default = "default_white_point")]
    pub white_point: BoundSpec,
    #[serde(default = "default_black_point")]
    pub black_point: BoundSpec,
    #[serde(default = "default_slope")]
    pub slope: BoundSpec,
}

fn default_white_point() -> BoundSpec {
    BoundSpec::Scalar(DEFAULT_WHITE_POINT)
}

fn default_black_point() -> BoundSpec {
    BoundSpec::Scalar(DEFAULT_BLACK_POINT)
}

fn default_slope() -> BoundSpec {
    BoundSpec::Scalar(DEFAULT_SLOPE)
}

impl Default for ColorCurveConfig {
    fn default() -> Self {
        Self {
            white_point: default_white_point(),
            black_point: default_black_point(),
            slope: default_slope(),
        }
    }
}

impl ColorCurveConfig {
    /// Parse a TOML document with optional `white_point`, `black_point` and
    /// `slope` keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CurveError::invalid("config", e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CurveError::invalid("config", e.to_string()))
    }
}
