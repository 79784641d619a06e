/// Number of entries in a per-channel lookup table (one per 8-bit level).
pub const LUT_SIZE: usize = 256;

/// Number of control points in a sampled curve (x = 0, 0.25, 0.5, 0.75, 1).
pub const CONTROL_POINT_COUNT: usize = 5;

/// Number of remapped color channels (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Maximum 8-bit channel value, used to scale [0, 1] levels back to integers.
pub const MAX_CHANNEL_VALUE: f64 = 255.0;

/// Default jitter of the white point around 1.0.
pub const DEFAULT_WHITE_POINT: f64 = 0.1;

/// Default jitter of the black point around 0.0.
pub const DEFAULT_BLACK_POINT: f64 = 0.1;

/// Default slope deviation around 1.0.
pub const DEFAULT_SLOPE: f64 = 0.5;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Slack allowed when the lower bound of a slope window exceeds the upper
/// bound due to floating-point rounding. Wider gaps are configuration errors.
pub const SLOPE_WINDOW_EPSILON: f64 = 1e-9;

/// Widest interval a uniform draw accepts. Wider intervals overflow the
/// sampler's internal scale.
pub const MAX_RANGE_WIDTH: f64 = f64::MAX / 2.0;
