use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Invalid configuration for {name}: {reason}")]
    InvalidConfiguration { name: String, reason: String },

    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("Infeasible slope window: min_y {min_y} > max_y {max_y}")]
    InfeasibleSlopeWindow { min_y: f64, max_y: f64 },

    #[error("Interpolation error: {0}")]
    Interpolation(String),
}

impl CurveError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
