use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The angular step is `180 / (count - 1)`, so fewer than two ticks has no layout.
    #[error("at least 2 ticks are required to span the arc, got {count}")]
    TooFewTicks { count: usize },
    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

impl ConfigurationError {
    pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidDimension { name, value })
        }
    }
}
