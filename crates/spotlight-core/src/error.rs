use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("margin must be a finite, non-negative pixel count (got {0})")]
    Margin(f64),
    #[error("drag threshold must be a finite, non-negative squared distance (got {0})")]
    DragThreshold(f64),
    #[error("{name} must lie strictly between 0 and 1 (got {value})")]
    Ease { name: &'static str, value: f64 },
}
