//! Error types shared by the simulation crates.

use thiserror::Error;

/// Failures of the pure geometry helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Start and end point are the same, so there is no direction to travel in.
    #[error("start and end positions coincide; direction is undefined")]
    CoincidentPoints,
}
