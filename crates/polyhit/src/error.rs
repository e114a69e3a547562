use thiserror::Error;

/// Caller misuse at the shape boundary. Geometry degeneracy is never an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("index {index} is out of range for {len} points")]
    OutOfRange { index: usize, len: usize },
}
