use std::error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Grid construction was attempted with a zero row or column count.
    InvalidDimensions(usize, usize),
    /// More random obstacles were requested than free cells remain.
    InsufficientFreeCells(usize, usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidDimensions(rows, cols) => {
                write!(fmt, "grid dimensions {}x{} must both be positive", rows, cols)
            }
            Self::InsufficientFreeCells(requested, free) => {
                write!(
                    fmt,
                    "requested {} random obstacles but only {} free cells remain",
                    requested, free
                )
            }
        }
    }
}

impl error::Error for GridError {}
