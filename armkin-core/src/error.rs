use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Link length at construction was zero or negative.
    InvalidLinkLength(f64),
    /// Boundary sampling was requested with fewer than 3 points per ring.
    InsufficientSamples(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLinkLength(length) => {
                write!(f, "link length must be positive, got {}", length)
            }
            Error::InsufficientSamples(samples) => {
                write!(f, "ring needs at least 3 samples, got {}", samples)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;
