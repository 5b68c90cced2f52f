use std::{error::Error, fmt};

#[derive(Debug, PartialEq, Eq)]
pub enum MandelbrotError {
    ZeroMaxIterations,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotError {}
