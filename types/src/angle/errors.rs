use std::{error::Error, fmt};

use super::consts::DEGREE_SIGN;

/// The reasons a numeric value cannot act as an angle
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidAngle {
    /// The value is NaN or infinite (in radians or in its degrees form)
    NotFinite,
    /// The absolute degrees value exceeds the limit of the coordinate kind
    DegreesRange(u16),
}

impl fmt::Display for InvalidAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => write!(f, "Angle value should be a finite number"),
            Self::DegreesRange(max) => {
                write!(f, "Angle value not in the ±{}{} range", max, DEGREE_SIGN)
            }
        }
    }
}

impl Error for InvalidAngle {}
