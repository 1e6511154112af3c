use std::{convert::TryFrom, fmt, ops::Neg};

use crate::{
    angle::{Angle, CompassDirection, InvalidAngle, SignStyle},
    bool_enum,
    utils::ToUnsigned,
};

bool_enum!(RotationalDirection: East and West; display as 'E':'W');

/// The angle measured on the equatorial plane between the meridian
/// of the point and the prime meridian (Greenwich, UK),
/// limited to the `±180°` range.
/// [Read more](https://en.wikipedia.org/wiki/Longitude).
///
/// Negative values lie in the western hemisphere.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Longitude(Angle);

impl Longitude {
    const MAX_DEGREES: u16 = 180;

    /// Wrap a signed angle as a longitude.
    ///
    /// # Errors
    /// `InvalidAngle::DegreesRange` when the point lies beyond
    /// the antimeridian.
    pub fn new(angle: Angle) -> Result<Self, InvalidAngle> {
        if angle.degrees().abs() > f64::from(Self::MAX_DEGREES) {
            return Err(InvalidAngle::DegreesRange(Self::MAX_DEGREES));
        }
        Ok(Self(angle))
    }

    /// Eastern longitude from the angle's magnitude.
    ///
    /// # Errors
    /// The same range check as in [`new`](Self::new).
    pub fn east(angle: Angle) -> Result<Self, InvalidAngle> {
        Self::with_angle_and_direction(angle, East)
    }

    /// Western longitude from the angle's magnitude.
    ///
    /// # Errors
    /// The same range check as in [`new`](Self::new).
    pub fn west(angle: Angle) -> Result<Self, InvalidAngle> {
        Self::with_angle_and_direction(angle, West)
    }

    fn with_angle_and_direction(
        angle: Angle,
        direction: RotationalDirection,
    ) -> Result<Self, InvalidAngle> {
        let angle = match direction {
            East => angle,
            West => -angle,
        };
        Self::new(angle)
    }

    /// The zero longitude (Greenwich)
    pub fn prime_meridian() -> Self {
        Self::default()
    }

    /// The wrapped angle, signed
    pub const fn angle(self) -> Angle {
        self.0
    }

    /// In which rotational direction the point lies from Greenwich.
    /// The prime meridian itself reports `East`, as the notation
    /// never renders `W` for a zero longitude.
    pub fn rotational_direction(self) -> RotationalDirection {
        if self.0.radians() < 0.0 {
            West
        } else {
            East
        }
    }

    /// The meridian on the opposite half of the great circle
    pub fn opposite(self) -> Self {
        let degrees = self.0.degrees();
        let half_turn = f64::from(Self::MAX_DEGREES);
        let opposite = if degrees > 0.0 {
            degrees - half_turn
        } else {
            degrees + half_turn
        };
        let angle = Angle::from_degrees(opposite).expect("a half turn away stays finite");
        Self::new(angle).expect("a half turn away stays within the range")
    }

    /// Render the sexagesimal notation under the given sign policy
    pub fn format(self, style: SignStyle) -> String {
        self.0.to_sexagesimal(self.direction(), style)
    }
}

impl CompassDirection for Longitude {
    fn direction(&self) -> Option<char> {
        Some(self.rotational_direction().symbol())
    }
}

impl Neg for Longitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = InvalidAngle;

    /// Signed decimal degrees into a longitude
    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        let (abs, is_east) = degrees.unsigned_abs();
        Self::with_angle_and_direction(Angle::from_degrees(abs)?, is_east.into())
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(SignStyle::default()))
    }
}
