use std::{convert::TryFrom, fmt, ops::Neg};

use crate::{
    angle::{Angle, CompassDirection, InvalidAngle, SignStyle},
    bool_enum,
    utils::ToUnsigned,
};

bool_enum!(Pole: North and South; display as 'N':'S');

/// The angle measured between the equatorial plane and the point
/// along its meridian, limited to the `±90°` range.
/// [Read more](https://en.wikipedia.org/wiki/Latitude).
///
/// Negative values lie in the southern hemisphere.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Latitude(Angle);

impl Latitude {
    const MAX_DEGREES: u16 = 90;

    /// Wrap a signed angle as a latitude.
    ///
    /// # Errors
    /// `InvalidAngle::DegreesRange` when the point would lie
    /// farther from the equator than a pole.
    pub fn new(angle: Angle) -> Result<Self, InvalidAngle> {
        if angle.degrees().abs() > f64::from(Self::MAX_DEGREES) {
            return Err(InvalidAngle::DegreesRange(Self::MAX_DEGREES));
        }
        Ok(Self(angle))
    }

    /// Northern latitude from the angle's magnitude.
    ///
    /// # Errors
    /// The same range check as in [`new`](Self::new).
    pub fn north(angle: Angle) -> Result<Self, InvalidAngle> {
        Self::with_angle_and_direction(angle, North)
    }

    /// Southern latitude from the angle's magnitude.
    ///
    /// # Errors
    /// The same range check as in [`new`](Self::new).
    pub fn south(angle: Angle) -> Result<Self, InvalidAngle> {
        Self::with_angle_and_direction(angle, South)
    }

    fn with_angle_and_direction(angle: Angle, pole: Pole) -> Result<Self, InvalidAngle> {
        let angle = match pole {
            North => angle,
            South => -angle,
        };
        Self::new(angle)
    }

    /// The central latitude of the sphere equidistant from the poles
    pub fn equator() -> Self {
        Self::default()
    }

    /// The wrapped angle, signed
    pub const fn angle(self) -> Angle {
        self.0
    }

    /// The hemisphere of the point.
    /// The equator itself reports `North`, as the notation
    /// never renders `S` for a zero latitude.
    pub fn pole(self) -> Pole {
        if self.0.radians() < 0.0 {
            South
        } else {
            North
        }
    }

    /// Is the given latitude belongs to a pole
    pub fn is_pole(self) -> bool {
        self.0.degrees().abs() >= f64::from(Self::MAX_DEGREES)
    }

    /// Render the sexagesimal notation under the given sign policy
    pub fn format(self, style: SignStyle) -> String {
        self.0.to_sexagesimal(self.direction(), style)
    }
}

impl From<Pole> for Latitude {
    fn from(pole: Pole) -> Self {
        let top = Angle::from_degrees(f64::from(Self::MAX_DEGREES)).expect("90° is a valid angle");
        let angle = match pole {
            North => top,
            South => -top,
        };
        Self(angle)
    }
}

impl CompassDirection for Latitude {
    fn direction(&self) -> Option<char> {
        Some(self.pole().symbol())
    }
}

impl Neg for Latitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl TryFrom<f64> for Latitude {
    type Error = InvalidAngle;

    /// Signed decimal degrees into a latitude
    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        let (abs, is_north) = degrees.unsigned_abs();
        Self::with_angle_and_direction(Angle::from_degrees(abs)?, is_north.into())
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(SignStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poles_are_valid() {
        assert!(Latitude::try_from(90.0).is_ok());
        assert!(Latitude::try_from(-90.0).is_ok());
    }

    #[test]
    fn beyond_a_pole() {
        assert_eq!(
            Latitude::try_from(90.000_1),
            Err(InvalidAngle::DegreesRange(90))
        );
        assert_eq!(
            Latitude::try_from(-100.0),
            Err(InvalidAngle::DegreesRange(90))
        );
    }

    #[test]
    fn not_finite_degrees() {
        assert_eq!(Latitude::try_from(f64::NAN), Err(InvalidAngle::NotFinite));
    }

    #[test]
    fn hemisphere_by_sign() {
        assert_eq!(Latitude::try_from(45.5075).unwrap().pole(), North);
        assert_eq!(Latitude::try_from(-10.25).unwrap().pole(), South);
        assert_eq!(Latitude::equator().pole(), North);
        assert_eq!(-North, South);
    }

    #[test]
    fn named_constructors() {
        let lat = Latitude::south(Angle::from_degrees(10.25).unwrap()).unwrap();
        assert_eq!(lat.angle().sexagesimal(), (-10, -15, 0));
        assert_eq!(lat.direction(), Some('S'));

        let lat = Latitude::north(Angle::from_degrees(10.25).unwrap()).unwrap();
        assert_eq!(lat.direction(), Some('N'));
    }

    #[test]
    fn display_appends_the_letter() {
        assert_eq!(Latitude::try_from(45.5075).unwrap().to_string(), "45° 30′ 27″ N");
        assert_eq!(Latitude::try_from(-10.25).unwrap().to_string(), "10° 15′ S");
        assert_eq!(Latitude::equator().to_string(), "0° 0′ N");
    }

    #[test]
    fn leading_sign_format() {
        let lat = Latitude::try_from(-10.25).unwrap();
        assert_eq!(lat.format(SignStyle::LeadingSign), "-10° 15′");

        let lat = Latitude::try_from(10.25).unwrap();
        assert_eq!(lat.format(SignStyle::LeadingSign), "10° 15′");
    }

    #[test]
    fn only_poles_are_poles() {
        assert!(Latitude::from(North).is_pole());
        assert!(Latitude::from(South).is_pole());
        assert!(Latitude::try_from(-90.0).unwrap().is_pole());
        assert!(!Latitude::try_from(89.999).unwrap().is_pole());
        assert!(!Latitude::equator().is_pole());
    }

    #[test]
    fn from_pole() {
        assert_eq!(Latitude::from(North).to_string(), "90° 0′ N");
        assert_eq!(Latitude::from(South).to_string(), "90° 0′ S");
    }

    #[test]
    fn negation_swaps_the_pole() {
        let lat = -Latitude::try_from(45.5075).unwrap();
        assert_eq!(lat.pole(), South);
        assert_eq!(lat.to_string(), "45° 30′ 27″ S");
    }
}
