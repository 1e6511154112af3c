//! The planar angle value with radian, decimal degree
//! and sexagesimal (DMS) views of the same measurement

use std::{
    cmp::Ordering,
    f64::consts::{PI, TAU},
    fmt::{self, Write as _},
    ops::Neg,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod consts;
mod errors;
pub mod sexagesimal;

pub use errors::InvalidAngle;

use consts::HALF_TURN_DEG;
use sexagesimal::sexagesimal_split;

/// The three components of the sexagesimal notation
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    /// Whole degree units
    Degrees,
    /// Arc minutes, 1/60 of a degree
    Minutes,
    /// Arc seconds, 1/60 of an arc minute
    Seconds,
}

impl Field {
    /// Display name of the component
    pub const fn name(self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// The glyph rendered right after the component's value
    pub const fn symbol(self) -> char {
        match self {
            Self::Degrees => consts::DEGREE_SIGN,
            Self::Minutes => consts::ARC_MINUTE_SIGN,
            Self::Seconds => consts::ARC_SECOND_SIGN,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the sign of a negative angle interacts with a compass letter
/// in the sexagesimal notation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignStyle {
    /// The compass letter is appended as a suffix and replaces the sign;
    /// a bare leading `-` appears only when no letter is available.
    #[default]
    Suffix,
    /// Historical notation observed in older point location strings:
    /// a leading `-` is kept when a compass letter exists
    /// (the letter itself is not printed), while an angle without
    /// a letter gets neither sign nor suffix.
    LeadingSign,
}

/// The capability of a value to name its compass letter.
///
/// The plain [`Angle`] has none; the coordinate wrappers
/// ([`Latitude`](crate::Latitude) and [`Longitude`](crate::Longitude))
/// report their hemisphere.
pub trait CompassDirection {
    /// The compass letter, when the value has one
    fn direction(&self) -> Option<char>;
}

/// An immutable planar angle stored as radians.
///
/// Every derived form (decimal degrees, the sexagesimal triple,
/// sine and cosine) is computed on demand and never stored,
/// so the value stays a single `f64` wide.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Construct an angle from a radian value.
    ///
    /// # Errors
    /// `InvalidAngle::NotFinite` when the value is NaN or infinite,
    /// including radian values so large that the degrees form overflows.
    pub fn from_radians(radians: f64) -> Result<Self, InvalidAngle> {
        // the degrees form must stay finite too, to keep `Display` total
        let degrees = radians * HALF_TURN_DEG / PI;
        if !degrees.is_finite() {
            return Err(InvalidAngle::NotFinite);
        }
        Ok(Self { radians })
    }

    /// Construct an angle from a decimal degrees value.
    ///
    /// # Errors
    /// `InvalidAngle::NotFinite` when the value is NaN or infinite.
    pub fn from_degrees(degrees: f64) -> Result<Self, InvalidAngle> {
        if !degrees.is_finite() {
            return Err(InvalidAngle::NotFinite);
        }
        Self::from_radians(degrees * PI / HALF_TURN_DEG)
    }

    /// The decimal degrees form of the angle
    pub fn degrees(self) -> f64 {
        self.radians * HALF_TURN_DEG / PI
    }

    /// The radian value as stored
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// Sine of the angle
    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    /// Cosine of the angle
    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    /// The (units, minutes, seconds) triple of the degrees form.
    /// All three components carry the sign of the angle.
    pub fn sexagesimal(self) -> (i64, i64, i64) {
        sexagesimal_split(self.degrees()).expect("constructed angles have a finite degrees form")
    }

    /// A single signed sexagesimal component of the degrees form
    pub fn field(self, field: Field) -> i64 {
        let (units, minutes, seconds) = self.sexagesimal();
        match field {
            Field::Degrees => units,
            Field::Minutes => minutes,
            Field::Seconds => seconds,
        }
    }

    /// The same direction measured within a single turn, `[0, 2π)` radians
    pub fn normalize(self) -> Self {
        Self {
            radians: self.radians.rem_euclid(TAU),
        }
    }

    /// Ordering over the displayed sexagesimal triple, coarsest component
    /// first. Angles closer than half an arc second compare as equal.
    pub fn sexagesimal_cmp(self, rhs: Self) -> Ordering {
        self.sexagesimal().cmp(&rhs.sexagesimal())
    }

    /// Render the degrees/minutes/seconds notation, e.g. `45° 30′ 27″`.
    ///
    /// The seconds segment is omitted when its component is zero.
    /// The interplay of the minus sign and the compass letter
    /// is decided by the given [`SignStyle`].
    pub fn to_sexagesimal(self, direction: Option<char>, style: SignStyle) -> String {
        let (units, minutes, seconds) = self.sexagesimal();

        let mut formatted = format!(
            "{}{} {}{}",
            units.abs(),
            Field::Degrees.symbol(),
            minutes.abs(),
            Field::Minutes.symbol(),
        );
        if seconds != 0 {
            write!(formatted, " {}{}", seconds.abs(), Field::Seconds.symbol())
                .expect("writing into a String cannot fail");
        }

        let negative = self.radians < 0.0;
        match (style, direction) {
            (SignStyle::Suffix, Some(letter)) => {
                formatted.push(' ');
                formatted.push(letter);
            }
            (SignStyle::Suffix, None) | (SignStyle::LeadingSign, Some(_)) if negative => {
                formatted.insert(0, '-');
            }
            _ => {}
        }
        formatted
    }
}

impl CompassDirection for Angle {
    fn direction(&self) -> Option<char> {
        None
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            radians: -self.radians,
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sexagesimal(self.direction(), SignStyle::default()))
    }
}
