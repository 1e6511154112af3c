use std::{convert::TryFrom, fmt};

use crate::angle::InvalidAngle;

use super::{
    lat::{
        Latitude,
        Pole::{North, South},
    },
    lon::Longitude,
};

/// The point on the surface, represented as the pair (latitude, longitude)
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    lat: Latitude,
    lon: Longitude,
}

impl Point {
    /// Construct a point from the given latitude and longitude
    pub const fn new(lat: Latitude, lon: Longitude) -> Self {
        Self { lat, lon }
    }

    /// Construct a point from signed decimal degrees
    /// (northern latitudes and eastern longitudes are positive).
    ///
    /// # Errors
    /// When either number is not finite or out of its coordinate range.
    pub fn with_coordinates(lat: f64, lon: f64) -> Result<Self, InvalidAngle> {
        Ok(Self {
            lat: Latitude::try_from(lat)?,
            lon: Longitude::try_from(lon)?,
        })
    }

    /// Construct a north pole point (lat=90, lon=0 (by convention)).
    pub fn north_pole() -> Self {
        // all the meridians converge on a pole, so put the longitude zero
        Self::new(North.into(), Longitude::prime_meridian())
    }

    /// Construct a south pole point (lat=-90, lon=0 (by convention)).
    pub fn south_pole() -> Self {
        // all the meridians converge on a pole, so put the longitude zero
        Self::new(South.into(), Longitude::prime_meridian())
    }

    /// Latitude of the point
    pub const fn latitude(self) -> Latitude {
        self.lat
    }

    /// Longitude of the point
    pub const fn longitude(self) -> Longitude {
        self.lon
    }

    /// Is the point represents a pole?
    /// All the longitudes at pole are singular, so the longitude
    /// of the pole can be any meridian.
    pub fn is_pole(self) -> bool {
        self.lat.is_pole()
    }

    /// The diametrically opposite point
    pub fn antipodal(self) -> Self {
        Self {
            lat: -self.lat,
            lon: self.lon.opposite(),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        if self.lat == other.lat {
            // meridians at the poles do not matter
            if self.lat.is_pole() {
                return true;
            }

            if self.lon == other.lon {
                return true;
            }
        }

        false
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {}, Long: {}", self.lat, self.lon)
        } else {
            write!(f, "{}, {}", self.lat, self.lon)
        }
    }
}
