//! Geographic coordinate wrappers implementing the compass direction hook

pub use self::{
    lat::{Latitude, Pole},
    lon::{Longitude, RotationalDirection},
    point::Point,
};

mod lat;
mod lon;
mod point;

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($name:ident: $truthy:ident and $falsy:ident; display as $true_ch:literal:$false_ch:literal) => {
        use self::$name::{$falsy, $truthy};

        #[allow(missing_docs)]
        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $truthy,
            $falsy,
        }

        impl $name {
            /// The compass letter of the direction
            pub const fn symbol(self) -> char {
                match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                }
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $falsy => $truthy,
                    $truthy => $falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}
