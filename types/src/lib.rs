//! Planar angle and point location (ISO 6709) display types

#![warn(anonymous_parameters)]
#![warn(elided_lifetimes_in_paths)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    sexagesimal::{sexagesimal_combine, sexagesimal_split},
    Angle, CompassDirection, Field, InvalidAngle, SignStyle,
};
pub use coord::{Latitude, Longitude, Point, Pole, RotationalDirection};

mod angle;
mod coord;
mod utils;
