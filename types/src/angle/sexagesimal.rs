//! Splitting a decimal degrees value into its sexagesimal parts
//! and combining the parts back into a decimal value.

use num_traits::Float;

use crate::utils::div_mod;

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
    errors::InvalidAngle,
};

/// Split a signed decimal value into its (units, minutes, seconds)
/// sexagesimal parts. Every part carries the sign of the input.
///
/// The fraction is rounded once, at the seconds granularity;
/// minutes and units are then derived from the rounded total
/// with exact integer arithmetic, so a fraction that rounds up
/// to the whole 3600″ carries into the units instead of
/// producing an out-of-range 60′.
///
/// # Errors
/// `InvalidAngle::NotFinite` for a NaN or infinite value.
pub fn sexagesimal_split<F: Float>(value: F) -> Result<(i64, i64, i64), InvalidAngle> {
    if !value.is_finite() {
        return Err(InvalidAngle::NotFinite);
    }

    let sign = if value < F::zero() { -1 } else { 1 };
    let abs_value = value.abs();

    // values beyond the integer range saturate
    let units = abs_value.floor().to_i64().unwrap_or(i64::MAX);

    let sec_in_deg = F::from(SECONDS_IN_DEGREE).expect("3600 is a valid float");
    let total_seconds = (abs_value.fract() * sec_in_deg)
        .round()
        .to_i64()
        .expect("the fraction never exceeds 3600 seconds");

    let (minutes, seconds) = div_mod(total_seconds, i64::from(SECONDS_IN_MINUTE));
    let (units, minutes) = if minutes == i64::from(MINUTES_IN_DEGREE) {
        // the fraction rounded up to a whole degree
        (units + 1, 0)
    } else {
        (units, minutes)
    };

    Ok((units * sign, minutes * sign, seconds * sign))
}

/// Combine sexagesimal parts (coarsest first) into a decimal value.
///
/// The inverse of [`sexagesimal_split`] up to half of the rounding
/// unit at the finest provided part.
pub fn sexagesimal_combine(parts: &[i64]) -> f64 {
    parts
        .iter()
        .rev()
        .fold(0.0, |value, &part| value / 60.0 + part as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(sexagesimal_split(0.0).unwrap(), (0, 0, 0));
    }

    #[test]
    fn negative_zero_has_no_sign_to_spread() {
        assert_eq!(sexagesimal_split(-0.0).unwrap(), (0, 0, 0));
    }

    #[test]
    fn whole_degree() {
        assert_eq!(sexagesimal_split(1.0).unwrap(), (1, 0, 0));
    }

    #[test]
    fn fraction_down_to_seconds() {
        // 0.5075° = 1827″ = 30′ 27″
        assert_eq!(sexagesimal_split(45.5075).unwrap(), (45, 30, 27));
    }

    #[test]
    fn negative_parts_share_the_sign() {
        // 0.25° = 900″ = 15′ 0″
        assert_eq!(sexagesimal_split(-10.25).unwrap(), (-10, -15, 0));
    }

    #[test]
    fn carry_into_units() {
        // 0.999_999_861° is 3599.9995″, rounding to the whole 3600″
        assert_eq!(sexagesimal_split(0.999_999_861_1).unwrap(), (1, 0, 0));
        assert_eq!(sexagesimal_split(-0.999_999_861_1).unwrap(), (-1, 0, 0));
    }

    #[test]
    fn just_below_the_carry() {
        // 3599.46″ stays at 59′ 59″
        assert_eq!(sexagesimal_split(0.999_85).unwrap(), (0, 59, 59));
    }

    #[test]
    fn sign_symmetry() {
        for x in [0.5, 12.5075, 33.412, 75.999, 179.983_333] {
            let (units, minutes, seconds) = sexagesimal_split(x).unwrap();
            assert_eq!(sexagesimal_split(-x).unwrap(), (-units, -minutes, -seconds));
        }
    }

    #[test]
    fn minutes_and_seconds_stay_in_range() {
        for i in 0..=10_000 {
            let x = f64::from(i) * 0.036_07 - 180.0;
            let (_, minutes, seconds) = sexagesimal_split(x).unwrap();
            assert!(minutes.abs() <= 59, "bad minutes for {}: {}", x, minutes);
            assert!(seconds.abs() <= 59, "bad seconds for {}: {}", x, seconds);
        }
    }

    #[test]
    fn parts_recombine_within_half_second() {
        for i in 0..=10_000 {
            let x = f64::from(i) * 0.036_07 - 180.0;
            let (units, minutes, seconds) = sexagesimal_split(x).unwrap();
            let restored = sexagesimal_combine(&[units.abs(), minutes.abs(), seconds.abs()]);
            // half of the rounding unit, widened by the float noise
            // at this magnitude (an exact half-boundary fraction may
            // land a few ULPs on either side of it)
            let max_error = 1.0 / 7200.0 + x.abs() * 3600.0 * f64::EPSILON;
            assert!(
                (restored - x.abs()).abs() <= max_error,
                "{} restored as {}",
                x,
                restored
            );
        }
    }

    #[test]
    fn recombination_near_a_half_second_boundary() {
        // 0.47375° is exactly 1705.5″ before float noise pushes it
        // to 1705.4999999999984″, which rounds down to 1705″
        let (units, minutes, seconds) = sexagesimal_split(-166.473_75).unwrap();
        assert_eq!((units, minutes, seconds), (-166, -28, -25));

        let restored = sexagesimal_combine(&[units.abs(), minutes.abs(), seconds.abs()]);
        let max_error = 1.0 / 7200.0 + 166.473_75 * 3600.0 * f64::EPSILON;
        assert!((restored - 166.473_75).abs() <= max_error);
    }

    #[test]
    fn combine_signed_parts() {
        assert!((sexagesimal_combine(&[-10, -15, 0]) - (-10.25)).abs() < f64::EPSILON);
        assert!((sexagesimal_combine(&[45, 30, 27]) - 45.5075).abs() < 1e-12);
        assert!(sexagesimal_combine(&[]) == 0.0);
    }

    #[test]
    fn single_precision_value() {
        assert_eq!(sexagesimal_split(2.5_f32).unwrap(), (2, 30, 0));
    }

    #[test]
    fn not_finite() {
        assert_eq!(sexagesimal_split(f64::NAN), Err(InvalidAngle::NotFinite));
        assert_eq!(
            sexagesimal_split(f64::INFINITY),
            Err(InvalidAngle::NotFinite)
        );
        assert_eq!(
            sexagesimal_split(f64::NEG_INFINITY),
            Err(InvalidAngle::NotFinite)
        );
    }
}
