//! Random decimal generators.

use rand::Rng;
use rust_decimal::Decimal;

/// Produces a positive random decimal with at most `integer_digits` digits
/// before the point and exactly `fraction_digits` digits of scale.
///
/// The value is uniform over `[0, 10^integer_digits)` at the requested scale.
/// The combined digit count must stay within an `i64` mantissa (18 digits).
///
/// # Examples
///
/// ```
/// use hr_fixtures::generate::random_decimal;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rust_decimal::Decimal;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let amount = random_decimal(&mut rng, 4, 2);
/// assert!(amount >= Decimal::ZERO);
/// assert!(amount < Decimal::from(10_000));
/// assert_eq!(amount.scale(), 2);
/// ```
pub fn random_decimal<R: Rng>(rng: &mut R, integer_digits: u32, fraction_digits: u32) -> Decimal {
    debug_assert!(integer_digits + fraction_digits <= 18);
    let limit = 10_i64.pow(integer_digits + fraction_digits);
    Decimal::new(rng.gen_range(0..limit), fraction_digits)
}

/// Produces a random "half-unit" quantity: a whole number in
/// `[min_whole, max_whole]` plus an optional `0.5` increment.
///
/// Used for hour-like quantities that only occur in half-hour resolution.
///
/// # Examples
///
/// ```
/// use hr_fixtures::generate::random_half_unit;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rust_decimal::Decimal;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let hours = random_half_unit(&mut rng, 1, 12);
/// assert!(hours >= Decimal::ONE);
/// assert!(hours <= Decimal::new(125, 1));
/// ```
pub fn random_half_unit<R: Rng>(rng: &mut R, min_whole: u32, max_whole: u32) -> Decimal {
    let whole = i64::from(rng.gen_range(min_whole..=max_whole));
    let half = if rng.gen_bool(0.5) { 5 } else { 0 };
    Decimal::new(whole * 10 + half, 1)
}
