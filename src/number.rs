//! Numeric helpers: random values, formatting, rounding and ranges.

use std::fmt::Display;

use rand::Rng;

/// Separator inserted by [`format_number`] in the common case.
pub const DEFAULT_THOUSANDS_SEPARATOR: &str = ",";

/// Decimal places kept by [`percentage`] in the common case.
pub const DEFAULT_PERCENTAGE_DIGITS: u32 = 2;

/// Uniform random integer in `min..=max`.
///
/// Reversed bounds are swapped.
pub fn random_int(min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}

/// Uniform random float in `min..max`.
///
/// Returns `min` when the range is empty or not finite.
pub fn random_float(min: f64, max: f64) -> f64 {
    if !(min < max) || !(max - min).is_finite() {
        return min;
    }
    rand::thread_rng().gen_range(min..max)
}

/// Inserts `separator` every three digits of the integer portion.
///
/// The number is rendered with its `Display` implementation first; a sign
/// and any fractional part are kept as is.
///
/// ```rust
/// use pure_utils::number::format_number;
///
/// assert_eq!(format_number(1234567, ","), "1,234,567");
/// assert_eq!(format_number(-1234.5678, " "), "-1 234.5678");
/// ```
pub fn format_number<N: Display>(n: N, separator: &str) -> String {
    let rendered = n.to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3 * separator.len());
    grouped.push_str(sign);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

/// Fractional digits needed to write any `f64` exactly.
const MAX_EXACT_DECIMALS: u32 = 1074;

/// Rounds `n` to `digits` decimal places.
///
/// Rounding works on the exact binary value of `n`, so `1.45` (stored as
/// `1.4499999999999999...`) becomes `1.4`. Exact ties such as `2.5` or
/// `0.125` round half away from zero.
pub fn to_fixed(n: f64, digits: u32) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let places = digits.min(MAX_EXACT_DECIMALS);
    let nearest = format!("{:.*}", places as usize, n);
    let rounded: f64 = nearest.parse().unwrap_or(n);
    if !is_exact_tie(n, places) || rounded.abs() > n.abs() {
        return rounded;
    }

    // `{:.N}` breaks exact ties to even; step one unit away from zero instead.
    let unit = format!("1e-{places}").parse::<f64>().unwrap_or(0.0);
    format!("{:.*}", places as usize, rounded + unit.copysign(n))
        .parse()
        .unwrap_or(rounded)
}

/// `true` if `n` is exactly halfway between two multiples of `10^-places`.
fn is_exact_tie(n: f64, places: u32) -> bool {
    let wider = format!("{:.*}", places as usize + 1, n);
    wider.ends_with('5') && has_exact_decimals(n, places + 1)
}

/// `true` if the decimal expansion of `n` ends within `places` digits.
fn has_exact_decimals(n: f64, places: u32) -> bool {
    let bits = n.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 || exponent >= 0 {
        return true;
    }
    // n = mantissa / 2^-exponent, and 10^places cancels `places` of those twos.
    let remaining = -exponent - places as i32;
    remaining <= 0 || mantissa.trailing_zeros() as i32 >= remaining
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Restricts `n` to `min..=max`.
///
/// Unlike [`Ord::clamp`] this never panics: with `min > max` the result
/// is `max`.
pub fn clamp<T: PartialOrd>(n: T, min: T, max: T) -> T {
    let lower_bounded = if n < min { min } else { n };
    if lower_bounded > max { max } else { lower_bounded }
}

/// `value / total * 100`, rounded to `digits` places.
///
/// A zero `total` yields `0.0`.
pub fn percentage(value: f64, total: f64, digits: u32) -> f64 {
    if total == 0.0 {
        #[cfg(feature = "tracing")]
        tracing::debug!("percentage of {} with a zero total", value);
        return 0.0;
    }
    to_fixed(value / total * 100.0, digits)
}
