/// Renders a float in fixed notation with the fewest digits that round-trip.
///
/// Integral values keep a `.0` suffix so they never read as integers, and
/// scientific notation is never used. Infinities and NaN render as `inf`,
/// `-inf` and `NaN`.
///
/// ## Example
/// ```
/// use linecalc::util::num::fixed_notation;
///
/// assert_eq!(fixed_notation(1.5), "1.5");
/// assert_eq!(fixed_notation(2.0), "2.0");
/// assert_eq!(fixed_notation(1e21), "1000000000000000000000.0");
/// assert_eq!(fixed_notation(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn fixed_notation(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}
