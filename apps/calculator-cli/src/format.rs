//! Number rendering for menu output.
//!
//! Whole values keep one decimal (`2.0`), magnitudes outside `[1e-4, 1e16)`
//! switch to scientific notation with a signed two-digit exponent (`1e+16`),
//! everything else uses the shortest round-trip form.

/// Render a float operand or result.
#[must_use]
pub fn number(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return scientific(x);
    }
    if x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

/// Render a whole value without a fractional part (factorial argument).
#[must_use]
pub fn integer(x: f64) -> String {
    // adding 0.0 turns -0.0 into 0.0
    format!("{:.0}", x.trunc() + 0.0)
}

fn scientific(x: f64) -> String {
    let raw = format!("{x:e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
