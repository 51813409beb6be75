/// Floor division of two floats, rounding the quotient toward negative infinity.
///
/// The quotient is derived from `a % b` rather than `(a / b).floor()` so that
/// results stay exact when `a / b` rounds up across an integer boundary.
/// A zero divisor yields NaN.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div != 0.0 {
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(a / b)
    }
}
