//! Piecewise-linear interpolation over monotonic input ranges.

/// What to do with values outside the input domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolation {
    /// Continue the slope of the nearest segment.
    Extend,
    /// Pin to the nearest output endpoint.
    Clamp,
}

/// Maps `value` from `input` to `output` using the segment it falls in.
///
/// `input` must be strictly increasing and the same length as `output`
/// (at least two points). Degenerate segments yield the segment start.
pub fn interpolate(value: f64, input: &[f64], output: &[f64], mode: Extrapolation) -> f64 {
    debug_assert!(input.len() >= 2 && input.len() == output.len());

    let last = input.len() - 1;
    let segment = input
        .windows(2)
        .position(|pair| value <= pair[1])
        .unwrap_or(last - 1);

    let (in_lo, in_hi) = (input[segment], input[segment + 1]);
    let (out_lo, out_hi) = (output[segment], output[segment + 1]);

    if mode == Extrapolation::Clamp {
        if value <= input[0] {
            return output[0];
        }
        if value >= input[last] {
            return output[last];
        }
    }

    // Knots map exactly, free of rounding.
    if value == in_lo {
        return out_lo;
    }
    if value == in_hi {
        return out_hi;
    }

    let span = in_hi - in_lo;
    if span.abs() < f64::EPSILON {
        return out_lo;
    }
    out_lo + (value - in_lo) / span * (out_hi - out_lo)
}
