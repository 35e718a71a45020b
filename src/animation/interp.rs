use crate::foundation::error::{PromoError, PromoResult};

/// Behavior outside the breakpoint range, chosen per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Hold the boundary output value.
    Clamp,
    /// Continue the slope of the nearest segment.
    Extend,
}

/// Per-side extrapolation policy for [`interpolate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpolateOpts {
    /// Policy below the first breakpoint.
    pub left: Extrapolate,
    /// Policy above the last breakpoint.
    pub right: Extrapolate,
}

impl Default for InterpolateOpts {
    fn default() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
        }
    }
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub fn clamp() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }
}

/// Piecewise-linear interpolation of `input` over parallel breakpoint arrays.
///
/// `input_range` must be strictly increasing and the two arrays must have the
/// same length of at least 2; violations fail with
/// [`PromoError::Configuration`]. Breakpoint inputs reproduce their output
/// values exactly. No side effects.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> PromoResult<f64> {
    validate_ranges(input_range, output_range)?;
    if !input.is_finite() {
        return Err(PromoError::configuration(
            "interpolate input must be finite",
        ));
    }

    let n = input_range.len();
    let idx = input_range.partition_point(|&x| x <= input);

    if idx == 0 {
        return Ok(match opts.left {
            Extrapolate::Clamp => output_range[0],
            Extrapolate::Extend => segment_value(input, input_range, output_range, 0),
        });
    }
    if idx >= n {
        // `input` equal to the last breakpoint lands here; segment math still
        // reproduces the endpoint exactly, and Clamp holds it.
        return Ok(match opts.right {
            Extrapolate::Clamp => output_range[n - 1],
            Extrapolate::Extend => segment_value(input, input_range, output_range, n - 2),
        });
    }

    Ok(segment_value(input, input_range, output_range, idx - 1))
}

/// [`interpolate`] with clamping on both sides.
pub fn interpolate_clamped(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
) -> PromoResult<f64> {
    interpolate(input, input_range, output_range, InterpolateOpts::clamp())
}

fn segment_value(input: f64, input_range: &[f64], output_range: &[f64], seg: usize) -> f64 {
    let x0 = input_range[seg];
    let x1 = input_range[seg + 1];
    let y0 = output_range[seg];
    let y1 = output_range[seg + 1];
    let t = (input - x0) / (x1 - x0);
    y0 + (y1 - y0) * t
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> PromoResult<()> {
    if input_range.len() < 2 {
        return Err(PromoError::configuration(
            "interpolate input_range must have at least 2 breakpoints",
        ));
    }
    if input_range.len() != output_range.len() {
        return Err(PromoError::configuration(
            "interpolate ranges must have equal length",
        ));
    }
    if input_range.iter().chain(output_range).any(|v| !v.is_finite()) {
        return Err(PromoError::configuration(
            "interpolate breakpoints must be finite",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(PromoError::configuration(
            "interpolate input_range must be strictly increasing",
        ));
    }
    Ok(())
}
