use thiserror::Error;

use super::easing::Easing;

/// Reasons a set of breakpoints cannot form a curve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("curve has no breakpoints")]
    Empty,

    #[error("curve needs at least 2 breakpoints, got {0}")]
    TooFewBreakpoints(usize),

    #[error("curve has {input} input breakpoints but {output} output breakpoints")]
    LengthMismatch { input: usize, output: usize },

    #[error("curve breakpoint {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("curve input breakpoints must be non-decreasing (breakpoint {index} goes backwards)")]
    NotMonotonic { index: usize },
}

/// Piecewise-linear mapping from an input domain to an output range
///
/// Inputs outside the domain clamp to the first/last output breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationCurve {
    input: Vec<f64>,
    output: Vec<f64>,
    easing: Easing,
}

impl InterpolationCurve {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Result<Self, CurveError> {
        if input.is_empty() && output.is_empty() {
            return Err(CurveError::Empty);
        }
        if input.len() != output.len() {
            return Err(CurveError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(CurveError::TooFewBreakpoints(input.len()));
        }
        if let Some(index) = input
            .iter()
            .zip(&output)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(CurveError::NonFinite { index });
        }
        if let Some(index) = input.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(CurveError::NotMonotonic { index: index + 1 });
        }

        Ok(Self {
            input,
            output,
            easing: Easing::Linear,
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn input_range(&self) -> &[f64] {
        &self.input
    }

    pub fn output_range(&self) -> &[f64] {
        &self.output
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Smallest and largest output breakpoint
    pub fn output_bounds(&self) -> (f64, f64) {
        self.output
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
                (lo.min(y), hi.max(y))
            })
    }

    pub fn evaluate(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.output[0];
        }

        let segment = self.find_segment(value);
        let (x0, x1) = (self.input[segment], self.input[segment + 1]);
        let (y0, y1) = (self.output[segment], self.output[segment + 1]);

        let x = value.clamp(x0, x1);

        if y0 == y1 {
            return y0;
        }
        // Zero-width step: left output up to the breakpoint, right output past it
        if x0 == x1 {
            return if value <= x0 { y0 } else { y1 };
        }

        let t = self.easing.apply((x - x0) / (x1 - x0));
        let y = y0 + (y1 - y0) * t;

        // Rounding in the lerp can land one ulp outside the segment
        y.clamp(y0.min(y1), y0.max(y1))
    }

    /// Index of the segment whose right breakpoint is the first interior
    /// breakpoint at or past `value`, or the last segment.
    fn find_segment(&self, value: f64) -> usize {
        let last = self.input.len() - 1;
        let mut index = 1;
        while index < last && self.input[index] < value {
            index += 1;
        }
        index - 1
    }
}

/// Evaluate `curve` at `input`
pub fn interpolate(curve: &InterpolationCurve, input: f64) -> f64 {
    curve.evaluate(input)
}

#[cfg(test)]
#[path = "curve_tests.rs"]
mod curve_tests;
