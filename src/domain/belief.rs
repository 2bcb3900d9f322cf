//! Beta-distribution belief modeling.
//!
//! A trader's point belief (probability plus confidence) maps onto a Beta
//! distribution: the belief sets the location, the confidence acts as a
//! pseudo-count concentrating mass around it. The `+1` on each shape
//! parameter keeps the density proper and finite across all of `[0, 1]`,
//! including the extremes.

use statrs::function::gamma::ln_gamma;

/// Probability clamp range for belief inputs.
const BELIEF_RANGE: (f64, f64) = (0.0, 1.0);

/// Pseudo-count clamp range for confidence inputs.
const STRENGTH_RANGE: (f64, f64) = (1.0, 100.0);

/// A subjective belief about a binary outcome, expressed as a Beta shape.
///
/// Out-of-range inputs are clamped on entry rather than rejected: belief
/// to `[0, 1]`, confidence to `[1, 100]`. Stateless; built fresh per
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaBelief {
    belief_probability: f64,
    confidence_strength: f64,
}

impl BetaBelief {
    /// Create a belief, clamping inputs into their supported ranges.
    #[must_use]
    pub fn new(belief_probability: f64, confidence_strength: f64) -> Self {
        Self {
            belief_probability: belief_probability.clamp(BELIEF_RANGE.0, BELIEF_RANGE.1),
            confidence_strength: confidence_strength.clamp(STRENGTH_RANGE.0, STRENGTH_RANGE.1),
        }
    }

    /// The clamped belief probability.
    #[must_use]
    pub const fn belief_probability(&self) -> f64 {
        self.belief_probability
    }

    /// The clamped confidence pseudo-count.
    #[must_use]
    pub const fn confidence_strength(&self) -> f64 {
        self.confidence_strength
    }

    /// Beta shape parameters `(alpha, beta)` for this belief.
    ///
    /// `alpha = p * s + 1`, `beta = (1 - p) * s + 1`; both are therefore
    /// at least 1, so the density is finite everywhere on `[0, 1]`.
    #[must_use]
    pub fn shape(&self) -> (f64, f64) {
        let alpha = self.belief_probability * self.confidence_strength + 1.0;
        let beta = (1.0 - self.belief_probability) * self.confidence_strength + 1.0;
        (alpha, beta)
    }

    /// Sample the belief density at `points` evenly spaced probabilities
    /// over `[0, 1]`, endpoints included.
    #[must_use]
    pub fn density_curve(&self, points: usize) -> DensityCurve {
        let (alpha, beta) = self.shape();
        let steps = points.max(2);
        let denom = (steps - 1) as f64;

        let mut xs = Vec::with_capacity(steps);
        let mut ys = Vec::with_capacity(steps);
        for i in 0..steps {
            let x = i as f64 / denom;
            xs.push(x);
            ys.push(beta_pdf(x, alpha, beta));
        }
        DensityCurve { xs, ys }
    }
}

/// A sampled probability density curve for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// Probabilities over `[0, 1]`, ascending, endpoints included.
    pub xs: Vec<f64>,
    /// Density values aligned with `xs`.
    pub ys: Vec<f64>,
}

impl DensityCurve {
    /// Largest density value on the curve, 0 for an empty curve.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.ys.iter().copied().fold(0.0, f64::max)
    }
}

/// Beta probability density, evaluated in the log domain.
///
/// `f(x) = x^(a-1) (1-x)^(b-1) / B(a, b)` with the normalization constant
/// computed via `ln_gamma` so large shape parameters cannot overflow. The
/// `a == 1` / `b == 1` branches pin the exponent terms to zero, keeping
/// the boundaries well-defined (`0 * ln 0` would otherwise produce NaN).
fn beta_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    let ln_norm = ln_gamma(alpha + beta) - ln_gamma(alpha) - ln_gamma(beta);
    let ln_px = if alpha == 1.0 {
        0.0
    } else {
        (alpha - 1.0) * x.ln()
    };
    let ln_qx = if beta == 1.0 {
        0.0
    } else {
        (beta - 1.0) * (1.0 - x).ln()
    };
    (ln_norm + ln_px + ln_qx).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn neutral_belief_with_unit_strength_gives_one_point_five_shapes() {
        let belief = BetaBelief::new(0.5, 1.0);

        let (alpha, beta) = belief.shape();

        assert!((alpha - 1.5).abs() < TOLERANCE);
        assert!((beta - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn out_of_range_inputs_are_clamped_not_rejected() {
        let belief = BetaBelief::new(1.7, 250.0);
        assert!((belief.belief_probability() - 1.0).abs() < TOLERANCE);
        assert!((belief.confidence_strength() - 100.0).abs() < TOLERANCE);

        let belief = BetaBelief::new(-0.3, 0.0);
        assert!(belief.belief_probability().abs() < TOLERANCE);
        assert!((belief.confidence_strength() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn neutral_density_is_symmetric_about_one_half() {
        let curve = BetaBelief::new(0.5, 1.0).density_curve(201);

        let n = curve.ys.len();
        for i in 0..n / 2 {
            let lhs = curve.ys[i];
            let rhs = curve.ys[n - 1 - i];
            assert!(
                (lhs - rhs).abs() < 1e-9,
                "density asymmetric at index {i}: {lhs} vs {rhs}"
            );
        }
    }

    #[test]
    fn density_integrates_to_roughly_one() {
        let points = 200;
        let curve = BetaBelief::new(0.5, 1.0).density_curve(points);

        let mass: f64 = curve.ys.iter().sum::<f64>() / points as f64;

        assert!(
            (mass - 1.0).abs() < 0.02,
            "riemann mass {mass} not within tolerance of 1"
        );
    }

    #[test]
    fn density_is_finite_at_the_boundaries_for_extreme_beliefs() {
        for (p, s) in [(0.0, 1.0), (1.0, 1.0), (0.0, 100.0), (1.0, 100.0), (0.5, 100.0)] {
            let curve = BetaBelief::new(p, s).density_curve(200);
            let first = curve.ys[0];
            let last = curve.ys[curve.ys.len() - 1];

            assert!(first.is_finite(), "p={p} s={s}: left boundary not finite");
            assert!(last.is_finite(), "p={p} s={s}: right boundary not finite");
            assert!(curve.ys.iter().all(|y| y.is_finite() && *y >= 0.0));
        }
    }

    #[test]
    fn strong_confidence_concentrates_the_density() {
        let weak = BetaBelief::new(0.7, 5.0).density_curve(200);
        let strong = BetaBelief::new(0.7, 95.0).density_curve(200);

        assert!(strong.peak() > weak.peak());
    }

    #[test]
    fn peak_sits_near_the_believed_probability() {
        let curve = BetaBelief::new(0.7, 80.0).density_curve(401);

        let (argmax, _) = curve
            .ys
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, y)| {
                if *y > acc.1 {
                    (i, *y)
                } else {
                    acc
                }
            });

        // Mode of Beta(a, b) is (a-1)/(a+b-2) = 0.7 exactly for this shape.
        let mode = curve.xs[argmax];
        assert!((mode - 0.7).abs() < 0.01, "mode {mode} too far from belief");
    }

    #[test]
    fn short_curves_still_cover_both_endpoints() {
        let curve = BetaBelief::new(0.5, 10.0).density_curve(1);

        assert_eq!(curve.xs.len(), 2);
        assert!((curve.xs[0]).abs() < TOLERANCE);
        assert!((curve.xs[1] - 1.0).abs() < TOLERANCE);
    }
}
