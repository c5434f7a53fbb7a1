// Standard-normal distribution primitives. Kept as free functions so the
// pricing code can call them without constructing a distribution object.

/// Standard normal cumulative distribution function Φ(x).
///
/// Computed through the error-function identity Φ(x) = ½·(1 + erf(x/√2)).
/// Total over the reals: `erf` saturates to ±1 for large-magnitude arguments,
/// so the CDF saturates to exactly 0 or 1 (including at ±∞). The result
/// always lies in the closed interval [0, 1].
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}
