// Thin wrappers over the statrs special-function implementations so callers
// get gamma helpers from the same crate as the pricing functions.

use statrs::function::gamma as sf_gamma;

/// The Gamma function Γ(x) = ∫₀^∞ t^(x−1)·e^(−t) dt.
///
/// For a natural number n, Γ(n + 1) = n!. Non-positive integers are poles of
/// the function; the result there is non-finite, consistent with `tgamma`.
pub fn gamma(x: f64) -> f64 {
    sf_gamma::gamma(x)
}

/// Natural logarithm of the Gamma function, ln Γ(x).
///
/// Stays finite for arguments where Γ(x) itself would overflow a double.
pub fn ln_gamma(x: f64) -> f64 {
    sf_gamma::ln_gamma(x)
}
