// Closed-form Black-Scholes-Merton valuation for European puts.  Calls,
// Greeks, and implied-volatility inversion are intentionally omitted to keep
// the lightweight focus of quantfn-lib.

use std::cmp::Ordering;

use anyhow::{anyhow, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::normal::norm_cdf;

/// Market and contract inputs for a single European put valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PutScenario {
    /// Risk-free interest rate (annualized, continuously compounded)
    pub r: f64,
    /// Current underlying asset price
    pub s: f64,
    /// Volatility of returns of the underlying asset (annualized)
    pub sigma: f64,
    /// Strike price
    pub k: f64,
    /// Time to expiration in years
    pub t: f64,
}

impl Default for PutScenario {
    fn default() -> Self {
        Self {
            r: 0.01,
            s: 100.0,
            sigma: 0.2,
            k: 100.0,
            t: 1.0,
        }
    }
}

impl PutScenario {
    /// Value this scenario through [`bsm_put`], inheriting its NaN-sentinel
    /// contract.
    pub fn price(&self) -> f64 {
        bsm_put(self.r, self.s, self.sigma, self.k, self.t)
    }
}

/// A priced scenario, as produced by [`crate::price_puts`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PutValuation {
    /// The inputs that were valued
    pub scenario: PutScenario,
    /// Theoretical put premium, or NaN when the scenario is out of domain
    pub price: f64,
}

/// Theoretical value of a European put option under Black-Scholes-Merton.
///
/// Returns the IEEE-754 NaN sentinel when any of `sigma`, `t`, `S`, `K` is
/// non-positive (the boundary is inclusive: zero is rejected).  Callers must
/// test the result with [`f64::is_nan`]; no error is raised for the invalid
/// domain.  For callers that prefer an explicit error path, use
/// [`bsm_put_checked`].
///
/// Valid-but-extreme inputs are not clamped: the computation follows IEEE-754
/// double-precision arithmetic, and ±∞ or NaN produced past the domain guard
/// propagates to the result.
#[allow(non_snake_case)]
pub fn bsm_put(r: f64, S: f64, sigma: f64, K: f64, t: f64) -> f64 {
    if sigma <= 0.0 || t <= 0.0 || S <= 0.0 || K <= 0.0 {
        return f64::NAN;
    }
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    K * (-r * t).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Checked variant of [`bsm_put`]: same formula and domain guard, but an
/// out-of-domain parameter set surfaces as an error instead of the NaN
/// sentinel.  In-domain results are bit-identical to [`bsm_put`].
#[allow(non_snake_case)]
pub fn bsm_put_checked(r: f64, S: f64, sigma: f64, K: f64, t: f64) -> Result<f64> {
    if sigma <= 0.0 || t <= 0.0 || S <= 0.0 || K <= 0.0 {
        return Err(anyhow!(
            "invalid put parameters: sigma={}, t={}, S={}, K={}",
            sigma,
            t,
            S,
            K
        ));
    }
    Ok(bsm_put(r, S, sigma, K, t))
}

/// Value a batch of scenarios, returning results sorted by strike ascending.
pub(crate) fn price_scenarios(scenarios: Vec<PutScenario>) -> Vec<PutValuation> {
    let mut results: Vec<PutValuation> = scenarios
        .into_iter()
        .map(|scenario| PutValuation {
            scenario,
            price: scenario.price(),
        })
        .collect();

    results.sort_by(|a, b| {
        a.scenario
            .k
            .partial_cmp(&b.scenario.k)
            .unwrap_or(Ordering::Equal)
    });
    results
}
