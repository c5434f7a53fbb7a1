//! # Quantfn-Lib: Scalar Quantitative-Finance Primitives
//!
//! `quantfn-lib` is a small Rust library of pure scalar functions for
//! quantitative finance: a standard-normal CDF, a closed-form
//! Black-Scholes-Merton European put valuer, and gamma-function helpers.
//!
//! ## Core Features
//!
//! - **Normal CDF**: Φ(x) through the error-function identity, total over the reals
//! - **Put Valuation**: closed-form Black-Scholes-Merton with a NaN-sentinel
//!   domain contract, plus a checked `Result` variant
//! - **Gamma Helpers**: Γ(x) and ln Γ(x) via statrs special functions
//! - **Pure by Construction**: no state, no I/O, thread-safe, deterministic
//!
//! ## Quick Start
//!
//! ```rust
//! use quantfn_lib::{bsm_put, norm_cdf, price_puts, PutScenario};
//!
//! // Half the standard normal distribution lies below the mean.
//! assert_eq!(norm_cdf(0.0), 0.5);
//!
//! // At-the-money one-year put, 20% vol, 5% rate.
//! let put = bsm_put(0.05, 100.0, 0.2, 100.0, 1.0);
//! assert!((put - 5.5735).abs() < 1e-3);
//!
//! // Out-of-domain inputs signal through the NaN sentinel, never an error.
//! assert!(bsm_put(0.05, 100.0, -0.2, 100.0, 1.0).is_nan());
//!
//! // Batch valuation, results sorted by strike.
//! let ladder = vec![
//!     PutScenario { k: 110.0, ..PutScenario::default() },
//!     PutScenario { k: 90.0, ..PutScenario::default() },
//! ];
//! let valued = price_puts(ladder);
//! assert!(valued[0].scenario.k < valued[1].scenario.k);
//! ```
//!
//! ## Domain Contract
//!
//! [`bsm_put`] returns the IEEE-754 NaN sentinel whenever `sigma <= 0`,
//! `t <= 0`, `S <= 0`, or `K <= 0` — callers must test the result with
//! [`f64::is_nan`]. [`bsm_put_checked`] offers the same computation with an
//! explicit error path for callers that prefer `Result` signaling.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod math;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Scalar math primitives
pub use math::gamma::{gamma, ln_gamma};
pub use math::normal::norm_cdf;

// Put valuation API
pub use models::bsm::{bsm_put, bsm_put_checked, PutScenario, PutValuation};

// ================================================================================================
// BATCH API
// ================================================================================================

/// Value a batch of European put scenarios.
///
/// Each scenario is priced independently through [`bsm_put`], so out-of-domain
/// entries carry the NaN sentinel in their [`PutValuation::price`] without
/// affecting the rest of the batch. Results are sorted by strike price in
/// ascending order for consistent downstream consumption.
pub fn price_puts(scenarios: Vec<PutScenario>) -> Vec<PutValuation> {
    models::bsm::price_scenarios(scenarios)
}
