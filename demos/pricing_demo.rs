// demos/pricing_demo.rs

//! Demonstration of scalar put valuation with quantfn-lib
//!
//! This example shows how to:
//! 1. Build a ladder of put scenarios across strikes
//! 2. Value the whole batch in one call
//! 3. Recognise the NaN sentinel for out-of-domain inputs
//! 4. Use the checked variant when an explicit error path is preferred

use anyhow::Result;
use quantfn_lib::{bsm_put, bsm_put_checked, norm_cdf, price_puts, PutScenario};

fn main() -> Result<()> {
    println!("Black-Scholes-Merton Put Valuation Demo");
    println!("=======================================");

    let scenarios = build_strike_ladder();
    println!("Scenarios built: {} puts", scenarios.len());
    println!("Underlying price: ${:.0}", scenarios[0].s);
    println!(
        "Expiration: {:.2} years, vol {:.0}%, rate {:.0}%",
        scenarios[0].t,
        scenarios[0].sigma * 100.0,
        scenarios[0].r * 100.0
    );

    println!("\nStep 1: Valuing the strike ladder...");
    let valued = price_puts(scenarios);

    println!("\nValuation Results:");
    println!("{:<10} {:<12} {:<12}", "Strike", "Put Value", "Intrinsic");
    println!("{}", "-".repeat(36));
    for v in &valued {
        let intrinsic = (v.scenario.k - v.scenario.s).max(0.0);
        println!(
            "{:<10.0} {:<12.4} {:<12.2}",
            v.scenario.k, v.price, intrinsic
        );
    }

    println!("\nStep 2: Probing the domain guard...");

    // Zero volatility is out of domain: the sentinel comes back, no error.
    let sentinel = bsm_put(0.05, 100.0, 0.0, 100.0, 1.0);
    println!("  bsm_put with sigma=0 returned NaN: {}", sentinel.is_nan());

    // The checked variant reports the same condition as an error instead.
    match bsm_put_checked(0.05, 100.0, 0.0, 100.0, 1.0) {
        Ok(p) => println!("  unexpected price: {:.4}", p),
        Err(e) => println!("  bsm_put_checked error: {}", e),
    }

    println!("\nStep 3: The underlying CDF primitive...");
    for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
        println!("  norm_cdf({:+.1}) = {:.6}", x, norm_cdf(x));
    }

    Ok(())
}

/// Build a ladder of one-year 20%-vol put scenarios across strikes
fn build_strike_ladder() -> Vec<PutScenario> {
    let strikes = [70.0, 80.0, 90.0, 95.0, 100.0, 105.0, 110.0, 120.0, 130.0];

    strikes
        .into_iter()
        .map(|k| PutScenario {
            r: 0.05,
            s: 100.0,
            sigma: 0.2,
            k,
            t: 1.0,
        })
        .collect()
}
