// Example: plot_put_curve.rs
// Values a European put across a strike range at several volatilities and
// produces an SVG comparing the curves against the intrinsic-value floor.
//
// Usage:
//     cargo run --example plot_put_curve
//
// The output image will be written to put_curve.svg in the working directory.

use std::error::Error;

use plotters::prelude::*;
use quantfn_lib::bsm_put;

const SPOT: f64 = 100.0;
const RATE: f64 = 0.05;
const EXPIRY: f64 = 1.0;

fn main() -> Result<(), Box<dyn Error>> {
    let strike_min = 50.0;
    let strike_max = 150.0;
    let steps = 250;

    let vols = [(0.1, RED), (0.2, BLUE), (0.4, GREEN)];

    // Sample each volatility curve across the strike range
    let mut curves: Vec<(f64, Vec<(f64, f64)>)> = Vec::new();
    for (sigma, _) in vols {
        let mut line = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let k = strike_min + (strike_max - strike_min) * (i as f64) / (steps as f64);
            line.push((k, bsm_put(RATE, SPOT, sigma, k, EXPIRY)));
        }
        curves.push((sigma, line));
    }

    // Intrinsic floor for reference
    let intrinsic: Vec<(f64, f64)> = (0..=steps)
        .map(|i| {
            let k = strike_min + (strike_max - strike_min) * (i as f64) / (steps as f64);
            (k, (k - SPOT).max(0.0))
        })
        .collect();

    let max_value = curves
        .iter()
        .flat_map(|(_, line)| line.iter().map(|&(_, v)| v))
        .fold(f64::NEG_INFINITY, f64::max);

    let root = SVGBackend::new("put_curve.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "BSM Put Value vs Strike | S={:.0}, r={:.0}%, t={:.1}y",
                SPOT,
                RATE * 100.0,
                EXPIRY
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(strike_min..strike_max, 0.0..max_value * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Strike ($)")
        .y_desc("Put Value ($)")
        .draw()?;

    for ((sigma, line), (_, color)) in curves.into_iter().zip(vols) {
        println!("Plotted sigma={:.0}% curve", sigma * 100.0);
        chart.draw_series(vec![PathElement::new(line, color)])?;
    }

    chart.draw_series(vec![PathElement::new(intrinsic, BLACK.stroke_width(1))])?;

    println!("Chart saved to put_curve.svg");
    Ok(())
}
