//! Integrates an undamped harmonic oscillator over one period and prints
//! the trajectory as CSV.

use kutta_solvers::rk4::{self, Config, Event};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let omega = 2.0;
    let period = 2.0 * std::f64::consts::PI / omega;

    let oscillator = move |_t: f64, y: &[f64]| vec![y[1], -omega * omega * y[0]];
    let config = Config::new(period / 40.0)?;

    println!("step,t,position,velocity");
    let solution = rk4::solve_to(oscillator, 0.0, [1.0, 0.0], config, period, |event: &Event| {
        let point = &event.point;
        println!("{},{:.4},{:.6},{:.6}", event.step, point.x, point.y[0], point.y[1]);
        None
    })?;

    if let Some(last) = solution.last() {
        eprintln!(
            "after {} steps: position error {:.2e}",
            solution.steps,
            (last.y[0] - 1.0).abs()
        );
    }

    Ok(())
}
