//! Convergence study driver.
//!
//! Runs the error analysis for a smooth and an oscillatory integrand on
//! [0, 1], prints the error tables and writes the log-log plots
//! (`errors.png`, `bad_errors.png`) to the working directory.

use std::error::Error;
use std::io;

use quadr::convergence::{ConvergenceOptions, error_analysis, plot_errors, write_table};

fn main() -> Result<(), Box<dyn Error>> {
    let ns = [2, 10, 20, 40, 80, 160, 320, 640];
    let options = ConvergenceOptions::default();

    // Smooth case
    let exact = 1.0 - (-1.0f64).exp();
    let title = "Errors for ∫ e^{-t} dt on [0,1]";
    let errors = error_analysis(|t: f64| (-t).exp(), 0.0, 1.0, exact, &ns, &options)?;
    write_table(io::stdout().lock(), &errors, title)?;
    plot_errors(&errors, title, "errors.png")?;

    // Hard case: sin(200t) aliases badly at low resolution
    let exact = (1.0 - (200.0f64).cos()) / 200.0;
    let title = "Errors for ∫ sin(200t) dt on [0,1]";
    let errors = error_analysis(|t: f64| (200.0 * t).sin(), 0.0, 1.0, exact, &ns, &options)?;
    write_table(io::stdout().lock(), &errors, title)?;
    plot_errors(&errors, title, "bad_errors.png")?;

    println!("\nPlots saved as errors.png and bad_errors.png");
    Ok(())
}
