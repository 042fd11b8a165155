//! Text tabulation of convergence results.

use std::io::{self, Write};

use crate::convergence::ConvergenceErrors;

/// Write the error table for one test case.
///
/// Emits a heading followed by one line per resolution:
///
/// ```text
/// Errors for ∫ e^{-t} dt on [0,1]
/// N=   2  trap=2.075e-2  simp=3.372e-4  gauss=2.240e-4
/// N=  10  trap=8.333e-4  simp=5.556e-7  gauss=1.000e-16
/// ...
/// ```
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_table<W: Write>(
    mut w: W,
    errors: &ConvergenceErrors,
    title: &str,
) -> io::Result<()> {
    writeln!(w, "\nErrors for {title}")?;
    for (i, n) in errors.resolutions.iter().enumerate() {
        writeln!(
            w,
            "N={:4}  trap={:.3e}  simp={:.3e}  gauss={:.3e}",
            n, errors.trapezoid[i], errors.simpson[i], errors.gauss_legendre[i]
        )?;
    }
    Ok(())
}
