//! Log-log convergence plots.
//!
//! Renders the error series of the three rules as a log-log chart (relative
//! error vs. resolution) and writes it to a PNG file, one per test case.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::convergence::ConvergenceErrors;

// Zero cannot be placed on a log axis; anything this small is drawn at the
// bottom edge instead.
const AXIS_FLOOR: f64 = 1e-18;

/// Render a log-log convergence plot to a PNG file.
///
/// One curve per rule with point markers, a legend and a grid mesh, in the
/// same layout as the text table: x is the resolution, y the relative error.
///
/// # Errors
///
/// Returns an error if the error series are empty or the chart cannot be
/// drawn or written.
pub fn plot_errors(
    errors: &ConvergenceErrors,
    title: &str,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    if errors.resolutions.is_empty() {
        return Err("plot_errors: empty error series".into());
    }

    let x_min = errors.resolutions[0] as f64;
    let x_max = errors.resolutions[errors.resolutions.len() - 1] as f64;

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for series in [&errors.trapezoid, &errors.simpson, &errors.gauss_legendre] {
        for &err in series.iter() {
            y_min = y_min.min(err.max(AXIS_FLOOR));
            y_max = y_max.max(err.max(AXIS_FLOOR));
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return Err("plot_errors: error series empty or non-finite".into());
    }

    let root = BitMapBackend::new(path.as_ref(), (700, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min..x_max).log_scale(),
            (y_min / 2.0..y_max * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("N")
        .y_desc("Relative Error")
        .draw()?;

    let series = [
        (&errors.trapezoid, "Trapezoid", BLUE),
        (&errors.simpson, "Simpson", RED),
        (&errors.gauss_legendre, "Gauss-Legendre", GREEN),
    ];

    for (values, label, color) in series {
        let points: Vec<(f64, f64)> = errors
            .resolutions
            .iter()
            .zip(values.iter())
            .map(|(&n, &err)| (n as f64, err.max(AXIS_FLOOR)))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), &color))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &color));

        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
