use crate::branching::GenerationSeries;
use crate::collector::SweepPoint;
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

/// Render the coupon-collector sweep as a log-log chart: n on the x-axis,
/// average draw count on the y-axis, each point annotated with its k.
pub fn render_coupon_chart(points: &[SweepPoint], file: &Path) -> Result<()> {
    let first = points.first().context("no sweep points to plot")?;
    let last = points.last().context("no sweep points to plot")?;

    let x_range = (first.n as f64 / 1.5)..(last.n as f64 * 1.5);
    let y_range = (first.average / 1.5)..(last.average * 1.5);

    let root = BitMapBackend::new(file, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Coupon Collector: Average Coupons Needed vs Number of Coupon Types",
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Number of Coupon Types (n=2^k)")
        .y_desc("Average Coupons Needed")
        .draw()?;

    let line: Vec<(f64, f64)> = points.iter().map(|p| (p.n as f64, p.average)).collect();

    chart
        .draw_series(LineSeries::new(line.clone(), &BLUE))?
        .label("Simulated Average")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart.draw_series(
        line.iter()
            .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
    )?;

    chart.draw_series(points.iter().map(|p| {
        EmptyElement::at((p.n as f64, p.average))
            + Text::new(format!("k={}", p.k), (-12, -22), ("sans-serif", 15))
    }))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write {file:?}"))?;
    Ok(())
}

/// Render the branching sweep as one line series per distribution: generation
/// on the x-axis, average population on the y-axis, both linear.
pub fn render_branching_chart(series: &[GenerationSeries], file: &Path) -> Result<()> {
    let y_max = series
        .iter()
        .flat_map(|s| s.averages.iter())
        .fold(1.0_f64, |max, &avg| max.max(avg));

    let last_gen = series
        .iter()
        .map(|s| s.averages.len())
        .max()
        .context("no series to plot")? as f64;

    let root = BitMapBackend::new(file, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Branching Process: Average Number of Nodes per Generation",
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.5..(last_gen + 0.5), 0.0..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Generation n")
        .y_desc("Average number of nodes E[X_n]")
        .draw()?;

    let colors: [&RGBColor; 3] = [&RED, &BLUE, &GREEN];
    for (idx, s) in series.iter().enumerate() {
        let color = colors[idx % colors.len()];
        let line: Vec<(f64, f64)> = s
            .averages
            .iter()
            .enumerate()
            .map(|(i, &avg)| ((i + 1) as f64, avg))
            .collect();

        chart
            .draw_series(LineSeries::new(line.clone(), color))?
            .label(s.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        chart.draw_series(
            line.iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write {file:?}"))?;
    Ok(())
}
