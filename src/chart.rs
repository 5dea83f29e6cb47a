// Two-panel figure rendering (CPU percent left, memory right) to an SVG
// string. The drawing areas are passed explicitly between the panel draws;
// there is no shared figure state.

use crate::config::ChartConfig;
use crate::error::AnalyzerError;
use crate::units::memory_units;
use plotters::prelude::*;

fn render_err<E: std::fmt::Display>(e: E) -> AnalyzerError {
    AnalyzerError::Render(e.to_string())
}

/// Render both panels onto one canvas and return the SVG document.
///
/// The x axis of each panel is the row index of the sample table. Both
/// series must be non-empty (the loader guarantees this); a single-row
/// table degenerates to an empty line but still renders.
pub fn render(cpu: &[f64], memory: &[u64], config: &ChartConfig) -> Result<String, AnalyzerError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let panels = root.split_evenly((1, 2));
        draw_cpu_panel(&panels[0], cpu)?;
        draw_memory_panel(&panels[1], memory)?;

        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

fn draw_cpu_panel(
    area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    cpu: &[f64],
) -> Result<(), AnalyzerError> {
    let x_max = cpu.len().saturating_sub(1).max(1);
    let y_min = cpu.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let y_max = cpu.iter().cloned().fold(f64::NEG_INFINITY, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption("CPU Percent Used", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Sample")
        .y_desc("in % percent")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            cpu.iter().enumerate().map(|(i, v)| (i, *v)),
            &BLUE,
        ))
        .map_err(render_err)?;

    Ok(())
}

fn draw_memory_panel(
    area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    memory: &[u64],
) -> Result<(), AnalyzerError> {
    let x_max = memory.len().saturating_sub(1).max(1);
    let values: Vec<f64> = memory.iter().map(|&v| v as f64).collect();
    let y_min = values.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let y_max = values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption("Memory Used", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(80)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Sample")
        .y_desc("in bytes")
        .y_label_formatter(&|v| memory_units(*v))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            values.iter().enumerate().map(|(i, v)| (i, *v)),
            &RED,
        ))
        .map_err(render_err)?;

    Ok(())
}
