use crate::utils::axis_range;
use crate::{ReportError, ReportResult, CLOCK_LABEL, DPI, FIGURE_SIZE_INCHES};
use plotters::prelude::*;
use std::path::Path;

/// One line chart: a measurement against the clock.
#[derive(Debug, Clone)]
pub struct Chart {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub title: &'static str,
    pub y_label: &'static str,
    pub file_name: &'static str,
}

/// Draws a chart to a file, overwriting whatever is there.
pub trait Render {
    fn render(&mut self, chart: &Chart, fout: &Path) -> ReportResult<()>;
}

/// PNG output through the plotters bitmap backend.
#[derive(Debug, Clone, Copy)]
pub struct PngRenderer {
    pub size: (u32, u32),
}

impl Default for PngRenderer {
    /// The default figure size at the fixed DPI.
    fn default() -> Self {
        let (w, h) = FIGURE_SIZE_INCHES;
        PngRenderer {
            size: ((w * DPI as f64).round() as u32, (h * DPI as f64).round() as u32),
        }
    }
}

impl Render for PngRenderer {
    fn render(&mut self, chart: &Chart, fout: &Path) -> ReportResult<()> {
        plot_series(chart, fout, self.size).map_err(|e| ReportError::Render {
            path: fout.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Plot the series as a single line, x axis is always the clock.
pub fn plot_series(
    chart: &Chart,
    fout: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let xrange = axis_range(&chart.x, 5.);
    let yrange = axis_range(&chart.y, 5.);
    let root = BitMapBackend::new(fout, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut plot = ChartBuilder::on(&root)
        .caption(chart.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(xrange, yrange)?;
    plot.configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(100, 100, 100).mix(0.3).stroke_width(1))
        .set_all_tick_mark_size(2)
        .label_style(("sans-serif", 14))
        .x_desc(CLOCK_LABEL)
        .y_desc(chart.y_label)
        .draw()?;
    plot.draw_series(LineSeries::new(
        chart.x.iter().zip(chart.y.iter()).map(|(x, y)| (*x, *y)),
        &BLUE,
    ))?;
    root.present()?;
    Ok(())
}
