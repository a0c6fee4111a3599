use crate::plot::{Chart, Render};
use crate::resolve::find_inputs;
use crate::series::*;
use crate::{ReportResult, Table, PROCESS_COLUMNS, TICK_COLUMNS, VERSION};
use clap::{Arg, Command};
use std::path::{Path, PathBuf};

pub const CPU_RATIO_PNG: &str = "cpu_ratio_medio.png";

/// Takes the only CLI argument, the optional base name of the traces.
/// Without it the most recent `*_ticks.csv` in the working directory is used.
pub fn parse_cli() -> Option<String> {
    let arg_base = Arg::new("base")
        .help("base name of the traces, reads <base>_ticks.csv and <base>_process.csv")
        .num_args(1)
        .required(false);
    let cli_args = Command::new("trace_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the scheduler traces of the OS simulator")
        .arg(arg_base)
        .get_matches();
    cli_args.get_one::<String>("base").cloned()
}

/// The five charts drawn from the tick trace, in output order.
pub fn tick_charts(ticks: &Table) -> ReportResult<Vec<Chart>> {
    let clock = clock_axis(ticks)?;
    let chart = |y, title, y_label, file_name| Chart {
        x: clock.clone(),
        y,
        title,
        y_label,
        file_name,
    };
    Ok(vec![
        chart(
            count_series(ticks, "ready_size")?,
            "READY queue over time",
            "READY (processes)",
            "ready_size.png",
        ),
        chart(
            count_series(ticks, "waiting_size")?,
            "WAITING queue over time",
            "WAITING (processes)",
            "waiting_size.png",
        ),
        chart(
            count_series(ticks, "terminated_size")?,
            "TERMINATED processes over time",
            "TERMINATED (processes)",
            "terminated_size.png",
        ),
        chart(
            cpu_utilization(ticks)?,
            "CPU utilization (binary)",
            "CPU in use (0/1)",
            "cpu_utilization.png",
        ),
        chart(
            cumulative_throughput(ticks)?,
            "Cumulative throughput",
            "proc/tick",
            "throughput_cumulativo.png",
        ),
    ])
}

/// The mean CPU progress chart, None when the process trace lacks its columns.
pub fn process_chart(process: &Table) -> ReportResult<Option<Chart>> {
    let missing = process.missing_columns(&PROCESS_COLUMNS);
    if !missing.is_empty() {
        log::warn!(
            "{} lacks column(s) {}, skipping {}",
            process.path.display(),
            missing.join(", "),
            CPU_RATIO_PNG
        );
        return Ok(None);
    }
    let (x, y): (Vec<f64>, Vec<f64>) = mean_cpu_ratio_by_tick(process)?
        .into_iter()
        .map(|(c, r)| (c as f64, r))
        .unzip();
    Ok(Some(Chart {
        x,
        y,
        title: "Mean CPU progress per tick",
        y_label: "cpu_done/total (mean)",
        file_name: CPU_RATIO_PNG,
    }))
}

/// Resolve, load, validate, derive, and render; charts are written into `dir`.
/// The tick trace is validated and every tick series derived before anything is drawn.
/// Returns the written files in order.
pub fn generate_report<R: Render>(
    base: Option<&str>,
    dir: &Path,
    renderer: &mut R,
) -> ReportResult<Vec<PathBuf>> {
    let inputs = find_inputs(base, dir)?;

    println!("Reading: {}", inputs.ticks.display());
    let ticks = Table::from_csv(&inputs.ticks)?;
    ticks.require_columns(&TICK_COLUMNS)?;
    let charts = tick_charts(&ticks)?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(charts.len() + 1);
    for chart in charts.iter() {
        written.push(draw(renderer, chart, dir)?);
    }

    if let Some(process_csv) = inputs.process {
        println!("Reading: {}", process_csv.display());
        let process = Table::from_csv(&process_csv)?;
        if let Some(chart) = process_chart(&process)? {
            written.push(draw(renderer, &chart, dir)?);
        }
    }
    Ok(written)
}

fn draw<R: Render>(renderer: &mut R, chart: &Chart, dir: &Path) -> ReportResult<PathBuf> {
    let fout = dir.join(chart.file_name);
    log::debug!("plotting {} points to {}", chart.y.len(), fout.display());
    renderer.render(chart, &fout)?;
    Ok(fout)
}

/// `Generated: a.png, b.png` with the bare file names of the written charts.
pub fn summary_line(written: &[PathBuf]) -> String {
    let names: Vec<String> = written
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect();
    format!("Generated: {}", names.join(", "))
}
