use sched_trace_plot::plot::{Chart, Render};
use sched_trace_plot::report::{generate_report, summary_line};
use sched_trace_plot::{ReportError, ReportResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Stands in for the PNG backend: keeps the charts and touches the output file.
#[derive(Default)]
struct Recorder {
    charts: Vec<Chart>,
}

impl Render for Recorder {
    fn render(&mut self, chart: &Chart, fout: &Path) -> ReportResult<()> {
        fs::write(fout, b"")?;
        self.charts.push(chart.clone());
        Ok(())
    }
}

const TICKS: &str = "clock,running_pid,ready_size,waiting_size,terminated_size\n\
                     0,-1,0,0,0\n\
                     1,5,2,1,0\n\
                     2,-1,1,1,1\n";

const PROCESS: &str = "clock,pid,state,cpu_done,cpu_total,io_done,io_total\n\
                       1,5,RUNNING,5,10,0,0\n\
                       1,6,NEW,0,0,0,0\n\
                       2,5,WAITING,4,8,1,2\n";

fn pngs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}

fn names(written: &[PathBuf]) -> Vec<String> {
    written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn six_charts_with_both_traces() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sim_ticks.csv"), TICKS).unwrap();
    fs::write(dir.path().join("sim_process.csv"), PROCESS).unwrap();
    let mut rec = Recorder::default();
    let written = generate_report(Some("sim"), dir.path(), &mut rec).unwrap();
    assert_eq!(
        names(&written),
        [
            "ready_size.png",
            "waiting_size.png",
            "terminated_size.png",
            "cpu_utilization.png",
            "throughput_cumulativo.png",
            "cpu_ratio_medio.png"
        ]
    );
    assert_eq!(pngs(dir.path()).len(), 6);
    assert_eq!(rec.charts[3].y, [0., 1., 0.]);
    assert_eq!(rec.charts[4].y, [0., 0., 0.5]);
    assert_eq!(rec.charts[5].x, [1., 2.]);
    assert_eq!(rec.charts[5].y, [0.5, 0.5]);
    assert_eq!(
        summary_line(&written),
        "Generated: ready_size.png, waiting_size.png, terminated_size.png, \
         cpu_utilization.png, throughput_cumulativo.png, cpu_ratio_medio.png"
    );
}

#[test]
fn five_charts_without_process_trace() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sim_ticks.csv"), TICKS).unwrap();
    let mut rec = Recorder::default();
    let written = generate_report(Some("sim"), dir.path(), &mut rec).unwrap();
    assert_eq!(written.len(), 5);
    assert_eq!(
        pngs(dir.path()),
        [
            "cpu_utilization.png",
            "ready_size.png",
            "terminated_size.png",
            "throughput_cumulativo.png",
            "waiting_size.png"
        ]
    );
}

#[test]
fn process_trace_without_columns_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sim_ticks.csv"), TICKS).unwrap();
    fs::write(dir.path().join("sim_process.csv"), "clock,pid,state\n1,5,RUNNING\n").unwrap();
    let mut rec = Recorder::default();
    let written = generate_report(Some("sim"), dir.path(), &mut rec).unwrap();
    assert_eq!(written.len(), 5);
    assert!(!dir.path().join("cpu_ratio_medio.png").exists());
}

#[test]
fn missing_tick_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("sim_ticks.csv"),
        "clock,running_pid,ready_size,terminated_size\n0,-1,0,0\n",
    )
    .unwrap();
    fs::write(dir.path().join("sim_process.csv"), PROCESS).unwrap();
    let mut rec = Recorder::default();
    let err = generate_report(Some("sim"), dir.path(), &mut rec).unwrap_err();
    assert!(
        matches!(err, ReportError::MissingRequiredColumns { .. }),
        "{:?}",
        err
    );
    assert!(pngs(dir.path()).is_empty());
}

#[test]
fn bad_tick_cell_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("sim_ticks.csv"),
        "clock,running_pid,ready_size,waiting_size,terminated_size\n0,-1,0,0,0\n1,5,x,0,0\n",
    )
    .unwrap();
    let mut rec = Recorder::default();
    let err = generate_report(Some("sim"), dir.path(), &mut rec).unwrap_err();
    assert!(matches!(err, ReportError::InvalidValue { .. }), "{:?}", err);
    assert!(pngs(dir.path()).is_empty());
}

#[test]
fn explicit_base_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut rec = Recorder::default();
    let err = generate_report(Some("sim"), dir.path(), &mut rec).unwrap_err();
    assert!(matches!(err, ReportError::InputNotFound(_)), "{:?}", err);
}

#[test]
fn auto_detect_without_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let mut rec = Recorder::default();
    let err = generate_report(None, dir.path(), &mut rec).unwrap_err();
    assert!(matches!(err, ReportError::NoCandidatesFound(_)), "{:?}", err);
    assert!(rec.charts.is_empty());
}

#[test]
fn auto_detect_uses_the_only_trace() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("run1_ticks.csv"), TICKS).unwrap();
    fs::write(dir.path().join("run1_process.csv"), PROCESS).unwrap();
    let mut rec = Recorder::default();
    let written = generate_report(None, dir.path(), &mut rec).unwrap();
    assert_eq!(written.len(), 6);
}

#[test]
fn ragged_process_trace_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sim_ticks.csv"), TICKS).unwrap();
    fs::write(
        dir.path().join("sim_process.csv"),
        "clock,cpu_done,cpu_total\n1,5\n",
    )
    .unwrap();
    let mut rec = Recorder::default();
    let err = generate_report(Some("sim"), dir.path(), &mut rec).unwrap_err();
    assert!(matches!(err, ReportError::Parse { .. }), "{:?}", err);
    assert_eq!(pngs(dir.path()).len(), 5);
}
