//! Series derived from the loaded traces.
//! All functions are pure and keep the row order of their input,
//! undefined ratios are filled with 0 so the charts match the reference plots.

use crate::{ReportResult, Table, IDLE_PID};
use std::collections::BTreeMap;

/// The clock column as x axis values.
pub fn clock_axis(ticks: &Table) -> ReportResult<Vec<f64>> {
    ticks.parse_column::<f64>("clock")
}

/// A count column (ready, waiting, terminated) as y axis values.
pub fn count_series(ticks: &Table, column: &str) -> ReportResult<Vec<f64>> {
    ticks.parse_column::<f64>(column)
}

/// 1 for every tick with a running process, 0 when the CPU is idle.
pub fn cpu_utilization(ticks: &Table) -> ReportResult<Vec<f64>> {
    let pids = ticks.parse_column::<i64>("running_pid")?;
    Ok(pids
        .into_iter()
        .map(|pid| if pid != IDLE_PID { 1. } else { 0. })
        .collect())
}

/// Terminated processes per elapsed tick, 0 at clock 0.
pub fn cumulative_throughput(ticks: &Table) -> ReportResult<Vec<f64>> {
    let clock = ticks.parse_column::<i64>("clock")?;
    let terminated = ticks.parse_column::<f64>("terminated_size")?;
    Ok(clock
        .into_iter()
        .zip(terminated)
        .map(|(c, t)| if c == 0 { 0. } else { t / c as f64 })
        .collect())
}

/// Mean of cpu_done/cpu_total over the processes logged at each clock,
/// sorted by clock. Rows with cpu_total == 0 do not count,
/// a clock with no counted rows gets 0.
pub fn mean_cpu_ratio_by_tick(process: &Table) -> ReportResult<Vec<(i64, f64)>> {
    let clock = process.parse_column::<i64>("clock")?;
    let done = process.parse_column::<f64>("cpu_done")?;
    let total = process.parse_column::<f64>("cpu_total")?;
    let mut groups: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for ((c, d), t) in clock.into_iter().zip(done).zip(total) {
        let (sum, n) = groups.entry(c).or_insert((0., 0));
        if t != 0. {
            *sum += d / t;
            *n += 1;
        }
    }
    Ok(groups
        .into_iter()
        .map(|(c, (sum, n))| (c, if n == 0 { 0. } else { sum / n as f64 }))
        .collect())
}
