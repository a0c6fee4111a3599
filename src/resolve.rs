//! Locate the tick trace and, when present, its process trace.
//!
//! The simulator writes a pair of files sharing a base name,
//! `<base>_ticks.csv` and `<base>_process.csv`.
//! With an explicit base the pair is taken as is,
//! otherwise the most recently modified `*_ticks.csv` in the directory is used.

use crate::{ReportError, ReportResult};
use chrono::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const TICKS_SUFFIX: &str = "_ticks.csv";
pub const PROCESS_SUFFIX: &str = "_process.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFiles {
    pub ticks: PathBuf,
    pub process: Option<PathBuf>,
}

/// Resolve the input pair; relative base names are taken relative to `dir`.
pub fn find_inputs(base: Option<&str>, dir: &Path) -> ReportResult<InputFiles> {
    match base {
        Some(base) => from_base(base, dir),
        None => most_recent(dir),
    }
}

fn from_base(base: &str, dir: &Path) -> ReportResult<InputFiles> {
    let ticks = dir.join(format!("{}{}", base, TICKS_SUFFIX));
    if !ticks.is_file() {
        return Err(ReportError::InputNotFound(ticks));
    }
    let process = dir.join(format!("{}{}", base, PROCESS_SUFFIX));
    let process = if process.is_file() {
        Some(process)
    } else {
        log::warn!(
            "{} not found, the mean CPU progress chart will be skipped",
            process.display()
        );
        None
    };
    Ok(InputFiles { ticks, process })
}

fn most_recent(dir: &Path) -> ReportResult<InputFiles> {
    let mut candidates: Vec<(Option<SystemTime>, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_ticks = entry
            .file_name()
            .to_str()
            .map_or(false, |n| n.ends_with(TICKS_SUFFIX));
        if !is_ticks {
            continue;
        }
        // follows symlinks, as the explicit-base lookup does
        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => {
                candidates.push((meta.modified().ok(), entry.path()));
            }
            Ok(_) => continue,
            Err(e) => {
                log::debug!("could not stat {}: {}", entry.path().display(), e);
                candidates.push((None, entry.path()));
            }
        }
    }
    let (modified, ticks) = pick_latest(candidates)
        .ok_or_else(|| ReportError::NoCandidatesFound(dir.to_path_buf()))?;
    if let Some(m) = modified {
        let m: DateTime<Local> = m.into();
        log::debug!(
            "auto-detected {} modified at {}",
            ticks.display(),
            m.to_rfc3339_opts(SecondsFormat::Secs, false)
        );
    }
    let process = sibling_process(&ticks);
    let process = if process.is_file() {
        Some(process)
    } else {
        log::info!("no {} next to {}", PROCESS_SUFFIX, ticks.display());
        None
    };
    Ok(InputFiles { ticks, process })
}

/// Newest modification time first, ties broken by ascending path.
/// A missing timestamp counts as the oldest.
fn pick_latest(
    mut candidates: Vec<(Option<SystemTime>, PathBuf)>,
) -> Option<(Option<SystemTime>, PathBuf)> {
    candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    candidates.into_iter().next()
}

/// `<base>_ticks.csv` -> `<base>_process.csv`, in the same directory.
pub fn sibling_process(ticks: &Path) -> PathBuf {
    let name = ticks
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(TICKS_SUFFIX))
        .unwrap_or_default();
    ticks.with_file_name(format!("{}{}", name, PROCESS_SUFFIX))
}
