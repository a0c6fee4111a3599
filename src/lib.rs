use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
pub mod error;
pub mod plot;
pub mod report;
pub mod resolve;
pub mod series;
pub mod utils;

pub use error::{ReportError, ReportResult};

// constants
pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
pub const IDLE_PID: i64 = -1;
pub const TICK_COLUMNS: [&str; 5] = [
    "clock",
    "running_pid",
    "ready_size",
    "waiting_size",
    "terminated_size",
];
pub const PROCESS_COLUMNS: [&str; 3] = ["clock", "cpu_done", "cpu_total"];
pub const DPI: u32 = 120;
pub const FIGURE_SIZE_INCHES: (f64, f64) = (6.4, 4.8);
pub const CLOCK_LABEL: &str = "clock (ticks)";

/// A delimited table held column by column.
/// Header names and row order are kept exactly as read,
/// every cell is kept as text and parsed on demand.
#[derive(Debug, Clone)]
pub struct Table {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub columns: Vec<Vec<String>>,
}

impl Table {
    /// Initiate an empty table with the given header,
    /// reserving the given capacity for every column.
    pub fn new<P: Into<PathBuf>>(path: P, headers: Vec<String>, capacity: usize) -> Table {
        let columns = headers.iter().map(|_| Vec::with_capacity(capacity)).collect();
        Table {
            path: path.into(),
            headers,
            columns,
        }
    }

    /// Read a csv file with a header row.
    /// Header names are kept as written, cells are trimmed.
    /// Rows with a different number of fields than the header are a parse error,
    /// nothing is skipped or recovered.
    pub fn from_csv<P>(fin: P) -> ReportResult<Table>
    where
        P: AsRef<Path>,
    {
        let path = fin.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| ReportError::Parse {
            path: path.clone(),
            source: csv::Error::from(e),
        })?;
        Table::from_reader(path, file)
    }

    /// Like [`Table::from_csv`] but for any reader, `path` only names the source in errors.
    pub fn from_reader<P, R>(path: P, reader: R) -> ReportResult<Table>
    where
        P: Into<PathBuf>,
        R: Read,
    {
        let path = path.into();
        let parse_err = |source: csv::Error| ReportError::Parse {
            path: path.clone(),
            source,
        };
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()
            .map_err(parse_err)?
            .iter()
            .map(str::to_owned)
            .collect();
        let mut table = Table::new(path.clone(), headers, 1024);
        for record in rdr.records() {
            let record = record.map_err(parse_err)?;
            for (column, field) in table.columns.iter_mut().zip(record.iter()) {
                column.push(field.to_owned());
            }
        }
        log::debug!(
            "loaded {} rows and {} columns from {}",
            table.len(),
            table.headers.len(),
            table.path.display()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// The raw cells of a column, None if the header does not have it.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Names from `required` that are not in the header, in the given order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|r| !self.has_column(r))
            .map(|r| r.to_string())
            .collect()
    }

    /// Fail unless every required column is present.
    /// The error lists the whole required set, not only the missing ones.
    pub fn require_columns(&self, required: &[&str]) -> ReportResult<()> {
        if self.missing_columns(required).is_empty() {
            Ok(())
        } else {
            Err(ReportError::MissingRequiredColumns {
                path: self.path.clone(),
                required: required.iter().map(|r| r.to_string()).collect(),
            })
        }
    }

    /// Parse every cell of a column.
    /// Integer columns also accept cells written as floats with a zero fraction, e.g. `3.0`.
    pub fn parse_column<T>(&self, name: &str) -> ReportResult<Vec<T>>
    where
        T: FromStr,
    {
        let cells = self
            .column(name)
            .ok_or_else(|| ReportError::MissingRequiredColumns {
                path: self.path.clone(),
                required: vec![name.to_string()],
            })?;
        cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                parse_cell::<T>(cell).ok_or_else(|| ReportError::InvalidValue {
                    path: self.path.clone(),
                    column: name.to_string(),
                    row: row + 1,
                    value: cell.clone(),
                })
            })
            .collect()
    }
}

fn parse_cell<T: FromStr>(cell: &str) -> Option<T> {
    match cell.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            let int_part = cell.strip_suffix(".0")?;
            int_part.parse::<T>().ok()
        }
    }
}
