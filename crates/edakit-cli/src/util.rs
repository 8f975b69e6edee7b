use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use edakit_analysis::table::Table;

/// Where a command writes its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn new(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdout, |path| Self::File(path.to_owned()))
    }

    fn open(&self) -> anyhow::Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }

    /// Writes `value` as pretty-printed JSON followed by a newline.
    pub fn write_json<T>(&self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut writer = self.open()?;
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("Failed to write JSON to {self}"))?;
        writeln!(writer).with_context(|| format!("Failed to write JSON to {self}"))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {self}"))
    }

    /// Writes `table` as CSV with its header row.
    pub fn write_table(&self, table: &Table) -> anyhow::Result<()> {
        let mut writer = self.open()?;
        table
            .write(&mut writer)
            .with_context(|| format!("Failed to write CSV to {self}"))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {self}"))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read a CSV file with a header row
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_table<P>(path: P) -> anyhow::Result<Table>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let table = Table::from_path(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "Loaded table");
    Ok(table)
}

/// Read one numeric column of a CSV file
///
/// # Errors
///
/// Returns error if the file cannot be read or the column is missing or not numeric
pub fn read_column<P>(path: P, column: &str) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    read_table(path)?
        .numeric_column(column)
        .with_context(|| format!("Failed to read column '{column}' from {}", path.display()))
}
