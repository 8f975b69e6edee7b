//! Tabular datasets loaded from CSV.
//!
//! Cells are kept as the raw strings read from the file so that rows can be
//! written back unchanged; numeric columns are parsed on demand.

use std::{io, path::Path};

use crate::error::AnalysisError;

/// A CSV table with a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads a table from CSV data whose first record is the header row.
    ///
    /// # Examples
    ///
    /// ```
    /// use edakit_analysis::table::Table;
    ///
    /// let table = Table::from_reader("a,b\n1,x\n2,y\n".as_bytes()).unwrap();
    /// assert_eq!(table.headers(), ["a", "b"]);
    /// assert_eq!(table.numeric_column("a").unwrap(), vec![1.0, 2.0]);
    /// ```
    pub fn from_reader<R>(reader: R) -> Result<Self, AnalysisError>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = reader.headers()?.iter().map(str::to_owned).collect();
        let rows = reader
            .records()
            .map(|record| Ok(record?.iter().map(str::to_owned).collect()))
            .collect::<Result<_, csv::Error>>()?;
        Ok(Self { headers, rows })
    }

    pub fn from_path<P>(path: P) -> Result<Self, AnalysisError>
    where
        P: AsRef<Path>,
    {
        let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Builds a table of numeric columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns differ in length.
    #[must_use]
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Self {
        let len = columns.first().map_or(0, |(_, values)| values.len());
        assert!(
            columns.iter().all(|(_, values)| values.len() == len),
            "columns must have the same length"
        );
        let rows = (0..len)
            .map(|i| {
                columns
                    .iter()
                    .map(|(_, values)| values[i].to_string())
                    .collect()
            })
            .collect();
        let headers = columns.into_iter().map(|(name, _)| name).collect();
        Self { headers, rows }
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, AnalysisError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| AnalysisError::ColumnNotFound {
                name: name.to_owned(),
            })
    }

    /// Parses the named column as numbers, skipping empty cells.
    ///
    /// Row numbers in errors are 1-based and exclude the header row.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, AnalysisError> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row, cells)| {
                let cell = cells.get(idx).map_or("", String::as_str);
                (!cell.is_empty()).then_some((row, cell))
            })
            .map(|(row, cell)| {
                cell.parse::<f64>()
                    .map_err(|_| AnalysisError::NonNumericValue {
                        column: name.to_owned(),
                        row: row + 1,
                        value: cell.to_owned(),
                    })
            })
            .collect()
    }

    /// Returns a table holding the rows at `indices`, in that order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Writes the table as CSV, header row first.
    pub fn write<W>(&self, writer: W) -> Result<(), AnalysisError>
    where
        W: io::Write,
    {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
