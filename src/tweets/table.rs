use crate::error::{Result, TweetError};
use crate::tweets::types::{Cell, Column};
use crate::tweets::writer::CsvTableWriter;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Feature rows under a fixed column header
#[derive(Debug, Clone, PartialEq)]
pub struct TweetTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl TweetTable {
    /// Zip extracted columns into rows, keeping the given column order
    ///
    /// Every column must hold exactly `expected_rows` values.
    pub fn from_columns(columns: Vec<(Column, Vec<Cell>)>, expected_rows: usize) -> Result<Self> {
        for (column, cells) in &columns {
            if cells.len() != expected_rows {
                return Err(TweetError::LengthMismatch {
                    column: column.name().to_string(),
                    expected: expected_rows,
                    actual: cells.len(),
                });
            }
        }

        let (names, cells): (Vec<Column>, Vec<Vec<Cell>>) = columns.into_iter().unzip();
        let mut iters: Vec<_> = cells.into_iter().map(Vec::into_iter).collect();
        let rows = (0..expected_rows)
            .map(|_| iters.iter_mut().filter_map(Iterator::next).collect())
            .collect();

        Ok(TweetTable {
            columns: names,
            rows,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// All values of one column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    pub fn get(&self, row: usize, name: &str) -> Option<&Cell> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// The first `n` rows
    pub fn head(&self, n: usize) -> TweetTable {
        TweetTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Write the table as CSV to `path`, replacing any existing file
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| TweetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_csv(file)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = CsvTableWriter::new(writer);
        writer.write_table(self)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_columns() -> Vec<(Column, Vec<Cell>)> {
        vec![
            (Column::Lang, vec![Cell::Text("en".into()), Cell::Text("fr".into())]),
            (Column::RetweetCount, vec![Cell::Int(3), Cell::Int(0)]),
        ]
    }

    #[test]
    fn test_zips_columns_into_rows() {
        let table = TweetTable::from_columns(two_columns(), 2).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names(), vec!["lang", "retweet_count"]);
        assert_eq!(table.rows()[1], vec![Cell::Text("fr".into()), Cell::Int(0)]);
        assert_eq!(table.get(0, "retweet_count"), Some(&Cell::Int(3)));
        assert_eq!(table.get(5, "lang"), None);
        assert_eq!(table.get(0, "nope"), None);
        assert_eq!(table.column("lang").unwrap().len(), 2);
    }

    #[test]
    fn test_rejects_ragged_columns() {
        let mut columns = two_columns();
        columns[1].1.pop();

        match TweetTable::from_columns(columns, 2) {
            Err(TweetError::LengthMismatch { column, expected, actual }) => {
                assert_eq!(column, "retweet_count");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_head() {
        let table = TweetTable::from_columns(two_columns(), 2).unwrap();
        assert_eq!(table.head(1).len(), 1);
        assert_eq!(table.head(10).len(), 2);
        assert_eq!(table.head(0).columns(), table.columns());
    }
}
