use crate::error::Result;
use crate::tweets::table::TweetTable;
use std::io::Write;

/// Writes feature tables as comma-separated values with a header row
pub struct CsvTableWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvTableWriter<W> {
    pub fn new(writer: W) -> Self {
        CsvTableWriter {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn write_table(&mut self, table: &TweetTable) -> Result<()> {
        self.writer.write_record(table.column_names())?;
        for row in table.rows() {
            self.writer.write_record(row.iter().map(|cell| cell.to_field()))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tweets::types::{Cell, Column};
    use serde_json::json;

    #[test]
    fn test_header_and_quoting() {
        let table = TweetTable::from_columns(
            vec![
                (Column::OriginalText, vec![Cell::Text("hello, \"world\"".into())]),
                (Column::Polarity, vec![Cell::Float(0.0)]),
                (Column::PossiblySensitive, vec![Cell::Missing]),
                (Column::Hashtags, vec![Cell::Json(json!([]))]),
            ],
            1,
        )
        .unwrap();

        let mut buffer = Vec::new();
        {
            let mut writer = CsvTableWriter::new(&mut buffer);
            writer.write_table(&table).unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "original_text,polarity,possibly_sensitive,hashtags\n\"hello, \"\"world\"\"\",0.0,,[]\n"
        );
    }

    #[test]
    fn test_empty_table_writes_header() {
        let table = TweetTable::from_columns(vec![(Column::Lang, Vec::new())], 0).unwrap();

        let mut buffer = Vec::new();
        table.write_csv(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "lang\n");
    }
}
