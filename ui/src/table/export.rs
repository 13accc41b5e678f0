use std::io::Write;

use csv::WriterBuilder;

use super::Table;
use crate::error::UiError;

impl Table {
    /// Serializes the header row followed by every data row as CSV, quoting
    /// cells as needed.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), UiError> {
        // Ragged rows are written as-is; width enforcement belongs to sorting.
        let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row.cells())?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// CSV export into a string, for handing to a file dialog or clipboard.
    pub fn to_csv(&self) -> Result<String, UiError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Row;
    use super::*;

    fn holdings_table() -> Table {
        let mut table = Table::new(vec![
            "Symbol".to_string(),
            "Shares".to_string(),
            "Value".to_string(),
        ]);
        table.push_row(Row::from_strs(&["AAPL", "10", "$1,824.50"]));
        table.push_row(Row::from_strs(&["MSFT", "3", "$1,141.83"]));
        table
    }

    #[test]
    fn test_csv_has_header_then_rows() {
        let csv = holdings_table().to_csv().unwrap();
        assert_eq!(
            csv,
            "Symbol,Shares,Value\nAAPL,10,\"$1,824.50\"\nMSFT,3,\"$1,141.83\"\n"
        );
    }

    #[test]
    fn test_cells_with_quotes_are_escaped() {
        let mut table = Table::new(vec!["Name".to_string()]);
        table.push_row(Row::from_strs(&["Apple \"Inc.\""]));
        let csv = table.to_csv().unwrap();
        assert_eq!(csv, "Name\n\"Apple \"\"Inc.\"\"\"\n");
    }

    #[test]
    fn test_empty_table_is_just_the_header() {
        let table = Table::new(vec!["Symbol".to_string(), "Price".to_string()]);
        assert_eq!(table.to_csv().unwrap(), "Symbol,Price\n");
    }
}
