// Delimited dataset reader

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Raw delimited data: header row plus string cells
#[derive(Debug, Clone)]
pub struct CsvData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read delimited data from stdin
pub fn read_csv_from_stdin(delimiter: u8) -> Result<CsvData> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read from stdin")?;
    read_csv_from_str(&input, delimiter)
}

/// Read delimited data from a file path
pub fn read_csv_from_path(path: &Path, delimiter: u8) -> Result<CsvData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;
    read_csv_from_reader(file, delimiter)
}

/// Parse delimited data from an in-memory string
pub fn read_csv_from_str(input: &str, delimiter: u8) -> Result<CsvData> {
    read_csv_from_reader(input.as_bytes(), delimiter)
}

fn read_csv_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<CsvData> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("Failed to read header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        anyhow::bail!("Input has no header row");
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read data row")?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    if rows.is_empty() {
        anyhow::bail!("Input must contain at least one data row");
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "parsed delimited input");

    Ok(CsvData { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple_csv() {
        let data = read_csv_from_str("Wine,Alcohol,Ash\n1,14.23,2.43\n2,13.2,2.14\n", b',').unwrap();
        assert_eq!(data.headers, vec!["Wine", "Alcohol", "Ash"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], vec!["1", "14.23", "2.43"]);
    }

    #[test]
    fn test_read_custom_delimiter() {
        let data = read_csv_from_str("a;b\n1;2\n", b';').unwrap();
        assert_eq!(data.headers, vec!["a", "b"]);
        assert_eq!(data.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_read_trims_whitespace() {
        let data = read_csv_from_str("a, b\n 1 , 2 \n", b',').unwrap();
        assert_eq!(data.headers, vec!["a", "b"]);
        assert_eq!(data.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_read_empty_csv_fails() {
        let result = read_csv_from_str("a,b\n", b',');
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least one data row"));
    }

    #[test]
    fn test_read_header_with_spaces() {
        let data = read_csv_from_str("Wine,Color intensity\n1,5.64\n", b',').unwrap();
        assert_eq!(data.headers[1], "Color intensity");
    }
}
