//! Reading uploaded CSV data sources into merge records.
//!
//! The delimiter is guessed from the header line. Header titles are kept
//! verbatim since item mappings refer to them by exact name. Rows may be
//! shorter than the header; their missing columns are simply absent from the
//! record, so mapped fields fall back to their literal values.

use common::merge::Record;
use common::model::csv::ColumnCheck;
use csv::{ReaderBuilder, StringRecord};

const DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];
const BOM: &[u8] = b"\xEF\xBB\xBF";

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(BOM).unwrap_or(bytes)
}

/// The candidate delimiter that occurs most often in the header line.
pub fn detect_delimiter(bytes: &[u8]) -> u8 {
    let header_line = strip_bom(bytes)
        .split(|&b| b == b'\n')
        .next()
        .unwrap_or_default();
    // reversed so that ties resolve to the earliest candidate
    DELIMITERS
        .iter()
        .rev()
        .max_by_key(|&&d| header_line.iter().filter(|&&b| b == d).count())
        .copied()
        .unwrap_or(b',')
}

fn reader(bytes: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(detect_delimiter(bytes))
        .flexible(true)
        .from_reader(strip_bom(bytes))
}

fn headers(reader: &mut csv::Reader<&[u8]>) -> Result<Vec<String>, String> {
    let headers = reader.headers().map_err(|e| e.to_string())?;
    Ok(headers
        .iter()
        .map(|h| h.trim_end_matches('\r').to_string())
        .collect())
}

fn to_record(titles: &[String], row: &StringRecord) -> Record {
    titles
        .iter()
        .zip(row.iter())
        .map(|(title, value)| (title.clone(), value.to_string()))
        .collect()
}

/// Header titles and every data row of a CSV document, in file order.
pub fn read_records(bytes: &[u8]) -> Result<(Vec<String>, Vec<Record>), String> {
    let mut reader = reader(bytes);
    let titles = headers(&mut reader)?;
    if titles.iter().all(|t| t.is_empty()) {
        return Err("The CSV file has no header line".to_string());
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| e.to_string())?;
        records.push(to_record(&titles, &row));
    }
    Ok((titles, records))
}

/// Column titles with the first data row's value for each.
pub fn inspect(bytes: &[u8]) -> Result<Vec<ColumnCheck>, String> {
    let mut reader = reader(bytes);
    let titles = headers(&mut reader)?;
    let first = match reader.records().next() {
        Some(row) => Some(row.map_err(|e| e.to_string())?),
        None => None,
    };

    Ok(titles
        .into_iter()
        .enumerate()
        .filter(|(_, title)| !title.is_empty())
        .map(|(idx, title)| ColumnCheck {
            title,
            first_row: first
                .as_ref()
                .and_then(|row| row.get(idx))
                .map(str::to_string),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn picks_the_most_frequent_delimiter() {
        assert_eq!(detect_delimiter(b"a;b;c\n1;2;3"), b';');
        assert_eq!(detect_delimiter(b"a\tb\tc"), b'\t');
        assert_eq!(detect_delimiter(b"a|b,c|d"), b'|');
        assert_eq!(detect_delimiter(b"a;b,c"), b',');
        assert_eq!(detect_delimiter(b"single"), b',');
    }

    #[test]
    fn records_keep_titles_verbatim_and_skip_missing_cells() {
        let csv = "\u{feff}Full Name;E-Mail\r\nJane;jane@example.com\r\nBob\r\n";
        let (titles, records) = read_records(csv.as_bytes()).unwrap();
        assert_eq!(titles, ["Full Name", "E-Mail"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Full Name"], "Jane");
        assert_eq!(records[0]["E-Mail"], "jane@example.com");
        assert_eq!(records[1].get("E-Mail"), None);
    }

    #[test]
    fn quoted_values_may_hold_the_delimiter() {
        let (_, records) = read_records(b"name,title\n\"Doe, Jane\",CEO\n").unwrap();
        assert_eq!(records[0]["name"], "Doe, Jane");
    }

    #[test]
    fn inspect_reports_first_row_values() {
        let columns = inspect(b"name,phone\nJane,555\nBob,777\n").unwrap();
        assert_eq!(
            columns,
            vec![
                ColumnCheck {
                    title: "name".to_string(),
                    first_row: Some("Jane".to_string()),
                },
                ColumnCheck {
                    title: "phone".to_string(),
                    first_row: Some("555".to_string()),
                },
            ]
        );

        let header_only = inspect(b"name,phone\n").unwrap();
        assert_eq!(header_only.len(), 2);
        assert!(header_only.iter().all(|c| c.first_row.is_none()));
    }
}
