// src/csv_handler.rs
use std::fs;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tokio::task;
use tracing::debug;

use crate::data_types::Record;
use crate::display::DisplayDescription;
use crate::error::{Error, Result};

/// Header row plus the records parsed from one delimited text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Reads and writes the dashboard's delimited files.
///
/// Parsing is line based: a field can't contain the delimiter or a newline,
/// and quotes are kept verbatim.
#[derive(Debug, Clone, Copy)]
pub struct CSVHandler {
    delimiter: char,
}

impl Default for CSVHandler {
    fn default() -> Self {
        CSVHandler::new()
    }
}

impl CSVHandler {
    pub fn new() -> Self {
        CSVHandler { delimiter: ',' }
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        CSVHandler { delimiter }
    }

    /// Read `path` off the async runtime and parse it
    pub async fn read_resource<P: AsRef<Path> + Send + 'static>(&self, path: P) -> Result<ParsedTable> {
        let handler = *self;
        task::spawn_blocking(move || -> Result<ParsedTable> {
            let path = path.as_ref();
            let text = fs::read_to_string(path).map_err(|source| Error::ResourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(handler.parse(&text))
        })
        .await
        .map_err(|e| Error::Initialization(format!("parse task failed: {}", e)))?
    }

    pub fn parse(&self, text: &str) -> ParsedTable {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        while lines.last().map_or(false, |line| line.trim().is_empty()) {
            lines.pop();
        }

        // the header is the first non-blank line
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());

        let Some((header_line, data_lines)) = lines[start..].split_first() else {
            return ParsedTable::default();
        };

        let headers = unique_headers(self.split_line(header_line));

        let records = data_lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let values: Vec<&str> = self.split_line(line).collect();
                if values.len() != headers.len() {
                    // line numbers are 1-based and the header is line 1
                    debug!(
                        line = i + 2,
                        expected = headers.len(),
                        found = values.len(),
                        "Row field count differs from header"
                    );
                }
                Record::from_pairs(
                    headers
                        .iter()
                        .enumerate()
                        .map(|(idx, header)| (header.clone(), values.get(idx).copied().unwrap_or(""))),
                )
            })
            .collect();

        ParsedTable { headers, records }
    }

    fn split_line<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> {
        line.split(self.delimiter).map(str::trim)
    }

    /// Write a table description as delimited text: header row of column
    /// names, then one row of raw cell values per record.
    pub fn write_table<W: Write>(&self, description: &DisplayDescription, out: W) -> Result<()> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| Error::Config(format!("delimiter '{}' is not ASCII", self.delimiter)))?;
        let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(out);

        match description {
            DisplayDescription::Table { columns, rows } => {
                writer.write_record(columns)?;
                for row in rows {
                    writer.write_record(row.iter().map(|field| field.value.as_str()))?;
                }
            }
            DisplayDescription::Empty { .. } => {}
            other => return Err(Error::ExportUnsupported(other.kind_name().to_string())),
        }

        writer.flush()?;
        Ok(())
    }
}

/// Header names with repeats renamed `Name_2`, `Name_3`, ... so every column
/// keeps its own key
fn unique_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for name in names {
        let mut header = name.to_string();
        let mut n = 2;
        while headers.contains(&header) {
            header = format!("{}_{}", name, n);
            n += 1;
        }
        if header != name {
            debug!(column = name, renamed = %header, "Duplicate column name");
        }
        headers.push(header);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ParsedTable {
        CSVHandler::new().parse(text)
    }

    #[test]
    fn short_rows_are_padded_with_empty_values() {
        let table = parse("Task,Status,Assignee,Due\nA,Done\n");
        assert_eq!(table.records.len(), 1);
        let record = &table.records[0];
        assert_eq!(record.len(), 4);
        assert_eq!(record.value("Assignee"), Some(""));
        assert_eq!(record.value("Due"), Some(""));
    }

    #[test]
    fn extra_fields_are_dropped() {
        let table = parse("A,B\n1,2,3,4");
        let record = &table.records[0];
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("A"), "1");
        assert_eq!(record.get("B"), "2");
    }

    #[test]
    fn headers_and_values_are_trimmed() {
        let table = parse(" Title , Publish Date \n Welcome ,2025-09-01 \n");
        assert_eq!(table.headers, vec!["Title", "Publish Date"]);
        assert_eq!(table.records[0].get("Title"), "Welcome");
        assert_eq!(table.records[0].get("Publish Date"), "2025-09-01");
    }

    #[test]
    fn empty_input_yields_no_headers_or_records() {
        let table = parse("");
        assert!(table.headers.is_empty());
        assert!(table.records.is_empty());
    }

    #[test]
    fn header_only_input_yields_no_records() {
        let table = parse("Name,Cohort\n");
        assert_eq!(table.headers, vec!["Name", "Cohort"]);
        assert!(table.records.is_empty());
    }

    #[test]
    fn blank_lines_inside_the_file_become_empty_rows() {
        let table = parse("Name,Cohort\nAlex,Fall\n\nSam,Fall\n\n\n");
        assert_eq!(table.records.len(), 3);
        assert_eq!(table.records[1].get("Name"), "");
        assert_eq!(table.records[1].get("Cohort"), "");
        assert_eq!(table.records[2].get("Name"), "Sam");
    }

    #[test]
    fn byte_order_mark_is_not_part_of_the_first_header() {
        let table = parse("\u{feff}Title,Status\nWelcome,Published\n");
        assert_eq!(table.headers, vec!["Title", "Status"]);
        assert_eq!(table.records[0].get("Title"), "Welcome");
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        let table = parse("\n  \r\nTitle,Status\nWelcome,Published\n\nDraft notes,Draft\n");
        assert_eq!(table.headers, vec!["Title", "Status"]);
        assert_eq!(table.records.len(), 3);
        assert_eq!(table.records[0].get("Title"), "Welcome");
        assert_eq!(table.records[1].get("Title"), "");
        assert_eq!(table.records[2].get("Status"), "Draft");
    }

    #[test]
    fn blank_only_input_yields_nothing() {
        assert_eq!(parse("\n \n\r\n"), ParsedTable::default());
    }

    #[test]
    fn duplicate_headers_keep_one_key_per_column() {
        let table = parse("A,A,B,A\n1,2,3,4\n");
        assert_eq!(table.headers, vec!["A", "A_2", "B", "A_3"]);
        let record = &table.records[0];
        assert_eq!(record.len(), 4);
        assert_eq!(record.get("A"), "1");
        assert_eq!(record.get("A_2"), "2");
        assert_eq!(record.get("A_3"), "4");
    }

    #[test]
    fn export_rejects_non_table_descriptions() {
        let description = DisplayDescription::Calendar {
            date_field: "Date".into(),
            entries: Vec::new(),
        };
        let result = CSVHandler::new().write_table(&description, Vec::new());
        assert!(matches!(result, Err(Error::ExportUnsupported(kind)) if kind == "calendar"));
    }

    #[test]
    fn export_refuses_non_ascii_delimiter() {
        let result = CSVHandler::with_delimiter('§').write_table(&DisplayDescription::empty(), Vec::new());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let table = parse("Name,Area\r\nMike,Engineering\r\n");
        assert_eq!(table.headers, vec!["Name", "Area"]);
        assert_eq!(table.records[0].get("Area"), "Engineering");
    }

    #[test]
    fn quotes_are_not_interpreted() {
        let table = parse("Title,Summary\n\"Hello,world\"");
        assert_eq!(table.records[0].get("Title"), "\"Hello");
        assert_eq!(table.records[0].get("Summary"), "world\"");
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "Title,Status\nA,Draft\nB,Published\n";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn custom_delimiter_splits_fields() {
        let table = CSVHandler::with_delimiter(';').parse("Name;Role\nLisa;Coordinator");
        assert_eq!(table.records[0].get("Role"), "Coordinator");
    }

    #[tokio::test]
    async fn missing_file_is_resource_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let result = CSVHandler::new().read_resource(path).await;
        assert!(matches!(result, Err(Error::ResourceUnavailable { .. })));
    }
}
