//! Output formatting for list and report commands

pub mod groups;
pub mod html;
pub mod subscriptions;
pub mod suspended;
pub mod users;

use clap::ValueEnum;
use comfy_table::presets::NOTHING;
use comfy_table::Table;
use serde_json::Value;

use crate::error::{Result, TabError};

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain table output
    #[default]
    Table,
    /// CSV output
    Csv,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// A rectangular result set ready for printing
///
/// Every list and report command reduces its data to one of these, so the
/// format switch lives in a single place.
#[derive(Debug, Clone)]
pub struct Report {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Report {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Values of one column, by header name
    pub fn column(&self, header: &str) -> Vec<&str> {
        match self.headers.iter().position(|h| h == header) {
            Some(idx) => self
                .rows
                .iter()
                .filter_map(|row| row.get(idx).map(|v| v.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Print the report to stdout in the requested format
    pub fn print(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Table => println!("{}", self.to_table()),
            OutputFormat::Csv => print!("{}", self.to_csv()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&self.to_json())
                    .map_err(|e| TabError::Json(e.to_string()))?
            ),
            OutputFormat::Yaml => print!(
                "{}",
                serde_yml::to_string(&self.to_json())
                    .map_err(|e| TabError::Json(e.to_string()))?
            ),
        }
        Ok(())
    }

    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        table.set_header(self.headers.clone());
        for row in &self.rows {
            table.add_row(row.clone());
        }
        table
    }

    fn to_csv(&self) -> String {
        let mut out = String::new();
        let header: Vec<String> = self.headers.iter().map(|h| escape_csv(h)).collect();
        out.push_str(&header.join(","));
        out.push('\n');
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|c| escape_csv(c)).collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }
        out
    }

    fn to_json(&self) -> Value {
        let objects: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                let map: serde_json::Map<String, Value> = self
                    .headers
                    .iter()
                    .zip(row.iter())
                    .map(|(h, v)| (h.clone(), Value::String(v.clone())))
                    .collect();
                Value::Object(map)
            })
            .collect();
        Value::Array(objects)
    }

    /// Render the report as an HTML table fragment
    pub fn to_html_table(&self) -> String {
        let mut out = String::from("<table>\n<tr>");
        for header in &self.headers {
            out.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        out.push_str("</tr>\n");
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row {
                out.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>");
        out
    }
}

/// Shorten an RFC 3339 timestamp for table display
///
/// Unparsable input passes through unchanged.
pub fn short_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Escape a CSV field (RFC 4180 quoting)
pub fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Escape text for inclusion in HTML
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        let mut report = Report::new(&["ID", "Name"]);
        report.push_row(vec!["1".to_string(), "alpha".to_string()]);
        report.push_row(vec!["2".to_string(), "beta, with comma".to_string()]);
        report
    }

    #[test]
    fn test_escape_csv_plain() {
        assert_eq!(escape_csv("plain"), "plain");
    }

    #[test]
    fn test_escape_csv_comma_and_quote() {
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_output_quotes_rows() {
        let csv = sample_report().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Name");
        assert_eq!(lines[2], "2,\"beta, with comma\"");
    }

    #[test]
    fn test_json_output_objects() {
        let json = sample_report().to_json();
        assert_eq!(json[0]["ID"], "1");
        assert_eq!(json[1]["Name"], "beta, with comma");
    }

    #[test]
    fn test_column_by_header() {
        let report = sample_report();
        assert_eq!(report.column("ID"), vec!["1", "2"]);
        assert!(report.column("Missing").is_empty());
    }

    #[test]
    fn test_html_table_escapes_cells() {
        let mut report = Report::new(&["Name"]);
        report.push_row(vec!["a<b>".to_string()]);
        let html = report.to_html_table();
        assert!(html.contains("<th>Name</th>"));
        assert!(html.contains("<td>a&lt;b&gt;</td>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b < c"), "a &amp; b &lt; c");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2026-08-24T10:05:00Z"), "2026-08-24 10:05");
        assert_eq!(short_date("yesterday"), "yesterday");
    }
}
