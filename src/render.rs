//! Markup for chat message bodies.
//!
//! Everything the server sends back (SQL text, cell values, error details)
//! and everything the user typed goes through [`escape_html`] before it is
//! placed into markup.

use serde_json::Value;

use crate::constants::NO_RESULTS_MESSAGE;
use crate::models::ResultRow;
use crate::transcript::MessageBody;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Display text for a single result cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Tabular view of a query result.  Columns come from the first row; later
/// rows are assumed to share them and missing keys render as empty cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// `None` when there are no rows to show.
    pub fn from_rows(rows: &[ResultRow]) -> Option<Self> {
        let first = rows.first()?;
        let columns: Vec<String> = first.keys().cloned().collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.get(col).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();
        Some(Self { columns, rows })
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"results-table\"><table><thead><tr>");
        for col in &self.columns {
            html.push_str("<th>");
            html.push_str(&escape_html(col));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&escape_html(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table></div>");
        html
    }
}

/// Inner markup of a `.message-content` bubble.
pub fn render_body(body: &MessageBody) -> String {
    match body {
        MessageBody::Text(text) => escape_html(text),
        MessageBody::Sql { sql } => format!(
            "<strong>SQL:</strong><pre class=\"sql-block\"><code>{}</code></pre>",
            escape_html(sql)
        ),
        MessageBody::Table(table) => table.to_html(),
        MessageBody::NoResults => escape_html(NO_RESULTS_MESSAGE),
        MessageBody::Error { detail } => {
            format!("<strong>Error:</strong> {}", escape_html(detail))
        }
    }
}
