use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::plain_text;

/// Pipe-table syntax: row detection, cell splitting and separator rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    pub fn is_table_line(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PIPE)
    }

    /// Interior cells of a row, trimmed. The empty strings outside the
    /// leading and trailing pipe are not cells.
    pub fn cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }

    /// A separator row has only cells made of dashes, colons and spaces,
    /// with at least one dash each. Empty cells do not count, so `| | |`
    /// stays a (blank) header row.
    pub fn is_separator(line: &str) -> bool {
        static SEPARATOR_CELL: OnceLock<Regex> = OnceLock::new();
        let re = SEPARATOR_CELL
            .get_or_init(|| Regex::new(r"^[:\s]*-+[:\s]*$").expect("Invalid separator regex"));
        let cells = Self::cells(line);
        !cells.is_empty() && cells.iter().all(|c| re.is_match(c))
    }
}

/// Result of parsing one contiguous run of table lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// True when every header cell is empty: render as label/value pairs.
    pub is_info_table: bool,
}

/// Splits a run of `|` lines into header and data rows.
///
/// Separator rows are dropped wherever they appear. The first remaining row
/// is the header; data rows are padded with empty cells (or truncated) to
/// the header width. Cell text has emphasis markers removed.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> ParsedTable {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if TableRow::is_separator(line) {
            continue;
        }
        let cells: Vec<String> = TableRow::cells(line).into_iter().map(plain_text).collect();
        match &headers {
            None => headers = Some(cells),
            Some(h) => {
                let mut row = cells;
                row.resize(h.len(), String::new());
                rows.push(row);
            }
        }
    }

    let headers = headers.unwrap_or_default();
    let is_info_table = !headers.is_empty() && headers.iter().all(|h| h.trim().is_empty());
    ParsedTable {
        headers,
        rows,
        is_info_table,
    }
}
