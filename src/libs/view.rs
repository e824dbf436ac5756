//! Terminal tables for the daily report.

use super::worklog::{format_duration, WorklogEntry};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn worklogs_table(entries: &[WorklogEntry]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ISSUE", "SUMMARY", "COMMENT", "TIME SPENT"]);
        for entry in entries {
            table.add_row(row![entry.issue, entry.summary, entry.comment, entry.time_spent]);
        }
        // Left blank rather than undercounting when any row has no known duration.
        let total = entries
            .iter()
            .map(|e| e.seconds)
            .sum::<Option<i64>>()
            .map(format_duration)
            .unwrap_or_default();
        table.add_row(row!["", "", "TOTAL", total]);

        table
    }

    pub fn worklogs(entries: &[WorklogEntry]) {
        Self::worklogs_table(entries).printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_header_rows_and_total() {
        let entries = vec![
            WorklogEntry {
                issue: "PROJ-1".to_string(),
                summary: "Engine".to_string(),
                comment: "notes".to_string(),
                time_spent: "1h".to_string(),
                seconds: Some(3600),
            },
            WorklogEntry {
                issue: "PROJ-2".to_string(),
                summary: "Loom".to_string(),
                comment: "cards".to_string(),
                time_spent: "30m".to_string(),
                seconds: Some(1800),
            },
        ];
        let table = View::worklogs_table(&entries);
        assert_eq!(table.len(), 4);
        let rendered = table.to_string();
        assert!(rendered.contains("PROJ-2"));
        assert!(rendered.contains("1h 30m"));
    }

    #[test]
    fn test_total_left_blank_when_a_duration_is_unknown() {
        let entries = vec![
            WorklogEntry {
                issue: "PROJ-1".to_string(),
                summary: "Engine".to_string(),
                comment: "notes".to_string(),
                time_spent: "1h".to_string(),
                seconds: Some(3600),
            },
            WorklogEntry {
                issue: "PROJ-2".to_string(),
                summary: "Loom".to_string(),
                comment: "cards".to_string(),
                time_spent: "1d".to_string(),
                seconds: None,
            },
        ];
        let table = View::worklogs_table(&entries);
        let total = table.get_row(3).unwrap();
        assert_eq!(total.get_cell(2).unwrap().get_content(), "TOTAL");
        assert_eq!(total.get_cell(3).unwrap().get_content(), "");
    }
}
