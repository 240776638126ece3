//! Output formatting utilities

use crate::domain::Entry;

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Format a list of entries for display
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  {}\n",
            entry.created_at.format(TIMESTAMP_FORMAT),
            entry.id,
            entry.title
        ));
    }
    output
}

/// Format a single entry with its content
pub fn format_entry(entry: &Entry) -> String {
    let mut output = format!(
        "{}\nid: {}\ncreated: {}\n",
        entry.title,
        entry.id,
        entry.created_at.format(TIMESTAMP_FORMAT)
    );
    if !entry.content.is_empty() {
        output.push('\n');
        output.push_str(&entry.content);
        output.push('\n');
    }
    output
}
