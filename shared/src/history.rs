use crate::constants::EMPTY_HISTORY_PLACEHOLDER;
use crate::shared_roulette::HistoryEntry;

/// One rendered line of the history panel.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryLine {
    Placeholder,
    Entry(String),
}

impl HistoryLine {
    pub fn text(&self) -> &str {
        match self {
            HistoryLine::Placeholder => EMPTY_HISTORY_PLACEHOLDER,
            HistoryLine::Entry(text) => text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, HistoryLine::Placeholder)
    }
}

pub fn format_entry(entry: &HistoryEntry) -> String {
    format!("{}  {} ({})", entry.time, entry.prize, entry.nickname)
}

/// Lines for the history panel, in the order the server returned them.
pub fn render_history(entries: &[HistoryEntry]) -> Vec<HistoryLine> {
    if entries.is_empty() {
        return vec![HistoryLine::Placeholder];
    }
    entries
        .iter()
        .map(|entry| HistoryLine::Entry(format_entry(entry)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: &str, prize: &str, nickname: &str) -> HistoryEntry {
        HistoryEntry {
            time: time.to_string(),
            prize: prize.to_string(),
            nickname: nickname.to_string(),
        }
    }

    #[test]
    fn test_empty_history_renders_placeholder() {
        let lines = render_history(&[]);
        assert_eq!(lines, vec![HistoryLine::Placeholder]);
        assert_eq!(lines[0].text(), "尚無中獎紀錄");
    }

    #[test]
    fn test_entries_keep_server_order() {
        let lines = render_history(&[
            entry("12:05", "頭獎", "amy"),
            entry("12:01", "參加獎", "bob"),
            entry("11:59", "二獎", "cat"),
        ]);
        let texts: Vec<&str> = lines.iter().map(HistoryLine::text).collect();
        assert_eq!(
            texts,
            vec!["12:05  頭獎 (amy)", "12:01  參加獎 (bob)", "11:59  二獎 (cat)"]
        );
        assert!(lines.iter().all(|line| !line.is_placeholder()));
    }
}
