pub mod blocks;
pub mod extract;

use crate::record::Record;

pub struct ParsedExport {
    /// Entry blocks found before the admission filter.
    pub blocks: usize,
    pub records: Vec<Record>,
}

/// Two-pass pipeline: export text → entry blocks → admissible records.
pub fn parse_export(content: &str) -> ParsedExport {
    let entries = blocks::split_entries(content);
    let records = entries
        .iter()
        .copied()
        .map(extract::extract_record)
        .filter(Record::is_admissible)
        .collect();
    ParsedExport {
        blocks: entries.len(),
        records,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_keeps_titled_or_linked_entries() {
        let text = std::fs::read_to_string("tests/fixtures/export.txt").unwrap();
        let parsed = parse_export(&text);
        assert_eq!(parsed.blocks, 6);
        let titles: Vec<&str> = parsed.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Example", "Bank, \"Main\"", "", "Steam", "Home WiFi"]
        );
    }

    #[test]
    fn entry_without_title_or_url_is_dropped() {
        let parsed = parse_export("Login: orphan\nPassword: lost");
        assert_eq!(parsed.blocks, 1);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn headings_only_has_no_records() {
        let parsed = parse_export("websites\n---\nother accounts");
        assert_eq!(parsed.blocks, 0);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let records = parse_export("Website name: B\n---\nWebsite name: A").records;
        assert_eq!(records[0].title, "B");
        assert_eq!(records[1].title, "A");
    }
}
