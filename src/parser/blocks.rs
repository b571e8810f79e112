const SEPARATOR: &str = "---";

/// Section headings the exporter writes between groups of entries.
const HEADINGS: &[&str] = &["websites", "other accounts"];

/// Split an export into trimmed entry blocks, dropping blanks and section headings.
pub fn split_entries(content: &str) -> Vec<&str> {
    content
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty() && !is_heading(block))
        .collect()
}

fn is_heading(block: &str) -> bool {
    let lower = block.to_lowercase();
    HEADINGS.contains(&lower.as_str())
}

// ── Tests ──
