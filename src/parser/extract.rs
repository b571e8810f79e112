use std::sync::LazyLock;

use regex::Regex;

use crate::record::Record;

static WEBSITE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Website name"));
static APPLICATION_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Application"));
static ACCOUNT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Account name"));
static WEBSITE_URL_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Website URL"));
static LOGIN_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Login"));
static LOGIN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Login name"));
static PASSWORD_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Password"));
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| label_re("Comment"));

/// `Label:` anywhere on a line, then the rest of that line. A blank remainder is no match.
fn label_re(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){}:[^\S\n]*(\S.*)", regex::escape(label))).unwrap()
}

/// Fill a record from one entry block. Each field scans the whole block
/// independently; synonymous labels are tried in priority order.
pub fn extract_record(block: &str) -> Record {
    Record {
        title: first_match(block, &[&WEBSITE_NAME_RE, &APPLICATION_RE, &ACCOUNT_NAME_RE]),
        url: first_match(block, &[&WEBSITE_URL_RE]),
        username: first_match(block, &[&LOGIN_RE, &LOGIN_NAME_RE]),
        password: first_match(block, &[&PASSWORD_RE]),
        notes: first_match(block, &[&COMMENT_RE]),
        // The export format has no one-time-password label.
        otp_auth: String::new(),
    }
}

fn first_match(block: &str, patterns: &[&LazyLock<Regex>]) -> String {
    patterns
        .iter()
        .find_map(|re| capture(re, block))
        .unwrap_or_default()
}

fn capture(re: &Regex, block: &str) -> Option<String> {
    let caps = re.captures(block)?;
    let value = caps[1].trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ── Tests ──
