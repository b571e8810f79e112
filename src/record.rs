use serde::Serialize;

/// CSV column names, in output order.
pub const HEADER: [&str; 6] = ["Title", "URL", "Username", "Password", "Notes", "OTPAuth"];

/// One password entry in the import schema. Field order matches `HEADER`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "OTPAuth")]
    pub otp_auth: String,
}

impl Record {
    /// A record is kept only if it can be identified by title or URL.
    pub fn is_admissible(&self) -> bool {
        !self.title.is_empty() || !self.url.is_empty()
    }
}
