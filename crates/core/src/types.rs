/// All timestamps are UTC and serialize as RFC 3339 strings.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
