use chrono::{DateTime, NaiveDateTime};

/// Format a backend timestamp as dd/mm/yyyy HH:MM:SS for display.
/// The API emits ISO-8601, sometimes without a timezone offset; anything
/// unparseable is shown as-is.
pub fn format_datetime(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y %H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Percent-encode a query-string value (RFC 3986 unreserved characters
/// pass through untouched).
pub fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_query_characters() {
        assert_eq!(encode_query_value("router down"), "router%20down");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_value("plain-text_1.0~ok"), "plain-text_1.0~ok");
    }

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_datetime("2025-03-04T09:05:06Z"), "04/03/2025 09:05:06");
    }

    #[test]
    fn formats_naive_timestamps_with_fraction() {
        assert_eq!(format_datetime("2025-03-04T09:05:06.123456"), "04/03/2025 09:05:06");
    }

    #[test]
    fn passes_through_unparseable_values() {
        assert_eq!(format_datetime("yesterday"), "yesterday");
    }
}
