use chrono::DateTime;

/// Render a record's timestamp cell. The service passes CSV timestamps
/// through verbatim, so parse leniently and fall back to the raw text.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "--".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(value) => value.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
