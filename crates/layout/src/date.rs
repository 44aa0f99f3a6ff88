use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Malformed date '{input}': expected YEAR-MONTH-DAY, found {parts} dash-separated part(s)")]
    Malformed { input: String, parts: usize },
}

/// Rewrites a `YEAR-MONTH-DAY` date as `DAY-MONTH-YEAR`.
///
/// The three components are copied verbatim: no zero padding is added and no
/// calendar check is made. An empty input yields an empty string.
pub fn format_date(date: &str) -> Result<String, DateError> {
    if date.is_empty() {
        return Ok(String::new());
    }

    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => Ok(format!("{}-{}-{}", day, month, year)),
        _ => Err(DateError::Malformed {
            input: date.to_string(),
            parts: parts.len(),
        }),
    }
}
