//! Text formatting helpers used while resolving pages.

use chrono::NaiveDate;

/// End token of a date range for an ongoing experience.
pub const PRESENT_LABEL: &str = "Present";

/// Trimmed text, or `None` when blank.
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Long-form date: `2024-01-15` → "15 January 2024", `2020-01` → "January 2020".
///
/// Values that are neither shape are returned verbatim; blank values yield `None`.
pub fn format_date(raw: &str) -> Option<String> {
    let raw = non_empty(raw)?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Some(date.format("%-d %B %Y").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date.format("%B %Y").to_string());
    }
    Some(raw)
}

/// "start - end" with the end replaced by [`PRESENT_LABEL`] when `current` is set.
pub fn date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let start = format_date(start);
    let end = if current {
        Some(PRESENT_LABEL.to_string())
    } else {
        format_date(end)
    };
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{start} - {end}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

/// Splits free text into paragraphs on blank lines. CRLF input is treated
/// as LF.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .filter_map(non_empty)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_date() {
        assert_eq!(format_date("2024-01-15").as_deref(), Some("15 January 2024"));
        assert_eq!(format_date("2023-11-03").as_deref(), Some("3 November 2023"));
    }

    #[test]
    fn test_format_month_date() {
        assert_eq!(format_date("2020-01").as_deref(), Some("January 2020"));
    }

    #[test]
    fn test_malformed_date_is_verbatim() {
        assert_eq!(format_date("spring 2019").as_deref(), Some("spring 2019"));
        assert_eq!(format_date("2020-13-45").as_deref(), Some("2020-13-45"));
    }

    #[test]
    fn test_blank_date_is_omitted() {
        assert_eq!(format_date(""), None);
        assert_eq!(format_date("   "), None);
    }

    #[test]
    fn test_current_overrides_any_end_date() {
        assert_eq!(
            date_range("2020-01", "", true).as_deref(),
            Some("January 2020 - Present")
        );
        assert_eq!(
            date_range("2020-01", "2022-06", true).as_deref(),
            Some("January 2020 - Present")
        );
        assert_eq!(date_range("", "2022-06", true).as_deref(), Some("Present"));
    }

    #[test]
    fn test_finished_range() {
        assert_eq!(
            date_range("2018-09", "2022-06", false).as_deref(),
            Some("September 2018 - June 2022")
        );
        assert_eq!(date_range("2018-09", "", false).as_deref(), Some("September 2018"));
        assert_eq!(date_range("", "", false), None);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "First line.\nStill first.\n\n\n  Second.  \n\n";
        assert_eq!(paragraphs(text), ["First line.\nStill first.", "Second."]);
    }

    #[test]
    fn test_paragraphs_accept_windows_line_endings() {
        let crlf = "Dear team,\r\n\r\nI am writing to apply.\r\nThanks.\r\n\r\nRegards";
        assert_eq!(
            paragraphs(crlf),
            ["Dear team,", "I am writing to apply.\nThanks.", "Regards"],
            "CRLF blank lines must separate paragraphs"
        );
        assert_eq!(paragraphs(crlf), paragraphs(&crlf.replace("\r\n", "\n")));
    }
}
