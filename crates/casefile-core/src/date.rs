//! Document date extraction.
//!
//! Korean court documents and briefs print their date either as
//! `2026. 2. 10.` or as `2026년 2월 10일`. The first such date in the text
//! becomes the `YYMMDD` prefix of the renamed file.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})[.년]\s*([0-9]{1,2})[.월]\s*([0-9]{1,2})[.일]?")
        .expect("date pattern is valid")
});

/// Find the first date in `text` and format it as `YYMMDD`.
///
/// Month and day are zero-padded but not range-checked: `2026.13.40` yields
/// `"261340"`.
pub fn find_date(text: &str) -> Option<String> {
    let caps = DATE_RE.captures(text)?;
    let year = &caps[1];
    Some(format!("{}{:0>2}{:0>2}", &year[2..], &caps[2], &caps[3]))
}

/// Date of the document, falling back to `today` when the text has none.
pub fn extract_date_or(text: &str, today: NaiveDate) -> String {
    find_date(text).unwrap_or_else(|| {
        tracing::debug!("no date in document text, using {today}");
        today.format("%y%m%d").to_string()
    })
}

/// Date of the document, falling back to the current local date.
pub fn extract_date(text: &str) -> String {
    extract_date_or(text, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_date_with_spaces() {
        assert_eq!(find_date("2026. 2. 10."), Some("260210".into()));
    }

    #[test]
    fn korean_unit_glyphs() {
        assert_eq!(find_date("작성일 2025년 11월 3일"), Some("251103".into()));
    }

    #[test]
    fn mixed_separators() {
        assert_eq!(find_date("2024.7월1"), Some("240701".into()));
    }

    #[test]
    fn first_match_wins() {
        let text = "접수 2024. 12. 1.\n선고 2025. 1. 15.";
        assert_eq!(find_date(text), Some("241201".into()));
    }

    #[test]
    fn digits_pass_through_unvalidated() {
        assert_eq!(find_date("2026.13.40"), Some("261340".into()));
    }

    #[test]
    fn no_date_returns_none() {
        assert_eq!(find_date("사건번호 없음"), None);
        assert_eq!(find_date("26. 2. 10."), None);
    }

    #[test]
    fn result_is_six_digits_with_year_suffix() {
        for text in ["1999. 1. 2.", "2031년 12월 31일", "본문 2008.06.09 끝"] {
            let date = find_date(text).unwrap();
            assert_eq!(date.len(), 6, "{text}");
            assert!(date.chars().all(|c| c.is_ascii_digit()), "{text}");
        }
        assert!(find_date("1999. 1. 2.").unwrap().starts_with("99"));
        assert!(find_date("2008.06.09").unwrap().starts_with("08"));
    }

    #[test]
    fn fallback_uses_supplied_day() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(extract_date_or("날짜 없음", today), "260307");
        assert_eq!(extract_date_or("2020. 1. 1.", today), "200101");
    }

    #[test]
    fn fallback_is_today() {
        let expected = Local::now().date_naive().format("%y%m%d").to_string();
        assert_eq!(extract_date("no date here"), expected);
    }
}
