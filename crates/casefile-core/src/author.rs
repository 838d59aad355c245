//! Author extraction: issuing court, law firm, or attorney.
//!
//! Korean filings sign off at the bottom of the last page, so only the tail
//! of the text is searched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tail_chars;

/// Returned when no rule matches.
pub const UNKNOWN_AUTHOR: &str = "작성자미상";

/// Size of the tail window, in characters.
pub const TAIL_CHARS: usize = 1000;

const LAW_FIRM: &str = "법무법인";

static COURT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[가-힣]+(?:지방|고등|가정|행정|회생)법원[가-힣]*(?:지원)?")
        .expect("court pattern is valid")
});

static LAW_FIRM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"법무법인\s*([가-힣]+)").expect("law firm pattern is valid"));

static ATTORNEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"변호사\s*([가-힣]{2,4})").expect("attorney pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorRule {
    Court,
    LawFirm,
    Attorney,
}

/// Tried in order; first match wins.
pub const AUTHOR_RULES: &[AuthorRule] = &[
    AuthorRule::Court,
    AuthorRule::LawFirm,
    AuthorRule::Attorney,
];

impl AuthorRule {
    pub fn apply(self, tail: &str) -> Option<String> {
        match self {
            AuthorRule::Court => find_court(tail),
            AuthorRule::LawFirm => find_law_firm(tail),
            AuthorRule::Attorney => find_attorney(tail),
        }
    }
}

/// Court name such as `수원지방법원` or `수원지방법원안산지원`, verbatim,
/// including any Hangul run glued to it.
pub fn find_court(text: &str) -> Option<String> {
    COURT_RE.find(text).map(|m| m.as_str().to_string())
}

/// Law firm name with the `법무법인` prefix re-attached and no separator.
pub fn find_law_firm(text: &str) -> Option<String> {
    let caps = LAW_FIRM_RE.captures(text)?;
    Some(format!("{LAW_FIRM}{}", &caps[1]))
}

/// Personal name following `변호사`.
pub fn find_attorney(text: &str) -> Option<String> {
    ATTORNEY_RE.captures(text).map(|caps| caps[1].to_string())
}

/// Author of the document, searched in the last [`TAIL_CHARS`] characters.
pub fn extract_author(text: &str) -> String {
    let tail = tail_chars(text, TAIL_CHARS);
    AUTHOR_RULES
        .iter()
        .find_map(|rule| {
            let author = rule.apply(tail)?;
            tracing::debug!(?rule, %author, "author matched");
            Some(author)
        })
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_court() {
        assert_eq!(extract_author("\n2026. 2. 10.\n수원지방법원\n"), "수원지방법원");
    }

    #[test]
    fn court_wins_over_earlier_law_firm() {
        let text = "원고 소송대리인 법무법인가나\n담당변호사 김철수\n수원지방법원 귀중";
        assert_eq!(extract_author(text), "수원지방법원");
    }

    #[test]
    fn court_kinds() {
        assert_eq!(find_court("서울고등법원"), Some("서울고등법원".into()));
        assert_eq!(find_court("부산가정법원"), Some("부산가정법원".into()));
        assert_eq!(find_court("서울행정법원"), Some("서울행정법원".into()));
        assert_eq!(find_court("서울회생법원"), Some("서울회생법원".into()));
        assert_eq!(find_court("대법원"), None);
    }

    #[test]
    fn branch_court_suffix() {
        assert_eq!(
            find_court("수원지방법원안산지원 판사"),
            Some("수원지방법원안산지원".into())
        );
    }

    #[test]
    fn trailing_hangul_run_is_kept() {
        assert_eq!(
            find_court("서울중앙지방법원민사부 판결"),
            Some("서울중앙지방법원민사부".into())
        );
    }

    #[test]
    fn law_firm_joined_without_separator() {
        assert_eq!(extract_author("위 대리인\n법무법인 가나\n"), "법무법인가나");
        assert_eq!(extract_author("법무법인가나"), "법무법인가나");
    }

    #[test]
    fn attorney_name() {
        assert_eq!(extract_author("원고 대리인 변호사 홍길동\n"), "홍길동");
    }

    #[test]
    fn law_firm_beats_attorney() {
        let text = "변호사 홍길동\n법무법인 다라";
        assert_eq!(extract_author(text), "법무법인다라");
    }

    #[test]
    fn unknown_author() {
        assert_eq!(extract_author("서명 없음 ABC"), "작성자미상");
        assert_eq!(extract_author(""), UNKNOWN_AUTHOR);
    }

    #[test]
    fn only_the_tail_is_searched() {
        let mut text = String::from("수원지방법원\n");
        text.push_str(&"가".repeat(TAIL_CHARS));
        assert_eq!(extract_author(&text), UNKNOWN_AUTHOR);

        let mut text = String::from("서울고등법원\n");
        text.push_str(&" ".repeat(TAIL_CHARS - 10));
        assert_eq!(extract_author(&text), "서울고등법원");
    }
}
