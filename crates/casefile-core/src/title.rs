//! Document title extraction from the first lines of text.
//!
//! Court verdicts print a short, letter-spaced title (`결    정`) near the
//! top; briefs carry a caption line containing a filing keyword. Title rules
//! are tried in [`TITLE_RULES`] order and the first hit wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when no usable line survives cleanup.
pub const NO_TITLE: &str = "제목없음";

/// Titles printed on court-issued documents, compared with whitespace removed.
pub const COURT_TITLES: &[&str] = &["결정", "판결", "명령", "이행권고결정", "화해권고결정"];

/// Keywords that mark a lawyer's filing caption.
pub const FILING_KEYWORDS: &[&str] = &[
    "소장",
    "답변서",
    "준비서면",
    "신청서",
    "청구취지",
    "변경신청",
    "항소장",
    "상고장",
    "가압류",
];

const COURT_TITLE_WINDOW: usize = 10;
const FILING_WINDOW: usize = 5;
const FILING_MAX_CHARS: usize = 30;
const FALLBACK_CHARS: usize = 20;

static PAGE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-_=\[\]\s]*[0-9]+[-_=\[\]\s]*$").expect("page number pattern is valid")
});

/// One tier of the title heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    /// Exact short court title within the first 10 lines.
    CourtTitle,
    /// Short caption containing a filing keyword within the first 5 lines.
    FilingKeyword,
    /// First 20 characters of the first line.
    FirstLine,
}

pub const TITLE_RULES: &[TitleRule] = &[
    TitleRule::CourtTitle,
    TitleRule::FilingKeyword,
    TitleRule::FirstLine,
];

impl TitleRule {
    /// Apply this rule to cleaned lines.
    pub fn apply(self, lines: &[&str]) -> Option<String> {
        match self {
            TitleRule::CourtTitle => court_title(lines),
            TitleRule::FilingKeyword => filing_title(lines),
            TitleRule::FirstLine => first_line_title(lines),
        }
    }
}

/// Trimmed, non-empty lines with page-number decoration removed.
pub fn clean_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_page_number(line))
        .collect()
}

/// `true` for lines like `- 3 -`, `[12]` or `==4==`.
pub fn is_page_number(line: &str) -> bool {
    PAGE_NUMBER_RE.is_match(line)
}

pub fn court_title(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(COURT_TITLE_WINDOW)
        .map(|line| strip_whitespace(line))
        .find(|compact| COURT_TITLES.contains(&compact.as_str()))
}

pub fn filing_title(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(FILING_WINDOW)
        .find(|line| {
            line.chars().count() < FILING_MAX_CHARS
                && FILING_KEYWORDS.iter().any(|k| line.contains(k))
        })
        .map(|line| strip_whitespace(line))
}

pub fn first_line_title(lines: &[&str]) -> Option<String> {
    let first = lines.first()?;
    let head: String = first.chars().take(FALLBACK_CHARS).collect();
    Some(strip_whitespace(&head))
}

/// Short title of the document; never empty.
pub fn extract_title(text: &str) -> String {
    let lines = clean_lines(text);
    if lines.is_empty() {
        return NO_TITLE.to_string();
    }

    for rule in TITLE_RULES {
        if let Some(title) = rule.apply(&lines)
            && !title.is_empty()
        {
            tracing::debug!(?rule, %title, "title matched");
            return title;
        }
    }
    NO_TITLE.to_string()
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
