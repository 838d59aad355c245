//! Target filename composition.
//!
//! Format: `{date}_{title}({client}vs{opponent}[, {case}])_{author}.pdf`,
//! with characters that Windows and POSIX filesystems reject stripped out.

use crate::ExtractedMetadata;

/// Characters removed from composed filenames.
pub const UNSAFE_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Remove every [`UNSAFE_CHARS`] character, keeping everything else in order.
pub fn sanitize_filename(name: &str) -> String {
    name.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect()
}

/// Compose the sanitized target filename for one document.
pub fn compose_filename(meta: &ExtractedMetadata, client: &str, opponent: &str) -> String {
    let case_part = meta
        .case_number
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|c| format!(", {c}"))
        .unwrap_or_default();

    let raw = format!(
        "{}_{}({client}vs{opponent}{case_part})_{}.pdf",
        meta.date, meta.title, meta.author
    );
    sanitize_filename(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parties;

    fn meta(case_number: Option<&str>) -> ExtractedMetadata {
        ExtractedMetadata {
            date: "260210".into(),
            title: "소장".into(),
            author: "법무법인가나".into(),
            case_number: case_number.map(str::to_string),
        }
    }

    #[test]
    fn without_case_number() {
        assert_eq!(
            compose_filename(&meta(None), "주식회사준", "세움엔키움주식회사"),
            "260210_소장(주식회사준vs세움엔키움주식회사)_법무법인가나.pdf"
        );
    }

    #[test]
    fn with_case_number() {
        assert_eq!(
            compose_filename(&meta(Some("2026카단500796")), "갑", "을"),
            "260210_소장(갑vs을, 2026카단500796)_법무법인가나.pdf"
        );
    }

    #[test]
    fn empty_case_number_is_omitted() {
        assert_eq!(
            compose_filename(&meta(Some("")), "갑", "을"),
            "260210_소장(갑vs을)_법무법인가나.pdf"
        );
    }

    #[test]
    fn unsafe_characters_removed_everywhere() {
        let m = ExtractedMetadata {
            date: "260210".into(),
            title: "답변서<1/2>".into(),
            author: "A:B*C?".into(),
            case_number: Some("2026\"가\"1".into()),
        };
        let name = compose_filename(&m, "갑|병", "을\\정");
        assert_eq!(name, "260210_답변서12(갑병vs을정, 2026가1)_ABC.pdf");
        assert!(!name.contains(UNSAFE_CHARS));
    }

    #[test]
    fn composing_is_deterministic() {
        let m = meta(Some("2024가합1234"));
        assert_eq!(
            compose_filename(&m, "갑", "을"),
            compose_filename(&m, "갑", "을")
        );
    }

    #[test]
    fn sanitize_keeps_other_characters() {
        assert_eq!(sanitize_filename("a b(c)_d, e.pdf"), "a b(c)_d, e.pdf");
        assert_eq!(sanitize_filename(r#"\/:*?"<>|"#), "");
    }

    #[test]
    fn end_to_end_brief() {
        let text = "2026. 2. 10.\n소장\n...\n법무법인가나\n";
        let parties = Parties::new("주식회사준", "세움엔키움주식회사");
        let meta = parties.extract(text);
        assert_eq!(
            compose_filename(&meta, &parties.client, &parties.opponent),
            "260210_소장(주식회사준vs세움엔키움주식회사)_법무법인가나.pdf"
        );
    }
}
