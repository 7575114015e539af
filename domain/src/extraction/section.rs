//! Bounded section extraction.
//!
//! Source documents spell their section headers inconsistently (a dropped
//! ligature turns "Difficulty" into "Dif culty" or "Difculty"), so a section
//! ends at the *earliest* of several candidate markers and a start marker can
//! fall back to alternatives.

use crate::core::string::collapse_whitespace;

/// One way to locate a section: a start marker and the markers that may end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRule {
    pub start: &'static str,
    pub ends: &'static [&'static str],
}

impl SectionRule {
    pub const fn new(start: &'static str, ends: &'static [&'static str]) -> Self {
        Self { start, ends }
    }

    /// Apply this rule to `text`
    pub fn extract(&self, text: &str) -> String {
        extract_section(text, self.start, self.ends)
    }
}

/// Extract the normalized text between `start_marker` and the nearest
/// following end marker.
///
/// - Only the first occurrence of `start_marker` is used; if it is absent the
///   result is `""`.
/// - End markers are searched from the end of the start marker; the earliest
///   hit wins. With no hit the section runs to the end of `text`.
/// - The result is trimmed and every whitespace run collapsed to one space.
pub fn extract_section(text: &str, start_marker: &str, end_markers: &[&str]) -> String {
    let Some(start_index) = text.find(start_marker) else {
        return String::new();
    };

    let body_start = start_index + start_marker.len();
    let rest = &text[body_start..];
    let body_end = end_markers
        .iter()
        .filter_map(|marker| rest.find(marker))
        .min()
        .unwrap_or(rest.len());

    collapse_whitespace(&rest[..body_end])
}

/// Try each rule in order and return the first non-empty section.
///
/// Returns `""` when every rule comes up empty.
pub fn extract_first_section(text: &str, rules: &[SectionRule]) -> String {
    rules
        .iter()
        .map(|rule| rule.extract(text))
        .find(|section| !section.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_start_marker_is_empty() {
        assert_eq!(extract_section("nothing here", "Rationale", &["Assessment"]), "");
    }

    #[test]
    fn test_runs_to_end_without_end_marker() {
        assert_eq!(
            extract_section("Rationale  Because\nit is. ", "Rationale", &["Assessment"]),
            "Because it is."
        );
    }

    #[test]
    fn test_earliest_end_marker_wins() {
        let text = "Rationale Because. Question Difficulty Hard Assessment Test";
        let section = extract_section(
            text,
            "Rationale",
            &["Assessment", "Question Difficulty", "Question Dif"],
        );
        assert_eq!(section, "Because.");
    }

    #[test]
    fn test_end_marker_before_start_is_ignored() {
        let text = "Assessment first Rationale body text";
        assert_eq!(
            extract_section(text, "Rationale", &["Assessment"]),
            "body text"
        );
    }

    #[test]
    fn test_only_first_start_marker_used() {
        let text = "Skill one Domain Skill two";
        assert_eq!(extract_section(text, "Skill", &["Domain"]), "one");
    }

    #[test]
    fn test_present_marker_with_empty_body() {
        // Present start marker directly followed by an end marker
        assert_eq!(extract_section("Rationale Assessment", "Rationale", &["Assessment"]), "");
    }

    #[test]
    fn test_output_is_already_normalized() {
        let out = extract_section("Rationale \n a \t\t b \n\n c ", "Rationale", &[]);
        assert_eq!(out, "a b c");
        assert_eq!(collapse_whitespace(&out), out);
    }

    #[test]
    fn test_first_section_falls_back() {
        const RULES: &[SectionRule] = &[
            SectionRule::new("Question Difficulty", &["Assessment"]),
            SectionRule::new("culty:", &["Assessment"]),
        ];
        assert_eq!(extract_first_section("Dif culty: Medium Assessment", RULES), "Medium");
        assert_eq!(
            extract_first_section("Question Difficulty Easy Assessment", RULES),
            "Easy"
        );
        assert_eq!(extract_first_section("no markers", RULES), "");
    }
}
