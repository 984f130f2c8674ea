//! Keyword-anchored section segmentation.
//!
//! Each extractable section owns one [`SectionMatcher`]: a case-insensitive, dot-matches-newline
//! regex that starts at the first header keyword and lazily captures up to the first keyword of
//! any other section, or the end of the text. When several header variants could match, the
//! leftmost match wins and, at equal positions, the first listed alternative.

use regex::Regex;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
    Projects,
    Skills,
}

impl Section {
    /// Sections whose body text is segmented and handed to a record builder.
    pub const SEGMENTED: [Section; 3] = [Section::Experience, Section::Education, Section::Projects];

    const ALL: [Section; 4] = [
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Skills,
    ];

    /// Header alternatives, tried in this order.
    pub fn header_keywords(self) -> &'static [&'static str] {
        match self {
            Section::Experience => &["experience", "work history", "employment"],
            Section::Education => &["education"],
            Section::Projects => &["projects"],
            Section::Skills => &["skills"],
        }
    }

    /// The keyword that ends any other section's body.
    pub fn boundary_keyword(self) -> &'static str {
        self.header_keywords()[0]
    }
}

#[derive(Debug, Clone)]
pub struct SectionMatcher {
    section: Section,
    pattern: Regex,
}

impl SectionMatcher {
    pub fn new(section: Section) -> Self {
        let headers = alternation(section.header_keywords().iter().copied());
        let terminators = alternation(
            Section::ALL
                .iter()
                .filter(|other| **other != section)
                .map(|other| other.boundary_keyword()),
        );
        let pattern = Regex::new(&format!(r"(?is)(?:{headers})(.*?)(?:{terminators}|$)"))
            .expect("section keywords are escaped literals");
        Self { section, pattern }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Byte range of the section body, or `None` when no header keyword appears.
    pub fn span(&self, text: &str) -> Option<Range<usize>> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.range())
    }
}

fn alternation<'a>(keywords: impl Iterator<Item = &'a str>) -> String {
    keywords.map(regex::escape).collect::<Vec<_>>().join("|")
}

/// The set of named matchers used by the extractor, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct SectionSegmenter {
    matchers: Vec<SectionMatcher>,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSegmenter {
    pub fn new() -> Self {
        Self {
            matchers: Section::SEGMENTED
                .iter()
                .map(|s| SectionMatcher::new(*s))
                .collect(),
        }
    }

    pub fn matcher(&self, section: Section) -> Option<&SectionMatcher> {
        self.matchers.iter().find(|m| m.section() == section)
    }

    /// Body text of `section`, or `""` when the section is absent or not segmented.
    pub fn section_text<'t>(&self, text: &'t str, section: Section) -> &'t str {
        self.matcher(section)
            .and_then(|m| m.span(text))
            .map(|range| &text[range])
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        Summary of my career\n\
        Experience\n\
        Engineer | Acme | 2020 - Present\n\
        Built things\n\
        Education\n\
        BSc Computer Science, State University\n\
        Projects\n\
        Portfolio - personal site\n\
        Skills\n\
        Rust, Python\n";

    #[test]
    fn experience_stops_at_education() {
        let seg = SectionSegmenter::new();
        let body = seg.section_text(RESUME, Section::Experience);
        assert!(body.contains("Engineer | Acme"));
        assert!(body.contains("Built things"));
        assert!(!body.contains("BSc"));
    }

    #[test]
    fn education_stops_at_projects() {
        let seg = SectionSegmenter::new();
        let body = seg.section_text(RESUME, Section::Education);
        assert_eq!(body.trim(), "BSc Computer Science, State University");
    }

    #[test]
    fn projects_stops_at_skills() {
        let seg = SectionSegmenter::new();
        let body = seg.section_text(RESUME, Section::Projects);
        assert_eq!(body.trim(), "Portfolio - personal site");
    }

    #[test]
    fn last_section_runs_to_end_of_text() {
        let seg = SectionSegmenter::new();
        let text = "EDUCATION\nMSc Physics, Some Institute\nPhD Physics, Other Institute";
        let body = seg.section_text(text, Section::Education);
        assert!(body.contains("MSc Physics"));
        assert!(body.contains("PhD Physics"));
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let seg = SectionSegmenter::new();
        let text = "WORK HISTORY\nDeveloper 2019\nSKILLS\nGo";
        assert_eq!(
            seg.section_text(text, Section::Experience).trim(),
            "Developer 2019"
        );
    }

    #[test]
    fn missing_header_yields_empty() {
        let seg = SectionSegmenter::new();
        assert_eq!(seg.section_text("Just a name\nand a line", Section::Projects), "");
        assert_eq!(seg.section_text("", Section::Experience), "");
    }

    #[test]
    fn leftmost_keyword_wins() {
        let seg = SectionSegmenter::new();
        let text = "Five years of experience in teams\nEmployment\nDev 2020";
        let body = seg.section_text(text, Section::Experience);
        assert!(body.starts_with(" in teams"));
    }

    #[test]
    fn span_points_into_original_text() {
        let matcher = SectionMatcher::new(Section::Projects);
        let text = "Projects: alpha project";
        let range = matcher.span(text).unwrap();
        assert_eq!(&text[range], ": alpha project");
    }

    #[test]
    fn skills_has_no_segment_matcher() {
        let seg = SectionSegmenter::new();
        assert!(seg.matcher(Section::Skills).is_none());
        assert_eq!(seg.section_text("Skills\nRust", Section::Skills), "");
    }
}
