use crate::config::{
    EXTRACTED_SKILL_CONFIDENCE, MIN_ENTRY_LINE_CHARS, PLACEHOLDER_INSTITUTION, UNKNOWN_COMPANY,
};
use crate::models::{Education, Experience, Project, Skill};
use crate::taxonomy::SkillTaxonomy;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

/// Flat keyword scan: one skill per taxonomy token found anywhere in the text.
pub fn build_skills(text: &str, taxonomy: &SkillTaxonomy) -> Vec<Skill> {
    let lowered = text.to_lowercase();

    taxonomy
        .entries()
        .filter(|(_, keyword)| lowered.contains(keyword))
        .map(|(category, keyword)| Skill {
            name: title_case(keyword),
            category: category.to_string(),
            frequency: 1,
            confidence: EXTRACTED_SKILL_CONFIDENCE,
        })
        .collect()
}

/// A dated line opens a new entry; other lines become bullets of the open entry.
///
/// The year only marks the header line. Dates are not captured, so extracted entries
/// carry no `start_date` and are never `current`.
pub fn build_experience(section: &str) -> Vec<Experience> {
    let mut entries = Vec::new();
    let mut current: Option<Experience> = None;

    for line in non_blank_lines(section) {
        if YEAR_REGEX.is_match(line) {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            current = Some(experience_header(line));
        } else if let Some(entry) = current.as_mut() {
            entry.description.push(line.to_string());
        }
    }

    if let Some(done) = current {
        entries.push(done);
    }

    entries
}

fn experience_header(line: &str) -> Experience {
    let (title, company) = if line.contains('|') {
        let mut parts = line.split('|').map(str::trim);
        let title = parts.next().unwrap_or_default().to_string();
        let company = parts.next().unwrap_or(UNKNOWN_COMPANY).to_string();
        (title, company)
    } else {
        (line.to_string(), UNKNOWN_COMPANY.to_string())
    };

    Experience {
        title,
        company,
        ..Default::default()
    }
}

pub fn build_education(section: &str) -> Vec<Education> {
    entry_lines(section)
        .map(|line| Education {
            degree: line.to_string(),
            institution: PLACEHOLDER_INSTITUTION.to_string(),
            ..Default::default()
        })
        .collect()
}

/// `name - description` when the line has a hyphen, otherwise the line is both.
pub fn build_projects(section: &str) -> Vec<Project> {
    entry_lines(section)
        .map(|line| {
            let (name, description) = match line.split_once('-') {
                Some((name, description)) => (name.trim(), description.trim()),
                None => (line, line),
            };
            Project {
                name: name.to_string(),
                description: description.to_string(),
                ..Default::default()
            }
        })
        .collect()
}

fn non_blank_lines(section: &str) -> impl Iterator<Item = &str> {
    section.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn entry_lines(section: &str) -> impl Iterator<Item = &str> {
    non_blank_lines(section).filter(|line| line.chars().count() > MIN_ENTRY_LINE_CHARS)
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest,
/// so `node.js` becomes `Node.Js` and `github actions` becomes `Github Actions`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_examples() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case(".net"), ".Net");
        assert_eq!(title_case("github actions"), "Github Actions");
        assert_eq!(title_case("3d modeling"), "3D Modeling");
    }

    #[test]
    fn skills_match_anywhere_in_text() {
        let text = "I once read a RUST book and used Docker.";
        let skills = build_skills(text, &SkillTaxonomy::default());
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Docker"]);
        assert_eq!(skills[0].category, "programming");
        assert_eq!(skills[1].category, "cloud");
        assert!(skills.iter().all(|s| s.frequency == 1 && s.confidence == 0.9));
    }

    #[test]
    fn skills_substring_semantics() {
        // "javascript" also contains "java"
        let skills = build_skills("JavaScript", &SkillTaxonomy::default());
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Javascript", "Java"]);
    }

    #[test]
    fn skills_one_per_token_per_document() {
        let skills = build_skills("react react REACT", &SkillTaxonomy::default());
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn skills_empty_text() {
        assert!(build_skills("", &SkillTaxonomy::default()).is_empty());
    }

    #[test]
    fn experience_split_on_pipe() {
        let section = "\nSenior Engineer | Acme Corp | 2020 - Present\nLed team\nShipped product\n";
        let entries = build_experience(section);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.title, "Senior Engineer");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.description, vec!["Led team", "Shipped product"]);
        assert_eq!(e.start_date, None);
        assert_eq!(e.end_date, None);
        assert!(!e.current);
    }

    #[test]
    fn experience_without_pipe_uses_unknown_company() {
        let entries = build_experience("Developer at Foo 2016-2018\nWrote code");
        assert_eq!(entries[0].title, "Developer at Foo 2016-2018");
        assert_eq!(entries[0].company, "Unknown");
        assert_eq!(entries[0].start_date, None);
        assert_eq!(entries[0].end_date, None);
    }

    #[test]
    fn experience_flushes_each_dated_line() {
        let section = "Dev | A | 2021\nbullet a\nDev | B | 2019\nbullet b1\nbullet b2";
        let entries = build_experience(section);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "A");
        assert_eq!(entries[0].description, vec!["bullet a"]);
        assert_eq!(entries[1].company, "B");
        assert_eq!(entries[1].description, vec!["bullet b1", "bullet b2"]);
    }

    #[test]
    fn experience_drops_lines_before_first_entry() {
        let entries = build_experience("intro line\nDev | A | 2021");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].description.is_empty());
    }

    #[test]
    fn experience_empty_section() {
        assert!(build_experience("").is_empty());
        assert!(build_experience("no dates here\nat all").is_empty());
    }

    #[test]
    fn education_skips_short_lines() {
        let section = "\nBSc\nBSc Computer Science\n  MSc Data  \n";
        let entries = build_education(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "BSc Computer Science");
        assert_eq!(entries[0].institution, "Parsed from resume");
    }

    #[test]
    fn education_line_of_exactly_ten_chars_is_skipped() {
        assert!(build_education("abcdefghij").is_empty());
        assert_eq!(build_education("abcdefghijk").len(), 1);
    }

    #[test]
    fn projects_split_on_first_hyphen() {
        let entries = build_projects("Portfolio Site - built with React - and Rust");
        assert_eq!(entries[0].name, "Portfolio Site");
        assert_eq!(entries[0].description, "built with React - and Rust");
    }

    #[test]
    fn projects_hyphenated_name_splits_inside_name() {
        let entries = build_projects("Resume-Merger - merges resumes");
        assert_eq!(entries[0].name, "Resume");
        assert_eq!(entries[0].description, "Merger - merges resumes");
    }

    #[test]
    fn projects_without_hyphen_repeat_line() {
        let entries = build_projects("Compiler written in Rust");
        assert_eq!(entries[0].name, "Compiler written in Rust");
        assert_eq!(entries[0].description, "Compiler written in Rust");
        assert!(entries[0].technologies.is_empty());
    }
}
