use crate::builders::{build_education, build_experience, build_projects, build_skills};
use crate::fields::extract_personal_info;
use crate::models::ParsedResume;
use crate::sections::{Section, SectionSegmenter};
use crate::stats::ExtractionStats;
use crate::taxonomy::SkillTaxonomy;
use rayon::prelude::*;
use tracing::{debug, info};

/// Turns raw document text into a [`ParsedResume`].
///
/// The extractor owns its skill taxonomy and compiled section matchers; both are read-only
/// after construction, so one instance can serve any number of documents and threads.
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    taxonomy: SkillTaxonomy,
    segmenter: SectionSegmenter,
}

impl ResumeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_taxonomy(taxonomy: SkillTaxonomy) -> Self {
        Self {
            taxonomy,
            segmenter: SectionSegmenter::new(),
        }
    }

    /// Never fails: missing fields stay `None` and missing sections come back empty.
    pub fn extract(&self, text: &str) -> ParsedResume {
        let experience_text = self.segmenter.section_text(text, Section::Experience);
        let education_text = self.segmenter.section_text(text, Section::Education);
        let projects_text = self.segmenter.section_text(text, Section::Projects);

        let resume = ParsedResume {
            personal_info: extract_personal_info(text),
            skills: build_skills(text, &self.taxonomy),
            experience: build_experience(experience_text),
            education: build_education(education_text),
            projects: build_projects(projects_text),
            ..Default::default()
        };

        debug!(
            chars = text.len(),
            skills = resume.skills.len(),
            experience = resume.experience.len(),
            education = resume.education.len(),
            projects = resume.projects.len(),
            "Extracted resume"
        );

        resume
    }

    /// Extracts every document in parallel. Output order matches input order.
    pub fn extract_all<S>(&self, texts: &[S], stats: &ExtractionStats) -> Vec<ParsedResume>
    where
        S: AsRef<str> + Sync,
    {
        let resumes: Vec<ParsedResume> = texts
            .par_iter()
            .map(|text| {
                let text = text.as_ref();
                if text.trim().is_empty() {
                    stats.inc_empty();
                }
                let resume = self.extract(text);
                stats.record(&resume);
                resume
            })
            .collect();

        info!(
            documents = stats.documents(),
            empty = stats.empty(),
            skills = stats.skills(),
            "Extraction batch complete"
        );

        resumes
    }
}
