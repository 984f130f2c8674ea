use crate::config::{
    DEFAULT_DEDUP_THRESHOLD, DEFAULT_MAX_SKILLS, DEFAULT_SKILL_CATEGORY, MAX_SIMILARITY,
};
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

impl PersonalInfo {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: default_category(),
            frequency: default_frequency(),
            confidence: default_confidence(),
        }
    }
}

fn default_category() -> String {
    DEFAULT_SKILL_CATEGORY.to_string()
}

fn default_frequency() -> u32 {
    1
}

fn default_confidence() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub graduation_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One structured resume: the output of extraction and the unit of merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl ParsedResume {
    /// Clears every section not listed. Summary, certifications and languages are kept.
    pub fn retain_sections(&mut self, include: &[ResumeSection]) {
        let keeps = |section: ResumeSection| include.contains(&section);

        if !keeps(ResumeSection::PersonalInfo) {
            self.personal_info = PersonalInfo::default();
        }
        if !keeps(ResumeSection::Skills) {
            self.skills.clear();
        }
        if !keeps(ResumeSection::Experience) {
            self.experience.clear();
        }
        if !keeps(ResumeSection::Education) {
            self.education.clear();
        }
        if !keeps(ResumeSection::Projects) {
            self.projects.clear();
        }
    }
}

/// Sections a caller may include in or drop from the merged output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    PersonalInfo,
    Skills,
    Experience,
    Education,
    Projects,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 5] = [
        ResumeSection::PersonalInfo,
        ResumeSection::Skills,
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Projects,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceSort {
    #[default]
    Date,
    /// Accepted but ranked exactly like `Date`.
    Relevance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    pub include_sections: Vec<ResumeSection>,
    pub max_skills: Option<usize>,
    pub sort_experience_by: ExperienceSort,
    #[serde(deserialize_with = "similarity_threshold")]
    pub deduplicate_threshold: u8,
}

fn similarity_threshold<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;
    if value > MAX_SIMILARITY {
        return Err(de::Error::custom(format!(
            "deduplicate_threshold must be between 0 and {MAX_SIMILARITY}, got {value}"
        )));
    }
    Ok(value)
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            include_sections: ResumeSection::ALL.to_vec(),
            max_skills: Some(DEFAULT_MAX_SKILLS),
            sort_experience_by: ExperienceSort::Date,
            deduplicate_threshold: DEFAULT_DEDUP_THRESHOLD,
        }
    }
}
