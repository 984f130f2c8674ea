use crate::config::{DESCRIPTION_SEPARATOR, MIN_RESUMES, MISSING_START_DATE};
use crate::dedup::{normalize_key, FuzzyIndex, Upsert};
use crate::error::MergeError;
use crate::models::{
    Education, Experience, ExperienceSort, MergeSettings, ParsedResume, PersonalInfo, Project,
    Skill,
};
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Merges N resumes into one. Every section is always computed; dropping sections listed
/// outside `settings.include_sections` is left to the caller.
pub fn merge_resumes(
    resumes: &[ParsedResume],
    settings: &MergeSettings,
) -> Result<ParsedResume, MergeError> {
    if resumes.len() < MIN_RESUMES {
        return Err(MergeError::TooFewResumes {
            count: resumes.len(),
            min: MIN_RESUMES,
        });
    }

    let threshold = settings.deduplicate_threshold;

    let merged = ParsedResume {
        personal_info: merge_personal_info(resumes.iter().map(|r| &r.personal_info)),
        summary: merge_summary(resumes.iter().map(|r| r.summary.as_deref())),
        skills: merge_skills(
            resumes.iter().map(|r| r.skills.as_slice()),
            threshold,
            settings.max_skills,
        ),
        experience: merge_experience(
            resumes.iter().map(|r| r.experience.as_slice()),
            settings.sort_experience_by,
        ),
        education: merge_education(resumes.iter().map(|r| r.education.as_slice())),
        projects: merge_projects(resumes.iter().map(|r| r.projects.as_slice()), threshold),
        certifications: merge_string_list(resumes.iter().map(|r| r.certifications.as_slice())),
        languages: merge_string_list(resumes.iter().map(|r| r.languages.as_slice())),
    };

    info!(
        resumes = resumes.len(),
        skills = merged.skills.len(),
        experience = merged.experience.len(),
        education = merged.education.len(),
        projects = merged.projects.len(),
        "Merge complete"
    );

    Ok(merged)
}

/// Per field, the first non-empty value in input order wins.
pub fn merge_personal_info<'a>(infos: impl IntoIterator<Item = &'a PersonalInfo>) -> PersonalInfo {
    let mut merged = PersonalInfo::default();

    for info in infos {
        fill(&mut merged.name, &info.name);
        fill(&mut merged.email, &info.email);
        fill(&mut merged.phone, &info.phone);
        fill(&mut merged.location, &info.location);
        fill(&mut merged.linkedin, &info.linkedin);
        fill(&mut merged.github, &info.github);
        fill(&mut merged.website, &info.website);
    }

    merged
}

fn fill(target: &mut Option<String>, source: &Option<String>) {
    if target.is_some() {
        return;
    }
    if let Some(value) = source.as_deref().filter(|v| !v.is_empty()) {
        *target = Some(value.to_string());
    }
}

/// Fuzzy-dedups skills, counts mentions, keeps the highest confidence, then ranks by
/// (frequency, confidence) descending and truncates to `max_skills`.
pub fn merge_skills<'a>(
    lists: impl IntoIterator<Item = &'a [Skill]>,
    threshold: u8,
    max_skills: Option<usize>,
) -> Vec<Skill> {
    let mut index = FuzzyIndex::new(threshold);
    let mut mentions = 0usize;

    for skill in lists.into_iter().flatten() {
        mentions += 1;
        let seed = Skill {
            frequency: 1,
            ..skill.clone()
        };
        index.upsert(normalize_key(&skill.name), seed, |agg, new| {
            agg.frequency += 1;
            agg.confidence = agg.confidence.max(new.confidence);
        });
    }

    let mut merged = index.into_values();
    merged.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| b.confidence.total_cmp(&a.confidence))
    });

    let unique = merged.len();
    if let Some(max) = max_skills {
        merged.truncate(max);
    }

    debug!(mentions, unique, kept = merged.len(), "Merged skills");
    merged
}

/// Exact-key dedup on (company, title, start_date), first occurrence kept verbatim, then
/// current roles first and newest start date first.
pub fn merge_experience<'a>(
    lists: impl IntoIterator<Item = &'a [Experience]>,
    sort: ExperienceSort,
) -> Vec<Experience> {
    let mut seen = FxHashSet::default();
    let mut merged = Vec::new();

    for exp in lists.into_iter().flatten() {
        let key = (
            exp.company.to_lowercase(),
            exp.title.to_lowercase(),
            exp.start_date.as_deref().unwrap_or("").to_lowercase(),
        );
        if seen.insert(key) {
            merged.push(exp.clone());
        }
    }

    if sort == ExperienceSort::Relevance {
        debug!("Relevance ranking is not implemented, sorting experience by date");
    }
    sort_by_date(&mut merged);

    debug!(unique = merged.len(), "Merged experience");
    merged
}

/// Start dates compare as raw strings; a missing or empty date sorts as `"0000"`.
fn sort_by_date(entries: &mut [Experience]) {
    fn start(e: &Experience) -> &str {
        e.start_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING_START_DATE)
    }
    entries.sort_by(|a, b| (b.current, start(b)).cmp(&(a.current, start(a))));
}

/// Exact-key dedup on (institution, degree); first-seen order is kept.
pub fn merge_education<'a>(lists: impl IntoIterator<Item = &'a [Education]>) -> Vec<Education> {
    let mut seen = FxHashSet::default();
    let mut merged = Vec::new();

    for edu in lists.into_iter().flatten() {
        let key = (edu.institution.to_lowercase(), edu.degree.to_lowercase());
        if seen.insert(key) {
            merged.push(edu.clone());
        }
    }

    debug!(unique = merged.len(), "Merged education");
    merged
}

/// Fuzzy-dedups projects by name. Differing descriptions accumulate with `" | "` and
/// technologies are unioned.
pub fn merge_projects<'a>(
    lists: impl IntoIterator<Item = &'a [Project]>,
    threshold: u8,
) -> Vec<Project> {
    let mut index = FuzzyIndex::new(threshold);
    let mut folded = 0usize;

    for project in lists.into_iter().flatten() {
        let outcome = index.upsert(normalize_key(&project.name), project.clone(), |agg, new| {
            if new.description != agg.description {
                agg.description.push_str(DESCRIPTION_SEPARATOR);
                agg.description.push_str(&new.description);
            }
            agg.technologies = union(&agg.technologies, &new.technologies);
        });
        if matches!(outcome, Upsert::Merged { .. }) {
            folded += 1;
        }
    }

    debug!(unique = index.len(), folded, "Merged projects");
    index.into_values()
}

fn union(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    existing
        .iter()
        .chain(incoming)
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// First non-blank summary in input order.
pub fn merge_summary<'a>(summaries: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    summaries
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Case-insensitive exact dedup that keeps the first-seen spelling and order.
pub fn merge_string_list<'a>(lists: impl IntoIterator<Item = &'a [String]>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    lists
        .into_iter()
        .flatten()
        .filter(|item| !item.trim().is_empty())
        .filter(|item| seen.insert(normalize_key(item)))
        .cloned()
        .collect()
}
