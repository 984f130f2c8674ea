use crate::models::ParsedResume;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected while extracting a batch of documents
#[derive(Default)]
pub struct ExtractionStats {
    pub documents_processed: AtomicU64,
    pub empty_documents: AtomicU64,
    pub skills_found: AtomicU64,
    pub experience_entries: AtomicU64,
    pub education_entries: AtomicU64,
    pub project_entries: AtomicU64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_documents(&self) {
        self.documents_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_empty(&self) {
        self.empty_documents.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_skills(&self, count: u64) {
        self.skills_found.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_experience(&self, count: u64) {
        self.experience_entries.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_education(&self, count: u64) {
        self.education_entries.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_projects(&self, count: u64) {
        self.project_entries.fetch_add(count, Ordering::Relaxed);
    }

    /// Counts one extracted resume.
    pub fn record(&self, resume: &ParsedResume) {
        self.inc_documents();
        self.add_skills(resume.skills.len() as u64);
        self.add_experience(resume.experience.len() as u64);
        self.add_education(resume.education.len() as u64);
        self.add_projects(resume.projects.len() as u64);
    }

    pub fn documents(&self) -> u64 {
        self.documents_processed.load(Ordering::Relaxed)
    }

    pub fn empty(&self) -> u64 {
        self.empty_documents.load(Ordering::Relaxed)
    }

    pub fn skills(&self) -> u64 {
        self.skills_found.load(Ordering::Relaxed)
    }

    pub fn experience(&self) -> u64 {
        self.experience_entries.load(Ordering::Relaxed)
    }

    pub fn education(&self) -> u64 {
        self.education_entries.load(Ordering::Relaxed)
    }

    pub fn projects(&self) -> u64 {
        self.project_entries.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Education, Skill};

    #[test]
    fn default_values_are_zero() {
        let stats = ExtractionStats::new();
        assert_eq!(stats.documents(), 0);
        assert_eq!(stats.empty(), 0);
        assert_eq!(stats.skills(), 0);
        assert_eq!(stats.experience(), 0);
        assert_eq!(stats.education(), 0);
        assert_eq!(stats.projects(), 0);
    }

    #[test]
    fn record_counts_sections() {
        let stats = ExtractionStats::new();
        let resume = ParsedResume {
            skills: vec![Skill::new("Rust"), Skill::new("Go")],
            education: vec![Education::default()],
            ..Default::default()
        };

        stats.record(&resume);
        stats.record(&resume);

        assert_eq!(stats.documents(), 2);
        assert_eq!(stats.skills(), 4);
        assert_eq!(stats.education(), 2);
        assert_eq!(stats.experience(), 0);
        assert_eq!(stats.projects(), 0);
    }

    #[test]
    fn mixed_operations() {
        let stats = ExtractionStats::new();
        stats.inc_documents();
        stats.inc_empty();
        stats.add_skills(3);
        stats.add_experience(2);
        stats.add_projects(1);
        stats.add_skills(2);

        assert_eq!(stats.documents(), 1);
        assert_eq!(stats.empty(), 1);
        assert_eq!(stats.skills(), 5);
        assert_eq!(stats.experience(), 2);
        assert_eq!(stats.projects(), 1);
    }
}
