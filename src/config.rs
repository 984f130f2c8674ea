/// Default fuzzy-match threshold (0-100) for skills and projects
pub const DEFAULT_DEDUP_THRESHOLD: u8 = 85;

/// Highest meaningful similarity score
pub const MAX_SIMILARITY: u8 = 100;

/// Default cap on the merged skill list
pub const DEFAULT_MAX_SKILLS: usize = 30;

/// A merge needs at least this many resumes
pub const MIN_RESUMES: usize = 2;

/// Upper bound on documents per `parse` batch
pub const MAX_RESUMES: usize = 5;

/// Education and project lines must be longer than this (in chars) to count as entries
pub const MIN_ENTRY_LINE_CHARS: usize = 10;

/// Confidence assigned to every keyword-matched skill
pub const EXTRACTED_SKILL_CONFIDENCE: f64 = 0.9;

/// Category used when a skill carries none
pub const DEFAULT_SKILL_CATEGORY: &str = "general";

/// Company used when an experience header has no `|` separator
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Institution used for every extracted education entry
pub const PLACEHOLDER_INSTITUTION: &str = "Parsed from resume";

/// Sort key standing in for a missing experience start date
pub const MISSING_START_DATE: &str = "0000";

/// Separator placed between accumulated project descriptions
pub const DESCRIPTION_SEPARATOR: &str = " | ";

/// File extensions read as plain document text
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// File extension read as an already-parsed resume
pub const JSON_EXTENSION: &str = "json";
