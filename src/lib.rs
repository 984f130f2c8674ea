//! Resmerge: resume extraction and multi-resume merging
//!
//! This crate turns unstructured resume text into structured records and merges several
//! of those records into one deduplicated, ranked profile:
//!
//! 1. **Extraction** -- Contact fields come from independent regex scans, sections are
//!    located by keyword-anchored matchers, and line heuristics build experience,
//!    education and project entries; skills come from a fixed keyword taxonomy
//! 2. **Merge** -- Personal info takes the first non-empty value per field, skills and
//!    projects are fuzzy-deduplicated by name, experience and education are deduplicated
//!    on exact keys, and the result is ranked deterministically
//!
//! Everything here is best-effort: extraction never fails, it degrades to empty sections.
//! The only hard precondition is that a merge needs at least two resumes.
//!
//! # Determinism
//!
//! - **Insertion-ordered accumulators** -- the fuzzy index keeps first-seen order, so ties
//!   between equally similar keys always resolve the same way
//! - **Stable sorts** -- entries that rank equal keep their first-seen order
//! - **Order-preserving parallelism** -- batch extraction runs on rayon but returns resumes
//!   in input order, which is the order merging relies on
//!
//! # Key Modules
//!
//! - [`fields`] -- Name, email, phone, LinkedIn and GitHub extraction
//! - [`sections`] -- Keyword-anchored section segmentation
//! - [`taxonomy`] -- Skill keyword taxonomy
//! - [`builders`] -- Line heuristics that build skills, experience, education and projects
//! - [`extract`] -- The composed resume extractor
//! - [`similarity`] -- 0-100 character-level similarity
//! - [`dedup`] -- Insertion-ordered fuzzy deduplication index
//! - [`merge`] -- Per-section mergers and the merge orchestrator
//! - [`models`] -- Resume data model and merge settings
//! - [`input`] -- File loading for the command-line boundary
//! - [`stats`] -- Extraction counters
//! - [`error`] -- Error types
//! - [`config`] -- Constants and defaults
//!
//! # Example Usage
//!
//! ```bash
//! # Extract structured data from plain-text resumes
//! resmerge parse alice_v1.txt alice_v2.txt
//!
//! # Merge two text resumes and a previously parsed one, keeping the top 15 skills
//! resmerge merge alice_v1.txt alice_v2.txt alice_v3.json --max-skills 15 -o merged.json
//! ```

pub mod builders;
pub mod config;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod fields;
pub mod input;
pub mod merge;
pub mod models;
pub mod sections;
pub mod similarity;
pub mod stats;
pub mod taxonomy;
