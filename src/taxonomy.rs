//! Fixed skill vocabulary used by the keyword scan.
//!
//! A [`SkillTaxonomy`] is an ordered list of buckets, each holding lower-cased tokens. Order
//! matters: extracted skills come out bucket by bucket, token by token.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_BUCKETS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python",
            "javascript",
            "java",
            "c++",
            "c#",
            "ruby",
            "php",
            "swift",
            "kotlin",
            "go",
            "rust",
            "typescript",
        ],
    ),
    (
        "frontend",
        &[
            "react", "vue", "angular", "html", "css", "tailwind", "bootstrap", "sass", "next.js",
            "nuxt",
        ],
    ),
    (
        "backend",
        &[
            "node.js", "express", "django", "flask", "fastapi", "spring", "rails", ".net",
        ],
    ),
    (
        "database",
        &[
            "postgresql",
            "mysql",
            "mongodb",
            "redis",
            "sqlite",
            "dynamodb",
            "firebase",
        ],
    ),
    (
        "cloud",
        &[
            "aws",
            "azure",
            "gcp",
            "vercel",
            "heroku",
            "docker",
            "kubernetes",
        ],
    ),
    (
        "tools",
        &["git", "jira", "figma", "postman", "jenkins", "github actions"],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBucket {
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTaxonomy {
    buckets: Vec<SkillBucket>,
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS.iter().map(|(category, keywords)| SkillBucket {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }))
    }
}

impl SkillTaxonomy {
    /// Builds a taxonomy, lower-casing every keyword so matching stays case-insensitive.
    pub fn new(buckets: impl IntoIterator<Item = SkillBucket>) -> Self {
        let buckets = buckets
            .into_iter()
            .map(|bucket| SkillBucket {
                category: bucket.category,
                keywords: bucket
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();
        Self { buckets }
    }

    /// Loads a JSON array of `{ "category", "keywords" }` buckets.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy file: {}", path.display()))?;
        let buckets: Vec<SkillBucket> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid taxonomy JSON in: {}", path.display()))?;
        Ok(Self::new(buckets))
    }

    pub fn buckets(&self) -> &[SkillBucket] {
        &self.buckets
    }

    /// Every `(category, keyword)` pair in taxonomy order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets.iter().flat_map(|bucket| {
            bucket
                .keywords
                .iter()
                .map(move |k| (bucket.category.as_str(), k.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.keywords.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
