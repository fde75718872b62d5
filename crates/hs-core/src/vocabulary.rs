use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::normalize::normalize_for_matching;

/// Built-in skill list: languages, frameworks, tooling, and soft
/// skills screened for in resumes and postings. Canonical forms are
/// lower-case; punctuation-bearing names are kept as-is and folded to a
/// matchable needle at load time.
const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "c++", "c#", "javascript", "typescript", "html", "css", "sql", "no-sql",
    "r", "swift", "kotlin", "go", "rust", "php", "ruby", "scala", "matlab",
    "react", "angular", "vue", "node.js", "django", "flask", "fastapi", "spring boot",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "opencv", "spark",
    "docker", "kubernetes", "aws", "azure", "gcp", "git", "jenkins", "jira", "tableau", "power bi",
    "excel", "linux", "unix", "hadoop", "kafka", "redis", "mongodb", "postgresql", "mysql",
    "machine learning", "deep learning", "nlp", "computer vision", "data analysis", "data science",
    "big data", "cloud computing", "devops", "agile", "scrum", "rest api", "graphql",
    "cybersecurity", "blockchain", "iot", "project management", "communication", "leadership",
    "problem solving", "teamwork", "time management",
];

static BUILTIN: LazyLock<SkillVocabulary> =
    LazyLock::new(|| SkillVocabulary::new(DEFAULT_SKILLS.iter().copied()));

/// One vocabulary entry: the canonical skill name plus the whole-token
/// pattern it is matched with.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    canonical: String,
    needle: String,
    pattern: Regex,
}

impl SkillEntry {
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Normalized form the entry is searched as (`c++` -> `cplusplus`).
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whole-token occurrence test against already-normalized text.
    pub(crate) fn matches(&self, normalized_text: &str) -> bool {
        self.pattern.is_match(normalized_text)
    }
}

/// Ordered, read-only set of canonical skill tokens. Built once, never
/// mutated afterwards; safe to share across analysis calls.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
}

impl SkillVocabulary {
    /// Build a vocabulary from raw skill names.
    ///
    /// Each name is lower-cased and folded through the same normalization
    /// the extractor applies to input text, so both sides compare equal
    /// representations. Entries that normalize to nothing and entries whose
    /// needle duplicates an earlier one are skipped with a warning; order
    /// of the survivors is insertion order.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();

        for raw in skills {
            let canonical = raw.as_ref().trim().to_lowercase();
            let needle = normalize_for_matching(&canonical);

            if needle.is_empty() {
                warn!(skill = %raw.as_ref(), "vocabulary entry normalizes to empty; skipped");
                continue;
            }
            if !seen.insert(needle.clone()) {
                warn!(skill = %canonical, %needle, "duplicate vocabulary entry; skipped");
                continue;
            }

            // Needles contain only word characters and single spaces, so the
            // escaped pattern is always valid; skip defensively on failure.
            let pattern = match Regex::new(&format!(r"\b{}\b", regex::escape(&needle))) {
                Ok(pattern) => pattern,
                Err(err) => {
                    warn!(skill = %canonical, error = %err, "vocabulary pattern rejected; skipped");
                    continue;
                }
            };

            entries.push(SkillEntry {
                canonical,
                needle,
                pattern,
            });
        }

        Self { entries }
    }

    /// The built-in skill list, constructed once per process.
    pub fn builtin() -> &'static SkillVocabulary {
        &BUILTIN
    }

    /// Canonical skill names in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.canonical())
    }

    pub(crate) fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
