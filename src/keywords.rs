// Keyword sets: the fixed vocabularies the classifier and scorer match on.
//
// A KeywordSet is an ordered, de-duplicated list of lower-cased terms. Terms
// are matched case-insensitively, so everything is folded once here instead
// of at every comparison.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Terms that suggest a video is about programming or software engineering.
pub const PROGRAMMING_TERMS: &[&str] = &[
    "programming",
    "coding",
    "developer",
    "javascript",
    "python",
    "java",
    "c++",
    "code",
    "algorithm",
    "function",
    "variable",
    "class",
    "object",
    "method",
    "api",
    "framework",
    "library",
    "react",
    "angular",
    "vue",
    "node.js",
    "html",
    "css",
    "database",
    "sql",
    "mongodb",
    "git",
    "github",
    "terminal",
    "command line",
    "compiler",
    "interpreter",
    "debugging",
    "syntax",
    "frontend",
    "backend",
    "fullstack",
    "web development",
    "app development",
    "software engineering",
];

/// Terms that suggest a sentence carries a key point.
pub const IMPORTANCE_TERMS: &[&str] = &[
    "important",
    "key",
    "essential",
    "critical",
    "crucial",
    "significant",
    "remember",
    "note",
    "takeaway",
    "conclusion",
    "summary",
    "in summary",
    "to summarize",
    "finally",
    "ultimately",
    "in conclusion",
    "therefore",
    "as a result",
    "consequently",
    "thus",
    "hence",
    "accordingly",
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "lastly",
    "for example",
    "such as",
    "specifically",
    "particularly",
    "notably",
    "in particular",
    "especially",
    "primarily",
    "mainly",
    "chiefly",
    "highlight",
    "emphasize",
    "stress",
    "underline",
    "underscore",
    "point out",
    "call attention to",
    "focus on",
    "concentrate on",
];

/// An ordered set of lower-cased, non-empty terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set, lower-casing and trimming each term.
    ///
    /// Fails on an empty (or all-whitespace) term. Duplicates after folding
    /// are dropped, keeping the first occurrence's position.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                anyhow::bail!("Keyword sets cannot contain empty terms");
            }
            if !folded.contains(&term) {
                folded.push(term);
            }
        }
        Ok(Self { terms: folded })
    }

    /// The built-in programming vocabulary.
    pub fn programming() -> Self {
        Self::from_static(PROGRAMMING_TERMS)
    }

    /// The built-in importance vocabulary.
    pub fn importance() -> Self {
        Self::from_static(IMPORTANCE_TERMS)
    }

    fn from_static(terms: &[&str]) -> Self {
        Self {
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms present in both sets, in this set's order.
    pub fn overlap<'a>(&'a self, other: &KeywordSet) -> Vec<&'a str> {
        self.iter().filter(|t| other.terms.iter().any(|o| o == t)).collect()
    }
}

impl TryFrom<Vec<String>> for KeywordSet {
    type Error = anyhow::Error;

    fn try_from(terms: Vec<String>) -> Result<Self> {
        Self::new(terms)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_are_disjoint() {
        let programming = KeywordSet::programming();
        let importance = KeywordSet::importance();
        assert!(programming.overlap(&importance).is_empty());
    }

    #[test]
    fn test_builtin_sets_are_already_folded() {
        for set in [KeywordSet::programming(), KeywordSet::importance()] {
            let rebuilt = KeywordSet::new(set.terms()).unwrap();
            assert_eq!(rebuilt, set);
        }
    }

    #[test]
    fn test_new_folds_and_dedups() {
        let set = KeywordSet::new(["Python", " python ", "Rust"]).unwrap();
        assert_eq!(set.terms(), &["python".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_new_rejects_empty_term() {
        assert!(KeywordSet::new(["ok", "   "]).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let set: KeywordSet = serde_json::from_str(r#"["Key", "note"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(serde_json::from_str::<KeywordSet>(r#"["", "note"]"#).is_err());
    }
}
