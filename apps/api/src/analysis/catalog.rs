//! Skill catalog — the fixed vocabulary the keyword engine recognizes.

/// Default vocabulary, in display/priority order.
const DEFAULT_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "node.js",
    "python",
    "aws",
    "docker",
    "postgresql",
    "mongodb",
    "git",
    "agile",
    "leadership",
    "communication",
    "java",
    "c++",
    "sql",
    "nosql",
    "kubernetes",
    "ci/cd",
    "rest api",
    "graphql",
    "html",
    "css",
    "vue",
    "angular",
    "express",
    "django",
    "flask",
];

/// An ordered, immutable set of lowercase skill names.
///
/// Matching is literal substring containment: punctuation inside entries
/// (`node.js`, `c++`, `ci/cd`) is part of the needle, and there is no word
/// boundary check, so `java` is found inside `javascript`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Builds a catalog from arbitrary entries. Entries are trimmed and
    /// lowercased; blanks and repeats are dropped, first occurrence wins.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.as_ref().trim().to_lowercase();
            if !skill.is_empty() && !normalized.contains(&skill) {
                normalized.push(skill);
            }
        }
        Self { skills: normalized }
    }

    #[allow(dead_code)]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Returns the catalog skills contained in `text_lower`, in catalog order.
    /// The caller lowercases the text once and reuses it.
    pub fn find_in<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        self.skills
            .iter()
            .filter(|skill| text_lower.contains(skill.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_all_skills_in_order() {
        let catalog = SkillCatalog::default();
        assert_eq!(catalog.len(), 28);
        assert_eq!(catalog.skills()[0], "javascript");
        assert_eq!(catalog.skills()[3], "node.js");
        assert_eq!(catalog.skills()[27], "flask");
    }

    #[test]
    fn test_new_normalizes_and_dedups() {
        let catalog = SkillCatalog::new(["Rust", " rust ", "", "Go", "  "]);
        assert_eq!(catalog.skills(), &["rust".to_string(), "go".to_string()]);
    }

    #[test]
    fn test_find_in_preserves_catalog_order() {
        let catalog = SkillCatalog::default();
        let found = catalog.find_in("flask, docker and python");
        assert_eq!(found, vec!["python", "docker", "flask"]);
    }

    #[test]
    fn test_find_in_matches_punctuated_entries_literally() {
        let catalog = SkillCatalog::default();
        assert!(catalog.find_in("built ci/cd with node.js and c++").contains(&"node.js"));
        assert!(catalog.find_in("built ci/cd with node.js and c++").contains(&"c++"));
        assert!(catalog.find_in("built ci/cd with node.js and c++").contains(&"ci/cd"));
        // "node js" without the dot is not the catalog entry
        assert!(!catalog.find_in("node js").contains(&"node.js"));
    }

    #[test]
    fn test_find_in_has_no_word_boundaries() {
        let catalog = SkillCatalog::default();
        let found = catalog.find_in("javascript and postgresql");
        assert!(found.contains(&"java"));
        assert!(found.contains(&"sql"));
    }

    #[test]
    fn test_empty_catalog_finds_nothing() {
        let catalog = SkillCatalog::new(Vec::<String>::new());
        assert!(catalog.is_empty());
        assert!(catalog.find_in("python react").is_empty());
    }
}
