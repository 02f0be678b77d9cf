//! Skill matcher: scans the text for a fixed catalog of common technical and soft skills.
//!
//! Score: 5 points per distinct skill, capped at 25.

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::analysis::vocabulary::{display_case, whole_phrase_set};

pub const POINTS_PER_SKILL: u32 = 5;
pub const MAX_SKILL_POINTS: u32 = 25;

/// Lower-case, deduplicated. Matched skills are reported in this order.
pub const SKILL_CATALOG: &[&str] = &[
    "python", "java", "c++", "javascript", "sql", "git", "react", "aws", "docker",
    "machine learning", "data analysis", "c#", "typescript", "go", "php", "swift", "kotlin",
    "node.js", "angular", "vue.js", "django", "spring boot", "html5", "css3", "restful apis",
    "mysql", "postgresql", "mongodb", "nosql", "azure", "google cloud platform", "kubernetes",
    "ci/cd", "jenkins", "terraform", "agile methodologies", "scrum", "jira", "linux",
    "system design", "api design", "pandas", "numpy", "tensorflow", "pytorch",
    "data visualization", "project management", "problem solving", "communication", "leadership",
    "ruby on rails", "scala", "perl", "bash scripting", "powershell", "asp.net", "laravel",
    "graphql", "next.js", "svelte", "bootstrap", "tailwind css", "sass", "webpack",
    "microservices architecture", "serverless architecture", "aws lambda", "apache spark",
    "hadoop", "kafka", "tableau", "power bi", "natural language processing (nlp)",
    "computer vision", "deep learning", "android development", "ios development", "react native",
    "flutter", "xamarin", "ansible", "chef", "puppet", "prometheus", "grafana", "elasticsearch",
    "redis", "object-oriented programming (oop)", "functional programming",
    "test-driven development (tdd)", "unit testing", "network security", "penetration testing",
    "cryptography", "ui/ux design", "product management", "business analysis",
    "technical writing", "seo", "data warehousing", "big data technologies",
];

static SKILL_SET: Lazy<RegexSet> =
    Lazy::new(|| whole_phrase_set(SKILL_CATALOG).expect("skill catalog compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCheck {
    /// Display-cased names in catalog order.
    pub matched: Vec<String>,
}

impl SkillCheck {
    pub fn run(text: &str) -> Self {
        let matched = SKILL_SET
            .matches(text)
            .into_iter()
            .map(|idx| display_case(SKILL_CATALOG[idx]))
            .collect();
        Self { matched }
    }

    pub fn points(&self) -> u32 {
        let count = u32::try_from(self.matched.len()).unwrap_or(u32::MAX);
        count.saturating_mul(POINTS_PER_SKILL).min(MAX_SKILL_POINTS)
    }

    pub fn note(&self) -> String {
        if self.matched.is_empty() {
            "⚠️ No common skills found. Add a skills section.".to_string()
        } else {
            format!("✔️ Found {} relevant skills.", self.matched.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_no_duplicates() {
        let unique: HashSet<&str> = SKILL_CATALOG.iter().copied().collect();
        assert_eq!(unique.len(), SKILL_CATALOG.len());

        let display: HashSet<String> = SKILL_CATALOG.iter().map(|s| display_case(s)).collect();
        assert_eq!(display.len(), SKILL_CATALOG.len());
    }

    #[test]
    fn test_catalog_is_lowercase_and_trimmed() {
        for skill in SKILL_CATALOG {
            assert_eq!(*skill, skill.to_lowercase(), "{skill} is not lower-case");
            assert_eq!(*skill, skill.trim(), "{skill} has stray whitespace");
        }
    }

    #[test]
    fn test_catalog_has_no_merged_entries() {
        assert!(SKILL_CATALOG.contains(&"data analysis"));
        assert!(SKILL_CATALOG.contains(&"python"));
        assert!(!SKILL_CATALOG.iter().any(|s| s.contains("analysispython")));
    }

    #[test]
    fn test_matches_in_catalog_order_with_display_case() {
        let check = SkillCheck::run("Tools: SQL, Docker, python");
        assert_eq!(check.matched, vec!["Python", "Sql", "Docker"]);
    }

    #[test]
    fn test_no_substring_hits() {
        // "javascript" must not also count as "java"; "google" must not count as "go".
        let check = SkillCheck::run("javascript on google servers");
        assert_eq!(check.matched, vec!["Javascript"]);
    }

    #[test]
    fn test_phrase_skills() {
        let check = SkillCheck::run("Machine Learning and C++ with CI/CD");
        assert_eq!(check.matched, vec!["C++", "Machine learning", "Ci/cd"]);
    }

    #[test]
    fn test_repeated_mentions_count_once() {
        let check = SkillCheck::run("python python PYTHON");
        assert_eq!(check.matched, vec!["Python"]);
        assert_eq!(check.points(), 5);
    }

    #[test]
    fn test_points_are_linear_below_cap() {
        let check = SkillCheck::run("python, java, sql, docker");
        assert_eq!(check.matched.len(), 4);
        assert_eq!(check.points(), 20);
        assert_eq!(check.note(), "✔️ Found 4 relevant skills.");
    }

    #[test]
    fn test_points_cap_at_twenty_five() {
        let check = SkillCheck::run("python java sql docker git react kubernetes linux");
        assert_eq!(check.matched.len(), 8);
        assert_eq!(check.points(), MAX_SKILL_POINTS);
    }

    #[test]
    fn test_no_skills_note() {
        let check = SkillCheck::run("I enjoy long walks on the beach");
        assert!(check.matched.is_empty());
        assert_eq!(check.points(), 0);
        assert_eq!(check.note(), "⚠️ No common skills found. Add a skills section.");
    }
}
