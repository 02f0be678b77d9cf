//! Structure check: does the resume use the section headers an ATS expects?
//!
//! All-or-nothing: 25 points once at least 3 of the 6 headers appear, otherwise 0.

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::analysis::vocabulary::whole_phrase_set;

pub const SECTION_HEADERS: [&str; 6] = [
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
];
pub const MIN_HEADERS: usize = 3;
pub const STRUCTURE_POINTS: u32 = 25;

static HEADER_SET: Lazy<RegexSet> =
    Lazy::new(|| whole_phrase_set(&SECTION_HEADERS).expect("section headers compile"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureCheck {
    /// Headers present in the text, in canonical order.
    pub found: Vec<&'static str>,
}

impl StructureCheck {
    pub fn run(text: &str) -> Self {
        let found = HEADER_SET
            .matches(text)
            .into_iter()
            .map(|idx| SECTION_HEADERS[idx])
            .collect();
        Self { found }
    }

    pub fn is_well_structured(&self) -> bool {
        self.found.len() >= MIN_HEADERS
    }

    pub fn points(&self) -> u32 {
        if self.is_well_structured() {
            STRUCTURE_POINTS
        } else {
            0
        }
    }

    pub fn note(&self) -> &'static str {
        if self.is_well_structured() {
            "✔️ Well-structured with standard headers."
        } else {
            "⚠️ Lacks standard headers (Experience, Skills, etc.)."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_headers_pass() {
        let check = StructureCheck::run("SUMMARY\n...\nExperience\n...\nEducation\n...");
        assert_eq!(check.found, vec!["experience", "education", "summary"]);
        assert_eq!(check.points(), 25);
        assert_eq!(check.note(), "✔️ Well-structured with standard headers.");
    }

    #[test]
    fn test_two_headers_get_no_partial_credit() {
        let check = StructureCheck::run("Experience ... Skills ...");
        assert_eq!(check.found.len(), 2);
        assert_eq!(check.points(), 0);
        assert_eq!(
            check.note(),
            "⚠️ Lacks standard headers (Experience, Skills, etc.)."
        );
    }

    #[test]
    fn test_all_six_still_twenty_five() {
        let check =
            StructureCheck::run("objective summary experience education projects skills");
        assert_eq!(check.found.len(), 6);
        assert_eq!(check.points(), 25);
    }

    #[test]
    fn test_headers_need_whole_words() {
        // "skill" and "project" are not the plural headers; "experienced" is a longer word.
        let check = StructureCheck::run("skill project experienced educational");
        assert!(check.found.is_empty());
    }
}
