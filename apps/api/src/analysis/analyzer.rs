//! Resume analyzer: runs the four checks in order and assembles the ATS score.
//!
//! Order: contact → skills → structure → length. Sub-scores are summed first; the short-text
//! ceiling is applied to that sum last, so it caps the score instead of deducting from it.
//! Pure function of the input text.

use serde::{Deserialize, Serialize};

use crate::analysis::contact::ContactCheck;
use crate::analysis::readability::LengthCheck;
use crate::analysis::skills::SkillCheck;
use crate::analysis::structure::StructureCheck;

pub const MAX_SCORE: u32 = 100;

/// Points contributed by each stage before the final ceiling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contact: u32,
    pub skills: u32,
    pub structure: u32,
    pub readability: u32,
    /// The short-text ceiling was in force for this run.
    pub length_capped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32, // 0..=100
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    /// One note per check, in evaluation order (email, phone, skills, headers, length).
    pub notes: Vec<String>,
    pub sections: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

pub fn analyze_resume(text: &str) -> AnalysisResult {
    let mut notes = Vec::with_capacity(5);
    let mut breakdown = ScoreBreakdown::default();

    let contact = ContactCheck::run(text);
    breakdown.contact = contact.points();
    notes.push(contact.email_note().to_string());
    notes.push(contact.phone_note().to_string());

    let skills = SkillCheck::run(text);
    breakdown.skills = skills.points();
    notes.push(skills.note());

    let structure = StructureCheck::run(text);
    breakdown.structure = structure.points();
    notes.push(structure.note().to_string());

    let length = LengthCheck::run(text);
    breakdown.readability = length.points();
    breakdown.length_capped = !length.passed();
    notes.push(length.note().to_string());

    let total = breakdown.contact + breakdown.skills + breakdown.structure + breakdown.readability;
    let score = length.apply_ceiling(total).min(MAX_SCORE);

    tracing::debug!(
        score,
        chars = length.chars,
        skills = skills.matched.len(),
        sections = structure.found.len(),
        "Resume analyzed"
    );

    AnalysisResult {
        score,
        email: contact.email_or_placeholder(),
        phone: contact.phone_or_placeholder(),
        skills: skills.matched,
        notes,
        sections: structure.found.iter().map(|s| s.to_string()).collect(),
        breakdown,
    }
}
