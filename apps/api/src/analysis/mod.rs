// ATS-friendliness analysis.
// Pure, synchronous checks over extracted resume text. No I/O past this point;
// documents are turned into text by `crate::extraction` before they get here.

pub mod analyzer;
pub mod contact;
pub mod handlers;
pub mod readability;
pub mod skills;
pub mod structure;
pub mod vocabulary;
