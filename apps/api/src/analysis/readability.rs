//! Length gate. Very short text usually means the document was image-based or the
//! extraction failed, so the whole score is capped rather than just losing these points.

pub const MIN_CHARS: usize = 500;
pub const LENGTH_POINTS: u32 = 20;
/// Upper bound on the final score when the text is not longer than `MIN_CHARS`.
pub const SHORT_TEXT_CEILING: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthCheck {
    pub chars: usize,
}

impl LengthCheck {
    pub fn run(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
        }
    }

    pub fn passed(&self) -> bool {
        self.chars > MIN_CHARS
    }

    pub fn points(&self) -> u32 {
        if self.passed() {
            LENGTH_POINTS
        } else {
            0
        }
    }

    /// Applied to the running total after every other stage has been summed.
    pub fn apply_ceiling(&self, total: u32) -> u32 {
        if self.passed() {
            total
        } else {
            total.min(SHORT_TEXT_CEILING)
        }
    }

    pub fn note(&self) -> &'static str {
        if self.passed() {
            "✔️ Good length, likely parseable."
        } else {
            "❌ Resume is too short or text extraction failed."
        }
    }
}
