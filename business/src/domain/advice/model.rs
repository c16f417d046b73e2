use super::errors::AdviceError;

/// Glyph that marks a reply as already carrying a warning.
pub const WARNING_GLYPH: &str = "⚠️";

/// Suffix appended to every generated answer that does not end with [`WARNING_GLYPH`].
pub const DISCLAIMER_SUFFIX: &str = "\n\n⚠️ This is for informational purposes only. Always consult a healthcare professional for proper diagnosis and treatment.";

/// Message returned in place of an answer when the generation call fails.
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to my AI service. Please try again later.";

/// A user question, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Trims surrounding whitespace and rejects empty input.
    pub fn parse(raw: &str) -> Result<Self, AdviceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AdviceError::PromptEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of an advice request that is delivered with a success status.
///
/// `Unavailable` reports an upstream failure inline so callers must inspect
/// the variant rather than the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceReply {
    Answer(String),
    Unavailable(String),
}

impl AdviceReply {
    pub fn unavailable() -> Self {
        AdviceReply::Unavailable(APOLOGY_MESSAGE.to_string())
    }
}

/// Appends [`DISCLAIMER_SUFFIX`] unless the text already ends with [`WARNING_GLYPH`].
pub fn append_disclaimer(mut text: String) -> String {
    if !text.ends_with(WARNING_GLYPH) {
        text.push_str(DISCLAIMER_SUFFIX);
    }
    text
}
