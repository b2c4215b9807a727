//! Analysis prompt value object

/// Base system instruction for all lecture uploads
const BASE_INSTRUCTION: &str = r#"You are an assistant for students that turns recorded lectures into study material.

Instructions:
- Transcribe the lecture audio faithfully, with correct grammar and punctuation
- Write a concise summary in markdown: a short heading followed by the key takeaways as bullet points
- Reply with a single JSON object of the form {"transcript": "...", "summary": "..."}
- Do NOT wrap the reply in code fences or add commentary"#;

/// Value object representing the complete system instruction sent with a
/// lecture upload. Combines the base instruction with the output language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    content: String,
}

impl AnalysisPrompt {
    /// Build a prompt for the given output language. `auto` means match
    /// the language spoken in the recording.
    pub fn build(language: &str) -> Self {
        let language_line = if language.trim().eq_ignore_ascii_case("auto") {
            "Write the transcript and summary in the language spoken in the recording.".to_string()
        } else {
            format!("Write the summary in {}.", language.trim())
        };

        Self {
            content: format!("{}\n\n{}", BASE_INSTRUCTION, language_line),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl Default for AnalysisPrompt {
    fn default() -> Self {
        Self::build("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_contains_base_instruction() {
        let prompt = AnalysisPrompt::build("auto");
        assert!(prompt.content().contains("recorded lectures"));
        assert!(prompt.content().contains("single JSON object"));
    }

    #[test]
    fn auto_matches_recording_language() {
        let prompt = AnalysisPrompt::build("auto");
        assert!(prompt.content().contains("language spoken in the recording"));
    }

    #[test]
    fn explicit_language_is_named() {
        let prompt = AnalysisPrompt::build("Spanish");
        assert!(prompt.content().contains("Write the summary in Spanish."));
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(AnalysisPrompt::default(), AnalysisPrompt::build("auto"));
    }

    #[test]
    fn into_content_consumes() {
        let content = AnalysisPrompt::build("auto").into_content();
        assert!(content.contains("recorded lectures"));
    }
}
