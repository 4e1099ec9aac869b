use super::PromptDocument;
use crate::error::PromptError;
use crate::quiz::ProfileCode;

impl PromptDocument {
    /// Profile codes without a card prompt, in card order.
    pub fn missing_codes(&self) -> Vec<ProfileCode> {
        ProfileCode::all()
            .filter(|code| !self.card_prompts.contains_key(&code.to_string()))
            .collect()
    }

    /// Full image prompt for one profile: master, card, then the negative
    /// prompt.
    pub fn assemble(&self, code: &str) -> Result<String, PromptError> {
        let card = self
            .card_prompt(code)
            .ok_or_else(|| PromptError::MissingCardPrompt {
                code: code.to_string(),
            })?;
        Ok(format!(
            "{}\n\n{}\n\nNegative prompt: {}",
            self.master_prompt, card, self.negative_prompt
        ))
    }
}
