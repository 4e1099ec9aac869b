//! Tarot-card prompt documents.
//!
//! A prompt document is a plain-text file with three sections:
//!
//! ```text
//! MASTER PROMPT
//! Shared style instructions, joined with newlines.
//!
//! NEGATIVE PROMPT
//! Things the image model should avoid.
//!
//! CARD-SPECIFIC PROMPTS
//! I. The Bare Bones Boss (LLLL) Card text that may
//! continue on following lines, joined with spaces.
//! ```
//!
//! Parsing is total and pure. Fetching the text is the job of a
//! [`PromptSource`]; checking that every profile has a card is the caller's
//! job (see [`PromptDocument::missing_codes`]).

mod assembly;
pub mod lexer;
mod parser;
pub mod source;

use std::collections::BTreeMap;

use serde::Serialize;

pub use parser::parse_prompt_document;
pub use source::{FilePromptSource, HttpPromptSource, PromptSource, load_prompt_document};

/// Parsed prompt document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDocument {
    pub master_prompt: String,
    pub negative_prompt: String,
    /// Profile code to card prompt. Not guaranteed to cover all sixteen codes.
    pub card_prompts: BTreeMap<String, String>,
}

impl PromptDocument {
    pub fn card_prompt(&self, code: &str) -> Option<&str> {
        self.card_prompts.get(code).map(String::as_str)
    }
}
