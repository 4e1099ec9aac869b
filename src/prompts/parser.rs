//! Section state machine over classified lines.

use std::collections::BTreeMap;

use super::PromptDocument;
use super::lexer::{self, Line, Section};

/// Accumulates lines for the open section and writes them into the document
/// when a header or end of input closes it.
#[derive(Debug, Default)]
struct Parser<'a> {
    section: Option<Section>,
    card_code: Option<&'a str>,
    buffer: Vec<&'a str>,
    master: String,
    negative: String,
    cards: BTreeMap<String, String>,
}

impl<'a> Parser<'a> {
    fn feed(&mut self, raw: &'a str) {
        match lexer::classify(raw) {
            Line::Blank => {}
            Line::Header(section) => {
                self.flush();
                self.section = Some(section);
                self.card_code = None;
                self.buffer.clear();
            }
            Line::Text(text) => self.text(text),
        }
    }

    fn text(&mut self, text: &'a str) {
        match self.section {
            None => {}
            Some(Section::Master | Section::Negative) => self.buffer.push(text),
            Some(Section::Card) => {
                if let Some((code, seed)) = lexer::card_heading(text) {
                    self.flush();
                    self.card_code = Some(code);
                    self.buffer.clear();
                    self.buffer.push(seed);
                } else if self.card_code.is_some() {
                    self.buffer.push(text);
                }
            }
        }
    }

    fn flush(&mut self) {
        match self.section {
            Some(Section::Master) => {
                if let Some(text) = join_nonempty(&self.buffer, "\n") {
                    self.master = text;
                }
            }
            Some(Section::Negative) => {
                if let Some(text) = join_nonempty(&self.buffer, "\n") {
                    self.negative = text;
                }
            }
            Some(Section::Card) => {
                if let Some(code) = self.card_code {
                    let text = self.buffer.join(" ").trim().to_string();
                    self.cards.insert(code.to_string(), text);
                }
            }
            None => {}
        }
    }

    fn finish(mut self) -> PromptDocument {
        self.flush();
        PromptDocument {
            master_prompt: self.master,
            negative_prompt: self.negative,
            card_prompts: self.cards,
        }
    }
}

fn join_nonempty(lines: &[&str], sep: &str) -> Option<String> {
    let text = lines.join(sep).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Parse a prompt document. Total: every input yields a document, possibly
/// with empty fields.
pub fn parse_prompt_document(raw: &str) -> PromptDocument {
    let mut parser = Parser::default();
    for line in raw.lines() {
        parser.feed(line);
    }
    parser.finish()
}
