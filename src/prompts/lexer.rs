//! Line classification for prompt documents.
//!
//! The lexer knows nothing about sections. It only decides what a single
//! trimmed line looks like; the parser decides what it means.

/// Section of a prompt document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Master,
    Negative,
    Card,
}

impl Section {
    /// Detection order for headers.
    const ALL: [Section; 3] = [Section::Master, Section::Negative, Section::Card];

    pub fn marker(self) -> &'static str {
        match self {
            Self::Master => "MASTER PROMPT",
            Self::Negative => "NEGATIVE PROMPT",
            Self::Card => "CARD-SPECIFIC PROMPTS",
        }
    }
}

/// One classified line. Text is already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Header(Section),
    Text(&'a str),
}

/// Classify one raw line.
///
/// A header is any line containing a section marker as a case-sensitive
/// substring, so prose that happens to contain "MASTER PROMPT" also counts.
pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    for section in Section::ALL {
        if trimmed.contains(section.marker()) {
            return Line::Header(section);
        }
    }
    Line::Text(trimmed)
}

/// Match a card heading such as `XIII. The Hoarder (HLLH) rest of line`.
///
/// Leading text is optional and may not contain `(`. The parenthesised code
/// must be exactly four ASCII uppercase letters. Returns the code and the
/// trimmed remainder after `)`.
pub fn card_heading(line: &str) -> Option<(&str, &str)> {
    let open = line.find('(')?;
    let after = &line[open + 1..];
    let code = after.get(..4)?;
    if !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let rest = after[4..].strip_prefix(')')?;
    Some((code, rest.trim()))
}
