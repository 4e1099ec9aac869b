//! Money-script quiz.
//!
//! Twelve Likert statements, three per money script, are summed per script,
//! thresholded into a four-flag profile code, and resolved against a fixed
//! catalog of sixteen personalities.
//!
//! ```text
//! answers[12] ──score_answers──▶ ScriptScores ──normalize──▶ [Flag; 4]
//!                                      │
//!                                      └──derive_profile──▶ ProfileCode ──lookup──▶ Personality
//! ```
//!
//! Everything here is synchronous and allocation-local. The catalogs are
//! immutable after construction and are shared by `Arc`.

mod data;
mod engine;
mod personalities;
mod profile;
mod questions;
mod scoring;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use engine::QuizEngine;
pub use personalities::{Personality, PersonalityCatalog, Reflections};
pub use profile::{Flag, HIGH_THRESHOLD, PROFILE_COUNT, ProfileCode};
pub use questions::{
    LIKERT_SCALE, QUESTIONS_PER_CATEGORY, Question, QuestionCatalog, TOTAL_QUESTIONS,
    likert_label,
};
pub use scoring::{
    Answer, QuizOutcome, ScriptScores, derive_profile, is_valid_answer, normalize,
    process_answers, score_answers, validate_answers,
};

/// One of the four money scripts.
///
/// Variant order is the canonical profile order: the first character of a
/// profile code is Avoidance, the last is Vigilance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Money Avoidance")]
    Avoidance,
    #[serde(rename = "Money Worship")]
    Worship,
    #[serde(rename = "Money Status")]
    Status,
    #[serde(rename = "Money Vigilance")]
    Vigilance,
}

impl Category {
    /// Number of money scripts.
    pub const COUNT: usize = 4;

    /// All scripts in canonical order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Avoidance,
        Category::Worship,
        Category::Status,
        Category::Vigilance,
    ];

    /// Display name, also used as the JSON key for per-script maps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Avoidance => "Money Avoidance",
            Self::Worship => "Money Worship",
            Self::Status => "Money Status",
            Self::Vigilance => "Money Vigilance",
        }
    }

    /// Position in canonical order.
    pub fn index(self) -> usize {
        match self {
            Self::Avoidance => 0,
            Self::Worship => 1,
            Self::Status => 2,
            Self::Vigilance => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
