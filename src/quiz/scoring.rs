//! Answer scoring, normalization, and profile derivation.
//!
//! These are pure functions over the catalogs. They never log and never fall
//! back to a default personality: every failure is returned to the caller.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::personalities::{Personality, PersonalityCatalog};
use super::profile::{Flag, ProfileCode};
use super::questions::{QuestionCatalog, likert_label};
use super::Category;
use crate::error::QuizError;

/// A single answer slot. `None` is unanswered; out-of-range integers are
/// representable because they arrive from untrusted JSON.
pub type Answer = Option<i64>;

/// True if the answer is on the 1-5 Likert scale.
pub fn is_valid_answer(answer: Answer) -> bool {
    answer.and_then(likert_label).is_some()
}

/// Per-script sums, each in `0..=15`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptScores([u32; Category::COUNT]);

impl ScriptScores {
    pub fn new(scores: [u32; Category::COUNT]) -> Self {
        Self(scores)
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().zip(self.0.iter().copied())
    }

    fn add(&mut self, category: Category, value: u32) {
        self.0[category.index()] += value;
    }
}

impl Serialize for ScriptScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.name(), &score)?;
        }
        map.end()
    }
}

/// Sum valid answers per script.
///
/// The sequence must have exactly one slot per question. Missing or invalid
/// slots contribute nothing; use [`validate_answers`] to require completeness.
pub fn score_answers(
    questions: &QuestionCatalog,
    answers: &[Answer],
) -> Result<ScriptScores, QuizError> {
    if answers.len() != questions.len() {
        return Err(QuizError::WrongAnswerCount {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let mut scores = ScriptScores::default();
    for (question, answer) in questions.iter().zip(answers) {
        if let Some(value) = answer.filter(|v| (1..=5).contains(v)) {
            // 1..=5 always fits
            scores.add(question.category, value as u32);
        }
    }
    Ok(scores)
}

/// Threshold each script sum into a flag, in canonical order.
pub fn normalize(scores: &ScriptScores) -> [Flag; Category::COUNT] {
    Category::ALL.map(|c| Flag::from_score(scores.get(c)))
}

pub fn derive_profile(scores: &ScriptScores) -> ProfileCode {
    ProfileCode::new(normalize(scores))
}

/// True if every question has an answer on the Likert scale.
pub fn validate_answers(questions: &QuestionCatalog, answers: &[Answer]) -> bool {
    answers.len() == questions.len() && answers.iter().copied().all(is_valid_answer)
}

/// Full result of a scored quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub script_scores: ScriptScores,
    pub script_profile: [Flag; Category::COUNT],
    pub profile: ProfileCode,
    pub personality: Personality,
}

/// Score, normalize, derive, and look up, failing at the first broken step.
pub fn process_answers(
    questions: &QuestionCatalog,
    personalities: &PersonalityCatalog,
    answers: &[Answer],
) -> Result<QuizOutcome, QuizError> {
    let script_scores = score_answers(questions, answers)?;
    let script_profile = normalize(&script_scores);
    let profile = ProfileCode::new(script_profile);
    let personality = personalities.lookup(&profile.to_string())?.clone();

    Ok(QuizOutcome {
        script_scores,
        script_profile,
        profile,
        personality,
    })
}

/// Count of answers on the Likert scale.
pub(crate) fn answered_count(answers: &[Answer]) -> usize {
    answers.iter().copied().filter(|a| is_valid_answer(*a)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalogs() -> (QuestionCatalog, PersonalityCatalog) {
        (
            QuestionCatalog::builtin().unwrap(),
            PersonalityCatalog::builtin().unwrap(),
        )
    }

    fn answers(values: [i64; 12]) -> Vec<Answer> {
        values.into_iter().map(Some).collect()
    }

    #[test]
    fn worked_example() {
        let (questions, personalities) = catalogs();
        let outcome = process_answers(
            &questions,
            &personalities,
            &answers([5, 5, 5, 1, 1, 1, 3, 3, 3, 5, 5, 5]),
        )
        .unwrap();

        assert_eq!(outcome.script_scores, ScriptScores::new([15, 3, 9, 15]));
        assert_eq!(
            outcome.script_profile,
            [Flag::High, Flag::Low, Flag::Low, Flag::High]
        );
        assert_eq!(outcome.profile.to_string(), "HLLH");
        assert_eq!(outcome.personality.code, outcome.profile);
    }

    #[test]
    fn missing_answer_contributes_zero() {
        let (questions, _) = catalogs();
        let mut input = answers([5, 5, 5, 1, 1, 1, 3, 3, 3, 5, 5, 5]);
        input[0] = None;

        let scores = score_answers(&questions, &input).unwrap();
        assert_eq!(scores.get(Category::Avoidance), 10);
        assert!(!validate_answers(&questions, &input));
    }

    #[test]
    fn out_of_range_values_are_ignored() {
        let (questions, _) = catalogs();
        let mut input = answers([3; 12]);
        input[3] = Some(0);
        input[4] = Some(6);
        input[5] = Some(-2);

        let scores = score_answers(&questions, &input).unwrap();
        assert_eq!(scores.get(Category::Worship), 0);
        assert_eq!(scores.get(Category::Status), 9);
        assert!(!validate_answers(&questions, &input));
    }

    #[test]
    fn valid_answers_are_the_likert_values() {
        let valid: Vec<i64> = (-1..=7).filter(|v| is_valid_answer(Some(*v))).collect();
        assert_eq!(valid, vec![1, 2, 3, 4, 5]);
        assert!(!is_valid_answer(None));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let (questions, personalities) = catalogs();
        for len in [0, 11, 13] {
            let input = vec![Some(3); len];
            let err = score_answers(&questions, &input).unwrap_err();
            assert_eq!(
                err,
                QuizError::WrongAnswerCount {
                    expected: 12,
                    actual: len
                }
            );
            assert!(process_answers(&questions, &personalities, &input).is_err());
            assert!(!validate_answers(&questions, &input));
        }
    }

    #[test]
    fn boundary_sums() {
        let (questions, _) = catalogs();
        // 4+3+3 = 10 is High, 3+3+3 = 9 is Low.
        let input = answers([4, 3, 3, 3, 3, 3, 1, 1, 1, 5, 5, 5]);
        let scores = score_answers(&questions, &input).unwrap();
        assert_eq!(
            normalize(&scores),
            [Flag::High, Flag::Low, Flag::Low, Flag::High]
        );
    }

    #[test]
    fn every_profile_is_reachable() {
        let (questions, personalities) = catalogs();
        for code in ProfileCode::all() {
            let values: Vec<Answer> = Category::ALL
                .iter()
                .flat_map(|&c| {
                    let v = if code.flag(c) == Flag::High { 5 } else { 1 };
                    [Some(v); 3]
                })
                .collect();
            let outcome = process_answers(&questions, &personalities, &values).unwrap();
            assert_eq!(outcome.profile, code);
            assert_eq!(derive_profile(&outcome.script_scores), code);
        }
    }

    #[test]
    fn empty_answers_score_as_all_low() {
        let (questions, personalities) = catalogs();
        let outcome = process_answers(&questions, &personalities, &[None; 12]).unwrap();
        assert_eq!(outcome.profile.to_string(), "LLLL");
        assert_eq!(answered_count(&[None; 12]), 0);
    }

    #[test]
    fn processing_is_deterministic() {
        let (questions, personalities) = catalogs();
        let input = answers([2, 4, 5, 1, 3, 5, 4, 4, 2, 1, 2, 3]);
        let first = process_answers(&questions, &personalities, &input).unwrap();
        let second = process_answers(&questions, &personalities, &input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn outcome_serializes_camel_case() {
        let (questions, personalities) = catalogs();
        let outcome = process_answers(
            &questions,
            &personalities,
            &answers([5, 5, 5, 1, 1, 1, 3, 3, 3, 5, 5, 5]),
        )
        .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["scriptScores"]["Money Avoidance"], 15);
        assert_eq!(json["scriptScores"]["Money Status"], 9);
        assert_eq!(json["scriptProfile"], serde_json::json!(["H", "L", "L", "H"]));
        assert_eq!(json["profile"], "HLLH");
        assert_eq!(json["personality"]["profile"], "HLLH");
    }
}
