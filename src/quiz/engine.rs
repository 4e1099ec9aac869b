use std::sync::Arc;

use super::personalities::{Personality, PersonalityCatalog};
use super::Category;
use super::questions::QuestionCatalog;
use super::scoring::{self, Answer, QuizOutcome, ScriptScores};
use crate::error::{CatalogError, QuizError};

/// Scoring entry point shared by the web layer and the CLI.
///
/// Cheap to clone: both catalogs sit behind `Arc` and are never mutated.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Arc<QuestionCatalog>,
    personalities: Arc<PersonalityCatalog>,
}

impl QuizEngine {
    pub fn new(questions: Arc<QuestionCatalog>, personalities: Arc<PersonalityCatalog>) -> Self {
        Self {
            questions,
            personalities,
        }
    }

    /// Engine over the built-in catalogs.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Arc::new(QuestionCatalog::builtin()?),
            Arc::new(PersonalityCatalog::builtin()?),
        ))
    }

    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn personalities(&self) -> &PersonalityCatalog {
        &self.personalities
    }

    pub fn score(&self, answers: &[Answer]) -> Result<ScriptScores, QuizError> {
        scoring::score_answers(&self.questions, answers)
    }

    pub fn process(&self, answers: &[Answer]) -> Result<QuizOutcome, QuizError> {
        scoring::process_answers(&self.questions, &self.personalities, answers)
    }

    pub fn validate(&self, answers: &[Answer]) -> bool {
        scoring::validate_answers(&self.questions, answers)
    }

    pub fn lookup(&self, code: &str) -> Result<&Personality, QuizError> {
        self.personalities.lookup(code)
    }

    /// Question slots without a Likert answer, with the script each belongs
    /// to. Slots past the end of `answers` count as unanswered.
    pub fn unanswered(&self, answers: &[Answer]) -> Vec<(usize, Category)> {
        (0..self.questions.len())
            .filter(|&i| !scoring::is_valid_answer(answers.get(i).copied().flatten()))
            .filter_map(|i| Some((i, self.questions.category_of(i)?)))
            .collect()
    }

    /// Like [`process`](Self::process), but refuses incomplete answer sets
    /// instead of scoring missing slots as zero.
    pub fn process_validated(&self, answers: &[Answer]) -> Result<QuizOutcome, QuizError> {
        let expected = self.questions.len();
        if answers.len() != expected {
            return Err(QuizError::WrongAnswerCount {
                expected,
                actual: answers.len(),
            });
        }
        if !self.validate(answers) {
            return Err(QuizError::IncompleteAnswers {
                answered: scoring::answered_count(answers),
                expected,
            });
        }
        self.process(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_processing_rejects_gaps() {
        let engine = QuizEngine::builtin().unwrap();
        let mut answers = vec![Some(4); 12];
        answers[7] = None;
        answers[8] = Some(9);

        let err = engine.process_validated(&answers).unwrap_err();
        assert_eq!(
            err,
            QuizError::IncompleteAnswers {
                answered: 10,
                expected: 12
            }
        );
        assert!(err.is_validation());

        // The lenient path still scores it.
        assert!(engine.process(&answers).is_ok());
    }

    #[test]
    fn validated_processing_checks_length_first() {
        let engine = QuizEngine::builtin().unwrap();
        let err = engine.process_validated(&[Some(3); 11]).unwrap_err();
        assert!(matches!(err, QuizError::WrongAnswerCount { actual: 11, .. }));
    }

    #[test]
    fn unanswered_slots_name_their_script() {
        let engine = QuizEngine::builtin().unwrap();
        let mut answers = vec![Some(2); 11];
        answers[0] = None;
        answers[4] = Some(6);

        assert_eq!(
            engine.unanswered(&answers),
            vec![
                (0, Category::Avoidance),
                (4, Category::Worship),
                (11, Category::Vigilance),
            ]
        );
        assert!(engine.unanswered(&[Some(3); 12]).is_empty());
    }

    #[test]
    fn clones_share_catalogs() {
        let engine = QuizEngine::builtin().unwrap();
        let clone = engine.clone();
        assert!(std::ptr::eq(engine.questions(), clone.questions()));
        assert_eq!(clone.lookup("HHHH").unwrap().code.to_string(), "HHHH");
    }
}
