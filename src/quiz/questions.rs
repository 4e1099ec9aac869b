//! Question catalog and the Likert scale.

use std::collections::HashSet;

use serde::Serialize;

use super::Category;
use super::data;
use crate::error::CatalogError;

/// Total number of quiz questions.
pub const TOTAL_QUESTIONS: usize = 12;

/// Questions owned by each money script.
pub const QUESTIONS_PER_CATEGORY: usize = TOTAL_QUESTIONS / Category::COUNT;

/// Likert scale as (value, label) pairs.
pub const LIKERT_SCALE: [(i64, &str); 5] = [
    (1, "Strongly disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly agree"),
];

/// Label for a Likert value, if it is on the scale.
pub fn likert_label(value: i64) -> Option<&'static str> {
    LIKERT_SCALE
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

/// One quiz statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: Category,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            text: text.into(),
            category,
        }
    }
}

/// Ordered, validated set of questions.
///
/// Answer slot `i` always belongs to `questions[i]`, regardless of how a UI
/// shuffles the display order.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Validate and wrap a question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.len() != TOTAL_QUESTIONS {
            return Err(CatalogError::QuestionCount {
                expected: TOTAL_QUESTIONS,
                actual: questions.len(),
            });
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId { id: question.id });
            }
        }

        for category in Category::ALL {
            let owned = questions.iter().filter(|q| q.category == category).count();
            if owned != QUESTIONS_PER_CATEGORY {
                return Err(CatalogError::CategoryImbalance {
                    category: category.to_string(),
                    expected: QUESTIONS_PER_CATEGORY,
                    actual: owned,
                });
            }
        }

        Ok(Self { questions })
    }

    /// The twelve built-in money-script statements.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            data::QUESTIONS
                .iter()
                .map(|seed| Question::new(seed.id, seed.text, seed.category))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Owning script of the answer slot at `index`.
    pub fn category_of(&self, index: usize) -> Option<Category> {
        self.questions.get(index).map(|q| q.category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced() -> Vec<Question> {
        Category::ALL
            .iter()
            .flat_map(|&c| std::iter::repeat_n(c, QUESTIONS_PER_CATEGORY))
            .enumerate()
            .map(|(i, c)| Question::new(i as u32 + 1, format!("statement {}", i + 1), c))
            .collect()
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = QuestionCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), TOTAL_QUESTIONS);
        for category in Category::ALL {
            assert_eq!(catalog.by_category(category).count(), 3);
        }
    }

    #[test]
    fn builtin_catalog_positions_are_grouped() {
        let catalog = QuestionCatalog::builtin().unwrap();
        let expected = [
            Category::Avoidance,
            Category::Avoidance,
            Category::Avoidance,
            Category::Worship,
            Category::Worship,
            Category::Worship,
            Category::Status,
            Category::Status,
            Category::Status,
            Category::Vigilance,
            Category::Vigilance,
            Category::Vigilance,
        ];
        for (i, category) in expected.iter().enumerate() {
            assert_eq!(catalog.category_of(i), Some(*category));
            assert_eq!(catalog.get(i).unwrap().id, i as u32 + 1);
        }
        assert_eq!(catalog.category_of(12), None);
    }

    #[test]
    fn rejects_eleven_questions() {
        let mut questions = balanced();
        questions.pop();
        let err = QuestionCatalog::new(questions).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::QuestionCount {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn rejects_category_imbalance() {
        let mut questions = balanced();
        // Four Avoidance, two Worship.
        questions[3].category = Category::Avoidance;
        let err = QuestionCatalog::new(questions).unwrap_err();
        match err {
            CatalogError::CategoryImbalance {
                category, actual, ..
            } => {
                assert_eq!(category, "Money Avoidance");
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut questions = balanced();
        questions[5].id = 1;
        let err = QuestionCatalog::new(questions).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateQuestionId { id: 1 }));
    }

    #[test]
    fn likert_labels() {
        assert_eq!(likert_label(1), Some("Strongly disagree"));
        assert_eq!(likert_label(3), Some("Neutral"));
        assert_eq!(likert_label(5), Some("Strongly agree"));
        assert_eq!(likert_label(0), None);
        assert_eq!(likert_label(6), None);
    }
}
