//! The sixteen money personalities.

use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::data;
use super::profile::{PROFILE_COUNT, ProfileCode};
use super::Category;
use crate::error::{CatalogError, QuizError};

/// One reflection paragraph per money script, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflections([String; Category::COUNT]);

impl Reflections {
    pub fn new(paragraphs: [String; Category::COUNT]) -> Self {
        Self(paragraphs)
    }

    pub fn get(&self, category: Category) -> &str {
        &self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL.into_iter().zip(self.0.iter().map(String::as_str))
    }
}

impl Serialize for Reflections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, text) in self.iter() {
            map.serialize_entry(category.name(), text)?;
        }
        map.end()
    }
}

/// A personality archetype bound to exactly one profile code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    #[serde(rename = "profile")]
    pub code: ProfileCode,
    pub name: String,
    pub summary: String,
    #[serde(rename = "scriptReflections")]
    pub reflections: Reflections,
}

/// Immutable catalog with one personality per profile code.
///
/// Entries are stored in card order so that `get` is an index, not a search.
#[derive(Debug, Clone)]
pub struct PersonalityCatalog {
    entries: Vec<Personality>,
}

impl PersonalityCatalog {
    /// Validate that every one of the sixteen codes appears exactly once.
    pub fn new(personalities: Vec<Personality>) -> Result<Self, CatalogError> {
        if personalities.len() != PROFILE_COUNT {
            return Err(CatalogError::PersonalityCount {
                expected: PROFILE_COUNT,
                actual: personalities.len(),
            });
        }

        let mut seen = HashSet::with_capacity(PROFILE_COUNT);
        for personality in &personalities {
            if !seen.insert(personality.code) {
                return Err(CatalogError::DuplicateProfile {
                    code: personality.code.to_string(),
                });
            }
        }

        // Sixteen distinct codes out of sixteen possible means full coverage.
        let mut entries = personalities;
        entries.sort_by_key(|p| p.code.card_index());
        Ok(Self { entries })
    }

    /// The built-in tarot personalities.
    pub fn builtin() -> Result<Self, CatalogError> {
        let personalities = data::PERSONALITIES
            .iter()
            .map(|seed| {
                let code = seed
                    .code
                    .parse::<ProfileCode>()
                    .map_err(|_| CatalogError::InvalidProfileCode {
                        code: seed.code.to_string(),
                    })?;
                Ok(Personality {
                    code,
                    name: seed.name.to_string(),
                    summary: seed.summary.to_string(),
                    reflections: Reflections::new(seed.reflections.map(str::to_string)),
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Self::new(personalities)
    }

    /// Exact-match lookup by code string. Unknown or malformed codes are an
    /// error; there is no default personality.
    pub fn lookup(&self, code: &str) -> Result<&Personality, QuizError> {
        let parsed: ProfileCode = code.parse()?;
        Ok(self.get(parsed))
    }

    /// Infallible lookup for an already-parsed code.
    pub fn get(&self, code: ProfileCode) -> &Personality {
        &self.entries[code.card_index()]
    }

    /// Personalities in card order.
    pub fn iter(&self) -> impl Iterator<Item = &Personality> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn placeholder(code: ProfileCode) -> Personality {
        Personality {
            code,
            name: format!("Card {code}"),
            summary: String::new(),
            reflections: Reflections::new(Default::default()),
        }
    }

    #[test]
    fn every_code_resolves() {
        let catalog = PersonalityCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 16);
        for code in ProfileCode::all() {
            let personality = catalog.lookup(&code.to_string()).unwrap();
            assert_eq!(personality.code, code);
            assert!(!personality.name.is_empty());
            for (_, text) in personality.reflections.iter() {
                assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn known_archetypes() {
        let catalog = PersonalityCatalog::builtin().unwrap();
        assert_eq!(catalog.lookup("LLLL").unwrap().name, "The Bare Bones Boss");
        assert_eq!(catalog.lookup("LHHL").unwrap().name, "The Luxe Chaser");
    }

    #[test]
    fn unknown_code_is_not_found() {
        let catalog = PersonalityCatalog::builtin().unwrap();
        for bad in ["XXXX", "hllh", "HLL", ""] {
            let err = catalog.lookup(bad).unwrap_err();
            assert_eq!(
                err,
                QuizError::UnknownProfile {
                    code: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn rejects_fifteen_entries() {
        let entries: Vec<_> = ProfileCode::all().skip(1).map(placeholder).collect();
        let err = PersonalityCatalog::new(entries).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PersonalityCount {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let mut entries: Vec<_> = ProfileCode::all().map(placeholder).collect();
        entries[15] = placeholder(entries[0].code);
        let err = PersonalityCatalog::new(entries).unwrap_err();
        match err {
            CatalogError::DuplicateProfile { code } => assert_eq!(code, "LLLL"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn catalog_order_is_card_order_regardless_of_input() {
        let mut entries: Vec<_> = ProfileCode::all().map(placeholder).collect();
        entries.reverse();
        let catalog = PersonalityCatalog::new(entries).unwrap();
        let codes: Vec<_> = catalog.iter().map(|p| p.code).collect();
        let expected: Vec<_> = ProfileCode::all().collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn serializes_with_wire_names() {
        let catalog = PersonalityCatalog::builtin().unwrap();
        let json = serde_json::to_value(catalog.lookup("HLLH").unwrap()).unwrap();
        assert_eq!(json["profile"], "HLLH");
        let reflections = json["scriptReflections"].as_object().unwrap();
        let keys: Vec<_> = reflections.keys().cloned().collect();
        let mut expected: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        expected.sort();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, expected);
    }
}
