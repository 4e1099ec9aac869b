//! The bundled prompt document parses completely and assembles for every card.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use money_mirror::config::DEFAULT_PROMPTS_PATH;
use money_mirror::error::PromptError;
use money_mirror::prompts::{FilePromptSource, load_prompt_document, parse_prompt_document};
use money_mirror::quiz::{ProfileCode, QuizEngine};

fn bundled_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_PROMPTS_PATH)
}

#[tokio::test]
async fn bundled_document_covers_every_profile() {
    let source = FilePromptSource::new(bundled_path());
    let doc = load_prompt_document(&source).await.expect("bundled document");

    assert!(doc.master_prompt.starts_with("A full-length tarot card illustration"));
    assert_eq!(doc.master_prompt.lines().count(), 4);
    assert!(doc.negative_prompt.starts_with("blurry, distorted face"));
    assert_eq!(doc.card_prompts.len(), 16);
    assert!(doc.missing_codes().is_empty());
}

#[tokio::test]
async fn wrapped_card_lines_are_joined_with_spaces() {
    let source = FilePromptSource::new(bundled_path());
    let doc = load_prompt_document(&source).await.unwrap();

    assert_eq!(
        doc.card_prompt("LLLL"),
        Some(
            "The subject stands barefoot in a bright, nearly empty room of pale wood, \
             holding a single small satchel. One window, one chair, a sprig of rosemary."
        )
    );
    assert_eq!(
        doc.card_prompt("LLLH"),
        Some("The subject meditates beside a still pond where a single copper coin rests on a lily pad.")
    );
}

#[tokio::test]
async fn every_scored_profile_has_an_assembled_prompt() {
    let engine = QuizEngine::builtin().unwrap();
    let doc = load_prompt_document(&FilePromptSource::new(bundled_path()))
        .await
        .unwrap();

    for code in ProfileCode::all() {
        let personality = engine.lookup(&code.to_string()).unwrap();
        let prompt = doc
            .assemble(&personality.code.to_string())
            .unwrap_or_else(|e| panic!("{code}: {e}"));
        assert!(prompt.starts_with(&doc.master_prompt));
        assert!(prompt.ends_with(&format!("Negative prompt: {}", doc.negative_prompt)));
    }
}

#[test]
fn partial_document_reports_missing_codes_in_card_order() {
    let doc = parse_prompt_document(
        "=== MASTER PROMPT ===\nportrait\n=== CARD-SPECIFIC PROMPTS ===\n\
         I. Boss (LLLL) empty room\nXVI. Crown (HHHH) throne\n",
    );

    let missing: Vec<String> = doc.missing_codes().iter().map(ToString::to_string).collect();
    assert_eq!(missing.len(), 14);
    assert_eq!(missing.first().map(String::as_str), Some("LLHL"));
    assert_eq!(missing.last().map(String::as_str), Some("HHLH"));

    assert_eq!(
        doc.assemble("LLLL").unwrap(),
        "portrait\n\nempty room\n\nNegative prompt: "
    );
    match doc.assemble("HLLH") {
        Err(PromptError::MissingCardPrompt { code }) => assert_eq!(code, "HLLH"),
        other => panic!("expected MissingCardPrompt, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = FilePromptSource::new(dir.path().join("prompts.txt"));
    let err = load_prompt_document(&source).await.unwrap_err();
    assert!(matches!(err, PromptError::Unavailable { .. }), "got {err:?}");
}
