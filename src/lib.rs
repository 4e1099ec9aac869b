//! Money Mirror: a money-script quiz with tarot-card portraits.
//!
//! - [`quiz`] scores twelve Likert answers into one of sixteen money
//!   personalities.
//! - [`prompts`] parses the tarot prompt document and assembles per-profile
//!   image prompts.
//! - [`imagegen`] forwards prompts (and an optional selfie) to OpenAI or
//!   Gemini image models.
//! - [`web`] exposes all of it over HTTP.

pub mod config;
pub mod error;
pub mod imagegen;
pub mod prompts;
pub mod quiz;
pub mod util;
pub mod web;

pub use config::Config;
pub use error::{Error, Result};
