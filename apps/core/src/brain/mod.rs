//! # Brain Module
//!
//! Rule-based reply selection for the campus assistant.
//!
//! ## Components
//! - `intent`: ordered keyword rules mapping an utterance to a category
//! - `templates`: canned replies, welcome text and suggestion chips

pub mod intent;
pub mod templates;

// Re-export main types for convenience
#[allow(unused_imports)]
pub use intent::{Category, IntentClassifier, IntentResult, IntentRule, DEFAULT_RULES};
pub use templates::{SUGGESTION_CHIPS, WELCOME_MESSAGE};
