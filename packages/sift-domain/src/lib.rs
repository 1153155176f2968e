pub mod entities;
pub mod evidence;
pub mod intent;
pub mod prompt;

pub use entities::extract_entities;
pub use evidence::{EvidenceKind, EvidenceSource, MAX_EVIDENCE, search_resume};
pub use intent::{
	FALLBACK_CONFIDENCE, Intent, IntentClassification, IntentRule, MATCH_CONFIDENCE,
	classify_intent, classify_intent_with, default_intent_rules,
};
pub use prompt::{ChatContext, EvaluationResult, EvaluationScores, SYSTEM_INSTRUCTION};
