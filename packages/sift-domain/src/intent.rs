use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entities::extract_entities;

/// Confidence reported whenever any rule matches.
pub const MATCH_CONFIDENCE: f32 = 0.8;
/// Confidence reported for the unknown fallback.
pub const FALLBACK_CONFIDENCE: f32 = 0.3;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
	ResumeDetailInquiry,
	EvaluationChallenge,
	CandidateComparison,
	SkillVerification,
	ExperienceAnalysis,
	AmbiguityCheck,
	Unknown,
}
impl Intent {
	pub fn label(&self) -> &'static str {
		match self {
			Self::ResumeDetailInquiry => "resume_detail_inquiry",
			Self::EvaluationChallenge => "evaluation_challenge",
			Self::CandidateComparison => "candidate_comparison",
			Self::SkillVerification => "skill_verification",
			Self::ExperienceAnalysis => "experience_analysis",
			Self::AmbiguityCheck => "ambiguity_check",
			Self::Unknown => "unknown",
		}
	}
}
impl fmt::Display for Intent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Debug)]
pub struct IntentRule {
	pub intent: Intent,
	pub patterns: Vec<Regex>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntentClassification {
	pub intent: Intent,
	pub confidence: f32,
	pub entities: BTreeMap<String, String>,
}

static DEFAULT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
	vec![
		rule(Intent::ResumeDetailInquiry, &[
			r"(?i)\b(what|which|tell me about)\b.*\b(experience|skills?|education|projects?|roles?|background)",
			r"(?i)\b(does|has|did)\b.*\b(candidate|he|she|they)\b.*\b(have|know|use|work)",
		]),
		rule(Intent::EvaluationChallenge, &[
			r"(?i)\b(why|how come)\b.*\b(qualified|unqualified|not qualified|tier|scored?|rated|rejected)",
			r"(?i)\b(disagree|wrong|incorrect|unfair|mistake)\b",
		]),
		rule(Intent::CandidateComparison, &[
			r"(?i)\b(compare|comparison|versus|vs|difference between|better than)\b",
			r"(?i)\b(who|which candidate)\b.*\b(better|stronger|best|more qualified)",
		]),
		rule(Intent::SkillVerification, &[
			r"(?i)\b(verify|confirm|validate|prove)\b.*\b(skills?|knowledge|proficien|certif|abilit)",
			r"(?i)\b(really|actually|truly)\b.*\b(knows?|skilled|proficient|experienced)",
		]),
		rule(Intent::ExperienceAnalysis, &[
			r"(?i)\b(how (many|much)|years of)\b.*\b(experience|work|exposure)",
			r"(?i)\b(seniority|senior|junior|entry.level|career (level|progression))\b",
		]),
		rule(Intent::AmbiguityCheck, &[
			r"(?i)\b(ambiguous|ambiguity|unclear|vague|confusing|uncertain)\b",
			r"(?i)\b(clarify|clarification|what (do you|does that|does this) mean)\b",
		]),
	]
});

fn rule(intent: Intent, patterns: &[&str]) -> IntentRule {
	let patterns = patterns
		.iter()
		.map(|pattern| Regex::new(pattern).expect("intent pattern must compile"))
		.collect();

	IntentRule { intent, patterns }
}

pub fn default_intent_rules() -> &'static [IntentRule] {
	&DEFAULT_RULES
}

/// Classifies against the built-in rule table.
pub fn classify_intent(query: &str) -> IntentClassification {
	classify_intent_with(default_intent_rules(), query)
}

/// First match wins: rules are evaluated in table order, and within a rule in
/// pattern order. A later rule never overrides an earlier match.
pub fn classify_intent_with(rules: &[IntentRule], query: &str) -> IntentClassification {
	for rule in rules {
		for pattern in &rule.patterns {
			if pattern.is_match(query) {
				return IntentClassification {
					intent: rule.intent,
					confidence: MATCH_CONFIDENCE,
					entities: extract_entities(query),
				};
			}
		}
	}

	IntentClassification {
		intent: Intent::Unknown,
		confidence: FALLBACK_CONFIDENCE,
		entities: extract_entities(query),
	}
}
