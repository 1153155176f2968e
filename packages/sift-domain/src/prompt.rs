use serde::{Deserialize, Serialize};

use crate::{evidence::EvidenceSource, intent::IntentClassification};

/// Job descriptions are previewed, not quoted in full.
pub const JOB_DESCRIPTION_PREVIEW_CHARS: usize = 500;

/// Emitted in place of evidence bullets when retrieval found nothing.
pub const NO_EVIDENCE_SENTENCE: &str =
	"No directly relevant passages were found in the resume for this question.";

pub const SYSTEM_INSTRUCTION: &str = "You are a professional HR analyst assisting a recruiter \
who is reviewing a candidate's resume against a job description and a prior automated \
evaluation. Answer the recruiter's question directly and ground every claim in the supplied \
resume evidence; when the evidence does not support an answer, say so plainly instead of \
speculating. Formatting rules: write plain paragraphs or simple dash-prefixed lists; never use \
markup emphasis characters such as asterisks, underscores, or backticks; when citing resume \
text, quote it verbatim inside quotation marks. Keep a neutral, professional tone and do not \
make hiring decisions on the recruiter's behalf.";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatContext {
	pub candidate_name: Option<String>,
	pub resume_text: Option<String>,
	pub job_description: Option<String>,
	pub must_have_attributes: Option<String>,
	pub evaluation_result: Option<EvaluationResult>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationResult {
	pub scores: Option<EvaluationScores>,
	pub tier: Option<String>,
	pub explanation: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationScores {
	pub overall: Option<f64>,
}

/// Concatenates the known context fields in fixed order, omitting absent or
/// blank ones entirely. A present job description is always suffixed with an
/// ellipsis marker, even when it is already shorter than the preview limit.
pub fn build_context_summary(context: &ChatContext) -> String {
	let mut lines = Vec::new();

	if let Some(name) = non_blank(context.candidate_name.as_deref()) {
		lines.push(format!("Candidate: {name}"));
	}
	if let Some(job_description) = non_blank(context.job_description.as_deref()) {
		let preview: String =
			job_description.chars().take(JOB_DESCRIPTION_PREVIEW_CHARS).collect();

		lines.push(format!("Job description: {preview}..."));
	}
	if let Some(attributes) = non_blank(context.must_have_attributes.as_deref()) {
		lines.push(format!("Must-have attributes: {attributes}"));
	}
	if let Some(evaluation) = &context.evaluation_result {
		if let Some(overall) = evaluation.scores.as_ref().and_then(|scores| scores.overall) {
			lines.push(format!("Overall evaluation score: {overall}"));
		}
		if let Some(tier) = non_blank(evaluation.tier.as_deref()) {
			lines.push(format!("Tier: {tier}"));
		}
		if let Some(explanation) = non_blank(evaluation.explanation.as_deref()) {
			lines.push(format!("Evaluation summary: {explanation}"));
		}
	}

	lines.join("\n")
}

pub fn build_evidence_block(evidence: &[EvidenceSource]) -> String {
	if evidence.is_empty() {
		return NO_EVIDENCE_SENTENCE.to_string();
	}

	evidence.iter().map(|source| format!("- {}", source.content)).collect::<Vec<_>>().join("\n")
}

/// Assembles the per-request user message: context summary, literal query,
/// intent label with confidence, evidence block.
pub fn build_user_message(
	context: &ChatContext,
	query: &str,
	classification: &IntentClassification,
	evidence: &[EvidenceSource],
) -> String {
	let mut sections = Vec::new();
	let summary = build_context_summary(context);

	if !summary.is_empty() {
		sections.push(summary);
	}

	sections.push(format!("Question: {query}"));
	sections.push(format!(
		"Detected intent: {} (confidence {:.2})",
		classification.intent, classification.confidence
	));
	sections.push(format!("Supporting resume evidence:\n{}", build_evidence_block(evidence)));

	sections.join("\n\n")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
