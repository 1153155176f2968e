use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Upper bound on evidence returned per query; part of the observable
/// contract, not tunable configuration.
pub const MAX_EVIDENCE: usize = 5;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
	Resume,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceSource {
	#[serde(rename = "type")]
	pub kind: EvidenceKind,
	pub content: String,
	pub relevance_score: f32,
	/// Human-readable locator, e.g. "Sentence 3". Numbering counts surviving
	/// (non-empty) sentence units only.
	pub location: String,
}

/// Ranks resume sentences by lexical overlap with the query.
///
/// Sentences are split on runs of `.`, `!`, `?`; each surviving sentence is
/// scored as the fraction of query terms appearing in it as case-insensitive
/// substrings. Zero-scoring sentences are dropped, the rest are stably sorted
/// by descending score (ties keep resume order) and truncated to
/// [`MAX_EVIDENCE`]. Deliberately naive term overlap, not semantic search.
pub fn search_resume(resume_text: &str, query: &str) -> Vec<EvidenceSource> {
	if resume_text.trim().is_empty() {
		return Vec::new();
	}

	let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

	if terms.is_empty() {
		return Vec::new();
	}

	let mut ranked = Vec::new();
	let mut position = 0_usize;

	for unit in resume_text.split(['.', '!', '?']) {
		let sentence = unit.trim();

		if sentence.is_empty() {
			continue;
		}

		position += 1;

		let lowered = sentence.to_lowercase();
		// Boolean presence per term; a term occurring twice in one sentence
		// still counts once.
		let matched = terms.iter().filter(|term| lowered.contains(term.as_str())).count();

		if matched == 0 {
			continue;
		}

		ranked.push(EvidenceSource {
			kind: EvidenceKind::Resume,
			content: sentence.to_string(),
			relevance_score: matched as f32 / terms.len() as f32,
			location: format!("Sentence {position}"),
		});
	}

	// sort_by is stable, so equal scores keep ascending sentence order.
	ranked.sort_by(|a, b| {
		b.relevance_score.partial_cmp(&a.relevance_score).unwrap_or(Ordering::Equal)
	});
	ranked.truncate(MAX_EVIDENCE);

	ranked
}
