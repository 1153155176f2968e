use sift_domain::{
	FALLBACK_CONFIDENCE, Intent, MATCH_CONFIDENCE, MAX_EVIDENCE, classify_intent,
	extract_entities, search_resume,
};

#[test]
fn why_qualified_phrasings_are_evaluation_challenges() {
	for query in [
		"Why was Jordan qualified for this role?",
		"why was the candidate rated so highly",
		"How come this resume scored as Top Tier?",
	] {
		let result = classify_intent(query);

		assert_eq!(result.intent, Intent::EvaluationChallenge, "query: {query}");
		assert_eq!(result.confidence, MATCH_CONFIDENCE, "query: {query}");
	}
}

#[test]
fn unmatched_queries_report_unknown_with_fixed_confidence() {
	let result = classify_intent("banana");

	assert_eq!(result.intent, Intent::Unknown);
	assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
}

#[test]
fn declaration_order_breaks_cross_intent_ties() {
	// "compare" (candidate_comparison) and "unclear" (ambiguity_check) both
	// match; candidate_comparison is declared earlier and must win.
	let result = classify_intent("Please compare these two unclear resumes");

	assert_eq!(result.intent, Intent::CandidateComparison);
}

#[test]
fn entity_extraction_feeds_classification_output() {
	let result = classify_intent("Does the candidate have 5 years of experience with Python?");

	assert_eq!(result.entities.get("experience_years").map(String::as_str), Some("5"));
	assert!(result.entities.get("technologies").is_some_and(|t| t.contains("Python")));
}

#[test]
fn extraction_includes_duplicate_mentions() {
	let entities = extract_entities("Python scripting plus Python services");

	assert_eq!(
		entities.get("technologies").map(String::as_str),
		Some("Python, Python"),
		"a term mentioned twice must be reported twice"
	);
}

#[test]
fn extraction_keeps_first_appearance_order() {
	let entities = extract_entities("5 years of experience in Python and AWS");
	let technologies = entities.get("technologies").expect("technologies present");

	assert_eq!(technologies, "Python, AWS");
	assert_eq!(entities.get("experience_years").map(String::as_str), Some("5"));
}

#[test]
fn retrieval_is_bounded_and_monotonic() {
	let resume = "Python a. Python b. Python c. Python d. Python e. Python f. No match here at \
		all, nothing shared.";
	let results = search_resume(resume, "python");

	assert!(results.len() <= MAX_EVIDENCE);

	for pair in results.windows(2) {
		assert!(pair[0].relevance_score >= pair[1].relevance_score);
	}
	assert!(results.iter().all(|source| source.relevance_score > 0.0));
}

#[test]
fn empty_resume_yields_no_evidence() {
	assert!(search_resume("", "anything").is_empty());
}

#[test]
fn zero_overlap_sentences_never_surface() {
	let resume = "I led a team of 5 engineers. I wrote Python code. Completely unrelated filler.";
	let results = search_resume(resume, "python team");

	assert_eq!(results.len(), 2);
	assert!(results.iter().all(|source| !source.content.contains("filler")));
}
