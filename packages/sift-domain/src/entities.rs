use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

/// Canonical spellings reported back to the caller; matching is case-insensitive.
pub const TECHNOLOGY_VOCABULARY: &[&str] = &[
	"Python",
	"Java",
	"JavaScript",
	"TypeScript",
	"C++",
	"C#",
	"Go",
	"Rust",
	"Ruby",
	"PHP",
	"Swift",
	"Kotlin",
	"Scala",
	"SQL",
	"HTML",
	"CSS",
	"React",
	"Angular",
	"Vue",
	"Node.js",
	"Django",
	"Flask",
	"Spring",
	"AWS",
	"Azure",
	"GCP",
	"Google Cloud",
	"Docker",
	"Kubernetes",
	"Terraform",
	"Ansible",
	"Jenkins",
	"Git",
	"CI/CD",
	"DevOps",
	"Linux",
	"Machine Learning",
	"Deep Learning",
	"Data Science",
	"NLP",
	"TensorFlow",
	"PyTorch",
	"PMP",
	"CISSP",
	"CPA",
	"MBA",
	"Six Sigma",
	"Scrum",
	"Agile",
	"Leadership",
	"Communication",
	"Project Management",
	"Teamwork",
	"Problem Solving",
];

static LOWERCASE_VOCABULARY: LazyLock<Vec<(&'static str, String)>> = LazyLock::new(|| {
	TECHNOLOGY_VOCABULARY.iter().map(|term| (*term, term.to_lowercase())).collect()
});

static EXPERIENCE_YEARS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)(\d+)\s*(?:years?|yrs?)\s*(?:of\s+)?(?:experience|exp)")
		.expect("experience-years pattern must compile")
});

/// Pulls structured hints out of a free-text query: mentioned technologies
/// (comma-separated, in order of first appearance) and a claimed number of
/// years of experience. Returns an empty map when nothing matches.
///
/// Matching is literal substring containment with every occurrence reported:
/// "JavaScript" yields both "Java" and "JavaScript", and a term mentioned
/// twice appears twice.
pub fn extract_entities(query: &str) -> BTreeMap<String, String> {
	let lowered = query.to_lowercase();
	let mut entities = BTreeMap::new();
	let mut mentions: Vec<(usize, &str)> = Vec::new();

	for (term, lowercase_term) in LOWERCASE_VOCABULARY.iter() {
		for (start, _) in lowered.match_indices(lowercase_term.as_str()) {
			mentions.push((start, *term));
		}
	}

	// Stable sort keeps vocabulary order for terms first seen at the same
	// offset, e.g. "Java" inside "JavaScript".
	mentions.sort_by_key(|(start, _)| *start);

	if !mentions.is_empty() {
		let joined = mentions.iter().map(|(_, term)| *term).collect::<Vec<_>>().join(", ");

		entities.insert("technologies".to_string(), joined);
	}
	if let Some(caps) = EXPERIENCE_YEARS.captures(query) {
		entities.insert("experience_years".to_string(), caps[1].to_string());
	}

	entities
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_years_and_technologies_in_first_appearance_order() {
		let entities = extract_entities("5 years of experience in Python and AWS");

		assert_eq!(entities.get("experience_years").map(String::as_str), Some("5"));

		let technologies = entities.get("technologies").expect("technologies must be present");

		assert!(technologies.contains("Python"));
		assert!(technologies.contains("AWS"));
		assert!(
			technologies.find("Python") < technologies.find("AWS"),
			"terms must keep query order"
		);
	}

	#[test]
	fn substring_matching_reports_overlapping_terms() {
		let entities = extract_entities("How strong is the JavaScript work?");

		assert_eq!(entities.get("technologies").map(String::as_str), Some("Java, JavaScript"));
	}

	#[test]
	fn matching_is_case_insensitive() {
		let entities = extract_entities("does she know PYTHON");

		assert_eq!(entities.get("technologies").map(String::as_str), Some("Python"));
	}

	#[test]
	fn repeated_mentions_are_reported_once_per_occurrence() {
		let entities = extract_entities("Python scripting plus Python services");

		assert_eq!(entities.get("technologies").map(String::as_str), Some("Python, Python"));
	}

	#[test]
	fn yrs_exp_shorthand_is_accepted() {
		let entities = extract_entities("candidate claims 12 yrs exp");

		assert_eq!(entities.get("experience_years").map(String::as_str), Some("12"));
	}

	#[test]
	fn years_pattern_is_unanchored() {
		let entities = extract_entities("10 years of experiences across two teams");

		assert_eq!(entities.get("experience_years").map(String::as_str), Some("10"));
	}

	#[test]
	fn empty_map_when_nothing_matches() {
		assert!(extract_entities("tell me about the candidate").is_empty());
	}
}
