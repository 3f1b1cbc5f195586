//! Keyword extraction: turns an annotation into a deduplicated set of
//! candidate skill/topic terms. Presence is binary; no frequency weighting.

use std::collections::BTreeSet;

use crate::nlp::annotator::Annotation;

const PROPER_NOUN_TAG: &str = "PROPN";
const LEADING_ARTICLES: &[&str] = &["a ", "an ", "the "];
const MIN_KEYWORD_CHARS: usize = 3;

/// Builds the keyword set from two sources: noun phrases (leading article
/// stripped, digit-free, length > 2) and proper-noun tokens (non-stopword,
/// length > 2), all lower-cased. A `BTreeSet` keeps downstream ordering
/// deterministic.
pub fn extract_keywords(annotation: &Annotation) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();

    for phrase in &annotation.noun_phrases {
        let lowered = phrase.to_lowercase();
        let mut candidate = lowered.trim();
        for article in LEADING_ARTICLES {
            if let Some(rest) = candidate.strip_prefix(article) {
                candidate = rest;
                break;
            }
        }
        if candidate.chars().count() >= MIN_KEYWORD_CHARS
            && !candidate.chars().any(|c| c.is_ascii_digit())
        {
            keywords.insert(candidate.to_string());
        }
    }

    for token in &annotation.tokens {
        if token.pos == PROPER_NOUN_TAG
            && !token.is_stop
            && token.text.chars().count() >= MIN_KEYWORD_CHARS
        {
            keywords.insert(token.text.to_lowercase());
        }
    }

    keywords
}
