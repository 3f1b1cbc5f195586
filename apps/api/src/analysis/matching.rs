//! Match engine: keyword-overlap scoring plus semantic-similarity scoring
//! against a job description.

use std::collections::BTreeSet;

use tracing::warn;

use crate::analysis::document::Document;
use crate::analysis::sections::SectionName;
use crate::nlp::embedder::{cosine_similarity, Embed};

const MISSING_KEYWORD_CAP: usize = 15;
const MIN_JD_KEYWORD_CHARS: usize = 3;
const KEYWORD_WEIGHT: f64 = 0.6;
const SEMANTIC_WEIGHT: f64 = 0.4;

/// Similarities at or below this floor rescale to 0.
const SIMILARITY_FLOOR: f64 = 0.1;
/// Width of the useful similarity band; the floor plus this width maps to 100.
const SIMILARITY_BAND: f64 = 0.7;

/// Outcome of matching a resume against a JD.
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub keyword_match: f64,
    pub semantic_match: f64,
    /// `0.6 * keyword_match + 0.4 * semantic_match`
    pub combined: f64,
    /// JD keywords absent from the resume, longest first, at most 15.
    pub missing_keywords: Vec<String>,
}

/// Runs both match factors and blends them.
pub async fn match_against(
    resume: &Document,
    jd: &Document,
    embedder: Option<&dyn Embed>,
) -> MatchResult {
    let (keyword, missing_keywords) = keyword_match(&resume.keywords, &jd.keywords);
    let semantic = semantic_match(resume, jd, embedder).await;

    MatchResult {
        keyword_match: keyword,
        semantic_match: semantic,
        combined: KEYWORD_WEIGHT * keyword + SEMANTIC_WEIGHT * semantic,
        missing_keywords,
    }
}

/// Fraction of JD keywords (length > 2) covered by the resume keyword set,
/// scaled to [0,100], plus the uncovered keywords ranked longest-first.
/// Longer terms tend to be the more specific, compound skills, so they make
/// the better suggestions; ties keep the set's lexicographic order. An empty
/// JD keyword set scores 0.
pub fn keyword_match(
    resume_keywords: &BTreeSet<String>,
    jd_keywords: &BTreeSet<String>,
) -> (f64, Vec<String>) {
    let jd_keywords: Vec<&str> = jd_keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| keyword.chars().count() >= MIN_JD_KEYWORD_CHARS)
        .collect();

    if jd_keywords.is_empty() {
        return (0.0, Vec::new());
    }

    let covered = jd_keywords
        .iter()
        .filter(|keyword| resume_keywords.contains(**keyword))
        .count();
    let score = covered as f64 / jd_keywords.len() as f64 * 100.0;

    let mut missing: Vec<String> = jd_keywords
        .iter()
        .filter(|keyword| !resume_keywords.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect();
    // Stable sort: equal-length keywords keep their lexicographic order.
    missing.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    missing.truncate(MISSING_KEYWORD_CAP);

    (score, missing)
}

/// Embeds the resume context (experience section when present, full text
/// otherwise) and the JD text, then rescales cosine similarity to [0,100].
/// A missing or failing embedder degrades to 0; it never fails the request.
pub async fn semantic_match(
    resume: &Document,
    jd: &Document,
    embedder: Option<&dyn Embed>,
) -> f64 {
    let Some(embedder) = embedder else {
        return 0.0;
    };

    let experience = resume.section(SectionName::Experience);
    let context = if experience.is_empty() {
        resume.text.clone()
    } else {
        experience.to_string()
    };

    let inputs = [context, jd.text.clone()];
    match embedder.embed(&inputs).await {
        Ok(vectors) if vectors.len() == 2 => {
            rescale_similarity(cosine_similarity(&vectors[0], &vectors[1]))
        }
        Ok(vectors) => {
            warn!(
                "Embedder returned {} vectors for 2 inputs; semantic match degraded to 0",
                vectors.len()
            );
            0.0
        }
        Err(e) => {
            warn!("Embedding failed; semantic match degraded to 0: {e}");
            0.0
        }
    }
}

/// Maps raw cosine similarity onto [0,100]: values at or below 0.1 score 0,
/// values at or above 0.8 score 100, linear in between.
pub fn rescale_similarity(similarity: f32) -> f64 {
    ((f64::from(similarity) - SIMILARITY_FLOOR) * (100.0 / SIMILARITY_BAND)).clamp(0.0, 100.0)
}
