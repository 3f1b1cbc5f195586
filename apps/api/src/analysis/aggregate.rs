//! Final score aggregation: blends section quality, completeness, formatting,
//! and (when a JD is active) the match score into one weighted total.

use serde::{Serialize, Serializer};

use crate::analysis::document::Document;
use crate::analysis::matching;
use crate::analysis::quality::{completeness_score, formatting_score, section_score};
use crate::analysis::sections::SectionName;
use crate::nlp::embedder::Embed;

// Base quality weights; they sum to 1.0 so the blend stays in [0,100].
const EXPERIENCE_WEIGHT: f64 = 0.35;
const EDUCATION_WEIGHT: f64 = 0.15;
const SKILLS_WEIGHT: f64 = 0.20;
const FORMATTING_WEIGHT: f64 = 0.15;
const COMPLETENESS_WEIGHT: f64 = 0.15;

// With an active JD the match score dominates, but quality still matters.
const MATCH_WEIGHT: f64 = 0.6;
const QUALITY_WEIGHT: f64 = 0.4;

const FEEDBACK_THRESHOLD: f64 = 70.0;

/// A JD whose trimmed text is at most this long is treated as absent.
pub const MIN_JD_CHARS: usize = 10;

const IMPROVEMENT_FEEDBACK: &[&str] = &[
    "Action Verbs: Use strong verbs like 'Managed', 'Developed' instead of 'Worked on'.",
    "Quantify Results: Add numbers (e.g., 'Increased revenue by 20%') to your experience.",
    "Formatting: Use bullet points for readability.",
];
const AFFIRMATIVE_FEEDBACK: &[&str] = &["Resume is well-structured!"];

/// Scoring mode reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMode {
    GeneralQuality,
    JdMatch,
}

/// Per-factor scores, each already clamped to [0,100].
#[derive(Debug, Clone, Serialize)]
pub struct SectionScores {
    #[serde(serialize_with = "round1")]
    pub experience: f64,
    #[serde(serialize_with = "round1")]
    pub education: f64,
    #[serde(serialize_with = "round1")]
    pub skills: f64,
    #[serde(serialize_with = "round1")]
    pub summary: f64,
    #[serde(serialize_with = "round1")]
    pub formatting: f64,
    #[serde(serialize_with = "round1")]
    pub completeness: f64,
}

/// The full scoring result for one request. Produced fresh per call; no
/// state survives between invocations.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    #[serde(serialize_with = "round1")]
    pub total_score: f64,
    #[serde(serialize_with = "round1")]
    pub base_quality: f64,
    /// Combined match score; 0 when no JD is active.
    #[serde(serialize_with = "round1")]
    pub jd_match: f64,
    /// Keyword-overlap factor of `jd_match`; 0 when no JD is active.
    #[serde(serialize_with = "round1")]
    pub keyword_match: f64,
    /// Semantic-similarity factor of `jd_match`; 0 when no JD is active or
    /// no embedder is configured.
    #[serde(serialize_with = "round1")]
    pub semantic_match: f64,
    pub section_scores: SectionScores,
    /// At most 15 entries, longest first.
    pub missing_keywords: Vec<String>,
    pub mode: ScoreMode,
    pub feedback: Vec<String>,
}

/// Scores a resume, optionally against a JD.
///
/// Pure arithmetic over the two documents except for at most one embedding
/// call; never fails for a well-formed `Document`, including one with
/// entirely empty sections. A JD with trimmed text of 10 characters or fewer
/// is ignored and the mode stays `general_quality`.
pub async fn score(
    resume: &Document,
    jd: Option<&Document>,
    embedder: Option<&dyn Embed>,
) -> ScoreBreakdown {
    let section_scores = SectionScores {
        experience: section_score(
            resume.section(SectionName::Experience),
            SectionName::Experience,
        ),
        education: section_score(
            resume.section(SectionName::Education),
            SectionName::Education,
        ),
        skills: section_score(resume.section(SectionName::Skills), SectionName::Skills),
        summary: section_score(resume.section(SectionName::Summary), SectionName::Summary),
        formatting: formatting_score(&resume.text),
        completeness: completeness_score(&resume.metadata),
    };

    let base_quality = EXPERIENCE_WEIGHT * section_scores.experience
        + EDUCATION_WEIGHT * section_scores.education
        + SKILLS_WEIGHT * section_scores.skills
        + FORMATTING_WEIGHT * section_scores.formatting
        + COMPLETENESS_WEIGHT * section_scores.completeness;

    let active_jd = jd.filter(|document| document.text.trim().chars().count() > MIN_JD_CHARS);

    let (total_score, match_result, mode) = match active_jd {
        Some(jd) => {
            let result = matching::match_against(resume, jd, embedder).await;
            (
                MATCH_WEIGHT * result.combined + QUALITY_WEIGHT * base_quality,
                result,
                ScoreMode::JdMatch,
            )
        }
        None => (base_quality, matching::MatchResult::default(), ScoreMode::GeneralQuality),
    };

    let feedback = if base_quality < FEEDBACK_THRESHOLD {
        IMPROVEMENT_FEEDBACK
    } else {
        AFFIRMATIVE_FEEDBACK
    }
    .iter()
    .map(|line| line.to_string())
    .collect();

    ScoreBreakdown {
        total_score,
        base_quality,
        jd_match: match_result.combined,
        keyword_match: match_result.keyword_match,
        semantic_match: match_result.semantic_match,
        section_scores,
        missing_keywords: match_result.missing_keywords,
        mode,
        feedback,
    }
}

/// Rounds to one decimal at the serialization boundary only; internal math
/// keeps full `f64` precision.
fn round1<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sections::{presence_flags, segment};
    use crate::errors::AppError;
    use async_trait::async_trait;

    /// Builds a Document the way `analyze` would, minus the annotator call.
    fn document(text: &str, keywords: &[&str]) -> Document {
        let sections = segment(text);
        let metadata = presence_flags(&sections);
        Document {
            text: text.to_string(),
            sections,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            metadata,
        }
    }

    fn strong_resume() -> Document {
        let experience: String = std::iter::repeat(
            "- Led a team and delivered the billing platform, increased by 30% \
             throughput while managed 12 engineers across 5+ years of work",
        )
        .take(8)
        .collect::<Vec<_>>()
        .join("\n");
        let text = format!(
            "Summary\nSeasoned platform engineer who builds reliable systems and mentors \
             teams through complex migrations with care, rigor, patience, empathy, and \
             clear written communication every single day of the working week\n\
             Experience\n{experience}\n\
             Education\nBSc Computer Science\n\
             Skills\nRust, Python, SQL, Kafka\n\
             Projects\nOpen source tooling\n\
             Contact\njane@example.com"
        );
        document(&text, &["python", "rust", "kafka", "sql"])
    }

    struct FixedEmbedder(Vec<Vec<f32>>);

    #[async_trait]
    impl Embed for FixedEmbedder {
        async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_empty_resume_scores_floor_values() {
        let resume = document("", &[]);
        let breakdown = score(&resume, None, None).await;

        assert_eq!(breakdown.section_scores.experience, 0.0);
        assert_eq!(breakdown.section_scores.education, 0.0);
        assert_eq!(breakdown.section_scores.skills, 0.0);
        assert_eq!(breakdown.section_scores.summary, 0.0);
        assert_eq!(breakdown.section_scores.completeness, 0.0);
        // No shouting, no bullets (-10), no email (-20)
        assert_eq!(breakdown.section_scores.formatting, 70.0);
        // base = 0.15 * 70
        assert!((breakdown.base_quality - 10.5).abs() < 1e-9);
        assert_eq!(breakdown.total_score, breakdown.base_quality);
        assert_eq!(breakdown.mode, ScoreMode::GeneralQuality);
    }

    #[tokio::test]
    async fn test_no_jd_mode_is_general_quality_with_zero_match() {
        let resume = strong_resume();
        let breakdown = score(&resume, None, None).await;
        assert_eq!(breakdown.mode, ScoreMode::GeneralQuality);
        assert_eq!(breakdown.jd_match, 0.0);
        assert_eq!(breakdown.keyword_match, 0.0);
        assert_eq!(breakdown.semantic_match, 0.0);
        assert!(breakdown.missing_keywords.is_empty());
        assert_eq!(breakdown.total_score, breakdown.base_quality);
    }

    #[tokio::test]
    async fn test_trivial_jd_is_treated_as_absent() {
        let resume = strong_resume();
        let jd = document("short one", &["python"]);
        assert!(jd.text.trim().chars().count() <= MIN_JD_CHARS);

        let breakdown = score(&resume, Some(&jd), None).await;
        assert_eq!(breakdown.mode, ScoreMode::GeneralQuality);
        assert_eq!(breakdown.jd_match, 0.0);
    }

    #[tokio::test]
    async fn test_active_jd_switches_mode_and_blends() {
        let resume = strong_resume();
        let jd = document(
            "We need a senior engineer with python, kafka and docker experience",
            &["python", "kafka", "docker"],
        );
        let breakdown = score(&resume, Some(&jd), None).await;

        assert_eq!(breakdown.mode, ScoreMode::JdMatch);
        // keyword = 2/3 of 100, semantic = 0 (no embedder)
        assert!((breakdown.keyword_match - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(breakdown.semantic_match, 0.0);
        let expected_match = 0.6 * (200.0 / 3.0);
        assert!((breakdown.jd_match - expected_match).abs() < 1e-9);
        let expected_total = 0.6 * expected_match + 0.4 * breakdown.base_quality;
        assert!((breakdown.total_score - expected_total).abs() < 1e-9);
        assert_eq!(breakdown.missing_keywords, vec!["docker".to_string()]);
    }

    #[tokio::test]
    async fn test_jd_with_empty_keyword_set_still_reports_jd_match_mode() {
        let resume = strong_resume();
        let jd = document("a long enough jd text without keywords", &[]);
        let breakdown = score(&resume, Some(&jd), None).await;
        assert_eq!(breakdown.mode, ScoreMode::JdMatch);
        assert_eq!(breakdown.jd_match, 0.0);
    }

    #[tokio::test]
    async fn test_semantic_factor_raises_match_score() {
        let resume = strong_resume();
        let jd = document(
            "We need a senior engineer with python, kafka and docker experience",
            &["python", "kafka", "docker"],
        );
        let embedder = FixedEmbedder(vec![vec![1.0, 0.0], vec![1.0, 0.0]]);
        let breakdown = score(&resume, Some(&jd), Some(&embedder)).await;

        assert_eq!(breakdown.semantic_match, 100.0);
        assert!((breakdown.keyword_match - 200.0 / 3.0).abs() < 1e-9);
        let expected_match = 0.6 * (200.0 / 3.0) + 0.4 * 100.0;
        assert!((breakdown.jd_match - expected_match).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_all_scores_stay_in_bounds() {
        let resume = strong_resume();
        let jd = document(
            "python kafka rust sql docker kubernetes terraform engineer",
            &["python", "kafka", "rust", "sql"],
        );
        let embedder = FixedEmbedder(vec![vec![1.0, 0.0], vec![1.0, 0.0]]);
        let breakdown = score(&resume, Some(&jd), Some(&embedder)).await;

        for value in [
            breakdown.total_score,
            breakdown.base_quality,
            breakdown.jd_match,
            breakdown.section_scores.experience,
            breakdown.section_scores.education,
            breakdown.section_scores.skills,
            breakdown.section_scores.summary,
            breakdown.section_scores.formatting,
            breakdown.section_scores.completeness,
        ] {
            assert!((0.0..=100.0).contains(&value), "out of bounds: {value}");
        }
    }

    #[tokio::test]
    async fn test_scoring_is_idempotent() {
        let resume = strong_resume();
        let jd = document(
            "We need a senior engineer with python, kafka and docker experience",
            &["python", "kafka", "docker"],
        );
        let embedder = FixedEmbedder(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);

        let first = score(&resume, Some(&jd), Some(&embedder)).await;
        let second = score(&resume, Some(&jd), Some(&embedder)).await;
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_feedback_switches_on_quality_threshold() {
        let weak = document("barely anything here", &[]);
        let breakdown = score(&weak, None, None).await;
        assert!(breakdown.base_quality < 70.0);
        assert_eq!(breakdown.feedback.len(), 3);

        let strong = strong_resume();
        let breakdown = score(&strong, None, None).await;
        assert!(
            breakdown.base_quality >= 70.0,
            "fixture should clear the threshold, got {}",
            breakdown.base_quality
        );
        assert_eq!(breakdown.feedback, vec!["Resume is well-structured!".to_string()]);
    }

    #[tokio::test]
    async fn test_serialization_rounds_to_one_decimal() {
        let resume = document("", &[]);
        let breakdown = score(&resume, None, None).await;
        let value = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(value["base_quality"], 10.5);
        assert_eq!(value["section_scores"]["formatting"], 70.0);
        assert_eq!(value["mode"], "general_quality");
    }

    #[tokio::test]
    async fn test_match_factors_appear_in_serialized_breakdown() {
        let resume = strong_resume();
        let jd = document(
            "We need a senior engineer with python, kafka and docker experience",
            &["python", "kafka", "docker"],
        );
        let embedder = FixedEmbedder(vec![vec![1.0, 0.0], vec![1.0, 0.0]]);
        let breakdown = score(&resume, Some(&jd), Some(&embedder)).await;

        let value = serde_json::to_value(&breakdown).unwrap();
        // 200/3 rounds to 66.7 at the serialization boundary
        assert_eq!(value["keyword_match"], 66.7);
        assert_eq!(value["semantic_match"], 100.0);
    }
}
