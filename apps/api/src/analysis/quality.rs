//! Heuristic quality scoring: per-section content quality, structural
//! completeness, and surface formatting. Pure arithmetic over already
//! validated input; every score is clamped to [0,100] and never fails.

use crate::analysis::lexicons::{
    ACTION_VERBS, BULLET_LINE_RE, DEGREE_TERMS, EMAIL_RE, METRIC_PATTERNS, WEAK_PHRASES,
};
use crate::analysis::sections::{PresenceFlags, SectionName};

const BASE_SECTION_SCORE: f64 = 50.0;
const REQUIRED_SECTION_POINTS: f64 = 25.0;
const OPTIONAL_SECTION_POINTS: f64 = 12.5;

/// Scores one section's content. Empty content scores 0; otherwise the score
/// starts at 50 and per-type signals adjust it. Only experience, education,
/// skills, and summary have dedicated rules.
pub fn section_score(text: &str, section: SectionName) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let text_lower = text.to_lowercase();
    let words = text.split_whitespace().count();
    let mut score = BASE_SECTION_SCORE;

    match section {
        SectionName::Experience => {
            if words < 50 {
                score -= 20.0;
            } else if words > 150 {
                score += 10.0;
            }

            let verb_hits = ACTION_VERBS
                .iter()
                .filter(|verb| text_lower.contains(*verb))
                .count();
            score += (verb_hits as f64 * 2.0).min(20.0);

            let weak_hits = WEAK_PHRASES
                .iter()
                .filter(|phrase| text_lower.contains(*phrase))
                .count();
            score -= (weak_hits as f64 * 3.0).min(15.0);

            let metric_hits: usize = METRIC_PATTERNS
                .iter()
                .map(|re| re.find_iter(&text_lower).count())
                .sum();
            score += (metric_hits as f64 * 4.0).min(20.0);
        }
        SectionName::Education => {
            if DEGREE_TERMS.iter().any(|term| text_lower.contains(term)) {
                score += 20.0;
            }
        }
        SectionName::Skills => {
            if words > 20 {
                score += 10.0;
            }
            // Comma, pipe, or bullet reads as a list, which scans well.
            if text.contains(',') || text.contains('|') || text.contains('•') {
                score += 10.0;
            }
        }
        SectionName::Summary => {
            if words > 100 {
                score -= 10.0;
            } else if (30..=80).contains(&words) {
                score += 10.0;
            }
        }
        SectionName::Projects | SectionName::Other => {}
    }

    score.clamp(0.0, 100.0)
}

/// Structural completeness: 25 points per required section (experience,
/// education, skills), 12.5 per optional one (summary, projects). All five
/// present lands exactly on 100.
pub fn completeness_score(flags: &PresenceFlags) -> f64 {
    let mut score = 0.0;
    for present in [flags.has_experience, flags.has_education, flags.has_skills] {
        if present {
            score += REQUIRED_SECTION_POINTS;
        }
    }
    for present in [flags.has_summary, flags.has_projects] {
        if present {
            score += OPTIONAL_SECTION_POINTS;
        }
    }
    score.min(100.0)
}

/// Surface-formatting heuristics over the full normalized text: shouting
/// penalty, bullet-structure signal, contact-email check.
pub fn formatting_score(text: &str) -> f64 {
    let mut score: f64 = 100.0;

    if is_shouting(text) {
        score -= 50.0;
    }

    let bullet_lines = BULLET_LINE_RE.find_iter(text).count();
    if bullet_lines > 5 {
        score += 10.0;
    } else if bullet_lines == 0 {
        score -= 10.0;
    }

    if !EMAIL_RE.is_match(text) {
        score -= 20.0;
    }

    score.clamp(0.0, 100.0)
}

/// True when the text contains at least one cased character and none of them
/// is lower-case.
fn is_shouting(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_scores_zero() {
        assert_eq!(section_score("", SectionName::Experience), 0.0);
        assert_eq!(section_score("", SectionName::Summary), 0.0);
    }

    #[test]
    fn test_nonempty_unscored_section_gets_base_only() {
        assert_eq!(section_score("some project", SectionName::Projects), 50.0);
        assert_eq!(section_score("misc line", SectionName::Other), 50.0);
    }

    #[test]
    fn test_short_experience_is_penalized() {
        // Under 50 words, no verbs/weak words/metrics: 50 - 20 = 30
        let score = section_score("brief stint at a company", SectionName::Experience);
        assert_eq!(score, 30.0);
    }

    #[test]
    fn test_experience_action_verb_bonus_is_capped_at_20() {
        let verbs = "achieved built created delivered designed developed engineered \
                     implemented improved launched led managed"; // 12 distinct entries
        let filler: String = std::iter::repeat("xx").take(40).collect::<Vec<_>>().join(" ");
        let text = format!("{verbs} {filler}");
        // 50 base + 0 length (52 words) + min(20, 12*2) = 70
        assert_eq!(section_score(&text, SectionName::Experience), 70.0);
    }

    #[test]
    fn test_experience_weak_phrase_penalty_is_capped_at_15() {
        let text = "assisted helped worked trying attempted various maybe \
                    responsible for duties included";
        // 50 - 20 (short) - min(15, 9*3) = 15; no verbs, no metrics
        assert_eq!(section_score(text, SectionName::Experience), 15.0);
    }

    #[test]
    fn test_experience_metric_bonus() {
        let text = "cut costs 15% and trimmed $4000 in spend";
        // 50 - 20 (short) + 4*2 metrics = 38
        assert_eq!(section_score(text, SectionName::Experience), 38.0);
    }

    #[test]
    fn test_long_experience_gets_detail_bonus() {
        let filler: String = std::iter::repeat("zz").take(160).collect::<Vec<_>>().join(" ");
        // 50 + 10 (over 150 words), no other signals
        assert_eq!(section_score(&filler, SectionName::Experience), 60.0);
    }

    #[test]
    fn test_education_degree_bonus() {
        assert_eq!(
            section_score("BSc Computer Science, 2019", SectionName::Education),
            70.0
        );
        assert_eq!(
            section_score("some coursework", SectionName::Education),
            50.0
        );
    }

    #[test]
    fn test_skills_list_signals() {
        // Comma signal only, short list: 50 + 10
        assert_eq!(section_score("Rust, Python", SectionName::Skills), 60.0);
        // 21+ words and commas: 50 + 10 + 10
        let many = "Rust, Python, Go, Java, SQL, Redis, Kafka, Docker, Kubernetes, AWS, \
                    GCP, Terraform, Ansible, Linux, Git, CI, CD, Bash, Spark, Flink, Beam";
        assert_eq!(section_score(many, SectionName::Skills), 70.0);
    }

    #[test]
    fn test_summary_length_band() {
        let sweet: String = std::iter::repeat("word").take(40).collect::<Vec<_>>().join(" ");
        assert_eq!(section_score(&sweet, SectionName::Summary), 60.0);

        let rambling: String = std::iter::repeat("word").take(120).collect::<Vec<_>>().join(" ");
        assert_eq!(section_score(&rambling, SectionName::Summary), 40.0);

        // 10 words: neither band applies
        let terse: String = std::iter::repeat("word").take(10).collect::<Vec<_>>().join(" ");
        assert_eq!(section_score(&terse, SectionName::Summary), 50.0);
    }

    #[test]
    fn test_section_scores_stay_in_bounds() {
        let loaded = "increased by 20% and saved $9000 with 10,000 users over 8+ years \
                      managed 14 engineers achieved built created delivered designed \
                      developed engineered implemented improved launched led managed \
                      optimized resolved shipped";
        let score = section_score(loaded, SectionName::Experience);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_completeness_all_sections_is_exactly_100() {
        let flags = PresenceFlags {
            has_experience: true,
            has_education: true,
            has_skills: true,
            has_projects: true,
            has_summary: true,
        };
        assert_eq!(completeness_score(&flags), 100.0);
    }

    #[test]
    fn test_completeness_empty_resume_is_zero() {
        assert_eq!(completeness_score(&PresenceFlags::default()), 0.0);
    }

    #[test]
    fn test_completeness_partial() {
        let flags = PresenceFlags {
            has_experience: true,
            has_skills: true,
            has_summary: true,
            ..Default::default()
        };
        assert_eq!(completeness_score(&flags), 62.5);
    }

    #[test]
    fn test_formatting_shouting_with_no_email_no_bullets() {
        // Scenario: all caps, zero bullets, no email: 100 - 50 - 10 - 20 = 20
        let text = "EXPERIENCE SOFTWARE ENGINEER PYTHON FLASK";
        assert_eq!(formatting_score(text), 20.0);
    }

    #[test]
    fn test_formatting_shouting_with_bullets_and_email() {
        // The bullet bonus still applies to shouting text: 100 - 50 + 10
        let text = "- A\n- B\n- C\n- D\n- E\n- F\nJANE@EXAMPLE.COM";
        assert_eq!(formatting_score(text), 60.0);
    }

    #[test]
    fn test_formatting_shouting_without_bullet_bonus_stays_at_or_below_50() {
        // Up to 5 bullet lines the bullet term is neutral, so shouting caps
        // the score at 50 even with an email present.
        let text = "- A\n- B\nJANE@EXAMPLE.COM";
        assert_eq!(formatting_score(text), 50.0);
    }

    #[test]
    fn test_formatting_clean_resume_scores_100() {
        let text = "- built things\n- shipped things\n- led teams\n- mentored\n\
                    - reviewed\n- planned\ncontact: jane@example.com";
        assert_eq!(formatting_score(text), 100.0);
    }

    #[test]
    fn test_formatting_wall_of_text_penalty() {
        let text = "plain paragraph with contact jane@example.com and no structure";
        assert_eq!(formatting_score(text), 90.0);
    }

    #[test]
    fn test_formatting_empty_text() {
        // No cased chars (not shouting), no bullets (-10), no email (-20)
        assert_eq!(formatting_score(""), 70.0);
    }
}
