//! Heuristic section segmentation: classify each line as a header or content,
//! accumulating content under the active section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::lexicons::SECTION_HEADERS;

/// The closed set of resume sections. `Other` is the catch-all bucket for
/// content preceding any recognized header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Experience,
    Education,
    Skills,
    Projects,
    Summary,
    Other,
}

impl SectionName {
    pub const ALL: [SectionName; 6] = [
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
        SectionName::Projects,
        SectionName::Summary,
        SectionName::Other,
    ];
}

/// Presence flags derived from segmented content, consumed by the
/// completeness scorer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PresenceFlags {
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub has_projects: bool,
    pub has_summary: bool,
}

/// Splits normalized text into the six fixed sections.
///
/// Lines are matched case-insensitively against the priority-ordered header
/// table: an exact phrase match or a `"<phrase>:"` prefix switches the active
/// section and consumes the line. Content lines keep their original casing
/// and accumulate with a trailing `\n`. The returned map always contains all
/// six keys; with no recognized headers everything lands under `Other`.
pub fn segment(text: &str) -> BTreeMap<SectionName, String> {
    let mut sections: BTreeMap<SectionName, String> = SectionName::ALL
        .iter()
        .map(|name| (*name, String::new()))
        .collect();

    let mut current = SectionName::Other;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(section) = classify_header(&trimmed.to_lowercase()) {
            current = section;
            continue;
        }
        let content = sections.entry(current).or_default();
        content.push_str(line);
        content.push('\n');
    }

    sections
}

/// Tests a lower-cased trimmed line against the header lexicon. Table order
/// is the tie-break: the first section whose phrase set matches wins.
fn classify_header(line: &str) -> Option<SectionName> {
    for (section, phrases) in SECTION_HEADERS {
        for phrase in *phrases {
            if line == *phrase {
                return Some(*section);
            }
            if let Some(rest) = line.strip_prefix(phrase) {
                if rest.starts_with(':') {
                    return Some(*section);
                }
            }
        }
    }
    None
}

/// Derives `has_<section>` flags: a section is present when its accumulated
/// content is non-empty after trimming.
pub fn presence_flags(sections: &BTreeMap<SectionName, String>) -> PresenceFlags {
    let present = |name: SectionName| {
        sections
            .get(&name)
            .is_some_and(|content| !content.trim().is_empty())
    };
    PresenceFlags {
        has_experience: present(SectionName::Experience),
        has_education: present(SectionName::Education),
        has_skills: present(SectionName::Skills),
        has_projects: present(SectionName::Projects),
        has_summary: present(SectionName::Summary),
    }
}
