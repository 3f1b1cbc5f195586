//! Static lexicons and signal patterns for the scoring heuristics.
//!
//! These are data tables, not code branches: tuning a verb list or a metric
//! pattern must never require touching scorer logic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::sections::SectionName;

/// Recognized section header phrases, in priority order. A line matching
/// phrases from two sections resolves to the one listed first, so this table
/// doubles as the tie-break order: experience > education > skills >
/// projects > summary.
pub const SECTION_HEADERS: &[(SectionName, &[&str])] = &[
    (
        SectionName::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment history",
            "work history",
            "career history",
        ],
    ),
    (
        SectionName::Education,
        &[
            "education",
            "academic background",
            "qualifications",
            "academic history",
            "degrees",
        ],
    ),
    (
        SectionName::Skills,
        &[
            "skills",
            "technical skills",
            "core competencies",
            "technologies",
            "skill set",
            "expertise",
        ],
    ),
    (
        SectionName::Projects,
        &["projects", "key projects", "personal projects"],
    ),
    (
        SectionName::Summary,
        &[
            "summary",
            "professional summary",
            "profile",
            "about me",
            "objective",
        ],
    ),
];

/// Strong resume verbs. Each distinct entry found in the experience section
/// adds 2 points, capped at 20.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "accomplished",
    "added",
    "administered",
    "advised",
    "analyzed",
    "arranged",
    "assembled",
    "assessed",
    "audited",
    "built",
    "calculated",
    "centralized",
    "championed",
    "collaborated",
    "collected",
    "communicated",
    "completed",
    "composed",
    "computed",
    "conducted",
    "consolidated",
    "consulted",
    "controlled",
    "coordinated",
    "created",
    "decreased",
    "defined",
    "delivered",
    "deployed",
    "designed",
    "determined",
    "developed",
    "devised",
    "directed",
    "distributed",
    "documented",
    "drafted",
    "edited",
    "eliminated",
    "enabled",
    "engineered",
    "enhanced",
    "established",
    "evaluated",
    "executed",
    "expanded",
    "expedited",
    "facilitated",
    "forecasted",
    "formulated",
    "founded",
    "generated",
    "guided",
    "identified",
    "implemented",
    "improved",
    "increased",
    "influenced",
    "initiated",
    "innovated",
    "installed",
    "instituted",
    "integrated",
    "introduced",
    "investigated",
    "launched",
    "led",
    "maintained",
    "managed",
    "marketed",
    "maximized",
    "mentored",
    "methodized",
    "minimized",
    "modeled",
    "modified",
    "monitored",
    "negotiated",
    "operated",
    "optimized",
    "orchestrated",
    "organized",
    "originated",
    "oversaw",
    "participated",
    "partnered",
    "performed",
    "persuaded",
    "planned",
    "prepared",
    "presented",
    "produced",
    "programmed",
    "promoted",
    "proposed",
    "provided",
    "publicized",
    "published",
    "purchased",
    "recommended",
    "recruited",
    "reduced",
    "refined",
    "regulated",
    "reinforced",
    "resolved",
    "restructured",
    "reviewed",
    "revised",
    "revitalized",
    "saved",
    "scheduled",
    "screened",
    "selected",
    "shaped",
    "simplified",
    "sold",
    "solved",
    "spearheaded",
    "standardized",
    "started",
    "streamlined",
    "strengthened",
    "structured",
    "supervised",
    "supported",
    "targeted",
    "taught",
    "tested",
    "trained",
    "transformed",
    "updated",
    "upgraded",
    "utilized",
    "verified",
    "won",
    "wrote",
];

/// Weak phrasing. Each distinct entry found in the experience section
/// subtracts 3 points, capped at 15.
pub const WEAK_PHRASES: &[&str] = &[
    "assisted",
    "helped",
    "worked",
    "responsible for",
    "duties included",
    "trying",
    "attempted",
    "various",
    "etc",
    "approx",
    "maybe",
];

/// Degree vocabulary that earns the education section its bonus.
pub const DEGREE_TERMS: &[&str] = &["bachelor", "master", "phd", "degree", "bsc"];

/// Quantitative-achievement patterns, matched against lower-cased experience
/// text. Each match adds 4 points, capped at 20.
pub static METRIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+%",                                            // percentage
        r"\$\d+",                                           // currency
        r"\d+,\d{3}",                                       // thousands-grouped number
        r"(?:increased|decreased|improved|reduced) by \d+", // action + number
        r"\d+\+ years",                                     // years of experience
        r"managed \d+",                                     // management scale
    ]
    .iter()
    .map(|p| Regex::new(p).expect("metric pattern must compile"))
    .collect()
});

/// Email address signal used by the formatting scorer as a contact-info check.
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern must compile")
});

/// Lines opening with a bullet marker; more than 5 of these reads as a
/// structured document, zero reads as a wall of text.
pub static BULLET_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-•*]").expect("bullet pattern must compile"));
