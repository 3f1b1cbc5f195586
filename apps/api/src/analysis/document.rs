//! Analyzed-document construction: normalization, segmentation, keyword
//! extraction. Documents are request-scoped value objects, immutable after
//! construction.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::analysis::sections::{self, PresenceFlags, SectionName};
use crate::analysis::{keywords, normalize};
use crate::errors::AppError;
use crate::nlp::annotator::Annotate;

/// An analyzed resume or job description.
///
/// `sections` always carries all six `SectionName` keys (empty string when
/// the section is absent); `keywords` is lower-cased and deduplicated.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub text: String,
    pub sections: BTreeMap<SectionName, String>,
    pub keywords: BTreeSet<String>,
    pub metadata: PresenceFlags,
}

impl Document {
    pub fn section(&self, name: SectionName) -> &str {
        self.sections.get(&name).map(String::as_str).unwrap_or("")
    }
}

/// Analyzes resume text. Performs exactly one annotator call.
pub async fn analyze_resume(
    raw_text: &str,
    annotator: &dyn Annotate,
) -> Result<Document, AppError> {
    analyze(raw_text, annotator).await
}

/// Analyzes job-description text. The JD flows through the same pipeline as
/// a resume; matching only consumes its text and keyword set.
pub async fn analyze_jd(raw_text: &str, annotator: &dyn Annotate) -> Result<Document, AppError> {
    analyze(raw_text, annotator).await
}

async fn analyze(raw_text: &str, annotator: &dyn Annotate) -> Result<Document, AppError> {
    let text = normalize::normalize(raw_text);
    let sections = sections::segment(&text);
    let metadata = sections::presence_flags(&sections);
    let annotation = annotator.annotate(&text).await?;
    let keywords = keywords::extract_keywords(&annotation);

    Ok(Document {
        text,
        sections,
        keywords,
        metadata,
    })
}
