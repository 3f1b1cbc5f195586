// Document analysis and scoring engine.
// Pipeline: normalize -> segment sections + extract keywords -> section /
// completeness / formatting quality -> optional JD match -> weighted total.
// Everything here is stateless per request; the annotator and embedder are
// the only collaborators and arrive as injected trait objects.

pub mod aggregate;
pub mod document;
pub mod handlers;
pub mod keywords;
pub mod lexicons;
pub mod matching;
pub mod normalize;
pub mod quality;
pub mod sections;
