// External NLP collaborators: linguistic annotation and sentence embeddings.
// Both are HTTP sidecars behind trait seams so the scoring engine can be
// tested against in-process fakes.

pub mod annotator;
pub mod embedder;
