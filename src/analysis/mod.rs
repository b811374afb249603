//! Heuristic readouts shown next to a generated description.
//!
//! Pure functions of `(text, keywords)`; deterministic, no I/O. These are
//! cosmetic displays driven by fixed trigger-word counts, not real NLP.

pub mod seo;
pub mod tone;

pub use seo::{SeoScores, score};
pub use tone::{ToneScore, analyze};
