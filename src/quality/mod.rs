//! Quality scoring and text analysis

pub mod analysis;
pub mod metrics;

pub use analysis::{
    analyze_text, format_indian_text, has_complex_conjuncts, readability_score, review_text,
    wrap_text, Complexity, TextAnalysis, TextReview,
};
pub use metrics::{assess, QualityMetrics};
