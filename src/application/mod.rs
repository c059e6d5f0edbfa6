pub mod analyzer;
pub mod report;

pub use analyzer::{AnalyzeError, TokenAnalyzer, MIN_ADDRESS_LENGTH};
pub use report::{AnalysisReport, AI_INSIGHT_PLACEHOLDER};
