mod analysis_config;
mod run_analysis;

pub use analysis_config::{read_analysis_config, AnalysisConfig, DEFAULT_OUTPUT_PATH};
pub use run_analysis::{analyze_streams, run_analysis, AnalysisSummary};
