use crate::common::models::AnalysisResult;

#[derive(Debug, Clone)]
pub enum Message {
    None,
    DescriptionChanged(String),
    PortionChanged(String),
    Submit,
    /// Completion of the single in-flight analysis request.
    AnalysisCompleted(Result<AnalysisResult, String>),
}
