use log::{error, info};
use thiserror::Error;

use crate::client::config::ClientConfig;
use crate::common::models::{AnalysisResult, AnalyzeRequest};

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The service answered with a non-2xx status; the body is not inspected.
    #[error("Falha ao analisar alimento.")]
    Status(reqwest::StatusCode),

    /// Transport failures and undecodable response bodies.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the remote analysis endpoint. One instance lives for the
/// whole application and is shared with the async command that performs the
/// request.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisService {
    pub fn new(config: &ClientConfig) -> Self {
        AnalysisService {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// Performs the single `POST /analyze` round trip for one submission.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, AnalysisError> {
        let url = format!("{}/analyze", self.base_url);
        info!(
            "POST {} food_description={:?} portion_grams={:?}",
            url, request.food_description, request.portion_grams
        );

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("analysis request failed with status {}", status);
            return Err(AnalysisError::Status(status));
        }

        let result: AnalysisResult = response.json().await?;
        info!("analysis succeeded: {} nutrients", result.nutrients.len());
        Ok(result)
    }
}
