use crate::common::models::{AnalysisResult, AnalyzeRequest};

/// Lifecycle of the single analysis request a form instance may have in
/// flight. Transitions are strictly sequential: a new submission is only
/// reachable from `Idle`, `Succeeded` or `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(AnalysisResult),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct NutriAppState {
    pub description: String,
    pub portion_input: String,
    pub request: RequestState,
}

impl NutriAppState {
    /// The submit control is enabled only with a non-empty description and
    /// no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.description.trim().is_empty() && self.request != RequestState::Loading
    }

    /// Blank portion input means "no portion". A non-numeric value also maps
    /// to `None`, which keeps the wire payload at `null` like the original UI.
    pub fn portion_grams(&self) -> Option<f64> {
        let raw = self.portion_input.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok()
    }

    /// Builds the request payload from the current form fields.
    pub fn analyze_request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            food_description: self.description.clone(),
            portion_grams: self.portion_grams(),
        }
    }

    /// Enters `Loading`, discarding any previous result or error.
    pub fn begin_submit(&mut self) {
        self.request = RequestState::Loading;
    }

    /// Leaves `Loading` with the outcome of the network call.
    pub fn finish_submit(&mut self, outcome: Result<AnalysisResult, String>) {
        self.request = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(message) => RequestState::Failed(message),
        };
    }
}
