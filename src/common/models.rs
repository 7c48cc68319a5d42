use serde::{Deserialize, Serialize};

/// Payload sent to the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeRequest {
    pub food_description: String,
    /// Serving size in grams; `None` serializes to JSON `null` and lets the
    /// service fall back to its own default portion.
    pub portion_grams: Option<f64>,
}

/// One nutrient with its amount per 100g and per the requested portion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientRecord {
    pub name: String,
    #[serde(rename = "per100g")]
    pub per_100g: f64,
    pub portion: f64,
}

/// Full response bundle for one analyzed food description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub nutrients: Vec<NutrientRecord>,
    pub insights: Vec<String>,
    pub advice: String,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_with_portion_serializes_number() {
        let req = AnalyzeRequest {
            food_description: "banana prata média".to_string(),
            portion_grams: Some(86.0),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["food_description"], "banana prata média");
        assert_eq!(json["portion_grams"], 86.0);
    }

    #[test]
    fn request_without_portion_serializes_null() {
        let req = AnalyzeRequest {
            food_description: "pão francês com manteiga".to_string(),
            portion_grams: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["portion_grams"].is_null());
    }

    #[test]
    fn result_decodes_service_response() {
        let body = r#"{
            "nutrients": [
                {"name": "Proteína", "per100g": 10, "portion": 5},
                {"name": "Carboidratos", "per100g": 22.5, "portion": 27.0}
            ],
            "insights": ["Boa fonte de energia."],
            "advice": "Combine com uma fonte de fibras.",
            "disclaimer": "Estimativa educativa; não substitui orientação médica."
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.nutrients.len(), 2);
        assert_eq!(result.nutrients[0].name, "Proteína");
        assert_eq!(result.nutrients[0].per_100g, 10.0);
        assert_eq!(result.nutrients[0].portion, 5.0);
        assert_eq!(result.insights.len(), 1);
        assert_eq!(result.advice, "Combine com uma fonte de fibras.");
    }

    #[test]
    fn result_rejects_missing_fields() {
        let body = r#"{"nutrients": [], "insights": []}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }
}
