use serde::{Deserialize, Serialize};

/// A catalog product with its score for a single request
///
/// Scores are drawn uniformly from [0, 1) and exist only to rank the
/// catalog for the request that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_name: String,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_serializes_with_snake_case_fields() {
        let rec = Recommendation {
            product_name: "안전 채권".to_string(),
            score: 0.42,
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["product_name"], "안전 채권");
        assert_eq!(json["score"], 0.42);
    }
}
