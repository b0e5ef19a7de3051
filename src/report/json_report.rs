//! @ai:module:intent JSON rendering of recommender output
//! @ai:module:layer infrastructure
//! @ai:module:public_api to_json
//! @ai:module:stateless true

use serde::Serialize;

/// @ai:intent Format any serializable value as JSON
/// @ai:effects pure
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(value).unwrap_or_default()
    } else {
        serde_json::to_string(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoringEngine, ScoringEngineTrait};
    use crate::store::{StoreLoader, StoreLoaderTrait};
    use std::sync::Arc;

    #[test]
    fn test_score_result_json_shape() {
        let store = StoreLoader::new().load_builtin().unwrap();
        let engine = ScoringEngine::new(Arc::new(store));
        let result = engine
            .score("Statistical Modeling & Inference", "ANOVA", None)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&to_json(&result, false)).unwrap();

        assert_eq!(value["recommended_tool"], "R");
        assert_eq!(value["not_applicable"], serde_json::json!(["SQL"]));
        assert_eq!(value["significance"]["p_value_is_placeholder"], true);
        assert!(value["breakdown"]["Python"]["runtime"].is_number());
        assert!(value["weights"]["total_loc"].is_number());
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let value = serde_json::json!({ "tool": "R", "score": 0.5 });
        assert!(!to_json(&value, false).contains('\n'));
        assert!(to_json(&value, true).contains('\n'));
    }
}
