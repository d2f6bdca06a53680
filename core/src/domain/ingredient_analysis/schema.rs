use serde_json::json;

/// JSON schema of [`AnalysisResult`](super::entities::AnalysisResult).
///
/// A model-backed analyzer must answer in exactly this shape.
pub fn analysis_result_schema() -> serde_json::Value {
    let level = json!({ "type": "string", "enum": ["high", "medium", "low"] });

    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string" },
            "brandName": { "type": "string" },
            "score": { "type": "integer", "minimum": 5, "maximum": 100 },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "allergies": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "associatedWith": { "type": "string" },
                        "severity": level
                    },
                    "required": ["name", "associatedWith", "severity"]
                }
            },
            "additives": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "concern": level
                    },
                    "required": ["name", "concern"]
                }
            },
            "isSafe": { "type": "boolean" },
            "aiComment": { "type": "string" }
        },
        "required": [
            "productName", "brandName", "score", "ingredients",
            "allergies", "additives", "isSafe", "aiComment"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient_analysis::analyze;

    #[test]
    fn test_engine_output_has_every_required_field() {
        let schema = analysis_result_schema();
        let result = analyze(
            "Ingredients: milk, sugar, e330",
            &["Milk".to_string()],
        );
        let value = serde_json::to_value(&result).unwrap();

        let required = schema["required"].as_array().unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), required.len());
        for field in required {
            assert!(object.contains_key(field.as_str().unwrap()), "missing {field}");
        }

        assert_eq!(value["allergies"][0]["associatedWith"], "dairy");
        assert_eq!(value["allergies"][0]["severity"], "high");
        assert_eq!(value["additives"][0]["concern"], "medium");
    }
}
