use serde_json::Value;

/// Check a raw catalog document against a JSON Schema
/// Every violation is reported, each prefixed with its JSON pointer
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let violations: Vec<String> = validator
        .iter_errors(data)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            let at = if pointer.is_empty() { "root" } else { pointer.as_str() };
            format!("{} at {}", error, at)
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(violations = violations.len(), "schema validation failed");
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_schema() -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "string", "minLength": 1},
                            "label": {"type": "string"},
                            "collection": {"enum": ["active", "retired"]}
                        },
                        "required": ["id", "label"]
                    }
                }
            },
            "required": ["items"]
        })
    }

    #[test]
    fn test_valid_document_passes() {
        let data = json!({"items": [{"id": "a", "label": "A", "collection": "active"}]});
        assert!(validate_against_schema(&item_schema(), &data).is_ok());
    }

    #[test]
    fn test_error_reports_location() {
        let data = json!({"items": [{"id": "a", "label": "A"}, {"label": "B"}]});
        let errors = validate_against_schema(&item_schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("/items/1"));
    }

    #[test]
    fn test_every_violation_is_reported() {
        let data = json!({"items": [{"label": "B"}, {"id": "", "label": "C"}]});
        let errors = validate_against_schema(&item_schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("/items/0")));
        assert!(errors.iter().any(|e| e.contains("/items/1/id")));
    }

    #[test]
    fn test_enum_violation_fails() {
        let data = json!({"items": [{"id": "a", "label": "A", "collection": "archived"}]});
        assert!(validate_against_schema(&item_schema(), &data).is_err());
    }

    #[test]
    fn test_bad_schema_is_reported() {
        let schema = json!({"type": 12});
        let errors = validate_against_schema(&schema, &json!([])).unwrap_err();
        assert!(errors[0].starts_with("Schema compilation error"));
    }
}
