//! Request validation from schema rules. Stops at the first violated rule.

use crate::error::AppError;
use crate::model::ResourceInput;
use serde_json::{Map, Value};

/// Rule for one string field.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub allow_empty: bool,
}

/// Object schema: string fields checked in order, then unknown keys.
#[derive(Clone, Copy, Debug)]
pub struct PayloadSchema {
    pub fields: &'static [FieldRule],
    pub allow_unknown: bool,
}

/// `name` required, `description` optional; both non-empty strings when present.
pub const RESOURCE_SCHEMA: PayloadSchema = PayloadSchema {
    fields: &[
        FieldRule {
            name: "name",
            required: true,
            allow_empty: false,
        },
        FieldRule {
            name: "description",
            required: false,
            allow_empty: false,
        },
    ],
    allow_unknown: false,
};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against the schema. Only the first failure is reported.
    pub fn validate<'a>(body: &'a Value, schema: &PayloadSchema) -> Result<&'a Map<String, Value>, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::Validation("\"value\" must be of type object".into()))?;
        for rule in schema.fields {
            validate_field(rule, obj.get(rule.name))?;
        }
        if !schema.allow_unknown {
            if let Some(key) = obj.keys().find(|k| !schema.fields.iter().any(|f| f.name == k.as_str())) {
                return Err(AppError::Validation(format!("\"{}\" is not allowed", key)));
            }
        }
        Ok(obj)
    }

    /// Validate a create/update payload and normalize it.
    pub fn resource_input(body: &Value) -> Result<ResourceInput, AppError> {
        let obj = Self::validate(body, &RESOURCE_SCHEMA)?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        let name = text("name").ok_or_else(|| AppError::Internal("validated name missing".into()))?;
        Ok(ResourceInput {
            name,
            description: text("description"),
        })
    }
}

fn validate_field(rule: &FieldRule, value: Option<&Value>) -> Result<(), AppError> {
    let Some(v) = value else {
        if rule.required {
            return Err(AppError::Validation(format!("\"{}\" is required", rule.name)));
        }
        return Ok(());
    };
    let s = v
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("\"{}\" must be a string", rule.name)))?;
    if s.is_empty() && !rule.allow_empty {
        return Err(AppError::Validation(format!(
            "\"{}\" is not allowed to be empty",
            rule.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(body: Value) -> String {
        match RequestValidator::resource_input(&body) {
            Err(AppError::Validation(m)) => m,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_name_only() {
        let input = RequestValidator::resource_input(&json!({ "name": "Widget" })).unwrap();
        assert_eq!(input, ResourceInput { name: "Widget".into(), description: None });
    }

    #[test]
    fn accepts_name_and_description_untrimmed() {
        let input = RequestValidator::resource_input(&json!({ "name": " Widget ", "description": "A widget" })).unwrap();
        assert_eq!(input.name, " Widget ");
        assert_eq!(input.description.as_deref(), Some("A widget"));
    }

    #[test]
    fn missing_name() {
        assert_eq!(message(json!({})), "\"name\" is required");
        assert_eq!(message(json!({ "description": "d" })), "\"name\" is required");
    }

    #[test]
    fn non_string_name() {
        assert_eq!(message(json!({ "name": 5 })), "\"name\" must be a string");
        assert_eq!(message(json!({ "name": null })), "\"name\" must be a string");
    }

    #[test]
    fn empty_name() {
        assert_eq!(message(json!({ "name": "" })), "\"name\" is not allowed to be empty");
    }

    #[test]
    fn bad_description() {
        assert_eq!(message(json!({ "name": "a", "description": 1 })), "\"description\" must be a string");
        assert_eq!(message(json!({ "name": "a", "description": null })), "\"description\" must be a string");
        assert_eq!(
            message(json!({ "name": "a", "description": "" })),
            "\"description\" is not allowed to be empty"
        );
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(message(json!({ "description": 1, "extra": true })), "\"name\" is required");
        assert_eq!(message(json!({ "name": "a", "description": 1, "extra": true })), "\"description\" must be a string");
    }

    #[test]
    fn unknown_keys_rejected() {
        assert_eq!(message(json!({ "name": "a", "colour": "red" })), "\"colour\" is not allowed");
    }

    #[test]
    fn non_object_rejected() {
        assert_eq!(message(json!(["name"])), "\"value\" must be of type object");
        assert_eq!(message(json!("Widget")), "\"value\" must be of type object");
    }

    #[test]
    fn unknown_keys_pass_when_allowed() {
        const LOOSE: PayloadSchema = PayloadSchema {
            fields: RESOURCE_SCHEMA.fields,
            allow_unknown: true,
        };
        assert!(RequestValidator::validate(&json!({ "name": "a", "x": 1 }), &LOOSE).is_ok());
    }
}
