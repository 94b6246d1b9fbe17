//! Exhaustive validation of JSON values against a [`Schema`].

use crate::schema::{Schema, SchemaKind};
use jsonschema::error::ValidationErrorKind;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema: {0}")]
    Compile(String),
}

/// One reason a value was rejected.
///
/// `field` is a dotted location relative to the validated value (`path.job_id`,
/// `data.items[0].email`), or `$` for the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Violation {
    MissingRequiredField {
        field: String,
    },
    UnknownField {
        field: String,
        suggestions: Vec<String>,
    },
    ConstraintViolation {
        field: String,
        message: String,
    },
}

impl Violation {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Violation::MissingRequiredField { field }
            | Violation::UnknownField { field, .. }
            | Violation::ConstraintViolation { field, .. } => field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingRequiredField { field } => {
                write!(f, "missing required field '{field}'")
            }
            Violation::UnknownField { field, suggestions } => match suggestions.first() {
                Some(s) => write!(f, "unknown field '{field}' (did you mean '{s}'?)"),
                None => write!(f, "unknown field '{field}'"),
            },
            Violation::ConstraintViolation { field, message } => write!(f, "{field}: {message}"),
        }
    }
}

/// A [`Schema`] compiled for repeated validation.
pub struct SchemaValidator {
    schema: Schema,
    json_schema: Value,
    compiled: jsonschema::Validator,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("json_schema", &self.json_schema)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// # Errors
    ///
    /// Returns an error if the emitted JSON Schema cannot be compiled.
    pub fn compile(schema: Schema) -> Result<Self, SchemaError> {
        let json_schema = schema.to_json_schema();
        let compiled = jsonschema::validator_for(&json_schema)
            .map_err(|e| SchemaError::Compile(e.to_string()))?;
        Ok(Self {
            schema,
            json_schema,
            compiled,
        })
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn json_schema(&self) -> &Value {
        &self.json_schema
    }

    /// Validate `value`, returning it with defaults filled in.
    ///
    /// A `null` value is treated as an empty object when the schema describes an object.
    ///
    /// # Errors
    ///
    /// Returns every violation found, not just the first.
    pub fn validate(&self, value: &Value) -> Result<Value, Vec<Violation>> {
        let mut normalized = match (value, self.schema.kind()) {
            (Value::Null, SchemaKind::Object(_)) => Value::Object(Map::new()),
            _ => value.clone(),
        };
        self.schema.apply_defaults(&mut normalized);

        let mut violations: Vec<Violation> = Vec::new();
        for e in self.compiled.iter_errors(&normalized) {
            let pointer = e.instance_path().to_string();
            match e.kind() {
                ValidationErrorKind::Required { property } => {
                    let name = property
                        .as_str()
                        .map_or_else(|| property.to_string(), str::to_string);
                    violations.push(Violation::MissingRequiredField {
                        field: join_field(&pointer_to_field(&pointer), &name),
                    });
                }
                ValidationErrorKind::AdditionalProperties { unexpected } => {
                    let parent = schema_at(&self.schema, &pointer);
                    let known: Vec<&str> = parent.map(Schema::field_names).unwrap_or_default();
                    for name in unexpected {
                        violations.push(Violation::UnknownField {
                            field: join_field(&pointer_to_field(&pointer), name),
                            suggestions: suggest_fields(name, &known),
                        });
                    }
                }
                _ => violations.push(Violation::ConstraintViolation {
                    field: pointer_to_field(&pointer),
                    message: e.to_string(),
                }),
            }
        }

        if violations.is_empty() {
            Ok(normalized)
        } else {
            Err(violations)
        }
    }
}

fn pointer_segments(pointer: &str) -> impl Iterator<Item = String> + '_ {
    pointer
        .split('/')
        .skip(1)
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
}

/// `/data/items/0/email` -> `data.items[0].email`; the empty pointer is `$`.
fn pointer_to_field(pointer: &str) -> String {
    let mut out = String::new();
    for seg in pointer_segments(pointer) {
        if !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()) {
            out.push('[');
            out.push_str(&seg);
            out.push(']');
        } else {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(&seg);
        }
    }
    if out.is_empty() {
        out.push('$');
    }
    out
}

fn join_field(parent: &str, name: &str) -> String {
    if parent == "$" {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Walk `schema` along a JSON pointer. Returns `None` when the pointer crosses a union or leaves
/// the declared shape.
fn schema_at<'a>(schema: &'a Schema, pointer: &str) -> Option<&'a Schema> {
    let mut current = schema;
    for seg in pointer_segments(pointer) {
        current = match current.kind() {
            SchemaKind::Object(_) => current.field(&seg)?,
            SchemaKind::Array(items) => items,
            _ => return None,
        };
    }
    Some(current)
}

/// Sibling field names that `unknown` was probably meant to be, closest first.
fn suggest_fields(unknown: &str, siblings: &[&str]) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = siblings
        .iter()
        .map(|name| (strsim::jaro(unknown, name), *name))
        .filter(|(score, _)| *score > 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{array, boolean, enumeration, number, object, string, union};
    use serde_json::json;

    fn note_create() -> SchemaValidator {
        SchemaValidator::compile(object([
            ("talent_id", string()),
            ("content", string()),
            ("privacy", number().optional()),
            ("notify_mentioned_user", boolean().with_default(json!(false))),
            (
                "mention_entity_list",
                array(object([("offset", number()), ("user_id", string())])).optional(),
            ),
        ]))
        .expect("schema compiles")
    }

    #[test]
    fn valid_value_is_returned_with_defaults() {
        let v = note_create()
            .validate(&json!({"talent_id": "t1", "content": "hello"}))
            .expect("valid");
        assert_eq!(
            v,
            json!({"talent_id": "t1", "content": "hello", "notify_mentioned_user": false})
        );
    }

    #[test]
    fn every_violation_is_reported() {
        let errs = note_create()
            .validate(&json!({
                "content": 42,
                "privcy": 1,
                "mention_entity_list": [{"offset": "x"}],
            }))
            .expect_err("invalid");

        assert!(errs.contains(&Violation::MissingRequiredField {
            field: "talent_id".to_string()
        }));
        assert!(errs.contains(&Violation::MissingRequiredField {
            field: "mention_entity_list[0].user_id".to_string()
        }));
        assert!(errs.iter().any(|v| matches!(
            v,
            Violation::UnknownField { field, suggestions }
                if field == "privcy" && suggestions.first().map(String::as_str) == Some("privacy")
        )));
        assert!(errs.iter().any(|v| matches!(
            v,
            Violation::ConstraintViolation { field, .. } if field == "content"
        )));
        assert!(errs.iter().any(|v| matches!(
            v,
            Violation::ConstraintViolation { field, .. } if field == "mention_entity_list[0].offset"
        )));
        assert_eq!(errs.len(), 5);
    }

    #[test]
    fn null_is_treated_as_empty_object() {
        let validator =
            SchemaValidator::compile(object([("page_size", number().optional())])).expect("ok");
        assert_eq!(validator.validate(&Value::Null).expect("valid"), json!({}));
    }

    #[test]
    fn non_object_root_reports_dollar_field() {
        let errs = note_create().validate(&json!([1, 2])).expect_err("invalid");
        assert!(errs.iter().all(|v| v.field() == "$"));
    }

    #[test]
    fn enum_and_union_constraints() {
        let validator = SchemaValidator::compile(object([
            ("kind", enumeration(["USER", "DEPARTMENT"])),
            ("value", union([string(), number()])),
        ]))
        .expect("ok");

        assert!(
            validator
                .validate(&json!({"kind": "USER", "value": 3}))
                .is_ok()
        );
        let errs = validator
            .validate(&json!({"kind": "GROUP", "value": true}))
            .expect_err("invalid");
        let fields: Vec<&str> = errs.iter().map(Violation::field).collect();
        assert!(fields.contains(&"kind"));
        assert!(fields.contains(&"value"));
    }

    #[test]
    fn violations_serialize_with_type_tag() {
        let v = Violation::UnknownField {
            field: "path.jobid".to_string(),
            suggestions: vec!["job_id".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&v).expect("serialize"),
            json!({"type": "unknown-field", "field": "path.jobid", "suggestions": ["job_id"]})
        );
        assert_eq!(
            v.to_string(),
            "unknown field 'path.jobid' (did you mean 'job_id'?)"
        );
    }

    #[test]
    fn pointer_conversion() {
        assert_eq!(pointer_to_field(""), "$");
        assert_eq!(pointer_to_field("/path/job_id"), "path.job_id");
        assert_eq!(pointer_to_field("/data/items/0/email"), "data.items[0].email");
        assert_eq!(pointer_to_field("/a~1b"), "a/b");
    }
}
