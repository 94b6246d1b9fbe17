//! Structural schema combinators.
//!
//! A [`Schema`] is an immutable description of an accepted JSON shape. Schemas are built once
//! (typically when a descriptor table is constructed) and then only read.

use serde_json::{Map, Value, json};

/// The structural kind of a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    String,
    Number,
    Integer,
    Boolean,
    /// A closed set of string values.
    Enum(Vec<String>),
    /// Named fields, in declaration order.
    Object(Vec<(String, Schema)>),
    Array(Box<Schema>),
    /// Accepts a value matching any of the variants.
    Union(Vec<Schema>),
    /// Accepts any JSON value.
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: SchemaKind,
    description: Option<String>,
    optional: bool,
    default: Option<Value>,
    min_length: Option<u64>,
}

#[must_use]
pub fn string() -> Schema {
    Schema::new(SchemaKind::String)
}

#[must_use]
pub fn number() -> Schema {
    Schema::new(SchemaKind::Number)
}

#[must_use]
pub fn integer() -> Schema {
    Schema::new(SchemaKind::Integer)
}

#[must_use]
pub fn boolean() -> Schema {
    Schema::new(SchemaKind::Boolean)
}

/// A string restricted to `options`.
#[must_use]
pub fn enumeration<I, S>(options: I) -> Schema
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Schema::new(SchemaKind::Enum(
        options.into_iter().map(Into::into).collect(),
    ))
}

/// An object with the given fields. Fields are required unless marked [`Schema::optional`] or
/// given a default.
#[must_use]
pub fn object<I, S>(fields: I) -> Schema
where
    I: IntoIterator<Item = (S, Schema)>,
    S: Into<String>,
{
    Schema::new(SchemaKind::Object(
        fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    ))
}

#[must_use]
pub fn array(items: Schema) -> Schema {
    Schema::new(SchemaKind::Array(Box::new(items)))
}

#[must_use]
pub fn union<I>(variants: I) -> Schema
where
    I: IntoIterator<Item = Schema>,
{
    Schema::new(SchemaKind::Union(variants.into_iter().collect()))
}

#[must_use]
pub fn any() -> Schema {
    Schema::new(SchemaKind::Any)
}

impl Schema {
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
            optional: false,
            default: None,
            min_length: None,
        }
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Value filled in by [`Schema::apply_defaults`] when the field is absent.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Minimum length of a string value. Ignored for other kinds.
    #[must_use]
    pub fn min_length(mut self, len: u64) -> Self {
        self.min_length = Some(len);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether a caller must supply this value when it appears as an object field.
    #[must_use]
    pub fn is_required(&self) -> bool {
        !self.optional && self.default.is_none()
    }

    /// Object fields in declaration order (empty for non-object schemas).
    #[must_use]
    pub fn fields(&self) -> &[(String, Schema)] {
        match &self.kind {
            SchemaKind::Object(fields) => fields,
            _ => &[],
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Schema> {
        self.fields()
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields().iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Names of fields that are neither optional nor defaulted.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields()
            .iter()
            .filter(|(_, v)| v.is_required())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        self.fields().iter().any(|(_, v)| v.is_required())
    }

    /// Emit the equivalent JSON Schema fragment.
    ///
    /// Objects are closed (`additionalProperties: false`) so that misspelled fields are reported
    /// instead of silently dropped.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let mut out = match &self.kind {
            SchemaKind::String => match self.min_length {
                Some(len) => json!({"type": "string", "minLength": len}),
                None => json!({"type": "string"}),
            },
            SchemaKind::Number => json!({"type": "number"}),
            SchemaKind::Integer => json!({"type": "integer"}),
            SchemaKind::Boolean => json!({"type": "boolean"}),
            SchemaKind::Enum(options) => json!({"type": "string", "enum": options}),
            SchemaKind::Object(fields) => {
                let mut properties = Map::new();
                let mut required: Vec<Value> = Vec::new();
                for (name, field) in fields {
                    properties.insert(name.clone(), field.to_json_schema());
                    if field.is_required() {
                        required.push(Value::String(name.clone()));
                    }
                }
                let mut obj = json!({
                    "type": "object",
                    "properties": properties,
                    "additionalProperties": false,
                });
                if !required.is_empty() {
                    obj["required"] = Value::Array(required);
                }
                obj
            }
            SchemaKind::Array(items) => json!({"type": "array", "items": items.to_json_schema()}),
            SchemaKind::Union(variants) => json!({
                "anyOf": variants.iter().map(Schema::to_json_schema).collect::<Vec<_>>()
            }),
            SchemaKind::Any => json!({}),
        };

        if let Some(d) = &self.description {
            out["description"] = Value::String(d.clone());
        }
        if let Some(default) = &self.default {
            out["default"] = default.clone();
        }
        out
    }

    /// Fill absent defaulted fields of every present object, recursively.
    ///
    /// Values of the wrong shape are left untouched; reporting them is the validator's job.
    /// Union variants are not descended since the matching variant is not known yet.
    pub fn apply_defaults(&self, value: &mut Value) {
        match (&self.kind, value) {
            (SchemaKind::Object(fields), Value::Object(map)) => {
                for (name, field) in fields {
                    match map.get_mut(name) {
                        Some(v) => field.apply_defaults(v),
                        None => {
                            if let Some(default) = &field.default {
                                map.insert(name.clone(), default.clone());
                            }
                        }
                    }
                }
            }
            (SchemaKind::Array(items), Value::Array(values)) => {
                for v in values {
                    items.apply_defaults(v);
                }
            }
            _ => {}
        }
    }

    /// The smallest value accepted by this schema: required fields only, first enum option, first
    /// union variant, empty arrays and zero-ish scalars.
    #[must_use]
    pub fn minimal_instance(&self) -> Value {
        match &self.kind {
            SchemaKind::String => {
                let len = usize::try_from(self.min_length.unwrap_or(0)).unwrap_or(usize::MAX);
                Value::String("x".repeat(len))
            }
            SchemaKind::Number | SchemaKind::Integer => json!(0),
            SchemaKind::Boolean => Value::Bool(false),
            SchemaKind::Enum(options) => options
                .first()
                .map_or(Value::Null, |o| Value::String(o.clone())),
            SchemaKind::Object(fields) => Value::Object(
                fields
                    .iter()
                    .filter(|(_, f)| f.is_required())
                    .map(|(k, f)| (k.clone(), f.minimal_instance()))
                    .collect(),
            ),
            SchemaKind::Array(_) => Value::Array(Vec::new()),
            SchemaKind::Union(variants) => variants
                .first()
                .map_or(Value::Null, Schema::minimal_instance),
            SchemaKind::Any => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_query() -> Schema {
        object([
            ("job_id", string().describe("Job ID")),
            (
                "user_id_type",
                enumeration(["open_id", "union_id", "user_id"]).optional(),
            ),
            ("page_size", number().with_default(json!(10))),
        ])
    }

    #[test]
    fn required_fields_exclude_optional_and_defaulted() {
        let s = job_query();
        assert_eq!(s.required_fields(), vec!["job_id"]);
        assert_eq!(s.field_names(), vec!["job_id", "user_id_type", "page_size"]);
        assert!(s.has_required_fields());
    }

    #[test]
    fn json_schema_is_closed_and_lists_required() {
        let v = job_query().to_json_schema();
        assert_eq!(v["type"], "object");
        assert_eq!(v["additionalProperties"], false);
        assert_eq!(v["required"], json!(["job_id"]));
        assert_eq!(v["properties"]["job_id"]["description"], "Job ID");
        assert_eq!(
            v["properties"]["user_id_type"]["enum"],
            json!(["open_id", "union_id", "user_id"])
        );
        assert_eq!(v["properties"]["page_size"]["default"], 10);
    }

    #[test]
    fn object_without_required_fields_omits_required_key() {
        let v = object([("a", string().optional())]).to_json_schema();
        assert!(v.get("required").is_none());
    }

    #[test]
    fn union_emits_any_of() {
        let v = union([string(), number()]).to_json_schema();
        assert_eq!(v["anyOf"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn apply_defaults_fills_nested_objects_inside_arrays() {
        let s = object([(
            "items",
            array(object([
                ("email", string()),
                ("type", enumeration(["USER", "DEPARTMENT"]).with_default(json!("USER"))),
            ])),
        )]);
        let mut v = json!({"items": [{"email": "a@example.com"}, {"email": "b@example.com", "type": "DEPARTMENT"}]});
        s.apply_defaults(&mut v);
        assert_eq!(v["items"][0]["type"], "USER");
        assert_eq!(v["items"][1]["type"], "DEPARTMENT");
    }

    #[test]
    fn apply_defaults_ignores_wrong_shapes() {
        let s = job_query();
        let mut v = json!("not an object");
        s.apply_defaults(&mut v);
        assert_eq!(v, json!("not an object"));
    }

    #[test]
    fn minimal_instance_only_has_required_fields() {
        let s = object([
            ("title", string()),
            ("head_count", number()),
            ("kind", enumeration(["a", "b"])),
            ("tags", array(string())),
            ("note", string().optional()),
            ("nested", object([("flag", boolean())])),
        ]);
        assert_eq!(
            s.minimal_instance(),
            json!({
                "title": "",
                "head_count": 0,
                "kind": "a",
                "tags": [],
                "nested": {"flag": false},
            })
        );
    }

    #[test]
    fn min_length_is_emitted_and_respected_by_minimal_instance() {
        let s = string().min_length(1);
        assert_eq!(s.to_json_schema(), json!({"type": "string", "minLength": 1}));
        assert_eq!(s.minimal_instance(), json!("x"));
        assert_eq!(string().to_json_schema(), json!({"type": "string"}));
    }
}
