//! Endpoint descriptor data model.

use larkmcp_schema::{Schema, SchemaKind, boolean, object};
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verbs used by the Lark open platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth credential class accepted by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessToken {
    Tenant,
    User,
}

/// Validators for the three request sections of an endpoint.
///
/// Each present section is an object schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaBundle {
    /// Path parameters, one per `:name` placeholder.
    pub path: Option<Schema>,
    /// Query string parameters.
    pub params: Option<Schema>,
    /// JSON request body.
    pub data: Option<Schema>,
}

/// Name of the argument that asks for a user access token instead of a tenant one.
pub const USE_USER_TOKEN_ARG: &str = "useUAT";

impl SchemaBundle {
    /// The top-level argument object `{ path?, params?, data?, useUAT? }`.
    ///
    /// A section is required iff it declares at least one required field.
    #[must_use]
    pub fn input_schema(&self, accepts_user_token: bool) -> Schema {
        let mut fields: Vec<(&str, Schema)> = Vec::new();
        for (name, section) in [
            ("path", &self.path),
            ("params", &self.params),
            ("data", &self.data),
        ] {
            if let Some(s) = section {
                let mut s = if name == "path" {
                    non_empty_fields(s)
                } else {
                    s.clone()
                };
                if !s.has_required_fields() {
                    s = s.optional();
                }
                fields.push((name, s));
            }
        }
        if accepts_user_token {
            fields.push((
                USE_USER_TOKEN_ARG,
                boolean()
                    .describe("Use user access token, otherwise use tenant access token")
                    .optional(),
            ));
        }
        object(fields)
    }
}

/// Path values become URL segments, so string fields must not be empty.
fn non_empty_fields(section: &Schema) -> Schema {
    let fields = section.fields().iter().map(|(name, field)| {
        let field = match field.kind() {
            SchemaKind::String => field.clone().min_length(1),
            _ => field.clone(),
        };
        (name.clone(), field)
    });
    match section.description() {
        Some(d) => object(fields).describe(d),
        None => object(fields),
    }
}

/// A static record pairing an API endpoint's address/method/scopes with its input schemas.
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    pub project: &'static str,
    /// Unique `project.version.resource.action` key.
    pub name: &'static str,
    pub sdk_name: &'static str,
    /// Path template with `:param` placeholders.
    pub path: &'static str,
    pub http_method: HttpMethod,
    pub description: &'static str,
    pub access_tokens: &'static [AccessToken],
    pub schema: SchemaBundle,
}

impl EndpointDescriptor {
    #[must_use]
    pub fn accepts(&self, token: AccessToken) -> bool {
        self.access_tokens.contains(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larkmcp_schema::{number, string};

    #[test]
    fn sections_without_required_fields_are_optional() {
        let bundle = SchemaBundle {
            path: Some(object([("job_id", string())])),
            params: Some(object([("page_size", number().optional())])),
            data: None,
        };
        let input = bundle.input_schema(false);
        assert_eq!(input.required_fields(), vec!["path"]);
        assert_eq!(input.field_names(), vec!["path", "params"]);
    }

    #[test]
    fn path_strings_must_be_non_empty() {
        let bundle = SchemaBundle {
            path: Some(object([("job_id", string())])),
            params: Some(object([("keyword", string().optional())])),
            data: None,
        };
        let json = bundle.input_schema(false).to_json_schema();
        assert_eq!(
            json["properties"]["path"]["properties"]["job_id"]["minLength"],
            serde_json::json!(1)
        );
        assert!(
            json["properties"]["params"]["properties"]["keyword"]
                .get("minLength")
                .is_none()
        );
    }

    #[test]
    fn user_token_flag_is_added_when_accepted() {
        let input = SchemaBundle::default().input_schema(true);
        assert_eq!(input.field_names(), vec![USE_USER_TOKEN_ARG]);
        assert!(input.required_fields().is_empty());
    }

    #[test]
    fn method_serializes_uppercase() {
        assert_eq!(
            serde_json::to_value(HttpMethod::Patch).expect("serialize"),
            serde_json::json!("PATCH")
        );
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
