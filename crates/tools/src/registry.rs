//! Name-indexed descriptor registry: lookup, validation, request preparation.

use crate::config::{RegistryConfig, TokenMode};
use crate::descriptor::{AccessToken, EndpointDescriptor, USE_USER_TOKEN_ARG};
use crate::error::{LarkToolsError, Result};
use crate::path_template::segment_problem;
use crate::request::{PreparedRequest, ValidatedCall};
use larkmcp_schema::{SchemaValidator, Violation};
use larkmcp_tool_transforms::apply_name_case;
use rmcp::model::{JsonObject, Tool};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A descriptor plus everything derived from it at registration time.
#[derive(Debug)]
pub struct RegisteredTool {
    descriptor: EndpointDescriptor,
    exposed_name: String,
    validator: SchemaValidator,
}

impl RegisteredTool {
    /// Name on the exposed tool surface (after casing).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.exposed_name
    }

    #[must_use]
    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    /// JSON Schema of the top-level argument object.
    #[must_use]
    pub fn input_schema(&self) -> &Value {
        self.validator.json_schema()
    }

    /// Smallest argument object this tool accepts.
    #[must_use]
    pub fn example_arguments(&self) -> Value {
        self.validator.schema().minimal_instance()
    }

    #[must_use]
    pub fn to_mcp_tool(&self) -> Tool {
        let schema_obj = self
            .input_schema()
            .as_object()
            .cloned()
            .unwrap_or_else(JsonObject::new);
        let mut tool = Tool::new(
            self.exposed_name.clone(),
            self.descriptor.description.to_string(),
            Arc::new(schema_obj),
        );
        tool.annotations = Some(crate::semantics::annotations_for_method(
            self.descriptor.http_method,
        ));
        tool
    }
}

/// Immutable registry built once at startup; safe to share across tasks.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    /// Exposed and original names -> index into `tools`.
    index: HashMap<String, usize>,
    token_mode: TokenMode,
    domain: String,
}

impl ToolRegistry {
    /// Registry over every built-in descriptor.
    ///
    /// # Errors
    ///
    /// See [`Self::from_descriptors`].
    pub fn builtin(config: &RegistryConfig) -> Result<Self> {
        Self::from_descriptors(crate::builtin_tools(), config)
    }

    /// Build a registry, applying tool selection, token mode and name casing from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, if two descriptors share a name (before or
    /// after casing), or if a schema bundle cannot be compiled.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = EndpointDescriptor>,
        config: &RegistryConfig,
    ) -> Result<Self> {
        config.check()?;

        let mut tools: Vec<RegisteredTool> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut originals: HashSet<&'static str> = HashSet::new();

        for descriptor in descriptors {
            if !originals.insert(descriptor.name) {
                return Err(LarkToolsError::Config(format!(
                    "Duplicate tool name '{}'",
                    descriptor.name
                )));
            }

            if !config.tools.allows(descriptor.name) {
                debug!(tool = %descriptor.name, "tool not selected");
                continue;
            }
            let compatible = match config.token_mode {
                TokenMode::Auto => true,
                TokenMode::TenantAccessToken => descriptor.accepts(AccessToken::Tenant),
                TokenMode::UserAccessToken => descriptor.accepts(AccessToken::User),
            };
            if !compatible {
                debug!(
                    tool = %descriptor.name,
                    token_mode = ?config.token_mode,
                    "tool does not accept the configured access token"
                );
                continue;
            }

            let exposed_name = apply_name_case(descriptor.name, config.tool_name_case);
            let input = descriptor
                .schema
                .input_schema(descriptor.accepts(AccessToken::User));
            let validator = SchemaValidator::compile(input).map_err(|e| {
                LarkToolsError::Config(format!(
                    "Invalid schema for tool '{}': {e}",
                    descriptor.name
                ))
            })?;

            let idx = tools.len();
            for key in [exposed_name.clone(), descriptor.name.to_string()] {
                match index.entry(key) {
                    Entry::Vacant(v) => {
                        v.insert(idx);
                    }
                    Entry::Occupied(o) if *o.get() == idx => {}
                    Entry::Occupied(o) => {
                        return Err(LarkToolsError::Config(format!(
                            "Tool name '{}' of '{}' collides with '{}'",
                            o.key(),
                            descriptor.name,
                            tools[*o.get()].descriptor.name
                        )));
                    }
                }
            }

            tools.push(RegisteredTool {
                descriptor,
                exposed_name,
                validator,
            });
        }

        info!(
            tools = tools.len(),
            token_mode = ?config.token_mode,
            "registered Lark OpenAPI tools"
        );

        Ok(Self {
            tools,
            index,
            token_mode: config.token_mode,
            domain: config.domain.clone(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registered tools in export order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.tools.iter()
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Look up by exposed or original name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Like [`Self::get`], but an unknown name is an error carrying close matches.
    ///
    /// # Errors
    ///
    /// Returns [`LarkToolsError::UnknownTool`] if no tool matches `name`.
    pub fn lookup(&self, name: &str) -> Result<&RegisteredTool> {
        self.get(name).ok_or_else(|| LarkToolsError::UnknownTool {
            name: name.to_string(),
            suggestions: self.suggest(name),
        })
    }

    /// List the MCP `Tool`s exposed by this registry.
    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(RegisteredTool::to_mcp_tool).collect()
    }

    /// Validate `arguments` (`{ path?, params?, data?, useUAT? }`) for the named tool.
    ///
    /// # Errors
    ///
    /// Returns [`LarkToolsError::UnknownTool`] if no tool matches `name`, or
    /// [`LarkToolsError::InvalidArguments`] listing every violation.
    pub fn validate(&self, name: &str, arguments: &Value) -> Result<ValidatedCall> {
        let tool = self.lookup(name)?;

        let (normalized, mut violations) = match tool.validator.validate(arguments) {
            Ok(v) => (Some(v), Vec::new()),
            Err(v) => (None, v),
        };
        violations.extend(path_segment_violations(arguments));
        let normalized = match normalized {
            Some(v) if violations.is_empty() => v,
            _ => {
                warn!(
                    tool = %tool.descriptor.name,
                    violations = violations.len(),
                    "rejected tool arguments"
                );
                return Err(LarkToolsError::InvalidArguments {
                    tool: tool.descriptor.name.to_string(),
                    violations,
                });
            }
        };

        let section = |key: &str| -> Map<String, Value> {
            normalized
                .get(key)
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default()
        };
        let use_user_token = normalized
            .get(USE_USER_TOKEN_ARG)
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(ValidatedCall {
            tool: tool.descriptor.name.to_string(),
            http_method: tool.descriptor.http_method,
            path_template: tool.descriptor.path,
            path: section("path"),
            params: section("params"),
            data: normalized.get("data").cloned(),
            access_token: select_token(self.token_mode, &tool.descriptor, use_user_token),
        })
    }

    /// Validate, then render the call into request parts.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`]; also fails if the path cannot be rendered.
    pub fn prepare(&self, name: &str, arguments: &Value) -> Result<PreparedRequest> {
        self.validate(name, arguments)?.render()
    }

    fn suggest(&self, unknown: &str) -> Vec<String> {
        let mut candidates: Vec<(f64, &str)> = self
            .tools
            .iter()
            .map(|t| (strsim::jaro(unknown, &t.exposed_name), t.exposed_name.as_str()))
            .filter(|(score, _)| *score > 0.7)
            .collect();
        candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        candidates
            .into_iter()
            .take(3)
            .map(|(_, s)| s.to_string())
            .collect()
    }
}

/// `.` and `..` pass the schema but would be resolved away as URL dot segments. Empty values are
/// left to the schema's `minLength`.
fn path_segment_violations(arguments: &Value) -> Vec<Violation> {
    let Some(path) = arguments.get("path").and_then(Value::as_object) else {
        return Vec::new();
    };
    path.iter()
        .filter_map(|(name, value)| {
            let raw = value.as_str().filter(|s| !s.is_empty())?;
            segment_problem(raw).map(|problem| Violation::ConstraintViolation {
                field: format!("path.{name}"),
                message: format!("{raw:?} {problem}"),
            })
        })
        .collect()
}

fn select_token(
    mode: TokenMode,
    descriptor: &EndpointDescriptor,
    use_user_token: bool,
) -> AccessToken {
    match mode {
        TokenMode::TenantAccessToken => AccessToken::Tenant,
        TokenMode::UserAccessToken => AccessToken::User,
        TokenMode::Auto => {
            if use_user_token && descriptor.accepts(AccessToken::User) {
                AccessToken::User
            } else if descriptor.accepts(AccessToken::Tenant) {
                AccessToken::Tenant
            } else {
                AccessToken::User
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{HttpMethod, SchemaBundle};
    use larkmcp_schema::{Violation, array, enumeration, object, string};
    use larkmcp_tool_transforms::{ToolNameCase, ToolSelection};
    use serde_json::json;

    fn job_get() -> EndpointDescriptor {
        EndpointDescriptor {
            project: "hire",
            name: "hire.v1.job.get",
            sdk_name: "hire.v1.job.get",
            path: "/open-apis/hire/v1/jobs/:job_id",
            http_method: HttpMethod::Get,
            description: "Get job details",
            access_tokens: &[AccessToken::Tenant],
            schema: SchemaBundle {
                params: Some(object([(
                    "user_id_type",
                    enumeration(["open_id", "union_id", "user_id"]).optional(),
                )])),
                path: Some(object([("job_id", string())])),
                data: None,
            },
        }
    }

    fn note_delete() -> EndpointDescriptor {
        EndpointDescriptor {
            project: "hire",
            name: "hire.v1.note.delete",
            sdk_name: "hire.v1.note.delete",
            path: "/open-apis/hire/v1/notes/:note_id",
            http_method: HttpMethod::Delete,
            description: "Delete a note",
            access_tokens: &[AccessToken::Tenant, AccessToken::User],
            schema: SchemaBundle {
                path: Some(object([("note_id", string())])),
                ..SchemaBundle::default()
            },
        }
    }

    fn user_only() -> EndpointDescriptor {
        EndpointDescriptor {
            project: "mail",
            name: "mail.v1.user.query",
            sdk_name: "mail.v1.user.query",
            path: "/open-apis/mail/v1/users/query",
            http_method: HttpMethod::Post,
            description: "Query mail users",
            access_tokens: &[AccessToken::User],
            schema: SchemaBundle {
                data: Some(object([("email_list", array(string()))])),
                ..SchemaBundle::default()
            },
        }
    }

    fn registry(config: &RegistryConfig) -> ToolRegistry {
        ToolRegistry::from_descriptors([job_get(), note_delete(), user_only()], config)
            .expect("valid registry")
    }

    #[test]
    fn lookup_by_original_and_exposed_name() {
        let cfg = RegistryConfig {
            tool_name_case: ToolNameCase::Snake,
            ..RegistryConfig::default()
        };
        let r = registry(&cfg);
        assert_eq!(r.len(), 3);
        let by_exposed = r.get("hire_v1_job_get").expect("exposed");
        let by_original = r.get("hire.v1.job.get").expect("original");
        assert_eq!(by_exposed.name(), by_original.name());
        assert_eq!(r.list_tools()[0].name, "hire_v1_job_get");
    }

    #[test]
    fn unknown_tool_is_a_distinct_error_with_suggestions() {
        let r = registry(&RegistryConfig::default());
        let err = r
            .validate("hire.v1.jobs.get", &json!({}))
            .expect_err("unknown");
        match err {
            LarkToolsError::UnknownTool { name, suggestions } => {
                assert_eq!(name, "hire.v1.jobs.get");
                assert_eq!(suggestions.first().map(String::as_str), Some("hire.v1.job.get"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_path_field_references_exactly_that_field() {
        let r = registry(&RegistryConfig::default());
        let err = r
            .validate("hire.v1.job.get", &json!({"path": {}}))
            .expect_err("invalid");
        match err {
            LarkToolsError::InvalidArguments { tool, violations } => {
                assert_eq!(tool, "hire.v1.job.get");
                assert_eq!(
                    violations,
                    vec![Violation::MissingRequiredField {
                        field: "path.job_id".to_string()
                    }]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_path_value_is_a_validation_error() {
        let r = registry(&RegistryConfig::default());
        let err = r
            .validate("hire.v1.job.get", &json!({"path": {"job_id": ""}}))
            .expect_err("empty job_id");
        assert_eq!(err.to_error_data().code, rmcp::model::ErrorCode::INVALID_PARAMS);
        match err {
            LarkToolsError::InvalidArguments { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert!(matches!(
                    &violations[0],
                    Violation::ConstraintViolation { field, .. } if field == "path.job_id"
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dot_segment_path_values_are_rejected_before_rendering() {
        let r = registry(&RegistryConfig::default());
        for note_id in [".", ".."] {
            let err = r
                .prepare("hire.v1.note.delete", &json!({"path": {"note_id": note_id}}))
                .expect_err("dot segment");
            match err {
                LarkToolsError::InvalidArguments { violations, .. } => {
                    assert_eq!(violations.len(), 1, "{note_id}");
                    assert_eq!(violations[0].field(), "path.note_id");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert!(
            r.validate("hire.v1.note.delete", &json!({"path": {"note_id": "..note"}}))
                .is_ok()
        );
    }

    #[test]
    fn missing_path_section_is_reported() {
        let r = registry(&RegistryConfig::default());
        let err = r.validate("hire.v1.job.get", &Value::Null).expect_err("invalid");
        assert!(matches!(
            err,
            LarkToolsError::InvalidArguments { ref violations, .. }
                if violations == &vec![Violation::MissingRequiredField { field: "path".to_string() }]
        ));
    }

    #[test]
    fn valid_call_is_normalized_and_prepared() {
        let r = registry(&RegistryConfig::default());
        let req = r
            .prepare(
                "hire.v1.job.get",
                &json!({"path": {"job_id": "6960663240925956555"}, "params": {"user_id_type": "open_id"}}),
            )
            .expect("prepare");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/open-apis/hire/v1/jobs/6960663240925956555");
        assert_eq!(req.query, vec![("user_id_type".to_string(), "open_id".to_string())]);
        assert_eq!(req.access_token, AccessToken::Tenant);
        assert!(req.body.is_none());
    }

    #[test]
    fn use_uat_only_exposed_for_user_token_tools() {
        let r = registry(&RegistryConfig::default());
        let job = r.get("hire.v1.job.get").expect("job");
        assert!(job.input_schema()["properties"].get(USE_USER_TOKEN_ARG).is_none());

        let err = r
            .validate("hire.v1.job.get", &json!({"path": {"job_id": "1"}, "useUAT": true}))
            .expect_err("useUAT is unknown here");
        assert!(matches!(err, LarkToolsError::InvalidArguments { .. }));
    }

    #[test]
    fn auto_token_mode_honours_use_uat() {
        let r = registry(&RegistryConfig::default());
        let tenant = r
            .validate("hire.v1.note.delete", &json!({"path": {"note_id": "n1"}}))
            .expect("valid");
        assert_eq!(tenant.access_token, AccessToken::Tenant);

        let user = r
            .validate(
                "hire.v1.note.delete",
                &json!({"path": {"note_id": "n1"}, "useUAT": true}),
            )
            .expect("valid");
        assert_eq!(user.access_token, AccessToken::User);

        let user_only = r
            .validate("mail.v1.user.query", &json!({"data": {"email_list": []}}))
            .expect("valid");
        assert_eq!(user_only.access_token, AccessToken::User);
    }

    #[test]
    fn fixed_token_modes_filter_incompatible_tools() {
        let tenant = registry(&RegistryConfig {
            token_mode: TokenMode::TenantAccessToken,
            ..RegistryConfig::default()
        });
        assert!(tenant.get("mail.v1.user.query").is_none());
        assert_eq!(tenant.len(), 2);

        let user = registry(&RegistryConfig {
            token_mode: TokenMode::UserAccessToken,
            ..RegistryConfig::default()
        });
        assert!(user.get("hire.v1.job.get").is_none());
        let call = user
            .validate("hire.v1.note.delete", &json!({"path": {"note_id": "n1"}}))
            .expect("valid");
        assert_eq!(call.access_token, AccessToken::User);
    }

    #[test]
    fn selection_filters_tools() {
        let r = registry(&RegistryConfig {
            tools: ToolSelection::Detailed {
                include: vec!["hire.*".to_string()],
                exclude: vec!["*.delete".to_string()],
            },
            ..RegistryConfig::default()
        });
        assert_eq!(r.len(), 1);
        assert!(r.get("hire.v1.job.get").is_some());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = ToolRegistry::from_descriptors([job_get(), job_get()], &RegistryConfig::default())
            .expect_err("duplicate");
        assert!(matches!(err, LarkToolsError::Config(m) if m.contains("Duplicate")));
    }

    #[test]
    fn cased_names_colliding_with_other_tools_are_rejected() {
        let mut a = job_get();
        a.name = "hire.v1.jobConfig.get";
        let mut b = job_get();
        b.name = "hire.v1.job_config.get";
        let cfg = RegistryConfig {
            tool_name_case: ToolNameCase::Snake,
            ..RegistryConfig::default()
        };
        let err = ToolRegistry::from_descriptors([a, b], &cfg).expect_err("collision");
        assert!(matches!(err, LarkToolsError::Config(m) if m.contains("collides")));
    }

    #[test]
    fn data_section_is_passed_through() {
        let r = registry(&RegistryConfig::default());
        let req = r
            .prepare(
                "mail.v1.user.query",
                &json!({"data": {"email_list": ["a@example.com"]}}),
            )
            .expect("prepare");
        assert_eq!(req.body, Some(json!({"email_list": ["a@example.com"]})));
        assert!(req.query.is_empty());
    }

    #[test]
    fn mcp_tools_carry_schema_and_annotations() {
        let r = registry(&RegistryConfig::default());
        let tools = r.list_tools();
        let get = tools
            .iter()
            .find(|t| t.name == "hire.v1.job.get")
            .expect("tool");
        assert_eq!(
            get.input_schema.get("required"),
            Some(&json!(["path"]))
        );
        assert_eq!(
            get.annotations.as_ref().and_then(|a| a.read_only_hint),
            Some(true)
        );
    }
}
