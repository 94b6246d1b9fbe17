//! HTTP semantics helpers.
//!
//! Generates MCP `ToolAnnotations` for descriptor-backed tools based on RFC 9110-style method
//! semantics.

use crate::descriptor::HttpMethod;
use rmcp::model::ToolAnnotations;

/// Generate MCP tool annotations based on HTTP method semantics.
///
/// `openWorldHint` is always `true`: every tool talks to the Lark open platform.
#[must_use]
pub fn annotations_for_method(method: HttpMethod) -> ToolAnnotations {
    let open_world_hint = Some(true);

    match method {
        HttpMethod::Get => ToolAnnotations {
            title: None,
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint,
        },
        HttpMethod::Post => ToolAnnotations {
            title: None,
            read_only_hint: Some(false),
            destructive_hint: Some(false),
            idempotent_hint: Some(false),
            open_world_hint,
        },
        HttpMethod::Put | HttpMethod::Delete => ToolAnnotations {
            title: None,
            read_only_hint: Some(false),
            destructive_hint: Some(true),
            idempotent_hint: Some(true),
            open_world_hint,
        },
        HttpMethod::Patch => ToolAnnotations {
            title: None,
            read_only_hint: Some(false),
            destructive_hint: Some(true),
            // PATCH may or may not be idempotent; do not guess.
            idempotent_hint: None,
            open_world_hint,
        },
    }
}
