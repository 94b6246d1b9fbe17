//! Lark/Feishu OpenAPI endpoints as MCP tools.
//!
//! Each endpoint is an immutable [`descriptor::EndpointDescriptor`]; every descriptor module
//! exports an ordered tool list, and [`registry::ToolRegistry`] indexes them by name, validates
//! caller arguments, and renders validated calls into request parts.
//!
//! It intentionally contains **no** HTTP client: dispatching the prepared request (and token
//! acquisition, retries, timeouts) is the caller's concern.

pub mod common;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod hire_v1;
pub mod mail_v1;
pub mod path_template;
pub mod registry;
pub mod request;
pub mod semantics;

use descriptor::EndpointDescriptor;

/// Every built-in descriptor, module by module.
#[must_use]
pub fn builtin_tools() -> Vec<EndpointDescriptor> {
    let mut out = hire_v1::tools();
    out.extend(mail_v1::tools());
    out
}
