use crate::error::{LarkToolsError, Result};
use larkmcp_tool_transforms::{ToolNameCase, ToolSelection};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FEISHU_DOMAIN: &str = "https://open.feishu.cn";
pub const LARK_DOMAIN: &str = "https://open.larksuite.com";

/// Registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Open platform base URL prepared requests are resolved against.
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Which tools are exposed.
    #[serde(default)]
    pub tools: ToolSelection,

    /// Which access token class calls are made with.
    #[serde(default)]
    pub token_mode: TokenMode,

    /// Casing of exposed tool names.
    #[serde(default)]
    pub tool_name_case: ToolNameCase,
}

fn default_domain() -> String {
    FEISHU_DOMAIN.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            tools: ToolSelection::default(),
            token_mode: TokenMode::default(),
            tool_name_case: ToolNameCase::default(),
        }
    }
}

/// Access token selection policy.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenMode {
    /// Per call: user token when `useUAT` is set and accepted, tenant token otherwise.
    #[default]
    Auto,
    /// Only tools accepting a tenant token are exposed.
    TenantAccessToken,
    /// Only tools accepting a user token are exposed.
    UserAccessToken,
}

impl RegistryConfig {
    /// Load a config file. `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if `domain` is not an absolute
    /// http(s) URL.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
        let cfg: RegistryConfig = if is_yaml {
            serde_yaml::from_str(&text)?
        } else {
            serde_json::from_str(&text)?
        };
        cfg.check()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns an error if `domain` is not an absolute http(s) URL.
    pub fn check(&self) -> Result<()> {
        let url = url::Url::parse(&self.domain).map_err(|e| {
            LarkToolsError::Config(format!("Invalid domain '{}': {e}", self.domain))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(LarkToolsError::Config(format!(
                "Invalid domain '{}': must be an absolute http(s) URL",
                self.domain
            )));
        }
        Ok(())
    }
}
