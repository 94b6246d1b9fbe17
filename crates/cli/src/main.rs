use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use larkmcp_tool_transforms::{ToolNameCase, ToolSelection};
use larkmcp_tools::config::{RegistryConfig, TokenMode};
use larkmcp_tools::error::LarkToolsError;
use larkmcp_tools::registry::ToolRegistry;
use owo_colors::OwoColorize as _;
use serde_json::{Value, json};
use std::io::Read as _;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "larkmcp",
    version,
    about = "Inspect, validate and prepare Lark/Feishu OpenAPI tool calls"
)]
struct Cli {
    #[command(flatten)]
    registry: RegistryArgs,

    /// Log output format. Logs go to stderr; filter with RUST_LOG.
    #[arg(long, value_enum, env = "LARKMCP_LOG_FORMAT", default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RegistryArgs {
    /// Registry config file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long, env = "LARKMCP_CONFIG")]
    config: Option<PathBuf>,

    /// Open platform base URL, e.g. https://open.larksuite.com.
    #[arg(long, env = "LARKMCP_DOMAIN")]
    domain: Option<String>,

    #[arg(long, value_enum, env = "LARKMCP_TOKEN_MODE")]
    token_mode: Option<TokenModeArg>,

    #[arg(long, value_enum, env = "LARKMCP_TOOL_NAME_CASE")]
    tool_name_case: Option<NameCaseArg>,

    /// Only expose tools whose dotted name matches this glob. Can be repeated.
    #[arg(long)]
    include: Vec<String>,

    /// Hide tools whose dotted name matches this glob. Can be repeated.
    #[arg(long)]
    exclude: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered tools.
    List {
        /// Print MCP tool definitions as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a tool's description, input schema and smallest valid arguments.
    Describe { tool: String },

    /// Validate tool arguments and print the normalized call.
    Validate {
        tool: String,
        #[command(flatten)]
        input: ArgumentsInput,
    },

    /// Validate tool arguments and print the request they render to.
    Prepare {
        tool: String,
        #[command(flatten)]
        input: ArgumentsInput,
    },
}

#[derive(Args, Debug)]
struct ArgumentsInput {
    /// Tool arguments as a JSON object, e.g. '{"path":{"job_id":"6960"}}'.
    #[arg(long = "args", conflicts_with = "arguments_file")]
    arguments: Option<String>,

    /// Read tool arguments from a file (`-` for stdin).
    #[arg(long = "args-file")]
    arguments_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TokenModeArg {
    Auto,
    TenantAccessToken,
    UserAccessToken,
}

impl From<TokenModeArg> for TokenMode {
    fn from(v: TokenModeArg) -> Self {
        match v {
            TokenModeArg::Auto => TokenMode::Auto,
            TokenModeArg::TenantAccessToken => TokenMode::TenantAccessToken,
            TokenModeArg::UserAccessToken => TokenMode::UserAccessToken,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NameCaseArg {
    Dot,
    Snake,
    Kebab,
    Camel,
}

impl From<NameCaseArg> for ToolNameCase {
    fn from(v: NameCaseArg) -> Self {
        match v {
            NameCaseArg::Dot => ToolNameCase::Dot,
            NameCaseArg::Snake => ToolNameCase::Snake,
            NameCaseArg::Kebab => ToolNameCase::Kebab,
            NameCaseArg::Camel => ToolNameCase::Camel,
        }
    }
}

impl RegistryArgs {
    /// Config file (or defaults) with flag and env overrides applied.
    fn resolve(&self) -> Result<RegistryConfig> {
        let mut cfg = match &self.config {
            Some(path) => RegistryConfig::load(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => RegistryConfig::default(),
        };
        if let Some(domain) = &self.domain {
            cfg.domain.clone_from(domain);
        }
        if let Some(mode) = self.token_mode {
            cfg.token_mode = mode.into();
        }
        if let Some(case) = self.tool_name_case {
            cfg.tool_name_case = case.into();
        }
        if !self.include.is_empty() || !self.exclude.is_empty() {
            cfg.tools = ToolSelection::Detailed {
                include: self.include.clone(),
                exclude: self.exclude.clone(),
            };
        }
        cfg.check()?;
        Ok(cfg)
    }
}

impl ArgumentsInput {
    fn read(&self) -> Result<Value> {
        let text = match (&self.arguments, &self.arguments_file) {
            (Some(inline), _) => inline.clone(),
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("read arguments from stdin")?;
                buf
            }
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("read arguments {}", path.display()))?,
            (None, None) => return Ok(json!({})),
        };
        serde_json::from_str(&text).context("parse tool arguments as JSON")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = cli.registry.resolve()?;
    let registry = ToolRegistry::builtin(&config).context("build tool registry")?;

    match cli.command {
        Commands::List { json } => cmd_list(&registry, json),
        Commands::Describe { tool } => cmd_describe(&registry, &tool),
        Commands::Validate { tool, input } => cmd_validate(&registry, &tool, &input),
        Commands::Prepare { tool, input } => cmd_prepare(&registry, &tool, &input),
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output as json")?;
    println!("{text}");
    Ok(())
}

/// Prints violations to stderr before handing the error to `main`.
fn report(err: LarkToolsError) -> anyhow::Error {
    if let LarkToolsError::InvalidArguments { violations, .. } = &err {
        for v in violations {
            eprintln!("  {} {v}", "-".red());
        }
    }
    anyhow::Error::new(err)
}

fn cmd_list(registry: &ToolRegistry, json: bool) -> Result<()> {
    if json {
        return print_json(&registry.list_tools());
    }
    for tool in registry.iter() {
        let d = tool.descriptor();
        println!(
            "{:<6} {}  {}",
            d.http_method.as_str().green(),
            tool.name().bold(),
            d.path.dimmed()
        );
    }
    Ok(())
}

fn cmd_describe(registry: &ToolRegistry, name: &str) -> Result<()> {
    let tool = registry.lookup(name)?;
    let d = tool.descriptor();
    print_json(&json!({
        "name": tool.name(),
        "originalName": d.name,
        "sdkName": d.sdk_name,
        "project": d.project,
        "method": d.http_method,
        "path": d.path,
        "description": d.description,
        "accessTokens": d.access_tokens,
        "inputSchema": tool.input_schema(),
        "exampleArguments": tool.example_arguments(),
    }))
}

fn cmd_validate(registry: &ToolRegistry, name: &str, input: &ArgumentsInput) -> Result<()> {
    let arguments = input.read()?;
    debug!(tool = %name, "validating arguments");
    let call = registry.validate(name, &arguments).map_err(report)?;
    print_json(&call)
}

fn cmd_prepare(registry: &ToolRegistry, name: &str, input: &ArgumentsInput) -> Result<()> {
    let arguments = input.read()?;
    let request = registry.prepare(name, &arguments).map_err(report)?;
    let url = request.url(registry.domain())?;
    print_json(&json!({
        "url": url.as_str(),
        "request": request,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;
    use std::io::Write as _;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config_file() {
        let mut f = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        writeln!(f, "tokenMode: user_access_token\ntoolNameCase: snake").expect("write");
        let path = f.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "larkmcp",
            "--config",
            &path,
            "--domain",
            "https://open.larksuite.com",
            "--tool-name-case",
            "kebab",
            "--include",
            "mail.*",
            "list",
        ])
        .expect("parse");
        let cfg = cli.registry.resolve().expect("resolve");

        assert_eq!(cfg.domain, "https://open.larksuite.com");
        assert_eq!(cfg.token_mode, TokenMode::UserAccessToken);
        assert_eq!(cfg.tool_name_case, ToolNameCase::Kebab);
        assert!(cfg.tools.allows("mail.v1.mailgroup.get"));
        assert!(!cfg.tools.allows("hire.v1.job.get"));
    }

    #[test]
    fn rejects_invalid_domain_override() {
        let cli = Cli::try_parse_from(["larkmcp", "--domain", "open.feishu.cn", "list"])
            .expect("parse");
        assert!(cli.registry.resolve().is_err());
    }

    #[test]
    fn validate_subcommand_reads_inline_arguments() {
        let cli = Cli::try_parse_from([
            "larkmcp",
            "validate",
            "hire.v1.job.get",
            "--args",
            r#"{"path":{"job_id":"6960"}}"#,
        ])
        .expect("parse");
        let Commands::Validate { tool, input } = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(tool, "hire.v1.job.get");
        assert_eq!(
            input.read().expect("read"),
            json!({"path": {"job_id": "6960"}})
        );
    }

    #[test]
    fn arguments_default_to_empty_object() {
        let input = ArgumentsInput {
            arguments: None,
            arguments_file: None,
        };
        assert_eq!(input.read().expect("read"), json!({}));
    }

    #[test]
    fn arguments_file_and_inline_conflict() {
        let res = Cli::try_parse_from([
            "larkmcp",
            "prepare",
            "hire.v1.job.get",
            "--args",
            "{}",
            "--args-file",
            "args.json",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn arguments_file_is_parsed() {
        let mut f = tempfile::NamedTempFile::new().expect("tempfile");
        write!(f, r#"{{"data":{{"email_list":["a@example.com"]}}}}"#).expect("write");
        let input = ArgumentsInput {
            arguments: None,
            arguments_file: Some(f.path().to_path_buf()),
        };
        assert_eq!(
            input.read().expect("read"),
            json!({"data": {"email_list": ["a@example.com"]}})
        );
    }
}
