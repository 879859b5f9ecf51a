//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use toolgate_domain::{RequestMetadata, TENANT_HEADER, TOKEN_HEADER, ToolCall};

/// Output format for tool results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable output
    Text,
    /// The result exactly as the HTTP transport returns it
    Json,
}

/// CLI arguments for toolgate
#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(author, version, about = "Authenticated tool server with human-in-the-loop workflows")]
#[command(long_about = r#"
toolgate exposes account tools to AI agents. Every call is authenticated
with an HS256 token (x-jwt-token) and a tenant id (x-tenant-id) before any
tool runs. Mutating tools follow a stateless confirmation protocol: the
caller resupplies the arguments echoed by each pending result.

Configuration files are loaded from (in priority order):
1. TOOLGATE_* environment variables (e.g. TOOLGATE_AUTH__SECRET)
2. --config <path>     Explicit config file
3. ./toolgate.toml     Project-level config
4. ~/.config/toolgate/config.toml   Global config

Example:
  toolgate serve
  toolgate tools
  toolgate call change_email --token "$JWT" --tenant test123 --arg account_id=12345
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP tool server until Ctrl-C
    Serve {
        /// Listen address (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Run a single tool call through the authenticated dispatcher
    Call(CallArgs),

    /// List the available tools
    Tools {
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the effective configuration and its sources
    ShowConfig,
}

/// Arguments of `toolgate call`
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name
    pub tool: String,

    /// Signed token sent as x-jwt-token
    #[arg(long, default_value = "")]
    pub token: String,

    /// Tenant id sent as x-tenant-id
    #[arg(long, default_value = "")]
    pub tenant: String,

    /// String argument (can be specified multiple times)
    #[arg(short, long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

impl CallArgs {
    /// Build the call envelope. Later `--arg` values win.
    pub fn tool_call(&self) -> ToolCall {
        self.args
            .iter()
            .fold(ToolCall::new(&self.tool), |call, (key, value)| {
                call.with_arg(key.clone(), Value::String(value.clone()))
            })
    }

    /// Credential metadata as the HTTP transport would see it
    pub fn metadata(&self) -> RequestMetadata {
        RequestMetadata::new()
            .with(TOKEN_HEADER, self.token.as_str())
            .with(TENANT_HEADER, self.tenant.as_str())
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
