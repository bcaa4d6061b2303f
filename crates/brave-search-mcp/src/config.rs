use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

use crate::services::DEFAULT_TIMEOUT;

/// Brave Search MCP server - exposes `web_search` over stdio or HTTP
#[derive(Parser, Debug)]
#[command(name = "mcp-brave-search", version)]
pub struct Args {
    /// Brave Search API key (or set BRAVE_SEARCH_API_KEY env var)
    #[arg(long, env = "BRAVE_SEARCH_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Total timeout for each search request, in seconds
    #[arg(long, env = "BRAVE_SEARCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve MCP over stdin/stdout (default)
    Stdio,

    /// Serve MCP over streamable HTTP at /mcp, plus GET /health
    Serve {
        /// Bind address
        #[arg(long, env = "MCP_BRAVE_SEARCH_LISTEN", default_value = "0.0.0.0:8000")]
        listen: SocketAddr,
    },

    /// Run a one-result test search and print the outcome
    Check,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Stdio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stdio() {
        let args = Args::try_parse_from(["mcp-brave-search"]).unwrap();
        assert_eq!(args.command(), Command::Stdio);
    }

    #[test]
    fn test_serve_with_listen_and_key() {
        let args = Args::try_parse_from([
            "mcp-brave-search",
            "serve",
            "--listen",
            "127.0.0.1:9000",
            "--api-key",
            "abc",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(
            args.command(),
            Command::Serve {
                listen: "127.0.0.1:9000".parse().unwrap()
            }
        );
        assert_eq!(args.api_key.as_deref(), Some("abc"));
        assert_eq!(args.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_listen_address() {
        assert!(Args::try_parse_from(["mcp-brave-search", "serve", "--listen", "nope"]).is_err());
    }
}
