//! Startup configuration.
//!
//! Every option can come from the command line or the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::store::DEFAULT_PATH;

/// Server-rendered todo list
#[derive(Parser, Debug, Clone)]
#[command(name = "htmx-todo")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Backing JSON Lines file
    #[arg(short, long, env = "TODO_FILE", default_value = DEFAULT_PATH)]
    pub file: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "TODO_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let config = Config::try_parse_from([
            "htmx-todo",
            "--file",
            "/tmp/list.jsonl",
            "--port",
            "9090",
            "--host",
            "127.0.0.1",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(config.file, PathBuf::from("/tmp/list.jsonl"));
        assert_eq!(config.port, 9090);
        assert!(config.log_json);
        assert_eq!(config.addr(), "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn short_flags() {
        let config = Config::try_parse_from(["htmx-todo", "-f", "a.jsonl", "-p", "1234"]).unwrap();
        assert_eq!(config.file, PathBuf::from("a.jsonl"));
        assert_eq!(config.port, 1234);
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Config::try_parse_from(["htmx-todo", "--port", "eighty"]).is_err());
        assert!(Config::try_parse_from(["htmx-todo", "--port", "70000"]).is_err());
    }
}
