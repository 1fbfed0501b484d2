use std::net::SocketAddr;

use anyhow::{bail, Context, Result};

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub listen_addr: SocketAddr,
  pub log_format: LogFormat,
  pub metrics: bool,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let addr = lookup("TOKENHUB_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
    let listen_addr = addr
      .parse::<SocketAddr>()
      .with_context(|| format!("TOKENHUB_ADDR is not a socket address: {addr}"))?;
    let log_format = match lookup("TOKENHUB_LOG_FORMAT").as_deref() {
      None | Some("text") => LogFormat::Text,
      Some("json") => LogFormat::Json,
      Some(other) => bail!("TOKENHUB_LOG_FORMAT must be text or json, got {other}"),
    };
    let metrics = match lookup("TOKENHUB_METRICS").as_deref() {
      None | Some("1" | "true") => true,
      Some("0" | "false") => false,
      Some(other) => bail!("TOKENHUB_METRICS must be true or false, got {other}"),
    };
    Ok(Config {
      listen_addr,
      log_format,
      metrics,
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn config(vars: &[(&str, &str)]) -> Result<Config> {
    let vars: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = config(&[]).unwrap();
    assert_eq!(config.listen_addr, DEFAULT_ADDR.parse().unwrap());
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.metrics);
  }

  #[test]
  fn reads_every_variable() {
    let config = config(&[
      ("TOKENHUB_ADDR", "127.0.0.1:8000"),
      ("TOKENHUB_LOG_FORMAT", "json"),
      ("TOKENHUB_METRICS", "false"),
    ])
    .unwrap();
    assert_eq!(config.listen_addr.port(), 8000);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.metrics);
  }

  #[test]
  fn errors_name_the_offending_variable() {
    let err = config(&[("TOKENHUB_ADDR", "localhost")]).unwrap_err();
    assert!(err.to_string().contains("TOKENHUB_ADDR"));
    let err = config(&[("TOKENHUB_LOG_FORMAT", "yaml")]).unwrap_err();
    assert!(err.to_string().contains("TOKENHUB_LOG_FORMAT"));
    let err = config(&[("TOKENHUB_METRICS", "maybe")]).unwrap_err();
    assert!(err.to_string().contains("TOKENHUB_METRICS"));
  }
}
