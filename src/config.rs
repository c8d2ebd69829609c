use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// bind host (127.0.0.1)
    pub host: String,
    /// bind port (8000)
    pub port: u16,
    /// directory served under /static
    pub static_dir: PathBuf,
    /// reject signups once an activity reaches max_participants
    pub enforce_capacity: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            enforce_capacity: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Config::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {v:?}"))?,
            Err(_) => defaults.port,
        };
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let enforce_capacity = match std::env::var("ENFORCE_CAPACITY") {
            Ok(v) => parse_flag(&v)
                .with_context(|| format!("ENFORCE_CAPACITY must be true or false, got {v:?}"))?,
            Err(_) => defaults.enforce_capacity,
        };

        Ok(Config {
            host,
            port,
            static_dir,
            enforce_capacity,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        self.addr_with_port(self.port)
    }

    /// Address used when the configured port is already taken.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        self.addr_with_port(port)
    }

    fn addr_with_port(&self, port: u16) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, port)
            .parse()
            .with_context(|| format!("cannot parse bind address {}:{}", self.host, port))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
