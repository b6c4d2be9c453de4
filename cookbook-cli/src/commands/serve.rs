//! `cookbook serve [--host ...] [--port ...] [--seed FILE] [--log-json]`

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cookbook_server::{config, start_blocking, LogFormat, ServerConfig};

/// Run the HTTP server in the foreground until ctrl-c.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, env = "COOKBOOK_HOST", default_value_t = config::DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, short = 'p', env = "COOKBOOK_PORT", default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// YAML file of entries to register before accepting requests.
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Emit structured JSON log lines instead of human-readable ones.
    #[arg(long)]
    pub log_json: bool,
}

impl ServeArgs {
    pub fn run(self) -> Result<()> {
        start_blocking(self.into_config()).context("server exited with error")
    }

    fn into_config(self) -> ServerConfig {
        ServerConfig {
            addr: SocketAddr::new(self.host, self.port),
            seed: self.seed,
            log_format: if self.log_json {
                LogFormat::Json
            } else {
                LogFormat::Pretty
            },
        }
    }
}
