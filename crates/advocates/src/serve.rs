use crate::settings;
use advocates_api::ServerConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// SQLite database file [env: ADVOCATES_DB] [default: advocates.db]
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub db: Option<PathBuf>,

    /// Address to listen on [env: ADVOCATES_BIND] [default: 127.0.0.1:3000]
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,
}

pub fn execute(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        db_path: settings::db_path(args.db),
        bind: settings::bind_addr(args.bind)?,
    };
    eprintln!(
        "Serving {} on http://{}{}",
        config.db_path.display(),
        config.bind,
        advocates_api::ADVOCATES_PATH
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(advocates_api::serve(config))
}
