use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Resolved server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite file holding the `advocates` table
    pub db_path: PathBuf,
    pub bind: SocketAddr,
}
