use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_MAX_PHOTO_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Inventory service: register items, attach photos, search them by id.
#[derive(Parser, Debug, Clone)]
#[command(name = "inventory", version, about, long_about = None, disable_help_flag = true)]
pub struct Config {
    /// Address to bind the server to
    #[arg(short = 'h', long, env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, env = "PORT")]
    pub port: u16,

    /// Directory where uploaded photos are stored
    #[arg(short = 'c', long = "cache", env = "CACHE_DIR")]
    pub cache_dir: PathBuf,

    /// Largest accepted photo upload, in bytes
    #[arg(long, env = "MAX_PHOTO_SIZE", default_value_t = DEFAULT_MAX_PHOTO_SIZE)]
    pub max_photo_size: usize,

    /// Print help
    #[allow(dead_code)]
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Config {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
