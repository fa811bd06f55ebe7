use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::services::repository::CountryRepository;

#[derive(Parser, Debug)]
#[command(
    name = "countrysrv",
    about = "HTTP server that serves a searchable, sectioned country dial-code catalog",
    version,
    author
)]
pub struct Args {
    /// Port to listen on, overriding SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to a catalog file, overriding the one under ASSETS_DIR
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Serve the catalog compiled into the binary, ignoring any files
    #[arg(long)]
    pub bundled: bool,
}

impl Args {
    pub fn server_port(&self, config: &Config) -> u16 {
        self.port.unwrap_or(config.server_port)
    }

    /// Source precedence: --bundled, then --catalog, then the assets
    /// directory if a catalog file is there, then the bundled copy.
    pub fn repository(&self, config: &Config) -> CountryRepository {
        if self.bundled {
            return CountryRepository::bundled();
        }
        if let Some(path) = &self.catalog {
            return CountryRepository::from_path(path);
        }
        let default_path = config.catalog_path();
        if default_path.exists() {
            CountryRepository::from_path(default_path)
        } else {
            CountryRepository::bundled()
        }
    }
}
