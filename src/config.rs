use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub server_port: u16,
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| "./assets".to_string()),
        })
    }

    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.assets_dir).join("countries.json")
    }
}
