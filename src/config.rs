use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a JSON rules file replacing the built-in table.
    pub rules_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let rules_path = env::var("RULES_PATH").ok().filter(|p| !p.is_empty());

        Self { rules_path }
    }
}
