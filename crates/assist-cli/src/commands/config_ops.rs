use std::fs;

use assist_engine::assist_core::settings::{self, Settings};

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: endpoint.base_url={}, interaction.sequence_responses={}",
        s.endpoint.base_url, s.interaction.sequence_responses
    );
}

/// Resolve effective settings: optional config file, then optional base URL override.
pub fn load(config: Option<&str>, base_url: Option<&str>) -> Settings {
    if let Some(path) = config {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(settings::init_custom(content), "Error: {}");
    }
    let mut s = settings::settings().clone();
    if let Some(url) = base_url {
        let toml = format!(
            "[endpoint]\nbase_url = {}\n[interaction]\nsequence_responses = {}\n",
            toml_string(url),
            s.interaction.sequence_responses
        );
        s = die!(settings::parse_settings_toml(&toml), "Error in --base-url: {}");
    }
    s
}

fn toml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
