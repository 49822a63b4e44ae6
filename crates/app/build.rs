use std::path::{Path, PathBuf};

use shared_types::{
    config_inputs, find_config, AppConfig, AppError, ServiceEndpoints, ALL_SERVICES, DOTENV_FILE,
};

/// Env var carrying the UI language tag.
const LOCALE_KEY: &str = "APP_LOCALE";

/// Compile-time env name the resolved language tag is exported under.
const COMPILED_LOCALE_KEY: &str = "APP_UI_LOCALE";

fn main() -> Result<(), AppError> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let search_dirs = [manifest_dir.clone(), manifest_dir.join("../..")];

    // Inputs are watched even when absent so a file created later
    // triggers a rerun.
    for path in config_inputs(&search_dirs) {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    // Variables already set in the process win over `.env`.
    for dir in &search_dirs {
        let dotenv = dir.join(DOTENV_FILE);
        if dotenv.exists() {
            if let Err(e) = dotenvy::from_path(&dotenv) {
                println!("cargo:warning=failed to load {}: {e}", dotenv.display());
            }
        }
    }

    let config = load_config(&search_dirs)?;
    let endpoints = ServiceEndpoints::resolve(&config.endpoints, |key| std::env::var(key).ok())?;

    for kind in ALL_SERVICES {
        let key = kind.env_key();
        println!("cargo:rerun-if-env-changed={key}");
        match endpoints.get(*kind) {
            Some(url) => println!("cargo:rustc-env={}={url}", kind.compiled_key()),
            None => println!(
                "cargo:warning={key} is not set; the {} service URL will be unavailable",
                kind.display_name()
            ),
        }
    }

    println!("cargo:rerun-if-env-changed={LOCALE_KEY}");
    let locale = std::env::var(LOCALE_KEY)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or(config.ui.locale);
    if let Some(locale) = locale {
        println!("cargo:rustc-env={COMPILED_LOCALE_KEY}={}", locale.trim());
    }

    Ok(())
}

/// Parse the first `config.toml` found; a missing file yields defaults.
fn load_config(dirs: &[PathBuf]) -> Result<AppConfig, AppError> {
    match find_config(dirs) {
        Some(path) => read_config(&path),
        None => Ok(AppConfig::default()),
    }
}

fn read_config(path: &Path) -> Result<AppConfig, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::config_parse(format!("{}: {e}", path.display())))?;
    AppConfig::from_toml_str(&contents)
        .map_err(|e| AppError::config_parse(format!("{}: {}", path.display(), e.message)))
}
