//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{StoreBackend, VaultConfig};
use crate::domain::errors::VaultError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into VaultConfig
/// 4. Applies environment variable overrides (`MEDIVAULT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use medivault::config::loader::load_config;
///
/// let config = load_config("medivault.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VaultConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VaultError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VaultError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: VaultConfig = toml::from_str(&contents)
        .map_err(|e| VaultError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        VaultError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(VaultError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `MEDIVAULT_*` environment variable overrides
fn apply_env_overrides(config: &mut VaultConfig) -> Result<()> {
    if let Ok(level) = std::env::var("MEDIVAULT_APPLICATION_LOG_LEVEL") {
        tracing::debug!(log_level = %level, "Overriding log level from environment");
        config.application.log_level = level;
    }

    if let Ok(backend) = std::env::var("MEDIVAULT_STORE_BACKEND") {
        config.store.backend = match backend.to_lowercase().as_str() {
            "json" => StoreBackend::Json,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(VaultError::Configuration(format!(
                    "Invalid MEDIVAULT_STORE_BACKEND '{other}'. Must be 'json' or 'memory'"
                )));
            }
        };
    }

    if let Ok(path) = std::env::var("MEDIVAULT_STORE_PATH") {
        config.store.path = Some(path);
    }

    if let Ok(dir) = std::env::var("MEDIVAULT_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = dir;
    }

    if let Ok(value) = std::env::var("MEDIVAULT_EXPORT_OVERWRITE") {
        config.export.overwrite = parse_bool("MEDIVAULT_EXPORT_OVERWRITE", &value)?;
    }

    if let Ok(value) = std::env::var("MEDIVAULT_VERIFICATION_ENABLED") {
        config.verification.enable_verification =
            parse_bool("MEDIVAULT_VERIFICATION_ENABLED", &value)?;
    }

    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(VaultError::Configuration(format!(
            "Invalid {name} '{other}'. Must be 'true' or 'false'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_var() {
        std::env::set_var("MEDIVAULT_TEST_SUBST", "items.json");
        let result = substitute_env_vars("path = \"${MEDIVAULT_TEST_SUBST}\"").unwrap();
        assert_eq!(result, "path = \"items.json\"\n");
        std::env::remove_var("MEDIVAULT_TEST_SUBST");
    }

    #[test]
    fn test_substitute_missing_var_fails() {
        std::env::remove_var("MEDIVAULT_TEST_MISSING");
        let result = substitute_env_vars("path = \"${MEDIVAULT_TEST_MISSING}\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("MEDIVAULT_TEST_COMMENTED");
        let result = substitute_env_vars("# path = \"${MEDIVAULT_TEST_COMMENTED}\"").unwrap();
        assert!(result.contains("MEDIVAULT_TEST_COMMENTED"));
    }

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "false").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", "yes").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/medivault.toml");
        assert!(result.is_err());
    }
}
