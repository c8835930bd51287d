//! Configuration management.
//!
//! Sources are layered: built-in defaults, then an optional TOML file,
//! then `SIZING__<SECTION>__<KEY>` environment variables.

mod settings;

pub use settings::{AppConfig, AppSettings, CalculatorSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

const ENV_PREFIX: &str = "SIZING";

/// Load configuration from defaults, an optional file, and environment.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_env(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder.add_source(env).build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use sizing_core::{Grade, SizingError, SizingMethod};
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("sizing-config-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = load_with_env(None, env_from(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let env = env_from(&[
            ("SIZING__CALCULATOR__ACCOUNT_VALUE", "50000"),
            ("SIZING__CALCULATOR__METHOD", "wild"),
            ("SIZING__MULTIPLIERS__LINEAR__A", "5"),
        ]);
        let config = load_with_env(None, env).unwrap();

        assert_eq!(config.calculator.account_value, dec!(50000));
        assert_eq!(config.calculator.method, SizingMethod::Wild);
        assert_eq!(config.multipliers.multiplier(SizingMethod::Linear, Grade::A), dec!(5));
        // untouched keys keep their defaults
        assert_eq!(config.multipliers.multiplier(SizingMethod::Linear, Grade::B), dec!(3));
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let path = write_temp(
            "partial",
            r#"
[calculator]
risk_percent = 1.5
grade = "C"

[grades.a]
win_rate = 80

[distribution]
d = 50
"#,
        );

        let config = load_with_env(Some(path.as_path()), env_from(&[])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.calculator.risk_percent, dec!(1.5));
        assert_eq!(config.calculator.grade, Grade::C);
        assert_eq!(config.grades.profile(Grade::A).win_rate, dec!(80));
        assert_eq!(config.grades.profile(Grade::A).name, "A-Trade");
        assert_eq!(config.distribution.count(Grade::D), 50);
        assert_eq!(config.distribution.count(Grade::A), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("sizing-config-does-not-exist.toml");
        assert!(load_with_env(Some(path.as_path()), env_from(&[])).is_err());
    }

    #[test]
    fn test_invalid_tables_fail_validation() {
        let env = env_from(&[
            ("SIZING__MULTIPLIERS__WILD__A", "-5"),
            ("SIZING__GRADES__A__WIN_RATE", "250"),
        ]);
        let config = load_with_env(None, env).unwrap();

        assert!(config.validate().is_err());

        let mut config = config;
        config.grades = sizing_core::GradeTable::default();
        match config.validate() {
            Err(SizingError::InvalidTable { field, .. }) => {
                assert_eq!(field, "multipliers.wild.a");
            }
            other => panic!("expected InvalidTable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_method_is_an_error() {
        let env = env_from(&[("SIZING__CALCULATOR__METHOD", "martingale")]);
        assert!(load_with_env(None, env).is_err());
    }
}
