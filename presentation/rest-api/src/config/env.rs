use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(String),
}

/// Reads a required variable. Blank values count as missing.
pub fn required(key: &str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingVariable(key.to_string()))
}

pub fn or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reads and parses a variable, falling back to `default` when unset or unparsable.
pub fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok().as_deref(), default)
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_value_when_present() {
        assert_eq!(parse_or(Some(" 12 "), 5u32), 12);
    }

    #[test]
    fn should_use_default_when_value_is_missing_or_invalid() {
        assert_eq!(parse_or::<u64>(None, 30), 30);
        assert_eq!(parse_or(Some("ten"), 10u64), 10);
    }

    #[test]
    fn should_report_missing_required_variable() {
        let err = required("FOOD_INVENTORY_SURELY_UNSET_VARIABLE").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config.missing_variable: FOOD_INVENTORY_SURELY_UNSET_VARIABLE"
        );
    }
}
