use std::time::Duration;

use super::env;

const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// Tuning for shelf-life estimation.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub lookup_timeout: Duration,
    pub default_shelf_life_days: u32,
}

impl InventoryConfig {
    /// Environment variables:
    /// - SHELF_LIFE_LOOKUP_TIMEOUT_SECS: budget for the external lookup (default: 10)
    /// - DEFAULT_SHELF_LIFE_DAYS: used when no other source answers (default: 7)
    pub fn from_env() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(env::parsed_or(
                "SHELF_LIFE_LOOKUP_TIMEOUT_SECS",
                DEFAULT_LOOKUP_TIMEOUT_SECS,
            )),
            default_shelf_life_days: env::parsed_or(
                "DEFAULT_SHELF_LIFE_DAYS",
                DEFAULT_SHELF_LIFE_DAYS,
            ),
        }
    }
}
