use bigdecimal::BigDecimal;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::service::TariffPolicy;

/// Application config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub calculator: CalculatorDefaults,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Values filled in when a quote request leaves them out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorDefaults {
    pub exchange_rate: BigDecimal,
    pub customs_broker_fee_krw: BigDecimal,
    pub origin_certificate_fee_krw: BigDecimal,
    pub fallback_tariff_rate_percent: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl CalculatorDefaults {
    pub fn tariff_policy(&self) -> TariffPolicy {
        TariffPolicy {
            fallback_rate_percent: self.fallback_tariff_rate_percent.clone(),
            origin_certificate_fee_krw: self.origin_certificate_fee_krw.clone(),
        }
    }
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            exchange_rate: BigDecimal::from(203),
            customs_broker_fee_krw: BigDecimal::from(30_000),
            origin_certificate_fee_krw: BigDecimal::from(30_000),
            fallback_tariff_rate_percent: BigDecimal::from(8),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            calculator: CalculatorDefaults::default(),
            cache: CacheConfig { ttl_secs: 300 },
        }
    }
}

impl AppConfig {
    /// Built-in defaults; add sources on top and deserialize
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("calculator.exchange_rate", "203")?
            .set_default("calculator.customs_broker_fee_krw", "30000")?
            .set_default("calculator.origin_certificate_fee_krw", "30000")?
            .set_default("calculator.fallback_tariff_rate_percent", "8")?
            .set_default("cache.ttl_secs", 300_i64)
    }

    /// Defaults, then `landed-cost.toml` if present, then `LANDED_COST__*` env vars
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("landed-cost").required(false))
            .add_source(Environment::with_prefix("LANDED_COST").separator("__"))
            .build()?
            .try_deserialize()
    }
}
