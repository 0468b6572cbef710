use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

use crate::core::{validate_rate, AppError, Money, Result};
use crate::modules::commissions::services::DEFAULT_PLATFORM_RATE;
use crate::modules::pricing::models::FeeSchedule;

/// Business parameters shared by the pricing and commission calculators.
///
/// Resolved in three layers: built-in defaults, then an optional YAML file,
/// then individual environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub fee_schedule: FeeSchedule,
    pub platform_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            fee_schedule: FeeSchedule::default(),
            platform_rate: DEFAULT_PLATFORM_RATE,
        }
    }
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("PRICING_CONFIG_FILE") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        info!(
            card_rate = %config.fee_schedule.card_rate,
            fixed_service_fee = %config.fee_schedule.fixed_service_fee,
            installments = config.fee_schedule.interest_rates.len(),
            platform_rate = %config.platform_rate,
            "Pricing configuration loaded"
        );

        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!(
                "cannot read pricing config {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| AppError::configuration(format!("invalid pricing config: {}", e)))
    }

    /// Overlay individual variables from `lookup` onto the current values
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CARD_PROCESSING_RATE") {
            self.fee_schedule.card_rate = parse_decimal("CARD_PROCESSING_RATE", &value)?;
        }

        if let Some(value) = lookup("CARD_SERVICE_FEE") {
            self.fee_schedule.fixed_service_fee = Money::from_str(&value)
                .map_err(|_| AppError::configuration("Invalid CARD_SERVICE_FEE"))?;
        }

        if let Some(value) = lookup("CARD_INTEREST_RATES") {
            self.fee_schedule.interest_rates = value
                .split(',')
                .map(|rate| parse_decimal("CARD_INTEREST_RATES", rate))
                .collect::<Result<Vec<_>>>()?;
        }

        if let Some(value) = lookup("PLATFORM_COMMISSION_RATE") {
            self.platform_rate = parse_decimal("PLATFORM_COMMISSION_RATE", &value)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.fee_schedule.validate()?;
        validate_rate("platform_rate", self.platform_rate)
            .map_err(|e| AppError::configuration(e.to_string()))?;

        if !self.fee_schedule.is_monotonic() {
            warn!("Interest rates decrease with more installments; card totals will not be monotonic");
        }

        Ok(())
    }
}

fn parse_decimal(name: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|_| AppError::configuration(format!("Invalid {}: {}", name, value)))
}
