//! Asset domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::number_utils::{ensure_non_negative, round_currency};
use crate::utils::serde_utils::deserialize_patch;

/// Broad class of a holding the user already owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Equity,
    Debt,
    Gold,
    RealEstate,
    Cash,
    #[default]
    Other,
}

/// Domain model representing an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub asset_class: AssetClass,
    pub current_value: f64,
    /// Decimal fraction
    pub expected_return_rate: Option<f64>,
}

/// Input model for creating a new asset
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    #[serde(default)]
    pub asset_class: AssetClass,
    #[serde(default)]
    pub current_value: f64,
    pub expected_return_rate: Option<f64>,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        ensure_non_negative("currentValue", self.current_value)?;
        if let Some(rate) = self.expected_return_rate {
            ensure_non_negative("expectedReturnRate", rate)?;
        }
        Ok(())
    }

    pub fn into_asset(self, id: i64) -> Asset {
        Asset {
            id,
            name: self.name.trim().to_string(),
            asset_class: self.asset_class,
            current_value: self.current_value,
            expected_return_rate: self.expected_return_rate,
        }
    }
}

/// Partial update of an asset. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub name: Option<String>,
    pub asset_class: Option<AssetClass>,
    pub current_value: Option<f64>,
    /// `Some(None)` clears the rate
    #[serde(
        default,
        deserialize_with = "deserialize_patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_return_rate: Option<Option<f64>>,
}

impl AssetUpdate {
    /// Applies the changes on top of `current` and validates the outcome.
    pub fn apply(self, current: &Asset) -> Result<Asset> {
        let candidate = NewAsset {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            asset_class: self.asset_class.unwrap_or(current.asset_class),
            current_value: self.current_value.unwrap_or(current.current_value),
            expected_return_rate: self
                .expected_return_rate
                .unwrap_or(current.expected_return_rate),
        };
        candidate.validate()?;
        Ok(candidate.into_asset(current.id))
    }
}

/// Aggregate view over all assets
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub total_value: f64,
    pub asset_count: usize,
    pub by_class: BTreeMap<AssetClass, f64>,
}

impl AssetSummary {
    pub fn from_assets(assets: &[Asset]) -> Self {
        let mut by_class: BTreeMap<AssetClass, f64> = BTreeMap::new();
        let mut total = 0.0;
        for asset in assets {
            total += asset.current_value;
            *by_class.entry(asset.asset_class).or_insert(0.0) += asset.current_value;
        }
        for value in by_class.values_mut() {
            *value = round_currency(*value);
        }
        AssetSummary {
            total_value: round_currency(total),
            asset_count: assets.len(),
            by_class,
        }
    }
}
