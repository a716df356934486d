//! Tests for asset domain models.

#[cfg(test)]
mod tests {
    use crate::assets::{Asset, AssetClass, AssetSummary, AssetUpdate, NewAsset};

    fn asset(id: i64, class: AssetClass, value: f64) -> Asset {
        Asset {
            id,
            name: format!("asset-{}", id),
            asset_class: class,
            current_value: value,
            expected_return_rate: None,
        }
    }

    #[test]
    fn test_asset_class_serialization() {
        assert_eq!(
            serde_json::to_string(&AssetClass::RealEstate).unwrap(),
            "\"real_estate\""
        );
        assert_eq!(
            serde_json::from_str::<AssetClass>("\"gold\"").unwrap(),
            AssetClass::Gold
        );
        assert_eq!(AssetClass::default(), AssetClass::Other);
    }

    #[test]
    fn test_new_asset_validation() {
        let ok = NewAsset {
            name: "Index fund".to_string(),
            asset_class: AssetClass::Equity,
            current_value: 12_000.0,
            expected_return_rate: Some(0.11),
        };
        assert!(ok.validate().is_ok());

        let blank = NewAsset {
            name: " ".to_string(),
            ..ok.clone()
        };
        assert!(blank.validate().is_err());

        let negative = NewAsset {
            current_value: -1.0,
            ..ok.clone()
        };
        assert!(negative.validate().is_err());

        let negative_rate = NewAsset {
            expected_return_rate: Some(-0.05),
            ..ok
        };
        assert!(negative_rate.validate().is_err());
    }

    #[test]
    fn test_update_keeps_id_and_unchanged_fields() {
        let current = asset(4, AssetClass::Cash, 100.0);
        let updated = AssetUpdate {
            current_value: Some(250.0),
            ..AssetUpdate::default()
        }
        .apply(&current)
        .unwrap();

        assert_eq!(updated.id, 4);
        assert_eq!(updated.current_value, 250.0);
        assert_eq!(updated.asset_class, AssetClass::Cash);
        assert_eq!(updated.name, current.name);
    }

    #[test]
    fn test_update_can_clear_expected_return_rate() {
        let current = Asset {
            expected_return_rate: Some(0.1),
            ..asset(4, AssetClass::Equity, 100.0)
        };

        let kept = AssetUpdate::default().apply(&current).unwrap();
        assert_eq!(kept.expected_return_rate, Some(0.1));

        let cleared = AssetUpdate {
            expected_return_rate: Some(None),
            ..AssetUpdate::default()
        }
        .apply(&current)
        .unwrap();
        assert_eq!(cleared.expected_return_rate, None);
    }

    #[test]
    fn test_invalid_update_is_rejected() {
        let current = asset(4, AssetClass::Cash, 100.0);
        let result = AssetUpdate {
            current_value: Some(-250.0),
            ..AssetUpdate::default()
        }
        .apply(&current);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_groups_by_class() {
        let assets = vec![
            asset(1, AssetClass::Equity, 1000.25),
            asset(2, AssetClass::Equity, 500.0),
            asset(3, AssetClass::Gold, 250.5),
        ];
        let summary = AssetSummary::from_assets(&assets);

        assert_eq!(summary.asset_count, 3);
        assert_eq!(summary.total_value, 1750.75);
        assert_eq!(summary.by_class[&AssetClass::Equity], 1500.25);
        assert_eq!(summary.by_class[&AssetClass::Gold], 250.5);
        assert!(!summary.by_class.contains_key(&AssetClass::Cash));
    }

    #[test]
    fn test_empty_summary() {
        let summary = AssetSummary::from_assets(&[]);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.asset_count, 0);
        assert!(summary.by_class.is_empty());
    }
}
