//! Bundled dashboard configuration: the seed subscription list and the
//! investments figure shown alongside the computed totals.

use serde::Deserialize;

use crate::store::Subscription;

const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub subscriptions: Vec<Subscription>,
    /// Fixed figure added to total expense for the "Total Expenditure"
    /// metric. Not derived from the subscription list.
    pub total_investments: f64,
}

/// Load the configuration bundled into the binary. A malformed bundle
/// degrades to an empty dashboard; the tests below pin the bundled file.
pub fn load() -> AppConfig {
    serde_json::from_str(SEED_JSON).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bundled_seed_parses() {
        let config: AppConfig =
            serde_json::from_str(SEED_JSON).expect("bundled seed must be valid JSON");
        assert_eq!(config.subscriptions.len(), 5);
        assert_eq!(config.total_investments, 500.0);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let config = load();
        let ids: HashSet<i64> = config.subscriptions.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), config.subscriptions.len());
    }

    #[test]
    fn test_seed_amounts_are_non_negative() {
        let config = load();
        for sub in &config.subscriptions {
            assert!(sub.amount >= 0.0, "{} has a negative amount", sub.name);
        }
    }

    #[test]
    fn test_seed_totals_match_reference() {
        let config = load();
        let total: f64 = config.subscriptions.iter().map(|s| s.amount).sum();
        assert!((total - 94.96).abs() < 1e-9);
    }
}
