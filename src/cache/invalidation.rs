//! Invalidation Router
//!
//! Maps a domain event ("inventory changed", "a sale closed", ...) to the
//! cache keys it makes stale. Dashboard aggregates merge data from every
//! domain, so each domain drops the shared [`DASHBOARD_KEYS`] on top of its
//! own entries.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::cache::CacheKey;

/// Aggregates shared by every domain.
pub const DASHBOARD_KEYS: [CacheKey; 3] = [
    CacheKey::DashboardMetrics,
    CacheKey::DashboardDaily,
    CacheKey::DashboardMonthly,
];

// == Domain ==
/// A source of writes that feeds cached aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Inventory,
    Sales,
    Deliveries,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Inventory, Domain::Sales, Domain::Deliveries];

    pub const fn as_str(self) -> &'static str {
        match self {
            Domain::Inventory => "inventory",
            Domain::Sales => "sales",
            Domain::Deliveries => "deliveries",
        }
    }

    /// Keys owned by this domain alone, without the shared dashboard keys.
    pub const fn own_keys(self) -> &'static [CacheKey] {
        match self {
            Domain::Inventory => &[CacheKey::InventoryStats, CacheKey::InventoryValue],
            Domain::Sales => &[CacheKey::SalesStats, CacheKey::DailySales],
            Domain::Deliveries => &[CacheKey::DeliveryStats],
        }
    }

    /// Every key a change in this domain invalidates.
    pub fn keys(self) -> impl Iterator<Item = CacheKey> {
        DASHBOARD_KEYS
            .into_iter()
            .chain(self.own_keys().iter().copied())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown domain: {0}")]
pub struct ParseDomainError(pub String);

impl FromStr for Domain {
    type Err = ParseDomainError;

    /// Accepts plural and singular names, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inventory" => Ok(Domain::Inventory),
            "sales" | "sale" => Ok(Domain::Sales),
            "deliveries" | "delivery" => Ok(Domain::Deliveries),
            _ => Err(ParseDomainError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_strings(domain: Domain) -> Vec<&'static str> {
        domain.keys().map(CacheKey::as_str).collect()
    }

    #[test]
    fn test_inventory_fan_out() {
        assert_eq!(
            key_strings(Domain::Inventory),
            vec![
                "dashboard-metrics",
                "dashboard-daily-metrics",
                "dashboard-monthly-metrics",
                "inventory-stats",
                "inventory-value",
            ]
        );
    }

    #[test]
    fn test_sales_fan_out() {
        assert_eq!(
            key_strings(Domain::Sales),
            vec![
                "dashboard-metrics",
                "dashboard-daily-metrics",
                "dashboard-monthly-metrics",
                "sales-stats",
                "daily-sales",
            ]
        );
    }

    #[test]
    fn test_deliveries_fan_out() {
        assert_eq!(
            key_strings(Domain::Deliveries),
            vec![
                "dashboard-metrics",
                "dashboard-daily-metrics",
                "dashboard-monthly-metrics",
                "delivery-stats",
            ]
        );
    }

    #[test]
    fn test_every_named_key_is_reachable() {
        for key in CacheKey::ALL {
            assert!(
                Domain::ALL.iter().any(|d| d.keys().any(|k| k == key)),
                "{key} is never invalidated by any domain"
            );
        }
    }

    #[test]
    fn test_own_keys_are_disjoint() {
        for a in Domain::ALL {
            for b in Domain::ALL.into_iter().filter(|b| *b != a) {
                for key in a.own_keys() {
                    assert!(!b.own_keys().contains(key));
                }
            }
        }
    }

    #[test]
    fn test_parse_domain() {
        assert_eq!("inventory".parse::<Domain>(), Ok(Domain::Inventory));
        assert_eq!("Sales".parse::<Domain>(), Ok(Domain::Sales));
        assert_eq!("sale".parse::<Domain>(), Ok(Domain::Sales));
        assert_eq!("DELIVERY".parse::<Domain>(), Ok(Domain::Deliveries));
        assert_eq!(
            "customers".parse::<Domain>(),
            Err(ParseDomainError("customers".to_string()))
        );
    }

    #[test]
    fn test_domain_serializes_lowercase() {
        let json = serde_json::to_string(&Domain::Deliveries).unwrap();
        assert_eq!(json, "\"deliveries\"");
    }
}
