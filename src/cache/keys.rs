//! Named Cache Keys
//!
//! The fixed table of keys shared by the aggregation handlers that fill the
//! cache and the invalidation paths that empty it. Both sides go through
//! [`CacheKey`] so a typo cannot leave a producer and its invalidator on
//! different strings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// == Cache Key ==
/// Logical cache entries produced by the dashboard aggregation handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    DashboardMetrics,
    DashboardDaily,
    DashboardMonthly,
    InventoryStats,
    InventoryValue,
    SalesStats,
    DailySales,
    DeliveryStats,
}

impl CacheKey {
    /// Every named key, in declaration order.
    pub const ALL: [CacheKey; 8] = [
        CacheKey::DashboardMetrics,
        CacheKey::DashboardDaily,
        CacheKey::DashboardMonthly,
        CacheKey::InventoryStats,
        CacheKey::InventoryValue,
        CacheKey::SalesStats,
        CacheKey::DailySales,
        CacheKey::DeliveryStats,
    ];

    /// The string the entry is stored under.
    pub const fn as_str(self) -> &'static str {
        match self {
            CacheKey::DashboardMetrics => "dashboard-metrics",
            CacheKey::DashboardDaily => "dashboard-daily-metrics",
            CacheKey::DashboardMonthly => "dashboard-monthly-metrics",
            CacheKey::InventoryStats => "inventory-stats",
            CacheKey::InventoryValue => "inventory-value",
            CacheKey::SalesStats => "sales-stats",
            CacheKey::DailySales => "daily-sales",
            CacheKey::DeliveryStats => "delivery-stats",
        }
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the named keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown cache key: {0}")]
pub struct ParseCacheKeyError(pub String);

impl FromStr for CacheKey {
    type Err = ParseCacheKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CacheKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseCacheKeyError(s.to_string()))
    }
}
