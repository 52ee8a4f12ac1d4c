//! Session-lifetime delivery-history cache with stale-response protection.
//!
//! The key space is small and bounded (held symbols × three periods), so
//! entries are never evicted. Each symbol carries a monotonically
//! increasing request token; a response whose token is no longer current
//! lost a race against a newer request and is discarded instead of
//! rendered.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use crate::client::PortfolioApiClient;
use crate::errors::ApiError;
use crate::models::DeliveryPoint;

/// Lookback window for delivery-history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryPeriod {
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl DeliveryPeriod {
    /// Query-string value understood by the backend.
    pub fn query_value(&self) -> &'static str {
        match self {
            DeliveryPeriod::ThreeMonths => "3m",
            DeliveryPeriod::SixMonths => "6m",
            DeliveryPeriod::OneYear => "1y",
        }
    }

    /// Calendar-day span of the window.
    pub fn days(&self) -> u32 {
        match self {
            DeliveryPeriod::ThreeMonths => 91,
            DeliveryPeriod::SixMonths => 182,
            DeliveryPeriod::OneYear => 365,
        }
    }
}

/// Request token identifying one delivery fetch for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryToken(u64);

/// Transport seam for delivery history, mockable in tests.
#[async_trait]
pub trait DeliveryFetcher: Send + Sync {
    async fn fetch_delivery(
        &self,
        symbol: &str,
        period: DeliveryPeriod,
    ) -> Result<Vec<DeliveryPoint>, ApiError>;
}

#[async_trait]
impl DeliveryFetcher for PortfolioApiClient {
    async fn fetch_delivery(
        &self,
        symbol: &str,
        period: DeliveryPeriod,
    ) -> Result<Vec<DeliveryPoint>, ApiError> {
        self.get_delivery_data(symbol, period).await
    }
}

/// Memoizes delivery history per (symbol, period) for the session and
/// drops responses that lost a race against a newer request for the same
/// symbol.
pub struct DeliveryHistoryService<F: DeliveryFetcher> {
    fetcher: F,
    cache: DashMap<(String, DeliveryPeriod), Vec<DeliveryPoint>>,
    generations: DashMap<String, AtomicU64>,
}

impl<F: DeliveryFetcher> DeliveryHistoryService<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: DashMap::new(),
            generations: DashMap::new(),
        }
    }

    /// Starts a new request for a symbol, invalidating every earlier token
    /// issued for it.
    pub fn begin_request(&self, symbol: &str) -> DeliveryToken {
        let entry = self
            .generations
            .entry(symbol.to_string())
            .or_insert_with(|| AtomicU64::new(0));
        DeliveryToken(entry.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn is_current(&self, symbol: &str, token: DeliveryToken) -> bool {
        self.generations
            .get(symbol)
            .map(|gen| gen.load(Ordering::SeqCst) == token.0)
            .unwrap_or(false)
    }

    /// Loads delivery history for a symbol and period.
    ///
    /// Returns `Ok(None)` when the token went stale, meaning a newer
    /// request for the same symbol superseded this one and the caller must
    /// not render the result. Cached periods resolve without a fetch.
    pub async fn load(
        &self,
        symbol: &str,
        period: DeliveryPeriod,
        token: DeliveryToken,
    ) -> Result<Option<Vec<DeliveryPoint>>, ApiError> {
        if !self.is_current(symbol, token) {
            debug!("delivery request for {symbol} superseded before fetch");
            return Ok(None);
        }

        let key = (symbol.to_string(), period);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(Some(hit.clone()));
        }

        let points = self.fetcher.fetch_delivery(symbol, period).await?;

        if !self.is_current(symbol, token) {
            debug!("delivery response for {symbol} went stale in flight");
            return Ok(None);
        }

        self.cache.insert(key, points.clone());
        Ok(Some(points))
    }
}
