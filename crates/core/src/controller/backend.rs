//! Backend seam for the load-time fetches.

use async_trait::async_trait;

use folioscope_api_client::models::{Holding, MarginsResponse, RealisedPnlResponse};
use folioscope_api_client::{ApiError, PortfolioApiClient};

/// The slice of the backend surface the controller needs at load time.
///
/// Each stream fails in isolation: holdings failure is fatal for the view,
/// the KPI extras degrade silently.
#[async_trait]
pub trait PortfolioBackend: Send + Sync {
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, ApiError>;
    async fn fetch_realised_pnl(&self) -> Result<RealisedPnlResponse, ApiError>;
    async fn fetch_margins(&self) -> Result<MarginsResponse, ApiError>;
}

#[async_trait]
impl PortfolioBackend for PortfolioApiClient {
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, ApiError> {
        self.get_holdings().await
    }

    async fn fetch_realised_pnl(&self) -> Result<RealisedPnlResponse, ApiError> {
        self.get_realised_pnl().await
    }

    async fn fetch_margins(&self) -> Result<MarginsResponse, ApiError> {
        self.get_margins().await
    }
}
