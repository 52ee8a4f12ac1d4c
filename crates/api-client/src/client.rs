//! HTTP client for the portfolio backend.

use std::time::Duration;

use chrono::NaiveDate;
use log::warn;
use reqwest::{Client, StatusCode};

use crate::delivery::DeliveryPeriod;
use crate::errors::ApiError;
use crate::models::{
    DeliveryPoint, DeliveryResponse, Holding, HoldingsResponse, MarginsResponse,
    RealisedPnlResponse, SectorAllocationResponse,
};

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Date format the backend uses for delivery history rows.
const DELIVERY_DATE_FORMAT: &str = "%d-%b-%Y";

/// Typed client over the backend JSON surface.
///
/// Every fetch classifies failures the same way: HTTP 401/403 become
/// [`ApiError::SessionExpired`], other non-success statuses become
/// [`ApiError::Http`], undecodable bodies become
/// [`ApiError::MalformedResponse`]. Callers decide whether a failure is
/// fatal for the view or a widget-local degrade.
pub struct PortfolioApiClient {
    client: Client,
    base_url: String,
}

impl PortfolioApiClient {
    /// Creates a client against the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a GET and classifies the status line before the body is read.
    async fn get_checked(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::SessionExpired),
            status if !status.is_success() => Err(ApiError::Http {
                status: status.as_u16(),
            }),
            _ => Ok(response),
        }
    }

    /// Fetches the authoritative holdings list.
    ///
    /// A payload without the expected `data` array is malformed and fatal
    /// for the holdings view.
    pub async fn get_holdings(&self) -> Result<Vec<Holding>, ApiError> {
        let response = self.get_checked("/portfolio/holdings").await?;
        let body: HoldingsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        Ok(body.data)
    }

    /// Legacy server-side sector allocation rankings.
    pub async fn get_sector_allocation(&self) -> Result<SectorAllocationResponse, ApiError> {
        let response = self.get_checked("/portfolio/sector-allocation").await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Delivery-volume history for one symbol over the given period,
    /// ordered oldest-first.
    pub async fn get_delivery_data(
        &self,
        symbol: &str,
        period: DeliveryPeriod,
    ) -> Result<Vec<DeliveryPoint>, ApiError> {
        let path = format!(
            "/portfolio/delivery-data?symbol={}&period={}",
            urlencoding::encode(symbol),
            period.query_value()
        );
        let response = self.get_checked(&path).await?;
        let body: DeliveryResponse = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        let mut points = body.data;
        sort_chronologically(&mut points);
        Ok(points)
    }

    /// Realised P&L KPI figures.
    pub async fn get_realised_pnl(&self) -> Result<RealisedPnlResponse, ApiError> {
        let response = self.get_checked("/portfolio/realised-pnl").await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Net margin available KPI figure.
    pub async fn get_margins(&self) -> Result<MarginsResponse, ApiError> {
        let response = self.get_checked("/portfolio/margins").await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Probes the session. `Ok(())` means the session is active; any other
    /// outcome means the caller should redirect to re-authentication.
    pub async fn session_active(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(self.url("/session/active"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::SessionExpired)
        }
    }

    /// Ends the broker session. Failures are logged and swallowed: logout
    /// is best-effort and never blocks navigation.
    pub async fn logout(&self) {
        let result = self
            .client
            .post(self.url("/auth/zerodha/logout"))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => warn!("logout returned HTTP {}", response.status()),
            Err(err) => warn!("logout request failed: {err}"),
        }
    }
}

/// Sorts delivery rows oldest-first by their backend date string.
///
/// If any row carries an unexpected date format the original order is kept,
/// matching how the backend itself falls back.
fn sort_chronologically(points: &mut [DeliveryPoint]) {
    let all_parse = points
        .iter()
        .all(|p| NaiveDate::parse_from_str(&p.date, DELIVERY_DATE_FORMAT).is_ok());
    if !all_parse {
        return;
    }
    points.sort_by_key(|p| {
        NaiveDate::parse_from_str(&p.date, DELIVERY_DATE_FORMAT).unwrap_or_default()
    });
}
