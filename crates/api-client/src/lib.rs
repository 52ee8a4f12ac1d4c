//! Folioscope Backend API Client
//!
//! Typed access to the portfolio backend's JSON surface. The backend is an
//! external collaborator: it precomputes every numeric field and this crate
//! hands them over verbatim, classified only by how a failure should degrade
//! the dashboard.
//!
//! # Overview
//!
//! - [`PortfolioApiClient`]: one method per endpoint, with failures mapped
//!   onto [`ApiError`] (session expiry vs. HTTP vs. network vs. malformed
//!   body).
//! - [`DeliveryHistoryService`]: session-lifetime memoization of per-symbol
//!   delivery history, with a monotonically increasing request token per
//!   symbol so a slow response can never overwrite a newer one.

pub mod client;
pub mod delivery;
pub mod errors;
pub mod models;

pub use client::PortfolioApiClient;
pub use delivery::{DeliveryFetcher, DeliveryHistoryService, DeliveryPeriod, DeliveryToken};
pub use errors::ApiError;
