//! Seams to the external geocoding and directions services.

use anyhow::Result;
use async_trait::async_trait;
use rota_core::{Coordinate, PlaceCandidate, Route, TravelMode};

/// A forward geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeQuery {
    pub text: String,
    pub limit: u8,
    /// Ask for labels in the configured language (suggestions only)
    pub localized: bool,
}

impl GeocodeQuery {
    /// Single best-match lookup used to resolve a confirmed address.
    pub fn best_match(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: 1,
            localized: false,
        }
    }

    pub fn suggestions(text: impl Into<String>, limit: u8) -> Self {
        Self {
            text: text.into(),
            limit,
            localized: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TravelMode,
}

/// Free text to ranked place candidates. An empty list is a valid answer.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<Vec<PlaceCandidate>>;
}

/// Candidate routes between two points, best first. An empty list is a valid
/// answer.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>>;
}
