//! Address pair to best route, as one fallible sequence.

use std::sync::Arc;

use rota_core::{Coordinate, Route, RouteError, TravelMode};

use crate::provider::{DirectionsProvider, DirectionsRequest, GeocodingProvider};
use crate::resolver::resolve_address;

/// The outcome of a successful fetch, before instructions are extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedRoute {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TravelMode,
    pub route: Route,
}

pub struct RouteFetcher {
    geocoder: Arc<dyn GeocodingProvider>,
    directions: Arc<dyn DirectionsProvider>,
}

impl RouteFetcher {
    pub fn new(
        geocoder: Arc<dyn GeocodingProvider>,
        directions: Arc<dyn DirectionsProvider>,
    ) -> Self {
        Self {
            geocoder,
            directions,
        }
    }

    /// Resolve both addresses, then ask for a route with full step detail.
    /// The first failing stage aborts the whole fetch.
    pub async fn compute_route(
        &self,
        origin_text: &str,
        destination_text: &str,
        mode: TravelMode,
    ) -> Result<FetchedRoute, RouteError> {
        if origin_text.trim().is_empty() || destination_text.trim().is_empty() {
            return Err(RouteError::InputIncomplete);
        }

        let origin = resolve_address(self.geocoder.as_ref(), origin_text).await?;
        let destination = resolve_address(self.geocoder.as_ref(), destination_text).await?;

        let request = DirectionsRequest {
            origin,
            destination,
            mode,
        };
        tracing::debug!(%origin, %destination, %mode, "requesting directions");

        let routes = self.directions.directions(&request).await.map_err(|e| {
            tracing::error!(%mode, "directions request failed: {:#}", e);
            RouteError::ProviderUnavailable(format!("{:#}", e))
        })?;

        let route = routes
            .into_iter()
            .next()
            .ok_or(RouteError::RouteNotFound { mode })?;

        Ok(FetchedRoute {
            origin,
            destination,
            mode,
            route,
        })
    }
}
