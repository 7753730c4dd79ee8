//! Mapbox HTTP client.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use rota_core::{PlaceCandidate, Route};
use rota_sdk::{DirectionsProvider, DirectionsRequest, GeocodeQuery, GeocodingProvider};

use crate::config::MapboxConfig;
use crate::types::{DirectionsResponse, GeocodingResponse};

/// Geocoding and directions over the Mapbox REST API.
pub struct MapboxClient {
    client: Client,
    config: MapboxConfig,
}

impl MapboxClient {
    pub fn new(config: MapboxConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MapboxConfig {
        &self.config
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .with_context(|| format!("Invalid base URL {}", self.config.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL {} cannot carry a path", self.config.base_url))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("access_token", &self.config.access_token);
        Ok(url)
    }

    pub fn geocoding_url(&self, query: &GeocodeQuery) -> Result<Url> {
        let mut url = self.endpoint(&["geocoding", "v5", "mapbox.places"])?;
        // Component-encode the text: a bare `;` would start a batch query.
        let path = format!("{}/{}.json", url.path(), urlencoding::encode(&query.text));
        url.set_path(&path);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("country", &self.config.country);
            if query.localized {
                pairs.append_pair("language", &self.config.language);
            }
            pairs.append_pair("limit", &query.limit.to_string());
        }
        Ok(url)
    }

    pub fn directions_url(&self, request: &DirectionsRequest) -> Result<Url> {
        let waypoints = format!("{};{}", request.origin, request.destination);
        let mut url = self.endpoint(&[
            "directions",
            "v5",
            "mapbox",
            request.mode.as_str(),
            &waypoints,
        ])?;
        url.query_pairs_mut()
            .append_pair("geometries", "geojson")
            .append_pair("steps", "true")
            .append_pair("banner_instructions", "true")
            .append_pair("voice_instructions", "true")
            .append_pair("language", &self.config.language);
        Ok(url)
    }
}

#[async_trait]
impl GeocodingProvider for MapboxClient {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<Vec<PlaceCandidate>> {
        let url = self.geocoding_url(query)?;
        tracing::debug!(path = url.path(), limit = query.limit, "geocoding request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send geocoding request for {}", query.text))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Geocoding request failed: {} {}", status, body));
        }

        let payload = response
            .json::<GeocodingResponse>()
            .await
            .context("Failed to parse geocoding response")?;

        Ok(payload.into_candidates())
    }
}

#[async_trait]
impl DirectionsProvider for MapboxClient {
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>> {
        let url = self.directions_url(request)?;
        tracing::debug!(path = url.path(), "directions request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send directions request")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read directions response")?;

        match serde_json::from_str::<DirectionsResponse>(&text) {
            Ok(payload) if payload.is_no_route() => {
                tracing::debug!(code = %payload.code, "no route between waypoints");
                Ok(Vec::new())
            }
            Ok(payload) if status.is_success() => Ok(payload.into_routes()),
            Ok(payload) => Err(anyhow!(
                "Directions request failed: {} {}",
                status,
                payload.message.unwrap_or(payload.code)
            )),
            Err(e) if status.is_success() => {
                Err(e).context("Failed to parse directions response")
            }
            Err(_) => Err(anyhow!("Directions request failed: {} {}", status, text)),
        }
    }
}
