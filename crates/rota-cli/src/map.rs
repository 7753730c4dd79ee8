//! Map presenter that keeps the latest route line and viewport as GeoJSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rota_core::{Bounds, FitOptions, RouteGeometry, RouteLineStyle};
use rota_sdk::MapPresenter;
use serde_json::{json, Value};

#[derive(Debug, Default)]
pub struct GeoJsonMap {
    output: Option<PathBuf>,
    line: Option<(RouteGeometry, RouteLineStyle)>,
    viewport: Option<(Bounds, FitOptions)>,
}

impl GeoJsonMap {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    pub fn line(&self) -> Option<&RouteGeometry> {
        self.line.as_ref().map(|(geometry, _)| geometry)
    }

    pub fn viewport(&self) -> Option<(Bounds, FitOptions)> {
        self.viewport
    }

    /// FeatureCollection with the route line and the fitted box as `bbox`.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .line
            .iter()
            .map(|(geometry, style)| {
                json!({
                    "type": "Feature",
                    "id": style.layer_id,
                    "geometry": geometry,
                    "properties": {
                        "line-width": style.width_px,
                        "line-color": style.color,
                    }
                })
            })
            .collect();

        let mut collection = json!({
            "type": "FeatureCollection",
            "features": features,
        });
        if let Some((bounds, options)) = self.viewport {
            collection["bbox"] = json!(bounds.to_bbox());
            collection["properties"] = json!({
                "padding": options.padding_px,
                "maxZoom": options.max_zoom,
            });
        }
        collection
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.output else {
            return Ok(());
        };
        let body = serde_json::to_string_pretty(&self.to_geojson())?;
        fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))
    }

    fn flush_logged(&self) {
        if let Err(e) = self.flush() {
            tracing::error!("map export failed: {:#}", e);
        }
    }
}

impl MapPresenter for GeoJsonMap {
    fn draw_route(&mut self, geometry: &RouteGeometry, style: &RouteLineStyle) {
        tracing::debug!(points = geometry.coordinates.len(), "drawing route line");
        self.line = Some((geometry.clone(), style.clone()));
        self.flush_logged();
    }

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) {
        tracing::debug!(bbox = ?bounds.to_bbox(), max_zoom = options.max_zoom, "fitting viewport");
        self.viewport = Some((bounds, options));
        self.flush_logged();
    }
}
