//! Wire types for the Mapbox geocoding and directions responses.

use rota_core::{
    Coordinate, PlaceCandidate, Route, RouteGeometry, RouteLeg, RouteStep,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub place_name: String,
    /// `[lon, lat]`
    pub center: [f64; 2],
}

impl GeocodingResponse {
    /// Candidates in provider rank order. Features carrying an invalid
    /// coordinate are skipped.
    pub fn into_candidates(self) -> Vec<PlaceCandidate> {
        self.features
            .into_iter()
            .filter_map(|feature| match Coordinate::try_from(feature.center) {
                Ok(coordinate) => Some(PlaceCandidate {
                    label: feature.place_name,
                    coordinate,
                }),
                Err(e) => {
                    tracing::warn!(label = %feature.place_name, "skipping feature: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    /// Codes meaning "valid request, nothing routable".
    pub fn is_no_route(&self) -> bool {
        matches!(self.code.as_str(), "NoRoute" | "NoSegment")
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes.into_iter().map(Route::from).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct DirectionsRoute {
    pub geometry: Geometry,
    #[serde(default)]
    pub legs: Vec<Leg>,
    pub duration: f64,
    pub distance: f64,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    pub maneuver: Maneuver,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Deserialize)]
pub struct Maneuver {
    #[serde(default)]
    pub instruction: String,
}

impl From<DirectionsRoute> for Route {
    fn from(route: DirectionsRoute) -> Self {
        Route {
            geometry: RouteGeometry {
                kind: route.geometry.kind,
                coordinates: route.geometry.coordinates,
            },
            legs: route
                .legs
                .into_iter()
                .map(|leg| RouteLeg {
                    steps: leg
                        .steps
                        .into_iter()
                        .map(|step| RouteStep {
                            instruction: step.maneuver.instruction,
                            name: step.name,
                            distance_m: step.distance,
                            duration_s: step.duration,
                        })
                        .collect(),
                    summary: leg.summary,
                })
                .collect(),
            duration_s: route.duration,
            distance_m: route.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOCODING: &str = r#"{
        "type": "FeatureCollection",
        "query": ["praça", "da", "sé"],
        "features": [
            {"id": "poi.1", "place_name": "Praça da Sé, São Paulo - SP, Brasil", "center": [-46.6339, -23.5503], "relevance": 1},
            {"id": "poi.2", "place_name": "Broken", "center": [-246.0, 0.0]},
            {"id": "poi.3", "place_name": "Praça da Sé, Santos - SP, Brasil", "center": [-46.33, -23.93]}
        ]
    }"#;

    const DIRECTIONS: &str = r#"{
        "code": "Ok",
        "uuid": "abc",
        "waypoints": [],
        "routes": [{
            "weight_name": "auto",
            "duration": 725.4,
            "distance": 3210.7,
            "geometry": {"type": "LineString", "coordinates": [[-46.6339, -23.5503], [-46.6401, -23.5550], [-46.6558, -23.5614]]},
            "legs": [{
                "summary": "Rua Direita, Avenida Paulista",
                "duration": 725.4,
                "distance": 3210.7,
                "steps": [
                    {"name": "Rua Direita", "distance": 120.0, "duration": 30.0, "maneuver": {"type": "depart", "instruction": "Siga para o norte na Rua Direita", "location": [-46.6339, -23.5503]}},
                    {"name": "Avenida Paulista", "distance": 3090.7, "duration": 695.4, "maneuver": {"type": "turn", "modifier": "right", "instruction": "Vire à direita na Avenida Paulista"}},
                    {"name": "", "distance": 0.0, "duration": 0.0, "maneuver": {"type": "arrive", "instruction": "Você chegou ao seu destino"}}
                ]
            }]
        }]
    }"#;

    #[test]
    fn geocoding_keeps_rank_and_skips_invalid() {
        let response: GeocodingResponse = serde_json::from_str(GEOCODING).unwrap();
        let candidates = response.into_candidates();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].label, "Praça da Sé, São Paulo - SP, Brasil");
        assert_eq!(candidates[0].coordinate.lon(), -46.6339);
        assert_eq!(candidates[1].label, "Praça da Sé, Santos - SP, Brasil");
    }

    #[test]
    fn geocoding_without_features_is_empty() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(response.into_candidates().is_empty());
    }

    #[test]
    fn directions_convert_to_route() {
        let response: DirectionsResponse = serde_json::from_str(DIRECTIONS).unwrap();
        assert!(!response.is_no_route());

        let routes = response.into_routes();
        assert_eq!(routes.len(), 1);

        let route = &routes[0];
        assert_eq!(route.duration_s, 725.4);
        assert_eq!(route.distance_m, 3210.7);
        assert_eq!(route.geometry.kind, "LineString");
        assert_eq!(route.geometry.coordinates.len(), 3);
        assert_eq!(route.legs[0].steps.len(), 3);
        assert_eq!(route.legs[0].steps[1].instruction, "Vire à direita na Avenida Paulista");
        assert_eq!(route.legs[0].steps[1].name, "Avenida Paulista");
    }

    #[test]
    fn no_route_code_is_recognized() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{"code": "NoRoute", "message": "No route found"}"#).unwrap();
        assert!(response.is_no_route());
        assert!(response.into_routes().is_empty());
    }
}
