//! Viewport and line-style values handed to the map renderer.

use crate::models::Coordinate;

/// Axis-aligned lon/lat box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Smallest box containing both corners, in any order.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        // Min/max of two valid coordinates stay in range.
        let sw = [a.lon().min(b.lon()), a.lat().min(b.lat())];
        let ne = [a.lon().max(b.lon()), a.lat().max(b.lat())];
        Self {
            south_west: Coordinate::try_from(sw).unwrap_or(a),
            north_east: Coordinate::try_from(ne).unwrap_or(b),
        }
    }

    /// `[west, south, east, north]`, the GeoJSON bbox order.
    pub fn to_bbox(&self) -> [f64; 4] {
        [
            self.south_west.lon(),
            self.south_west.lat(),
            self.north_east.lon(),
            self.north_east.lat(),
        ]
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.south_west.lon()..=self.north_east.lon()).contains(&coord.lon())
            && (self.south_west.lat()..=self.north_east.lat()).contains(&coord.lat())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Screen padding around the box, in pixels
    pub padding_px: u32,
    /// Zoom ceiling so short routes are not over-magnified
    pub max_zoom: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding_px: 100,
            max_zoom: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteLineStyle {
    pub layer_id: String,
    pub width_px: f64,
    pub color: String,
}

impl Default for RouteLineStyle {
    fn default() -> Self {
        Self {
            layer_id: "route".to_string(),
            width_px: 6.0,
            color: "#3b82f6".to_string(),
        }
    }
}
