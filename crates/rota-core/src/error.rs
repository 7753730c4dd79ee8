//! Error taxonomy for route acquisition and progress tracking.

use thiserror::Error;

use crate::models::TravelMode;

/// Failures of the route-acquisition pipeline. All of them are recoverable:
/// the previously installed route and progress stay intact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("origin and destination are both required")]
    InputIncomplete,

    #[error("address not found: {query}")]
    AddressNotFound { query: String },

    #[error("no {mode} route found between the given places")]
    RouteNotFound { mode: TravelMode },

    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl RouteError {
    /// Text suitable for showing to the person using the app.
    pub fn user_message(&self) -> String {
        match self {
            RouteError::InputIncomplete => {
                "Please fill in both origin and destination.".to_string()
            }
            RouteError::AddressNotFound { query } => {
                format!("Could not find \"{}\". Check the address.", query)
            }
            RouteError::RouteNotFound { mode } => {
                format!("No {} route was found between these places.", mode)
            }
            RouteError::ProviderUnavailable(_) => {
                "The routing service is unavailable right now. Please try again.".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate is not finite: ({lon}, {lat})")]
    NotFinite { lon: f64, lat: f64 },

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("step index {index} out of range for {len} instructions")]
    IndexOutOfRange { index: usize, len: usize },
}
