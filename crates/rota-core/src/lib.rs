pub mod error;
pub mod extract;
pub mod format;
pub mod map;
pub mod models;
pub mod progress;

pub use error::{CoordinateError, ProgressError, RouteError};
pub use extract::extract;
pub use format::{format_distance, format_duration, format_summary};
pub use map::{Bounds, FitOptions, RouteLineStyle};
pub use models::{
    Coordinate, FieldRole, Instruction, PlaceCandidate, Route, RouteGeometry, RouteLeg,
    RouteStep, RouteSummary, TravelMode,
};
pub use progress::{ProgressRecord, ProgressTracker, StepState};
