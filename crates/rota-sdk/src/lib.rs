//! Rota SDK - route acquisition and turn-by-turn progress
//!
//! Wires the geocoding and directions providers into a single fetch pipeline
//! and keeps the active route with its step completion state.

pub mod fetcher;
pub mod identity;
pub mod presenter;
pub mod provider;
pub mod resolver;
pub mod session;

pub use fetcher::{FetchedRoute, RouteFetcher};
pub use identity::{logout, IdentityProvider};
pub use presenter::{MapPresenter, NoopPresenter};
pub use provider::{DirectionsProvider, DirectionsRequest, GeocodeQuery, GeocodingProvider};
pub use resolver::{
    resolve_address, AddressResolver, SuggestionResponse, SuggestionTicket, MIN_QUERY_CHARS,
};
pub use session::{ActiveRoute, RouteSession};
