//! Address suggestions while typing, and best-match resolution.
//!
//! Each field carries a generation number that is bumped whenever its text
//! changes or a candidate is picked. A suggestion response only lands if its
//! generation still matches, so a slow response for an early keystroke can
//! never overwrite the list for a later one.

use std::sync::Arc;

use anyhow::Result;
use rota_core::{Coordinate, FieldRole, PlaceCandidate, RouteError};

use crate::provider::{GeocodeQuery, GeocodingProvider};

/// Queries shorter than this never reach the provider.
pub const MIN_QUERY_CHARS: usize = 3;
pub const DEFAULT_SUGGESTION_LIMIT: u8 = 5;

#[derive(Debug, Default)]
struct FieldState {
    text: String,
    suggestions: Vec<PlaceCandidate>,
    generation: u64,
}

/// An issued suggestion lookup. Run it without holding the resolver, then hand
/// the response back through [`AddressResolver::apply`].
pub struct SuggestionTicket {
    role: FieldRole,
    generation: u64,
    query: Option<GeocodeQuery>,
    geocoder: Arc<dyn GeocodingProvider>,
}

pub struct SuggestionResponse {
    role: FieldRole,
    generation: u64,
    outcome: Option<Result<Vec<PlaceCandidate>>>,
}

impl SuggestionTicket {
    pub fn role(&self) -> FieldRole {
        self.role
    }

    /// True when the text was too short and no lookup will be made.
    pub fn is_skipped(&self) -> bool {
        self.query.is_none()
    }

    pub async fn run(self) -> SuggestionResponse {
        let outcome = match &self.query {
            Some(query) => {
                tracing::debug!(role = %self.role, text = %query.text, "suggestion lookup");
                Some(self.geocoder.geocode(query).await)
            }
            None => None,
        };
        SuggestionResponse {
            role: self.role,
            generation: self.generation,
            outcome,
        }
    }
}

/// Holds the text and suggestion list of the origin and destination fields.
pub struct AddressResolver {
    geocoder: Arc<dyn GeocodingProvider>,
    suggestion_limit: u8,
    origin: FieldState,
    destination: FieldState,
}

impl AddressResolver {
    pub fn new(geocoder: Arc<dyn GeocodingProvider>) -> Self {
        Self {
            geocoder,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            origin: FieldState::default(),
            destination: FieldState::default(),
        }
    }

    pub fn with_suggestion_limit(mut self, limit: u8) -> Self {
        self.suggestion_limit = limit.max(1);
        self
    }

    fn field(&self, role: FieldRole) -> &FieldState {
        match role {
            FieldRole::Origin => &self.origin,
            FieldRole::Destination => &self.destination,
        }
    }

    fn field_mut(&mut self, role: FieldRole) -> &mut FieldState {
        match role {
            FieldRole::Origin => &mut self.origin,
            FieldRole::Destination => &mut self.destination,
        }
    }

    pub fn text(&self, role: FieldRole) -> &str {
        &self.field(role).text
    }

    pub fn suggestions(&self, role: FieldRole) -> &[PlaceCandidate] {
        &self.field(role).suggestions
    }

    /// Record new field text and issue a lookup for it. Short text clears the
    /// list immediately and yields a skipped ticket.
    pub fn begin_suggest(&mut self, text: &str, role: FieldRole) -> SuggestionTicket {
        let limit = self.suggestion_limit;
        let geocoder = Arc::clone(&self.geocoder);
        let field = self.field_mut(role);
        field.text = text.to_string();
        field.generation += 1;

        let query = if text.chars().count() < MIN_QUERY_CHARS {
            field.suggestions.clear();
            None
        } else {
            Some(GeocodeQuery::suggestions(text, limit))
        };

        SuggestionTicket {
            role,
            generation: field.generation,
            query,
            geocoder,
        }
    }

    /// Install a finished lookup if it is still the latest for its field.
    /// Stale responses and provider failures leave the list unchanged.
    pub fn apply(&mut self, response: SuggestionResponse) -> &[PlaceCandidate] {
        let role = response.role;
        let field = self.field_mut(role);

        if response.generation != field.generation {
            tracing::debug!(
                %role,
                stale = response.generation,
                latest = field.generation,
                "dropping superseded suggestions"
            );
            return &field.suggestions;
        }

        match response.outcome {
            Some(Ok(candidates)) => field.suggestions = candidates,
            Some(Err(e)) => {
                tracing::warn!(%role, "suggestion lookup failed: {:#}", e);
            }
            None => field.suggestions.clear(),
        }
        &field.suggestions
    }

    /// Update the field text and return its refreshed suggestion list.
    pub async fn suggest(&mut self, text: &str, role: FieldRole) -> Vec<PlaceCandidate> {
        let ticket = self.begin_suggest(text, role);
        let response = ticket.run().await;
        self.apply(response).to_vec()
    }

    /// Commit a chosen candidate as the field text and hide its suggestions.
    pub fn select(&mut self, candidate: &PlaceCandidate, role: FieldRole) {
        let field = self.field_mut(role);
        field.text = candidate.label.clone();
        field.suggestions.clear();
        field.generation += 1;
    }

    /// Pick the `index`-th current suggestion for `role`.
    pub fn select_index(&mut self, index: usize, role: FieldRole) -> Option<PlaceCandidate> {
        let candidate = self.field(role).suggestions.get(index).cloned()?;
        self.select(&candidate, role);
        Some(candidate)
    }

    pub async fn resolve(&self, address: &str) -> Result<Coordinate, RouteError> {
        resolve_address(self.geocoder.as_ref(), address).await
    }
}

/// Single best-match lookup for a confirmed address.
pub async fn resolve_address(
    geocoder: &dyn GeocodingProvider,
    address: &str,
) -> Result<Coordinate, RouteError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(RouteError::InputIncomplete);
    }

    let candidates = geocoder
        .geocode(&GeocodeQuery::best_match(address))
        .await
        .map_err(|e| {
            tracing::error!(address, "geocoding failed: {:#}", e);
            RouteError::ProviderUnavailable(format!("{:#}", e))
        })?;

    candidates
        .into_iter()
        .next()
        .map(|candidate| candidate.coordinate)
        .ok_or_else(|| RouteError::AddressNotFound {
            query: address.to_string(),
        })
}
