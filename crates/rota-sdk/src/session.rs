//! The active route and its step progress.
//!
//! A successful fetch builds a complete [`ActiveRoute`] first and only then
//! swaps it in, so instructions, summary and progress always belong to the
//! same route. A failed fetch leaves the previous one untouched.

use rota_core::{
    extract, format_summary, Bounds, Coordinate, FitOptions, Instruction, ProgressError,
    ProgressTracker, RouteError, RouteGeometry, RouteLineStyle, RouteSummary, StepState,
    TravelMode,
};

use crate::fetcher::{FetchedRoute, RouteFetcher};
use crate::presenter::MapPresenter;

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRoute {
    generation: u64,
    origin: Coordinate,
    destination: Coordinate,
    mode: TravelMode,
    geometry: RouteGeometry,
    summary: RouteSummary,
    tracker: ProgressTracker,
}

impl ActiveRoute {
    fn install(generation: u64, fetched: FetchedRoute) -> Self {
        let (instructions, summary) = extract(&fetched.route);
        Self {
            generation,
            origin: fetched.origin,
            destination: fetched.destination,
            mode: fetched.mode,
            geometry: fetched.route.geometry,
            summary,
            tracker: ProgressTracker::new(instructions),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn geometry(&self) -> &RouteGeometry {
        &self.geometry
    }

    pub fn summary(&self) -> RouteSummary {
        self.summary
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.origin, self.destination)
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.tracker.instructions()
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn step_count(&self) -> usize {
        self.tracker.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.tracker.current_index()
    }

    pub fn current_instruction(&self) -> Option<&Instruction> {
        self.tracker.current_instruction()
    }

    pub fn is_completed(&self) -> bool {
        self.tracker.is_completed()
    }

    /// `"<duration> • <distance>"`
    pub fn header(&self) -> String {
        format_summary(self.summary.total_duration_s, self.summary.total_distance_m)
    }
}

pub struct RouteSession {
    fetcher: RouteFetcher,
    active: Option<ActiveRoute>,
    generation: u64,
}

impl RouteSession {
    pub fn new(fetcher: RouteFetcher) -> Self {
        Self {
            fetcher,
            active: None,
            generation: 0,
        }
    }

    pub fn active(&self) -> Option<&ActiveRoute> {
        self.active.as_ref()
    }

    /// Fetch a route and, only if every stage succeeds, replace the active
    /// route, reset progress and hand the line and viewport to `map`.
    pub async fn compute_route(
        &mut self,
        origin_text: &str,
        destination_text: &str,
        mode: TravelMode,
        map: &mut dyn MapPresenter,
    ) -> Result<&ActiveRoute, RouteError> {
        let fetched = self
            .fetcher
            .compute_route(origin_text, destination_text, mode)
            .await
            .inspect_err(|e| tracing::warn!("route not installed: {}", e))?;

        self.generation += 1;
        let active = ActiveRoute::install(self.generation, fetched);

        map.draw_route(&active.geometry, &RouteLineStyle::default());
        map.fit_bounds(active.bounds(), FitOptions::default());

        tracing::info!(
            generation = active.generation,
            mode = %active.mode,
            steps = active.step_count(),
            summary = %active.header(),
            "route installed"
        );

        Ok(self.active.insert(active))
    }

    /// Flip completion of step `index` on the active route.
    pub fn toggle(&mut self, index: usize) -> Result<StepState, ProgressError> {
        match self.active.as_mut() {
            Some(active) => active.tracker.toggle(index),
            None => Err(ProgressError::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// Flip whichever step is currently shown as next.
    pub fn toggle_current(&mut self) -> Option<StepState> {
        let active = self.active.as_mut()?;
        let index = active.tracker.current_index()?;
        active.tracker.toggle(index).ok()
    }

    pub fn reset_progress(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.tracker.reset();
        }
    }
}
