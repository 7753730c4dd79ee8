//! Flattening a route into an ordered instruction list.

use crate::models::{Instruction, Route, RouteSummary};

/// Flatten every step of every leg, in leg-then-step order.
///
/// Totals come straight from the route rather than summing the steps, so the
/// header never drifts from what the provider reported.
pub fn extract(route: &Route) -> (Vec<Instruction>, RouteSummary) {
    let instructions = route
        .legs
        .iter()
        .flat_map(|leg| leg.steps.iter())
        .map(|step| Instruction {
            text: step.instruction.clone(),
        })
        .collect();

    let summary = RouteSummary {
        total_duration_s: route.duration_s,
        total_distance_m: route.distance_m,
    };

    (instructions, summary)
}
