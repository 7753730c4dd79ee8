//! Text rendering of suggestions and the instruction card.

use rota_core::{FieldRole, PlaceCandidate, StepState};
use rota_sdk::ActiveRoute;

pub const ARRIVED: &str = "🎉 You have reached your destination!";

pub fn suggestions(role: FieldRole, candidates: &[PlaceCandidate]) -> String {
    if candidates.is_empty() {
        return format!("no {} suggestions", role);
    }
    let mut out = format!("{} suggestions:", role);
    for (i, candidate) in candidates.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, candidate.label));
    }
    out
}

fn checkbox(state: Option<StepState>) -> &'static str {
    match state {
        Some(StepState::Done) => "[x]",
        _ => "[ ]",
    }
}

/// Header, the current step, and the arrival banner once every step is done.
pub fn route_card(active: &ActiveRoute) -> String {
    let mut out = format!(
        "Instructions ({}) {} • {} steps",
        active.mode(),
        active.header(),
        active.step_count()
    );

    if let (Some(index), Some(instruction)) =
        (active.current_index(), active.current_instruction())
    {
        out.push_str(&format!(
            "\nnext: {} {}. {}",
            checkbox(active.tracker().state(index)),
            index + 1,
            instruction.text
        ));
    }

    if active.is_completed() {
        out.push('\n');
        out.push_str(ARRIVED);
    }
    out
}

pub fn step_list(active: &ActiveRoute) -> String {
    let current = active.current_index();
    active
        .instructions()
        .iter()
        .enumerate()
        .map(|(i, instruction)| {
            let marker = if Some(i) == current { ">" } else { " " };
            format!(
                "{} {} {}. {}",
                marker,
                checkbox(active.tracker().state(i)),
                i + 1,
                instruction.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
