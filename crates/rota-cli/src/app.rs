//! Command dispatch over the resolver and the route session.

use std::sync::Arc;

use rota_core::TravelMode;
use rota_sdk::{logout, AddressResolver, IdentityProvider, RouteSession};

use crate::command::{Command, HELP};
use crate::map::GeoJsonMap;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App {
    resolver: AddressResolver,
    session: RouteSession,
    map: GeoJsonMap,
    mode: TravelMode,
    identity: Arc<dyn IdentityProvider>,
}

impl App {
    pub fn new(
        resolver: AddressResolver,
        session: RouteSession,
        map: GeoJsonMap,
        mode: TravelMode,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            resolver,
            session,
            map,
            mode,
            identity,
        }
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn map(&self) -> &GeoJsonMap {
        &self.map
    }

    pub fn session(&self) -> &RouteSession {
        &self.session
    }

    /// Run one command, returning what to print and whether to keep going.
    pub async fn handle(&mut self, command: Command) -> (Flow, String) {
        let output = match command {
            Command::Type { role, text } => {
                let candidates = self.resolver.suggest(&text, role).await;
                render::suggestions(role, &candidates)
            }
            Command::Pick { role, index } => match self.resolver.select_index(index, role) {
                Some(candidate) => format!("{}: {}", role, candidate.label),
                None => format!("no {} suggestion {}", role, index + 1),
            },
            Command::Mode(mode) => {
                self.mode = mode;
                format!("mode: {}", mode)
            }
            Command::Go => self.compute_route().await,
            Command::Steps => match self.session.active() {
                Some(active) => render::step_list(active),
                None => "no route yet (use 'go')".to_string(),
            },
            Command::Done(index) => match self.session.toggle(index) {
                Ok(_) => self.card(),
                Err(e) => e.to_string(),
            },
            Command::Next => match self.session.toggle_current() {
                Some(_) => self.card(),
                None => "no route yet (use 'go')".to_string(),
            },
            Command::Logout => {
                if logout(self.identity.as_ref()).await {
                    return (Flow::Exit, "signed out".to_string());
                }
                "sign-out failed, still signed in".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return (Flow::Exit, String::new()),
        };
        (Flow::Continue, output)
    }

    async fn compute_route(&mut self) -> String {
        let origin = self.resolver.text(rota_core::FieldRole::Origin).to_string();
        let destination = self
            .resolver
            .text(rota_core::FieldRole::Destination)
            .to_string();

        match self
            .session
            .compute_route(&origin, &destination, self.mode, &mut self.map)
            .await
        {
            Ok(active) => render::route_card(active),
            Err(e) => e.user_message(),
        }
    }

    fn card(&self) -> String {
        self.session
            .active()
            .map(render::route_card)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use rota_core::{
        Coordinate, FieldRole, PlaceCandidate, Route, RouteGeometry, RouteLeg, RouteStep,
    };
    use rota_sdk::{
        DirectionsProvider, DirectionsRequest, GeocodeQuery, GeocodingProvider, RouteFetcher,
    };

    struct Places;

    #[async_trait]
    impl GeocodingProvider for Places {
        async fn geocode(&self, query: &GeocodeQuery) -> Result<Vec<PlaceCandidate>> {
            let coordinate = match query.text.as_str() {
                t if t.starts_with("Praça") => Coordinate::new(-46.6333, -23.5505)?,
                t if t.starts_with("Avenida") => Coordinate::new(-46.6558, -23.5614)?,
                _ => return Ok(Vec::new()),
            };
            Ok(vec![PlaceCandidate {
                label: format!("{}, São Paulo", query.text),
                coordinate,
            }])
        }
    }

    struct TwoSteps;

    #[async_trait]
    impl DirectionsProvider for TwoSteps {
        async fn directions(&self, _request: &DirectionsRequest) -> Result<Vec<Route>> {
            Ok(vec![Route {
                geometry: RouteGeometry::line_string(vec![[-46.6333, -23.5505], [-46.6558, -23.5614]]),
                legs: vec![RouteLeg {
                    steps: ["Siga em frente", "Você chegou"]
                        .iter()
                        .map(|text| RouteStep {
                            instruction: text.to_string(),
                            name: String::new(),
                            distance_m: 0.0,
                            duration_s: 0.0,
                        })
                        .collect(),
                    summary: String::new(),
                }],
                duration_s: 90.0,
                distance_m: 500.0,
            }])
        }
    }

    struct Identity {
        fail: bool,
    }

    #[async_trait]
    impl IdentityProvider for Identity {
        async fn sign_out(&self) -> Result<()> {
            if self.fail {
                return Err(anyhow!("token revoked twice"));
            }
            Ok(())
        }
    }

    fn app(fail_sign_out: bool) -> App {
        let places = Arc::new(Places);
        App::new(
            AddressResolver::new(places.clone()),
            RouteSession::new(RouteFetcher::new(places, Arc::new(TwoSteps))),
            GeoJsonMap::new(None),
            TravelMode::Walking,
            Arc::new(Identity { fail: fail_sign_out }),
        )
    }

    #[tokio::test]
    async fn full_walkthrough() {
        let mut app = app(false);

        let (_, out) = app.handle(Command::Go).await;
        assert_eq!(out, "Please fill in both origin and destination.");

        let (_, out) = app
            .handle(Command::Type {
                role: FieldRole::Origin,
                text: "Praça da Sé".into(),
            })
            .await;
        assert!(out.contains("1. Praça da Sé, São Paulo"));

        app.handle(Command::Pick {
            role: FieldRole::Origin,
            index: 0,
        })
        .await;
        app.handle(Command::Type {
            role: FieldRole::Destination,
            text: "Avenida Paulista".into(),
        })
        .await;

        let (flow, out) = app.handle(Command::Go).await;
        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("1 min • 500 m • 2 steps"), "{out}");
        assert!(out.contains("next: [ ] 1. Siga em frente"), "{out}");
        assert!(app.map().line().is_some());

        let (_, out) = app.handle(Command::Next).await;
        assert!(out.contains("next: [ ] 2. Você chegou"), "{out}");

        let (_, out) = app.handle(Command::Done(1)).await;
        assert!(out.contains("next: [x] 2. Você chegou"), "{out}");
        assert!(out.contains(render::ARRIVED));

        let (_, out) = app.handle(Command::Steps).await;
        assert_eq!(out, "  [x] 1. Siga em frente\n> [x] 2. Você chegou");

        let (_, out) = app.handle(Command::Done(7)).await;
        assert!(out.contains("out of range"));
    }

    #[tokio::test]
    async fn unknown_place_keeps_route_untouched() {
        let mut app = app(false);
        app.handle(Command::Type {
            role: FieldRole::Origin,
            text: "Lugar Nenhum".into(),
        })
        .await;
        app.handle(Command::Type {
            role: FieldRole::Destination,
            text: "Avenida Paulista".into(),
        })
        .await;

        let (_, out) = app.handle(Command::Go).await;
        assert!(out.contains("Could not find"));
        assert!(app.session().active().is_none());
        assert!(app.map().line().is_none());
    }

    #[tokio::test]
    async fn logout_exits_only_on_success() {
        let (flow, _) = app(true).handle(Command::Logout).await;
        assert_eq!(flow, Flow::Continue);

        let (flow, out) = app(false).handle(Command::Logout).await;
        assert_eq!(flow, Flow::Exit);
        assert_eq!(out, "signed out");
    }

    #[tokio::test]
    async fn mode_switch_applies_to_next_route() {
        let mut app = app(false);
        app.handle(Command::Mode(TravelMode::Cycling)).await;
        assert_eq!(app.mode(), TravelMode::Cycling);
    }
}
