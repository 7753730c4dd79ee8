//! Map rendering seam.

use rota_core::{Bounds, FitOptions, RouteGeometry, RouteLineStyle};

/// Receives the route line and the viewport to show.
pub trait MapPresenter {
    /// Draw `geometry` as the route line, replacing any earlier one.
    fn draw_route(&mut self, geometry: &RouteGeometry, style: &RouteLineStyle);

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions);
}

/// Presenter for headless use.
#[derive(Debug, Default)]
pub struct NoopPresenter;

impl MapPresenter for NoopPresenter {
    fn draw_route(&mut self, _geometry: &RouteGeometry, _style: &RouteLineStyle) {}

    fn fit_bounds(&mut self, _bounds: Bounds, _options: FitOptions) {}
}
