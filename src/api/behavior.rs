use crate::core::ChartOption;
use crate::engine::ChartEngine;

use super::ChartController;

/// Per-chart extension point supplying the option document and optional
/// lifecycle hooks.
///
/// The controller takes the behavior out while a hook runs, so hooks receive
/// the controller mutably and can register handlers, dispatch actions, or
/// replace the document.
pub trait ChartBehavior<E: ChartEngine> {
    /// The declarative document the chart is initialized with.
    fn create_option(&mut self) -> ChartOption;

    /// One-time setup after the engine is live and the document applied.
    fn post_initialize(&mut self, chart: &mut ChartController<E>) {
        let _ = chart;
    }

    /// Auxiliary-resource teardown; runs before the engine is released.
    fn on_dispose(&mut self, chart: &mut ChartController<E>) {
        let _ = chart;
    }
}

/// A bare option document is a complete behavior: a static chart with no
/// hooks.
impl<E: ChartEngine> ChartBehavior<E> for ChartOption {
    fn create_option(&mut self) -> ChartOption {
        self.clone()
    }
}
