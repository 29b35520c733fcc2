//! The chart-engine seam.
//!
//! The engine's API surface is a fixed external contract the controller
//! wraps but does not alter: construction bound to a rendering surface,
//! wholesale option application, resize, loading toggles, action dispatch,
//! listener attach/detach, and teardown.

mod recording;

use serde::{Deserialize, Serialize};

use crate::core::ChartOption;
use crate::error::ChartResult;
use crate::events::{ChartEvent, ChartEventParams};

pub use recording::{RecordingEngine, RecordingLog};

/// Engine-side listener installed by the controller for one event kind.
pub type EventListener = Box<dyn FnMut(ChartEventParams)>;

pub trait ChartEngine {
    /// Rendering surface the engine binds to; opaque to the controller.
    type Surface;

    fn bind(surface: Self::Surface) -> ChartResult<Self>
    where
        Self: Sized;

    /// Applies `option` with full replace semantics: state from previously
    /// applied documents must not survive, merging is not permitted.
    fn apply_option(&mut self, option: &ChartOption);

    fn resize(&mut self);

    fn show_loading(&mut self, kind: LoadingKind, options: &LoadingOptions);

    fn hide_loading(&mut self);

    fn dispatch_action(&mut self, action: ChartAction);

    /// Attaches `listener` for `event`, replacing any previous listener the
    /// controller installed for that kind.
    fn on(&mut self, event: ChartEvent, listener: EventListener);

    fn off(&mut self, event: ChartEvent);

    fn dispose(&mut self);
}

/// Imperative chart actions dispatched outside the option document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ChartAction {
    #[serde(rename_all = "camelCase")]
    Highlight {
        series_index: Option<usize>,
        data_index: Option<usize>,
    },
    #[serde(rename_all = "camelCase")]
    Downplay {
        series_index: Option<usize>,
        data_index: Option<usize>,
    },
    #[serde(rename_all = "camelCase")]
    ShowTip { series_index: usize, data_index: usize },
    HideTip,
}

impl ChartAction {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Highlight { .. } => "highlight",
            Self::Downplay { .. } => "downplay",
            Self::ShowTip { .. } => "showTip",
            Self::HideTip => "hideTip",
        }
    }
}

/// Named loading effect; engines ship a single default effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadingKind {
    #[default]
    Default,
}

/// Presentation knobs for the loading overlay, with engine-default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadingOptions {
    pub text: String,
    pub color: String,
    pub text_color: String,
    pub mask_color: String,
    pub zlevel: i32,
    pub show_spinner: bool,
}

impl Default for LoadingOptions {
    fn default() -> Self {
        Self {
            text: "loading".to_owned(),
            color: "#c23531".to_owned(),
            text_color: "#000".to_owned(),
            mask_color: "rgba(255, 255, 255, 0.8)".to_owned(),
            zlevel: 0,
            show_spinner: true,
        }
    }
}

impl LoadingOptions {
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
