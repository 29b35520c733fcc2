use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed set of interactions the controller normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartEvent {
    Click,
    DoubleClick,
    RightClick,
    MouseOver,
}

impl ChartEvent {
    pub const ALL: [Self; 4] = [
        Self::Click,
        Self::DoubleClick,
        Self::RightClick,
        Self::MouseOver,
    ];

    /// The engine-side listener name this kind maps onto.
    #[must_use]
    pub const fn engine_event_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DoubleClick => "dblclick",
            Self::RightClick => "contextmenu",
            Self::MouseOver => "mouseover",
        }
    }
}

/// Immutable snapshot of one interaction, produced by the engine and passed
/// through to application callbacks unchanged.
///
/// Data payloads stay opaque JSON values; the controller never interprets
/// them. The one exception to pure pass-through is the right-click path,
/// which suppresses the platform default action before forwarding (see the
/// controller's listener sync).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEventParams {
    #[serde(rename = "type")]
    pub event: ChartEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<PointerEventInfo>,
}

impl ChartEventParams {
    #[must_use]
    pub fn new(event: ChartEvent) -> Self {
        Self {
            event,
            series_index: None,
            series_name: None,
            name: None,
            data_index: None,
            data: None,
            value: None,
            color: None,
            pointer: None,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series_index: usize, series_name: impl Into<String>) -> Self {
        self.series_index = Some(series_index);
        self.series_name = Some(series_name.into());
        self
    }

    /// Names the data entry the interaction landed on.
    #[must_use]
    pub fn with_entry(mut self, data_index: usize, name: impl Into<String>) -> Self {
        self.data_index = Some(data_index);
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerEventInfo) -> Self {
        self.pointer = Some(pointer);
        self
    }
}

/// Raw pointer payload accompanying mouse-driven interactions.
///
/// The native platform event is carried by reference and excluded from the
/// serde contract; it only exists so the right-click path can suppress the
/// platform's default action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEventInfo {
    pub offset_x: f64,
    pub offset_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    #[serde(default)]
    pub button: MouseButton,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(skip)]
    pub native: Option<NativeEventRef>,
}

impl PointerEventInfo {
    /// Pointer payload at the given page position; offsets start equal to the
    /// page coordinates until overridden.
    #[must_use]
    pub fn at(page_x: f64, page_y: f64) -> Self {
        Self {
            offset_x: page_x,
            offset_y: page_y,
            page_x,
            page_y,
            button: MouseButton::default(),
            ctrl_key: false,
            shift_key: false,
            alt_key: false,
            native: None,
        }
    }

    #[must_use]
    pub fn with_offsets(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    #[must_use]
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, ctrl_key: bool, shift_key: bool, alt_key: bool) -> Self {
        self.ctrl_key = ctrl_key;
        self.shift_key = shift_key;
        self.alt_key = alt_key;
        self
    }

    #[must_use]
    pub fn with_native(mut self, native: NativeEventRef) -> Self {
        self.native = Some(native);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Originating platform event, exposed only for default-action suppression.
pub trait NativeEvent {
    /// Suppresses the platform's default reaction to this event.
    fn prevent_default(&self);
}

/// Shared handle to a [`NativeEvent`].
///
/// Handlers run synchronously on the UI thread inside the engine's own
/// dispatch; the handle is not `Send`.
#[derive(Clone)]
pub struct NativeEventRef(Rc<dyn NativeEvent>);

impl NativeEventRef {
    #[must_use]
    pub fn new(event: impl NativeEvent + 'static) -> Self {
        Self(Rc::new(event))
    }

    pub fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

impl fmt::Debug for NativeEventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeEventRef")
    }
}
