mod params;
mod registry;

pub use params::{
    ChartEvent, ChartEventParams, MouseButton, NativeEvent, NativeEventRef, PointerEventInfo,
};
pub use registry::{EventHandler, EventHandlers, HandlerId, HandlerRegistry, ListenerDiff};
